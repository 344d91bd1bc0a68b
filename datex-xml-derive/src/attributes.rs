use heck::ToLowerCamelCase;
use syn::{
	meta::ParseNestedMeta,
	Attribute,
};

/// Run `f` for every item in all `#[datex(...)]` attributes
pub fn for_each_datex_item(
	attrs: &[Attribute],
	mut f: impl FnMut(ParseNestedMeta<'_>) -> syn::Result<()>,
) -> syn::Result<()> {
	for attr in attrs {
		if attr.path().is_ident("datex") {
			attr.parse_nested_meta(&mut f)?;
		}
	}
	Ok(())
}

/// `start_of_period` -> `startOfPeriod`; leading underscores are kept (`_period_extension` ->
/// `_periodExtension`)
pub fn lower_camel_case(ident: &str) -> String {
	let ident = ident.strip_prefix("r#").unwrap_or(ident);
	let body = ident.trim_start_matches('_');
	let prefix = &ident[..ident.len() - body.len()];
	format!("{}{}", prefix, body.to_lower_camel_case())
}

#[cfg(test)]
mod test {
	use super::lower_camel_case;

	#[test]
	fn camel() {
		assert_eq!(lower_camel_case("start_of_period"), "startOfPeriod");
		assert_eq!(lower_camel_case("_period_extension"), "_periodExtension");
		assert_eq!(lower_camel_case("lang"), "lang");
		assert_eq!(lower_camel_case("r#type"), "type");
		assert_eq!(lower_camel_case("number_of_refill_points"), "numberOfRefillPoints");
	}
}
