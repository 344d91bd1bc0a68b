use syn::{
	GenericArgument,
	PathArguments,
	PathSegment,
	Type,
};

/// Infer whether a type appears to be `Option<T>`; returns `T`.
pub fn option(ty: &Type) -> Option<&Type> {
	let last = selfless_last(ty)?;
	if last.ident != "Option" {
		return None;
	}

	if let PathArguments::AngleBracketed(args) = &last.arguments {
		if args.args.len() == 1 {
			if let Some(GenericArgument::Type(inner)) = args.args.first() {
				return Some(inner);
			}
		}
	}

	None
}

fn selfless_last(ty: &Type) -> Option<&PathSegment> {
	if let Type::Path(ty) = ty {
		if ty.qself.is_none() {
			return ty.path.segments.last();
		}
	}

	None
}
