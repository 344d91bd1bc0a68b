use crate::{
	parser::{
		ElementParser,
		ElementState,
	},
	scalar::Scalar,
	Result,
};
use std::marker::PhantomData;

/// `ElementState` for elements with simple content: collects the text and parses it with
/// [`Scalar::parse`].
pub struct ValueState<T> {
	text: String,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Scalar> ElementState for ValueState<T> {
	type Output = T;

	const EMPTY_MEANS_ABSENT: bool = true;

	fn parse_element_start(_parser: &ElementParser<'_>) -> Result<Self> {
		Ok(Self {
			text: String::new(),
			_marker: PhantomData,
		})
	}

	fn parse_element_inner_text(&mut self, text: &str) -> Result<()> {
		self.text += text;
		Ok(())
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		T::parse(&self.text)
	}
}
