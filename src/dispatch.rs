//! Resolution of dynamically-named `add<TypeName>` operations to element
//! constructors.
//!
//! The registry is a closed set: every constructible element type has a
//! variant in [`ElementKind`], and operation names resolve through a static
//! match. Unknown operations are an error, never silently ignored.

use crate::element::{Element, ElementConfig, Options};
use crate::elements;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
	/// The operation name does not follow `add<TypeName>`, or names an
	/// element type this registry does not know.
	#[error("`{0}` does not resolve to a known form element")]
	UnknownOperation(String),
	/// The operation resolved, but the argument bundle is incomplete for
	/// that element type.
	#[error("`{op}` called with incomplete arguments: {reason}")]
	BadArguments { op: String, reason: String },
}

/// Ordered argument bundle for an add operation.
///
/// Mirrors the positional argument lists of the add operations: every
/// element takes a name and a label (the label doubles as button text, or as
/// the raw HTML for a text block), choice elements additionally take
/// [`Options`], and range elements take numeric bounds.
///
/// # Examples
///
/// ```
/// use htmlform::{AddArgs, ElementConfig, Options};
///
/// let args = AddArgs::new("fruit", "Favorite fruit")
///     .with_options(Options::listed(["Apple", "Banana"]))
///     .with_config(ElementConfig::new().required());
/// assert_eq!(args.name, "fruit");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
	pub name: String,
	pub label: String,
	pub options: Option<Options>,
	pub min: Option<f64>,
	pub max: Option<f64>,
	pub config: ElementConfig,
}

impl AddArgs {
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			..Self::default()
		}
	}

	pub fn with_options(mut self, options: Options) -> Self {
		self.options = Some(options);
		self
	}

	pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
		self.min = Some(min);
		self.max = Some(max);
		self
	}

	pub fn with_config(mut self, config: ElementConfig) -> Self {
		self.config = config;
		self
	}
}

/// The closed set of constructible element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	Textbox,
	Textarea,
	Email,
	Number,
	Range,
	Url,
	Hidden,
	Password,
	Select,
	Radio,
	Checkbox,
	Text,
	Button,
	Submit,
	Honeypot,
}

impl ElementKind {
	/// Resolve an operation name of the form `add<TypeName>`.
	///
	/// The name must be the literal `add` followed by one or more ASCII
	/// letters naming a known element type.
	///
	/// # Examples
	///
	/// ```
	/// use htmlform::{DispatchError, ElementKind};
	///
	/// assert_eq!(ElementKind::resolve("addTextbox"), Ok(ElementKind::Textbox));
	/// assert_eq!(
	///     ElementKind::resolve("addBogus"),
	///     Err(DispatchError::UnknownOperation("addBogus".to_string()))
	/// );
	/// ```
	pub fn resolve(op: &str) -> Result<Self, DispatchError> {
		op.strip_prefix("add")
			.filter(|tag| !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_alphabetic()))
			.and_then(Self::from_tag)
			.ok_or_else(|| DispatchError::UnknownOperation(op.to_string()))
	}

	fn from_tag(tag: &str) -> Option<Self> {
		Some(match tag {
			"Textbox" => Self::Textbox,
			"Textarea" => Self::Textarea,
			"Email" => Self::Email,
			"Number" => Self::Number,
			"Range" => Self::Range,
			"Url" => Self::Url,
			"Hidden" => Self::Hidden,
			"Password" => Self::Password,
			"Select" => Self::Select,
			"Radio" => Self::Radio,
			"Checkbox" => Self::Checkbox,
			"Text" => Self::Text,
			"Button" => Self::Button,
			"Submit" => Self::Submit,
			"Honeypot" => Self::Honeypot,
			_ => return None,
		})
	}

	/// The `<TypeName>` half of this kind's operation name.
	pub fn tag(self) -> &'static str {
		match self {
			Self::Textbox => "Textbox",
			Self::Textarea => "Textarea",
			Self::Email => "Email",
			Self::Number => "Number",
			Self::Range => "Range",
			Self::Url => "Url",
			Self::Hidden => "Hidden",
			Self::Password => "Password",
			Self::Select => "Select",
			Self::Radio => "Radio",
			Self::Checkbox => "Checkbox",
			Self::Text => "Text",
			Self::Button => "Button",
			Self::Submit => "Submit",
			Self::Honeypot => "Honeypot",
		}
	}

	/// Construct an element of this kind from the argument bundle.
	pub fn construct(self, args: AddArgs) -> Result<Box<dyn Element>, DispatchError> {
		let AddArgs { name, label, options, min, max, config } = args;

		Ok(match self {
			Self::Textbox => Box::new(elements::Textbox::new(name, label, config)),
			Self::Textarea => Box::new(elements::Textarea::new(name, label, config)),
			Self::Email => Box::new(elements::Email::new(name, label, config)),
			Self::Number => Box::new(elements::Number::new(name, label, config)),
			Self::Url => Box::new(elements::Url::new(name, label, config)),
			Self::Hidden => Box::new(elements::Hidden::new(name, label, config)),
			Self::Password => Box::new(elements::Password::new(name, label, config)),
			Self::Text => Box::new(elements::Text::new(name, label)),
			Self::Button => Box::new(elements::Button::new(name, label, config)),
			Self::Submit => Box::new(elements::Submit::new(name, label, config)),
			Self::Honeypot => Box::new(elements::Honeypot::new(name, label, config)),
			Self::Range => {
				let (Some(min), Some(max)) = (min, max) else {
					return Err(self.bad_arguments("a numeric min and max are required"));
				};
				Box::new(elements::Range::new(name, label, min, max, config))
			}
			Self::Select => {
				let Some(options) = options else {
					return Err(self.bad_arguments("an options list is required"));
				};
				Box::new(elements::Select::new(name, label, options, config))
			}
			Self::Radio => {
				let Some(options) = options else {
					return Err(self.bad_arguments("an options list is required"));
				};
				Box::new(elements::Radio::new(name, label, options, config))
			}
			Self::Checkbox => {
				let Some(options) = options else {
					return Err(self.bad_arguments("an options list is required"));
				};
				Box::new(elements::Checkbox::new(name, label, options, config))
			}
		})
	}

	fn bad_arguments(self, reason: &str) -> DispatchError {
		DispatchError::BadArguments {
			op: format!("add{}", self.tag()),
			reason: reason.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("addTextbox", ElementKind::Textbox)]
	#[case("addSelect", ElementKind::Select)]
	#[case("addCheckbox", ElementKind::Checkbox)]
	#[case("addHoneypot", ElementKind::Honeypot)]
	fn test_resolve_known_operations(#[case] op: &str, #[case] expected: ElementKind) {
		assert_eq!(ElementKind::resolve(op), Ok(expected));
	}

	#[rstest]
	#[case("addBogus")] // unknown type name
	#[case("addtextbox")] // tags are case-sensitive
	#[case("add")] // no type name at all
	#[case("add123")] // digits are not letters
	#[case("add Textbox")] // embedded whitespace
	#[case("removeTextbox")] // wrong verb
	#[case("")]
	fn test_resolve_rejects_malformed_operations(#[case] op: &str) {
		assert_eq!(
			ElementKind::resolve(op),
			Err(DispatchError::UnknownOperation(op.to_string()))
		);
	}

	#[test]
	fn test_construct_select_without_options_fails() {
		let result = ElementKind::Select.construct(AddArgs::new("color", "Color"));
		assert_eq!(
			result.err(),
			Some(DispatchError::BadArguments {
				op: "addSelect".to_string(),
				reason: "an options list is required".to_string(),
			})
		);
	}

	#[test]
	fn test_construct_range_without_bounds_fails() {
		let result = ElementKind::Range.construct(AddArgs::new("level", "Level"));
		assert!(matches!(result, Err(DispatchError::BadArguments { .. })));
	}

	#[test]
	fn test_construct_textbox() {
		let element = ElementKind::Textbox
			.construct(AddArgs::new("city", "City"))
			.expect("complete arguments");
		assert_eq!(element.name(), "city");
		assert_eq!(element.label(), "City");
	}

	#[test]
	fn test_tag_round_trips_through_resolve() {
		for kind in [
			ElementKind::Textbox,
			ElementKind::Range,
			ElementKind::Submit,
			ElementKind::Text,
		] {
			let op = format!("add{}", kind.tag());
			assert_eq!(ElementKind::resolve(&op), Ok(kind));
		}
	}
}
