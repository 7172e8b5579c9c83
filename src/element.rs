//! The `Element` trait and the shared pieces every leaf control is built
//! from: per-element configuration, choice options, validation rule tags,
//! and the render helpers the concrete elements compose.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::escape::{attrs_to_string, escape_attr, escape_html};

/// Per-element configuration accepted by every `add*` operation.
///
/// Everything here is optional; the zero value is a plain, optional element
/// with no extra markup.
///
/// # Examples
///
/// ```
/// use htmlform::ElementConfig;
///
/// let config = ElementConfig::new()
///     .required()
///     .with_default("hello")
///     .with_attr("class", "wide");
/// assert!(config.required);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementConfig {
	/// Whether the validator treats an empty submission as an error.
	pub required: bool,
	/// Value used when neither session nor submitted data carry one.
	pub default_value: Option<Value>,
	/// Extra HTML attributes compiled into the control tag, in order.
	pub attrs: IndexMap<String, String>,
	/// Wrapper HTML before this element, overriding the form default.
	pub before_html: Option<String>,
	/// Wrapper HTML after this element, overriding the form default.
	pub after_html: Option<String>,
}

impl ElementConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_default(mut self, value: impl Into<Value>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	pub fn with_before_html(mut self, html: impl Into<String>) -> Self {
		self.before_html = Some(html.into());
		self
	}

	pub fn with_after_html(mut self, html: impl Into<String>) -> Self {
		self.after_html = Some(html.into());
		self
	}
}

/// Choice options for select, radio, and checkbox elements.
///
/// `Keyed` options submit the key and display the label; `Listed` options use
/// the same string for both. Insertion order is preserved through rendering.
///
/// # Examples
///
/// ```
/// use htmlform::Options;
///
/// let keyed = Options::keyed([("a", "Apple"), ("b", "Banana")]);
/// assert!(keyed.is_keyed());
/// assert_eq!(keyed.pairs(), vec![("a", "Apple"), ("b", "Banana")]);
///
/// let listed = Options::listed(["Apple", "Banana"]);
/// assert_eq!(listed.pairs(), vec![("Apple", "Apple"), ("Banana", "Banana")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Options {
	Keyed(IndexMap<String, String>),
	Listed(Vec<String>),
}

impl Options {
	pub fn keyed<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Options::Keyed(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}

	pub fn listed<I, S>(items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Options::Listed(items.into_iter().map(Into::into).collect())
	}

	pub fn is_keyed(&self) -> bool {
		matches!(self, Options::Keyed(_))
	}

	pub fn len(&self) -> usize {
		match self {
			Options::Keyed(map) => map.len(),
			Options::Listed(items) => items.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The options as `(submit value, display label)` pairs, in order.
	pub fn pairs(&self) -> Vec<(&str, &str)> {
		match self {
			Options::Keyed(map) => map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect(),
			Options::Listed(items) => items.iter().map(|v| (v.as_str(), v.as_str())).collect(),
		}
	}
}

/// Validation rule tag declared by an element and interpreted by the
/// [`Validator`](crate::Validator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
	Required,
	Email,
	Url,
	Number,
	Range { min: f64, max: f64 },
}

/// One form control.
///
/// Elements are immutable after construction. The resolved render-time value
/// is passed into [`compile`](Element::compile) and never stored on the
/// element, so the same element renders consistently under different values.
pub trait Element {
	/// Field identifier; doubles as the request key. Empty for elements
	/// that submit nothing (raw text blocks).
	fn name(&self) -> &str;

	fn label(&self) -> &str;

	fn config(&self) -> &ElementConfig;

	/// Rule tags the validator checks against the resolved value.
	fn rules(&self) -> &[Rule] {
		&[]
	}

	/// Whether a non-empty submission for this element signals a bot.
	fn is_honeypot(&self) -> bool {
		false
	}

	/// Render this element's HTML for the resolved value.
	fn compile(&self, value: &Value) -> String;
}

/// Rules shared by every named element: just `Required` when configured.
pub(crate) fn base_rules(config: &ElementConfig) -> Vec<Rule> {
	if config.required { vec![Rule::Required] } else { Vec::new() }
}

pub(crate) fn label_tag(name: &str, label: &str) -> String {
	format!("<label for=\"{}\">{}</label>", escape_attr(name), escape_html(label))
}

/// `<input>` tag shared by the single-valued text-style elements.
pub(crate) fn input_tag(input_type: &str, name: &str, value: &str, config: &ElementConfig) -> String {
	let mut html = format!(
		"<input type=\"{}\" name=\"{}\" id=\"{}\" value=\"{}\"",
		input_type,
		escape_attr(name),
		escape_attr(name),
		escape_attr(value),
	);
	let attrs = attrs_to_string(&config.attrs);
	if !attrs.is_empty() {
		html.push(' ');
		html.push_str(&attrs);
	}
	html.push_str(" />");
	html
}

/// String form of a resolved value for single-valued controls.
pub(crate) fn value_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		Value::Array(items) => items
			.iter()
			.map(value_text)
			.collect::<Vec<_>>()
			.join(", "),
		other => other.to_string(),
	}
}

/// Whether `candidate` equals the resolved value, or is contained in a
/// multi-valued submission.
pub(crate) fn value_matches(value: &Value, candidate: &str) -> bool {
	match value {
		Value::String(s) => s == candidate,
		Value::Array(items) => items.iter().any(|item| item.as_str() == Some(candidate)),
		_ => false,
	}
}

pub(crate) fn value_is_empty(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.is_empty(),
		Value::Array(items) => items.is_empty() || items.iter().all(value_is_empty),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_options_keyed_pairs_preserve_order() {
		let options = Options::keyed([("z", "Zebra"), ("a", "Apple")]);
		assert_eq!(options.pairs(), vec![("z", "Zebra"), ("a", "Apple")]);
	}

	#[test]
	fn test_options_listed_value_doubles_as_label() {
		let options = Options::listed(["One", "Two"]);
		assert!(!options.is_keyed());
		assert_eq!(options.pairs(), vec![("One", "One"), ("Two", "Two")]);
	}

	#[test]
	fn test_value_text() {
		assert_eq!(value_text(&json!("hello")), "hello");
		assert_eq!(value_text(&json!(null)), "");
		assert_eq!(value_text(&json!(42)), "42");
		assert_eq!(value_text(&json!(["a", "b"])), "a, b");
	}

	#[test]
	fn test_value_matches_scalar_and_array() {
		assert!(value_matches(&json!("a"), "a"));
		assert!(!value_matches(&json!("a"), "b"));
		assert!(value_matches(&json!(["a", "b"]), "b"));
		assert!(!value_matches(&json!(["a"]), "b"));
		assert!(!value_matches(&json!(null), ""));
	}

	#[test]
	fn test_value_is_empty() {
		assert!(value_is_empty(&json!(null)));
		assert!(value_is_empty(&json!("")));
		assert!(value_is_empty(&json!([])));
		assert!(value_is_empty(&json!([""])));
		assert!(!value_is_empty(&json!("x")));
		assert!(!value_is_empty(&json!(["x"])));
		assert!(!value_is_empty(&json!(0)));
	}

	#[test]
	fn test_input_tag_includes_config_attrs() {
		let config = ElementConfig::new().with_attr("class", "wide");
		let html = input_tag("text", "city", "Oslo", &config);
		assert_eq!(
			html,
			r#"<input type="text" name="city" id="city" value="Oslo" class="wide" />"#
		);
	}

	#[test]
	fn test_base_rules_required_only() {
		assert!(base_rules(&ElementConfig::new()).is_empty());
		assert_eq!(base_rules(&ElementConfig::new().required()), vec![Rule::Required]);
	}
}
