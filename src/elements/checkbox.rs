//! Checkbox group with multi-value submissions.

use serde_json::Value;

use crate::element::{
	base_rules, value_matches, Element, ElementConfig, Options, Rule,
};
use crate::escape::{attrs_to_string, escape_attr, escape_html};

/// A group of `<input type="checkbox">` controls submitting under one
/// array-style name.
///
/// Keyed options mark a box when its key equals the resolved value or is
/// contained in a multi-valued submission; listed options compare the
/// display value itself.
///
/// # Examples
///
/// ```
/// use htmlform::{Checkbox, Element, ElementConfig, Options};
/// use serde_json::json;
///
/// let checkbox = Checkbox::new(
///     "fruit",
///     "Fruit",
///     Options::keyed([("a", "Apple"), ("b", "Banana")]),
///     ElementConfig::new(),
/// );
/// let html = checkbox.compile(&json!(["a"]));
/// assert!(html.contains("value=\"a\" checked=\"checked\""));
/// assert!(!html.contains("value=\"b\" checked=\"checked\""));
/// ```
#[derive(Debug, Clone)]
pub struct Checkbox {
	name: String,
	label: String,
	options: Options,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Checkbox {
	pub fn new(
		name: impl Into<String>,
		label: impl Into<String>,
		options: Options,
		config: ElementConfig,
	) -> Self {
		let rules = base_rules(&config);
		Self {
			name: name.into(),
			label: label.into(),
			options,
			config,
			rules,
		}
	}

	pub fn options(&self) -> &Options {
		&self.options
	}
}

impl Element for Checkbox {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn config(&self) -> &ElementConfig {
		&self.config
	}

	fn rules(&self) -> &[Rule] {
		&self.rules
	}

	fn compile(&self, value: &Value) -> String {
		let mut html = escape_html(&self.label);
		let attrs = attrs_to_string(&self.config.attrs);
		for (submit_value, display) in self.options.pairs() {
			html.push_str("<span><input type=\"checkbox\"");
			if !attrs.is_empty() {
				html.push(' ');
				html.push_str(&attrs);
			}
			html.push_str(&format!(
				" name=\"{}[]\" value=\"{}\"",
				escape_attr(&self.name),
				escape_attr(submit_value),
			));
			if value_matches(value, submit_value) {
				html.push_str(" checked=\"checked\"");
			}
			html.push_str(&format!(" /> {}</span>", escape_html(display)));
		}
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn keyed_checkbox() -> Checkbox {
		Checkbox::new(
			"fruit",
			"Fruit",
			Options::keyed([("a", "Apple"), ("b", "Banana")]),
			ElementConfig::new(),
		)
	}

	#[test]
	fn test_keyed_options_mark_by_key() {
		let html = keyed_checkbox().compile(&json!(["a"]));
		assert!(html.contains("name=\"fruit[]\" value=\"a\" checked=\"checked\" /> Apple"));
		assert!(html.contains("name=\"fruit[]\" value=\"b\" /> Banana"));
	}

	#[test]
	fn test_keyed_options_match_scalar_value() {
		let html = keyed_checkbox().compile(&json!("b"));
		assert!(html.contains("value=\"b\" checked=\"checked\""));
		assert!(!html.contains("value=\"a\" checked=\"checked\""));
	}

	#[test]
	fn test_listed_options_mark_by_value() {
		let checkbox = Checkbox::new(
			"fruit",
			"Fruit",
			Options::listed(["Apple", "Banana"]),
			ElementConfig::new(),
		);
		let html = checkbox.compile(&json!("Banana"));
		assert!(html.contains("value=\"Banana\" checked=\"checked\""));
		assert!(!html.contains("value=\"Apple\" checked=\"checked\""));
	}

	#[test]
	fn test_multiple_values_mark_multiple_boxes() {
		let html = keyed_checkbox().compile(&json!(["a", "b"]));
		assert_eq!(html.matches("checked=\"checked\"").count(), 2);
	}

	#[test]
	fn test_empty_value_marks_nothing() {
		let html = keyed_checkbox().compile(&json!(""));
		assert!(!html.contains("checked"));
	}
}
