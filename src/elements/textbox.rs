//! Single-line text input.

use serde_json::Value;

use crate::element::{base_rules, input_tag, label_tag, value_text, Element, ElementConfig, Rule};

/// `<input type="text">` with a leading label.
///
/// # Examples
///
/// ```
/// use htmlform::{Element, ElementConfig, Textbox};
/// use serde_json::json;
///
/// let textbox = Textbox::new("city", "City", ElementConfig::new());
/// let html = textbox.compile(&json!("Oslo"));
/// assert!(html.contains("value=\"Oslo\""));
/// ```
#[derive(Debug, Clone)]
pub struct Textbox {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Textbox {
	pub fn new(name: impl Into<String>, label: impl Into<String>, config: ElementConfig) -> Self {
		let rules = base_rules(&config);
		Self {
			name: name.into(),
			label: label.into(),
			config,
			rules,
		}
	}
}

impl Element for Textbox {
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
		let mut html = label_tag(&self.name, &self.label);
		html.push_str(&input_tag("text", &self.name, &value_text(value), &self.config));
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_textbox_compile() {
		let textbox = Textbox::new("city", "City", ElementConfig::new());
		assert_eq!(
			textbox.compile(&json!("Oslo")),
			"<label for=\"city\">City</label><input type=\"text\" name=\"city\" id=\"city\" value=\"Oslo\" />"
		);
	}

	#[test]
	fn test_textbox_escapes_value() {
		let textbox = Textbox::new("q", "Search", ElementConfig::new());
		let html = textbox.compile(&json!("\"><script>"));
		assert!(!html.contains("\"><script>"));
		assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
	}

	#[test]
	fn test_required_textbox_declares_rule() {
		let textbox = Textbox::new("city", "City", ElementConfig::new().required());
		assert_eq!(textbox.rules(), &[Rule::Required]);
	}
}
