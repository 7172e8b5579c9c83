//! Multi-line text input.

use serde_json::Value;

use crate::element::{base_rules, label_tag, value_text, Element, ElementConfig, Rule};
use crate::escape::{attrs_to_string, escape_attr, escape_html};

/// `<textarea>` with a leading label; the resolved value becomes the
/// escaped tag body.
#[derive(Debug, Clone)]
pub struct Textarea {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Textarea {
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

impl Element for Textarea {
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
		html.push_str(&format!(
			"<textarea name=\"{}\" id=\"{}\"",
			escape_attr(&self.name),
			escape_attr(&self.name),
		));
		let attrs = attrs_to_string(&self.config.attrs);
		if !attrs.is_empty() {
			html.push(' ');
			html.push_str(&attrs);
		}
		html.push('>');
		html.push_str(&escape_html(&value_text(value)));
		html.push_str("</textarea>");
		html
	}
}
