//! Numeric input.

use serde_json::Value;

use crate::element::{base_rules, input_tag, label_tag, value_text, Element, ElementConfig, Rule};

/// `<input type="number">`; submitted values must parse as a number.
#[derive(Debug, Clone)]
pub struct Number {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Number {
	pub fn new(name: impl Into<String>, label: impl Into<String>, config: ElementConfig) -> Self {
		let mut rules = base_rules(&config);
		rules.push(Rule::Number);
		Self {
			name: name.into(),
			label: label.into(),
			config,
			rules,
		}
	}
}

impl Element for Number {
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
		html.push_str(&input_tag("number", &self.name, &value_text(value), &self.config));
		html
	}
}
