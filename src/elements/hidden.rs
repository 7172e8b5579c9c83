//! Hidden input.

use serde_json::Value;

use crate::element::{base_rules, input_tag, value_text, Element, ElementConfig, Rule};

/// `<input type="hidden">`. No label is rendered; the label argument is kept
/// only as descriptive metadata.
#[derive(Debug, Clone)]
pub struct Hidden {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Hidden {
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

impl Element for Hidden {
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
		input_tag("hidden", &self.name, &value_text(value), &self.config)
	}
}
