//! Bounded numeric slider.

use serde_json::Value;

use crate::element::{base_rules, input_tag, label_tag, value_text, Element, ElementConfig, Rule};

/// `<input type="range">` with numeric bounds.
///
/// The bounds become `min`/`max` tag attributes (unless the caller supplied
/// their own) and a validation rule rejecting out-of-range submissions.
#[derive(Debug, Clone)]
pub struct Range {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Range {
	pub fn new(
		name: impl Into<String>,
		label: impl Into<String>,
		min: f64,
		max: f64,
		mut config: ElementConfig,
	) -> Self {
		config
			.attrs
			.entry("min".to_string())
			.or_insert_with(|| min.to_string());
		config
			.attrs
			.entry("max".to_string())
			.or_insert_with(|| max.to_string());

		let mut rules = base_rules(&config);
		rules.push(Rule::Number);
		rules.push(Rule::Range { min, max });
		Self {
			name: name.into(),
			label: label.into(),
			config,
			rules,
		}
	}
}

impl Element for Range {
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
		html.push_str(&input_tag("range", &self.name, &value_text(value), &self.config));
		html
	}
}
