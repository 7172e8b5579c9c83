//! Radio button group.

use serde_json::Value;

use crate::element::{
	base_rules, value_matches, Element, ElementConfig, Options, Rule,
};
use crate::escape::{attrs_to_string, escape_attr, escape_html};

/// A group of `<input type="radio">` controls sharing one name.
#[derive(Debug, Clone)]
pub struct Radio {
	name: String,
	label: String,
	options: Options,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Radio {
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
}

impl Element for Radio {
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
			html.push_str("<span><input type=\"radio\"");
			if !attrs.is_empty() {
				html.push(' ');
				html.push_str(&attrs);
			}
			html.push_str(&format!(
				" name=\"{}\" value=\"{}\"",
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
