//! URL input.

use serde_json::Value;

use crate::element::{base_rules, input_tag, label_tag, value_text, Element, ElementConfig, Rule};

/// `<input type="url">`; submitted values must parse as an http(s) URL.
#[derive(Debug, Clone)]
pub struct Url {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Url {
	pub fn new(name: impl Into<String>, label: impl Into<String>, config: ElementConfig) -> Self {
		let mut rules = base_rules(&config);
		rules.push(Rule::Url);
		Self {
			name: name.into(),
			label: label.into(),
			config,
			rules,
		}
	}
}

impl Element for Url {
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
		html.push_str(&input_tag("url", &self.name, &value_text(value), &self.config));
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_url_input_type_and_rule() {
		let url = Url::new("site", "Website", ElementConfig::new());
		assert!(url.compile(&json!("")).contains("type=\"url\""));
		assert_eq!(url.rules(), &[Rule::Url]);
	}
}
