//! Email address input.

use serde_json::Value;

use crate::element::{base_rules, input_tag, label_tag, value_text, Element, ElementConfig, Rule};

/// `<input type="email">`; submitted values must parse as an email address.
#[derive(Debug, Clone)]
pub struct Email {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Email {
	pub fn new(name: impl Into<String>, label: impl Into<String>, config: ElementConfig) -> Self {
		let mut rules = base_rules(&config);
		rules.push(Rule::Email);
		Self {
			name: name.into(),
			label: label.into(),
			config,
			rules,
		}
	}
}

impl Element for Email {
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
		html.push_str(&input_tag("email", &self.name, &value_text(value), &self.config));
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_email_input_type() {
		let email = Email::new("email", "Email", ElementConfig::new());
		assert!(email.compile(&json!("a@b.cc")).contains("type=\"email\""));
	}

	#[test]
	fn test_email_declares_format_rule() {
		let email = Email::new("email", "Email", ElementConfig::new().required());
		assert_eq!(email.rules(), &[Rule::Required, Rule::Email]);
	}
}
