//! Password input.

use serde_json::Value;

use crate::element::{base_rules, input_tag, label_tag, value_text, Element, ElementConfig, Rule};

/// `<input type="password">` with a leading label.
#[derive(Debug, Clone)]
pub struct Password {
	name: String,
	label: String,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Password {
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

impl Element for Password {
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
		html.push_str(&input_tag("password", &self.name, &value_text(value), &self.config));
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_password_input_type() {
		let password = Password::new("secret", "Password", ElementConfig::new());
		assert!(password.compile(&json!("")).contains("type=\"password\""));
	}
}
