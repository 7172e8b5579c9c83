//! Bot-detection decoy field.

use serde_json::Value;

use crate::element::{Element, ElementConfig};
use crate::escape::{escape_attr, escape_html};

/// A decoy text input hidden from legitimate users.
///
/// The field renders inside a `display:none` wrapper with tab focus and
/// autocomplete disabled, so only automated form fillers populate it. The
/// rendered value is always empty; a non-empty submission flags the whole
/// form as a bot fill-in.
#[derive(Debug, Clone)]
pub struct Honeypot {
	name: String,
	label: String,
	config: ElementConfig,
}

impl Honeypot {
	pub fn new(name: impl Into<String>, label: impl Into<String>, config: ElementConfig) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			config,
		}
	}
}

impl Element for Honeypot {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn config(&self) -> &ElementConfig {
		&self.config
	}

	fn is_honeypot(&self) -> bool {
		true
	}

	// The resolved value is deliberately not rendered: a legitimate
	// resubmission must come back empty.
	fn compile(&self, _value: &Value) -> String {
		let name = escape_attr(&self.name);
		format!(
			"<div style=\"display:none\"><label for=\"{}\">{}</label><input type=\"text\" name=\"{}\" id=\"{}\" tabindex=\"-1\" autocomplete=\"off\" /></div>",
			name,
			escape_html(&self.label),
			name,
			name,
		)
	}
}
