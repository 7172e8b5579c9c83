//! Submit button.

use serde_json::Value;

use crate::element::{Element, ElementConfig};
use crate::escape::{attrs_to_string, escape_attr};

/// `<input type="submit">`; the label is the button text and the tag value,
/// regardless of any submitted data.
#[derive(Debug, Clone)]
pub struct Submit {
	name: String,
	label: String,
	config: ElementConfig,
}

impl Submit {
	pub fn new(name: impl Into<String>, text: impl Into<String>, config: ElementConfig) -> Self {
		Self {
			name: name.into(),
			label: text.into(),
			config,
		}
	}
}

impl Element for Submit {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn config(&self) -> &ElementConfig {
		&self.config
	}

	fn compile(&self, _value: &Value) -> String {
		let mut html = format!(
			"<input type=\"submit\" name=\"{}\" id=\"{}\" value=\"{}\"",
			escape_attr(&self.name),
			escape_attr(&self.name),
			escape_attr(&self.label),
		);
		let attrs = attrs_to_string(&self.config.attrs);
		if !attrs.is_empty() {
			html.push(' ');
			html.push_str(&attrs);
		}
		html.push_str(" />");
		html
	}
}
