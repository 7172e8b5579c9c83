//! Plain button.

use serde_json::Value;

use crate::element::{Element, ElementConfig};
use crate::escape::{attrs_to_string, escape_attr, escape_html};

/// `<button type="button">`; the label is the button text. Buttons ignore
/// the resolved value and are never validated.
#[derive(Debug, Clone)]
pub struct Button {
	name: String,
	label: String,
	config: ElementConfig,
}

impl Button {
	pub fn new(name: impl Into<String>, text: impl Into<String>, config: ElementConfig) -> Self {
		Self {
			name: name.into(),
			label: text.into(),
			config,
		}
	}
}

impl Element for Button {
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
			"<button type=\"button\" name=\"{}\" id=\"{}\"",
			escape_attr(&self.name),
			escape_attr(&self.name),
		);
		let attrs = attrs_to_string(&self.config.attrs);
		if !attrs.is_empty() {
			html.push(' ');
			html.push_str(&attrs);
		}
		html.push('>');
		html.push_str(&escape_html(&self.label));
		html.push_str("</button>");
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_button_text_ignores_value() {
		let button = Button::new("more", "Add another", ElementConfig::new());
		assert_eq!(
			button.compile(&json!("whatever")),
			"<button type=\"button\" name=\"more\" id=\"more\">Add another</button>"
		);
	}
}
