//! Raw HTML passthrough block.

use serde_json::Value;

use crate::element::{Element, ElementConfig};

/// A block of caller-supplied HTML carried verbatim through rendering.
///
/// The name is only an identifier; a text block submits nothing, resolves no
/// value, and is never validated.
#[derive(Debug, Clone)]
pub struct Text {
	name: String,
	html: String,
	config: ElementConfig,
}

impl Text {
	pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			html: html.into(),
			config: ElementConfig::default(),
		}
	}
}

impl Element for Text {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		""
	}

	fn config(&self) -> &ElementConfig {
		&self.config
	}

	fn compile(&self, _value: &Value) -> String {
		self.html.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_text_renders_html_verbatim() {
		let text = Text::new("intro", "<p>Fill out <em>everything</em>.</p>");
		assert_eq!(
			text.compile(&json!("ignored")),
			"<p>Fill out <em>everything</em>.</p>"
		);
	}

	#[test]
	fn test_text_declares_no_rules() {
		let text = Text::new("intro", "<p>hi</p>");
		assert!(text.rules().is_empty());
	}
}
