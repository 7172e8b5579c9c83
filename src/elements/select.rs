//! Drop-down selection.

use serde_json::Value;

use crate::element::{
	base_rules, label_tag, value_matches, Element, ElementConfig, Options, Rule,
};
use crate::escape::{attrs_to_string, escape_attr, escape_html};

/// `<select>` with one `<option>` per entry, marking the resolved value as
/// selected.
///
/// # Examples
///
/// ```
/// use htmlform::{Element, ElementConfig, Options, Select};
/// use serde_json::json;
///
/// let select = Select::new(
///     "color",
///     "Color",
///     Options::keyed([("r", "Red"), ("g", "Green")]),
///     ElementConfig::new(),
/// );
/// let html = select.compile(&json!("g"));
/// assert!(html.contains("<option value=\"g\" selected=\"selected\">Green</option>"));
/// ```
#[derive(Debug, Clone)]
pub struct Select {
	name: String,
	label: String,
	options: Options,
	config: ElementConfig,
	rules: Vec<Rule>,
}

impl Select {
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

	pub fn options(&self) -> &Options {
		&self.options
	}
}

impl Element for Select {
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
		html.push_str(&format!(
			"<select name=\"{}\" id=\"{}\"",
			escape_attr(&self.name),
			escape_attr(&self.name),
		));
		let attrs = attrs_to_string(&self.config.attrs);
		if !attrs.is_empty() {
			html.push(' ');
			html.push_str(&attrs);
		}
		html.push('>');
		for (submit_value, display) in self.options.pairs() {
			html.push_str(&format!("<option value=\"{}\"", escape_attr(submit_value)));
			if value_matches(value, submit_value) {
				html.push_str(" selected=\"selected\"");
			}
			html.push('>');
			html.push_str(&escape_html(display));
			html.push_str("</option>");
		}
		html.push_str("</select>");
		html
	}
}
