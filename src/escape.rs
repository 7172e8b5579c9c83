//! HTML escaping and attribute-string compilation.

use indexmap::IndexMap;

/// Escape text for an HTML body context.
///
/// Escapes the five critical characters: `<`, `>`, `&`, `"`, `'`.
///
/// # Examples
///
/// ```
/// use htmlform::escape_html;
///
/// let result = escape_html("<script>alert(1)</script>");
/// assert_eq!(result, "&lt;script&gt;alert(1)&lt;/script&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#x27;"),
			_ => output.push(ch),
		}
	}
	output
}

/// Escape text for an HTML attribute context.
///
/// Escapes the six critical characters: `<`, `>`, `&`, `"`, `'`, `` ` ``.
///
/// # Examples
///
/// ```
/// use htmlform::escape_attr;
///
/// let result = escape_attr(r#"" onclick="alert(1)"#);
/// assert!(!result.contains('"'));
/// ```
pub fn escape_attr(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#x27;"),
			'`' => output.push_str("&#x60;"),
			_ => output.push(ch),
		}
	}
	output
}

/// Compile an ordered attribute map into a `name="value"` string.
///
/// Insertion order is preserved; values are attribute-escaped. Returns an
/// empty string for an empty map so callers can decide about separators.
///
/// # Examples
///
/// ```
/// use htmlform::attrs_to_string;
/// use indexmap::IndexMap;
///
/// let mut attrs = IndexMap::new();
/// attrs.insert("class".to_string(), "wide".to_string());
/// attrs.insert("data-role".to_string(), "main".to_string());
///
/// assert_eq!(attrs_to_string(&attrs), r#"class="wide" data-role="main""#);
/// ```
pub fn attrs_to_string(attrs: &IndexMap<String, String>) -> String {
	let mut parts = Vec::with_capacity(attrs.len());
	for (name, value) in attrs {
		parts.push(format!("{}=\"{}\"", name, escape_attr(value)));
	}
	parts.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_html_critical_characters() {
		assert_eq!(escape_html("a & b"), "a &amp; b");
		assert_eq!(escape_html("<b>"), "&lt;b&gt;");
		assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
		assert_eq!(escape_html("it's"), "it&#x27;s");
	}

	#[test]
	fn test_escape_html_passthrough() {
		assert_eq!(escape_html("plain text 123"), "plain text 123");
		assert_eq!(escape_html(""), "");
	}

	#[test]
	fn test_escape_attr_backtick() {
		assert_eq!(escape_attr("`x`"), "&#x60;x&#x60;");
	}

	#[test]
	fn test_attrs_to_string_preserves_insertion_order() {
		let mut attrs = IndexMap::new();
		attrs.insert("z-index".to_string(), "1".to_string());
		attrs.insert("class".to_string(), "input".to_string());
		attrs.insert("autofocus".to_string(), "autofocus".to_string());

		assert_eq!(
			attrs_to_string(&attrs),
			r#"z-index="1" class="input" autofocus="autofocus""#
		);
	}

	#[test]
	fn test_attrs_to_string_escapes_values() {
		let mut attrs = IndexMap::new();
		attrs.insert("title".to_string(), "say \"hi\"".to_string());

		assert_eq!(attrs_to_string(&attrs), "title=\"say &quot;hi&quot;\"");
	}

	#[test]
	fn test_attrs_to_string_empty() {
		assert_eq!(attrs_to_string(&IndexMap::new()), "");
	}
}
