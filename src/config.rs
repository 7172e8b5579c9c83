//! Form-level configuration.

use indexmap::IndexMap;

/// Default session namespace for forms that do not set their own identifier.
pub const DEFAULT_FORM_ID: &str = "hfc";

/// Recognized form options. Builder overrides always win over the defaults.
///
/// `action` of `None` means the form posts back to the current request's
/// path plus its query string.
///
/// # Examples
///
/// ```
/// use htmlform::FormConfig;
///
/// let config = FormConfig::new()
///     .with_method("get")
///     .with_id("search")
///     .with_repopulate(false);
/// assert_eq!(config.method, "get");
/// assert_eq!(config.id, "search");
///
/// let defaults = FormConfig::default();
/// assert_eq!(defaults.method, "post");
/// assert!(defaults.repopulate);
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
	pub method: String,
	pub action: Option<String>,
	/// Session namespace key; also the form tag id.
	pub id: String,
	/// Whether submitted values are persisted to the session for redisplay.
	pub repopulate: bool,
	/// Extra form tag attributes, compiled in insertion order.
	pub attrs: IndexMap<String, String>,
	/// Default wrapper HTML before each element.
	pub before_element: String,
	/// Default wrapper HTML after each element.
	pub after_element: String,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			method: "post".to_string(),
			action: None,
			id: DEFAULT_FORM_ID.to_string(),
			repopulate: true,
			attrs: IndexMap::new(),
			before_element: String::new(),
			after_element: String::new(),
		}
	}
}

impl FormConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_method(mut self, method: impl Into<String>) -> Self {
		self.method = method.into();
		self
	}

	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}

	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	pub fn with_repopulate(mut self, repopulate: bool) -> Self {
		self.repopulate = repopulate;
		self
	}

	pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	pub fn with_before_element(mut self, html: impl Into<String>) -> Self {
		self.before_element = html.into();
		self
	}

	pub fn with_after_element(mut self, html: impl Into<String>) -> Self {
		self.after_element = html.into();
		self
	}
}
