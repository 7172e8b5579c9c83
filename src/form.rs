//! The root form: configuration, value resolution, session repopulation,
//! validation delegation, and the full-document render.

use std::fmt;

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::config::FormConfig;
use crate::container::{Addable, Node, RenderContext};
use crate::element::{Element, ElementConfig};
use crate::elements::Honeypot;
use crate::escape::{attrs_to_string, escape_attr};
use crate::request::{RequestData, SessionStore};
use crate::validator::{render_errors, ValidationReport, Validator};

/// Label rendered on honeypot decoys. Legitimate users never see it.
const HONEYPOT_LABEL: &str = "Do not enter content here";

/// Deterministic decoy field name for a form id: the hex SHA-256 digest of
/// the id. Best-effort obfuscation only, not a security boundary.
///
/// # Examples
///
/// ```
/// use htmlform::honeypot_name;
///
/// let name = honeypot_name("hfc");
/// assert_eq!(name.len(), 64);
/// assert_eq!(name, honeypot_name("hfc"));
/// assert_ne!(name, honeypot_name("other"));
/// ```
pub fn honeypot_name(id: &str) -> String {
	let digest = Sha256::digest(id.as_bytes());
	digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// The root container and orchestrator.
///
/// A form is created per request with its request snapshot and session store
/// injected, populated during request setup, and validated and/or rendered
/// once per response. Validation and rendering are independent and both
/// repeatable.
///
/// # Examples
///
/// ```
/// use htmlform::{Addable, ElementConfig, Form, MemorySession, SimpleRequest};
///
/// let request = SimpleRequest::get("/contact");
/// let mut form = Form::new(Box::new(request), Box::new(MemorySession::new()));
/// form.add_textbox("name", "Your name", ElementConfig::new().required())
///     .add_submit("send", "Send", ElementConfig::new());
///
/// let html = form.render();
/// assert!(html.starts_with("<form method=\"post\" action=\"/contact\" id=\"hfc\">"));
/// assert!(html.ends_with("</form>"));
/// ```
pub struct Form {
	config: FormConfig,
	compiled_attrs: String,
	children: Vec<Node>,
	validator: Validator,
	request: Box<dyn RequestData>,
	session: Box<dyn SessionStore>,
	report: Option<ValidationReport>,
	manual_errors: Vec<String>,
}

impl Form {
	/// Create a form with default configuration.
	pub fn new(request: Box<dyn RequestData>, session: Box<dyn SessionStore>) -> Self {
		Self::with_config(FormConfig::default(), request, session)
	}

	/// Create a form with configuration overrides already applied.
	pub fn with_config(
		config: FormConfig,
		request: Box<dyn RequestData>,
		session: Box<dyn SessionStore>,
	) -> Self {
		let compiled_attrs = attrs_to_string(&config.attrs);
		Self {
			config,
			compiled_attrs,
			children: Vec::new(),
			validator: Validator::new(),
			request,
			session,
			report: None,
			manual_errors: Vec::new(),
		}
	}

	/// Replace the configuration and recompile the attribute string.
	///
	/// # Examples
	///
	/// ```
	/// use htmlform::{Addable, Form, FormConfig, MemorySession, SimpleRequest};
	///
	/// let mut form = Form::new(
	///     Box::new(SimpleRequest::get("/")),
	///     Box::new(MemorySession::new()),
	/// );
	/// form.set_config(FormConfig::new().with_method("get").with_id("search"));
	/// assert!(form.opening_tag().contains("method=\"get\""));
	/// assert!(form.opening_tag().contains("id=\"search\""));
	/// ```
	pub fn set_config(&mut self, config: FormConfig) -> &mut Self {
		self.compiled_attrs = attrs_to_string(&config.attrs);
		self.config = config;
		self
	}

	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	/// The form action: the configured target, or the current request path
	/// plus its query string.
	pub fn action(&self) -> String {
		match &self.config.action {
			Some(action) => action.clone(),
			None => {
				let query_string = self.request.query_string();
				if query_string.is_empty() {
					self.request.path().to_string()
				} else {
					format!("{}?{}", self.request.path(), query_string)
				}
			}
		}
	}

	/// Snapshot the submission into the session, run the validation pass,
	/// and report overall validity.
	///
	/// Returns `true` iff no field errors were found, the honeypot passed,
	/// and no manual error was injected.
	pub fn is_valid(&mut self) -> bool {
		self.save_to_session();

		let resolver = |element: &dyn Element| self.resolve_value(element);
		let report = self.validator.validate(&self.children, &resolver);

		let valid = report.is_clean() && self.manual_errors.is_empty();
		self.report = Some(report);
		valid
	}

	/// Whether the honeypot check passed, independent of other field errors.
	/// `true` until a validation pass has run.
	pub fn passed_honeypot(&self) -> bool {
		self.report.as_ref().is_none_or(|report| !report.honeypot_error)
	}

	/// Inject an additional error, merged into the rendered error list.
	pub fn set_error_message(&mut self, message: impl Into<String>) {
		self.manual_errors.push(message.into());
	}

	/// Result of the last validation pass, if one has run.
	pub fn validation_report(&self) -> Option<&ValidationReport> {
		self.report.as_ref()
	}

	/// Add a hidden decoy field named by a digest of the form id.
	///
	/// Any non-empty submission under that name marks the whole submission
	/// as a bot fill-in, detected during [`is_valid`](Self::is_valid) and
	/// queryable through [`passed_honeypot`](Self::passed_honeypot).
	pub fn add_honeypot(&mut self, config: ElementConfig) -> &mut Self {
		let name = honeypot_name(&self.config.id);
		self.push_element(Box::new(Honeypot::new(name, HONEYPOT_LABEL, config)))
	}

	/// Render the error block (if any) followed by the full form.
	///
	/// Rendering does not consume or mutate anything; the same form renders
	/// the same HTML every time.
	pub fn render(&self) -> String {
		let mut html = render_errors(self.report.as_ref(), &self.manual_errors);

		let resolver = |element: &dyn Element| self.resolve_value(element);
		let ctx = RenderContext {
			resolver: &resolver,
			before_default: &self.config.before_element,
			after_default: &self.config.after_element,
		};
		html.push_str(&self.render_tree(&ctx));
		html
	}

	fn save_to_session(&self) {
		if !self.config.repopulate {
			return;
		}
		let submitted = self.request.submitted();
		for (key, value) in submitted {
			self.session.set(&self.config.id, key, value.clone());
		}
		tracing::debug!(
			form = %self.config.id,
			fields = submitted.len(),
			"submission snapshot saved to session"
		);
	}

	/// Resolve an element's current value: session (when repopulating),
	/// then submitted data, then the declared default, then empty.
	fn resolve_value(&self, element: &dyn Element) -> Value {
		let name = element.name();
		if name.is_empty() {
			return Value::String(String::new());
		}

		if self.config.repopulate
			&& let Some(value) = self.session.get(&self.config.id, name)
		{
			return value;
		}

		if let Some(value) = self.request.submitted().get(name) {
			return value.clone();
		}

		if let Some(value) = &element.config().default_value {
			return value.clone();
		}

		Value::String(String::new())
	}
}

impl Addable for Form {
	fn children(&self) -> &[Node] {
		&self.children
	}

	fn children_mut(&mut self) -> &mut Vec<Node> {
		&mut self.children
	}

	fn opening_tag(&self) -> String {
		let mut html = format!(
			"<form method=\"{}\" action=\"{}\" id=\"{}\"",
			escape_attr(&self.config.method),
			escape_attr(&self.action()),
			escape_attr(&self.config.id),
		);
		if !self.compiled_attrs.is_empty() {
			html.push(' ');
			html.push_str(&self.compiled_attrs);
		}
		html.push('>');
		html
	}

	fn closing_tag(&self) -> String {
		"</form>".to_string()
	}
}

impl fmt::Display for Form {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
