//! Injected request and session collaborators.
//!
//! The form core never touches ambient request or session state; both are
//! behind traits supplied at construction, so the library is testable
//! without simulating a live request environment. Everything here is
//! synchronous: one form is built and consumed within one request-response
//! cycle.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;

/// Ordered submitted-data mapping, field name to value.
pub type Params = IndexMap<String, Value>;

/// Read-only view of the current HTTP request.
pub trait RequestData {
	/// Lowercased verb comparison is the caller's concern; implementations
	/// return the method as received.
	fn method(&self) -> &str;

	fn path(&self) -> &str;

	fn query_string(&self) -> &str;

	fn query(&self) -> &Params;

	fn body(&self) -> &Params;

	/// The data set matching the current request method: the body for POST
	/// submissions, the query otherwise.
	fn submitted(&self) -> &Params {
		if self.method().eq_ignore_ascii_case("post") {
			self.body()
		} else {
			self.query()
		}
	}
}

/// Mutable session mapping, keyed by form identifier then field name.
pub trait SessionStore {
	fn get(&self, namespace: &str, key: &str) -> Option<Value>;

	fn set(&self, namespace: &str, key: &str, value: Value);
}

/// A plain request snapshot with builder-style construction.
///
/// # Examples
///
/// ```
/// use htmlform::{RequestData, SimpleRequest};
///
/// let request = SimpleRequest::post("/signup")
///     .with_body_param("name", "Ada")
///     .with_query_param("ref", "footer");
///
/// assert_eq!(request.method(), "post");
/// assert_eq!(request.submitted().get("name").unwrap(), "Ada");
/// ```
#[derive(Debug, Clone)]
pub struct SimpleRequest {
	method: String,
	path: String,
	query_string: String,
	query: Params,
	body: Params,
}

impl SimpleRequest {
	pub fn get(path: impl Into<String>) -> Self {
		Self {
			method: "get".to_string(),
			path: path.into(),
			query_string: String::new(),
			query: Params::new(),
			body: Params::new(),
		}
	}

	pub fn post(path: impl Into<String>) -> Self {
		Self {
			method: "post".to_string(),
			..Self::get(path)
		}
	}

	pub fn with_method(mut self, method: impl Into<String>) -> Self {
		self.method = method.into();
		self
	}

	pub fn with_query_string(mut self, query_string: impl Into<String>) -> Self {
		self.query_string = query_string.into();
		self
	}

	pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.query.insert(name.into(), value.into());
		self
	}

	pub fn with_body_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.body.insert(name.into(), value.into());
		self
	}
}

impl Default for SimpleRequest {
	fn default() -> Self {
		Self::get("/")
	}
}

impl RequestData for SimpleRequest {
	fn method(&self) -> &str {
		&self.method
	}

	fn path(&self) -> &str {
		&self.path
	}

	fn query_string(&self) -> &str {
		&self.query_string
	}

	fn query(&self) -> &Params {
		&self.query
	}

	fn body(&self) -> &Params {
		&self.body
	}
}

/// In-memory session store.
///
/// Clones share the same underlying map, so a test (or a single-process
/// integration) can keep one handle and hand another to the form.
///
/// # Examples
///
/// ```
/// use htmlform::{MemorySession, SessionStore};
/// use serde_json::json;
///
/// let session = MemorySession::new();
/// let handle = session.clone();
///
/// session.set("hfc", "name", json!("Ada"));
/// assert_eq!(handle.get("hfc", "name"), Some(json!("Ada")));
/// assert_eq!(handle.get("other", "name"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
	entries: Arc<Mutex<HashMap<String, HashMap<String, Value>>>>,
}

impl MemorySession {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SessionStore for MemorySession {
	fn get(&self, namespace: &str, key: &str) -> Option<Value> {
		self.entries
			.lock()
			.get(namespace)
			.and_then(|ns| ns.get(key))
			.cloned()
	}

	fn set(&self, namespace: &str, key: &str, value: Value) {
		self.entries
			.lock()
			.entry(namespace.to_string())
			.or_default()
			.insert(key.to_string(), value);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_submitted_matches_method() {
		let request = SimpleRequest::post("/f")
			.with_query_param("q", "from-query")
			.with_body_param("q", "from-body");
		assert_eq!(request.submitted().get("q").unwrap(), "from-body");

		let request = request.with_method("GET");
		assert_eq!(request.submitted().get("q").unwrap(), "from-query");
	}

	#[test]
	fn test_submitted_preserves_insertion_order() {
		let request = SimpleRequest::post("/f")
			.with_body_param("z", "1")
			.with_body_param("a", "2");
		let keys: Vec<&String> = request.submitted().keys().collect();
		assert_eq!(keys, vec!["z", "a"]);
	}

	#[test]
	fn test_memory_session_namespacing() {
		let session = MemorySession::new();
		session.set("form-a", "field", json!("a"));
		session.set("form-b", "field", json!("b"));

		assert_eq!(session.get("form-a", "field"), Some(json!("a")));
		assert_eq!(session.get("form-b", "field"), Some(json!("b")));
		assert_eq!(session.get("form-a", "other"), None);
	}

	#[test]
	fn test_memory_session_clones_share_state() {
		let session = MemorySession::new();
		let handle = session.clone();
		handle.set("hfc", "name", json!("Ada"));
		assert_eq!(session.get("hfc", "name"), Some(json!("Ada")));
	}

	#[test]
	fn test_memory_session_overwrites() {
		let session = MemorySession::new();
		session.set("hfc", "name", json!("first"));
		session.set("hfc", "name", json!("second"));
		assert_eq!(session.get("hfc", "name"), Some(json!("second")));
	}
}
