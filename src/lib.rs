//! Declarative server-side HTML form construction, validation, and rendering.
//!
//! Callers add typed fields to a [`Form`] through the shared [`Addable`]
//! capability, either with the typed `add_*` conveniences or the dynamic
//! `add("add<TypeName>", …)` operation resolved through the [`ElementKind`]
//! registry. The form validates submitted values, repopulates fields from a
//! prior submission via session storage, and renders a single HTML string,
//! preserving insertion order through arbitrarily nested fieldsets.
//!
//! Request and session state are injected at construction, so the library
//! runs against any synchronous request environment (or none at all, in
//! tests).
//!
//! ```
//! use htmlform::{Addable, ElementConfig, Form, MemorySession, Options, SimpleRequest};
//!
//! let request = SimpleRequest::get("/contact");
//! let mut form = Form::new(Box::new(request), Box::new(MemorySession::new()));
//! form.add_textbox("name", "Your name", ElementConfig::new().required())
//!     .add_email("email", "Email address", ElementConfig::new())
//!     .add_checkbox(
//!         "fruit",
//!         "Favorite fruit",
//!         Options::listed(["Apple", "Banana"]),
//!         ElementConfig::new(),
//!     )
//!     .add_submit("send", "Send", ElementConfig::new());
//!
//! let html = form.render();
//! assert!(html.contains("<form method=\"post\""));
//! assert!(html.contains("name=\"fruit[]\""));
//! ```

pub mod config;
pub mod container;
pub mod dispatch;
pub mod element;
pub mod elements;
pub mod escape;
pub mod form;
pub mod request;
pub mod validator;

pub use config::{DEFAULT_FORM_ID, FormConfig};
pub use container::{Addable, Fieldset, Node, RenderContext};
pub use dispatch::{AddArgs, DispatchError, ElementKind};
pub use element::{Element, ElementConfig, Options, Rule};
pub use elements::{
	Button, Checkbox, Email, Hidden, Honeypot, Number, Password, Radio, Range, Select, Submit,
	Text, Textarea, Textbox, Url,
};
pub use escape::{attrs_to_string, escape_attr, escape_html};
pub use form::{Form, honeypot_name};
pub use request::{MemorySession, Params, RequestData, SessionStore, SimpleRequest};
pub use validator::{ValidationError, ValidationReport, Validator, render_errors};
