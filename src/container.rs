//! Ordered containers and the recursive render walk.
//!
//! A container holds an append-only sequence of children; each child is
//! explicitly tagged as either a leaf element or a nested container, and the
//! render walk dispatches on that tag.

use indexmap::IndexMap;
use serde_json::Value;

use crate::dispatch::{AddArgs, DispatchError, ElementKind};
use crate::element::{Element, ElementConfig, Options};
use crate::elements;
use crate::escape::{attrs_to_string, escape_html};

/// One child of a container: a leaf element or a nested fieldset.
pub enum Node {
	Element(Box<dyn Element>),
	Fieldset(Fieldset),
}

/// Per-render context threaded through the tree walk: resolves each leaf's
/// current value and carries the form-level wrapper defaults.
pub struct RenderContext<'a> {
	pub resolver: &'a dyn Fn(&dyn Element) -> Value,
	pub before_default: &'a str,
	pub after_default: &'a str,
}

/// An ordered, append-only collection of form nodes.
///
/// Every container shares one add capability: the dynamic
/// [`add`](Addable::add) operation resolves `add<TypeName>` names through the
/// [`ElementKind`] registry, and the typed conveniences append through the
/// same single insertion point. There is no reordering or removal.
pub trait Addable {
	fn children(&self) -> &[Node];

	fn children_mut(&mut self) -> &mut Vec<Node>;

	/// Opening wrapper HTML emitted before this container's children.
	fn opening_tag(&self) -> String;

	/// Closing wrapper HTML emitted after this container's children.
	fn closing_tag(&self) -> String;

	/// Resolve a dynamically-named operation and append the constructed
	/// element.
	///
	/// On failure the children sequence is unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use htmlform::{Addable, AddArgs, Fieldset};
	/// use indexmap::IndexMap;
	///
	/// let mut fieldset = Fieldset::new("Contact", IndexMap::new());
	/// fieldset
	///     .add("addTextbox", AddArgs::new("name", "Your name"))
	///     .unwrap()
	///     .add("addEmail", AddArgs::new("email", "Email address"))
	///     .unwrap();
	/// assert_eq!(fieldset.children().len(), 2);
	///
	/// assert!(fieldset.add("addBogus", AddArgs::new("x", "X")).is_err());
	/// assert_eq!(fieldset.children().len(), 2);
	/// ```
	fn add(&mut self, op: &str, args: AddArgs) -> Result<&mut Self, DispatchError>
	where
		Self: Sized,
	{
		let element = ElementKind::resolve(op)?.construct(args)?;
		tracing::debug!(op, name = element.name(), "form element registered");
		Ok(self.push_element(element))
	}

	/// Append an already-constructed element. The single insertion point
	/// every add operation funnels through.
	fn push_element(&mut self, element: Box<dyn Element>) -> &mut Self
	where
		Self: Sized,
	{
		self.children_mut().push(Node::Element(element));
		self
	}

	/// Append a nested fieldset and return a handle to it, so subsequent
	/// additions chain onto the fieldset rather than this container.
	fn add_fieldset(
		&mut self,
		label: impl Into<String>,
		attrs: IndexMap<String, String>,
	) -> &mut Fieldset
	where
		Self: Sized,
	{
		let children = self.children_mut();
		children.push(Node::Fieldset(Fieldset::new(label, attrs)));
		match children.last_mut() {
			Some(Node::Fieldset(fieldset)) => fieldset,
			_ => unreachable!("a fieldset was just appended"),
		}
	}

	fn add_textbox(&mut self, name: &str, label: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Textbox::new(name, label, config)))
	}

	fn add_textarea(&mut self, name: &str, label: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Textarea::new(name, label, config)))
	}

	fn add_email(&mut self, name: &str, label: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Email::new(name, label, config)))
	}

	fn add_number(&mut self, name: &str, label: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Number::new(name, label, config)))
	}

	fn add_range(
		&mut self,
		name: &str,
		label: &str,
		min: f64,
		max: f64,
		config: ElementConfig,
	) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Range::new(name, label, min, max, config)))
	}

	fn add_url(&mut self, name: &str, label: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Url::new(name, label, config)))
	}

	fn add_hidden(&mut self, name: &str, label: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Hidden::new(name, label, config)))
	}

	fn add_password(&mut self, name: &str, label: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Password::new(name, label, config)))
	}

	fn add_select(
		&mut self,
		name: &str,
		label: &str,
		options: Options,
		config: ElementConfig,
	) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Select::new(name, label, options, config)))
	}

	fn add_radio(
		&mut self,
		name: &str,
		label: &str,
		options: Options,
		config: ElementConfig,
	) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Radio::new(name, label, options, config)))
	}

	fn add_checkbox(
		&mut self,
		name: &str,
		label: &str,
		options: Options,
		config: ElementConfig,
	) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Checkbox::new(name, label, options, config)))
	}

	/// Append a raw HTML block carried verbatim through rendering.
	fn add_text(&mut self, name: &str, html: &str) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Text::new(name, html)))
	}

	fn add_button(&mut self, name: &str, text: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Button::new(name, text, config)))
	}

	fn add_submit(&mut self, name: &str, text: &str, config: ElementConfig) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Box::new(elements::Submit::new(name, text, config)))
	}

	/// Render this container and its children depth-first, in insertion
	/// order, as a single concatenated string.
	///
	/// Nested containers recurse with the same context; leaf elements are
	/// compiled with their resolved value between the applicable wrapper
	/// HTML (the element's own override, or the form default).
	fn render_tree(&self, ctx: &RenderContext<'_>) -> String {
		let mut html = self.opening_tag();
		for child in self.children() {
			match child {
				Node::Fieldset(fieldset) => html.push_str(&fieldset.render_tree(ctx)),
				Node::Element(element) => {
					let value = (ctx.resolver)(element.as_ref());
					let config = element.config();
					html.push_str(config.before_html.as_deref().unwrap_or(ctx.before_default));
					html.push_str(&element.compile(&value));
					html.push_str(config.after_html.as_deref().unwrap_or(ctx.after_default));
				}
			}
		}
		html.push_str(&self.closing_tag());
		html
	}
}

/// A labeled, nestable grouping container rendered as
/// `<fieldset>` / `<legend>`.
pub struct Fieldset {
	label: String,
	attrs: IndexMap<String, String>,
	children: Vec<Node>,
}

impl Fieldset {
	pub fn new(label: impl Into<String>, attrs: IndexMap<String, String>) -> Self {
		Self {
			label: label.into(),
			attrs,
			children: Vec::new(),
		}
	}

	pub fn label(&self) -> &str {
		&self.label
	}
}

impl Addable for Fieldset {
	fn children(&self) -> &[Node] {
		&self.children
	}

	fn children_mut(&mut self) -> &mut Vec<Node> {
		&mut self.children
	}

	fn opening_tag(&self) -> String {
		let mut html = String::from("<fieldset");
		let attrs = attrs_to_string(&self.attrs);
		if !attrs.is_empty() {
			html.push(' ');
			html.push_str(&attrs);
		}
		html.push('>');
		if !self.label.is_empty() {
			html.push_str("<legend>");
			html.push_str(&escape_html(&self.label));
			html.push_str("</legend>");
		}
		html
	}

	fn closing_tag(&self) -> String {
		"</fieldset>".to_string()
	}
}
