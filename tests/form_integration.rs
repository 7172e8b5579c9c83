//! End-to-end behavior of the form tree: registration, ordering, value
//! resolution, validation, and rendering working together.

use htmlform::{
	Addable, AddArgs, DispatchError, ElementConfig, Form, FormConfig, MemorySession, Options,
	SessionStore, SimpleRequest, honeypot_name,
};
use indexmap::IndexMap;
use serde_json::json;

fn blank_form() -> Form {
	Form::new(
		Box::new(SimpleRequest::get("/demo")),
		Box::new(MemorySession::new()),
	)
}

#[test]
fn render_preserves_call_order_across_nested_fieldsets() {
	let mut form = blank_form();
	form.add_textbox("first", "First", ElementConfig::new());
	{
		let shipping = form.add_fieldset("Shipping", IndexMap::new());
		shipping
			.add_textbox("street", "Street", ElementConfig::new())
			.add_textbox("city", "City", ElementConfig::new());
		let inner = shipping.add_fieldset("Extra", IndexMap::new());
		inner.add_textbox("note", "Note", ElementConfig::new());
	}
	form.add_textbox("last", "Last", ElementConfig::new());

	let html = form.render();
	let positions: Vec<usize> = ["first", "street", "city", "note", "last"]
		.iter()
		.map(|name| {
			html.find(&format!("name=\"{name}\""))
				.unwrap_or_else(|| panic!("{name} missing from render"))
		})
		.collect();

	let mut sorted = positions.clone();
	sorted.sort_unstable();
	assert_eq!(positions, sorted, "depth-first pre-order violated: {html}");
}

#[test]
fn unknown_operation_fails_and_leaves_children_unchanged() {
	let mut form = blank_form();
	form.add_textbox("name", "Name", ElementConfig::new());
	let before = form.children().len();

	let result = form.add("addWidget", AddArgs::new("w", "Widget"));
	assert_eq!(
		result.err(),
		Some(DispatchError::UnknownOperation("addWidget".to_string()))
	);
	assert_eq!(form.children().len(), before);
}

#[test]
fn dynamic_operations_chain_like_typed_ones() {
	let mut form = blank_form();
	form.add("addTextbox", AddArgs::new("name", "Name"))
		.and_then(|form| {
			form.add(
				"addSelect",
				AddArgs::new("color", "Color")
					.with_options(Options::keyed([("r", "Red"), ("b", "Blue")])),
			)
		})
		.expect("both operations resolve");

	let html = form.render();
	assert!(html.contains("name=\"name\""));
	assert!(html.contains("<select name=\"color\""));
}

#[test]
fn value_resolution_prefers_session_then_submission_then_default() {
	let session = MemorySession::new();
	session.set("hfc", "a", json!("S"));

	let request = SimpleRequest::post("/f")
		.with_body_param("a", "P")
		.with_body_param("b", "P");

	let mut form = Form::new(Box::new(request), Box::new(session));
	form.add_textbox("a", "A", ElementConfig::new().with_default("D"))
		.add_textbox("b", "B", ElementConfig::new().with_default("D"))
		.add_textbox("c", "C", ElementConfig::new().with_default("D"))
		.add_textbox("d", "D", ElementConfig::new());

	let html = form.render();
	assert!(html.contains("id=\"a\" value=\"S\""), "session wins");
	assert!(html.contains("id=\"b\" value=\"P\""), "submission next");
	assert!(html.contains("id=\"c\" value=\"D\""), "default next");
	assert!(html.contains("id=\"d\" value=\"\""), "empty last");
}

#[test]
fn repopulation_survives_into_a_fresh_request() {
	let session = MemorySession::new();

	// First request: the submission is snapshotted during validation.
	let mut submitted = Form::new(
		Box::new(SimpleRequest::post("/signup").with_body_param("email", "nope")),
		Box::new(session.clone()),
	);
	submitted.add_email("email", "Email", ElementConfig::new().required());
	assert!(!submitted.is_valid());

	// Follow-up request carries no submission; the session repopulates.
	let mut redisplay = Form::new(
		Box::new(SimpleRequest::get("/signup")),
		Box::new(session.clone()),
	);
	redisplay.add_email("email", "Email", ElementConfig::new().required());
	assert!(redisplay.render().contains("value=\"nope\""));
}

#[test]
fn honeypot_rejects_bots_without_telling_them() {
	let trap = honeypot_name("hfc");
	let request = SimpleRequest::post("/f")
		.with_body_param("name", "")
		.with_body_param(trap, "injected by a bot");

	let mut form = Form::new(Box::new(request), Box::new(MemorySession::new()));
	form.add_textbox("name", "Name", ElementConfig::new().required());
	form.add_honeypot(ElementConfig::new());

	assert!(!form.is_valid());
	assert!(!form.passed_honeypot());

	// The genuine field error renders; the honeypot failure does not.
	let html = form.render();
	assert!(html.contains("Name is a required field."));
	assert!(!html.contains("bot"));
}

#[test]
fn honeypot_renders_hidden_with_digest_name() {
	let mut form = blank_form();
	form.add_honeypot(ElementConfig::new());

	let html = form.render();
	assert!(html.contains("style=\"display:none\""));
	assert!(html.contains(&format!("name=\"{}\"", honeypot_name("hfc"))));
}

#[test]
fn checkbox_marking_matches_submission_shape() {
	let request = SimpleRequest::post("/f")
		.with_body_param("keyed", json!(["a"]))
		.with_body_param("listed", "Banana");

	let mut form = Form::new(Box::new(request), Box::new(MemorySession::new()));
	form.add_checkbox(
		"keyed",
		"Keyed",
		Options::keyed([("a", "Apple"), ("b", "Banana")]),
		ElementConfig::new(),
	)
	.add_checkbox(
		"listed",
		"Listed",
		Options::listed(["Apple", "Banana"]),
		ElementConfig::new(),
	);

	let html = form.render();
	assert!(html.contains("name=\"keyed[]\" value=\"a\" checked=\"checked\""));
	assert!(html.contains("name=\"keyed[]\" value=\"b\" /> Banana"));
	assert!(html.contains("name=\"listed[]\" value=\"Banana\" checked=\"checked\""));
	assert!(html.contains("name=\"listed[]\" value=\"Apple\" /> Apple"));
}

#[test]
fn render_is_idempotent_after_validation() {
	let session = MemorySession::new();
	let request = SimpleRequest::post("/f").with_body_param("email", "user@example.com");

	let mut form = Form::new(Box::new(request), Box::new(session));
	form.add_email("email", "Email", ElementConfig::new().required())
		.add_submit("send", "Send", ElementConfig::new());

	assert!(form.is_valid());
	let first = form.render();
	let second = form.render();
	assert_eq!(first, second);
}

#[test]
fn fieldset_handle_is_distinct_from_the_form() {
	let mut form = blank_form();
	form.add_textbox("own", "Own", ElementConfig::new());

	let fieldset = form.add_fieldset("Group", IndexMap::new());
	fieldset
		.add_textbox("inner_a", "A", ElementConfig::new())
		.add_textbox("inner_b", "B", ElementConfig::new());
	assert_eq!(fieldset.children().len(), 2);

	// The form's direct children are the textbox and the fieldset itself.
	assert_eq!(form.children().len(), 2);
}

#[test]
fn configuration_overrides_shape_the_form_tag() {
	let mut form = Form::with_config(
		FormConfig::new()
			.with_method("get")
			.with_action("/search")
			.with_id("search-form")
			.with_attr("class", "inline"),
		Box::new(SimpleRequest::get("/ignored")),
		Box::new(MemorySession::new()),
	);
	form.add_textbox("q", "Query", ElementConfig::new());

	let html = form.render();
	assert!(html.starts_with(
		"<form method=\"get\" action=\"/search\" id=\"search-form\" class=\"inline\">"
	));
	assert!(html.ends_with("</form>"));
}

#[test]
fn wrapper_defaults_apply_and_elements_override() {
	let mut form = Form::with_config(
		FormConfig::new()
			.with_before_element("<div class=\"row\">")
			.with_after_element("</div>"),
		Box::new(SimpleRequest::get("/f")),
		Box::new(MemorySession::new()),
	);
	form.add_textbox("plain", "Plain", ElementConfig::new())
		.add_textbox(
			"special",
			"Special",
			ElementConfig::new()
				.with_before_html("<div class=\"highlight\">")
				.with_after_html("</div>"),
		);

	let html = form.render();
	assert!(html.contains("<div class=\"row\"><label for=\"plain\""));
	assert!(html.contains("<div class=\"highlight\"><label for=\"special\""));
}

#[test]
fn validation_and_rendering_are_order_insensitive_and_repeatable() {
	let request = SimpleRequest::post("/f").with_body_param("age", "abc");
	let mut form = Form::new(Box::new(request), Box::new(MemorySession::new()));
	form.add_number("age", "Age", ElementConfig::new());

	// Render before validation: no error block yet.
	assert!(!form.render().contains("form-errors"));

	assert!(!form.is_valid());
	assert!(form.render().contains("Age must be a number."));

	// Validation is repeatable with a stable outcome.
	assert!(!form.is_valid());
	assert!(form.render().contains("Age must be a number."));
}
