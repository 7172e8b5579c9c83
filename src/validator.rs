//! Field-level validation as an explicit result-collecting pass.
//!
//! The validator walks the element tree in insertion order, checks each
//! element's declared rules against its resolved value, and returns an
//! immutable [`ValidationReport`]. Data errors are accumulated, never
//! thrown; the honeypot check is tracked as a distinguished flag so callers
//! can reject bots without showing them an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::container::{Addable, Node};
use crate::element::{value_is_empty, value_text, Element, Rule};
use crate::escape::escape_html;

static EMAIL_RE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

static URL_RE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^https?://\S+$").expect("url pattern compiles"));

/// One accumulated field error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
	pub field: String,
	pub message: String,
}

/// Immutable result of one validation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
	pub errors: Vec<ValidationError>,
	/// Set when a honeypot element received a non-empty submission. Kept
	/// out of [`errors`](Self::errors) so it is never rendered to the
	/// submitter.
	pub honeypot_error: bool,
}

impl ValidationReport {
	pub fn is_clean(&self) -> bool {
		self.errors.is_empty() && !self.honeypot_error
	}
}

/// Runs field-level and honeypot checks over an element tree.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
	pub fn new() -> Self {
		Self
	}

	/// Walk `children` depth-first, resolving each element's value through
	/// `resolve`, and collect every rule violation.
	pub fn validate(
		&self,
		children: &[Node],
		resolve: &dyn Fn(&dyn Element) -> Value,
	) -> ValidationReport {
		let mut report = ValidationReport::default();
		self.walk(children, resolve, &mut report);
		tracing::debug!(
			errors = report.errors.len(),
			honeypot = report.honeypot_error,
			"validation pass finished"
		);
		report
	}

	fn walk(
		&self,
		children: &[Node],
		resolve: &dyn Fn(&dyn Element) -> Value,
		report: &mut ValidationReport,
	) {
		for child in children {
			match child {
				Node::Fieldset(fieldset) => self.walk(fieldset.children(), resolve, report),
				Node::Element(element) => self.check_element(element.as_ref(), resolve, report),
			}
		}
	}

	fn check_element(
		&self,
		element: &dyn Element,
		resolve: &dyn Fn(&dyn Element) -> Value,
		report: &mut ValidationReport,
	) {
		let value = resolve(element);

		if element.is_honeypot() {
			if !value_is_empty(&value) {
				report.honeypot_error = true;
			}
			return;
		}

		for rule in element.rules() {
			if let Some(message) = check_rule(element, *rule, &value) {
				report.errors.push(ValidationError {
					field: element.name().to_string(),
					message,
				});
			}
		}
	}
}

fn check_rule(element: &dyn Element, rule: Rule, value: &Value) -> Option<String> {
	let display = if element.label().is_empty() {
		element.name()
	} else {
		element.label()
	};

	match rule {
		Rule::Required => {
			value_is_empty(value).then(|| format!("{display} is a required field."))
		}
		// Format rules only apply to filled values; emptiness is the
		// Required rule's concern.
		_ if value_is_empty(value) => None,
		Rule::Email => (!EMAIL_RE.is_match(&value_text(value)))
			.then(|| format!("{display} must be a valid email address.")),
		Rule::Url => (!URL_RE.is_match(&value_text(value)))
			.then(|| format!("{display} must be a valid URL.")),
		Rule::Number => value_text(value)
			.parse::<f64>()
			.is_err()
			.then(|| format!("{display} must be a number.")),
		Rule::Range { min, max } => match value_text(value).parse::<f64>() {
			Ok(n) if (min..=max).contains(&n) => None,
			Ok(_) => Some(format!("{display} must be between {min} and {max}.")),
			// Unparsable input is already the Number rule's error.
			Err(_) => None,
		},
	}
}

/// Render the accumulated errors as an HTML block.
///
/// Returns an empty string when there is nothing to show. Honeypot failures
/// are deliberately excluded.
pub fn render_errors(report: Option<&ValidationReport>, manual: &[String]) -> String {
	let mut messages: Vec<&str> = Vec::new();
	if let Some(report) = report {
		messages.extend(report.errors.iter().map(|e| e.message.as_str()));
	}
	messages.extend(manual.iter().map(String::as_str));

	if messages.is_empty() {
		return String::new();
	}

	let mut html = String::from("<div class=\"form-errors\"><ul>");
	for message in messages {
		html.push_str("<li>");
		html.push_str(&escape_html(message));
		html.push_str("</li>");
	}
	html.push_str("</ul></div>");
	html
}
