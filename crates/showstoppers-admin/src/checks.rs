//! Start-up checks for registered model admins
//!
//! Every field a descriptor names must exist on the model. A descriptor that
//! fails these checks makes the site refuse to start.

use crate::fields::find_field;
use crate::fieldsets::flatten_fieldsets;
use crate::model_admin::ModelAdmin;
use crate::ordering::parse_ordering;
use std::collections::HashSet;
use std::fmt;

/// Severity of a check message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckLevel {
	Warning,
	Error,
}

/// A single finding of the checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMessage {
	pub id: &'static str,
	pub level: CheckLevel,
	pub model: String,
	pub message: String,
}

impl CheckMessage {
	fn error(id: &'static str, model: &str, message: String) -> Self {
		Self {
			id,
			level: CheckLevel::Error,
			model: model.to_string(),
			message,
		}
	}

	fn warning(id: &'static str, model: &str, message: String) -> Self {
		Self {
			id,
			level: CheckLevel::Warning,
			model: model.to_string(),
			message,
		}
	}

	pub fn is_error(&self) -> bool {
		self.level == CheckLevel::Error
	}
}

impl fmt::Display for CheckMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: ({}) {}", self.model, self.id, self.message)
	}
}

/// Run every check against one model admin
pub fn check_model_admin(model_admin: &dyn ModelAdmin) -> Vec<CheckMessage> {
	let model = model_admin.model_name();
	let model_fields = model_admin.model_fields();
	let mut messages = Vec::new();

	if model_fields.is_empty() {
		messages.push(CheckMessage::warning(
			"admin.W002",
			model,
			"no field metadata available; field references are not validated".to_string(),
		));
		return messages;
	}

	let ordering: Vec<String> = parse_ordering(&model_admin.ordering())
		.into_iter()
		.map(|order| order.field)
		.collect();
	let fieldsets = model_admin.fieldsets();
	let fieldset_fields = flatten_fieldsets(&fieldsets);
	let form_fields = model_admin.fields().unwrap_or_default();

	let options: [(&str, Vec<&str>); 7] = [
		("list_display", model_admin.list_display()),
		("search_fields", model_admin.search_fields()),
		("list_filter", model_admin.list_filter()),
		("ordering", ordering.iter().map(|s| s.as_str()).collect()),
		("readonly_fields", model_admin.readonly_fields()),
		("fields", form_fields.clone()),
		("fieldsets", fieldset_fields.clone()),
	];

	for (option, names) in &options {
		for name in names {
			if find_field(model_fields, name).is_none() {
				messages.push(CheckMessage::error(
					"admin.E001",
					model,
					format!("The value of '{option}' refers to '{name}', which is not a field of '{model}'."),
				));
			}
		}
	}

	let mut seen = HashSet::new();
	for name in &fieldset_fields {
		if !seen.insert(*name) {
			messages.push(CheckMessage::error(
				"admin.E002",
				model,
				format!("There are duplicate field(s) in 'fieldsets': '{name}'."),
			));
		}
	}

	if model_admin.fields().is_some() && !fieldsets.is_empty() {
		messages.push(CheckMessage::error(
			"admin.E003",
			model,
			"Both 'fieldsets' and 'fields' are specified.".to_string(),
		));
	}

	for (index, fieldset) in fieldsets.iter().enumerate() {
		if fieldset.fields.is_empty() {
			messages.push(CheckMessage::error(
				"admin.E004",
				model,
				format!("The value of 'fieldsets[{index}]' must contain at least one field."),
			));
		}
	}

	if model_admin.list_per_page() == Some(0) {
		messages.push(CheckMessage::error(
			"admin.E005",
			model,
			"The value of 'list_per_page' must be greater than zero.".to_string(),
		));
	}

	if !fieldsets.is_empty() {
		let readonly = model_admin.readonly_fields();
		for field in model_fields {
			let placed = fieldset_fields.contains(&field.name);
			if field.editable && !placed && !readonly.contains(&field.name) {
				messages.push(CheckMessage::warning(
					"admin.W001",
					model,
					format!(
						"Field '{}' is not included in any fieldset and cannot be edited.",
						field.name
					),
				));
			}
		}
	}

	for message in &messages {
		if message.is_error() {
			tracing::error!(check = message.id, "{message}");
		} else {
			tracing::warn!(check = message.id, "{message}");
		}
	}

	messages
}
