//! Field metadata for admin-managed models
//!
//! The admin never owns a model's schema. Models describe their fields
//! through [`AdminModel`] so descriptors can be checked at start-up and
//! so the list filters and form widgets can pick a field kind.

use crate::types::AdminRecord;
use serde::{Deserialize, Serialize};

/// Kind of a model field as seen by the admin UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
	/// Short single-line text
	Text,
	/// Long multi-line text
	TextArea,
	/// Whole number
	Integer,
	/// Fixed-point number
	Decimal,
	/// Boolean checkbox
	Boolean,
	/// Calendar date
	Date,
	/// Timestamp
	DateTime,
	/// UUID identifier
	Uuid,
	/// Uploaded image
	Image,
	/// Uploaded file
	File,
}

impl FieldType {
	/// Whether list filters for this field use date-range lookups
	pub fn is_temporal(self) -> bool {
		matches!(self, FieldType::Date | FieldType::DateTime)
	}
}

/// Static description of a single model field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
	/// Attribute name
	pub name: &'static str,
	/// Admin field kind
	pub field_type: FieldType,
	/// Whether the field may be edited in a form at all
	pub editable: bool,
	/// Whether a value is required
	pub required: bool,
}

impl FieldDef {
	/// An editable, required field
	pub const fn new(name: &'static str, field_type: FieldType) -> Self {
		Self {
			name,
			field_type,
			editable: true,
			required: true,
		}
	}

	/// Mark the field as optional (`blank=True`)
	pub const fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Mark the field as never editable (auto-generated values)
	pub const fn non_editable(mut self) -> Self {
		self.editable = false;
		self
	}
}

/// A record type that can be administered
pub trait AdminModel {
	/// Model name used for registration
	const MODEL_NAME: &'static str;

	/// Field metadata in declaration order
	fn field_defs() -> &'static [FieldDef];

	/// Convert an instance to the admin's record representation
	fn to_record(&self) -> AdminRecord;
}

/// Find a field by name
pub fn find_field<'a>(fields: &'a [FieldDef], name: &str) -> Option<&'a FieldDef> {
	fields.iter().find(|f| f.name == name)
}

/// Turn an attribute name into a display label
///
/// `created_at` becomes `Created at`.
///
/// # Examples
///
/// ```
/// use showstoppers_admin::humanize_field_name;
///
/// assert_eq!(humanize_field_name("created_at"), "Created at");
/// assert_eq!(humanize_field_name("title"), "Title");
/// ```
pub fn humanize_field_name(name: &str) -> String {
	let spaced = name.trim_matches('_').replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Render a record value as plain text for search and filter matching
pub fn display_value(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::Null => String::new(),
		serde_json::Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
