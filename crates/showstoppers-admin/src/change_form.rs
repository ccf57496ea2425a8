//! Edit form: fieldset layout and submission validation
//!
//! The form is described as data (sections and fields), not rendered.
//!
//! # Submission rules
//!
//! - **Field allowlist**: only fields laid out on the form are accepted
//! - **Readonly enforcement**: fields in `readonly_fields()` cannot be submitted
//! - **Primary key**: the primary key cannot change on update
//! - **Size limits**: field count and string length are bounded

use crate::error::{AdminError, AdminResult};
use crate::fields::{FieldDef, FieldType, find_field, humanize_field_name};
use crate::fieldsets::{Fieldset, FieldsetClass};
use crate::limits::{MAX_FIELDS, MAX_STRING_LENGTH};
use crate::model_admin::ModelAdmin;
use crate::types::AdminRecord;
use serde::{Deserialize, Serialize};

/// A field of the edit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
	pub name: String,
	pub label: String,
	pub field_type: FieldType,
	pub required: bool,
	pub readonly: bool,
	/// Current value (None on the add form)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<serde_json::Value>,
}

/// A section of the edit form, one per fieldset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSection {
	pub name: Option<String>,
	pub description: Option<String>,
	pub classes: Vec<FieldsetClass>,
	pub collapsed: bool,
	pub fields: Vec<FormField>,
}

/// Edit form of one model admin
pub struct ChangeForm<'a> {
	model_admin: &'a dyn ModelAdmin,
}

impl<'a> ChangeForm<'a> {
	pub fn new(model_admin: &'a dyn ModelAdmin) -> Self {
		Self { model_admin }
	}

	/// Effective fieldsets
	///
	/// Without declared fieldsets the form has one unnamed section holding
	/// `fields()`, or every editable and read-only model field.
	pub fn fieldsets(&self) -> Vec<Fieldset> {
		let declared = self.model_admin.fieldsets();
		if !declared.is_empty() {
			return declared;
		}

		let fields: Vec<String> = match self.model_admin.fields() {
			Some(fields) => fields.into_iter().map(str::to_string).collect(),
			None => {
				let readonly = self.model_admin.readonly_fields();
				self.model_admin
					.model_fields()
					.iter()
					.filter(|f| f.editable || readonly.contains(&f.name))
					.map(|f| f.name.to_string())
					.collect()
			}
		};
		vec![Fieldset::unnamed().fields(fields)]
	}

	fn field_def(&self, name: &str) -> Option<&FieldDef> {
		find_field(self.model_admin.model_fields(), name)
	}

	fn is_readonly(&self, name: &str) -> bool {
		self.model_admin.readonly_fields().contains(&name)
			|| self.field_def(name).is_some_and(|f| !f.editable)
	}

	/// Lay out the form, filling values from `record` when editing
	pub fn layout(&self, record: Option<&AdminRecord>) -> Vec<FormSection> {
		self.fieldsets()
			.into_iter()
			.map(|fieldset| {
				let fields = fieldset
					.fields
					.iter()
					.map(|name| {
						let def = self.field_def(name);
						FormField {
							name: name.clone(),
							label: humanize_field_name(name),
							field_type: def.map_or(FieldType::Text, |d| d.field_type),
							required: def.is_some_and(|d| d.required),
							readonly: self.is_readonly(name),
							value: record.and_then(|r| r.get(name).cloned()),
						}
					})
					.collect();

				FormSection {
					collapsed: fieldset.is_collapsed(),
					name: fieldset.name,
					description: fieldset.description,
					classes: fieldset.classes,
					fields,
				}
			})
			.collect()
	}

	/// Validate a submission against the form
	///
	/// # Errors
	///
	/// Returns `AdminError::ValidationError` if validation fails.
	pub fn validate_submission(&self, data: &AdminRecord, is_update: bool) -> AdminResult<()> {
		if data.len() > MAX_FIELDS {
			return Err(AdminError::ValidationError(format!(
				"Too many fields in request: {} (max {})",
				data.len(),
				MAX_FIELDS
			)));
		}

		let fieldsets = self.fieldsets();
		let allowed = crate::fieldsets::flatten_fieldsets(&fieldsets);
		let pk_field = self.model_admin.pk_field();

		let mut names: Vec<&String> = data.keys().collect();
		names.sort();
		for name in names {
			if is_update && name == pk_field {
				return Err(AdminError::ValidationError(format!(
					"Primary key field '{}' cannot be modified",
					name
				)));
			}

			if self.is_readonly(name) {
				return Err(AdminError::ValidationError(format!(
					"Field '{}' is read-only and cannot be modified",
					name
				)));
			}

			if !allowed.contains(&name.as_str()) {
				return Err(AdminError::ValidationError(format!(
					"Field '{}' is not editable on this form",
					name
				)));
			}

			if let Some(serde_json::Value::String(s)) = data.get(name.as_str())
				&& s.len() > MAX_STRING_LENGTH
			{
				return Err(AdminError::ValidationError(format!(
					"Field '{}' value too long: {} bytes (max {})",
					name,
					s.len(),
					MAX_STRING_LENGTH
				)));
			}
		}

		Ok(())
	}

	/// Validate a submission and merge it into a copy of `existing`
	pub fn apply(&self, existing: &AdminRecord, data: AdminRecord) -> AdminResult<AdminRecord> {
		self.validate_submission(&data, true)?;
		let mut updated = existing.clone();
		updated.extend(data);
		tracing::debug!(
			model = self.model_admin.model_name(),
			"applied change form submission"
		);
		Ok(updated)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model_admin::ModelAdminConfig;
	use rstest::{fixture, rstest};
	use serde_json::json;

	const NOTE_FIELDS: &[FieldDef] = &[
		FieldDef::new("id", FieldType::Integer).non_editable(),
		FieldDef::new("title", FieldType::Text),
		FieldDef::new("body", FieldType::TextArea).optional(),
		FieldDef::new("created", FieldType::DateTime),
	];

	#[fixture]
	fn admin() -> ModelAdminConfig {
		ModelAdminConfig::builder()
			.model_name("Note")
			.model_fields(NOTE_FIELDS)
			.readonly_fields(vec!["created"])
			.fieldsets(vec![
				Fieldset::new("Content").fields(["title", "body"]),
				Fieldset::new("Meta").fields(["id", "created"]).collapse(),
			])
			.build()
			.unwrap()
	}

	fn note() -> AdminRecord {
		AdminRecord::from([
			("id".to_string(), json!(7)),
			("title".to_string(), json!("Groceries")),
			("body".to_string(), json!("milk")),
			("created".to_string(), json!("2024-03-15T08:30:00Z")),
		])
	}

	#[rstest]
	fn test_layout_follows_fieldsets(admin: ModelAdminConfig) {
		// Arrange
		let record = note();

		// Act
		let sections = ChangeForm::new(&admin).layout(Some(&record));

		// Assert
		assert_eq!(sections.len(), 2);
		assert_eq!(sections[0].name.as_deref(), Some("Content"));
		assert!(!sections[0].collapsed);
		assert_eq!(sections[1].name.as_deref(), Some("Meta"));
		assert!(sections[1].collapsed);
		assert_eq!(sections[1].classes, vec![FieldsetClass::Collapse]);

		let meta: Vec<(&str, bool)> = sections[1]
			.fields
			.iter()
			.map(|f| (f.name.as_str(), f.readonly))
			.collect();
		assert_eq!(meta, vec![("id", true), ("created", true)]);
		assert_eq!(sections[0].fields[0].value, Some(json!("Groceries")));
		assert_eq!(sections[0].fields[1].field_type, FieldType::TextArea);
		assert!(!sections[0].fields[1].required);
	}

	#[rstest]
	fn test_add_form_has_no_values(admin: ModelAdminConfig) {
		// Act
		let sections = ChangeForm::new(&admin).layout(None);

		// Assert
		assert!(sections.iter().flat_map(|s| &s.fields).all(|f| f.value.is_none()));
	}

	#[rstest]
	fn test_default_layout_without_fieldsets() {
		// Arrange
		let admin = ModelAdminConfig::builder()
			.model_name("Note")
			.model_fields(NOTE_FIELDS)
			.readonly_fields(vec!["created"])
			.build()
			.unwrap();

		// Act
		let sections = ChangeForm::new(&admin).layout(None);

		// Assert
		assert_eq!(sections.len(), 1);
		assert!(sections[0].name.is_none());
		let names: Vec<&str> = sections[0].fields.iter().map(|f| f.name.as_str()).collect();
		assert_eq!(names, vec!["title", "body", "created"]);
	}

	#[rstest]
	#[case::readonly("created", json!("2020-01-01T00:00:00Z"))]
	#[case::non_editable("id", json!(8))]
	#[case::unknown("author", json!("me"))]
	fn test_rejected_submissions(
		admin: ModelAdminConfig,
		#[case] field: &str,
		#[case] value: serde_json::Value,
	) {
		// Arrange
		let existing = note();
		let data = AdminRecord::from([(field.to_string(), value)]);

		// Act
		let result = ChangeForm::new(&admin).apply(&existing, data);

		// Assert
		assert!(matches!(result, Err(AdminError::ValidationError(_))));
	}

	#[rstest]
	fn test_apply_merges_editable_fields(admin: ModelAdminConfig) {
		// Arrange
		let existing = note();
		let data = AdminRecord::from([("title".to_string(), json!("Errands"))]);

		// Act
		let updated = ChangeForm::new(&admin).apply(&existing, data).unwrap();

		// Assert
		assert_eq!(updated["title"], json!("Errands"));
		assert_eq!(updated["created"], existing["created"]);
		assert_eq!(updated["id"], existing["id"]);
	}

	#[rstest]
	fn test_too_many_fields_are_rejected(admin: ModelAdminConfig) {
		// Arrange
		let data: AdminRecord = (0..=MAX_FIELDS)
			.map(|i| (format!("extra_{i}"), json!(i)))
			.collect();

		// Act
		let result = ChangeForm::new(&admin).validate_submission(&data, false);

		// Assert
		assert!(
			matches!(result, Err(AdminError::ValidationError(msg)) if msg.starts_with("Too many fields"))
		);
	}

	#[rstest]
	fn test_section_description_is_carried() {
		// Arrange
		let admin = ModelAdminConfig::builder()
			.model_name("Note")
			.model_fields(NOTE_FIELDS)
			.fieldsets(vec![
				Fieldset::new("Content")
					.fields(["title", "body"])
					.description("Shown on the public page"),
			])
			.build()
			.unwrap();

		// Act
		let sections = ChangeForm::new(&admin).layout(None);

		// Assert
		assert_eq!(
			sections[0].description.as_deref(),
			Some("Shown on the public page")
		);
	}

	#[rstest]
	fn test_oversized_value_is_rejected(admin: ModelAdminConfig) {
		// Arrange
		let data = AdminRecord::from([(
			"body".to_string(),
			json!("x".repeat(MAX_STRING_LENGTH + 1)),
		)]);

		// Act
		let result = ChangeForm::new(&admin).validate_submission(&data, false);

		// Assert
		assert!(matches!(result, Err(AdminError::ValidationError(msg)) if msg.contains("too long")));
	}
}
