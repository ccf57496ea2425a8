//! Grouped field layout for the edit form

use serde::{Deserialize, Serialize};

/// Presentation class applied to a fieldset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldsetClass {
	/// Rendered collapsed until the user expands it
	Collapse,
	/// Rendered with extra horizontal space
	Wide,
}

impl FieldsetClass {
	/// CSS class name
	pub fn as_str(self) -> &'static str {
		match self {
			FieldsetClass::Collapse => "collapse",
			FieldsetClass::Wide => "wide",
		}
	}
}

/// A named group of fields on the edit form
///
/// # Examples
///
/// ```
/// use showstoppers_admin::Fieldset;
///
/// let system = Fieldset::new("System Fields")
///     .fields(["uuid", "created_at"])
///     .collapse();
///
/// assert_eq!(system.name.as_deref(), Some("System Fields"));
/// assert_eq!(system.fields, vec!["uuid", "created_at"]);
/// assert!(system.is_collapsed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fieldset {
	/// Section heading (None renders without a heading)
	pub name: Option<String>,
	/// Field names in display order
	pub fields: Vec<String>,
	/// Presentation classes
	#[serde(default)]
	pub classes: Vec<FieldsetClass>,
	/// Help text shown under the heading
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl Fieldset {
	/// Create a named fieldset with no fields
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			fields: Vec::new(),
			classes: Vec::new(),
			description: None,
		}
	}

	/// Create a fieldset without a heading
	pub fn unnamed() -> Self {
		Self {
			name: None,
			fields: Vec::new(),
			classes: Vec::new(),
			description: None,
		}
	}

	/// Set the fields of this fieldset
	pub fn fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fields = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Add a presentation class
	pub fn class(mut self, class: FieldsetClass) -> Self {
		if !self.classes.contains(&class) {
			self.classes.push(class);
		}
		self
	}

	/// Render collapsed by default
	pub fn collapse(self) -> Self {
		self.class(FieldsetClass::Collapse)
	}

	/// Set the description
	pub fn description(mut self, text: impl Into<String>) -> Self {
		self.description = Some(text.into());
		self
	}

	/// Whether the section starts collapsed
	pub fn is_collapsed(&self) -> bool {
		self.classes.contains(&FieldsetClass::Collapse)
	}

	/// CSS class names of this fieldset
	pub fn class_names(&self) -> Vec<&'static str> {
		self.classes.iter().map(|c| c.as_str()).collect()
	}
}

/// Flatten fieldsets into their field names, in order
pub fn flatten_fieldsets(fieldsets: &[Fieldset]) -> Vec<&str> {
	fieldsets
		.iter()
		.flat_map(|fs| fs.fields.iter().map(|f| f.as_str()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_collapse_is_idempotent() {
		// Arrange & Act
		let fieldset = Fieldset::new("System").collapse().collapse();

		// Assert
		assert_eq!(fieldset.classes, vec![FieldsetClass::Collapse]);
		assert_eq!(fieldset.class_names(), vec!["collapse"]);
	}

	#[rstest]
	fn test_unnamed_fieldset_is_expanded() {
		// Arrange & Act
		let fieldset = Fieldset::unnamed().fields(["title"]).class(FieldsetClass::Wide);

		// Assert
		assert!(fieldset.name.is_none());
		assert!(!fieldset.is_collapsed());
	}

	#[rstest]
	fn test_flatten_fieldsets_keeps_order() {
		// Arrange
		let fieldsets = vec![
			Fieldset::new("A").fields(["title", "year"]),
			Fieldset::new("B").fields(["uuid"]),
		];

		// Act
		let flat = flatten_fieldsets(&fieldsets);

		// Assert
		assert_eq!(flat, vec!["title", "year", "uuid"]);
	}

	#[rstest]
	fn test_serialized_class_names() {
		// Arrange
		let fieldset = Fieldset::new("System").fields(["uuid"]).collapse();

		// Act
		let json = serde_json::to_value(&fieldset).unwrap();

		// Assert
		assert_eq!(json["classes"], serde_json::json!(["collapse"]));
		assert!(json.get("description").is_none());
	}
}
