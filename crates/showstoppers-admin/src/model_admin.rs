//! Model admin configuration and trait
//!
//! This module defines how a model is displayed and managed in the admin.

use crate::error::{AdminError, AdminResult};
use crate::fields::FieldDef;
use crate::fieldsets::Fieldset;
use async_trait::async_trait;

/// Trait for configuring model administration
///
/// Implement this trait to customize how a model is listed and edited.
#[async_trait]
pub trait ModelAdmin: Send + Sync {
	/// Get the model name
	fn model_name(&self) -> &str;

	/// Get the application label
	///
	/// By default, returns "admin".
	fn app_label(&self) -> &str {
		"admin"
	}

	/// Get the database table name
	fn table_name(&self) -> &str {
		self.model_name()
	}

	/// Get the primary key field name
	///
	/// By default, returns "id".
	fn pk_field(&self) -> &str {
		"id"
	}

	/// Field metadata of the administered model
	///
	/// An empty slice disables field-reference checks.
	fn model_fields(&self) -> &[FieldDef] {
		&[]
	}

	/// Fields to display in list view
	fn list_display(&self) -> Vec<&str> {
		vec!["id"]
	}

	/// Fields that can be used for filtering
	fn list_filter(&self) -> Vec<&str> {
		vec![]
	}

	/// Fields that can be searched
	fn search_fields(&self) -> Vec<&str> {
		vec![]
	}

	/// Fields to display in forms (None = all fields)
	fn fields(&self) -> Option<Vec<&str>> {
		None
	}

	/// Grouped form layout (empty = no grouping)
	fn fieldsets(&self) -> Vec<Fieldset> {
		vec![]
	}

	/// Read-only fields
	fn readonly_fields(&self) -> Vec<&str> {
		vec![]
	}

	/// Ordering for list view (prefix with "-" for descending)
	fn ordering(&self) -> Vec<&str> {
		vec!["-id"]
	}

	/// Number of items per page (None = use site default)
	fn list_per_page(&self) -> Option<usize> {
		None
	}

	/// Check if user has permission to view this model
	async fn has_view_permission(&self, _user: &(dyn std::any::Any + Send + Sync)) -> bool {
		true
	}

	/// Check if user has permission to add instances
	async fn has_add_permission(&self, _user: &(dyn std::any::Any + Send + Sync)) -> bool {
		true
	}

	/// Check if user has permission to change instances
	async fn has_change_permission(&self, _user: &(dyn std::any::Any + Send + Sync)) -> bool {
		true
	}

	/// Check if user has permission to delete instances
	async fn has_delete_permission(&self, _user: &(dyn std::any::Any + Send + Sync)) -> bool {
		true
	}
}

/// Configuration-based model admin implementation
///
/// Provides a simple way to configure a model admin without implementing the trait.
///
/// # Examples
///
/// ```
/// use showstoppers_admin::{ModelAdmin, ModelAdminConfig};
///
/// let admin = ModelAdminConfig::builder()
///     .model_name("Series")
///     .list_display(vec!["title", "seasons"])
///     .list_filter(vec!["seasons"])
///     .search_fields(vec!["title"])
///     .build()
///     .unwrap();
///
/// assert_eq!(admin.model_name(), "Series");
/// assert_eq!(admin.ordering(), vec!["-id"]);
/// ```
#[derive(Debug, Clone)]
pub struct ModelAdminConfig {
	model_name: String,
	app_label: String,
	table_name: Option<String>,
	pk_field: String,
	model_fields: Vec<FieldDef>,
	list_display: Vec<String>,
	list_filter: Vec<String>,
	search_fields: Vec<String>,
	fields: Option<Vec<String>>,
	fieldsets: Vec<Fieldset>,
	readonly_fields: Vec<String>,
	ordering: Vec<String>,
	list_per_page: Option<usize>,
}

impl ModelAdminConfig {
	/// Create a configuration with default options
	pub fn new(model_name: impl Into<String>) -> Self {
		Self {
			model_name: model_name.into(),
			app_label: "admin".into(),
			table_name: None,
			pk_field: "id".into(),
			model_fields: vec![],
			list_display: vec!["id".into()],
			list_filter: vec![],
			search_fields: vec![],
			fields: None,
			fieldsets: vec![],
			readonly_fields: vec![],
			ordering: vec!["-id".into()],
			list_per_page: None,
		}
	}

	/// Start building a model admin configuration
	pub fn builder() -> ModelAdminConfigBuilder {
		ModelAdminConfigBuilder::default()
	}
}

fn as_strs(values: &[String]) -> Vec<&str> {
	values.iter().map(|s| s.as_str()).collect()
}

#[async_trait]
impl ModelAdmin for ModelAdminConfig {
	fn model_name(&self) -> &str {
		&self.model_name
	}

	fn app_label(&self) -> &str {
		&self.app_label
	}

	fn table_name(&self) -> &str {
		self.table_name
			.as_deref()
			.unwrap_or(self.model_name.as_str())
	}

	fn pk_field(&self) -> &str {
		&self.pk_field
	}

	fn model_fields(&self) -> &[FieldDef] {
		&self.model_fields
	}

	fn list_display(&self) -> Vec<&str> {
		as_strs(&self.list_display)
	}

	fn list_filter(&self) -> Vec<&str> {
		as_strs(&self.list_filter)
	}

	fn search_fields(&self) -> Vec<&str> {
		as_strs(&self.search_fields)
	}

	fn fields(&self) -> Option<Vec<&str>> {
		self.fields.as_deref().map(as_strs)
	}

	fn fieldsets(&self) -> Vec<Fieldset> {
		self.fieldsets.clone()
	}

	fn readonly_fields(&self) -> Vec<&str> {
		as_strs(&self.readonly_fields)
	}

	fn ordering(&self) -> Vec<&str> {
		as_strs(&self.ordering)
	}

	fn list_per_page(&self) -> Option<usize> {
		self.list_per_page
	}
}

/// Builder for ModelAdminConfig
#[derive(Debug, Default)]
pub struct ModelAdminConfigBuilder {
	model_name: Option<String>,
	app_label: Option<String>,
	table_name: Option<String>,
	pk_field: Option<String>,
	model_fields: Option<Vec<FieldDef>>,
	list_display: Option<Vec<String>>,
	list_filter: Option<Vec<String>>,
	search_fields: Option<Vec<String>>,
	fields: Option<Vec<String>>,
	fieldsets: Option<Vec<Fieldset>>,
	readonly_fields: Option<Vec<String>>,
	ordering: Option<Vec<String>>,
	list_per_page: Option<usize>,
}

fn into_strings(fields: Vec<impl Into<String>>) -> Vec<String> {
	fields.into_iter().map(Into::into).collect()
}

impl ModelAdminConfigBuilder {
	/// Set the model name
	pub fn model_name(mut self, name: impl Into<String>) -> Self {
		self.model_name = Some(name.into());
		self
	}

	/// Set the application label
	///
	/// If not set, defaults to "admin".
	pub fn app_label(mut self, label: impl Into<String>) -> Self {
		self.app_label = Some(label.into());
		self
	}

	/// Set the database table name
	///
	/// If not set, defaults to the model name.
	pub fn table_name(mut self, name: impl Into<String>) -> Self {
		self.table_name = Some(name.into());
		self
	}

	/// Set the primary key field name
	///
	/// If not set, defaults to "id".
	pub fn pk_field(mut self, field: impl Into<String>) -> Self {
		self.pk_field = Some(field.into());
		self
	}

	/// Set the model's field metadata
	pub fn model_fields(mut self, fields: &[FieldDef]) -> Self {
		self.model_fields = Some(fields.to_vec());
		self
	}

	/// Set list display fields
	pub fn list_display(mut self, fields: Vec<impl Into<String>>) -> Self {
		self.list_display = Some(into_strings(fields));
		self
	}

	/// Set list filter fields
	pub fn list_filter(mut self, fields: Vec<impl Into<String>>) -> Self {
		self.list_filter = Some(into_strings(fields));
		self
	}

	/// Set search fields
	pub fn search_fields(mut self, fields: Vec<impl Into<String>>) -> Self {
		self.search_fields = Some(into_strings(fields));
		self
	}

	/// Set form fields
	pub fn fields(mut self, fields: Vec<impl Into<String>>) -> Self {
		self.fields = Some(into_strings(fields));
		self
	}

	/// Set the grouped form layout
	pub fn fieldsets(mut self, fieldsets: Vec<Fieldset>) -> Self {
		self.fieldsets = Some(fieldsets);
		self
	}

	/// Set readonly fields
	pub fn readonly_fields(mut self, fields: Vec<impl Into<String>>) -> Self {
		self.readonly_fields = Some(into_strings(fields));
		self
	}

	/// Set ordering
	pub fn ordering(mut self, fields: Vec<impl Into<String>>) -> Self {
		self.ordering = Some(into_strings(fields));
		self
	}

	/// Set items per page
	pub fn list_per_page(mut self, count: usize) -> Self {
		self.list_per_page = Some(count);
		self
	}

	/// Build the configuration
	///
	/// # Errors
	///
	/// Returns `AdminError::ImproperlyConfigured` if model_name is not set.
	pub fn build(self) -> AdminResult<ModelAdminConfig> {
		let model_name = self.model_name.ok_or_else(|| {
			AdminError::ImproperlyConfigured("model_name is required".to_string())
		})?;

		Ok(ModelAdminConfig {
			model_name,
			app_label: self.app_label.unwrap_or_else(|| "admin".into()),
			table_name: self.table_name,
			pk_field: self.pk_field.unwrap_or_else(|| "id".into()),
			model_fields: self.model_fields.unwrap_or_default(),
			list_display: self.list_display.unwrap_or_else(|| vec!["id".into()]),
			list_filter: self.list_filter.unwrap_or_default(),
			search_fields: self.search_fields.unwrap_or_default(),
			fields: self.fields,
			fieldsets: self.fieldsets.unwrap_or_default(),
			readonly_fields: self.readonly_fields.unwrap_or_default(),
			ordering: self.ordering.unwrap_or_else(|| vec!["-id".into()]),
			list_per_page: self.list_per_page,
		})
	}
}
