//! Request and response types for the admin views

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single record as the admin sees it: field name to JSON value
pub type AdminRecord = HashMap<String, serde_json::Value>;

/// Query parameters for the list view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQueryParams {
	/// Free-text search query
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub search: Option<String>,
	/// Field filters (field name to selected value)
	#[serde(default)]
	pub filters: HashMap<String, String>,
	/// Sort field, prefixed with `-` for descending
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sort_by: Option<String>,
	/// Page number (1-based)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page: Option<u64>,
	/// Items per page
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page_size: Option<u64>,
}

/// Column of the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
	pub field: String,
	pub label: String,
	pub sortable: bool,
}

/// How a list filter is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
	/// One choice per distinct value
	Choice,
	/// Relative date ranges
	DateRange,
}

/// A selectable filter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChoice {
	pub value: String,
	pub label: String,
}

/// A filter control of the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInfo {
	pub field: String,
	pub title: String,
	pub filter_type: FilterType,
	pub choices: Vec<FilterChoice>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_value: Option<String>,
}

/// Response for the list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
	/// Model name
	pub model_name: String,
	/// Total count of matching items
	pub count: u64,
	/// Current page
	pub page: u64,
	/// Items per page
	pub page_size: u64,
	/// Total pages
	pub total_pages: u64,
	/// Items on this page, restricted to the displayed columns
	pub results: Vec<AdminRecord>,
	/// Filter controls
	pub available_filters: Vec<FilterInfo>,
	/// Column definitions
	pub columns: Vec<ColumnInfo>,
}

/// Summary of a registered model for the index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
	pub name: String,
	pub app_label: String,
	pub list_url: String,
}

/// Response for the index page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
	/// Site name
	pub site_name: String,
	/// Header shown on every admin page
	pub site_header: String,
	/// Browser title suffix
	pub site_title: String,
	/// Index page heading
	pub index_title: String,
	/// URL prefix
	pub url_prefix: String,
	/// Registered models
	pub models: Vec<ModelInfo>,
}

