//! List view: search, filters, ordering and pagination
//!
//! The change list works on records already loaded by the caller. Query
//! semantics follow the model admin: search is OR across `search_fields`
//! and AND across terms, filters are restricted to `list_filter`, and the
//! default order comes from `ordering`.

use crate::error::{AdminError, AdminResult};
use crate::fields::{FieldType, display_value, find_field, humanize_field_name};
use crate::limits::{DEFAULT_LIST_PER_PAGE, MAX_PAGE_SIZE, MAX_SEARCH_LENGTH};
use crate::model_admin::ModelAdmin;
use crate::ordering::{OrderingField, parse_ordering};
use crate::types::{
	AdminRecord, ColumnInfo, FilterChoice, FilterInfo, FilterType, ListQueryParams, ListResponse,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde_json::Value;
use std::cmp::Ordering;

/// Relative date range offered by date filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
	Today,
	Past7Days,
	ThisMonth,
	ThisYear,
}

impl DateRange {
	pub const ALL: [DateRange; 4] = [
		DateRange::Today,
		DateRange::Past7Days,
		DateRange::ThisMonth,
		DateRange::ThisYear,
	];

	/// Parse a filter value
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"today" => Some(DateRange::Today),
			"past_7_days" => Some(DateRange::Past7Days),
			"this_month" => Some(DateRange::ThisMonth),
			"this_year" => Some(DateRange::ThisYear),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			DateRange::Today => "today",
			DateRange::Past7Days => "past_7_days",
			DateRange::ThisMonth => "this_month",
			DateRange::ThisYear => "this_year",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			DateRange::Today => "Today",
			DateRange::Past7Days => "Past 7 days",
			DateRange::ThisMonth => "This month",
			DateRange::ThisYear => "This year",
		}
	}

	/// Whether `date` falls in this range relative to `today`
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use showstoppers_admin::DateRange;
	///
	/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
	/// let last_week = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
	///
	/// assert!(DateRange::Past7Days.contains(last_week, today));
	/// assert!(!DateRange::Today.contains(last_week, today));
	/// ```
	pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
		match self {
			DateRange::Today => date == today,
			DateRange::Past7Days => date >= today - Duration::days(7) && date <= today,
			DateRange::ThisMonth => date.year() == today.year() && date.month() == today.month(),
			DateRange::ThisYear => date.year() == today.year(),
		}
	}
}

/// Split a search query into lowercase terms; double quotes group words
fn split_search_terms(query: &str) -> Vec<String> {
	let mut terms = Vec::new();
	let mut current = String::new();
	let mut quoted = false;

	for c in query.chars() {
		match c {
			'"' => quoted = !quoted,
			c if c.is_whitespace() && !quoted => {
				if !current.is_empty() {
					terms.push(std::mem::take(&mut current).to_lowercase());
				}
			}
			c => current.push(c),
		}
	}
	if !current.is_empty() {
		terms.push(current.to_lowercase());
	}
	terms
}

fn record_date(value: &Value) -> Option<NaiveDate> {
	let Value::String(s) = value else {
		return None;
	};
	DateTime::parse_from_rfc3339(s)
		.map(|dt| dt.with_timezone(&Utc).date_naive())
		.ok()
		.or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn compare_values(left: &Value, right: &Value, field_type: Option<FieldType>) -> Ordering {
	if field_type == Some(FieldType::DateTime)
		&& let (Value::String(l), Value::String(r)) = (left, right)
		&& let (Ok(l), Ok(r)) = (DateTime::parse_from_rfc3339(l), DateTime::parse_from_rfc3339(r))
	{
		return l.cmp(&r);
	}

	match (left, right) {
		(Value::Number(l), Value::Number(r)) => l
			.as_f64()
			.unwrap_or_default()
			.total_cmp(&r.as_f64().unwrap_or_default()),
		(Value::String(l), Value::String(r)) => l.cmp(r),
		(Value::Bool(l), Value::Bool(r)) => l.cmp(r),
		_ => display_value(left).cmp(&display_value(right)),
	}
}

/// List view of one model admin
pub struct ChangeList<'a> {
	model_admin: &'a dyn ModelAdmin,
	default_per_page: usize,
}

impl<'a> ChangeList<'a> {
	pub fn new(model_admin: &'a dyn ModelAdmin) -> Self {
		Self {
			model_admin,
			default_per_page: DEFAULT_LIST_PER_PAGE,
		}
	}

	/// Page size used when neither the request nor the model admin sets one
	pub fn with_default_per_page(mut self, per_page: usize) -> Self {
		self.default_per_page = per_page.max(1);
		self
	}

	fn field_type(&self, name: &str) -> Option<FieldType> {
		find_field(self.model_admin.model_fields(), name).map(|f| f.field_type)
	}

	fn is_model_field(&self, name: &str) -> bool {
		let fields = self.model_admin.model_fields();
		fields.is_empty() || find_field(fields, name).is_some()
	}

	/// Columns of the list view, in `list_display` order
	pub fn columns(&self) -> Vec<ColumnInfo> {
		self.model_admin
			.list_display()
			.iter()
			.map(|field| ColumnInfo {
				field: field.to_string(),
				label: humanize_field_name(field),
				sortable: self.is_model_field(field),
			})
			.collect()
	}

	/// Filter controls, one per `list_filter` field
	///
	/// Date fields offer relative ranges; other fields offer their distinct values.
	pub fn filters(&self, records: &[AdminRecord], params: &ListQueryParams) -> Vec<FilterInfo> {
		self.model_admin
			.list_filter()
			.iter()
			.map(|field| {
				let field_type = self.field_type(field);
				let temporal = field_type.is_some_and(FieldType::is_temporal);
				let choices = if temporal {
					DateRange::ALL
						.iter()
						.map(|range| FilterChoice {
							value: range.as_str().to_string(),
							label: range.label().to_string(),
						})
						.collect()
				} else {
					let mut values: Vec<&Value> = records
						.iter()
						.filter_map(|r| r.get(*field))
						.filter(|v| !v.is_null())
						.collect();
					values.sort_by(|a, b| compare_values(a, b, field_type));
					values.dedup_by(|a, b| display_value(*a) == display_value(*b));
					values
						.into_iter()
						.map(|v| {
							let text = display_value(v);
							FilterChoice {
								value: text.clone(),
								label: text,
							}
						})
						.collect()
				};

				FilterInfo {
					field: field.to_string(),
					title: humanize_field_name(field),
					filter_type: if temporal {
						FilterType::DateRange
					} else {
						FilterType::Choice
					},
					choices,
					current_value: params.filters.get(*field).cloned(),
				}
			})
			.collect()
	}

	fn matches_search(&self, record: &AdminRecord, terms: &[String], fields: &[&str]) -> bool {
		terms.iter().all(|term| {
			fields.iter().any(|field| {
				record
					.get(*field)
					.is_some_and(|v| display_value(v).to_lowercase().contains(term.as_str()))
			})
		})
	}

	fn matches_filters(
		&self,
		record: &AdminRecord,
		filters: &[(String, FilterValue)],
		today: NaiveDate,
	) -> bool {
		filters.iter().all(|(field, expected)| {
			let value = record.get(field).unwrap_or(&Value::Null);
			match expected {
				FilterValue::Exact(expected) => display_value(value) == *expected,
				FilterValue::Range(range) => {
					record_date(value).is_some_and(|date| range.contains(date, today))
				}
			}
		})
	}

	fn resolve_filters(&self, params: &ListQueryParams) -> AdminResult<Vec<(String, FilterValue)>> {
		let allowed = self.model_admin.list_filter();
		let mut filters = Vec::with_capacity(params.filters.len());
		for (field, value) in &params.filters {
			if !allowed.contains(&field.as_str()) {
				return Err(AdminError::ValidationError(format!(
					"Unknown filter field '{}'. Allowed filter fields: {:?}",
					field, allowed
				)));
			}
			let temporal = self.field_type(field).is_some_and(FieldType::is_temporal);
			let filter = if temporal {
				let range = DateRange::parse(value).ok_or_else(|| {
					AdminError::ValidationError(format!(
						"Unknown date range '{}' for filter field '{}'",
						value, field
					))
				})?;
				FilterValue::Range(range)
			} else {
				FilterValue::Exact(value.clone())
			};
			filters.push((field.clone(), filter));
		}
		Ok(filters)
	}

	fn resolve_ordering(&self, params: &ListQueryParams) -> AdminResult<Vec<OrderingField>> {
		let mut ordering = Vec::new();
		if let Some(sort_by) = params.sort_by.as_deref() {
			let requested = OrderingField::parse(sort_by);
			if !self
				.model_admin
				.list_display()
				.contains(&requested.field.as_str())
			{
				return Err(AdminError::ValidationError(format!(
					"Cannot sort by '{}': not a displayed column",
					requested.field
				)));
			}
			ordering.push(requested);
		}
		ordering.extend(parse_ordering(&self.model_admin.ordering()));
		// Primary key last so pages are stable
		ordering.push(OrderingField::parse(&format!(
			"-{}",
			self.model_admin.pk_field()
		)));
		Ok(ordering)
	}

	fn compare_records(&self, a: &AdminRecord, b: &AdminRecord, ordering: &[OrderingField]) -> Ordering {
		for order in ordering {
			let left = a.get(&order.field).filter(|v| !v.is_null());
			let right = b.get(&order.field).filter(|v| !v.is_null());
			let result = match (left, right) {
				(None, None) => Ordering::Equal,
				(None, Some(_)) => Ordering::Greater,
				(Some(_), None) => Ordering::Less,
				(Some(l), Some(r)) => {
					let ord = compare_values(l, r, self.field_type(&order.field));
					if order.is_descending() { ord.reverse() } else { ord }
				}
			};
			if result != Ordering::Equal {
				return result;
			}
		}
		Ordering::Equal
	}

	/// Run a list query over `records`
	///
	/// `now` anchors the relative date filters.
	///
	/// # Errors
	///
	/// Returns `AdminError::ValidationError` for filters on fields outside
	/// `list_filter`, unknown date ranges, sorting by a field that is not
	/// displayed, or an oversized search query.
	pub fn get_list(
		&self,
		records: &[AdminRecord],
		params: &ListQueryParams,
		now: DateTime<Utc>,
	) -> AdminResult<ListResponse> {
		let search = params.search.as_deref().unwrap_or("");
		if search.len() > MAX_SEARCH_LENGTH {
			return Err(AdminError::ValidationError(format!(
				"Search query too long: {} bytes (max {})",
				search.len(),
				MAX_SEARCH_LENGTH
			)));
		}
		let terms = split_search_terms(search);
		let search_fields = self.model_admin.search_fields();
		let filters = self.resolve_filters(params)?;
		let ordering = self.resolve_ordering(params)?;
		let today = now.date_naive();

		let mut matched: Vec<&AdminRecord> = records
			.iter()
			.filter(|r| search_fields.is_empty() || self.matches_search(r, &terms, &search_fields))
			.filter(|r| self.matches_filters(r, &filters, today))
			.collect();
		matched.sort_by(|a, b| self.compare_records(a, b, &ordering));

		let page = params.page.unwrap_or(1).max(1);
		let page_size = params
			.page_size
			.filter(|size| *size > 0)
			.unwrap_or_else(|| {
				self.model_admin
					.list_per_page()
					.filter(|size| *size > 0)
					.unwrap_or(self.default_per_page) as u64
			})
			.min(MAX_PAGE_SIZE);
		let count = matched.len() as u64;
		let total_pages = count.div_ceil(page_size);
		let offset = (page - 1).saturating_mul(page_size);

		let list_display = self.model_admin.list_display();
		let pk_field = self.model_admin.pk_field();
		let results = matched
			.into_iter()
			.skip(usize::try_from(offset).unwrap_or(usize::MAX))
			.take(page_size as usize)
			.map(|record| {
				record
					.iter()
					.filter(|(k, _)| k.as_str() == pk_field || list_display.contains(&k.as_str()))
					.map(|(k, v)| (k.clone(), v.clone()))
					.collect()
			})
			.collect();

		tracing::debug!(
			model = self.model_admin.model_name(),
			count,
			page,
			"change list query"
		);

		Ok(ListResponse {
			model_name: self.model_admin.model_name().to_string(),
			count,
			page,
			page_size,
			total_pages,
			results,
			available_filters: self.filters(records, params),
			columns: self.columns(),
		})
	}
}

enum FilterValue {
	Exact(String),
	Range(DateRange),
}
