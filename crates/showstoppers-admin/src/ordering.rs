//! Ordering declarations
//!
//! Entries follow the `"-field"` convention: a leading `-` sorts descending.

use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
	Asc,
	Desc,
}

/// A parsed ordering entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingField {
	pub field: String,
	pub direction: OrderDirection,
}

impl OrderingField {
	/// Parse an ordering entry
	///
	/// # Examples
	///
	/// ```
	/// use showstoppers_admin::{OrderDirection, OrderingField};
	///
	/// let order = OrderingField::parse("-created_at");
	/// assert_eq!(order.field, "created_at");
	/// assert_eq!(order.direction, OrderDirection::Desc);
	/// ```
	pub fn parse(entry: &str) -> Self {
		match entry.strip_prefix('-') {
			Some(field) => Self {
				field: field.to_string(),
				direction: OrderDirection::Desc,
			},
			None => Self {
				field: entry.to_string(),
				direction: OrderDirection::Asc,
			},
		}
	}

	pub fn is_descending(&self) -> bool {
		self.direction == OrderDirection::Desc
	}
}

impl fmt::Display for OrderingField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.direction {
			OrderDirection::Asc => write!(f, "{}", self.field),
			OrderDirection::Desc => write!(f, "-{}", self.field),
		}
	}
}

/// Parse a list of ordering entries, keeping their order
///
/// ```
/// use showstoppers_admin::parse_ordering;
///
/// let fields: Vec<String> = parse_ordering(&["-year", "title"])
/// 	.iter()
/// 	.map(ToString::to_string)
/// 	.collect();
/// assert_eq!(fields, vec!["-year", "title"]);
/// ```
pub fn parse_ordering(entries: &[&str]) -> Vec<OrderingField> {
	entries.iter().map(|e| OrderingField::parse(e)).collect()
}
