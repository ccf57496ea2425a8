//! Movie record type

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::json;
use showstoppers_admin::{AdminModel, AdminRecord, FieldDef, FieldType};
use uuid::Uuid;

/// A movie in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
	pub uuid: Uuid,
	pub title: String,
	pub description: String,
	pub year: i32,
	/// Rating out of ten, one decimal place
	pub rating: Decimal,
	/// Running time in minutes
	pub duration: u32,
	pub director: String,
	pub screenplay: String,
	/// Production company
	pub production: String,
	/// Poster image path
	pub image: Option<String>,
	/// Attached file path
	pub file: Option<String>,
	pub created_at: DateTime<Utc>,
}

const MOVIE_FIELDS: &[FieldDef] = &[
	FieldDef::new("uuid", FieldType::Uuid).non_editable(),
	FieldDef::new("title", FieldType::Text),
	FieldDef::new("description", FieldType::TextArea).optional(),
	FieldDef::new("year", FieldType::Integer),
	FieldDef::new("rating", FieldType::Decimal),
	FieldDef::new("duration", FieldType::Integer),
	FieldDef::new("director", FieldType::Text),
	FieldDef::new("screenplay", FieldType::Text).optional(),
	FieldDef::new("production", FieldType::Text).optional(),
	FieldDef::new("image", FieldType::Image).optional(),
	FieldDef::new("file", FieldType::File).optional(),
	FieldDef::new("created_at", FieldType::DateTime).non_editable(),
];

impl Movie {
	/// Create a movie stamped with a fresh identifier and the current time
	pub fn new(title: impl Into<String>, year: i32) -> Self {
		Self {
			uuid: Uuid::new_v4(),
			title: title.into(),
			description: String::new(),
			year,
			rating: Decimal::ZERO,
			duration: 0,
			director: String::new(),
			screenplay: String::new(),
			production: String::new(),
			image: None,
			file: None,
			created_at: Utc::now(),
		}
	}

	pub fn with_director(mut self, director: impl Into<String>) -> Self {
		self.director = director.into();
		self
	}

	/// Set the rating, rounded to one decimal place
	pub fn with_rating(mut self, rating: Decimal) -> Self {
		self.rating = rating.round_dp(1);
		self
	}

	pub fn with_duration(mut self, minutes: u32) -> Self {
		self.duration = minutes;
		self
	}

	pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
		self.created_at = created_at;
		self
	}
}

impl AdminModel for Movie {
	const MODEL_NAME: &'static str = "Movie";

	fn field_defs() -> &'static [FieldDef] {
		MOVIE_FIELDS
	}

	fn to_record(&self) -> AdminRecord {
		AdminRecord::from([
			("uuid".to_string(), json!(self.uuid.to_string())),
			("title".to_string(), json!(self.title)),
			("description".to_string(), json!(self.description)),
			("year".to_string(), json!(self.year)),
			("rating".to_string(), json!(self.rating.to_f64())),
			("duration".to_string(), json!(self.duration)),
			("director".to_string(), json!(self.director)),
			("screenplay".to_string(), json!(self.screenplay)),
			("production".to_string(), json!(self.production)),
			("image".to_string(), json!(self.image)),
			("file".to_string(), json!(self.file)),
			(
				"created_at".to_string(),
				json!(self.created_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
			),
		])
	}
}
