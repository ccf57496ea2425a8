//! Admin registration for [`Movie`]

use crate::models::Movie;
use showstoppers_admin::{
	AdminModel, AdminRegistration, AdminSite, FieldDef, Fieldset, ModelAdmin,
};
use std::sync::Arc;

pub const SITE_HEADER: &str = "ShowsStoppers Admin";
pub const SITE_TITLE: &str = "ShowsStoppers Admin Portal";
pub const INDEX_TITLE: &str = "Welcome to ShowsStoppers Admin";

/// Relabel the admin portal
pub fn configure_site(site: &AdminSite) {
	site.set_site_header(SITE_HEADER);
	site.set_site_title(SITE_TITLE);
	site.set_index_title(INDEX_TITLE);
	tracing::debug!(site = site.name(), "applied portal labels");
}

/// List and edit configuration for movies
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieAdmin;

impl ModelAdmin for MovieAdmin {
	fn model_name(&self) -> &str {
		Movie::MODEL_NAME
	}

	fn app_label(&self) -> &str {
		"movies"
	}

	fn table_name(&self) -> &str {
		"movies_movie"
	}

	fn pk_field(&self) -> &str {
		"uuid"
	}

	fn model_fields(&self) -> &[FieldDef] {
		Movie::field_defs()
	}

	fn list_display(&self) -> Vec<&str> {
		vec!["title", "year", "rating", "duration", "director", "created_at"]
	}

	fn search_fields(&self) -> Vec<&str> {
		vec!["title", "director", "year"]
	}

	fn list_filter(&self) -> Vec<&str> {
		vec!["year", "rating", "created_at"]
	}

	fn ordering(&self) -> Vec<&str> {
		vec!["-created_at"]
	}

	fn readonly_fields(&self) -> Vec<&str> {
		vec!["uuid", "created_at"]
	}

	fn fieldsets(&self) -> Vec<Fieldset> {
		vec![
			Fieldset::new("Basic Information").fields([
				"title",
				"description",
				"year",
				"rating",
				"duration",
			]),
			Fieldset::new("Production Details").fields(["director", "screenplay", "production"]),
			Fieldset::new("Media Files").fields(["image", "file"]),
			Fieldset::new("System Fields")
				.fields(["uuid", "created_at"])
				.collapse(),
		]
	}
}

fn movie_admin() -> Arc<dyn ModelAdmin> {
	Arc::new(MovieAdmin)
}

showstoppers_admin::inventory::submit! {
	AdminRegistration::new(Movie::MODEL_NAME, movie_admin)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use showstoppers_admin::check_model_admin;

	#[rstest]
	fn test_movie_admin_passes_checks() {
		// Act
		let messages = check_model_admin(&MovieAdmin);

		// Assert
		assert!(messages.is_empty(), "unexpected: {messages:?}");
	}

	#[rstest]
	fn test_configure_site_relabels_portal() {
		// Arrange
		let site = AdminSite::new("admin");

		// Act
		configure_site(&site);

		// Assert
		assert_eq!(site.site_header(), "ShowsStoppers Admin");
		assert_eq!(site.site_title(), "ShowsStoppers Admin Portal");
		assert_eq!(site.index_title(), "Welcome to ShowsStoppers Admin");
	}
}
