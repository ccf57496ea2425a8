//! Movie admin behaviour through the admin site
//!
//! Covers the list view (columns, search, filters, ordering) and the edit
//! form (fieldset layout, read-only identifiers) of the registered MovieAdmin.

use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use serde_json::json;
use showstoppers_admin::{
	AdminError, AdminModel, AdminRecord, AdminSite, ChangeForm, ChangeList, FilterType,
	ListQueryParams, ModelAdmin,
};
use showstoppers_movies::{Movie, MovieAdmin, configure_site};
use std::sync::Arc;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
	Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn now() -> DateTime<Utc> {
	at(2024, 6, 20)
}

#[fixture]
fn movies() -> Vec<Movie> {
	vec![
		Movie::new("Inception", 2010)
			.with_director("Christopher Nolan")
			.with_rating(Decimal::new(88, 1))
			.with_duration(148)
			.with_created_at(at(2024, 1, 5)),
		Movie::new("Interstellar", 2014)
			.with_director("Christopher Nolan")
			.with_rating(Decimal::new(87, 1))
			.with_duration(169)
			.with_created_at(at(2024, 6, 20)),
		Movie::new("Arrival", 2016)
			.with_director("Denis Villeneuve")
			.with_rating(Decimal::new(79, 1))
			.with_duration(116)
			.with_created_at(at(2024, 6, 18)),
		Movie::new("Dune", 2021)
			.with_director("Denis Villeneuve")
			.with_rating(Decimal::new(80, 1))
			.with_duration(155)
			.with_created_at(at(2023, 9, 1)),
	]
}

#[fixture]
fn records(movies: Vec<Movie>) -> Vec<AdminRecord> {
	movies.iter().map(Movie::to_record).collect()
}

#[fixture]
fn site() -> AdminSite {
	let site = AdminSite::new("admin");
	configure_site(&site);
	site.register("Movie", MovieAdmin).unwrap();
	site
}

fn titles(records: &[AdminRecord]) -> Vec<&str> {
	records
		.iter()
		.map(|r| r["title"].as_str().unwrap())
		.collect()
}

#[rstest]
fn test_list_view_shows_six_columns_in_order(site: AdminSite) {
	// Arrange
	let admin = site.get_model_admin("Movie").unwrap();

	// Act
	let columns: Vec<String> = ChangeList::new(admin.as_ref())
		.columns()
		.into_iter()
		.map(|c| c.field)
		.collect();

	// Assert
	assert_eq!(
		columns,
		vec!["title", "year", "rating", "duration", "director", "created_at"]
	);
}

#[rstest]
fn test_search_fields_are_registered(site: AdminSite) {
	// Act
	let admin = site.get_model_admin("Movie").unwrap();

	// Assert
	assert_eq!(admin.search_fields(), vec!["title", "director", "year"]);
}

#[rstest]
#[case::director("villeneuve", vec!["Arrival", "Dune"])]
#[case::title_substring("stell", vec!["Interstellar"])]
#[case::year("2010", vec!["Inception"])]
#[case::director_and_title("nolan inception", vec!["Inception"])]
fn test_search_returns_matching_movies(
	records: Vec<AdminRecord>,
	#[case] query: &str,
	#[case] expected: Vec<&str>,
) {
	// Arrange
	let params = ListQueryParams {
		search: Some(query.to_string()),
		..Default::default()
	};

	// Act
	let response = ChangeList::new(&MovieAdmin)
		.get_list(&records, &params, now())
		.unwrap();

	// Assert
	assert_eq!(titles(&response.results), expected);
}

#[rstest]
fn test_filter_controls_exist_only_for_declared_fields(records: Vec<AdminRecord>) {
	// Act
	let filters = ChangeList::new(&MovieAdmin).filters(&records, &ListQueryParams::default());

	// Assert
	let fields: Vec<&str> = filters.iter().map(|f| f.field.as_str()).collect();
	assert_eq!(fields, vec!["year", "rating", "created_at"]);
	assert_eq!(filters[0].filter_type, FilterType::Choice);
	let years: Vec<&str> = filters[0].choices.iter().map(|c| c.value.as_str()).collect();
	assert_eq!(years, vec!["2010", "2014", "2016", "2021"]);
	assert_eq!(filters[2].filter_type, FilterType::DateRange);
}

#[rstest]
#[case::year("year", "2014", vec!["Interstellar"])]
#[case::rating("rating", "8.0", vec!["Dune"])]
#[case::created_today("created_at", "today", vec!["Interstellar"])]
#[case::created_this_week("created_at", "past_7_days", vec!["Interstellar", "Arrival"])]
#[case::created_this_year("created_at", "this_year", vec!["Interstellar", "Arrival", "Inception"])]
fn test_filters_narrow_the_list(
	records: Vec<AdminRecord>,
	#[case] field: &str,
	#[case] value: &str,
	#[case] expected: Vec<&str>,
) {
	// Arrange
	let mut params = ListQueryParams::default();
	params.filters.insert(field.to_string(), value.to_string());

	// Act
	let response = ChangeList::new(&MovieAdmin)
		.get_list(&records, &params, now())
		.unwrap();

	// Assert
	assert_eq!(titles(&response.results), expected);
}

#[rstest]
#[case("director")]
#[case("duration")]
fn test_undeclared_filters_are_rejected(records: Vec<AdminRecord>, #[case] field: &str) {
	// Arrange
	let mut params = ListQueryParams::default();
	params.filters.insert(field.to_string(), "x".to_string());

	// Act
	let result = ChangeList::new(&MovieAdmin).get_list(&records, &params, now());

	// Assert
	assert!(matches!(result, Err(AdminError::ValidationError(_))));
}

#[rstest]
fn test_default_ordering_places_newest_first(records: Vec<AdminRecord>) {
	// Act
	let response = ChangeList::new(&MovieAdmin)
		.get_list(&records, &ListQueryParams::default(), now())
		.unwrap();

	// Assert
	assert_eq!(
		titles(&response.results),
		vec!["Interstellar", "Arrival", "Inception", "Dune"]
	);
}

#[rstest]
#[case::uuid("uuid", json!("00000000-0000-0000-0000-000000000000"))]
#[case::created_at("created_at", json!("2000-01-01T00:00:00.000000Z"))]
fn test_identifier_and_timestamp_edits_are_rejected(
	movies: Vec<Movie>,
	#[case] field: &str,
	#[case] value: serde_json::Value,
) {
	// Arrange
	let existing = movies[0].to_record();
	let data = AdminRecord::from([
		("title".to_string(), json!("Inception (Director's Cut)")),
		(field.to_string(), value),
	]);

	// Act
	let result = ChangeForm::new(&MovieAdmin).apply(&existing, data);

	// Assert
	assert!(matches!(
		result,
		Err(AdminError::ValidationError(ref msg)) if msg.contains(&format!("'{field}'"))
	));
}

#[rstest]
fn test_editable_fields_are_applied(movies: Vec<Movie>) {
	// Arrange
	let existing = movies[0].to_record();
	let data = AdminRecord::from([
		("director".to_string(), json!("C. Nolan")),
		("rating".to_string(), json!(9.0)),
	]);

	// Act
	let updated = ChangeForm::new(&MovieAdmin).apply(&existing, data).unwrap();

	// Assert
	assert_eq!(updated["director"], json!("C. Nolan"));
	assert_eq!(updated["uuid"], existing["uuid"]);
	assert_eq!(updated["created_at"], existing["created_at"]);
}

#[rstest]
fn test_edit_form_renders_four_sections(movies: Vec<Movie>) {
	// Arrange
	let record = movies[1].to_record();

	// Act
	let sections = ChangeForm::new(&MovieAdmin).layout(Some(&record));

	// Assert
	let names: Vec<&str> = sections.iter().filter_map(|s| s.name.as_deref()).collect();
	assert_eq!(
		names,
		vec!["Basic Information", "Production Details", "Media Files", "System Fields"]
	);
	let collapsed: Vec<bool> = sections.iter().map(|s| s.collapsed).collect();
	assert_eq!(collapsed, vec![false, false, false, true]);

	let system = &sections[3];
	assert!(system.fields.iter().all(|f| f.readonly));
	assert_eq!(system.fields[0].value, Some(json!(movies[1].uuid.to_string())));
	assert!(sections[..3].iter().flat_map(|s| &s.fields).all(|f| !f.readonly));
}

#[rstest]
fn test_site_labels_and_dashboard(site: AdminSite) {
	// Act
	let dashboard = site.dashboard();

	// Assert
	assert_eq!(dashboard.site_header, "ShowsStoppers Admin");
	assert_eq!(dashboard.site_title, "ShowsStoppers Admin Portal");
	assert_eq!(dashboard.index_title, "Welcome to ShowsStoppers Admin");
	assert_eq!(dashboard.models.len(), 1);
	assert_eq!(dashboard.models[0].list_url, "/admin/movies/movie/");
}

#[rstest]
fn test_autodiscover_registers_movie_admin() {
	// Arrange
	let site = AdminSite::new("admin");

	// Act
	let count = site.autodiscover().unwrap();

	// Assert
	assert!(count >= 1);
	let admin: Arc<dyn ModelAdmin> = site.get_model_admin("Movie").unwrap();
	assert_eq!(admin.pk_field(), "uuid");
	assert!(site.run_checks().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_movie_admin_keeps_default_permissions() {
	// Arrange
	let staff = "staff";

	// Act & Assert
	assert!(MovieAdmin.has_view_permission(&staff).await);
	assert!(MovieAdmin.has_change_permission(&staff).await);
}
