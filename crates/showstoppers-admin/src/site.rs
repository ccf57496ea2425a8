//! Admin site: labels and model registry

use crate::checks::{CheckMessage, check_model_admin};
use crate::error::{AdminError, AdminResult};
use crate::model_admin::ModelAdmin;
use crate::settings::AdminSettings;
use crate::types::{DashboardResponse, ModelInfo};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A model admin submitted for autodiscovery
///
/// Downstream crates submit one per administered model:
///
/// ```rust,ignore
/// showstoppers_admin::inventory::submit! {
///     AdminRegistration::new("Movie", || Arc::new(MovieAdmin))
/// }
/// ```
pub struct AdminRegistration {
	pub model_name: &'static str,
	pub factory: fn() -> Arc<dyn ModelAdmin>,
}

impl AdminRegistration {
	pub const fn new(model_name: &'static str, factory: fn() -> Arc<dyn ModelAdmin>) -> Self {
		Self {
			model_name,
			factory,
		}
	}
}

inventory::collect!(AdminRegistration);

#[derive(Debug, Clone)]
struct SiteLabels {
	site_header: String,
	site_title: String,
	index_title: String,
}

impl Default for SiteLabels {
	fn default() -> Self {
		Self {
			site_header: "Site administration".to_string(),
			site_title: "Site admin".to_string(),
			index_title: "Site administration".to_string(),
		}
	}
}

/// The admin site
///
/// Labels and registrations sit behind locks so a site shared through an
/// `Arc` can still be configured during start-up.
pub struct AdminSite {
	name: String,
	url_prefix: String,
	list_per_page: usize,
	labels: RwLock<SiteLabels>,
	registry: RwLock<HashMap<String, Arc<dyn ModelAdmin>>>,
}

impl fmt::Debug for AdminSite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AdminSite")
			.field("name", &self.name)
			.field("url_prefix", &self.url_prefix)
			.field("labels", &*self.labels.read())
			.field("models", &self.registered_models())
			.finish()
	}
}

impl AdminSite {
	/// Create a site with default labels
	pub fn new(name: impl Into<String>) -> Self {
		let defaults = AdminSettings::default();
		Self {
			name: name.into(),
			url_prefix: defaults.url_prefix,
			list_per_page: defaults.list_per_page,
			labels: RwLock::new(SiteLabels::default()),
			registry: RwLock::new(HashMap::new()),
		}
	}

	/// Create a site from settings
	pub fn from_settings(name: impl Into<String>, settings: &AdminSettings) -> Self {
		let site = Self {
			url_prefix: settings.url_prefix.clone(),
			list_per_page: settings.list_per_page,
			..Self::new(name)
		};
		site.apply_label_overrides(settings);
		site
	}

	/// Apply the labels set in `settings`, leaving unset ones untouched
	pub fn apply_label_overrides(&self, settings: &AdminSettings) {
		let mut labels = self.labels.write();
		if let Some(header) = &settings.site_header {
			labels.site_header = header.clone();
		}
		if let Some(title) = &settings.site_title {
			labels.site_title = title.clone();
		}
		if let Some(index) = &settings.index_title {
			labels.index_title = index.clone();
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn url_prefix(&self) -> &str {
		&self.url_prefix
	}

	/// Page size used when a model admin does not set one
	pub fn list_per_page(&self) -> usize {
		self.list_per_page
	}

	/// Header shown at the top of every admin page
	pub fn site_header(&self) -> String {
		self.labels.read().site_header.clone()
	}

	pub fn set_site_header(&self, header: impl Into<String>) {
		self.labels.write().site_header = header.into();
	}

	/// Suffix of the browser title
	pub fn site_title(&self) -> String {
		self.labels.read().site_title.clone()
	}

	pub fn set_site_title(&self, title: impl Into<String>) {
		self.labels.write().site_title = title.into();
	}

	/// Heading of the index page
	pub fn index_title(&self) -> String {
		self.labels.read().index_title.clone()
	}

	pub fn set_index_title(&self, title: impl Into<String>) {
		self.labels.write().index_title = title.into();
	}

	/// Register a model admin
	///
	/// # Errors
	///
	/// Returns `AdminError::AlreadyRegistered` if the model is already registered.
	pub fn register(&self, model_name: &str, admin: impl ModelAdmin + 'static) -> AdminResult<()> {
		self.register_arc(model_name, Arc::new(admin))
	}

	/// Register a shared model admin
	pub fn register_arc(&self, model_name: &str, admin: Arc<dyn ModelAdmin>) -> AdminResult<()> {
		let mut registry = self.registry.write();
		if registry.contains_key(model_name) {
			return Err(AdminError::AlreadyRegistered(model_name.to_string()));
		}
		tracing::debug!(site = %self.name, model = model_name, "registered model admin");
		registry.insert(model_name.to_string(), admin);
		Ok(())
	}

	/// Remove a registration
	pub fn unregister(&self, model_name: &str) -> AdminResult<()> {
		self.registry
			.write()
			.remove(model_name)
			.map(|_| ())
			.ok_or_else(|| AdminError::ModelNotRegistered(model_name.to_string()))
	}

	pub fn is_registered(&self, model_name: &str) -> bool {
		self.registry.read().contains_key(model_name)
	}

	/// Get the model admin of a registered model
	pub fn get_model_admin(&self, model_name: &str) -> AdminResult<Arc<dyn ModelAdmin>> {
		self.registry
			.read()
			.get(model_name)
			.cloned()
			.ok_or_else(|| AdminError::ModelNotRegistered(model_name.to_string()))
	}

	/// Registered model names, sorted
	pub fn registered_models(&self) -> Vec<String> {
		let mut names: Vec<String> = self.registry.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Register every model admin submitted through `inventory`
	///
	/// Returns the number of registrations added.
	pub fn autodiscover(&self) -> AdminResult<usize> {
		let mut count = 0;
		for registration in inventory::iter::<AdminRegistration> {
			self.register_arc(registration.model_name, (registration.factory)())?;
			count += 1;
		}
		tracing::info!(site = %self.name, count, "admin autodiscovery finished");
		Ok(count)
	}

	/// Run the checks of every registered model admin
	///
	/// Returns the warnings when no check fails.
	///
	/// # Errors
	///
	/// Returns `AdminError::ImproperlyConfigured` listing every error found.
	pub fn run_checks(&self) -> AdminResult<Vec<CheckMessage>> {
		let messages: Vec<CheckMessage> = {
			let registry = self.registry.read();
			let mut names: Vec<&String> = registry.keys().collect();
			names.sort();
			names
				.into_iter()
				.flat_map(|name| check_model_admin(&*registry[name]))
				.collect()
		};

		let errors: Vec<String> = messages
			.iter()
			.filter(|m| m.is_error())
			.map(|m| m.to_string())
			.collect();
		if !errors.is_empty() {
			return Err(AdminError::ImproperlyConfigured(errors.join("\n")));
		}

		Ok(messages)
	}

	/// Index page data
	pub fn dashboard(&self) -> DashboardResponse {
		let labels = self.labels.read().clone();
		let mut models: Vec<ModelInfo> = self
			.registry
			.read()
			.iter()
			.map(|(name, admin)| ModelInfo {
				name: name.clone(),
				app_label: admin.app_label().to_string(),
				list_url: format!(
					"{}{}/{}/",
					self.url_prefix,
					admin.app_label(),
					name.to_lowercase()
				),
			})
			.collect();
		models.sort_by(|a, b| a.name.cmp(&b.name));

		DashboardResponse {
			site_name: self.name.clone(),
			site_header: labels.site_header,
			site_title: labels.site_title,
			index_title: labels.index_title,
			url_prefix: self.url_prefix.clone(),
			models,
		}
	}
}
