//! # showstoppers-admin
//!
//! Admin descriptor layer for ShowsStoppers.
//!
//! A model is administered by implementing [`ModelAdmin`] (or building a
//! [`ModelAdminConfig`]) and registering it with an [`AdminSite`]. The site
//! consumes the descriptor in three places:
//!
//! - **checks**: start-up validation of the descriptor against the model's fields
//! - **changelist**: search, filters, ordering and pagination for the list view
//! - **change_form**: fieldset layout and read-only enforcement for the edit form
//!
//! ## Example
//!
//! ```rust
//! use showstoppers_admin::{AdminSite, Fieldset, ModelAdminConfig};
//!
//! let site = AdminSite::new("admin");
//! site.set_site_header("Library Admin");
//!
//! let book_admin = ModelAdminConfig::builder()
//!     .model_name("Book")
//!     .list_display(vec!["title", "author"])
//!     .search_fields(vec!["title"])
//!     .ordering(vec!["-published"])
//!     .fieldsets(vec![
//!         Fieldset::new("Basic Information").fields(["title", "author"]),
//!         Fieldset::new("System Fields").fields(["published"]).collapse(),
//!     ])
//!     .build()
//!     .unwrap();
//! site.register("Book", book_admin).unwrap();
//!
//! assert!(site.is_registered("Book"));
//! assert_eq!(site.site_header(), "Library Admin");
//! ```

pub mod change_form;
pub mod changelist;
pub mod checks;
pub mod error;
pub mod fields;
pub mod fieldsets;
pub mod limits;
pub mod model_admin;
pub mod ordering;
pub mod settings;
pub mod site;
pub mod types;

pub use change_form::{ChangeForm, FormField, FormSection};
pub use changelist::{ChangeList, DateRange};
pub use checks::{CheckLevel, CheckMessage, check_model_admin};
pub use error::{AdminError, AdminResult};
pub use fields::{AdminModel, FieldDef, FieldType, humanize_field_name};
pub use fieldsets::{Fieldset, FieldsetClass};
pub use model_admin::{ModelAdmin, ModelAdminConfig, ModelAdminConfigBuilder};
pub use ordering::{OrderDirection, OrderingField, parse_ordering};
pub use settings::{AdminSettings, SettingsError};
pub use site::{AdminRegistration, AdminSite};
pub use types::{
	AdminRecord, ColumnInfo, DashboardResponse, FilterChoice, FilterInfo, FilterType,
	ListQueryParams, ListResponse, ModelInfo,
};

// Re-exported for the `inventory::submit!` expansion in downstream crates
pub use inventory;
