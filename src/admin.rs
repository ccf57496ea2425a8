//! Admin descriptor layer
//!
//! Unified imports for the admin site, model admins and the list and edit
//! views they drive.
//!
//! ## Example
//!
//! ```rust
//! use showstoppers::admin::*;
//!
//! let site = AdminSite::new("admin");
//! let series_admin = ModelAdminConfig::builder()
//!     .model_name("Series")
//!     .list_display(vec!["id", "title"])
//!     .build()
//!     .unwrap();
//! site.register("Series", series_admin).unwrap();
//!
//! assert_eq!(site.registered_models(), vec!["Series"]);
//! ```

pub use showstoppers_admin::*;
