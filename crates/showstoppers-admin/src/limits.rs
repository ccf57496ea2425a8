//! Limits applied to list queries and form submissions

/// Page size used when neither the request nor the model admin sets one
pub const DEFAULT_LIST_PER_PAGE: usize = 100;

/// Upper bound on the page size of the list view
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Maximum number of fields in a form submission
pub const MAX_FIELDS: usize = 100;

/// Maximum string length for a single submitted value (in bytes)
pub const MAX_STRING_LENGTH: usize = 1_000_000;

/// Maximum length of a search query (in bytes)
pub const MAX_SEARCH_LENGTH: usize = 500;
