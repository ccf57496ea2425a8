//! Movie catalogue
//!
//! ```rust
//! use showstoppers::admin::AdminModel;
//! use showstoppers::movies::Movie;
//!
//! let movie = Movie::new("Arrival", 2016).with_director("Denis Villeneuve");
//! let record = movie.to_record();
//!
//! assert_eq!(record["director"], "Denis Villeneuve");
//! ```

// Link the crate so its admin registration is collected
extern crate showstoppers_movies;

pub use showstoppers_movies::*;
