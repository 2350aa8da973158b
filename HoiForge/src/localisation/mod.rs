//! Localisation search
//!
//! Finds localisation keys by their display text, e.g. to look up the key of
//! a string seen in game:
//!
//! ```no_run
//! use std::path::Path;
//! use hoiforge::localisation::search;
//!
//! for hit in search(Path::new("Hearts of Iron IV/localisation"), "Reichstag")? {
//!     println!("{hit}");
//! }
//! # Ok::<(), hoiforge::Error>(())
//! ```

pub mod search;
pub mod types;

pub use search::{search, search_all, LocalisationSearch, LOCALISATION_EXTENSION};
pub use types::{LocalisationMatch, SearchReport};
