//! Clack Core
//!
//! This crate holds the configuration store that every clack session owns.
//! It performs no I/O: parsing command lines, reading seed files and printing
//! values all live in `clack-cli`.
//!
//! ## Key Concepts
//!
//! - **Option**: a named text value
//! - **ConfigStore**: the mapping from option name to option value
//! - **Miss-policy**: a lookup for an absent option yields `None`, never an
//!   empty sentinel
//!
//! ## Example
//!
//! ```
//! use clack_core::ConfigStore;
//!
//! let mut store = ConfigStore::new();
//! store.set_option("editor", "vim").unwrap();
//! store.set_option("editor", "helix").unwrap();
//!
//! assert_eq!(store.get_option("editor"), Some("helix"));
//! assert_eq!(store.get_option("pager"), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod option;
pub mod store;

// Re-exports for convenience
pub use error::{ConfigError, Result};
pub use option::OptionEntry;
pub use store::ConfigStore;
