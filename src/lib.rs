//! Site crawl configuration loader
//!
//! Reads a JSON file describing per-site crawl parameters, checks that the
//! required keys are present and returns the document untouched.
//!
//! ## Document Shape
//!
//! ```text
//! sites → <site name> → url, max_pages, max_depth, crawl_delay, data_elements
//!                                                               → name, selector, type
//! ```
//!
//! Validation stops at the first problem found and reports it as a typed
//! [`ConfigError`]. Values are never coerced: `max_pages` only has to exist.
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "sites": {
//!     "books": {
//!       "url": "https://books.example.com",
//!       "max_pages": 50,
//!       "max_depth": 3,
//!       "crawl_delay": 1.5,
//!       "data_elements": [
//!         {"name": "title", "selector": "h1.title", "type": "text"}
//!       ]
//!     }
//!   }
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export main types
pub use config::{Configuration, DataElement, SiteConfig, SiteRegistry, load_config};
pub use error::{AppError, ConfigError, ErrorKind, Result, SchemaError};
pub use settings::{Settings, load_settings};
