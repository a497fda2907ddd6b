//! In-memory catalog for an AI-ethics education application.
//!
//! This crate holds the content registry behind the application's category
//! grid: themed scenario categories, the ethical-dilemma scenarios inside
//! them, and per-category learning labs that load on demand.
//!
//! # Key Components
//!
//! - [`ContentRegistry`]: catalog of categories, scenarios, and learning labs
//!   with id lookups, linear-scan search, and JSON snapshots
//! - [`CatalogQuery`]: structured search query with composable AND clauses
//! - [`LabSource`]: trait for lazy learning-lab loading (filesystem, embedded,
//!   or test sources)
//! - [`CatalogConfig`]: schema version, lab directory, and search settings
//!
//! # Example
//!
//! ```ignore
//! use catalog::{CatalogConfig, CatalogQuery, ContentRegistry, Difficulty};
//!
//! let registry = ContentRegistry::with_config(CatalogConfig::default());
//! registry.register_category(category).await;
//! registry.register_scenario(scenario).await;
//!
//! let advanced = registry
//!     .search(&CatalogQuery::new().with_difficulty(Difficulty::Advanced))
//!     .await;
//! ```

pub mod config;
pub mod labs;
pub mod query;
pub mod registry;
pub mod types;

// Re-export main types
pub use config::{CatalogConfig, SearchConfig};
pub use labs::{FsLabSource, LabError, LabRepository, LabSource, StaticLabSource};
pub use query::{CatalogQuery, ContentKind, Filterable, SearchResults};
pub use registry::{CatalogError, CatalogExport, ContentRegistry};
pub use types::*;
