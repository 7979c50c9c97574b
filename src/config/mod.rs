//! Policy configuration loading for the Timesheet Interpretation Engine.
//!
//! This module loads shift policy definitions from a YAML file into the
//! [`crate::models::PolicyCatalog`] at process start. Policies are immutable
//! once loaded.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policies.yaml").unwrap();
//! println!("Loaded {} policies", loader.catalog().len());
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{PoliciesFile, PolicyConfig, WindowConfig, WindowsConfig};
