//! Policy configuration loading.
//!
//! This module provides the [`PolicyLoader`] type for building the
//! [`PolicyCatalog`] from a YAML policy file at process start.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayClass, PolicyCatalog, ShiftPolicy};

use super::types::PoliciesFile;

/// Loads shift policies from YAML and exposes the resulting catalog.
///
/// # File Structure
///
/// ```text
/// config/
/// └── policies.yaml   # All shift policies, keyed by code
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policies.yaml").unwrap();
/// let policy = loader.catalog().resolve("H4").unwrap();
/// println!("Loaded policy: {}", policy.name);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    catalog: PolicyCatalog,
}

impl PolicyLoader {
    /// Loads and validates the policy file at `path`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when the file is missing.
    /// - [`EngineError::ConfigParseError`] on invalid YAML or a policy
    ///   missing a day window.
    /// - [`EngineError::InvalidPolicy`] when a definition parses but fails
    ///   validation (non-positive multiplier, inverted window, break
    ///   allowance exceeding the scheduled duration).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: PoliciesFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        let catalog = Self::build_catalog(file)?;
        Ok(Self { catalog })
    }

    /// Validates every definition and registers it in a fresh catalog.
    fn build_catalog(file: PoliciesFile) -> EngineResult<PolicyCatalog> {
        let mut catalog = PolicyCatalog::new();
        for (code, config) in file.policies {
            let policy = config.into_policy(code);
            Self::validate_policy(&policy)?;
            catalog.register(policy)?;
        }
        Ok(catalog)
    }

    fn validate_policy(policy: &ShiftPolicy) -> EngineResult<()> {
        if policy.overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                code: policy.code.clone(),
                message: format!(
                    "overtime multiplier must be positive, got {}",
                    policy.overtime_multiplier
                ),
            });
        }

        for day in [
            DayClass::Monday,
            DayClass::Tuesday,
            DayClass::Wednesday,
            DayClass::Thursday,
            DayClass::Friday,
            DayClass::Saturday,
            DayClass::Sunday,
            DayClass::Holiday,
        ] {
            let window = policy.window_for(day);
            if window.scheduled_end < window.scheduled_start {
                return Err(EngineError::InvalidPolicy {
                    code: policy.code.clone(),
                    message: format!("{} window ends before it starts", day),
                });
            }
            if i64::from(window.unpaid_break_minutes) > window.scheduled_minutes() {
                return Err(EngineError::InvalidPolicy {
                    code: policy.code.clone(),
                    message: format!(
                        "{} break allowance of {} minutes exceeds the {}-minute scheduled duration",
                        day,
                        window.unpaid_break_minutes,
                        window.scheduled_minutes()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &PolicyCatalog {
        &self.catalog
    }

    /// Consumes the loader, yielding the catalog.
    pub fn into_catalog(self) -> PolicyCatalog {
        self.catalog
    }
}
