//! Application state for the Timesheet Interpretation Engine API.
//!
//! This module defines the shared application state available to all request
//! handlers: the read-only policy catalog and the record store. The store is
//! an in-memory map standing in for the deployment persistence layer; its
//! write lock serializes mutations of the same record so the workflow's
//! compare-and-swap checks observe a stable state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyComputation, DailyRecord, PolicyCatalog};

/// In-memory store of daily records, keyed by (employee_id, date).
#[derive(Clone, Default)]
pub struct RecordStore {
    records: Arc<RwLock<HashMap<(String, NaiveDate), DailyRecord>>>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches a copy of the record for (employee_id, date).
    pub async fn get(&self, employee_id: &str, date: NaiveDate) -> Option<DailyRecord> {
        let records = self.records.read().await;
        records.get(&(employee_id.to_string(), date)).cloned()
    }

    /// Stores a fresh computation, creating the record or updating an
    /// existing one under the recompute guard.
    pub async fn put_computation(
        &self,
        employee_id: &str,
        date: NaiveDate,
        policy_code: &str,
        computation: DailyComputation,
    ) -> EngineResult<DailyRecord> {
        let mut records = self.records.write().await;
        let key = (employee_id.to_string(), date);
        match records.get_mut(&key) {
            Some(record) => {
                record.apply_computation(policy_code, computation)?;
                Ok(record.clone())
            }
            None => {
                let record =
                    DailyRecord::from_computation(employee_id, date, policy_code, computation);
                records.insert(key, record.clone());
                Ok(record)
            }
        }
    }

    /// Applies a workflow mutation to the stored record under the write
    /// lock, returning the updated record.
    pub async fn update<F>(
        &self,
        employee_id: &str,
        date: NaiveDate,
        mutate: F,
    ) -> EngineResult<DailyRecord>
    where
        F: FnOnce(&mut DailyRecord) -> EngineResult<()>,
    {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&(employee_id.to_string(), date))
            .ok_or_else(|| EngineError::RecordNotFound {
                employee_id: employee_id.to_string(),
                date,
            })?;
        mutate(record)?;
        Ok(record.clone())
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<PolicyCatalog>,
    store: RecordStore,
}

impl AppState {
    /// Creates a new application state around a loaded catalog.
    pub fn new(catalog: PolicyCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: RecordStore::new(),
        }
    }

    /// Returns the policy catalog.
    pub fn catalog(&self) -> &PolicyCatalog {
        &self.catalog
    }

    /// Returns the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
