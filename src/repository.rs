//! Employee Repository
//!
//! The whole collection lives in one JSON slot. Every write replaces the
//! slot; there is no versioning and no coordination between tabs.
//!
//! Records are decoded one at a time, so a single odd record never blanks
//! the collection. Only records without a usable id are dropped.

use browser_store::{BrowserStorage, JsonSlot, KeyValueStore, StoreResult};
use serde_json::Value;

use crate::directory::DirectoryState;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Employee, EmployeeId};

pub struct EmployeeRepository<S> {
    slot: JsonSlot<S>,
}

impl EmployeeRepository<BrowserStorage> {
    /// Repository over `window.localStorage`
    pub fn browser(key: &str) -> StoreResult<Self> {
        Ok(Self::new(BrowserStorage::local()?, key))
    }
}

impl<S: KeyValueStore> EmployeeRepository<S> {
    pub fn new(store: S, key: &str) -> Self {
        Self { slot: JsonSlot::new(store, key) }
    }

    /// Entire collection; an absent slot or one that is not a JSON array
    /// loads as empty
    pub fn load(&self) -> Vec<Employee> {
        let records: Vec<Value> = self.slot.read_or_default();
        let total = records.len();
        let employees: Vec<Employee> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(employee) => Some(employee),
                Err(e) => {
                    tracing::warn!(key = %self.slot.key(), index, error = %e, "skipping unreadable employee record");
                    None
                }
            })
            .collect();
        tracing::info!(key = %self.slot.key(), count = employees.len(), skipped = total - employees.len(), "employees loaded");
        employees
    }

    /// Overwrite the stored collection
    pub fn save(&self, employees: &[Employee]) -> StoreResult<()> {
        self.slot.write(employees).map_err(|e| {
            tracing::error!(key = %self.slot.key(), error = %e, "failed to save employees");
            e
        })?;
        tracing::info!(key = %self.slot.key(), count = employees.len(), "employees saved");
        Ok(())
    }

    /// Lookup by route parameter (the id as text)
    pub fn find_by_param(&self, param: &str) -> Option<Employee> {
        self.load().into_iter().find(|e| e.id.matches_param(param))
    }

    /// Record to edit; a stale or mistyped id is `NotFound`
    pub fn edit_target(&self, param: &str) -> DirectoryResult<Employee> {
        self.find_by_param(param).ok_or_else(|| DirectoryError::NotFound(param.to_string()))
    }

    /// Remove `id` from the view and persist what is left.
    ///
    /// A missing id changes neither the view nor the stored slot.
    pub fn delete(&self, state: &mut DirectoryState, id: &EmployeeId) -> StoreResult<bool> {
        if !state.delete(id) {
            tracing::debug!(%id, "delete of unknown employee ignored");
            return Ok(false);
        }
        self.save(state.employees())?;
        Ok(true)
    }

    /// Replace the record with the same id in place, or append it
    pub fn upsert(&self, employee: Employee) -> StoreResult<Vec<Employee>> {
        let mut employees = self.load();
        match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => *existing = employee,
            None => employees.push(employee),
        }
        self.save(&employees)?;
        Ok(employees)
    }

    /// One past the largest numeric id
    pub fn next_id(&self) -> EmployeeId {
        let max = self.load().iter().filter_map(|e| e.id.as_number()).max().unwrap_or(0);
        EmployeeId::Number(max + 1)
    }
}
