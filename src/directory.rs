//! Directory View State
//!
//! Everything the directory page tracks between events, in one struct. The
//! visible list is always derived from `employees` by the applied filter and
//! then the sort order; transitions go through the methods below so the
//! reset button, sort indicator and search panel cannot disagree.

use crate::error::DirectoryResult;
use crate::filter::{filter_employees, SearchCriteria};
use crate::models::{Department, Employee, EmployeeId};
use crate::sort::{sort_by_salary, SortOrder};

/// Search modal
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchPanel {
    #[default]
    Closed,
    /// Open, with the draft being typed
    Open(SearchCriteria),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    employees: Vec<Employee>,
    visible: Vec<Employee>,
    filter: Option<SearchCriteria>,
    sort: SortOrder,
    search: SearchPanel,
}

impl DirectoryState {
    /// Fresh view over a loaded collection
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            visible: employees.clone(),
            employees,
            ..Default::default()
        }
    }

    /// Full collection, in stored order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn visible(&self) -> &[Employee] {
        &self.visible
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn is_filter_active(&self) -> bool {
        self.filter.is_some()
    }

    /// The visible list differs from the plain collection
    pub fn can_reset(&self) -> bool {
        self.filter.is_some() || self.sort != SortOrder::Unsorted
    }

    pub fn search_panel(&self) -> &SearchPanel {
        &self.search
    }

    pub fn draft(&self) -> Option<&SearchCriteria> {
        match &self.search {
            SearchPanel::Open(draft) => Some(draft),
            SearchPanel::Closed => None,
        }
    }

    // ========================
    // Search panel
    // ========================

    pub fn open_search(&mut self) {
        if self.search == SearchPanel::Closed {
            self.search = SearchPanel::Open(SearchCriteria::default());
        }
    }

    /// Close without searching; the draft is discarded
    pub fn close_search(&mut self) {
        self.search = SearchPanel::Closed;
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        if let SearchPanel::Open(draft) = &mut self.search {
            draft.name = name.into();
        }
    }

    /// Select-box value: "" clears the criterion
    pub fn set_draft_department(&mut self, raw: &str) {
        if let SearchPanel::Open(draft) = &mut self.search {
            draft.department = match raw.trim() {
                "" => None,
                code => Some(Department::parse(code)).filter(Department::is_known),
            };
        }
    }

    /// Run the open draft against the full collection.
    ///
    /// An empty draft is rejected and leaves every field untouched, the panel
    /// included. On success the panel closes and the sort indicator resets,
    /// since the new list is in collection order. Returns the match count.
    pub fn apply_search(&mut self) -> DirectoryResult<usize> {
        let criteria = self.draft().cloned().unwrap_or_default();
        let found = filter_employees(&self.employees, &criteria)?;
        let count = found.len();
        tracing::debug!(?criteria, count, "search applied");

        self.visible = found;
        self.filter = Some(criteria);
        self.sort = SortOrder::Unsorted;
        self.search = SearchPanel::Closed;
        Ok(count)
    }

    /// Show the whole collection again, unsorted and unfiltered
    pub fn reset(&mut self) {
        self.visible = self.employees.clone();
        self.filter = None;
        self.sort = SortOrder::Unsorted;
    }

    // ========================
    // Sort
    // ========================

    /// Advance the sort order and reorder the visible list
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort = self.sort.toggled();
        sort_by_salary(&mut self.visible, self.sort);
        tracing::debug!(order = ?self.sort, "visible list sorted by salary");
        self.sort
    }

    // ========================
    // Mutations
    // ========================

    /// Remove the first record with `id` from both lists.
    ///
    /// Returns whether a record was removed; a missing id changes nothing.
    /// `EmployeeRepository::delete` pairs this with the write.
    pub fn delete(&mut self, id: &EmployeeId) -> bool {
        let Some(pos) = self.employees.iter().position(|e| &e.id == id) else {
            return false;
        };
        self.employees.remove(pos);
        if let Some(vpos) = self.visible.iter().position(|e| &e.id == id) {
            self.visible.remove(vpos);
        }
        true
    }
}
