//! Salary Sort
//!
//! Three-state indicator plus the stable reorder it drives.

use crate::models::Employee;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// No click yet since load or reset
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Next state on a header click; the first click sorts highest salary first
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Unsorted | SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn indicator(self) -> Option<&'static str> {
        match self {
            SortOrder::Unsorted => None,
            SortOrder::Ascending => Some("⬆️"),
            SortOrder::Descending => Some("⬇️"),
        }
    }
}

/// Stable in-place sort by salary; `Unsorted` leaves the slice alone
pub fn sort_by_salary(employees: &mut [Employee], order: SortOrder) {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => employees.sort_by(|a, b| a.salary.total_cmp(&b.salary)),
        SortOrder::Descending => employees.sort_by(|a, b| b.salary.total_cmp(&a.salary)),
    }
}
