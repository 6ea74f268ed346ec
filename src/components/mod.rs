//! UI Components
//!
//! Leptos components for the directory and the employee form.

mod activity_log;
mod department_badge;
mod employee_directory;
mod employee_form;
mod employee_table;
mod empty_state;
mod search_modal;
mod toast_host;

pub use activity_log::ActivityLog;
pub use department_badge::{DepartmentBadge, OrdinalAvatar};
pub use employee_directory::EmployeeDirectory;
pub use employee_form::EmployeeForm;
pub use employee_table::EmployeeTable;
pub use empty_state::EmptyState;
pub use search_modal::SearchModal;
pub use toast_host::ToastHost;
