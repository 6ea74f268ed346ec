//! Employee Form Draft
//!
//! Text contents of the add/edit form and its validation into an `Employee`.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Department, Employee, EmployeeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    /// Select-box value, "1".."5" or ""
    pub department: String,
    pub salary: String,
}

impl EmployeeDraft {
    /// Pre-filled draft for editing
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            department: employee.department.code().map(|c| c.to_string()).unwrap_or_default(),
            salary: employee.salary.to_string(),
        }
    }

    /// Validate into a record with `id`. Fields of `base` this form does not
    /// edit are carried over.
    pub fn build(&self, id: EmployeeId, base: Option<Employee>) -> DirectoryResult<Employee> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DirectoryError::InvalidInput("Name is required".to_string()));
        }

        let department = Department::parse(&self.department);
        if !department.is_known() {
            return Err(DirectoryError::InvalidInput("Please select a department".to_string()));
        }

        let salary = self
            .salary
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s >= 0.0)
            .ok_or_else(|| DirectoryError::InvalidInput("Salary must be a non-negative number".to_string()))?;

        let mut employee = base.unwrap_or_else(|| Employee::new(id.clone(), "", Department::default(), 0.0));
        employee.id = id;
        employee.name = name.to_string();
        employee.department = department;
        employee.salary = salary;
        Ok(employee)
    }
}
