//! Search Filter
//!
//! Name/department predicate applied to the full collection.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Department, Employee};

/// Search form contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub name: String,
    pub department: Option<Department>,
}

impl SearchCriteria {
    pub fn new(name: impl Into<String>, department: Option<Department>) -> Self {
        Self { name: name.into(), department }
    }

    /// Name criterion, lowercased; None when blank
    fn name_needle(&self) -> Option<String> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.name_needle().is_none() && self.department.is_none()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        let name_ok = match self.name_needle() {
            Some(needle) => employee.name.to_lowercase().contains(&needle),
            None => true,
        };
        let dept_ok = match &self.department {
            Some(dept) => &employee.department == dept,
            None => true,
        };
        name_ok && dept_ok
    }
}

/// Records matching `criteria`, in collection order
pub fn filter_employees(employees: &[Employee], criteria: &SearchCriteria) -> DirectoryResult<Vec<Employee>> {
    if criteria.is_empty() {
        return Err(DirectoryError::EmptySearch);
    }
    Ok(employees.iter().filter(|e| criteria.matches(e)).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeId;

    fn staff() -> Vec<Employee> {
        vec![
            Employee::new(EmployeeId::Number(1), "Ann", Department::Engineering, 50000.0),
            Employee::new(EmployeeId::Number(2), "Bob", Department::Marketing, 70000.0),
            Employee::new(EmployeeId::Number(3), "Joanna", Department::Marketing, 60000.0),
            Employee::new(EmployeeId::Number(4), "Dan", Department::Unknown(serde_json::json!(9)), 1.0),
        ]
    }

    fn ids(list: &[Employee]) -> Vec<String> {
        list.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_rejected() {
        let err = filter_employees(&staff(), &SearchCriteria::default()).unwrap_err();
        assert_eq!(err, DirectoryError::EmptySearch);
        assert!(SearchCriteria::new("   ", None).is_empty());
    }

    #[test]
    fn test_name_substring_case_insensitive() {
        let found = filter_employees(&staff(), &SearchCriteria::new("AN", None)).unwrap();
        assert_eq!(ids(&found), ["1", "3", "4"]);
        for emp in staff() {
            let hit = found.iter().any(|f| f.id == emp.id);
            assert_eq!(hit, emp.name.to_lowercase().contains("an"));
        }
    }

    #[test]
    fn test_department_only() {
        let found = filter_employees(&staff(), &SearchCriteria::new("", Some(Department::Marketing))).unwrap();
        assert_eq!(ids(&found), ["2", "3"]);
    }

    #[test]
    fn test_department_matches_string_codes() {
        let stored: Vec<Employee> = serde_json::from_str(
            r#"[{"id":1,"name":"A","department":"4"},{"id":2,"name":"B","department":4},{"id":3,"name":"C","department":"1"}]"#,
        )
        .unwrap();
        let found = filter_employees(&stored, &SearchCriteria::new("", Some(Department::parse("4")))).unwrap();
        assert_eq!(ids(&found), ["1", "2"]);
    }

    #[test]
    fn test_both_criteria_are_anded() {
        let found = filter_employees(&staff(), &SearchCriteria::new("o", Some(Department::Marketing))).unwrap();
        assert_eq!(ids(&found), ["2", "3"]);
        let joanna = filter_employees(&staff(), &SearchCriteria::new("ann", Some(Department::Marketing))).unwrap();
        assert_eq!(ids(&joanna), ["3"]);
        let none = filter_employees(&staff(), &SearchCriteria::new("bob", Some(Department::Engineering))).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_name_is_trimmed() {
        let found = filter_employees(&staff(), &SearchCriteria::new("  bob ", None)).unwrap();
        assert_eq!(ids(&found), ["2"]);
    }
}
