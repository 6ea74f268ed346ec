//! Employee Models
//!
//! Records as stored in the `employeesDetail` slot. Loading is lenient: every
//! field but `id` has a default, department codes are normalized here once,
//! and fields this app does not know about are carried through untouched.
//! Unknown department values are written back exactly as they were read.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// Employee identifier; older records use numbers, some use strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EmployeeId {
    Number(i64),
    /// Non-integral or out-of-range numbers, e.g. `Date.now() + Math.random()`
    Decimal(Number),
    Text(String),
}

impl EmployeeId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            EmployeeId::Number(n) => Some(*n),
            EmployeeId::Decimal(_) => None,
            EmployeeId::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Match against a route parameter
    pub fn matches_param(&self, param: &str) -> bool {
        self.to_string() == param
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeId::Number(n) => write!(f, "{}", n),
            EmployeeId::Decimal(n) => write!(f, "{}", n),
            EmployeeId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Any scalar is an id; null, arrays and objects are not
impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(match n.as_i64() {
                Some(i) => EmployeeId::Number(i),
                None => EmployeeId::Decimal(n),
            }),
            Value::String(s) => Ok(EmployeeId::Text(s)),
            Value::Bool(b) => Ok(EmployeeId::Text(b.to_string())),
            other => Err(D::Error::custom(format!("unusable employee id: {}", other))),
        }
    }
}

/// Organizational unit. Codes 1-5 are the known departments; anything else
/// read from storage is kept as `Unknown` with its raw JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Department {
    Engineering,
    Marketing,
    HumanResources,
    Finance,
    Development,
    Unknown(Value),
}

/// Absent or null
impl Default for Department {
    fn default() -> Self {
        Department::Unknown(Value::Null)
    }
}

impl Department {
    /// Known departments in select-box order
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::HumanResources,
        Department::Finance,
        Department::Development,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Department::Engineering),
            2 => Some(Department::Marketing),
            3 => Some(Department::HumanResources),
            4 => Some(Department::Finance),
            5 => Some(Department::Development),
            _ => None,
        }
    }

    /// Parse a code as typed in a form or stored as text: "3", " 3 ", "finance"
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(dept) = trimmed.parse::<i64>().ok().and_then(Self::from_code) {
            return dept;
        }
        Self::ALL
            .iter()
            .find(|d| d.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Department::Unknown(Value::String(raw.to_string())))
    }

    /// Normalize a stored value; integral numbers and text go through the
    /// code table, everything else stays raw
    pub fn from_value(raw: Value) -> Self {
        let known = match &raw {
            Value::Number(n) => n.as_f64().filter(|f| f.fract() == 0.0).and_then(|f| Self::from_code(f as i64)),
            Value::String(s) => return Self::parse(s),
            _ => None,
        };
        known.unwrap_or(Department::Unknown(raw))
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Department::Engineering => Some(1),
            Department::Marketing => Some(2),
            Department::HumanResources => Some(3),
            Department::Finance => Some(4),
            Department::Development => Some(5),
            Department::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.code().is_some()
    }

    /// Nothing was stored
    pub fn is_absent(&self) -> bool {
        matches!(self, Department::Unknown(Value::Null))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::HumanResources => "Human Resources",
            Department::Finance => "Finance",
            Department::Development => "Development",
            Department::Unknown(_) => "Unassigned",
        }
    }

    /// Gradient stops for the ordinal avatar
    pub fn avatar_gradient(&self) -> &'static str {
        match self {
            Department::Engineering => "from-blue-500 to-blue-600",
            Department::Marketing => "from-purple-500 to-purple-600",
            Department::HumanResources => "from-green-500 to-green-600",
            Department::Finance => "from-pink-500 to-pink-600",
            Department::Development => "from-indigo-500 to-indigo-600",
            Department::Unknown(_) => "from-gray-500 to-gray-600",
        }
    }

    /// Badge colouring; unknown departments get a flat neutral badge
    pub fn badge_class(&self) -> String {
        if self.is_known() {
            format!("bg-gradient-to-r {} text-white", self.avatar_gradient())
        } else {
            "bg-gray-600 text-gray-200".to_string()
        }
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.code(), self) {
            (Some(code), _) => serializer.serialize_i64(code),
            (None, Department::Unknown(raw)) => raw.serialize(serializer),
            (None, _) => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Department::from_value)
    }
}

/// One employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Department::is_absent")]
    pub department: Department,
    #[serde(default, deserialize_with = "lenient_salary")]
    pub salary: f64,
    /// Fields written by other versions of the app
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, department: Department, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            department,
            salary,
            extra: Map::new(),
        }
    }
}

/// Strings as-is, other scalars as their text, null and containers as ""
fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Numbers, numeric strings ("70,000") and null all load; anything else is 0
fn lenient_salary<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let salary = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if salary.is_finite() { salary } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_department_from_number_and_string() {
        let numeric: Employee = serde_json::from_value(json!({"id": 1, "department": 2})).unwrap();
        let text: Employee = serde_json::from_value(json!({"id": 2, "department": "2"})).unwrap();
        let float: Employee = serde_json::from_value(json!({"id": 3, "department": 2.0})).unwrap();
        assert_eq!(numeric.department, Department::Marketing);
        assert_eq!(text.department, Department::Marketing);
        assert_eq!(float.department, Department::Marketing);
    }

    #[test]
    fn test_department_label_text_is_normalized() {
        assert_eq!(Department::parse(" finance "), Department::Finance);
        assert_eq!(Department::parse("Human Resources"), Department::HumanResources);
    }

    #[test]
    fn test_department_out_of_range_is_unknown() {
        let emp: Employee = serde_json::from_value(json!({"id": 1, "department": 9})).unwrap();
        assert_eq!(emp.department, Department::Unknown(json!(9)));
        assert_eq!(emp.department.label(), "Unassigned");
        assert_eq!(emp.department.avatar_gradient(), "from-gray-500 to-gray-600");
        assert_eq!(emp.department.badge_class(), "bg-gray-600 text-gray-200");
    }

    #[test]
    fn test_unknown_department_written_back_unchanged() {
        for raw in [json!(9), json!(2.5), json!("sales"), json!({"code": 1})] {
            let emp: Employee = serde_json::from_value(json!({"id": 1, "department": raw.clone()})).unwrap();
            let back = serde_json::to_value(&emp).unwrap();
            assert_eq!(back["department"], raw);
        }
    }

    #[test]
    fn test_department_null_or_missing() {
        let null: Employee = serde_json::from_value(json!({"id": 1, "department": null})).unwrap();
        let missing: Employee = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(null.department, Department::default());
        assert_eq!(missing.department, Department::default());

        let back = serde_json::to_value(&missing).unwrap();
        assert!(back.get("department").is_none());
    }

    #[test]
    fn test_known_department_serializes_as_code() {
        let emp = Employee::new(EmployeeId::Number(1), "Ann", Department::HumanResources, 1.0);
        let value = serde_json::to_value(&emp).unwrap();
        assert_eq!(value["department"], json!(3));
    }

    #[test]
    fn test_labels_and_badges_for_known_codes() {
        let labels: Vec<_> = Department::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Engineering", "Marketing", "Human Resources", "Finance", "Development"]);
        assert_eq!(
            Department::Engineering.badge_class(),
            "bg-gradient-to-r from-blue-500 to-blue-600 text-white"
        );
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let emp: Employee = serde_json::from_value(json!({"id": "e-7"})).unwrap();
        assert_eq!(emp.id, EmployeeId::Text("e-7".to_string()));
        assert_eq!(emp.name, "");
        assert_eq!(emp.salary, 0.0);
    }

    #[test]
    fn test_null_name_loads_blank() {
        let emp: Employee = serde_json::from_value(json!({"id": 2, "name": null, "department": 2})).unwrap();
        assert_eq!(emp.name, "");
        let numeric: Employee = serde_json::from_value(json!({"id": 3, "name": 42})).unwrap();
        assert_eq!(numeric.name, "42");
    }

    #[test]
    fn test_fractional_id_is_kept_as_number() {
        let emp: Employee = serde_json::from_value(json!({"id": 1718000000000.5_f64, "name": "Eve"})).unwrap();
        assert!(matches!(emp.id, EmployeeId::Decimal(_)));
        assert_eq!(emp.id.as_number(), None);
        assert!(emp.id.matches_param("1718000000000.5"));

        let back = serde_json::to_value(&emp).unwrap();
        assert_eq!(back["id"], json!(1718000000000.5_f64));
    }

    #[test]
    fn test_record_without_usable_id_is_rejected() {
        assert!(serde_json::from_value::<Employee>(json!({"name": "Nobody"})).is_err());
        assert!(serde_json::from_value::<Employee>(json!({"id": null, "name": "Nobody"})).is_err());
        assert!(serde_json::from_value::<Employee>(json!({"id": [1], "name": "Nobody"})).is_err());
    }

    #[test]
    fn test_salary_accepts_strings() {
        let emp: Employee = serde_json::from_value(json!({"id": 1, "salary": "70,000"})).unwrap();
        assert_eq!(emp.salary, 70000.0);
        let bad: Employee = serde_json::from_value(json!({"id": 1, "salary": "lots"})).unwrap();
        assert_eq!(bad.salary, 0.0);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = json!({"id": 4, "name": "Dee", "department": 4, "salary": 10.0, "email": "dee@example.com"});
        let emp: Employee = serde_json::from_value(raw).unwrap();
        assert_eq!(emp.extra.get("email"), Some(&json!("dee@example.com")));

        let back = serde_json::to_value(&emp).unwrap();
        assert_eq!(back["email"], json!("dee@example.com"));
    }

    #[test]
    fn test_id_display_and_param_match() {
        assert!(EmployeeId::Number(12).matches_param("12"));
        assert!(EmployeeId::Text("ab".to_string()).matches_param("ab"));
        assert_eq!(EmployeeId::Text(" 5".to_string()).as_number(), Some(5));
    }
}
