//! Hash Routes
//!
//! `#/`, `#/employees-form`, `#/update-employee-form/<id>`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

const NEW_EMPLOYEE: &str = "employees-form";
const EDIT_EMPLOYEE: &str = "update-employee-form";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Directory,
    NewEmployee,
    /// Edit form for an employee id, as text
    EditEmployee(String),
}

impl Route {
    /// Parse `location.hash`; anything unrecognized is the directory
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/').trim_end_matches('/');
        let mut segments = path.splitn(2, '/');
        match (segments.next(), segments.next()) {
            (Some(NEW_EMPLOYEE), None) => Route::NewEmployee,
            (Some(EDIT_EMPLOYEE), Some(id)) if !id.is_empty() && !id.contains('/') => {
                Route::EditEmployee(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            _ => Route::Directory,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Directory => "#/".to_string(),
            Route::NewEmployee => format!("#/{}", NEW_EMPLOYEE),
            Route::EditEmployee(id) => {
                format!("#/{}/{}", EDIT_EMPLOYEE, utf8_percent_encode(id, NON_ALPHANUMERIC))
            }
        }
    }

    /// Current route of the window
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Self::from_hash(&hash))
            .unwrap_or_default()
    }
}
