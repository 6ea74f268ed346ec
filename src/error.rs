//! Directory Errors

use browser_store::StoreError;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Everything the directory and the employee form can report to the user
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// Search submitted with neither a name nor a department
    EmptySearch,
    InvalidInput(String),
    NotFound(String),
    Storage(StoreError),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::EmptySearch => write!(f, "can't search empty input fields.."),
            DirectoryError::InvalidInput(msg) => write!(f, "{}", msg),
            DirectoryError::NotFound(id) => write!(f, "Employee {} not found", id),
            DirectoryError::Storage(e) => write!(f, "Could not save employees: {}", e),
        }
    }
}

impl std::error::Error for DirectoryError {}

impl From<StoreError> for DirectoryError {
    fn from(e: StoreError) -> Self {
        DirectoryError::Storage(e)
    }
}
