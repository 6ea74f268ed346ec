//! Store Errors

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures talking to the key/value backend or (de)serializing a slot
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No window, or storage disabled by the browser
    Unavailable(String),
    Read(String),
    /// Usually a quota error
    Write(String),
    Serialize(String),
    Deserialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Read(msg) => write!(f, "Storage read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StoreError::Serialize(msg) => write!(f, "Could not encode value: {}", msg),
            StoreError::Deserialize(msg) => write!(f, "Could not decode value: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
