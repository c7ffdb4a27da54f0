use thiserror::Error;

/// Service-level errors that can occur in business logic
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown item: {item}")]
    UnknownItem { item: String },

    #[error("Unknown delivery location: {location}")]
    UnknownLocation { location: String },

    #[error("Invalid hour: {hour}, expected 0-23")]
    InvalidHour { hour: u32 },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Arithmetic overflow while computing {operation}")]
    ArithmeticOverflow { operation: String },
}

/// Validation errors for catalog data
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid field value: {field}={value}, reason={reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate entry: {field}={value}")]
    Duplicate { field: String, value: String },

    #[error("Value out of range: {field}, min={min}, max={max}, value={value}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::ValidationError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
