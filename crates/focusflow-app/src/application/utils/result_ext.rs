use focusflow_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Infrastructure
    /// Usage: `result.to_infra_err()?`
    fn to_infra_err(self) -> Result<T, DomainError>;

    /// Convert error to DomainError::Serialization
    fn to_serialization_err(self) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_infra_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    fn to_serialization_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_infra_err() {
        let result: Result<i32, &str> = Err("infra error");
        match result.to_infra_err() {
            Err(DomainError::Infrastructure(msg)) => assert_eq!(msg, "infra error"),
            _ => panic!("Expected Infrastructure error"),
        }
    }

    #[test]
    fn test_to_serialization_err() {
        let result: Result<i32, &str> = Err("bad json");
        match result.to_serialization_err() {
            Err(DomainError::Serialization(msg)) => assert_eq!(msg, "bad json"),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<i32, &str> = Ok(7);
        assert_eq!(result.to_infra_err().unwrap(), 7);
    }
}
