use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error(transparent)]
    Infrastructure(#[from] InfraError),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    pub fn is_infrastructure(&self) -> bool {
        matches!(self, DomainError::Infrastructure(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Infrastructure(InfraError::Database(e))
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, msg)
                })
            })
            .collect();
        field_errors.sort();

        if field_errors.is_empty() {
            DomainError::Validation("Validation failed".to_string())
        } else {
            DomainError::Validation(field_errors.join("; "))
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::Infra(InfraError::Database(e))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Infra(InfraError::Serialization(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 1))]
        count: i32,
    }

    #[test]
    fn not_found_display_names_entity_and_value() {
        let err = DomainError::not_found("Employee", "id", 42);
        assert_eq!(err.to_string(), "Not found: Employee with id=42");
        assert!(err.is_not_found());
        assert!(!err.is_infrastructure());
    }

    #[test]
    fn validation_errors_are_flattened_per_field() {
        let sample = Sample {
            name: String::new(),
            count: 0,
        };
        let err: DomainError = sample.validate().unwrap_err().into();

        assert!(err.is_validation());
        let DomainError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert_eq!(msg, "count: range; name: must not be empty");
    }

    #[test]
    fn db_errors_become_infrastructure() {
        let err: DomainError = sea_orm::DbErr::Custom("connection refused".into()).into();
        assert!(err.is_infrastructure());
        assert!(err.to_string().starts_with("Database error:"));
    }
}
