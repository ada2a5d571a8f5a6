use thiserror::Error;

/// Errors raised while translating a callable into a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A parameter's declared type resolved to something other than an
    /// integer, float, string or enumeration. Carries the rejected type name.
    #[error("Invalid origin type {0}")]
    UnsupportedType(String),
}

impl SchemaError {
    /// Name of the rejected origin type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::UnsupportedType(name) => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_names_the_origin() {
        let err = SchemaError::UnsupportedType("bool".into());
        assert_eq!(err.to_string(), "Invalid origin type bool");
        assert_eq!(err.type_name(), "bool");
    }
}
