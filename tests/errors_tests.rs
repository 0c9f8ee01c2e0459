use linksy::errors::{LinksyError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_exhausted_error() {
        let error = LinksyError::exhausted("no free key after 10 attempts");

        assert!(matches!(error, LinksyError::Exhausted(_)));
        assert_eq!(error.code(), "E003");
        assert!(error.to_string().contains("Probe Budget Exhausted"));
        assert!(error.to_string().contains("10 attempts"));
        assert!(!error.is_store_error());
    }

    #[test]
    fn test_not_found_error() {
        let error = LinksyError::not_found("Short link 'zz' not found");

        assert_eq!(error.code(), "E002");
        assert_eq!(error.message(), "Short link 'zz' not found");
        assert!(!error.is_store_error());
    }

    #[test]
    fn test_store_errors() {
        for error in [
            LinksyError::database_config("bad url"),
            LinksyError::database_connection("refused"),
            LinksyError::database_operation("locked"),
        ] {
            assert!(error.is_store_error(), "{} should be a store error", error);
        }
        assert!(!LinksyError::validation("x").is_store_error());
        assert!(!LinksyError::file_operation("x").is_store_error());
    }

    #[test]
    fn test_codes_are_unique() {
        let codes = [
            LinksyError::validation("").code(),
            LinksyError::not_found("").code(),
            LinksyError::exhausted("").code(),
            LinksyError::database_config("").code(),
            LinksyError::database_connection("").code(),
            LinksyError::database_operation("").code(),
            LinksyError::file_operation("").code(),
            LinksyError::serialization("").code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let error: LinksyError = io_error.into();

        assert!(matches!(error, LinksyError::FileOperation(_)));
        assert!(error.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_from_db_err() {
        let db_error = sea_orm::DbErr::Custom("boom".to_string());
        let error: LinksyError = db_error.into();
        assert!(matches!(error, LinksyError::DatabaseOperation(_)));
        assert!(error.is_store_error());
    }

    #[test]
    fn test_from_url_validation_error() {
        let error: LinksyError = linksy::utils::validate_url("").unwrap_err().into();
        assert!(matches!(error, LinksyError::Validation(_)));
        assert_eq!(error.message(), "longUrl is required");
    }
}

#[cfg(test)]
mod error_trait_tests {
    use super::*;

    fn fails() -> Result<()> {
        Err(LinksyError::validation("bad input"))
    }

    #[test]
    fn test_question_mark_propagation() {
        fn outer() -> Result<()> {
            fails()?;
            Ok(())
        }
        assert!(matches!(outer(), Err(LinksyError::Validation(_))));
    }

    #[test]
    fn test_implements_std_error() {
        let error = LinksyError::exhausted("x");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
    }

    #[test]
    fn test_formats() {
        let error = LinksyError::not_found("zz");
        assert_eq!(error.format_simple(), "Resource Not Found: zz");
        let colored = error.format_colored();
        assert!(colored.contains("E002"));
        assert!(colored.contains("zz"));
    }
}
