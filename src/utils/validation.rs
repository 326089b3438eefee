use crate::utils::error::{Result, SyncError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SyncError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SyncError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SyncError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SyncError::MissingConfig {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SyncError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values that still contain an unexpanded `${VAR}` reference.
pub fn validate_expanded(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(SyncError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Environment variable is not set".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("basecamp.url", "https://example.basecamphq.com").is_ok());
        assert!(validate_url("basecamp.url", "http://localhost:8080").is_ok());
        assert!(validate_url("basecamp.url", "").is_err());
        assert!(validate_url("basecamp.url", "invalid-url").is_err());
        assert!(validate_url("basecamp.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("basecamp.project_id", "42").is_ok());
        assert!(validate_non_empty_string("basecamp.project_id", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("abc".to_string());
        assert_eq!(validate_required_field("basecamp.token", &present).unwrap(), "abc");

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("basecamp.token", &missing),
            Err(SyncError::MissingConfig { .. })
        ));
    }

    #[test]
    fn test_validate_expanded() {
        assert!(validate_expanded("basecamp.token", "abc").is_ok());
        assert!(validate_expanded("basecamp.token", "${BASECAMP_TOKEN}").is_err());
    }
}
