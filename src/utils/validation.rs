use crate::domain::model::{ItemType, TextInput};
use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks an analysis request and resolves its category.
///
/// Text is checked before the category, so a request that is wrong on both
/// counts reports the empty text.
pub fn validate_text_input(input: &TextInput) -> Result<ItemType> {
    if input.text.trim().is_empty() {
        return Err(AppError::validation("Text cannot be empty"));
    }
    input.item_type.parse()
}

/// A CORS origin: http(s) scheme, a host, and nothing after the authority.
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    let invalid = |reason: String| AppError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: origin.to_string(),
        reason,
    };

    if origin.is_empty() {
        return Err(invalid("Origin cannot be empty".to_string()));
    }

    let url = Url::parse(origin).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }

    if url.host_str().is_none() {
        return Err(invalid("Origin must include a host".to_string()));
    }

    // Url::parse 會把空路徑正規化成 "/"
    if url.path() != "/"
        || url.query().is_some()
        || url.fragment().is_some()
        || origin.ends_with('/')
    {
        return Err(invalid(
            "Origin must not contain a path, query or fragment".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
