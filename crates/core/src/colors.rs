//! Hex color validation for page and widget presentation fields.

use regex::Regex;

use crate::error::CoreError;

const HEX_COLOR_PATTERN: &str = "^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

/// Validate a `#RGB` / `#RRGGBB` color value for the named field.
pub fn validate_color(field: &'static str, value: &str) -> Result<(), CoreError> {
    let re = Regex::new(HEX_COLOR_PATTERN).expect("hex color pattern");
    if re.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation {
            field,
            message: format!("'{value}' is not a valid hex color"),
        })
    }
}

/// Validate an optional color field, passing `None` through.
pub fn validate_optional_color(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_color(field, v),
        None => Ok(()),
    }
}
