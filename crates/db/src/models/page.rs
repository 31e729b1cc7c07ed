//! Page entity model and DTOs.

use marquee_core::colors::validate_optional_color;
use marquee_core::error::CoreError;
use marquee_core::page::PageSlug;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A page row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub draft: bool,
    pub background_gradient: bool,
    pub background_start_color: Option<String>,
    pub background_end_color: Option<String>,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub nav_bar_color: Option<String>,
    pub nav_bar_text_color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new page.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePage {
    pub name: String,
    pub slug: Option<String>,
    /// Defaults to false if omitted.
    pub draft: Option<bool>,
    pub background_gradient: Option<bool>,
    pub background_start_color: Option<String>,
    pub background_end_color: Option<String>,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub nav_bar_color: Option<String>,
    pub nav_bar_text_color: Option<String>,
}

/// DTO for updating an existing page. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePage {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub draft: Option<bool>,
    pub background_gradient: Option<bool>,
    pub background_start_color: Option<String>,
    pub background_end_color: Option<String>,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub nav_bar_color: Option<String>,
    pub nav_bar_text_color: Option<String>,
}

fn validate_slug(slug: Option<&str>) -> Result<(), CoreError> {
    match slug {
        Some(s) if PageSlug::parse(s).is_none() => Err(CoreError::Validation {
            field: "slug",
            message: format!("'{s}' is not one of the allowed slugs"),
        }),
        _ => Ok(()),
    }
}

fn validate_colors(
    fields: [(&'static str, Option<&str>); 7],
) -> Result<(), CoreError> {
    for (field, value) in fields {
        validate_optional_color(field, value)?;
    }
    Ok(())
}

impl CreatePage {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_slug(self.slug.as_deref())?;
        validate_colors([
            ("background_start_color", self.background_start_color.as_deref()),
            ("background_end_color", self.background_end_color.as_deref()),
            ("text_color", self.text_color.as_deref()),
            ("button_color", self.button_color.as_deref()),
            ("button_text_color", self.button_text_color.as_deref()),
            ("nav_bar_color", self.nav_bar_color.as_deref()),
            ("nav_bar_text_color", self.nav_bar_text_color.as_deref()),
        ])
    }
}

impl UpdatePage {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_slug(self.slug.as_deref())?;
        validate_colors([
            ("background_start_color", self.background_start_color.as_deref()),
            ("background_end_color", self.background_end_color.as_deref()),
            ("text_color", self.text_color.as_deref()),
            ("button_color", self.button_color.as_deref()),
            ("button_text_color", self.button_text_color.as_deref()),
            ("nav_bar_color", self.nav_bar_color.as_deref()),
            ("nav_bar_text_color", self.nav_bar_text_color.as_deref()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use marquee_core::error::CoreError;

    use super::*;

    fn base() -> CreatePage {
        CreatePage {
            name: "Home".into(),
            slug: None,
            draft: None,
            background_gradient: None,
            background_start_color: None,
            background_end_color: None,
            text_color: None,
            button_color: None,
            button_text_color: None,
            nav_bar_color: None,
            nav_bar_text_color: None,
        }
    }

    #[test]
    fn accepts_known_slug_and_colors() {
        let mut input = base();
        input.slug = Some("home".into());
        input.text_color = Some("#ff0000".into());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_slug() {
        let mut input = base();
        input.slug = Some("hype".into());
        assert_matches!(
            input.validate(),
            Err(CoreError::Validation { field: "slug", .. })
        );
    }

    #[test]
    fn rejects_bad_color() {
        let mut input = base();
        input.nav_bar_color = Some("red".into());
        assert_matches!(
            input.validate(),
            Err(CoreError::Validation { field: "nav_bar_color", .. })
        );
    }
}
