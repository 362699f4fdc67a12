//! User-related DTOs for form submissions.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::views::FormContext;
use crate::models::{NewUser, UpdateUser};

/// Form body for creating or updating a user.
///
/// `name` and `email` are required non-empty; `image` is optional and
/// defaults to the empty string. Both create and update submit the same
/// fields, so one DTO serves both routes.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserForm {
    #[validate(custom(function = not_blank, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = not_blank, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

impl UserForm {
    /// Validates the required fields, returning the first inline message to
    /// display when validation fails.
    pub fn first_error(&self) -> Option<String> {
        self.validate().err().map(|errors| first_message(&errors))
    }

    /// Converts the form into a NewUser model for insertion.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            image: normalize_image(self.image),
        }
    }

    /// Converts the form into an UpdateUser model for a full-field replace.
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            image: normalize_image(self.image),
        }
    }

    /// View context that re-renders the submitted values with an inline
    /// error message.
    pub fn context_with_error<'a>(&'a self, error: &'a str) -> FormContext<'a> {
        FormContext {
            name: &self.name,
            email: &self.email,
            image: self.image.as_deref().unwrap_or(""),
            error: Some(error),
        }
    }
}

fn normalize_image(image: Option<String>) -> String {
    image
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Picks one message out of a validation result, checking fields in the
/// order they appear on the form.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    for field in ["name", "email"] {
        if let Some(list) = field_errors.get(field) {
            if let Some(error) = list.first() {
                return error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
            }
        }
    }
    "Invalid input".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, image: Option<&str>) -> UserForm {
        UserForm {
            name: name.to_string(),
            email: email.to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_form_has_no_error() {
        assert_eq!(form("Ann", "a@x.com", None).first_error(), None);
    }

    #[test]
    fn test_empty_name_reports_name_first() {
        let error = form("", "", None).first_error().unwrap();
        assert_eq!(error, "Name is required");
    }

    #[test]
    fn test_blank_email_reports_email() {
        let error = form("Ann", "   ", None).first_error().unwrap();
        assert_eq!(error, "Email is required");
    }

    #[test]
    fn test_into_new_user_defaults_missing_image() {
        let new_user = form("Ann", "a@x.com", None).into_new_user();
        assert_eq!(new_user.image, "");
    }

    #[test]
    fn test_into_new_user_trims_fields() {
        let new_user = form(" Ann ", " a@x.com ", Some(" http://i/1.png ")).into_new_user();
        assert_eq!(new_user.name, "Ann");
        assert_eq!(new_user.email, "a@x.com");
        assert_eq!(new_user.image, "http://i/1.png");
    }

    #[test]
    fn test_context_with_error_keeps_submitted_values() {
        let form = form("Ann", "", Some("http://i/1.png"));
        let ctx = form.context_with_error("Email is required");
        assert_eq!(ctx.name, "Ann");
        assert_eq!(ctx.image, "http://i/1.png");
        assert_eq!(ctx.error, Some("Email is required"));
    }
}
