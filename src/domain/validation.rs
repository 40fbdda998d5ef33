//! Form-boundary validation
//!
//! Every check runs before a draft reaches the service layer; failures carry
//! per-field messages the forms render inline. A draft that passes here is
//! safe to hand to the service.

use std::fmt;

use url::Url;

use crate::domain::profiles::ProfileDraft;
use crate::error::Error;

/// A single rejected field with its display message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Collected per-field failures for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for one field, for inline rendering next to its input.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// Validate a draft against the form rules. Returns `Error::Validation` with
/// every failing field so the form can annotate all of them at once.
pub fn validate_draft(draft: &ProfileDraft) -> Result<(), Error> {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }

    if draft.photo.trim().is_empty() {
        errors.push("photo", "Photo URL is required");
    } else if !is_valid_url(draft.photo.trim()) {
        errors.push("photo", "Please enter a valid URL");
    }

    if draft.description.trim().is_empty() {
        errors.push("description", "Description is required");
    }

    if draft.address.trim().is_empty() {
        errors.push("address", "Address is required");
    }

    if draft.city.trim().is_empty() {
        errors.push("city", "City is required");
    }

    check_coordinate(
        &mut errors,
        "latitude",
        &draft.latitude,
        90.0,
        "Latitude is required",
        "Latitude must be a number between -90 and 90",
    );
    check_coordinate(
        &mut errors,
        "longitude",
        &draft.longitude,
        180.0,
        "Longitude is required",
        "Longitude must be a number between -180 and 180",
    );

    if let Some(email) = draft.contact.email.as_deref() {
        if !email.trim().is_empty() && !is_valid_email(email.trim()) {
            errors.push("email", "Please enter a valid email address");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}

fn check_coordinate(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    bound: f64,
    required_message: &str,
    range_message: &str,
) {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(field, required_message);
        return;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && (-bound..=bound).contains(&value) => {}
        _ => errors.push(field, range_message),
    }
}

pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Loose email shape check: one `@`, a non-empty local part, and a dotted
/// domain, with no whitespace anywhere.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profiles::ContactInfo;
    use pretty_assertions::assert_eq;

    fn complete_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Mara Lindqvist".to_string(),
            description: "Ceramicist".to_string(),
            full_description: "Runs a small studio near the waterfront.".to_string(),
            address: "12 Pike Pl".to_string(),
            city: "Seattle".to_string(),
            photo: "https://example.com/mara.jpg".to_string(),
            latitude: "47.6097".to_string(),
            longitude: "-122.3422".to_string(),
            contact: ContactInfo {
                email: Some("mara@example.com".to_string()),
                phone: Some("555-0101".to_string()),
            },
            interests: vec!["ceramics".to_string()],
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate_draft(&complete_draft()).is_ok());
    }

    #[test]
    fn required_fields_are_reported_together() {
        let draft = ProfileDraft::default();
        let Err(Error::Validation(errors)) = validate_draft(&draft) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.message_for("name"), Some("Name is required"));
        assert_eq!(errors.message_for("photo"), Some("Photo URL is required"));
        assert_eq!(errors.message_for("city"), Some("City is required"));
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn out_of_range_latitude_is_rejected_before_submission() {
        let mut draft = complete_draft();
        draft.latitude = "91".to_string();
        let Err(Error::Validation(errors)) = validate_draft(&draft) else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.message_for("latitude"),
            Some("Latitude must be a number between -90 and 90")
        );
    }

    #[test]
    fn non_numeric_longitude_is_rejected() {
        let mut draft = complete_draft();
        draft.longitude = "east".to_string();
        let err = validate_draft(&draft).unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn malformed_photo_url_is_rejected() {
        let mut draft = complete_draft();
        draft.photo = "not a url".to_string();
        let Err(Error::Validation(errors)) = validate_draft(&draft) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.message_for("photo"), Some("Please enter a valid URL"));
    }

    #[test]
    fn email_is_optional_but_checked_when_present() {
        let mut draft = complete_draft();
        draft.contact.email = None;
        assert!(validate_draft(&draft).is_ok());

        draft.contact.email = Some(String::new());
        assert!(validate_draft(&draft).is_ok());

        draft.contact.email = Some("mara@".to_string());
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.co"));
    }
}
