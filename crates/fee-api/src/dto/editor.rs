//! Editor DTOs

use fee_core::models::EditorDraft;
use serde::Deserialize;
use validator::{Validate, ValidateEmail};

/// Editor create/update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditorRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Editor name is required"))]
    pub name: String,

    /// Contact email
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: Option<String>,

    /// Contact phone
    #[serde(default)]
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

impl EditorRequest {
    /// Normalize into a draft, rejecting a blank name or malformed email
    pub fn into_draft(self) -> Result<EditorDraft, String> {
        let draft = EditorDraft {
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
        .normalized();

        if draft.name.is_empty() {
            return Err("Editor name is required".to_string());
        }
        if let Some(email) = &draft.email {
            if !email.validate_email() {
                return Err(format!("Invalid email address: {}", email));
            }
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: Option<&str>) -> EditorRequest {
        EditorRequest {
            name: name.to_string(),
            email: email.map(String::from),
            phone: None,
        }
    }

    #[test]
    fn test_into_draft_normalizes() {
        let draft = request(" Sari ", Some("  ")).into_draft().unwrap();
        assert_eq!(draft.name, "Sari");
        assert_eq!(draft.email, None);
    }

    #[test]
    fn test_into_draft_rejects_blank_name_and_bad_email() {
        assert!(request("   ", None).into_draft().is_err());
        assert!(request("Sari", Some("not-an-email")).into_draft().is_err());
        assert!(request("Sari", Some("sari@example.com")).into_draft().is_ok());
    }

    #[test]
    fn test_validate_length() {
        assert!(request("", None).validate().is_err());
        assert!(request(&"x".repeat(101), None).validate().is_err());
        assert!(request("Budi", None).validate().is_ok());
    }
}
