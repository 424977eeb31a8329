//! Editor model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video editor who gets paid per project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    /// Unique identifier
    pub id: i32,

    /// Display name
    pub name: String,

    /// Contact email, used to address invoices
    pub email: Option<String>,

    /// Contact phone
    pub phone: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Editable fields of an editor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EditorDraft {
    /// Trim the name and turn blank contact fields into `None`
    pub fn normalized(self) -> Self {
        fn blank_to_none(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            email: blank_to_none(self.email),
            phone: blank_to_none(self.phone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_draft() {
        let draft = EditorDraft {
            name: "  Budi Santoso ".to_string(),
            email: Some("   ".to_string()),
            phone: Some(" 0812 ".to_string()),
        }
        .normalized();

        assert_eq!(draft.name, "Budi Santoso");
        assert_eq!(draft.email, None);
        assert_eq!(draft.phone.as_deref(), Some("0812"));
    }
}
