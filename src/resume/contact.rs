//! Contact details and their environment overrides.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable that replaces the resume's email address.
pub const EMAIL_ENV: &str = "EMAIL";
/// Environment variable that replaces the resume's phone number.
pub const PHONE_ENV: &str = "PHONE_NUMBER";

/// Contact block of a resume. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub website: String,
}

/// Values that replace contact fields after the resume is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactOverrides {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactOverrides {
    /// Read overrides from `EMAIL` and `PHONE_NUMBER`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            email: std::env::var(EMAIL_ENV).ok(),
            phone: std::env::var(PHONE_ENV).ok(),
        }
    }

    /// Overwrite contact fields with every non-empty override.
    pub fn apply(&self, contact: &mut ContactInfo) {
        if let Some(email) = non_empty(self.email.as_deref()) {
            debug!(field = "email", "applying contact override");
            contact.email = email.to_string();
        }
        if let Some(phone) = non_empty(self.phone.as_deref()) {
            debug!(field = "phone", "applying contact override");
            contact.phone = phone.to_string();
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email: &str, phone: &str) -> ContactInfo {
        ContactInfo {
            email: email.to_string(),
            phone: phone.to_string(),
            ..ContactInfo::default()
        }
    }

    #[test]
    fn override_fills_empty_phone() {
        let mut info = contact("", "");
        ContactOverrides {
            email: None,
            phone: Some("+1 555 0100".to_string()),
        }
        .apply(&mut info);
        assert_eq!(info.phone, "+1 555 0100");
        assert_eq!(info.email, "");
    }

    #[test]
    fn override_replaces_populated_phone() {
        let mut info = contact("a@example.com", "123");
        ContactOverrides {
            email: Some("b@example.com".to_string()),
            phone: Some("456".to_string()),
        }
        .apply(&mut info);
        assert_eq!(info.phone, "456");
        assert_eq!(info.email, "b@example.com");
    }

    #[test]
    fn empty_override_never_clears_field() {
        let mut info = contact("a@example.com", "123");
        ContactOverrides {
            email: Some(String::new()),
            phone: Some(String::new()),
        }
        .apply(&mut info);
        assert_eq!(info, contact("a@example.com", "123"));
    }

    #[test]
    fn missing_overrides_leave_contact_untouched() {
        let mut info = contact("a@example.com", "");
        ContactOverrides::default().apply(&mut info);
        assert_eq!(info, contact("a@example.com", ""));
    }
}
