//! Contact channel types.
//!
//! A contact is the delivery channel the respondent wants to be reached
//! on: one of two supported messaging networks plus a username.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field key under which contact-username violations appear in the
/// validation error map.
pub const CONTACT_USERNAME_FIELD: &str = "contact_username";

/// Supported messaging networks for the contact block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Telegram,
    Whatsapp,
}

impl ContactMethod {
    /// Host of the canonical profile URL for this network.
    pub fn profile_host(&self) -> &'static str {
        match self {
            ContactMethod::Telegram => "t.me",
            ContactMethod::Whatsapp => "wa.me",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactMethod::Telegram => f.write_str("telegram"),
            ContactMethod::Whatsapp => f.write_str("whatsapp"),
        }
    }
}

impl FromStr for ContactMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "telegram" => Ok(ContactMethod::Telegram),
            "whatsapp" => Ok(ContactMethod::Whatsapp),
            other => Err(format!("invalid contact method: '{other}'")),
        }
    }
}

/// How to reach the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub method: ContactMethod,
    /// Username as typed by the user; may carry a leading `@` and
    /// surrounding whitespace.
    pub username: String,
}

impl Contact {
    /// Username with a single leading `@` stripped and whitespace trimmed.
    pub fn normalized_username(&self) -> &str {
        self.username
            .trim()
            .strip_prefix('@')
            .unwrap_or(self.username.trim())
            .trim()
    }

    /// Canonical profile URL for this contact.
    pub fn profile_url(&self) -> String {
        format!(
            "https://{}/{}",
            self.method.profile_host(),
            self.normalized_username()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_method_round_trip() {
        for method in [ContactMethod::Telegram, ContactMethod::Whatsapp] {
            assert_eq!(
                method.to_string().parse::<ContactMethod>().unwrap(),
                method
            );
        }
    }

    #[test]
    fn test_normalized_username_strips_one_at_sign() {
        let contact = Contact {
            method: ContactMethod::Telegram,
            username: "  @ada_l  ".to_string(),
        };
        assert_eq!(contact.normalized_username(), "ada_l");

        // Only one leading @ is stripped
        let doubled = Contact {
            method: ContactMethod::Telegram,
            username: "@@ada".to_string(),
        };
        assert_eq!(doubled.normalized_username(), "@ada");
    }

    #[test]
    fn test_profile_url_per_network() {
        let tg = Contact {
            method: ContactMethod::Telegram,
            username: "@ada".to_string(),
        };
        assert_eq!(tg.profile_url(), "https://t.me/ada");

        let wa = Contact {
            method: ContactMethod::Whatsapp,
            username: "ada".to_string(),
        };
        assert_eq!(wa.profile_url(), "https://wa.me/ada");
    }
}
