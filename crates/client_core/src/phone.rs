//! Indian mobile number helpers shared by every phone input.

use serde::{Deserialize, Serialize};

pub const PHONE_DIGITS: usize = 10;

/// Keeps ASCII digits only, truncated to ten.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// Exactly ten digits, starting with 6, 7, 8 or 9.
pub fn is_valid(number: &str) -> bool {
    number.len() == PHONE_DIGITS
        && number.bytes().all(|b| b.is_ascii_digit())
        && matches!(number.as_bytes()[0], b'6'..=b'9')
}

/// A contact number and a WhatsApp number that can mirror it.
///
/// While `same_as_contact` is on, the WhatsApp value is derived from the
/// contact number and manual edits are refused. Turning it off leaves the
/// WhatsApp field empty; any earlier manual entry is not restored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPair {
    contact: String,
    manual_whatsapp: String,
    same_as_contact: bool,
}

impl ContactPair {
    pub fn new(contact: &str) -> Self {
        Self {
            contact: normalize(contact),
            ..Self::default()
        }
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn set_contact(&mut self, raw: &str) {
        self.contact = normalize(raw);
    }

    pub fn whatsapp(&self) -> &str {
        if self.same_as_contact {
            &self.contact
        } else {
            &self.manual_whatsapp
        }
    }

    /// Returns `false` without changing anything while mirroring is on.
    pub fn set_whatsapp(&mut self, raw: &str) -> bool {
        if self.same_as_contact {
            return false;
        }
        self.manual_whatsapp = normalize(raw);
        true
    }

    pub fn same_as_contact(&self) -> bool {
        self.same_as_contact
    }

    pub fn set_same_as_contact(&mut self, enabled: bool) {
        if self.same_as_contact == enabled {
            return;
        }
        self.same_as_contact = enabled;
        self.manual_whatsapp.clear();
    }
}

#[cfg(test)]
#[path = "tests/phone_tests.rs"]
mod tests;
