use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(MemberId);
id_newtype!(OrderId);

/// Id of the member seeded from the account holder's own onboarding data.
pub const PRIMARY_OWNER_ID: &str = "primary-owner";

impl MemberId {
    pub fn primary_owner() -> Self {
        Self::new(PRIMARY_OWNER_ID)
    }

    pub fn is_primary_owner(&self) -> bool {
        self.0 == PRIMARY_OWNER_ID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Composer,
    Operator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Composer, Role::Operator];

    /// Label given to members added through the roster; the primary owner
    /// carries its own label.
    pub fn default_label(self) -> &'static str {
        match self {
            Role::Owner => "Owner (Secondary)",
            Role::Composer => "Composer",
            Role::Operator => "Operator",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Composer => "composer",
            Role::Operator => "operator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub mobile: String,
    pub whatsapp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
}

impl Member {
    pub fn is_primary_owner(&self) -> bool {
        self.id.is_primary_owner()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachments {
    pub sample: Option<String>,
    pub order_form: Option<String>,
    pub voice_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub product_type: String,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub amount: u64,
    pub advance_paid: u64,
    pub status: String,
    pub contact: Option<String>,
    pub attachments: Option<Attachments>,
}

impl Order {
    pub fn pending(&self) -> u64 {
        self.amount.saturating_sub(self.advance_paid)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Hi,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code `{0}`")]
pub struct ParseLanguageError(pub String);

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}
