use std::collections::BTreeMap;

use shared::{
    domain::Language,
    error::{AppError, ErrorCode},
};

use crate::i18n::{self, TranslationKey};

pub const MAX_NAME_CHARS: usize = 30;

/// Form fields that can carry an inline error, in on-screen order so the
/// first entry of a [`FieldErrors`] is the one to scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    OwnerName,
    PressName,
    Whatsapp,
    Services,
    Team,
    MemberName,
    MemberMobile,
    MemberWhatsapp,
    MemberEmail,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::OwnerName => "ownerName",
            Field::PressName => "pressName",
            Field::Whatsapp => "whatsappNumber",
            Field::Services => "selectedServices",
            Field::Team => "team",
            Field::MemberName => "name",
            Field::MemberMobile => "mobile",
            Field::MemberWhatsapp => "whatsapp",
            Field::MemberEmail => "email",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, TranslationKey>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: TranslationKey) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) -> Option<TranslationKey> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<TranslationKey> {
        self.0.get(&field).copied()
    }

    pub fn first(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, TranslationKey)> + '_ {
        self.0.iter().map(|(field, key)| (*field, *key))
    }

    pub fn to_app_errors(&self, language: Language) -> Vec<AppError> {
        self.iter()
            .map(|(field, key)| {
                AppError::for_field(
                    ErrorCode::Validation,
                    field.as_str(),
                    i18n::translate(language, key),
                )
            })
            .collect()
    }
}

/// Checks a required, length-limited name. `required` is reported when the
/// trimmed value is empty.
pub fn check_name(value: &str, required: TranslationKey) -> Result<(), TranslationKey> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(required);
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(TranslationKey::NameTooLong);
    }
    Ok(())
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !value.chars().any(char::is_whitespace)
}
