//! Team roster split into owners, composers and operators.
//!
//! Mobile and WhatsApp numbers are unique across all three lists. The primary
//! owner can never be removed and its numbers are fixed.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use shared::{
    domain::{Language, Member, MemberId, Role},
    error::{AppError, ErrorCode},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    i18n::{self, TranslationKey},
    phone,
    validation::{check_name, is_valid_email, Field},
};

/// How an empty WhatsApp field is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhatsappPolicy {
    /// Onboarding team invite: an empty WhatsApp number falls back to the
    /// mobile number.
    FallbackToMobile,
    /// Team management: WhatsApp must be entered and validated.
    Required,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub mobile: String,
    pub whatsapp: String,
    pub email: Option<String>,
}

impl MemberDraft {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            ..Self::default()
        }
    }

    pub fn with_whatsapp(mut self, whatsapp: impl Into<String>) -> Self {
        self.whatsapp = whatsapp.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("{}: {}", .field.as_str(), english(.message))]
    Invalid {
        field: Field,
        message: TranslationKey,
    },
    #[error("no {} with id {id}", .role.as_str())]
    NotFound { role: Role, id: MemberId },
    #[error("the primary owner cannot be removed")]
    PrimaryOwnerProtected,
    #[error("the primary owner's {} cannot be changed", .0.as_str())]
    ProtectedField(Field),
}

fn english(key: &TranslationKey) -> &'static str {
    i18n::translate(Language::En, *key)
}

impl RosterError {
    fn invalid(field: Field, message: TranslationKey) -> Self {
        Self::Invalid { field, message }
    }
}

impl From<RosterError> for AppError {
    fn from(value: RosterError) -> Self {
        match &value {
            RosterError::Invalid { field, message } => {
                let code = match message {
                    TranslationKey::MobileInUse | TranslationKey::WhatsappInUse => {
                        ErrorCode::Conflict
                    }
                    _ => ErrorCode::Validation,
                };
                AppError::for_field(code, field.as_str(), english(message))
            }
            RosterError::NotFound { .. } => AppError::new(ErrorCode::NotFound, value.to_string()),
            RosterError::PrimaryOwnerProtected => {
                AppError::new(ErrorCode::Forbidden, value.to_string())
            }
            RosterError::ProtectedField(field) => {
                AppError::for_field(ErrorCode::Forbidden, field.as_str(), value.to_string())
            }
        }
    }
}

/// A deletion the user has been asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub role: Role,
    pub id: MemberId,
    pub name: String,
}

struct ValidatedDraft {
    name: String,
    mobile: String,
    whatsapp: String,
    email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    policy: WhatsappPolicy,
    owners: Vec<Member>,
    composers: Vec<Member>,
    operators: Vec<Member>,
}

impl Roster {
    pub fn new(policy: WhatsappPolicy) -> Self {
        Self {
            policy,
            owners: Vec::new(),
            composers: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Rebuilds a roster from previously serialized lists without
    /// re-validating them.
    pub fn from_lists(
        policy: WhatsappPolicy,
        owners: Vec<Member>,
        composers: Vec<Member>,
        operators: Vec<Member>,
    ) -> Self {
        Self {
            policy,
            owners,
            composers,
            operators,
        }
    }

    pub fn policy(&self) -> WhatsappPolicy {
        self.policy
    }

    /// Inserts or refreshes the primary owner at the head of the owner list.
    pub fn seed_primary_owner(&mut self, name: &str, mobile: &str, whatsapp: &str) {
        let mobile = phone::normalize(mobile);
        let whatsapp = match phone::normalize(whatsapp) {
            w if w.is_empty() => mobile.clone(),
            w => w,
        };
        let primary = Member {
            id: MemberId::primary_owner(),
            name: name.trim().to_string(),
            mobile,
            whatsapp,
            email: None,
            role: i18n::translate(Language::En, TranslationKey::PrimaryOwner).to_string(),
        };

        match self.owners.iter().position(Member::is_primary_owner) {
            Some(idx) => {
                let email = self.owners[idx].email.take();
                self.owners[idx] = Member { email, ..primary };
            }
            None => self.owners.insert(0, primary),
        }
    }

    pub fn members(&self, role: Role) -> &[Member] {
        match role {
            Role::Owner => &self.owners,
            Role::Composer => &self.composers,
            Role::Operator => &self.operators,
        }
    }

    fn members_mut(&mut self, role: Role) -> &mut Vec<Member> {
        match role {
            Role::Owner => &mut self.owners,
            Role::Composer => &mut self.composers,
            Role::Operator => &mut self.operators,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &Member)> {
        Role::ALL
            .into_iter()
            .flat_map(move |role| self.members(role).iter().map(move |m| (role, m)))
    }

    pub fn len(&self) -> usize {
        self.owners.len() + self.composers.len() + self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: &MemberId) -> Option<(Role, &Member)> {
        self.iter().find(|(_, member)| &member.id == id)
    }

    pub fn has_owner(&self) -> bool {
        !self.owners.is_empty()
    }

    pub fn add(&mut self, role: Role, draft: MemberDraft) -> Result<MemberId, RosterError> {
        let valid = self.validate(&draft, None)?;
        let id = next_member_id();
        self.members_mut(role).push(Member {
            id: id.clone(),
            name: valid.name,
            mobile: valid.mobile,
            whatsapp: valid.whatsapp,
            email: valid.email,
            role: role.default_label().to_string(),
        });
        info!(role = role.as_str(), %id, "team member added");
        Ok(id)
    }

    pub fn update(
        &mut self,
        role: Role,
        id: &MemberId,
        draft: MemberDraft,
    ) -> Result<(), RosterError> {
        let idx = self.position(role, id)?;

        if id.is_primary_owner() {
            let existing = &self.members(role)[idx];
            if phone::normalize(&draft.mobile) != existing.mobile {
                return Err(RosterError::ProtectedField(Field::MemberMobile));
            }
            let whatsapp = phone::normalize(&draft.whatsapp);
            if !whatsapp.is_empty() && whatsapp != existing.whatsapp {
                return Err(RosterError::ProtectedField(Field::MemberWhatsapp));
            }
        }

        let mut draft = draft;
        if id.is_primary_owner() && draft.whatsapp.trim().is_empty() {
            draft.whatsapp = self.members(role)[idx].whatsapp.clone();
        }
        let valid = self.validate(&draft, Some(id))?;

        let member = &mut self.members_mut(role)[idx];
        member.name = valid.name;
        member.mobile = valid.mobile;
        member.whatsapp = valid.whatsapp;
        member.email = valid.email;
        debug!(role = role.as_str(), %id, "team member updated");
        Ok(())
    }

    /// First half of a deletion; nothing is removed until
    /// [`Roster::confirm_delete`] is called with the returned value.
    pub fn request_delete(
        &self,
        role: Role,
        id: &MemberId,
    ) -> Result<PendingDeletion, RosterError> {
        if id.is_primary_owner() {
            return Err(RosterError::PrimaryOwnerProtected);
        }
        let idx = self.position(role, id)?;
        Ok(PendingDeletion {
            role,
            id: id.clone(),
            name: self.members(role)[idx].name.clone(),
        })
    }

    pub fn confirm_delete(&mut self, pending: PendingDeletion) -> Result<Member, RosterError> {
        if pending.id.is_primary_owner() {
            return Err(RosterError::PrimaryOwnerProtected);
        }
        let idx = self.position(pending.role, &pending.id)?;
        let removed = self.members_mut(pending.role).remove(idx);
        info!(role = pending.role.as_str(), id = %pending.id, "team member removed");
        Ok(removed)
    }

    fn position(&self, role: Role, id: &MemberId) -> Result<usize, RosterError> {
        self.members(role)
            .iter()
            .position(|member| &member.id == id)
            .ok_or_else(|| RosterError::NotFound {
                role,
                id: id.clone(),
            })
    }

    /// Whether any member other than `exclude` already uses `number` as
    /// mobile or WhatsApp.
    pub fn number_in_use(&self, number: &str, exclude: Option<&MemberId>) -> bool {
        self.iter()
            .filter(|(_, member)| Some(&member.id) != exclude)
            .any(|(_, member)| member.mobile == number || member.whatsapp == number)
    }

    fn validate(
        &self,
        draft: &MemberDraft,
        exclude: Option<&MemberId>,
    ) -> Result<ValidatedDraft, RosterError> {
        check_name(&draft.name, TranslationKey::MemberNameRequired)
            .map_err(|message| RosterError::invalid(Field::MemberName, message))?;

        let mobile = phone::normalize(&draft.mobile);
        if !phone::is_valid(&mobile) {
            return Err(RosterError::invalid(
                Field::MemberMobile,
                TranslationKey::InvalidMobile,
            ));
        }
        if self.number_in_use(&mobile, exclude) {
            return Err(RosterError::invalid(
                Field::MemberMobile,
                TranslationKey::MobileInUse,
            ));
        }

        let whatsapp = phone::normalize(&draft.whatsapp);
        let whatsapp = if whatsapp.is_empty() {
            match self.policy {
                WhatsappPolicy::FallbackToMobile => mobile.clone(),
                WhatsappPolicy::Required => {
                    return Err(RosterError::invalid(
                        Field::MemberWhatsapp,
                        TranslationKey::WhatsappRequired,
                    ))
                }
            }
        } else {
            if !phone::is_valid(&whatsapp) {
                return Err(RosterError::invalid(
                    Field::MemberWhatsapp,
                    TranslationKey::InvalidWhatsapp,
                ));
            }
            if whatsapp != mobile && self.number_in_use(&whatsapp, exclude) {
                return Err(RosterError::invalid(
                    Field::MemberWhatsapp,
                    TranslationKey::WhatsappInUse,
                ));
            }
            whatsapp
        };

        let email = match draft.email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(email) if is_valid_email(email) => Some(email.to_string()),
            Some(_) => {
                return Err(RosterError::invalid(
                    Field::MemberEmail,
                    TranslationKey::InvalidEmail,
                ))
            }
        };

        Ok(ValidatedDraft {
            name: draft.name.trim().to_string(),
            mobile,
            whatsapp,
            email,
        })
    }
}

static LAST_MEMBER_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Time-based id, bumped past the previous one when two members are created
/// within the same millisecond.
fn next_member_id() -> MemberId {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_MEMBER_ID_MILLIS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    MemberId::new(format!("member-{}", now.max(previous + 1)))
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
