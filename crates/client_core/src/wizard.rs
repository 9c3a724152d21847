//! Business-profile onboarding wizard.
//!
//! The controller owns one [`WizardSession`] for the whole flow and moves
//! forward one step at a time, each move gated by that step's validation.
//! Route parameters are produced only at the navigation boundary.

use std::collections::BTreeSet;

use shared::{
    domain::{Member, MemberId, Role},
    protocol::{DashboardHandoff, NavigationMode, NavigationRequest, RouteParams, Screen},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog,
    i18n::TranslationKey,
    otp::VerifiedLogin,
    phone::{self, ContactPair},
    roster::{Roster, WhatsappPolicy},
    validation::{check_name, Field, FieldErrors},
};

const OWNER_NAME: &str = "ownerName";
const PHONE_NUMBER: &str = "phoneNumber";
const WHATSAPP_NUMBER: &str = "whatsappNumber";
const SAME_AS_CONTACT: &str = "sameAsContact";
const PRESS_NAME: &str = "pressName";
const SELECTED_SERVICES: &str = "selectedServices";
const OWNERS: &str = "owners";
const COMPOSERS: &str = "composers";
const OPERATORS: &str = "operators";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    OwnerInfo,
    ServiceSelection,
    TeamInvite,
    Complete,
}

impl WizardStep {
    /// Steps that collect input, in order.
    pub const INPUT_STEPS: [WizardStep; 3] = [
        WizardStep::OwnerInfo,
        WizardStep::ServiceSelection,
        WizardStep::TeamInvite,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::OwnerInfo => 0,
            WizardStep::ServiceSelection => 1,
            WizardStep::TeamInvite => 2,
            WizardStep::Complete => 3,
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            WizardStep::OwnerInfo => Screen::BusinessProfileStepOne,
            WizardStep::ServiceSelection => Screen::BusinessProfileStepTwo,
            WizardStep::TeamInvite => Screen::BusinessProfileStepThree,
            WizardStep::Complete => Screen::Dashboard,
        }
    }

    fn following(self) -> WizardStep {
        match self {
            WizardStep::OwnerInfo => WizardStep::ServiceSelection,
            WizardStep::ServiceSelection => WizardStep::TeamInvite,
            WizardStep::TeamInvite | WizardStep::Complete => WizardStep::Complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("cannot continue: {} is invalid", .first_error.as_str())]
    Blocked { first_error: Field },
    #[error("action not available on step {current:?}")]
    WrongStep { current: WizardStep },
    #[error("unknown service `{0}`")]
    UnknownService(String),
}

#[derive(Debug, Error)]
pub enum RouteParamsError {
    #[error("missing route parameter `{0}`")]
    Missing(&'static str),
    #[error("malformed route parameter `{key}`: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode route parameter `{key}`: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Form state accumulated across the onboarding steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    pub owner_name: String,
    pub press_name: String,
    pub contact: ContactPair,
    pub selected_services: BTreeSet<String>,
    pub roster: Roster,
}

impl WizardSession {
    pub fn new(phone_number: &str) -> Self {
        Self {
            owner_name: String::new(),
            press_name: String::new(),
            contact: ContactPair::new(phone_number),
            selected_services: BTreeSet::new(),
            roster: Roster::new(WhatsappPolicy::FallbackToMobile),
        }
    }

    pub fn phone_number(&self) -> &str {
        self.contact.contact()
    }

    /// WhatsApp number to hand on; an empty field falls back to the contact
    /// number.
    pub fn effective_whatsapp(&self) -> &str {
        match self.contact.whatsapp() {
            "" => self.contact.contact(),
            whatsapp => whatsapp,
        }
    }

    pub fn to_route_params(&self) -> Result<RouteParams, RouteParamsError> {
        let mut params = RouteParams::new();
        params.insert(OWNER_NAME, self.owner_name.clone());
        params.insert(PHONE_NUMBER, self.contact.contact());
        params.insert(WHATSAPP_NUMBER, self.contact.whatsapp());
        params.insert(SAME_AS_CONTACT, self.contact.same_as_contact().to_string());
        params.insert(PRESS_NAME, self.press_name.clone());

        let services: Vec<&str> = self.selected_services.iter().map(String::as_str).collect();
        params.insert(SELECTED_SERVICES, encode(SELECTED_SERVICES, &services)?);
        params.insert(OWNERS, encode(OWNERS, self.roster.members(Role::Owner))?);
        params.insert(COMPOSERS, encode(COMPOSERS, self.roster.members(Role::Composer))?);
        params.insert(OPERATORS, encode(OPERATORS, self.roster.members(Role::Operator))?);
        Ok(params)
    }

    /// Inverse of [`WizardSession::to_route_params`]. Only the phone number is
    /// mandatory; everything else defaults to empty, as on the first step.
    pub fn from_route_params(params: &RouteParams) -> Result<Self, RouteParamsError> {
        let phone_number = params
            .get(PHONE_NUMBER)
            .ok_or(RouteParamsError::Missing(PHONE_NUMBER))?;
        let mut session = WizardSession::new(phone_number);
        session.owner_name = params.get(OWNER_NAME).unwrap_or_default().to_string();
        session.press_name = params.get(PRESS_NAME).unwrap_or_default().to_string();

        if params.get(SAME_AS_CONTACT) == Some("true") {
            session.contact.set_same_as_contact(true);
        } else {
            session
                .contact
                .set_whatsapp(params.get(WHATSAPP_NUMBER).unwrap_or_default());
        }

        let services: Vec<String> = decode(params, SELECTED_SERVICES)?;
        session.selected_services = services.into_iter().collect();
        session.roster = Roster::from_lists(
            WhatsappPolicy::FallbackToMobile,
            decode(params, OWNERS)?,
            decode(params, COMPOSERS)?,
            decode(params, OPERATORS)?,
        );
        Ok(session)
    }

    pub fn handoff(&self, team_skipped: bool) -> DashboardHandoff {
        let members = |role: Role| self.roster.members(role).to_vec();
        DashboardHandoff {
            owner_name: self.owner_name.trim().to_string(),
            phone_number: self.phone_number().to_string(),
            whatsapp_number: self.effective_whatsapp().to_string(),
            press_name: self.press_name.trim().to_string(),
            selected_services: self.selected_services.iter().cloned().collect(),
            owners: members(Role::Owner),
            composers: members(Role::Composer),
            operators: members(Role::Operator),
            team_skipped,
        }
    }
}

fn encode<T: serde::Serialize + ?Sized>(
    key: &'static str,
    value: &T,
) -> Result<String, RouteParamsError> {
    serde_json::to_string(value).map_err(|source| RouteParamsError::Encode { key, source })
}

fn decode<T: serde::de::DeserializeOwned + Default>(
    params: &RouteParams,
    key: &'static str,
) -> Result<T, RouteParamsError> {
    match params.get(key) {
        None | Some("") => Ok(T::default()),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|source| RouteParamsError::Malformed { key, source })
        }
    }
}

pub struct WizardController {
    session: WizardSession,
    step: WizardStep,
    completed: BTreeSet<WizardStep>,
    errors: FieldErrors,
}

impl WizardController {
    pub fn start(login: &VerifiedLogin) -> Self {
        Self::with_session(WizardSession::new(&login.phone))
    }

    pub fn with_session(session: WizardSession) -> Self {
        Self {
            session,
            step: WizardStep::OwnerInfo,
            completed: BTreeSet::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Rebuilds the controller for the screen that received `params`; every
    /// earlier step counts as completed.
    pub fn resume(step: WizardStep, params: &RouteParams) -> Result<Self, RouteParamsError> {
        let mut controller = Self::with_session(WizardSession::from_route_params(params)?);
        controller.completed = WizardStep::INPUT_STEPS
            .into_iter()
            .filter(|earlier| *earlier < step)
            .collect();
        controller.step = step;
        if step == WizardStep::TeamInvite {
            controller.seed_primary_owner();
        }
        Ok(controller)
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_completed(&self, step: WizardStep) -> bool {
        self.completed.contains(&step)
    }

    pub fn set_owner_name(&mut self, value: &str) {
        self.session.owner_name = value.to_string();
        self.clear_error(Field::OwnerName);
    }

    pub fn set_press_name(&mut self, value: &str) {
        self.session.press_name = value.to_string();
        self.clear_error(Field::PressName);
    }

    pub fn set_whatsapp(&mut self, value: &str) -> bool {
        self.clear_error(Field::Whatsapp);
        self.session.contact.set_whatsapp(value)
    }

    pub fn set_same_as_contact(&mut self, enabled: bool) {
        self.clear_error(Field::Whatsapp);
        self.session.contact.set_same_as_contact(enabled);
    }

    /// Flips `service` in the selection and returns whether it is now
    /// selected.
    pub fn toggle_service(&mut self, service: &str) -> Result<bool, WizardError> {
        if !catalog::is_known_service(service) {
            return Err(WizardError::UnknownService(service.to_string()));
        }
        self.clear_error(Field::Services);
        if self.session.selected_services.remove(service) {
            Ok(false)
        } else {
            self.session.selected_services.insert(service.to_string());
            Ok(true)
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.session.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        self.clear_error(Field::Team);
        &mut self.session.roster
    }

    pub fn primary_owner(&self) -> Option<&Member> {
        self.session
            .roster
            .find(&MemberId::primary_owner())
            .map(|(_, member)| member)
    }

    /// Validates the current step and moves to the next one.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.errors.clear();
        match self.step {
            WizardStep::OwnerInfo => self.validate_owner_info(),
            WizardStep::ServiceSelection => self.validate_services(),
            current @ (WizardStep::TeamInvite | WizardStep::Complete) => {
                return Err(WizardError::WrongStep { current })
            }
        }
        self.block_on_errors()?;

        self.completed.insert(self.step);
        self.step = self.step.following();
        if self.step == WizardStep::TeamInvite {
            self.seed_primary_owner();
        }
        debug!(step = ?self.step, "wizard advanced");
        Ok(self.step)
    }

    /// Completes onboarding from the team step; requires at least one owner.
    pub fn finish(&mut self) -> Result<DashboardHandoff, WizardError> {
        self.ensure_step(WizardStep::TeamInvite)?;
        self.errors.clear();
        if !self.session.roster.has_owner() {
            self.errors.insert(Field::Team, TranslationKey::OwnerRequired);
        }
        self.block_on_errors()?;
        Ok(self.complete(false))
    }

    /// Completes onboarding from the team step without the owner check.
    pub fn skip(&mut self) -> Result<DashboardHandoff, WizardError> {
        self.ensure_step(WizardStep::TeamInvite)?;
        self.errors.clear();
        Ok(self.complete(true))
    }

    /// Jumps back to an earlier completed step. Current, future and
    /// not-yet-completed steps are ignored.
    pub fn go_to(&mut self, target: WizardStep) -> bool {
        if self.step == WizardStep::Complete
            || target >= self.step
            || !self.completed.contains(&target)
        {
            return false;
        }
        debug!(from = ?self.step, to = ?target, "wizard stepped back");
        self.step = target;
        self.errors.clear();
        true
    }

    /// Fraction of the progress bar to fill for the current step.
    pub fn progress(&self) -> f32 {
        let steps = WizardStep::INPUT_STEPS.len();
        (self.step.index() + 1).min(steps) as f32 / steps as f32
    }

    pub fn navigation_request(&self) -> Result<NavigationRequest, RouteParamsError> {
        let mode = if self.step == WizardStep::Complete {
            NavigationMode::Replace
        } else {
            NavigationMode::Push
        };
        Ok(NavigationRequest {
            screen: self.step.screen(),
            mode,
            params: self.session.to_route_params()?,
        })
    }

    fn validate_owner_info(&mut self) {
        if let Err(message) = check_name(&self.session.owner_name, TranslationKey::OwnerNameRequired)
        {
            self.errors.insert(Field::OwnerName, message);
        }
        if let Err(message) = check_name(&self.session.press_name, TranslationKey::PressNameRequired)
        {
            self.errors.insert(Field::PressName, message);
        }
        let whatsapp = self.session.contact.whatsapp();
        if !whatsapp.is_empty() && !phone::is_valid(whatsapp) {
            self.errors.insert(Field::Whatsapp, TranslationKey::InvalidWhatsapp);
        } else if self
            .session
            .roster
            .number_in_use(self.session.effective_whatsapp(), Some(&MemberId::primary_owner()))
        {
            // Invited members keep their numbers; the owner has to pick another.
            self.errors.insert(Field::Whatsapp, TranslationKey::WhatsappInUse);
        }
    }

    fn validate_services(&mut self) {
        if self.session.selected_services.is_empty() {
            self.errors
                .insert(Field::Services, TranslationKey::SelectAtLeastOneService);
        }
    }

    fn block_on_errors(&self) -> Result<(), WizardError> {
        match self.errors.first() {
            Some(first_error) => {
                debug!(step = ?self.step, field = first_error.as_str(), "wizard step blocked");
                Err(WizardError::Blocked { first_error })
            }
            None => Ok(()),
        }
    }

    fn ensure_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep { current: self.step })
        }
    }

    fn seed_primary_owner(&mut self) {
        let name = self.session.owner_name.clone();
        let mobile = self.session.phone_number().to_string();
        let whatsapp = self.session.effective_whatsapp().to_string();
        self.session
            .roster
            .seed_primary_owner(&name, &mobile, &whatsapp);
    }

    fn complete(&mut self, team_skipped: bool) -> DashboardHandoff {
        self.completed.insert(WizardStep::TeamInvite);
        self.step = WizardStep::Complete;
        info!(
            press = %self.session.press_name.trim(),
            services = self.session.selected_services.len(),
            members = self.session.roster.len(),
            team_skipped,
            "onboarding complete"
        );
        self.session.handoff(team_skipped)
    }

    fn clear_error(&mut self, field: Field) {
        self.errors.remove(field);
    }
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
