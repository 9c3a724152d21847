//! Application core for the PrintBandhan press-management client: persisted
//! preferences, localization, OTP login, the onboarding wizard, the order
//! board and the team roster.

pub mod catalog;
pub mod context;
pub mod i18n;
pub mod language;
pub mod orders;
pub mod otp;
pub mod phone;
pub mod preferences;
pub mod roster;
pub mod theme;
pub mod validation;
pub mod wizard;

pub use context::AppContext;
pub use i18n::TranslationKey;
pub use language::LanguageStore;
pub use preferences::{LoadState, PendingWrite, PreferenceBackend, PreferenceStore};
pub use roster::{MemberDraft, PendingDeletion, Roster, RosterError, WhatsappPolicy};
pub use theme::ThemeStore;
pub use wizard::{WizardController, WizardError, WizardSession, WizardStep};
