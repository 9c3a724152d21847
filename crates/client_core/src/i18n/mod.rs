//! Static translation tables.
//!
//! Every UI string is a [`TranslationKey`]; each language table is an
//! exhaustive match over the keys, so a string missing from either table is a
//! compile error. Dotted paths are still accepted for keys that only exist at
//! runtime (see [`lookup_path`]).

use shared::domain::Language;

mod en;
mod hi;

macro_rules! translation_keys {
    ($($variant:ident => $path:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TranslationKey {
            $($variant,)+
        }

        impl TranslationKey {
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant,)+];

            pub fn path(self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $path,)+
                }
            }

            pub fn from_path(path: &str) -> Option<Self> {
                match path {
                    $($path => Some(TranslationKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

translation_keys! {
    AppName => "common.appName",
    Next => "common.next",
    Back => "common.back",
    Finish => "common.finish",
    Skip => "common.skip",
    Save => "common.save",
    Cancel => "common.cancel",
    Delete => "common.delete",
    Edit => "common.edit",
    Confirm => "common.confirm",
    Loading => "common.loading",

    LoginTitle => "login.title",
    LoginSubtitle => "login.subtitle",
    PhoneLabel => "login.phoneLabel",
    SendOtp => "login.sendOtp",
    InvalidPhone => "login.invalidPhone",

    OtpTitle => "otp.title",
    OtpSubtitle => "otp.subtitle",
    VerifyOtp => "otp.verify",
    ResendOtp => "otp.resend",
    InvalidOtp => "otp.invalidCode",

    ProfileStepOneTitle => "profile.stepOneTitle",
    OwnerName => "profile.ownerName",
    PressName => "profile.pressName",
    WhatsappNumber => "profile.whatsapp",
    SameAsContact => "profile.sameAsContact",
    OwnerNameRequired => "profile.ownerNameRequired",
    PressNameRequired => "profile.pressNameRequired",
    NameTooLong => "profile.nameTooLong",
    InvalidWhatsapp => "profile.invalidWhatsapp",

    ServicesTitle => "services.title",
    ServicesSubtitle => "services.subtitle",
    SelectAtLeastOneService => "services.selectAtLeastOne",

    TeamTitle => "team.title",
    Owners => "team.owners",
    Composers => "team.composers",
    Operators => "team.operators",
    AddMember => "team.addMember",
    PrimaryOwner => "team.primaryOwner",
    MemberNameRequired => "team.nameRequired",
    InvalidMobile => "team.invalidMobile",
    MobileInUse => "team.mobileInUse",
    WhatsappRequired => "team.whatsappRequired",
    WhatsappInUse => "team.whatsappInUse",
    InvalidEmail => "team.invalidEmail",
    OwnerRequired => "team.ownerRequired",
    CannotDeletePrimaryOwner => "team.cannotDeletePrimary",
    ConfirmDeleteMember => "team.confirmDelete",

    OrdersTitle => "orders.title",
    SearchOrders => "orders.search",
    FilterAll => "orders.all",
    FilterComposing => "orders.composing",
    FilterPrinting => "orders.printing",
    FilterReady => "orders.ready",
    FilterDelivered => "orders.delivered",
    OrderAmount => "orders.amount",
    AdvancePaid => "orders.advance",
    PendingAmount => "orders.pending",
    DeliveryDate => "orders.deliveryDate",
    OrderDate => "orders.orderDate",
    OrderContact => "orders.contact",
    NoOrders => "orders.noOrders",

    FinanceTitle => "finance.title",
    InventoryTitle => "inventory.title",
    ComingSoon => "common.comingSoon",

    SettingsTitle => "settings.title",
    DarkMode => "settings.darkMode",
    LanguageLabel => "settings.language",
    English => "settings.english",
    Hindi => "settings.hindi",
    Logout => "settings.logout",
}

pub fn translate(language: Language, key: TranslationKey) -> &'static str {
    match language {
        Language::En => en::text(key),
        Language::Hi => hi::text(key),
    }
}

/// Resolves a dotted path in `language`'s table. Paths that do not name a
/// leaf string, including intermediate nodes such as `"orders"`, resolve to
/// the path itself.
pub fn lookup_path(language: Language, path: &str) -> String {
    match TranslationKey::from_path(path) {
        Some(key) => translate(language, key).to_string(),
        None => {
            tracing::warn!(%language, path, "missing translation; falling back to key");
            path.to_string()
        }
    }
}

#[cfg(test)]
#[path = "../tests/i18n_tests.rs"]
mod tests;
