use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Member;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Login,
    OtpVerification,
    BusinessProfileStepOne,
    BusinessProfileStepTwo,
    BusinessProfileStepThree,
    Dashboard,
    Orders,
    TeamManagement,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    Push,
    Replace,
}

/// String-keyed parameter bag handed to the navigation facility. Values are
/// opaque strings; structured values travel as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub screen: Screen,
    pub mode: NavigationMode,
    pub params: RouteParams,
}

/// Payload delivered to the dashboard entry point once onboarding ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardHandoff {
    pub owner_name: String,
    pub phone_number: String,
    pub whatsapp_number: String,
    pub press_name: String,
    pub selected_services: Vec<String>,
    pub owners: Vec<Member>,
    pub composers: Vec<Member>,
    pub operators: Vec<Member>,
    pub team_skipped: bool,
}
