use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a reserved business name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NameRequestState {
    #[default]
    Draft,
    Approved,
    Conditional,
    Consumed,
    Expired,
    Rejected,
}

impl NameRequestState {
    /// Whether a filing may still consume this name.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Approved | Self::Conditional)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRequestDetails {
    pub approved_name: Option<String>,
    pub status: NameRequestState,
    /// Set when a conditional approval needs consent that was not yet received.
    pub consent_required: bool,
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRequestApplicant {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: Option<String>,
}

/// The name request the filing is bound to. Numbered companies have no NR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRequest {
    pub nr_number: Option<String>,
    pub details: NameRequestDetails,
    pub applicant: NameRequestApplicant,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameTranslation {
    pub id: Option<String>,
    pub name: String,
}
