//! Sub-forms collected by each wizard step.
//!
//! Every step record carries its own `valid` flag. The flag is written by the
//! validation layer (or directly by a UI component) and only read by getters.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street_address: String,
    pub street_address_additional: Option<String>,
    pub address_city: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
    pub delivery_instructions: Option<String>,
}

impl Address {
    /// An address is usable once street, city and country are filled in.
    pub fn is_complete(&self) -> bool {
        !self.street_address.trim().is_empty()
            && !self.address_city.trim().is_empty()
            && !self.address_country.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeAddress {
    pub mailing_address: Address,
    pub delivery_address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeAddresses {
    pub registered_office: Option<OfficeAddress>,
    pub records_office: Option<OfficeAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessContact {
    pub email: String,
    pub confirm_email: String,
    pub phone: Option<String>,
    pub extension: Option<String>,
}

/// Step 1: company definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefineCompanyStep {
    pub valid: bool,
    pub office_addresses: OfficeAddresses,
    pub business_contact: BusinessContact,
    pub folio_number: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    #[default]
    Person,
    Organization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    #[serde(rename = "Completing Party")]
    CompletingParty,
    Incorporator,
    Director,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompletingParty => "Completing Party",
            Self::Incorporator => "Incorporator",
            Self::Director => "Director",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Completing Party" => Some(Self::CompletingParty),
            "Incorporator" => Some(Self::Incorporator),
            "Director" => Some(Self::Director),
            _ => None,
        }
    }
}

/// A person or organization appointed to one or more roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgPerson {
    pub id: Option<String>,
    pub party_type: PartyType,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub org_name: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<RoleType>,
    pub mailing_address: Address,
}

impl OrgPerson {
    pub fn has_role(
        &self,
        role: RoleType,
    ) -> bool {
        self.roles.contains(&role)
    }

    /// Display name: organization name, or the person's full name.
    pub fn display_name(&self) -> String {
        match (&self.party_type, &self.org_name) {
            (PartyType::Organization, Some(name)) => name.clone(),
            _ => [
                Some(self.first_name.as_str()),
                self.middle_name.as_deref(),
                Some(self.last_name.as_str()),
            ]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        }
    }
}

/// Step 2: people and roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeopleAndRoleStep {
    pub valid: bool,
    pub org_people: Vec<OrgPerson>,
}

impl PeopleAndRoleStep {
    pub fn count_with_role(
        &self,
        role: RoleType,
    ) -> usize {
        self.org_people.iter().filter(|p| p.has_role(role)).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareSeries {
    pub id: Option<String>,
    pub name: String,
    pub priority: u32,
    pub has_maximum_shares: bool,
    pub maximum_number_of_shares: Option<u64>,
    pub has_rights_or_restrictions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareClass {
    pub id: Option<String>,
    pub name: String,
    pub priority: u32,
    pub has_maximum_shares: bool,
    pub maximum_number_of_shares: Option<u64>,
    pub has_par_value: bool,
    pub par_value: Option<Decimal>,
    pub currency: Option<String>,
    pub has_rights_or_restrictions: bool,
    pub series: Vec<ShareSeries>,
}

/// Step 3: share structure (benefit companies).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareStructureStep {
    pub valid: bool,
    pub share_classes: Vec<ShareClass>,
}

/// Step 4: incorporation agreement (benefit companies).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncorporationAgreementStep {
    pub valid: bool,
    /// One of the agreement option codes from the resource model.
    pub agreement_type: Option<String>,
}

/// Step 5, part one: certification by the completing party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertifyState {
    pub valid: bool,
    pub certified_by: String,
    pub is_certified: bool,
}

/// Step 5, part two: when the incorporation takes effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeState {
    pub valid: bool,
    pub is_future_effective: bool,
    pub effective_date: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_name_joins_person_name_parts() {
        let person = OrgPerson {
            first_name: "Jane".to_string(),
            middle_name: Some("Q".to_string()),
            last_name: "Doe".to_string(),
            ..Default::default()
        };

        assert_eq!(person.display_name(), "Jane Q Doe");
    }

    #[test]
    fn display_name_prefers_org_name_for_organizations() {
        let org = OrgPerson {
            party_type: PartyType::Organization,
            org_name: Some("Acme Holdings Ltd.".to_string()),
            first_name: "ignored".to_string(),
            ..Default::default()
        };

        assert_eq!(org.display_name(), "Acme Holdings Ltd.");
    }

    #[test]
    fn count_with_role_counts_people_holding_role() {
        let step = PeopleAndRoleStep {
            valid: false,
            org_people: vec![
                OrgPerson {
                    roles: vec![RoleType::CompletingParty, RoleType::Director],
                    ..Default::default()
                },
                OrgPerson {
                    roles: vec![RoleType::Director],
                    ..Default::default()
                },
            ],
        };

        assert_eq!(step.count_with_role(RoleType::Director), 2);
        assert_eq!(step.count_with_role(RoleType::CompletingParty), 1);
        assert_eq!(step.count_with_role(RoleType::Incorporator), 0);
    }

    #[test]
    fn role_type_parse_trims_and_matches_labels() {
        assert_eq!(RoleType::parse(" Completing Party "), Some(RoleType::CompletingParty));
        assert_eq!(RoleType::parse("director"), None);
    }

    #[test]
    fn address_requires_street_city_and_country() {
        let mut address = Address {
            street_address: "1 Main St".to_string(),
            address_city: "Victoria".to_string(),
            ..Default::default()
        };
        assert!(!address.is_complete());

        address.address_country = "CA".to_string();
        assert!(address.is_complete());
    }
}
