//! Plain-data payload exchanged with the filing service.
//!
//! A draft is saved by building an [`IncorporationFiling`] from the state and
//! resumed by loading one back into it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    BusinessContact, EntityType, NameTranslation, OfficeAddresses, OrgPerson, ShareClass,
    StateModel,
};

pub const FILING_NAME: &str = "incorporationApplication";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilingError {
    #[error("an entity type must be selected before a filing can be built")]
    MissingEntityType,

    #[error("filing '{0}' is not an incorporation application")]
    UnexpectedFilingName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingHeader {
    pub name: String,
    pub filing_id: Option<i64>,
    pub folio_number: Option<String>,
    pub date: Option<NaiveDate>,
    pub certified_by: String,
    pub is_certified: bool,
    pub email: String,
    pub is_future_effective: bool,
    pub effective_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub legal_type: EntityType,
    /// Temporary business identifier assigned when the draft was created.
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRequestPayload {
    pub legal_type: EntityType,
    pub nr_number: Option<String>,
    pub legal_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorporationApplication {
    pub name_request: NameRequestPayload,
    #[serde(default)]
    pub name_translations: Vec<NameTranslation>,
    pub offices: OfficeAddresses,
    pub contact_point: BusinessContact,
    #[serde(default)]
    pub parties: Vec<OrgPerson>,
    #[serde(default)]
    pub share_classes: Vec<ShareClass>,
    pub incorporation_agreement_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorporationFiling {
    pub header: FilingHeader,
    pub business: Business,
    pub incorporation_application: IncorporationApplication,
}

impl IncorporationFiling {
    /// Builds the payload from the current state.
    pub fn from_state(state: &StateModel) -> Result<Self, FilingError> {
        let legal_type = state.entity_type.ok_or(FilingError::MissingEntityType)?;

        Ok(Self {
            header: FilingHeader {
                name: FILING_NAME.to_string(),
                filing_id: state.filing_id,
                folio_number: state.define_company_step.folio_number.clone(),
                date: state.current_date,
                certified_by: state.certify_state.certified_by.clone(),
                is_certified: state.certify_state.is_certified,
                email: state.tombstone.user_email.clone(),
                is_future_effective: state.incorporation_date_time.is_future_effective,
                effective_date: state.incorporation_date_time.effective_date,
            },
            business: Business {
                legal_type,
                identifier: state.temp_id.clone(),
            },
            incorporation_application: IncorporationApplication {
                name_request: NameRequestPayload {
                    legal_type,
                    nr_number: state.name_request.nr_number.clone(),
                    legal_name: state.name_request.details.approved_name.clone(),
                },
                name_translations: state.name_translations.clone(),
                offices: state.define_company_step.office_addresses.clone(),
                contact_point: state.define_company_step.business_contact.clone(),
                parties: state.add_people_and_role_step.org_people.clone(),
                share_classes: state.create_share_structure_step.share_classes.clone(),
                incorporation_agreement_type: state
                    .incorporation_agreement_step
                    .agreement_type
                    .clone(),
            },
        })
    }

    /// Copies a resumed draft into `state`.
    ///
    /// Validity flags are not part of the payload; callers revalidate after
    /// loading.
    pub fn load_into(
        self,
        state: &mut StateModel,
    ) -> Result<(), FilingError> {
        if self.header.name != FILING_NAME {
            return Err(FilingError::UnexpectedFilingName(self.header.name));
        }

        let Self {
            header,
            business,
            incorporation_application: application,
        } = self;

        state.entity_type = Some(business.legal_type);
        state.temp_id = business.identifier.or(state.temp_id.take());
        state.filing_id = header.filing_id;
        state.define_company_step.folio_number = header.folio_number;
        state.certify_state.certified_by = header.certified_by;
        state.certify_state.is_certified = header.is_certified;
        state.incorporation_date_time.is_future_effective = header.is_future_effective;
        state.incorporation_date_time.effective_date = header.effective_date;

        state.name_request.nr_number = application.name_request.nr_number;
        if application.name_request.legal_name.is_some() {
            state.name_request.details.approved_name = application.name_request.legal_name;
        }
        state.name_translations = application.name_translations;
        state.define_company_step.office_addresses = application.offices;
        state.define_company_step.business_contact = application.contact_point;
        state.add_people_and_role_step.org_people = application.parties;
        state.create_share_structure_step.share_classes = application.share_classes;
        state.incorporation_agreement_step.agreement_type =
            application.incorporation_agreement_type;

        state.normalize_current_step();
        Ok(())
    }
}
