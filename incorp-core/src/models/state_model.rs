use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    AccountInformation, CertifyState, DateTimeState, DefineCompanyStep, EntityType,
    IncorporationAgreementStep, NameRequest, NameTranslation, PeopleAndRoleStep,
    ShareStructureStep, Tombstone,
};

/// The whole wizard session, one per user session.
///
/// Nothing here is persisted by this crate. Drafts travel to and from the
/// filing service as [`crate::filing::IncorporationFiling`] payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateModel {
    pub tombstone: Tombstone,
    pub account_information: AccountInformation,
    pub name_request: NameRequest,
    pub name_translations: Vec<NameTranslation>,
    pub current_date: Option<NaiveDate>,
    pub certify_state: CertifyState,
    /// 1-based index of the step being shown.
    pub current_step: i32,
    pub temp_id: Option<String>,
    pub entity_type: Option<EntityType>,
    pub is_saving: bool,
    pub filing_id: Option<i64>,
    pub is_saving_resuming: bool,
    pub is_filing_paying: bool,
    pub define_company_step: DefineCompanyStep,
    pub add_people_and_role_step: PeopleAndRoleStep,
    pub create_share_structure_step: ShareStructureStep,
    pub incorporation_agreement_step: IncorporationAgreementStep,
    pub incorporation_date_time: DateTimeState,
    pub ignore_changes: bool,
    pub have_changes: bool,
}

impl Default for StateModel {
    fn default() -> Self {
        Self {
            tombstone: Tombstone::default(),
            account_information: AccountInformation::default(),
            name_request: NameRequest::default(),
            name_translations: Vec::new(),
            current_date: None,
            certify_state: CertifyState::default(),
            current_step: 1,
            temp_id: None,
            entity_type: None,
            is_saving: false,
            filing_id: None,
            is_saving_resuming: false,
            is_filing_paying: false,
            define_company_step: DefineCompanyStep::default(),
            add_people_and_role_step: PeopleAndRoleStep::default(),
            create_share_structure_step: ShareStructureStep::default(),
            incorporation_agreement_step: IncorporationAgreementStep::default(),
            incorporation_date_time: DateTimeState::default(),
            ignore_changes: false,
            have_changes: false,
        }
    }
}
