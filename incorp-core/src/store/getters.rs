//! Derived state over [`StateModel`].
//!
//! Getters never fail. A missing field reads as `None`, `false` or an empty
//! slice. The navigation getters below decide what the stepper and the action
//! bar show or enable.

use chrono::NaiveDate;

use crate::models::{
    AccountType, EntityType, NameRequestApplicant, NameRequestDetails, NameTranslation,
    OfficeAddresses, StateModel,
};
use crate::resources::{AgreementTypeResource, ResourceModel, Step, resources_for};

const STAFF_ROLE: &str = "staff";
const EDIT_ROLE: &str = "edit";
const VIEW_ROLE: &str = "view";

impl StateModel {
    // ─── session ─────────────────────────────────────────────────────────────

    /// Whether the user has the "staff" keycloak role.
    pub fn is_role_staff(&self) -> bool {
        self.tombstone.keycloak_roles.iter().any(|r| r == STAFF_ROLE)
    }

    /// Whether the user is authorized to edit.
    pub fn is_auth_edit(&self) -> bool {
        self.tombstone.auth_roles.iter().any(|r| r == EDIT_ROLE)
    }

    /// Whether the user is authorized to view.
    pub fn is_auth_view(&self) -> bool {
        self.tombstone.auth_roles.iter().any(|r| r == VIEW_ROLE)
    }

    pub fn is_premium_account(&self) -> bool {
        self.account_information.account_type == AccountType::Premium
    }

    pub fn get_account_id(&self) -> Option<i64> {
        self.account_information.id
    }

    pub fn get_current_date(&self) -> Option<NaiveDate> {
        self.current_date
    }

    pub fn get_filing_id(&self) -> Option<i64> {
        self.filing_id
    }

    pub fn get_temp_id(&self) -> Option<&str> {
        self.temp_id.as_deref()
    }

    // ─── entity type and resources ───────────────────────────────────────────

    /// Whether the entity type has been identified.
    pub fn is_entity_type(&self) -> bool {
        self.entity_type.is_some()
    }

    pub fn get_entity_type(&self) -> Option<EntityType> {
        self.entity_type
    }

    /// Whether the entity is a benefit company.
    pub fn is_type_bcomp(&self) -> bool {
        self.entity_type == Some(EntityType::BenefitCompany)
    }

    /// Whether the entity is a cooperative.
    pub fn is_type_coop(&self) -> bool {
        self.entity_type == Some(EntityType::Cooperative)
    }

    /// Resource table bound to the selected entity type.
    pub fn get_resources(&self) -> Option<&'static ResourceModel> {
        self.entity_type.map(resources_for)
    }

    /// The stepper's step list, including excluded entries.
    pub fn get_steps(&self) -> Option<&'static [Step]> {
        self.get_resources().map(|r| r.steps)
    }

    /// Resource entry for the chosen incorporation agreement type.
    pub fn get_agreement_type_resource(&self) -> Option<&'static AgreementTypeResource> {
        let code = self.incorporation_agreement_step.agreement_type.as_deref()?;
        self.get_resources()?.agreement_type(code)
    }

    // ─── company data ────────────────────────────────────────────────────────

    pub fn get_folio_number(&self) -> Option<&str> {
        self.define_company_step.folio_number.as_deref()
    }

    pub fn get_office_addresses(&self) -> &OfficeAddresses {
        &self.define_company_step.office_addresses
    }

    /// Whether this application is for a named business (it has an NR number).
    pub fn is_named_business(&self) -> bool {
        self.name_request
            .nr_number
            .as_deref()
            .is_some_and(|nr| !nr.is_empty())
    }

    pub fn get_name_request_number(&self) -> Option<&str> {
        self.name_request.nr_number.as_deref()
    }

    pub fn get_approved_name(&self) -> Option<&str> {
        self.name_request.details.approved_name.as_deref()
    }

    pub fn get_name_request_details(&self) -> &NameRequestDetails {
        &self.name_request.details
    }

    pub fn get_name_request_applicant(&self) -> &NameRequestApplicant {
        &self.name_request.applicant
    }

    pub fn get_name_translations(&self) -> &[NameTranslation] {
        &self.name_translations
    }

    // ─── change tracking ─────────────────────────────────────────────────────

    /// Whether data changes are currently being ignored.
    pub fn ignore_changes(&self) -> bool {
        self.ignore_changes
    }

    /// Whether there are unsaved data changes.
    pub fn have_changes(&self) -> bool {
        self.have_changes
    }

    /// Whether the app is busy saving, resuming or paying.
    pub fn is_busy_saving(&self) -> bool {
        self.is_saving || self.is_saving_resuming || self.is_filing_paying
    }

    // ─── step validity ───────────────────────────────────────────────────────

    pub fn is_define_company_valid(&self) -> bool {
        self.define_company_step.valid
    }

    pub fn is_add_people_and_roles_valid(&self) -> bool {
        self.add_people_and_role_step.valid
    }

    pub fn is_create_share_structure_valid(&self) -> bool {
        self.create_share_structure_step.valid
    }

    pub fn is_incorporation_agreement_valid(&self) -> bool {
        self.incorporation_agreement_step.valid
    }

    /// Step 5 covers both the certification and the effective date/time.
    pub fn is_review_confirm_valid(&self) -> bool {
        self.certify_state.valid && self.incorporation_date_time.valid
    }

    /// Whether every step the entity type requires reports valid.
    ///
    /// Share structure and incorporation agreement only count for benefit
    /// companies.
    pub fn is_application_valid(&self) -> bool {
        let bcomp_steps_valid = !self.is_type_bcomp()
            || (self.is_create_share_structure_valid() && self.is_incorporation_agreement_valid());

        self.is_define_company_valid()
            && self.is_add_people_and_roles_valid()
            && bcomp_steps_valid
            && self.is_review_confirm_valid()
    }

    // ─── navigation ──────────────────────────────────────────────────────────

    /// Number of counted steps, or -1 when no step list is bound.
    pub fn get_max_step(&self) -> i32 {
        self.get_resources()
            .map_or(-1, |r| r.counted_steps().count() as i32)
    }

    pub fn get_current_step(&self) -> i32 {
        self.current_step
    }

    /// Whether the Back button should be displayed.
    pub fn is_show_back_btn(&self) -> bool {
        self.current_step > 1
    }

    /// Whether the Review and Confirm button should be displayed.
    pub fn is_show_review_confirm_btn(&self) -> bool {
        self.is_entity_type() && self.current_step < self.get_max_step()
    }

    /// Whether the File and Pay button should be displayed.
    pub fn is_show_file_pay_btn(&self) -> bool {
        self.current_step == self.get_max_step()
    }

    /// Whether the File and Pay button should be enabled.
    pub fn is_enable_file_pay_btn(&self) -> bool {
        self.is_application_valid()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{NameRequest, Tombstone};

    fn all_steps_valid(entity_type: Option<EntityType>) -> StateModel {
        let mut state = StateModel {
            entity_type,
            ..Default::default()
        };
        state.define_company_step.valid = true;
        state.add_people_and_role_step.valid = true;
        state.create_share_structure_step.valid = true;
        state.incorporation_agreement_step.valid = true;
        state.certify_state.valid = true;
        state.incorporation_date_time.valid = true;
        state
    }

    // =========================================================================
    // role tests
    // =========================================================================

    #[test]
    fn role_getters_read_tombstone_roles() {
        let state = StateModel {
            tombstone: Tombstone {
                keycloak_roles: vec!["staff".to_string()],
                auth_roles: vec!["view".to_string()],
                user_email: String::new(),
            },
            ..Default::default()
        };

        assert!(state.is_role_staff());
        assert!(state.is_auth_view());
        assert!(!state.is_auth_edit());
    }

    #[test]
    fn role_getters_are_false_with_no_roles() {
        let state = StateModel::default();

        assert!(!state.is_role_staff());
        assert!(!state.is_auth_edit());
        assert!(!state.is_auth_view());
    }

    // =========================================================================
    // entity type tests
    // =========================================================================

    #[test]
    fn entity_type_getters_follow_selection() {
        let mut state = StateModel::default();
        assert!(!state.is_entity_type());
        assert!(!state.is_type_bcomp());
        assert!(!state.is_type_coop());

        state.entity_type = Some(EntityType::BenefitCompany);
        assert!(state.is_entity_type());
        assert!(state.is_type_bcomp());

        state.entity_type = Some(EntityType::Cooperative);
        assert!(state.is_type_coop());
        assert!(!state.is_type_bcomp());
    }

    #[test]
    fn named_business_requires_non_empty_nr_number() {
        let mut state = StateModel::default();
        assert!(!state.is_named_business());

        state.name_request = NameRequest {
            nr_number: Some(String::new()),
            ..Default::default()
        };
        assert!(!state.is_named_business());

        state.name_request.nr_number = Some("NR 1234567".to_string());
        assert!(state.is_named_business());
        assert_eq!(state.get_name_request_number(), Some("NR 1234567"));
    }

    #[test]
    fn agreement_type_resource_requires_entity_type_and_code() {
        let mut state = StateModel::default();
        state.incorporation_agreement_step.agreement_type = Some("sample".to_string());
        assert!(state.get_agreement_type_resource().is_none());

        state.entity_type = Some(EntityType::BenefitCompany);
        assert_eq!(
            state.get_agreement_type_resource().map(|a| a.code),
            Some("sample")
        );

        state.entity_type = Some(EntityType::BcUlcCompany);
        assert!(state.get_agreement_type_resource().is_none());
    }

    // =========================================================================
    // max step tests
    // =========================================================================

    #[test]
    fn max_step_is_negative_one_without_step_list() {
        assert_eq!(StateModel::default().get_max_step(), -1);
    }

    #[test]
    fn max_step_excludes_sentinel_steps() {
        let mut state = StateModel {
            entity_type: Some(EntityType::Cooperative),
            ..Default::default()
        };
        assert_eq!(state.get_max_step(), 3);

        state.entity_type = Some(EntityType::BenefitCompany);
        assert_eq!(state.get_max_step(), 5);
    }

    // =========================================================================
    // navigation tests
    // =========================================================================

    #[test]
    fn back_button_shows_after_first_step() {
        let mut state = StateModel::default();
        assert!(!state.is_show_back_btn());

        state.current_step = 2;
        assert!(state.is_show_back_btn());
    }

    #[test]
    fn review_confirm_button_needs_entity_type() {
        let mut state = StateModel::default();
        assert!(!state.is_show_review_confirm_btn());

        state.entity_type = Some(EntityType::BenefitCompany);
        assert!(state.is_show_review_confirm_btn());
    }

    #[test]
    fn file_pay_button_shows_only_on_last_step() {
        let mut state = StateModel {
            entity_type: Some(EntityType::BenefitCompany),
            ..Default::default()
        };

        for step in 1..5 {
            state.current_step = step;
            assert!(!state.is_show_file_pay_btn(), "step {step}");
            assert!(state.is_show_review_confirm_btn(), "step {step}");
        }

        state.current_step = 5;
        assert!(state.is_show_file_pay_btn());
        assert!(!state.is_show_review_confirm_btn());
    }

    #[test]
    fn last_step_with_all_flags_valid_enables_file_and_pay() {
        let mut state = all_steps_valid(Some(EntityType::Cooperative));
        state.current_step = 3;

        assert_eq!(state.get_max_step(), 3);
        assert!(state.is_enable_file_pay_btn());
        assert!(state.is_show_file_pay_btn());
        assert!(!state.is_show_review_confirm_btn());
    }

    // =========================================================================
    // file and pay enablement tests
    // =========================================================================

    #[test]
    fn bcomp_requires_share_structure_and_agreement() {
        let mut state = all_steps_valid(Some(EntityType::BenefitCompany));
        assert!(state.is_enable_file_pay_btn());

        state.create_share_structure_step.valid = false;
        assert!(!state.is_enable_file_pay_btn());

        state.create_share_structure_step.valid = true;
        state.incorporation_agreement_step.valid = false;
        assert!(!state.is_enable_file_pay_btn());
    }

    #[test]
    fn other_entity_types_ignore_share_structure_and_agreement() {
        let others = EntityType::ALL
            .into_iter()
            .filter(|t| *t != EntityType::BenefitCompany)
            .map(Some)
            .chain([None]);

        for entity_type in others {
            let mut state = all_steps_valid(entity_type);
            state.create_share_structure_step.valid = false;
            state.incorporation_agreement_step.valid = false;

            assert!(state.is_enable_file_pay_btn(), "{entity_type:?}");
            assert!(state.is_application_valid(), "{entity_type:?}");
        }
    }

    #[test]
    fn file_and_pay_always_requires_steps_one_two_and_five() {
        let breakers: [fn(&mut StateModel); 4] = [
            |s| s.define_company_step.valid = false,
            |s| s.add_people_and_role_step.valid = false,
            |s| s.certify_state.valid = false,
            |s| s.incorporation_date_time.valid = false,
        ];

        for entity_type in EntityType::ALL {
            for breaker in breakers {
                let mut state = all_steps_valid(Some(entity_type));
                breaker(&mut state);

                assert!(!state.is_enable_file_pay_btn(), "{entity_type}");
                assert!(!state.is_application_valid(), "{entity_type}");
            }
        }
    }

    // =========================================================================
    // busy flag tests
    // =========================================================================

    #[test]
    fn busy_saving_when_any_busy_flag_is_set() {
        let mut state = StateModel::default();
        assert!(!state.is_busy_saving());

        state.is_saving_resuming = true;
        assert!(state.is_busy_saving());

        state.is_saving_resuming = false;
        state.is_filing_paying = true;
        assert!(state.is_busy_saving());
    }
}
