//! Single-writer updates to [`StateModel`].
//!
//! Mutations that change user-entered data mark the state dirty unless
//! changes are being ignored (e.g. while a draft is being loaded). Flag and
//! validity mutations never touch the dirty flag.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use super::StateError;
use crate::models::{
    AccountInformation, BusinessContact, EntityType, NameRequest, NameTranslation,
    OfficeAddresses, OrgPerson, ShareClass, StateModel,
};

impl StateModel {
    fn mark_changed(&mut self) {
        if !self.ignore_changes {
            self.have_changes = true;
        }
    }

    // ─── session ─────────────────────────────────────────────────────────────

    pub fn set_tombstone_roles(
        &mut self,
        keycloak_roles: Vec<String>,
        auth_roles: Vec<String>,
    ) {
        debug!(?keycloak_roles, ?auth_roles, "setting roles");
        self.tombstone.keycloak_roles = keycloak_roles;
        self.tombstone.auth_roles = auth_roles;
    }

    pub fn set_user_email(
        &mut self,
        email: impl Into<String>,
    ) {
        self.tombstone.user_email = email.into();
    }

    pub fn set_account_information(
        &mut self,
        info: AccountInformation,
    ) {
        self.account_information = info;
    }

    pub fn set_current_date(
        &mut self,
        date: NaiveDate,
    ) {
        self.current_date = Some(date);
    }

    pub fn set_temp_id(
        &mut self,
        temp_id: impl Into<String>,
    ) {
        self.temp_id = Some(temp_id.into());
    }

    pub fn set_filing_id(
        &mut self,
        filing_id: i64,
    ) {
        debug!(filing_id, "setting filing id");
        self.filing_id = Some(filing_id);
    }

    // ─── entity type and navigation ──────────────────────────────────────────

    /// Selects the entity type, which also binds its resource table.
    ///
    /// Once a draft has a filing id the entity type is fixed. If the current
    /// step does not exist for the new type the wizard returns to step 1.
    pub fn set_entity_type(
        &mut self,
        entity_type: EntityType,
    ) -> Result<(), StateError> {
        if let (Some(current), Some(_)) = (self.entity_type, self.filing_id) {
            if current != entity_type {
                return Err(StateError::EntityTypeLocked {
                    current,
                    requested: entity_type,
                });
            }
        }

        debug!(%entity_type, "setting entity type");
        self.entity_type = Some(entity_type);
        self.normalize_current_step();
        Ok(())
    }

    /// Parses a corp type code and selects it.
    pub fn set_entity_type_code(
        &mut self,
        code: &str,
    ) -> Result<(), StateError> {
        let entity_type = EntityType::parse(code)
            .ok_or_else(|| StateError::UnknownEntityType(code.to_string()))?;
        self.set_entity_type(entity_type)
    }

    /// Moves the wizard to `step`, which must be within `1..=max_step`.
    ///
    /// Without a bound step list only step 1 is accepted.
    pub fn set_current_step(
        &mut self,
        step: i32,
    ) -> Result<(), StateError> {
        let max_step = self.get_max_step().max(1);
        if !(1..=max_step).contains(&step) {
            return Err(StateError::StepOutOfRange { step, max_step });
        }

        debug!(step, "setting current step");
        self.current_step = step;
        Ok(())
    }

    /// Resets `current_step` to 1 when it lies outside `1..=max_step`.
    ///
    /// Loaders call this after replacing the state wholesale.
    pub fn normalize_current_step(&mut self) {
        let max_step = self.get_max_step().max(1);
        if !(1..=max_step).contains(&self.current_step) {
            debug!(step = self.current_step, max_step, "resetting out-of-range step");
            self.current_step = 1;
        }
    }

    pub fn next_step(&mut self) -> Result<(), StateError> {
        self.set_current_step(self.current_step + 1)
    }

    pub fn previous_step(&mut self) -> Result<(), StateError> {
        self.set_current_step(self.current_step - 1)
    }

    // ─── name request ────────────────────────────────────────────────────────

    pub fn set_name_request(
        &mut self,
        name_request: NameRequest,
    ) {
        self.name_request = name_request;
        self.mark_changed();
    }

    pub fn set_name_translations(
        &mut self,
        translations: Vec<NameTranslation>,
    ) {
        self.name_translations = translations;
        self.mark_changed();
    }

    // ─── step 1: define company ──────────────────────────────────────────────

    pub fn set_office_addresses(
        &mut self,
        addresses: OfficeAddresses,
    ) {
        self.define_company_step.office_addresses = addresses;
        self.mark_changed();
    }

    pub fn set_business_contact(
        &mut self,
        contact: BusinessContact,
    ) {
        self.define_company_step.business_contact = contact;
        self.mark_changed();
    }

    /// Stores the folio number; blank input clears it.
    pub fn set_folio_number(
        &mut self,
        folio_number: &str,
    ) {
        let trimmed = folio_number.trim();
        self.define_company_step.folio_number = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.mark_changed();
    }

    pub fn set_define_company_step_validity(
        &mut self,
        valid: bool,
    ) {
        self.define_company_step.valid = valid;
    }

    // ─── step 2: people and roles ────────────────────────────────────────────

    pub fn set_org_persons_list(
        &mut self,
        people: Vec<OrgPerson>,
    ) {
        debug!(count = people.len(), "setting org persons");
        self.add_people_and_role_step.org_people = people;
        self.mark_changed();
    }

    pub fn set_add_people_and_role_step_validity(
        &mut self,
        valid: bool,
    ) {
        self.add_people_and_role_step.valid = valid;
    }

    // ─── step 3: share structure ─────────────────────────────────────────────

    pub fn set_share_classes(
        &mut self,
        share_classes: Vec<ShareClass>,
    ) {
        debug!(count = share_classes.len(), "setting share classes");
        self.create_share_structure_step.share_classes = share_classes;
        self.mark_changed();
    }

    pub fn set_create_share_structure_step_validity(
        &mut self,
        valid: bool,
    ) {
        self.create_share_structure_step.valid = valid;
    }

    // ─── step 4: incorporation agreement ─────────────────────────────────────

    pub fn set_agreement_type(
        &mut self,
        agreement_type: Option<String>,
    ) {
        self.incorporation_agreement_step.agreement_type = agreement_type;
        self.mark_changed();
    }

    pub fn set_incorporation_agreement_step_validity(
        &mut self,
        valid: bool,
    ) {
        self.incorporation_agreement_step.valid = valid;
    }

    // ─── step 5: review and confirm ──────────────────────────────────────────

    pub fn set_certify_state(
        &mut self,
        certified_by: impl Into<String>,
        is_certified: bool,
    ) {
        self.certify_state.certified_by = certified_by.into();
        self.certify_state.is_certified = is_certified;
        self.mark_changed();
    }

    pub fn set_certify_state_validity(
        &mut self,
        valid: bool,
    ) {
        self.certify_state.valid = valid;
    }

    /// Sets the effective date; `None` means the filing is effective
    /// immediately.
    pub fn set_effective_date_time(
        &mut self,
        effective_date: Option<NaiveDateTime>,
    ) {
        self.incorporation_date_time.is_future_effective = effective_date.is_some();
        self.incorporation_date_time.effective_date = effective_date;
        self.mark_changed();
    }

    pub fn set_incorporation_date_time_validity(
        &mut self,
        valid: bool,
    ) {
        self.incorporation_date_time.valid = valid;
    }

    // ─── ui flags ────────────────────────────────────────────────────────────

    pub fn set_is_saving(
        &mut self,
        is_saving: bool,
    ) {
        self.is_saving = is_saving;
    }

    pub fn set_is_saving_resuming(
        &mut self,
        is_saving_resuming: bool,
    ) {
        self.is_saving_resuming = is_saving_resuming;
    }

    pub fn set_is_filing_paying(
        &mut self,
        is_filing_paying: bool,
    ) {
        self.is_filing_paying = is_filing_paying;
    }

    pub fn set_ignore_changes(
        &mut self,
        ignore_changes: bool,
    ) {
        self.ignore_changes = ignore_changes;
    }

    pub fn set_have_changes(
        &mut self,
        have_changes: bool,
    ) {
        self.have_changes = have_changes;
    }
}
