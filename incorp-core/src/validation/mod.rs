//! Form validation for each wizard step.
//!
//! [`validate`] computes a [`ValidationReport`] without touching state;
//! [`revalidate`] also writes each step's `valid` flag.

pub mod rules;

use serde::Serialize;
use tracing::debug;

use crate::models::StateModel;

pub use rules::{is_valid_email, is_valid_nr_number};

/// Outcome of validating one step: `Ok` or the list of user-facing messages.
pub type StepResult = Result<(), Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub define_company: StepResult,
    pub people_and_roles: StepResult,
    pub share_structure: StepResult,
    pub incorporation_agreement: StepResult,
    pub certify: StepResult,
    pub effective_date: StepResult,
}

impl ValidationReport {
    /// Every message in step order, prefixed with its step label.
    pub fn messages(&self) -> Vec<String> {
        [
            ("Define company", &self.define_company),
            ("People and roles", &self.people_and_roles),
            ("Share structure", &self.share_structure),
            ("Incorporation agreement", &self.incorporation_agreement),
            ("Certify", &self.certify),
            ("Effective date", &self.effective_date),
        ]
        .into_iter()
        .filter_map(|(label, result)| result.as_ref().err().map(|errs| (label, errs)))
        .flat_map(|(label, errs)| errs.iter().map(move |e| format!("{label}: {e}")))
        .collect()
    }
}

/// Validates every step against the state's resource table.
pub fn validate(state: &StateModel) -> ValidationReport {
    let resources = state.get_resources();

    ValidationReport {
        define_company: rules::validate_define_company(&state.define_company_step),
        people_and_roles: rules::validate_people_and_roles(
            &state.add_people_and_role_step,
            resources,
        ),
        share_structure: rules::validate_share_structure(
            &state.create_share_structure_step,
            resources,
        ),
        incorporation_agreement: rules::validate_incorporation_agreement(
            &state.incorporation_agreement_step,
            resources,
        ),
        certify: rules::validate_certify(&state.certify_state),
        effective_date: rules::validate_effective_date(
            &state.incorporation_date_time,
            state.current_date,
        ),
    }
}

/// Validates every step and stores the results in the step `valid` flags.
///
/// The dirty flag is left alone: recomputing validity is not a user change.
pub fn revalidate(state: &mut StateModel) -> ValidationReport {
    let report = validate(state);

    state.set_define_company_step_validity(report.define_company.is_ok());
    state.set_add_people_and_role_step_validity(report.people_and_roles.is_ok());
    state.set_create_share_structure_step_validity(report.share_structure.is_ok());
    state.set_incorporation_agreement_step_validity(report.incorporation_agreement.is_ok());
    state.set_certify_state_validity(report.certify.is_ok());
    state.set_incorporation_date_time_validity(report.effective_date.is_ok());

    debug!(
        application_valid = state.is_application_valid(),
        "revalidated steps"
    );
    report
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::EntityType;

    #[test]
    fn empty_state_fails_every_step_but_immediate_date() {
        let mut state = StateModel::default();
        state.set_entity_type(EntityType::BenefitCompany).unwrap();

        let report = revalidate(&mut state);

        assert!(report.define_company.is_err());
        assert!(report.people_and_roles.is_err());
        assert!(report.share_structure.is_err());
        assert!(report.incorporation_agreement.is_err());
        assert!(report.certify.is_err());
        assert_eq!(report.effective_date, Ok(()));
        assert!(!state.is_application_valid());
        assert!(state.incorporation_date_time.valid);
    }

    #[test]
    fn revalidate_leaves_dirty_flag_alone() {
        let mut state = StateModel::default();

        revalidate(&mut state);

        assert!(!state.have_changes());
    }

    #[test]
    fn messages_are_prefixed_with_step_label() {
        let mut state = StateModel::default();
        state.set_certify_state("Pat Lee", false);

        let messages = validate(&state).messages();

        assert!(messages.contains(
            &"Certify: The certification statement must be confirmed.".to_string()
        ));
        assert!(messages.iter().all(|m| !m.starts_with("Effective date")));
    }
}
