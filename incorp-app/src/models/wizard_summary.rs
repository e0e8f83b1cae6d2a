use std::fmt;

use incorp_core::{StateModel, resources::RouteName};

use crate::utils::{opt_display, yes_no};

/// One counted step with its current validity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepStatus {
    pub step: i32,
    pub text: &'static str,
    pub valid: bool,
    /// Whether the step's validity counts towards filing.
    pub required: bool,
    pub current: bool,
}

/// Snapshot of everything the wizard chrome reads from the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardSummary {
    pub entity_type: Option<&'static str>,
    pub entity_description: Option<&'static str>,
    pub approved_name: Option<String>,
    pub nr_number: Option<String>,
    pub filing_id: Option<i64>,
    pub current_step: i32,
    pub max_step: i32,
    pub steps: Vec<StepStatus>,
    pub show_back_btn: bool,
    pub show_review_confirm_btn: bool,
    pub show_file_pay_btn: bool,
    pub enable_file_pay_btn: bool,
    pub have_changes: bool,
    pub busy_saving: bool,
}

impl WizardSummary {
    pub fn from_state(state: &StateModel) -> Self {
        let steps = state
            .get_resources()
            .map(|resources| {
                resources
                    .counted_steps()
                    .map(|step| {
                        let (valid, required) = step_validity(state, step.to);
                        StepStatus {
                            step: step.step,
                            text: step.text,
                            valid,
                            required,
                            current: step.step == state.get_current_step(),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            entity_type: state.get_entity_type().map(|e| e.as_str()),
            entity_description: state.get_entity_type().map(|e| e.full_description()),
            approved_name: state.get_approved_name().map(str::to_string),
            nr_number: state.get_name_request_number().map(str::to_string),
            filing_id: state.get_filing_id(),
            current_step: state.get_current_step(),
            max_step: state.get_max_step(),
            steps,
            show_back_btn: state.is_show_back_btn(),
            show_review_confirm_btn: state.is_show_review_confirm_btn(),
            show_file_pay_btn: state.is_show_file_pay_btn(),
            enable_file_pay_btn: state.is_enable_file_pay_btn(),
            have_changes: state.have_changes(),
            busy_saving: state.is_busy_saving(),
        }
    }
}

fn step_validity(
    state: &StateModel,
    route: RouteName,
) -> (bool, bool) {
    let bcomp = state.is_type_bcomp();
    match route {
        RouteName::DefineCompany => (state.is_define_company_valid(), true),
        RouteName::AddPeopleAndRoles => (state.is_add_people_and_roles_valid(), true),
        RouteName::CreateShareStructure => (state.is_create_share_structure_valid(), bcomp),
        RouteName::IncorporationAgreement => (state.is_incorporation_agreement_valid(), bcomp),
        RouteName::ReviewConfirm => (state.is_review_confirm_valid(), true),
        RouteName::CreateRules | RouteName::CreateMemorandum => (false, false),
    }
}

impl fmt::Display for WizardSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Entity type:     {} {}",
            opt_display(self.entity_type),
            self.entity_description
                .map(|d| format!("({d})"))
                .unwrap_or_default()
        )?;
        writeln!(f, "Name:            {}", opt_display(self.approved_name.as_deref()))?;
        writeln!(f, "Name request:    {}", opt_display(self.nr_number.as_deref()))?;
        writeln!(f, "Filing id:       {}", opt_display(self.filing_id))?;
        writeln!(f, "Step:            {} of {}", self.current_step, self.max_step)?;

        for step in &self.steps {
            let marker = if step.current { ">" } else { " " };
            let state = match (step.required, step.valid) {
                (false, _) => "optional",
                (true, true) => "valid",
                (true, false) => "incomplete",
            };
            writeln!(f, "  {marker} {}. {:<32} {state}", step.step, step.text)?;
        }

        writeln!(f, "Back button:     {}", yes_no(self.show_back_btn))?;
        writeln!(f, "Review button:   {}", yes_no(self.show_review_confirm_btn))?;
        writeln!(
            f,
            "File and pay:    {} (enabled: {})",
            yes_no(self.show_file_pay_btn),
            yes_no(self.enable_file_pay_btn)
        )?;
        write!(f, "Unsaved changes: {}", yes_no(self.have_changes))
    }
}
