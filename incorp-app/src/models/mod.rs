mod wizard_summary;

pub use wizard_summary::{StepStatus, WizardSummary};
