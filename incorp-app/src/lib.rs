//! Front end of the incorporation wizard: configuration, logging, async
//! filing actions and the dialog and summary views built on the core state.

pub mod actions;
pub mod config;
pub mod dialogs;
pub mod logging;
pub mod models;
pub mod utils;

pub use actions::{ActionError, SaveMode, file_and_pay, resume_draft, save_draft};
pub use config::{ConfigError, WizardConfig};
pub use dialogs::{DialogKind, WizardEvent, dialog_for};
pub use models::WizardSummary;
