//! Which modal dialog the wizard should show, derived from state flags and
//! action failures.

use std::fmt;

use incorp_core::{ServiceError, StateModel};

use crate::actions::ActionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    AccountAuthorization,
    /// Unsaved changes on navigation away.
    Confirm,
    ConfirmRemove,
    FetchError,
    InvalidIncorporationApplication,
    NameRequestInvalidError,
    PaymentError,
    SaveError,
    FileAndPayInvalidNameRequest,
}

impl DialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AccountAuthorization => "Account Authorization",
            Self::Confirm => "Unsaved Changes",
            Self::ConfirmRemove => "Confirm Remove",
            Self::FetchError => "Unable to Resume Application",
            Self::InvalidIncorporationApplication => "Invalid Incorporation Application",
            Self::NameRequestInvalidError => "Name Request Invalid",
            Self::PaymentError => "Unable to Process Payment",
            Self::SaveError => "Unable to Save Application",
            Self::FileAndPayInvalidNameRequest => "Name Request Not Valid for Filing",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::AccountAuthorization => {
                "This account is not authorized to view or edit this application."
            }
            Self::Confirm => "You have unsaved changes. Do you want to leave without saving?",
            Self::ConfirmRemove => "Remove this person from the application?",
            Self::FetchError => "We were unable to retrieve your draft application.",
            Self::InvalidIncorporationApplication => {
                "This draft is not a valid incorporation application."
            }
            Self::NameRequestInvalidError => {
                "The name request for this application is no longer valid."
            }
            Self::PaymentError => "We were unable to complete your filing and payment.",
            Self::SaveError => "We were unable to save your application.",
            Self::FileAndPayInvalidNameRequest => {
                "The name request could not be used to file this application."
            }
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.text())
    }
}

/// Something the user did that may need a dialog.
#[derive(Debug)]
pub enum WizardEvent<'a> {
    /// The application finished loading.
    Load,
    /// The user is navigating away from the wizard.
    Leave,
    /// The user asked to remove the person at this index.
    RemovePerson(usize),
    Failed(&'a ActionError),
}

/// The dialog to show for `event`, if any.
pub fn dialog_for(
    state: &StateModel,
    event: WizardEvent<'_>,
) -> Option<DialogKind> {
    match event {
        WizardEvent::Load => on_load(state),
        WizardEvent::Leave => {
            (state.have_changes() && !state.ignore_changes()).then_some(DialogKind::Confirm)
        }
        WizardEvent::RemovePerson(index) => (index
            < state.add_people_and_role_step.org_people.len())
        .then_some(DialogKind::ConfirmRemove),
        WizardEvent::Failed(error) => for_error(error),
    }
}

fn on_load(state: &StateModel) -> Option<DialogKind> {
    if !state.is_auth_edit() && !state.is_auth_view() {
        return Some(DialogKind::AccountAuthorization);
    }
    let status = state.get_name_request_details().status;
    if state.is_named_business() && !status.is_usable() {
        return Some(DialogKind::NameRequestInvalidError);
    }
    None
}

fn for_error(error: &ActionError) -> Option<DialogKind> {
    if error.service_error() == Some(&ServiceError::Unauthorized) {
        return Some(DialogKind::AccountAuthorization);
    }
    match error {
        ActionError::Busy => None,
        ActionError::MissingTempId | ActionError::Fetch(_) => Some(DialogKind::FetchError),
        ActionError::Filing(_) => Some(DialogKind::InvalidIncorporationApplication),
        ActionError::NotReady => Some(DialogKind::InvalidIncorporationApplication),
        ActionError::InvalidNameRequest { .. } => Some(DialogKind::FileAndPayInvalidNameRequest),
        ActionError::Save(_) => Some(DialogKind::SaveError),
        ActionError::Payment(_) => Some(DialogKind::PaymentError),
    }
}
