//! Async actions that move the wizard state through the filing service.
//!
//! Every action sets its busy flag before the first await and clears it on
//! every return path, so the save and pay buttons re-enable after failures.

use incorp_core::{
    FilingError, FilingService, IncorporationFiling, PaymentOutcome, ServiceError, StateModel,
    validation::{self, is_valid_nr_number},
};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("another save or payment is already in progress")]
    Busy,

    #[error("there is no draft to resume")]
    MissingTempId,

    #[error("the application is not ready to file")]
    NotReady,

    #[error("name request {nr_number} cannot be used: {reason}")]
    InvalidNameRequest { nr_number: String, reason: String },

    #[error("failed to fetch draft: {0}")]
    Fetch(#[source] ServiceError),

    #[error("failed to save draft: {0}")]
    Save(#[source] ServiceError),

    #[error("failed to file and pay: {0}")]
    Payment(#[source] ServiceError),

    #[error(transparent)]
    Filing(#[from] FilingError),
}

impl ActionError {
    /// The service failure behind this error, if any.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Fetch(e) | Self::Save(e) | Self::Payment(e) => Some(e),
            _ => None,
        }
    }
}

/// Which button started a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Save,
    SaveAndResumeLater,
}

/// Loads the draft identified by the state's temp id.
///
/// Changes are ignored while the draft is copied in, and step validity is
/// recomputed afterwards without marking the state dirty.
pub async fn resume_draft<S>(
    state: &mut StateModel,
    service: &S,
) -> Result<(), ActionError>
where
    S: FilingService + ?Sized,
{
    let temp_id = state
        .get_temp_id()
        .map(str::to_string)
        .ok_or(ActionError::MissingTempId)?;
    if state.is_busy_saving() {
        return Err(ActionError::Busy);
    }

    state.set_is_saving_resuming(true);
    let fetched = service.fetch_draft(&temp_id).await;
    state.set_is_saving_resuming(false);

    let filing = fetched.map_err(|e| {
        warn!(temp_id, error = %e, "draft fetch failed");
        ActionError::Fetch(e)
    })?;

    state.set_ignore_changes(true);
    let loaded = filing.load_into(state);
    validation::revalidate(state);
    state.set_ignore_changes(false);
    loaded?;

    state.set_have_changes(false);
    info!(temp_id, entity_type = ?state.get_entity_type(), "draft resumed");
    Ok(())
}

/// Saves the current state as a draft and records the returned filing id.
pub async fn save_draft<S>(
    state: &mut StateModel,
    service: &S,
    mode: SaveMode,
) -> Result<i64, ActionError>
where
    S: FilingService + ?Sized,
{
    if state.is_busy_saving() {
        return Err(ActionError::Busy);
    }
    let filing = IncorporationFiling::from_state(state)?;

    set_save_flag(state, mode, true);
    let saved = service.save_draft(&filing).await;
    set_save_flag(state, mode, false);

    let filing_id = saved.map_err(|e| {
        warn!(error = %e, ?mode, "draft save failed");
        ActionError::Save(e)
    })?;

    state.set_filing_id(filing_id);
    state.set_have_changes(false);
    info!(filing_id, ?mode, "draft saved");
    Ok(filing_id)
}

fn set_save_flag(
    state: &mut StateModel,
    mode: SaveMode,
    value: bool,
) {
    match mode {
        SaveMode::Save => state.set_is_saving(value),
        SaveMode::SaveAndResumeLater => state.set_is_saving_resuming(value),
    }
}

/// Files the application and starts payment.
///
/// Refuses unless the file-and-pay button would be enabled. A named
/// business has its name request re-checked with the service first.
pub async fn file_and_pay<S>(
    state: &mut StateModel,
    service: &S,
) -> Result<PaymentOutcome, ActionError>
where
    S: FilingService + ?Sized,
{
    if state.is_busy_saving() {
        return Err(ActionError::Busy);
    }
    if !state.is_enable_file_pay_btn() {
        return Err(ActionError::NotReady);
    }
    let filing = IncorporationFiling::from_state(state)?;

    state.set_is_filing_paying(true);
    let result = submit(state, service, &filing).await;
    state.set_is_filing_paying(false);

    let outcome = result?;
    state.set_filing_id(outcome.filing_id);
    state.set_have_changes(false);
    info!(
        filing_id = outcome.filing_id,
        pay_later = outcome.payment_token.is_some(),
        "application filed"
    );
    Ok(outcome)
}

async fn submit<S>(
    state: &StateModel,
    service: &S,
    filing: &IncorporationFiling,
) -> Result<PaymentOutcome, ActionError>
where
    S: FilingService + ?Sized,
{
    if state.is_named_business()
        && let Some(nr_number) = state.get_name_request_number()
    {
        check_name_request(state, service, nr_number).await?;
    }

    service.file_and_pay(filing).await.map_err(|e| {
        warn!(error = %e, "file and pay failed");
        ActionError::Payment(e)
    })
}

async fn check_name_request<S>(
    state: &StateModel,
    service: &S,
    nr_number: &str,
) -> Result<(), ActionError>
where
    S: FilingService + ?Sized,
{
    let invalid = |reason: &str| {
        warn!(nr_number, reason, "name request rejected");
        ActionError::InvalidNameRequest {
            nr_number: nr_number.to_string(),
            reason: reason.to_string(),
        }
    };

    if !is_valid_nr_number(nr_number) {
        return Err(invalid("malformed number"));
    }

    let name_request = match service.fetch_name_request(nr_number).await {
        Ok(nr) => nr,
        Err(ServiceError::NotFound) => return Err(invalid("not found")),
        Err(e) => return Err(ActionError::Payment(e)),
    };
    let details = &name_request.details;

    if !details.status.is_usable() {
        return Err(invalid(&format!("status is {:?}", details.status)));
    }
    if details.consent_required {
        return Err(invalid("consent has not been received"));
    }
    if let (Some(expires), Some(today)) = (details.expiration_date, state.get_current_date())
        && expires < today
    {
        return Err(invalid("expired"));
    }
    Ok(())
}
