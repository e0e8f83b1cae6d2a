//! Drives the async actions against an in-memory filing service, starting
//! from the on-disk fixtures shared with the data crate.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use incorp_app::{SaveMode, WizardSummary, file_and_pay, resume_draft, save_draft};
use incorp_core::{
    FilingService, IncorporationFiling, NameRequest, NameRequestState, PaymentOutcome,
    ServiceError, StateModel, validation,
};
use incorp_data::{PeopleLoader, ShareClassLoader, draft};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("incorp-data")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Stores drafts by temp id and approves every name request it is asked about.
#[derive(Default)]
struct InMemoryService {
    drafts: Mutex<HashMap<String, IncorporationFiling>>,
}

#[async_trait]
impl FilingService for InMemoryService {
    async fn fetch_draft(&self, temp_id: &str) -> Result<IncorporationFiling, ServiceError> {
        self.drafts
            .lock()
            .unwrap()
            .get(temp_id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn save_draft(&self, filing: &IncorporationFiling) -> Result<i64, ServiceError> {
        let temp_id = filing
            .business
            .identifier
            .clone()
            .ok_or_else(|| ServiceError::Rejected("missing identifier".into()))?;
        let mut drafts = self.drafts.lock().unwrap();
        let mut stored = filing.clone();
        let filing_id = stored.header.filing_id.unwrap_or(drafts.len() as i64 + 100);
        stored.header.filing_id = Some(filing_id);
        drafts.insert(temp_id, stored);
        Ok(filing_id)
    }

    async fn fetch_name_request(&self, nr_number: &str) -> Result<NameRequest, ServiceError> {
        let mut nr = NameRequest {
            nr_number: Some(nr_number.to_string()),
            ..Default::default()
        };
        nr.details.status = NameRequestState::Approved;
        Ok(nr)
    }

    async fn file_and_pay(
        &self,
        filing: &IncorporationFiling,
    ) -> Result<PaymentOutcome, ServiceError> {
        let filing_id = filing.header.filing_id.ok_or(ServiceError::NotFound)?;
        Ok(PaymentOutcome {
            filing_id,
            payment_token: None,
            redirect_url: format!("/dashboard/{filing_id}"),
        })
    }
}

fn completed_fixture() -> StateModel {
    let mut state = draft::load_from_file(&fixture("draft_ben.toml")).unwrap();
    state.set_org_persons_list(
        PeopleLoader::parse(File::open(fixture("roster.csv")).unwrap()).unwrap(),
    );
    state.set_share_classes(
        ShareClassLoader::parse(File::open(fixture("share_classes.csv")).unwrap()).unwrap(),
    );
    validation::revalidate(&mut state);
    state
}

#[tokio::test]
async fn saved_draft_resumes_with_same_step_summary() {
    let service = InMemoryService::default();
    let mut original = completed_fixture();

    let filing_id = save_draft(&mut original, &service, SaveMode::Save)
        .await
        .unwrap();

    let mut resumed = StateModel::default();
    resumed.set_temp_id("T0000123");
    resumed.set_current_date(original.get_current_date().unwrap());
    resume_draft(&mut resumed, &service).await.unwrap();

    assert_eq!(resumed.get_filing_id(), Some(filing_id));
    assert_eq!(
        WizardSummary::from_state(&resumed).steps,
        WizardSummary::from_state(&original).steps
    );
    assert!(!resumed.have_changes());
}

#[tokio::test]
async fn saved_draft_files_and_pays() {
    let service = InMemoryService::default();
    let mut state = completed_fixture();
    save_draft(&mut state, &service, SaveMode::SaveAndResumeLater)
        .await
        .unwrap();
    state.set_current_step(state.get_max_step()).unwrap();

    let summary = WizardSummary::from_state(&state);
    assert!(summary.show_file_pay_btn);
    assert!(summary.enable_file_pay_btn);

    let outcome = file_and_pay(&mut state, &service).await.unwrap();

    assert_eq!(outcome.redirect_url, format!("/dashboard/{}", outcome.filing_id));
    assert!(!state.is_busy_saving());
}

#[tokio::test]
async fn unsaved_draft_cannot_be_resumed() {
    let service = InMemoryService::default();
    let mut state = StateModel::default();
    state.set_temp_id("T9999999");

    let err = resume_draft(&mut state, &service).await.unwrap_err();

    assert!(err.to_string().contains("Record not found"));
}
