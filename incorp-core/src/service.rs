use async_trait::async_trait;
use thiserror::Error;

use crate::filing::IncorporationFiling;
use crate::models::NameRequest;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Record not found")]
    NotFound,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Not authorized")]
    Unauthorized,

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result of a successful file-and-pay submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub filing_id: i64,
    /// Payment token, when the account must complete payment elsewhere.
    pub payment_token: Option<String>,
    /// Where the user goes next (payment page or dashboard).
    pub redirect_url: String,
}

/// Backend the wizard files through. Implementations live outside this crate.
#[async_trait]
pub trait FilingService: Send + Sync {
    // Drafts
    async fn fetch_draft(&self, temp_id: &str) -> Result<IncorporationFiling, ServiceError>;
    async fn save_draft(&self, filing: &IncorporationFiling) -> Result<i64, ServiceError>;

    // Name requests
    async fn fetch_name_request(&self, nr_number: &str) -> Result<NameRequest, ServiceError>;

    // Submission
    async fn file_and_pay(
        &self,
        filing: &IncorporationFiling,
    ) -> Result<PaymentOutcome, ServiceError>;
}
