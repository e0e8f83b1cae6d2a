pub mod filing;
pub mod models;
pub mod resources;
pub mod service;
pub mod store;
pub mod validation;

pub use filing::{FilingError, IncorporationFiling};
pub use models::*;
pub use resources::{ResourceModel, resources_for};
pub use service::{FilingService, PaymentOutcome, ServiceError};
pub use store::StateError;
