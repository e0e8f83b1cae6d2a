//! File formats around the wizard: TOML drafts and CSV imports for the
//! people and share structure steps.

pub mod draft;
pub mod people;
pub mod shares;

pub use draft::DraftLoadError;
pub use people::{PeopleLoader, PeopleLoaderError};
pub use shares::{ShareClassLoader, ShareClassLoaderError};
