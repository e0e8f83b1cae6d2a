//! TOML draft files: a [`StateModel`] snapshot saved between sessions.
//!
//! Busy flags are session-only and are cleared when a draft is read. A
//! stored step outside the entity type's range is reset to 1.
//!
//! ### Minimal example
//!
//! ```toml
//! entity_type = "BEN"
//! current_step = 1
//!
//! [define_company_step.business_contact]
//! email = "hello@example.ca"
//! confirm_email = "hello@example.ca"
//! ```

use std::fs;
use std::path::Path;

use incorp_core::StateModel;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DraftLoadError {
    #[error("cannot read draft '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid draft: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialise draft: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parse a draft from TOML text.
pub fn load_from_str(input: &str) -> Result<StateModel, DraftLoadError> {
    let mut state: StateModel = toml::from_str(input)?;
    state.is_saving = false;
    state.is_saving_resuming = false;
    state.is_filing_paying = false;
    state.normalize_current_step();
    Ok(state)
}

/// Read a draft file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<StateModel, DraftLoadError> {
    debug!(path = %path.display(), "loading draft");
    let contents = fs::read_to_string(path).map_err(|source| DraftLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

pub fn save_to_string(state: &StateModel) -> Result<String, DraftLoadError> {
    Ok(toml::to_string_pretty(state)?)
}

pub fn save_to_file(
    state: &StateModel,
    path: &Path,
) -> Result<(), DraftLoadError> {
    let contents = save_to_string(state)?;
    fs::write(path, contents).map_err(|source| DraftLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "saved draft");
    Ok(())
}
