//! CSV loader for the share structure step.
//!
//! | Column                       | Required | Notes                                   |
//! |------------------------------|----------|-----------------------------------------|
//! | `name`                       | yes      | Share class name                        |
//! | `maximum_number_of_shares`   | no       | Empty for no maximum                    |
//! | `par_value`                  | no       | Empty for no par value                  |
//! | `currency`                   | no       | Required by validation with a par value |
//! | `has_rights_or_restrictions` | no       | `true`/`false`, defaults to `false`     |
//!
//! Priority follows row order. Series are entered in the wizard only.

use std::io::Read;

use incorp_core::ShareClass;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareClassLoaderError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("duplicate share class '{name}' on row {row}")]
    DuplicateClass { name: String, row: usize },
}

#[derive(Debug, Deserialize)]
struct ShareClassRow {
    name: String,
    maximum_number_of_shares: Option<u64>,
    par_value: Option<Decimal>,
    currency: Option<String>,
    has_rights_or_restrictions: Option<bool>,
}

pub struct ShareClassLoader;

impl ShareClassLoader {
    /// Parse share classes from any CSV reader. Class names must be unique
    /// (case-insensitive).
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ShareClass>, ShareClassLoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut classes: Vec<ShareClass> = Vec::new();
        for (idx, result) in reader.deserialize::<ShareClassRow>().enumerate() {
            let row = result?;
            let row_number = idx + 1;

            if classes
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(&row.name))
            {
                return Err(ShareClassLoaderError::DuplicateClass {
                    name: row.name,
                    row: row_number,
                });
            }

            classes.push(ShareClass {
                id: None,
                name: row.name,
                priority: row_number as u32,
                has_maximum_shares: row.maximum_number_of_shares.is_some(),
                maximum_number_of_shares: row.maximum_number_of_shares,
                has_par_value: row.par_value.is_some(),
                par_value: row.par_value,
                currency: row.currency.filter(|c| !c.is_empty()),
                has_rights_or_restrictions: row.has_rights_or_restrictions.unwrap_or(false),
                series: Vec::new(),
            });
        }

        Ok(classes)
    }
}
