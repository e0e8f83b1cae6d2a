//! CSV loader for the people and roles step.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Optional
//! columns may be left out entirely.
//!
//! | Column            | Required | Notes                                         |
//! |-------------------|----------|-----------------------------------------------|
//! | `first_name`      | yes      | May be empty for organizations                |
//! | `last_name`       | yes      | May be empty for organizations                |
//! | `roles`           | yes      | `;`-separated: `Completing Party`, `Incorporator`, `Director` |
//! | `middle_name`     | no       |                                               |
//! | `org_name`        | no       | Marks the row as an organization              |
//! | `email`           | no       |                                               |
//! | `street_address`  | no       | Mailing address                               |
//! | `address_city`    | no       |                                               |
//! | `address_region`  | no       |                                               |
//! | `postal_code`     | no       |                                               |
//! | `address_country` | no       |                                               |
//!
//! ### Example
//!
//! ```csv
//! first_name,last_name,roles,email
//! Pat,Lee,Completing Party;Incorporator;Director,pat@example.ca
//! ```

use std::io::Read;

use incorp_core::{Address, OrgPerson, PartyType, RoleType};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeopleLoaderError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, counting data rows only.
    #[error("unrecognised role '{role}' on row {row}")]
    InvalidRole { role: String, row: usize },

    #[error("row {0} has no roles")]
    NoRoles(usize),
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    org_name: Option<String>,
    email: Option<String>,
    roles: String,
    street_address: Option<String>,
    address_city: Option<String>,
    address_region: Option<String>,
    postal_code: Option<String>,
    address_country: Option<String>,
}

fn parse_roles(
    roles: &str,
    row: usize,
) -> Result<Vec<RoleType>, PeopleLoaderError> {
    let parsed = roles
        .split(';')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| {
            RoleType::parse(r).ok_or_else(|| PeopleLoaderError::InvalidRole {
                role: r.to_string(),
                row,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if parsed.is_empty() {
        return Err(PeopleLoaderError::NoRoles(row));
    }
    Ok(parsed)
}

fn convert_row(
    row: PersonRow,
    row_number: usize,
) -> Result<OrgPerson, PeopleLoaderError> {
    let roles = parse_roles(&row.roles, row_number)?;
    let org_name = row.org_name.filter(|n| !n.is_empty());

    Ok(OrgPerson {
        id: Some(row_number.to_string()),
        party_type: if org_name.is_some() {
            PartyType::Organization
        } else {
            PartyType::Person
        },
        first_name: row.first_name,
        middle_name: row.middle_name.filter(|n| !n.is_empty()),
        last_name: row.last_name,
        org_name,
        email: row.email.filter(|e| !e.is_empty()),
        roles,
        mailing_address: Address {
            street_address: row.street_address.unwrap_or_default(),
            address_city: row.address_city.unwrap_or_default(),
            address_region: row.address_region.unwrap_or_default(),
            postal_code: row.postal_code.unwrap_or_default(),
            address_country: row.address_country.unwrap_or_default(),
            ..Default::default()
        },
    })
}

/// Loader for the people and roles roster.
pub struct PeopleLoader;

impl PeopleLoader {
    /// Parse people from any CSV reader. Rows are returned in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<OrgPerson>, PeopleLoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        reader
            .deserialize::<PersonRow>()
            .enumerate()
            .map(|(idx, result)| convert_row(result?, idx + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL_CSV: &str = "\
first_name,last_name,roles
Pat,Lee,Completing Party;Incorporator;Director
";

    const FULL_CSV: &str = "\
first_name,middle_name,last_name,org_name,email,roles,street_address,address_city,address_region,postal_code,address_country
Pat,Q,Lee,,pat@example.ca,Completing Party;Incorporator,1 Main St,Victoria,BC,V8V 1X4,CA
,,,Acme Holdings Ltd.,,Incorporator,,,,,
Sam,,Ray,,,Director,,,,,
";

    #[test]
    fn minimal_csv_parses_required_fields() {
        let people = PeopleLoader::parse(MINIMAL_CSV.as_bytes()).expect("should parse");

        assert_eq!(people.len(), 1);
        let p = &people[0];
        assert_eq!(p.display_name(), "Pat Lee");
        assert_eq!(
            p.roles,
            vec![
                RoleType::CompletingParty,
                RoleType::Incorporator,
                RoleType::Director
            ]
        );
        assert_eq!(p.party_type, PartyType::Person);
        assert!(p.email.is_none());
    }

    #[test]
    fn full_csv_keeps_file_order_and_detects_organizations() {
        let people = PeopleLoader::parse(FULL_CSV.as_bytes()).expect("should parse");

        assert_eq!(people.len(), 3);
        assert_eq!(people[0].middle_name.as_deref(), Some("Q"));
        assert_eq!(people[0].mailing_address.address_city, "Victoria");
        assert_eq!(people[1].party_type, PartyType::Organization);
        assert_eq!(people[1].display_name(), "Acme Holdings Ltd.");
        assert_eq!(people[2].roles, vec![RoleType::Director]);
        assert_eq!(people[2].id.as_deref(), Some("3"));
    }

    #[test]
    fn unknown_role_reports_row() {
        let csv = "first_name,last_name,roles\nPat,Lee,Director\nSam,Ray,Treasurer\n";

        match PeopleLoader::parse(csv.as_bytes()).unwrap_err() {
            PeopleLoaderError::InvalidRole { role, row } => {
                assert_eq!(role, "Treasurer");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidRole, got {other:?}"),
        }
    }

    #[test]
    fn empty_roles_are_rejected() {
        let csv = "first_name,last_name,roles\nPat,Lee, ; \n";

        assert!(matches!(
            PeopleLoader::parse(csv.as_bytes()),
            Err(PeopleLoaderError::NoRoles(1))
        ));
    }

    #[test]
    fn missing_roles_column_is_parse_error() {
        let csv = "first_name,last_name\nPat,Lee\n";

        assert!(matches!(
            PeopleLoader::parse(csv.as_bytes()),
            Err(PeopleLoaderError::Parse(_))
        ));
    }
}
