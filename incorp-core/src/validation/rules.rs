//! Per-step validation rules.
//!
//! Each rule returns every problem it finds rather than stopping at the first,
//! so a step summary can list them all.

use std::sync::OnceLock;

use chrono::{Days, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::models::{
    CertifyState, DateTimeState, DefineCompanyStep, IncorporationAgreementStep, PeopleAndRoleStep,
    RoleType, ShareClass, ShareStructureStep,
};
use crate::resources::ResourceModel;

pub const FOLIO_NUMBER_MAX_LENGTH: usize = 30;

/// Future effective filings must be later than this many days from today.
pub const MIN_EFFECTIVE_DAYS: u64 = 2;

/// Future effective filings must be at most this many days from today.
pub const MAX_EFFECTIVE_DAYS: u64 = 10;

struct Patterns {
    email: Regex,
    nr_number: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"),
        nr_number: Regex::new(r"^NR ?\d{7}$").expect("valid NR number regex"),
    })
}

fn collect(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `nr_number` looks like a name request number (`NR 1234567`).
pub fn is_valid_nr_number(nr_number: &str) -> bool {
    patterns().nr_number.is_match(nr_number.trim())
}

pub fn is_valid_email(email: &str) -> bool {
    patterns().email.is_match(email.trim())
}

/// Rules:
/// - registered office delivery address is complete
/// - business contact email is present, well formed and confirmed
/// - folio number is at most 30 characters
pub fn validate_define_company(step: &DefineCompanyStep) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let registered_complete = step
        .office_addresses
        .registered_office
        .as_ref()
        .is_some_and(|office| office.delivery_address.is_complete());
    if !registered_complete {
        errors.push("Registered office delivery address is required.".to_string());
    }

    let contact = &step.business_contact;
    if contact.email.trim().is_empty() {
        errors.push("Business contact email is required.".to_string());
    } else if !is_valid_email(&contact.email) {
        errors.push("Business contact email is not a valid email address.".to_string());
    } else if contact.email.trim() != contact.confirm_email.trim() {
        errors.push("Business contact emails do not match.".to_string());
    }

    if let Some(folio) = &step.folio_number {
        if folio.chars().count() > FOLIO_NUMBER_MAX_LENGTH {
            errors.push(format!(
                "Folio number cannot exceed {FOLIO_NUMBER_MAX_LENGTH} characters."
            ));
        }
    }

    collect(errors)
}

/// Rules:
/// - exactly one completing party
/// - at least one incorporator
/// - at least the entity type's minimum number of directors
pub fn validate_people_and_roles(
    step: &PeopleAndRoleStep,
    resources: Option<&ResourceModel>,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match step.count_with_role(RoleType::CompletingParty) {
        1 => {}
        0 => errors.push("A completing party is required.".to_string()),
        _ => errors.push("Only one completing party may be appointed.".to_string()),
    }

    if step.count_with_role(RoleType::Incorporator) == 0 {
        errors.push("At least one incorporator is required.".to_string());
    }

    let min_directors = resources
        .and_then(|r| r.directors.count_minimum)
        .unwrap_or(1);
    if step.count_with_role(RoleType::Director) < min_directors {
        errors.push(format!("At least {min_directors} director(s) required."));
    }

    collect(errors)
}

fn validate_share_class(
    class: &ShareClass,
    errors: &mut Vec<String>,
) {
    let label = if class.name.trim().is_empty() {
        errors.push("Every share class needs a name.".to_string());
        "unnamed class"
    } else {
        class.name.trim()
    };

    if class.has_maximum_shares && !class.maximum_number_of_shares.is_some_and(|max| max > 0) {
        errors.push(format!("{label}: maximum number of shares must be positive."));
    }

    if class.has_par_value {
        if !class.par_value.is_some_and(|v| v.is_sign_positive() && !v.is_zero()) {
            errors.push(format!("{label}: par value must be positive."));
        }
        if class.currency.as_deref().is_none_or(|c| c.trim().is_empty()) {
            errors.push(format!("{label}: currency is required with a par value."));
        }
    } else if class.par_value.is_some() {
        errors.push(format!("{label}: par value set on a class without par value."));
    }

    for series in &class.series {
        if let (Some(series_max), Some(class_max)) =
            (series.maximum_number_of_shares, class.maximum_number_of_shares)
        {
            if series_max > class_max {
                errors.push(format!(
                    "{label}: series {} exceeds the class maximum.",
                    series.name
                ));
            }
        }
    }
}

/// Rules:
/// - at least the entity type's minimum number of share classes
/// - each class is named, has a positive maximum when it has one, and a
///   positive par value with currency exactly when it has a par value
/// - no series allows more shares than its class
pub fn validate_share_structure(
    step: &ShareStructureStep,
    resources: Option<&ResourceModel>,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let min_classes = resources
        .and_then(|r| r.share_classes.count_minimum)
        .unwrap_or(0);
    if step.share_classes.len() < min_classes {
        errors.push(format!("At least {min_classes} share class(es) required."));
    }

    for class in &step.share_classes {
        validate_share_class(class, &mut errors);
    }

    collect(errors)
}

/// Rules:
/// - agreement type is one of the entity type's option codes
pub fn validate_incorporation_agreement(
    step: &IncorporationAgreementStep,
    resources: Option<&ResourceModel>,
) -> Result<(), Vec<String>> {
    let Some(code) = step.agreement_type.as_deref() else {
        return Err(vec!["This step is not complete.".to_string()]);
    };

    match resources {
        Some(r) if r.agreement_type(code).is_some() => Ok(()),
        _ => Err(vec![format!("'{code}' is not a valid agreement type.")]),
    }
}

/// Rules:
/// - certified by a named person
/// - certify box checked
pub fn validate_certify(certify: &CertifyState) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if certify.certified_by.trim().is_empty() {
        errors.push("Legal name of the certifying person is required.".to_string());
    }
    if !certify.is_certified {
        errors.push("The certification statement must be confirmed.".to_string());
    }

    collect(errors)
}

/// Rules:
/// - immediate filings are always valid
/// - future effective filings fall after 2 days and within 10 days of today
pub fn validate_effective_date(
    date_time: &DateTimeState,
    today: Option<NaiveDate>,
) -> Result<(), Vec<String>> {
    if !date_time.is_future_effective {
        return Ok(());
    }

    let Some(effective) = date_time.effective_date else {
        return Err(vec!["Effective date is required.".to_string()]);
    };
    let Some(today) = today else {
        return Err(vec!["Current date is unknown.".to_string()]);
    };

    if is_within_effective_window(effective, today) {
        Ok(())
    } else {
        Err(vec![format!(
            "Effective date must be more than {MIN_EFFECTIVE_DAYS} and at most \
             {MAX_EFFECTIVE_DAYS} days from today."
        )])
    }
}

fn is_within_effective_window(
    effective: NaiveDateTime,
    today: NaiveDate,
) -> bool {
    let start = today.and_time(chrono::NaiveTime::MIN);
    let (Some(earliest), Some(latest)) = (
        start.checked_add_days(Days::new(MIN_EFFECTIVE_DAYS)),
        start.checked_add_days(Days::new(MAX_EFFECTIVE_DAYS)),
    ) else {
        return false;
    };

    effective > earliest && effective <= latest
}
