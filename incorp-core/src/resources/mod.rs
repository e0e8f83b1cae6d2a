//! Static per-entity-type configuration: display text, wizard steps and
//! thresholds used by validation.
//!
//! The tables live for the whole process and are never mutated. Look them up
//! with [`resources_for`].

mod catalog;

use serde::Serialize;

use crate::models::EntityType;

/// Step number for entries that appear in the stepper but are not counted
/// towards the maximum step (not yet available for the entity type).
pub const EXCLUDED_STEP: i32 = -1;

/// Route each wizard step renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteName {
    DefineCompany,
    AddPeopleAndRoles,
    CreateShareStructure,
    IncorporationAgreement,
    CreateRules,
    CreateMemorandum,
    ReviewConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based step number, or [`EXCLUDED_STEP`].
    pub step: i32,
    pub icon: &'static str,
    pub text: &'static str,
    pub to: RouteName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountMinimum {
    pub count_minimum: Option<usize>,
}

/// One selectable incorporation agreement option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgreementTypeResource {
    pub code: &'static str,
    pub description: &'static str,
    /// Text shown on the review page once this option is chosen.
    pub summary_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletingPartyStatement {
    pub certify_statement_header: &'static str,
    pub certify_statements: &'static [&'static str],
    pub certify_clause: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewAndConfirmResource {
    pub completing_party_statement: CompletingPartyStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceModel {
    pub entity_type: EntityType,
    pub display_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub statement: &'static str,
    pub name_request_type: Option<&'static str>,
    pub steps: &'static [Step],
    pub directors: CountMinimum,
    pub share_classes: CountMinimum,
    pub incorporation_agreement: &'static [AgreementTypeResource],
    pub review_and_confirm: ReviewAndConfirmResource,
}

impl ResourceModel {
    /// Looks up an agreement option by its code.
    pub fn agreement_type(
        &self,
        code: &str,
    ) -> Option<&'static AgreementTypeResource> {
        self.incorporation_agreement.iter().find(|a| a.code == code)
    }

    /// Steps that count towards the maximum step.
    pub fn counted_steps(&self) -> impl Iterator<Item = &'static Step> {
        self.steps.iter().filter(|s| s.step != EXCLUDED_STEP)
    }
}

/// Returns the static resource table for `entity_type`.
pub fn resources_for(entity_type: EntityType) -> &'static ResourceModel {
    match entity_type {
        EntityType::BenefitCompany => &catalog::BENEFIT_COMPANY,
        EntityType::Cooperative => &catalog::COOPERATIVE,
        EntityType::BcCompany => &catalog::BC_COMPANY,
        EntityType::BcUlcCompany => &catalog::BC_ULC_COMPANY,
        EntityType::BcCcc => &catalog::BC_CCC,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_entity_type_resolves_to_its_own_table() {
        for entity_type in EntityType::ALL {
            assert_eq!(resources_for(entity_type).entity_type, entity_type);
        }
    }

    #[test]
    fn counted_steps_are_numbered_consecutively_from_one() {
        for entity_type in EntityType::ALL {
            let numbers: Vec<i32> = resources_for(entity_type)
                .counted_steps()
                .map(|s| s.step)
                .collect();
            let expected: Vec<i32> = (1..=numbers.len() as i32).collect();

            assert_eq!(numbers, expected, "{entity_type} steps out of order");
        }
    }

    #[test]
    fn last_counted_step_is_review_and_confirm() {
        for entity_type in EntityType::ALL {
            let last = resources_for(entity_type).counted_steps().last();

            assert_eq!(last.map(|s| s.to), Some(RouteName::ReviewConfirm));
        }
    }

    #[test]
    fn cooperative_excludes_rules_and_memorandum_steps() {
        let coop = resources_for(EntityType::Cooperative);

        assert_eq!(coop.steps.len(), 5);
        assert_eq!(coop.counted_steps().count(), 3);
    }

    #[test]
    fn agreement_type_lookup_matches_codes() {
        let bc = resources_for(EntityType::BcCompany);

        assert_eq!(bc.agreement_type("Table-1").map(|a| a.code), Some("Table-1"));
        assert!(bc.agreement_type("sample").is_none());
    }

    #[test]
    fn benefit_company_agreement_summaries_mention_benefit_provision() {
        let ben = resources_for(EntityType::BenefitCompany);

        for code in ["sample", "custom"] {
            let summary = ben
                .agreement_type(code)
                .map(|a| a.summary_description)
                .unwrap_or_default();
            assert!(summary.contains("benefit provision"), "{code}: {summary}");
        }
    }
}
