use super::{
    AgreementTypeResource, CompletingPartyStatement, CountMinimum, EXCLUDED_STEP, ResourceModel,
    ReviewAndConfirmResource, RouteName, Step,
};
use crate::models::EntityType;

// ─── steps ───────────────────────────────────────────────────────────────────

const DEFINE_COMPANY: Step = Step {
    step: 1,
    icon: "mdi-domain",
    text: "Define Your Company",
    to: RouteName::DefineCompany,
};

const ADD_PEOPLE_AND_ROLES: Step = Step {
    step: 2,
    icon: "mdi-account-multiple-plus",
    text: "Add People and Roles",
    to: RouteName::AddPeopleAndRoles,
};

const CREATE_SHARE_STRUCTURE: Step = Step {
    step: 3,
    icon: "mdi-sitemap",
    text: "Create Share Structure",
    to: RouteName::CreateShareStructure,
};

const INCORPORATION_AGREEMENT: Step = Step {
    step: 4,
    icon: "mdi-handshake",
    text: "Upload Incorporation Agreement",
    to: RouteName::IncorporationAgreement,
};

const CORP_STEPS: [Step; 5] = [
    DEFINE_COMPANY,
    ADD_PEOPLE_AND_ROLES,
    CREATE_SHARE_STRUCTURE,
    INCORPORATION_AGREEMENT,
    Step {
        step: 5,
        icon: "mdi-text-box-check-outline",
        text: "Review and Confirm",
        to: RouteName::ReviewConfirm,
    },
];

const COOP_STEPS: [Step; 5] = [
    DEFINE_COMPANY,
    ADD_PEOPLE_AND_ROLES,
    Step {
        step: EXCLUDED_STEP,
        icon: "mdi-format-list-text",
        text: "Create Rules",
        to: RouteName::CreateRules,
    },
    Step {
        step: EXCLUDED_STEP,
        icon: "mdi-text-box-multiple",
        text: "Create Memorandum",
        to: RouteName::CreateMemorandum,
    },
    Step {
        step: 3,
        icon: "mdi-text-box-check-outline",
        text: "Review and Confirm",
        to: RouteName::ReviewConfirm,
    },
];

// ─── review and confirm ──────────────────────────────────────────────────────

const OFFENCE_CLAUSE: &str = "Note: It is an offence to make or assist in making a false or \
    misleading statement in a record filed under the Business Corporations Act. A person who \
    commits this offence is subject to a maximum fine of $5,000.";

const CORP_STATEMENT: CompletingPartyStatement = CompletingPartyStatement {
    certify_statement_header: "I confirm the following:",
    certify_statements: &[
        "The individuals listed in this filing have consented to be appointed as directors.",
        "I have relevant knowledge of the company and I am authorized to make this filing.",
    ],
    certify_clause: OFFENCE_CLAUSE,
};

const COOP_STATEMENT: CompletingPartyStatement = CompletingPartyStatement {
    certify_statement_header: "I confirm the following:",
    certify_statements: &[
        "The subscribers have signed the rules and memorandum of the association.",
        "I have relevant knowledge of the association and I am authorized to make this filing.",
    ],
    certify_clause: "Note: It is an offence to make a false or misleading statement in \
        respect of a material fact in a record submitted to the Corporate Registry for filing. \
        See section 200 of the Cooperative Association Act.",
};

// ─── agreement options ───────────────────────────────────────────────────────

const BEN_AGREEMENTS: [AgreementTypeResource; 2] = [
    AgreementTypeResource {
        code: "sample",
        description: "The sample Incorporation Agreement and Benefit Company Articles \
            containing a benefit provision have been completed.",
        summary_description: "The sample Incorporation Agreement and Benefit Company Articles \
            containing a benefit provision have been completed and a copy added to the \
            company's record book.",
    },
    AgreementTypeResource {
        code: "custom",
        description: "A custom Incorporation Agreement and custom Benefit Company Articles \
            containing a benefit provision have been completed.",
        summary_description: "A custom Incorporation Agreement and custom Benefit Company \
            Articles containing a benefit provision have been completed and a copy added to \
            the company's record book.",
    },
];

const COOP_AGREEMENTS: [AgreementTypeResource; 2] = [
    AgreementTypeResource {
        code: "sample",
        description: "The sample rules and memorandum have been adopted.",
        summary_description: "",
    },
    AgreementTypeResource {
        code: "custom",
        description: "Custom rules and memorandum have been adopted.",
        summary_description: "",
    },
];

const BC_AGREEMENTS: [AgreementTypeResource; 2] = [
    AgreementTypeResource {
        code: "Table-1",
        description: "The Table 1 Articles have been adopted.",
        summary_description: "BC COMPANY description placeholder",
    },
    AgreementTypeResource {
        code: "custom",
        description: "Custom articles have been adopted.",
        summary_description: "BC COMPANY description placeholder",
    },
];

const ULC_AGREEMENTS: [AgreementTypeResource; 2] = [
    AgreementTypeResource {
        code: "Table-1",
        description: "The Table 1 Articles have been adopted.",
        summary_description: "BC ULC description placeholder",
    },
    AgreementTypeResource {
        code: "custom",
        description: "Custom articles have been adopted.",
        summary_description: "BC ULC description placeholder",
    },
];

const CCC_AGREEMENTS: [AgreementTypeResource; 2] = [
    AgreementTypeResource {
        code: "sample",
        description: "The sample Incorporation Agreement and articles containing a community \
            purpose have been completed.",
        summary_description: "BC CCC description placeholder",
    },
    AgreementTypeResource {
        code: "custom",
        description: "A custom Incorporation Agreement and articles containing a community \
            purpose have been completed.",
        summary_description: "BC CCC description placeholder",
    },
];

// ─── tables ──────────────────────────────────────────────────────────────────

pub(super) static BENEFIT_COMPANY: ResourceModel = ResourceModel {
    entity_type: EntityType::BenefitCompany,
    display_name: "BC Benefit Company",
    title: "Incorporation Application for a BC Benefit Company",
    description: "A benefit company is a for-profit company that commits to conduct its \
        business in a responsible and sustainable manner.",
    statement: "Statement of Benefit Provision: This company is a benefit company and, as \
        such, has purposes that include conducting its business in a responsible and \
        sustainable manner and promoting one or more public benefits.",
    name_request_type: Some("BC"),
    steps: &CORP_STEPS,
    directors: CountMinimum {
        count_minimum: Some(1),
    },
    share_classes: CountMinimum {
        count_minimum: Some(1),
    },
    incorporation_agreement: &BEN_AGREEMENTS,
    review_and_confirm: ReviewAndConfirmResource {
        completing_party_statement: CORP_STATEMENT,
    },
};

pub(super) static COOPERATIVE: ResourceModel = ResourceModel {
    entity_type: EntityType::Cooperative,
    display_name: "BC Cooperative Association",
    title: "Incorporation Application for a BC Cooperative Association",
    description: "A cooperative association is owned and democratically controlled by its \
        members.",
    statement: "",
    name_request_type: Some("CP"),
    steps: &COOP_STEPS,
    directors: CountMinimum {
        count_minimum: Some(3),
    },
    share_classes: CountMinimum {
        count_minimum: None,
    },
    incorporation_agreement: &COOP_AGREEMENTS,
    review_and_confirm: ReviewAndConfirmResource {
        completing_party_statement: COOP_STATEMENT,
    },
};

pub(super) static BC_COMPANY: ResourceModel = ResourceModel {
    entity_type: EntityType::BcCompany,
    display_name: "BC Limited Company",
    title: "Incorporation Application for a BC Limited Company",
    description: "",
    statement: "",
    name_request_type: Some("BC"),
    steps: &CORP_STEPS,
    directors: CountMinimum {
        count_minimum: Some(1),
    },
    share_classes: CountMinimum {
        count_minimum: Some(1),
    },
    incorporation_agreement: &BC_AGREEMENTS,
    review_and_confirm: ReviewAndConfirmResource {
        completing_party_statement: CORP_STATEMENT,
    },
};

pub(super) static BC_ULC_COMPANY: ResourceModel = ResourceModel {
    entity_type: EntityType::BcUlcCompany,
    display_name: "BC Unlimited Liability Company",
    title: "Incorporation Application for a BC Unlimited Liability Company",
    description: "",
    statement: "",
    name_request_type: Some("UL"),
    steps: &CORP_STEPS,
    directors: CountMinimum {
        count_minimum: Some(1),
    },
    share_classes: CountMinimum {
        count_minimum: Some(1),
    },
    incorporation_agreement: &ULC_AGREEMENTS,
    review_and_confirm: ReviewAndConfirmResource {
        completing_party_statement: CORP_STATEMENT,
    },
};

pub(super) static BC_CCC: ResourceModel = ResourceModel {
    entity_type: EntityType::BcCcc,
    display_name: "BC Community Contribution Company",
    title: "Incorporation Application for a BC Community Contribution Company",
    description: "",
    statement: "",
    name_request_type: Some("CC"),
    steps: &CORP_STEPS,
    directors: CountMinimum {
        count_minimum: Some(3),
    },
    share_classes: CountMinimum {
        count_minimum: Some(1),
    },
    incorporation_agreement: &CCC_AGREEMENTS,
    review_and_confirm: ReviewAndConfirmResource {
        completing_party_statement: CORP_STATEMENT,
    },
};
