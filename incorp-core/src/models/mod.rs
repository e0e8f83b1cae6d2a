mod entity_type;
mod name_request;
mod session;
mod state_model;
mod steps;

pub use entity_type::EntityType;
pub use name_request::{
    NameRequest, NameRequestApplicant, NameRequestDetails, NameRequestState, NameTranslation,
};
pub use session::{AccountInformation, AccountType, Tombstone};
pub use state_model::StateModel;
pub use steps::{
    Address, BusinessContact, CertifyState, DateTimeState, DefineCompanyStep,
    IncorporationAgreementStep, OfficeAddress, OfficeAddresses, OrgPerson, PartyType,
    PeopleAndRoleStep, RoleType, ShareClass, ShareSeries, ShareStructureStep,
};
