use std::fmt;

use serde::{Deserialize, Serialize};

/// Corporation type codes the wizard can incorporate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "BEN")]
    BenefitCompany,
    #[serde(rename = "CP")]
    Cooperative,
    #[serde(rename = "BC")]
    BcCompany,
    #[serde(rename = "ULC")]
    BcUlcCompany,
    #[serde(rename = "CC")]
    BcCcc,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        Self::BenefitCompany,
        Self::Cooperative,
        Self::BcCompany,
        Self::BcUlcCompany,
        Self::BcCcc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BenefitCompany => "BEN",
            Self::Cooperative => "CP",
            Self::BcCompany => "BC",
            Self::BcUlcCompany => "ULC",
            Self::BcCcc => "CC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BEN" => Some(Self::BenefitCompany),
            "CP" => Some(Self::Cooperative),
            "BC" => Some(Self::BcCompany),
            "ULC" => Some(Self::BcUlcCompany),
            "CC" => Some(Self::BcCcc),
            _ => None,
        }
    }

    /// Full legal description of the corporation type.
    pub fn full_description(&self) -> &'static str {
        match self {
            Self::BenefitCompany => "BC Benefit Company",
            Self::Cooperative => "Cooperative Association",
            Self::BcCompany => "BC Limited Company",
            Self::BcUlcCompany => "BC Unlimited Liability Company",
            Self::BcCcc => "BC Community Contribution Company",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
