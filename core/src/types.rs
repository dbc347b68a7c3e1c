//! Shared primitive types and the fixed categorical label sets.

use serde::Serialize;
use std::fmt;

/// A 9-digit zero-padded account number.
pub type AccountId = String;

/// Fraud ring number, 1-based.
pub type RingId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FraudType {
    #[serde(rename = "Tech Support Scam")]
    TechSupportScam,
    #[serde(rename = "Investment Fraud")]
    InvestmentFraud,
    #[serde(rename = "Romance Scam")]
    RomanceScam,
    #[serde(rename = "Government Impersonation")]
    GovernmentImpersonation,
    Other,
    Legitimate,
}

impl FraudType {
    /// Labels handed out to rings, cycled by `(ring - 1) % 5`.
    pub const RING_CYCLE: [FraudType; 5] = [
        FraudType::TechSupportScam,
        FraudType::InvestmentFraud,
        FraudType::RomanceScam,
        FraudType::GovernmentImpersonation,
        FraudType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TechSupportScam         => "Tech Support Scam",
            Self::InvestmentFraud         => "Investment Fraud",
            Self::RomanceScam             => "Romance Scam",
            Self::GovernmentImpersonation => "Government Impersonation",
            Self::Other                   => "Other",
            Self::Legitimate              => "Legitimate",
        }
    }
}

impl fmt::Display for FraudType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContactMethod {
    Phone,
    Email,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "In-Person")]
    InPerson,
    Other,
    Direct,
}

impl ContactMethod {
    pub const RING_CYCLE: [ContactMethod; 5] = [
        ContactMethod::Phone,
        ContactMethod::Email,
        ContactMethod::SocialMedia,
        ContactMethod::InPerson,
        ContactMethod::Other,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const WEIGHTED: [(TimeOfDay, f64); 4] = [
        (TimeOfDay::Morning, 0.25),
        (TimeOfDay::Afternoon, 0.30),
        (TimeOfDay::Evening, 0.30),
        (TimeOfDay::Night, 0.15),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResolutionStatus {
    Unreported,
    Reported,
    #[serde(rename = "Under Investigation")]
    UnderInvestigation,
    Resolved,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ResolutionStatus {
    /// Fraud-only outcomes. Legitimate rows always carry `NotApplicable`.
    pub const WEIGHTED: [(ResolutionStatus, f64); 4] = [
        (ResolutionStatus::Unreported, 0.50),
        (ResolutionStatus::Reported, 0.30),
        (ResolutionStatus::UnderInvestigation, 0.15),
        (ResolutionStatus::Resolved, 0.05),
    ];
}
