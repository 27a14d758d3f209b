//! Rule categories from the rule metadata CSV.

use serde::{Deserialize, Serialize};

/// The part of the learner record a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    Programme,
    Fam,
    Financial,
    Employment,
    Destination,
    Learner,
    Message,
    #[default]
    Unknown,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Programme,
            Self::Fam,
            Self::Financial,
            Self::Employment,
            Self::Destination,
            Self::Learner,
            Self::Message,
        ]
    }

    /// Parse category from CSV string.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "programme" | "program" => Self::Programme,
            "fam" => Self::Fam,
            "financial" | "finance" => Self::Financial,
            "employment" => Self::Employment,
            "destination" | "destination and progression" => Self::Destination,
            "learner" => Self::Learner,
            "message" | "file" => Self::Message,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Programme => "Programme",
            Self::Fam => "FAM",
            Self::Financial => "Financial",
            Self::Employment => "Employment",
            Self::Destination => "Destination",
            Self::Learner => "Learner",
            Self::Message => "Message",
            Self::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Programme => "Programme and component aim structure",
            Self::Fam => "Funding and monitoring attributes",
            Self::Financial => "Apprenticeship prices and payments",
            Self::Employment => "Learner employment status",
            Self::Destination => "Destination and progression records",
            Self::Learner => "Learner level attributes",
            Self::Message => "Checks across the whole file",
            Self::Unknown => "Uncategorized rules",
        }
    }
}
