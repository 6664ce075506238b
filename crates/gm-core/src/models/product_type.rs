use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What a product sells: a time-based membership, personal training
/// sessions, a single-day pass, or an add-on option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Membership,
    Pt,
    Daypass,
    Option,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Membership => "MEMBERSHIP",
            Self::Pt => "PT",
            Self::Daypass => "DAYPASS",
            Self::Option => "OPTION",
        }
    }
}

impl FromStr for ProductType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "MEMBERSHIP" => Ok(Self::Membership),
            "PT" => Ok(Self::Pt),
            "DAYPASS" => Ok(Self::Daypass),
            "OPTION" => Ok(Self::Option),
            _ => Err(CoreError::InvalidProductType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
