use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of user roles. There is no hierarchy table; ordering is
/// MEMBER < EMPLOYEE < OWNER and encoded in [`UserType::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    /// Business owner, full administrative access over their businesses
    Owner,
    /// Staff member of a business (trainers, front desk)
    Employee,
    /// Gym member using the mobile app
    Member,
}

impl UserType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Employee => "EMPLOYEE",
            Self::Member => "MEMBER",
        }
    }

    /// Position in the role order; higher rank satisfies lower requirements.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Owner => 3,
            Self::Employee => 2,
            Self::Member => 1,
        }
    }

    /// Whether this role satisfies a route's minimum role requirement.
    pub fn satisfies(&self, required: UserType) -> bool {
        self.rank() >= required.rank()
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "OWNER" => Ok(Self::Owner),
            "EMPLOYEE" => Ok(Self::Employee),
            "MEMBER" => Ok(Self::Member),
            _ => Err(CoreError::InvalidUserType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
