use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identifier of a business (tenant). There is no null business id:
/// code that has a `BusinessId` in hand always refers to a real tenant scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(i64);

impl BusinessId {
    #[track_caller]
    pub fn new(id: i64) -> CoreErrorResult<Self> {
        if id <= 0 {
            return Err(CoreError::InvalidBusinessId {
                value: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for BusinessId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let id: i64 = s.trim().parse().map_err(|_| CoreError::InvalidBusinessId {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Self::new(id)
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
