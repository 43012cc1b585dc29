use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionId {
    /// Chains of eager transformations that could go through `asLazy()`.
    NeedlessIntermediateCollections,
    /// `new ArrayList<..>()` and friends with an Eclipse Collections equivalent.
    ConvertToEclipseCollection,
    /// `!coll.isEmpty()` where `notEmpty()` exists.
    PreferNotEmpty,
    /// `contains`/`get`/`indexOf`-style calls with an argument of the wrong type.
    SuspiciousMethodCalls,
}

impl InspectionId {
    pub const ALL: [InspectionId; 4] = [
        InspectionId::NeedlessIntermediateCollections,
        InspectionId::ConvertToEclipseCollection,
        InspectionId::PreferNotEmpty,
        InspectionId::SuspiciousMethodCalls,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionId::NeedlessIntermediateCollections => "needless-intermediate-collections",
            InspectionId::ConvertToEclipseCollection => "convert-to-eclipse-collection",
            InspectionId::PreferNotEmpty => "prefer-not-empty",
            InspectionId::SuspiciousMethodCalls => "suspicious-method-calls",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InspectionId::NeedlessIntermediateCollections => {
                "Chained eager transformations that build throw-away intermediate collections"
            }
            InspectionId::ConvertToEclipseCollection => {
                "JDK collection constructions with a specialized Eclipse Collections type"
            }
            InspectionId::PreferNotEmpty => "Negated isEmpty() calls that can use notEmpty()",
            InspectionId::SuspiciousMethodCalls => {
                "Lookup calls whose argument type cannot match the collection element type"
            }
        }
    }
}

impl fmt::Display for InspectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InspectionId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InspectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ApiError::NotFound(format!("inspection '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_str() {
        for id in InspectionId::ALL {
            assert_eq!(id.as_str().parse::<InspectionId>().unwrap(), id);
        }
        assert!("no-such-inspection".parse::<InspectionId>().is_err());
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        let json = serde_json::to_string(&InspectionId::PreferNotEmpty).unwrap();
        assert_eq!(json, "\"prefer-not-empty\"");
    }
}
