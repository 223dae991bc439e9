//! Operation status codes and their canonical wire strings.

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a remote operation.
///
/// The numeric values are part of the protocol's first generation and are
/// kept stable; the string side is the canonical representation used by the
/// current wire format. Both mappings are exact: there is no case folding
/// and no fallback value on parse failure.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Status {
    Success = 0,
    Failure = 1,
    Pending = 2,
    NotFound = 3,
    NotAllowed = 4,
}

/// Error returned when a string is not one of the five canonical status
/// values. Callers must branch on this error, not on a sentinel status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unparseable status `{0}`")]
pub struct UnparseableStatus(pub String);

impl Status {
    /// All statuses, in numeric order.
    pub const ALL: [Status; 5] = [
        Status::Success,
        Status::Failure,
        Status::Pending,
        Status::NotFound,
        Status::NotAllowed,
    ];

    /// Canonical wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Failure => "Failure",
            Status::Pending => "Pending",
            Status::NotFound => "NotFound",
            Status::NotAllowed => "NotAllowed",
        }
    }

    /// Parse a canonical status string, exact match only.
    pub fn parse(input: &str) -> Result<Self, UnparseableStatus> {
        match input {
            "Success" => Ok(Status::Success),
            "Failure" => Ok(Status::Failure),
            "Pending" => Ok(Status::Pending),
            "NotFound" => Ok(Status::NotFound),
            "NotAllowed" => Ok(Status::NotAllowed),
            other => Err(UnparseableStatus(other.to_owned())),
        }
    }
}

impl FromStr for Status {
    type Err = UnparseableStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Status::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_roundtrip() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_wrong_case() {
        assert_eq!(
            Status::parse("bogus"),
            Err(UnparseableStatus("bogus".to_owned()))
        );
        // Exact match required, no case folding.
        assert!(Status::parse("success").is_err());
        assert!(Status::parse("SUCCESS").is_err());
        assert!(Status::parse("").is_err());
    }

    #[test]
    fn test_numeric_codes_match_first_generation() {
        assert_eq!(Status::try_from(0u8).unwrap(), Status::Success);
        assert_eq!(Status::try_from(4u8).unwrap(), Status::NotAllowed);
        assert!(Status::try_from(5u8).is_err());
    }

    #[test]
    fn test_serde_uses_canonical_strings() {
        let json = serde_json::to_string(&Status::NotFound).unwrap();
        assert_eq!(json, "\"NotFound\"");

        let back: Status = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(back, Status::Pending);

        let err = serde_json::from_str::<Status>("\"pending\"");
        assert!(err.is_err());
    }
}
