use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the post-mutation user refresh relates to the success notification.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshMode {
    /// Spawn the refresh and report success without joining it.
    #[default]
    Detached,
    /// Finish the refresh before reporting success.
    Awaited,
}

/// What happens to the user cache when part of a delete batch fails.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PartialDeletePolicy {
    /// Leave the cache as it was before the batch.
    #[default]
    KeepStale,
    /// Refresh anyway so deletions that went through become visible.
    RollForward,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessConfig {
    #[serde(default)]
    pub refresh: RefreshMode,
    #[serde(default)]
    pub partial_delete: PartialDeletePolicy,
}

#[derive(thiserror::Error, Debug)]
#[error("unknown {kind}: {value}")]
pub struct ParsePolicyError {
    kind: &'static str,
    value: String,
}

impl RefreshMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detached => "detached",
            Self::Awaited => "awaited",
        }
    }
}

impl PartialDeletePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepStale => "keep-stale",
            Self::RollForward => "roll-forward",
        }
    }
}

impl fmt::Display for RefreshMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PartialDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshMode {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "detached" => Ok(Self::Detached),
            "awaited" => Ok(Self::Awaited),
            _ => Err(ParsePolicyError {
                kind: "refresh mode",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for PartialDeletePolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "keep-stale" => Ok(Self::KeepStale),
            "roll-forward" => Ok(Self::RollForward),
            _ => Err(ParsePolicyError {
                kind: "partial delete policy",
                value: value.to_string(),
            }),
        }
    }
}
