//! Version numbers.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::result::Result as StdResult;

/// Monotonically increasing publish number of a version.
/// Numbering starts at 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionNumber(i64);

impl VersionNumber {
    pub const FIRST: VersionNumber = VersionNumber(1);

    pub fn new(number: i64) -> VersionNumber {
        VersionNumber(number)
    }

    pub fn next(&self) -> VersionNumber {
        VersionNumber(self.0 + 1)
    }

    /// Zero-padded form used in publish path templates, e.g. `007`.
    pub fn padded(&self) -> String {
        format!("{:0>3}", self.0)
    }
}

impl Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        Display::fmt(&self.0, f)
    }
}

impl Deref for VersionNumber {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<i64> for VersionNumber {
    fn from(number: i64) -> VersionNumber {
        VersionNumber(number)
    }
}

#[cfg(test)]
#[path = "./version_number_test.rs"]
mod version_number_test;
