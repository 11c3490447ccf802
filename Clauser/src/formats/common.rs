//! Types shared across the state and strategic region formats

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// A province identifier.
///
/// Province ids are decimal strings in every file that mentions them, and
/// membership checks in the original formats are string comparisons, so the
/// id keeps its textual form. Construction validates the `\d+` shape;
/// ordering and dedup go through [`ProvinceId::value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProvinceId(String);

impl ProvinceId {
    /// Create a province id, rejecting anything that is not a decimal
    /// number.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidProvinceId { value });
        }
        Ok(Self(value))
    }

    /// The id exactly as written in the file.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, used for ascending sort and dedup.
    ///
    /// Real maps stay far below `u64::MAX`; absurdly long digit runs
    /// saturate rather than wrap.
    pub fn value(&self) -> u64 {
        self.0.parse().unwrap_or(u64::MAX)
    }
}

impl FromStr for ProvinceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ProvinceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort a province list ascending by numeric value and drop duplicates.
///
/// Equal values with different spellings ("7" and "007") collapse to the
/// first occurrence after the sort.
pub fn sort_dedup(provinces: &mut Vec<ProvinceId>) {
    provinces.sort_by_key(ProvinceId::value);
    provinces.dedup_by_key(|p| p.value());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digits_only() {
        assert!(ProvinceId::new("42").is_ok());
        assert!(ProvinceId::new("").is_err());
        assert!(ProvinceId::new("12a").is_err());
        assert!(ProvinceId::new("-3").is_err());
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        let mut ids: Vec<ProvinceId> = ["9", "100", "21", "100"]
            .iter()
            .map(|s| ProvinceId::new(*s).unwrap())
            .collect();
        sort_dedup(&mut ids);
        let strings: Vec<&str> = ids.iter().map(ProvinceId::as_str).collect();
        assert_eq!(strings, vec!["9", "21", "100"]);
    }
}
