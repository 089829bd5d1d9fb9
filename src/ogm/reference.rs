use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of data digits before the check digits.
pub const OGM_BASE_DIGITS: usize = 10;

/// Exclusive upper bound of the 10-digit base.
const BASE_LIMIT: u64 = 10_000_000_000;

/// Errors returned when parsing an OGM string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OgmError {
    /// The text is not shaped like `+++DDD/DDDD/DDDDD+++` or 12 bare digits.
    #[error("invalid OGM format: '{0}'")]
    Format(String),

    /// The last two digits are not the mod-97 check of the first ten.
    #[error("OGM check digits {found:02} do not match expected {expected:02}")]
    CheckDigits { expected: u8, found: u8 },
}

/// A Belgian structured communication reference.
///
/// Serializes as its `+++DDD/DDDD/DDDDD+++` text; deserializing goes through
/// [`OgmReference::parse`], so the check digits are always verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OgmReference {
    base: u64,
    check: u8,
}

fn check_for(base: u64) -> u8 {
    match (base % 97) as u8 {
        0 => 97,
        check => check,
    }
}

impl OgmReference {
    /// Build from free-form input: non-digits are dropped, then the first 10
    /// digits are kept, or the digits are left-padded with zeros to 10.
    pub fn from_base(input: &str) -> Self {
        let base = input
            .chars()
            .filter_map(|c| c.to_digit(10))
            .take(OGM_BASE_DIGITS)
            .fold(0u64, |acc, d| acc * 10 + u64::from(d));
        Self::from_number(base)
    }

    /// Build from a numeric base. Only the lowest 10 digits are used.
    pub fn from_number(base: u64) -> Self {
        let base = base % BASE_LIMIT;
        Self {
            base,
            check: check_for(base),
        }
    }

    /// Draw a base uniformly from `0..=9_999_999_999`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_number(rng.gen_range(0..BASE_LIMIT))
    }

    /// Parse `+++DDD/DDDD/DDDDD+++`, `***DDD/DDDD/DDDDD***` or 12 bare
    /// digits, verifying the check digits.
    pub fn parse(text: &str) -> Result<Self, OgmError> {
        let trimmed = text.trim();
        let inner = ["+++", "***"]
            .iter()
            .find_map(|delim| {
                trimmed
                    .strip_prefix(*delim)
                    .and_then(|rest| rest.strip_suffix(*delim))
            })
            .unwrap_or(trimmed);

        let digits: String = if inner.len() == 14
            && inner.as_bytes()[3] == b'/'
            && inner.as_bytes()[8] == b'/'
        {
            inner.chars().filter(|&c| c != '/').collect()
        } else {
            inner.to_string()
        };

        if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OgmError::Format(text.to_string()));
        }

        let base = digits[..OGM_BASE_DIGITS]
            .parse::<u64>()
            .map_err(|_| OgmError::Format(text.to_string()))?;
        let found = digits[OGM_BASE_DIGITS..]
            .parse::<u8>()
            .map_err(|_| OgmError::Format(text.to_string()))?;

        let reference = Self::from_number(base);
        if reference.check != found {
            return Err(OgmError::CheckDigits {
                expected: reference.check,
                found,
            });
        }
        Ok(reference)
    }

    /// The 10 data digits as a number.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The check value, 1 to 97.
    pub fn check_digits(&self) -> u8 {
        self.check
    }

    /// All 12 digits without separators.
    pub fn digits(&self) -> String {
        format!("{:010}{:02}", self.base, self.check)
    }
}

impl fmt::Display for OgmReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.digits();
        write!(f, "+++{}/{}/{}+++", &d[..3], &d[3..7], &d[7..])
    }
}

impl FromStr for OgmReference {
    type Err = OgmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OgmReference {
    type Error = OgmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OgmReference> for String {
    fn from(reference: OgmReference) -> Self {
        reference.to_string()
    }
}

/// Generate a formatted OGM, drawing a random base from the thread RNG when
/// `base` is `None` or empty.
pub fn generate_ogm(base: Option<&str>) -> String {
    generate_ogm_with(base, &mut rand::thread_rng())
}

/// Like [`generate_ogm`] with an explicit random source.
pub fn generate_ogm_with<R: Rng>(base: Option<&str>, rng: &mut R) -> String {
    let reference = match base {
        Some(b) if !b.is_empty() => OgmReference::from_base(b),
        _ => OgmReference::random(rng),
    };
    tracing::debug!(ogm = %reference, random = base.is_none_or(str::is_empty), "generated OGM");
    reference.to_string()
}
