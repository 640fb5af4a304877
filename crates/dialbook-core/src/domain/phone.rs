//! North American numbers: normalization, numbering-plan checks, and the
//! validated value type.

use crate::domain::input::PhoneInput;
use crate::domain::keypad::map_letters;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NATIONAL_DIGITS: usize = 10;
const COUNTRY_CODE: char = '1';

/// A validated 10-digit number: area code, exchange code, line number.
///
/// Instances only come out of [`validate`], so the area and exchange codes
/// never start with `0` or `1` and never end in `11`. Ordering is numeric
/// over the ten digits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    pub fn area_code(&self) -> &str {
        &self.digits[0..3]
    }

    pub fn exchange_code(&self) -> &str {
        &self.digits[3..6]
    }

    pub fn line_number(&self) -> &str {
        &self.digits[6..10]
    }

    /// The ten canonical digits, without country code or punctuation.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn as_u64(&self) -> u64 {
        self.digits
            .bytes()
            .fold(0, |acc, byte| acc * 10 + u64::from(byte - b'0'))
    }
}

/// Normalizes a raw value and checks it against the numbering plan.
///
/// Uppercase letters are mapped through the keypad, every non-digit is
/// dropped, and an 11-digit result is accepted only when it leads with the
/// `1` country code.
pub fn validate(raw: impl Into<PhoneInput>) -> Result<PhoneNumber, ValidationError> {
    let text = raw.into().to_text()?;
    let digits: String = map_letters(&text)
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();

    let national = match digits.len() {
        11 if digits.starts_with(COUNTRY_CODE) => &digits[1..],
        NATIONAL_DIGITS => digits.as_str(),
        len => return Err(ValidationError::InvalidLength { digits: len }),
    };

    let area_code = &national[0..3];
    if !is_valid_code(area_code) {
        return Err(ValidationError::InvalidAreaCode(area_code.to_string()));
    }

    let exchange_code = &national[3..6];
    if !is_valid_code(exchange_code) {
        return Err(ValidationError::InvalidExchangeCode(
            exchange_code.to_string(),
        ));
    }

    Ok(PhoneNumber {
        digits: national.to_string(),
    })
}

// Area and exchange codes share the same plan rule.
fn is_valid_code(code: &str) -> bool {
    !code.starts_with(['0', '1']) && !code.ends_with("11")
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.digits
    }
}

impl From<PhoneNumber> for u64 {
    fn from(value: PhoneNumber) -> Self {
        value.as_u64()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}-{}",
            self.area_code(),
            self.exchange_code(),
            self.line_number()
        )
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({:?})", self.digits)
    }
}
