//! Milepost values with a back-mileage flag.
//!
//! Two text grammars exist and they are not interchangeable:
//!
//! - plain: `5`, `5A`, `5B` (the number is taken as-is, suffix optional)
//! - scaled: `099958A` (the number is thousandths of a mile, suffix required),
//!   as found at the end of a Roads & Highways route name.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use super::{FormatError, RouteError};

static PLAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?P<mp>[0-9]+)(?P<ab>[AB])?$").unwrap());

static SCALED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?P<mp>[0-9]+)(?P<ab>[AB])$").unwrap());

/// Implied decimal places in a scaled milepost.
const SCALED_DIVISOR: f64 = 1000.0;

/// Expected values for a back-mileage indicator.
const BACK_INDICATOR_FORMAT: &str = "one of A, a, B, b";

/// A position along a state route.
///
/// # Examples
///
/// ```
/// use wsdot_route::domain::Milepost;
///
/// let mp = Milepost::parse("5B").unwrap();
/// assert_eq!(mp.value(), 5.0);
/// assert!(mp.is_back());
/// assert_eq!(mp.to_string(), "5B");
///
/// let mp = Milepost::parse_scaled("099958A").unwrap();
/// assert_eq!(mp.value(), 99.958);
/// assert_eq!(mp.to_string(), "99.958");
/// assert_eq!(mp.format_with_back_char(), "99.958A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Milepost {
    value: f64,
    is_back: bool,
}

impl Milepost {
    /// Create a milepost from its parts.
    ///
    /// Returns `None` if the value is negative, NaN or infinite.
    pub fn new(value: f64, is_back: bool) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Self { value, is_back })
        } else {
            None
        }
    }

    /// Parse a plain milepost: digits with an optional `A`/`B` suffix.
    pub fn parse(text: &str) -> Result<Self, RouteError> {
        Self::parse_with(text, &PLAIN_RE, 1.0)
    }

    /// Parse a scaled milepost: digits in thousandths of a mile followed by
    /// a mandatory `A`/`B` suffix.
    pub fn parse_scaled(text: &str) -> Result<Self, RouteError> {
        Self::parse_with(text, &SCALED_RE, SCALED_DIVISOR)
    }

    fn parse_with(text: &str, re: &Regex, divisor: f64) -> Result<Self, RouteError> {
        if text.is_empty() {
            return Err(RouteError::EmptyInput);
        }
        let mismatch = || FormatError::new(text, re.as_str());
        let Some(caps) = re.captures(text) else {
            trace!(input = text, pattern = re.as_str(), "milepost did not match");
            return Err(mismatch().into());
        };
        let raw: f64 = caps["mp"].parse().map_err(|_| mismatch())?;
        let is_back = parse_back_indicator(caps.name("ab").map(|m| m.as_str()))?;
        Self::new(raw / divisor, is_back).ok_or_else(|| {
            trace!(input = text, "milepost value out of range");
            mismatch().into()
        })
    }

    /// The milepost number.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether this is back mileage.
    pub fn is_back(&self) -> bool {
        self.is_back
    }

    /// `'B'` for back mileage, `'A'` otherwise.
    pub fn back_char(&self) -> char {
        if self.is_back { 'B' } else { 'A' }
    }

    /// Render with the back indicator always present (`"5A"`, `"5B"`).
    ///
    /// `Display` only appends the indicator for back mileage.
    pub fn format_with_back_char(&self) -> String {
        format!("{}{}", self.value, self.back_char())
    }
}

impl fmt::Display for Milepost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_back {
            write!(f, "{}{}", self.value, self.back_char())
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Interpret a back-mileage indicator.
///
/// `"B"`/`"b"` mean back mileage; `"A"`/`"a"` or no indicator at all mean
/// ahead mileage. Anything else is rejected rather than read as ahead.
/// A `bool` flag needs no conversion and is used directly.
pub fn parse_back_indicator(indicator: Option<&str>) -> Result<bool, FormatError> {
    match indicator {
        None | Some("A" | "a") => Ok(false),
        Some("B" | "b") => Ok(true),
        Some(other) => Err(FormatError::new(other, BACK_INDICATOR_FORMAT)),
    }
}
