//! Route shield classification.
//!
//! Every numbered state highway in Washington is signed with one of three
//! shields. The lookup is keyed by the bare route number (not zero-padded).

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use super::{FormatError, RouteError};

/// The shield a route is signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shield {
    /// Interstate highway
    #[serde(rename = "IS")]
    Interstate,
    /// US highway
    #[serde(rename = "US")]
    Us,
    /// State route
    #[serde(rename = "SR")]
    StateRoute,
}

/// How state routes are abbreviated when building a route label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatePrefix {
    /// "SR", used when only Washington routes are in play.
    #[default]
    Sr,
    /// "WA", used alongside other states' routes.
    Wa,
}

impl Shield {
    /// Two-letter shield code: "IS", "US" or "SR".
    pub fn code(self) -> &'static str {
        match self {
            Shield::Interstate => "IS",
            Shield::Us => "US",
            Shield::StateRoute => "SR",
        }
    }

    /// Label prefix for a route with this shield.
    ///
    /// # Examples
    ///
    /// ```
    /// use wsdot_route::domain::{Shield, StatePrefix};
    ///
    /// assert_eq!(Shield::Interstate.prefix(StatePrefix::Sr), "I");
    /// assert_eq!(Shield::Us.prefix(StatePrefix::Wa), "US");
    /// assert_eq!(Shield::StateRoute.prefix(StatePrefix::Wa), "WA");
    /// ```
    pub fn prefix(self, state: StatePrefix) -> &'static str {
        match (self, state) {
            (Shield::Interstate, _) => "I",
            (Shield::Us, _) => "US",
            (Shield::StateRoute, StatePrefix::Sr) => "SR",
            (Shield::StateRoute, StatePrefix::Wa) => "WA",
        }
    }
}

impl fmt::Display for Shield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const SHIELDS: &[(u16, Shield)] = &[
    (2, Shield::Us),
    (3, Shield::StateRoute),
    (4, Shield::StateRoute),
    (5, Shield::Interstate),
    (6, Shield::StateRoute),
    (7, Shield::StateRoute),
    (8, Shield::StateRoute),
    (9, Shield::StateRoute),
    (10, Shield::StateRoute),
    (11, Shield::StateRoute),
    (12, Shield::Us),
    (14, Shield::StateRoute),
    (16, Shield::StateRoute),
    (17, Shield::StateRoute),
    (18, Shield::StateRoute),
    (19, Shield::StateRoute),
    (20, Shield::StateRoute),
    (21, Shield::StateRoute),
    (22, Shield::StateRoute),
    (23, Shield::StateRoute),
    (24, Shield::StateRoute),
    (25, Shield::StateRoute),
    (26, Shield::StateRoute),
    (27, Shield::StateRoute),
    (28, Shield::StateRoute),
    (31, Shield::StateRoute),
    (41, Shield::StateRoute),
    (82, Shield::Interstate),
    (90, Shield::Interstate),
    (92, Shield::StateRoute),
    (96, Shield::StateRoute),
    (97, Shield::Us),
    (99, Shield::StateRoute),
    (100, Shield::StateRoute),
    (101, Shield::Us),
    (102, Shield::StateRoute),
    (103, Shield::StateRoute),
    (104, Shield::StateRoute),
    (105, Shield::StateRoute),
    (106, Shield::StateRoute),
    (107, Shield::StateRoute),
    (108, Shield::StateRoute),
    (109, Shield::StateRoute),
    (110, Shield::StateRoute),
    (112, Shield::StateRoute),
    (113, Shield::StateRoute),
    (115, Shield::StateRoute),
    (116, Shield::StateRoute),
    (117, Shield::StateRoute),
    (119, Shield::StateRoute),
    (121, Shield::StateRoute),
    (122, Shield::StateRoute),
    (123, Shield::StateRoute),
    (124, Shield::StateRoute),
    (125, Shield::StateRoute),
    (127, Shield::StateRoute),
    (128, Shield::StateRoute),
    (129, Shield::StateRoute),
    (131, Shield::StateRoute),
    (141, Shield::StateRoute),
    (142, Shield::StateRoute),
    (150, Shield::StateRoute),
    (153, Shield::StateRoute),
    (155, Shield::StateRoute),
    (160, Shield::StateRoute),
    (161, Shield::StateRoute),
    (162, Shield::StateRoute),
    (163, Shield::StateRoute),
    (164, Shield::StateRoute),
    (165, Shield::StateRoute),
    (166, Shield::StateRoute),
    (167, Shield::StateRoute),
    (169, Shield::StateRoute),
    (170, Shield::StateRoute),
    (171, Shield::StateRoute),
    (172, Shield::StateRoute),
    (173, Shield::StateRoute),
    (174, Shield::StateRoute),
    (181, Shield::StateRoute),
    (182, Shield::Interstate),
    (193, Shield::StateRoute),
    (194, Shield::StateRoute),
    (195, Shield::Us),
    (197, Shield::Us),
    (202, Shield::StateRoute),
    (203, Shield::StateRoute),
    (204, Shield::StateRoute),
    (205, Shield::Interstate),
    (206, Shield::StateRoute),
    (207, Shield::StateRoute),
    (211, Shield::StateRoute),
    (213, Shield::StateRoute),
    (215, Shield::StateRoute),
    (221, Shield::StateRoute),
    (223, Shield::StateRoute),
    (224, Shield::StateRoute),
    (225, Shield::StateRoute),
    (231, Shield::StateRoute),
    (240, Shield::StateRoute),
    (241, Shield::StateRoute),
    (243, Shield::StateRoute),
    (260, Shield::StateRoute),
    (261, Shield::StateRoute),
    (262, Shield::StateRoute),
    (263, Shield::StateRoute),
    (270, Shield::StateRoute),
    (271, Shield::StateRoute),
    (272, Shield::StateRoute),
    (274, Shield::StateRoute),
    (278, Shield::StateRoute),
    (281, Shield::StateRoute),
    (282, Shield::StateRoute),
    (283, Shield::StateRoute),
    (285, Shield::StateRoute),
    (290, Shield::StateRoute),
    (291, Shield::StateRoute),
    (292, Shield::StateRoute),
    (300, Shield::StateRoute),
    (302, Shield::StateRoute),
    (303, Shield::StateRoute),
    (304, Shield::StateRoute),
    (305, Shield::StateRoute),
    (307, Shield::StateRoute),
    (308, Shield::StateRoute),
    (310, Shield::StateRoute),
    (395, Shield::Us),
    (397, Shield::StateRoute),
    (401, Shield::StateRoute),
    (405, Shield::Interstate),
    (409, Shield::StateRoute),
    (410, Shield::StateRoute),
    (411, Shield::StateRoute),
    (432, Shield::StateRoute),
    (433, Shield::StateRoute),
    (500, Shield::StateRoute),
    (501, Shield::StateRoute),
    (502, Shield::StateRoute),
    (503, Shield::StateRoute),
    (504, Shield::StateRoute),
    (505, Shield::StateRoute),
    (506, Shield::StateRoute),
    (507, Shield::StateRoute),
    (508, Shield::StateRoute),
    (509, Shield::StateRoute),
    (510, Shield::StateRoute),
    (512, Shield::StateRoute),
    (513, Shield::StateRoute),
    (515, Shield::StateRoute),
    (516, Shield::StateRoute),
    (518, Shield::StateRoute),
    (519, Shield::StateRoute),
    (520, Shield::StateRoute),
    (522, Shield::StateRoute),
    (523, Shield::StateRoute),
    (524, Shield::StateRoute),
    (525, Shield::StateRoute),
    (526, Shield::StateRoute),
    (527, Shield::StateRoute),
    (528, Shield::StateRoute),
    (529, Shield::StateRoute),
    (530, Shield::StateRoute),
    (531, Shield::StateRoute),
    (532, Shield::StateRoute),
    (534, Shield::StateRoute),
    (536, Shield::StateRoute),
    (538, Shield::StateRoute),
    (539, Shield::StateRoute),
    (542, Shield::StateRoute),
    (543, Shield::StateRoute),
    (544, Shield::StateRoute),
    (546, Shield::StateRoute),
    (547, Shield::StateRoute),
    (548, Shield::StateRoute),
    (599, Shield::StateRoute),
    (702, Shield::StateRoute),
    (704, Shield::StateRoute),
    (705, Shield::Interstate),
    (706, Shield::StateRoute),
    (730, Shield::Us),
    (821, Shield::StateRoute),
    (823, Shield::StateRoute),
    (900, Shield::StateRoute),
    (902, Shield::StateRoute),
    (903, Shield::StateRoute),
    (904, Shield::StateRoute),
    (906, Shield::StateRoute),
    (970, Shield::StateRoute),
    (971, Shield::StateRoute),
];

static SHIELD_LOOKUP: LazyLock<HashMap<u16, Shield>> =
    LazyLock::new(|| SHIELDS.iter().copied().collect());

/// Enumerate the shield table in route number order.
pub fn entries() -> impl Iterator<Item = (u16, Shield)> {
    SHIELDS.iter().copied()
}

/// Look up the shield for a route number.
///
/// Returns `None` for numbers that are not state highways.
pub fn classify(route_number: u16) -> Option<Shield> {
    SHIELD_LOOKUP.get(&route_number).copied()
}

/// Look up the shield for a route identifier or bare route number string.
///
/// Only the leading one to three digits are used, so `"005"`, `"5"` and
/// `"005R109958"` all classify as Interstate 5.
///
/// # Examples
///
/// ```
/// use wsdot_route::domain::{shield, Shield};
///
/// assert_eq!(shield::classify_str("101COABERDN").unwrap(), Some(Shield::Us));
/// assert_eq!(shield::classify_str("001").unwrap(), None);
/// assert!(shield::classify_str("SR5").is_err());
/// ```
pub fn classify_str(route_id: &str) -> Result<Option<Shield>, RouteError> {
    let digits = route_id
        .bytes()
        .take(3)
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(FormatError::new(route_id, r"^\d{1,3}").into());
    }
    let number = route_id[..digits]
        .parse::<u16>()
        .map_err(|_| FormatError::new(route_id, r"^\d{1,3}"))?;
    Ok(classify(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_routes() {
        assert_eq!(classify(5), Some(Shield::Interstate));
        assert_eq!(classify(101), Some(Shield::Us));
        assert_eq!(classify(3), Some(Shield::StateRoute));
        assert_eq!(classify(405), Some(Shield::Interstate));
        assert_eq!(classify(730), Some(Shield::Us));
    }

    #[test]
    fn classify_unknown_route() {
        assert_eq!(classify(0), None);
        assert_eq!(classify(1), None);
        assert_eq!(classify(999), None);
    }

    #[test]
    fn classify_str_uses_leading_digits() {
        assert_eq!(classify_str("005").unwrap(), Some(Shield::Interstate));
        assert_eq!(classify_str("5").unwrap(), Some(Shield::Interstate));
        assert_eq!(classify_str("090RL090EXP").unwrap(), Some(Shield::Interstate));
        // Only three digits are read
        assert_eq!(classify_str("0051").unwrap(), Some(Shield::Interstate));
    }

    #[test]
    fn classify_str_rejects_missing_digits() {
        let err = classify_str("I5").unwrap_err();
        assert_eq!(err.as_format().map(FormatError::input), Some("I5"));
        assert!(classify_str("").is_err());
    }

    #[test]
    fn table_is_sorted_and_unique() {
        let numbers: Vec<u16> = entries().map(|(n, _)| n).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(numbers, sorted);
        assert_eq!(numbers.len(), 188);
    }

    #[test]
    fn prefixes() {
        for (_, shield) in entries() {
            let expected = match shield.code() {
                "IS" => "I",
                other => other,
            };
            assert_eq!(shield.prefix(StatePrefix::Sr), expected);
        }
        assert_eq!(Shield::StateRoute.prefix(StatePrefix::default()), "SR");
    }

    #[test]
    fn display() {
        assert_eq!(Shield::Interstate.to_string(), "IS");
        assert_eq!(Shield::Us.to_string(), "US");
        assert_eq!(Shield::StateRoute.to_string(), "SR");
    }
}
