//! Related Roadway Type (RRT) catalog.
//!
//! An RRT is the two-character code following the mainline number in a
//! route identifier. Most codes are fixed (`SP` for a spur, `CO` for a
//! couplet). Ramps form a generated family: a letter giving the ramp's
//! direction and side, followed by a digit or `U` for an extension.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Broad category of a related roadway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RrtKind {
    Ramp,
    Ferry,
    Other,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedRoadwayType {
    code: String,
    description: String,
    kind: RrtKind,
}

impl RelatedRoadwayType {
    /// The two-character RRT code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> RrtKind {
        self.kind
    }
}

/// Letters that start a ramp RRT.
pub const RAMP_FAMILY_LETTERS: [char; 8] = ['P', 'Q', 'R', 'S', 'U', 'W', 'X', 'Y'];

/// Ramp letters matched by the default route identifier pattern.
pub const DEFAULT_RAMP_LETTERS: [char; 4] = ['P', 'Q', 'R', 'S'];

const NAMED: &[(&str, &str)] = &[
    ("AR", "Alternate Route"),
    ("CO", "Couplet"),
    ("FD", "Frontage Road Dec"),
    ("FI", "Frontage Road Inc"),
    ("FS", "Ferry Ship (Boat)"),
    ("FT", "Ferry Terminal"),
    ("PR", "Proposed Route"),
    ("RL", "Reversible Lane"),
    ("SP", "Spur"),
    ("TB", "Transitional Turnback"),
    ("TR", "Temporary Route"),
    ("CD", "Collector Distributor Dec"),
    ("CI", "Collector Distributor Inc"),
    ("LX", "Crossroad within Interchange"),
    ("HD", "Grade-Separated HOV-Dec"),
    ("HI", "Grade-Separated HOV-Inc"),
    ("ML", "Mainline (implied RRT-field is blank)"),
    ("UC", "Under Construction"),
];

/// Direction of travel and side for the four lettered ramp series.
fn ramp_series(letter: char) -> Option<(&'static str, &'static str)> {
    match letter {
        'P' => Some(("Off", "Inc")),
        'Q' => Some(("On", "Inc")),
        'R' => Some(("Off", "Dec")),
        'S' => Some(("On", "Dec")),
        _ => None,
    }
}

/// Generate every `(code, description)` pair of the ramp family.
///
/// One entry per (letter, digit) pair, then one extension entry per letter.
pub fn ramp_family() -> impl Iterator<Item = (String, String)> {
    RAMP_FAMILY_LETTERS.into_iter().flat_map(|letter| {
        let numbered = (1..=9).map(move |digit| {
            let description = match ramp_series(letter) {
                Some((on_off, inc_dec)) => format!("{on_off} Ramp {digit}, {inc_dec}"),
                None => format!("{letter} Ramp {digit}"),
            };
            (format!("{letter}{digit}"), description)
        });
        let extension = std::iter::once((
            format!("{letter}U"),
            format!("Extension of {letter} Ramp"),
        ));
        numbered.chain(extension)
    })
}

static CATALOG: LazyLock<Vec<RelatedRoadwayType>> = LazyLock::new(|| {
    let named = NAMED.iter().map(|&(code, description)| {
        let kind = match code {
            "FS" | "FT" => RrtKind::Ferry,
            _ => RrtKind::Other,
        };
        RelatedRoadwayType {
            code: code.to_string(),
            description: description.to_string(),
            kind,
        }
    });
    let ramps = ramp_family().map(|(code, description)| RelatedRoadwayType {
        code,
        description,
        kind: RrtKind::Ramp,
    });
    named.chain(ramps).collect()
});

static BY_CODE: LazyLock<HashMap<&'static str, &'static RelatedRoadwayType>> =
    LazyLock::new(|| CATALOG.iter().map(|rrt| (rrt.code(), rrt)).collect());

/// All catalog entries: named codes first, then the ramp family.
pub fn catalog() -> &'static [RelatedRoadwayType] {
    &CATALOG
}

/// Look up a full catalog entry.
pub fn lookup(code: &str) -> Option<&'static RelatedRoadwayType> {
    BY_CODE.get(code).copied()
}

/// Describe an RRT code.
///
/// # Examples
///
/// ```
/// use wsdot_route::domain::rrt;
///
/// assert_eq!(rrt::describe("CO"), Some("Couplet"));
/// assert_eq!(rrt::describe("Q5"), Some("On Ramp 5, Inc"));
/// assert_eq!(rrt::describe("ZZ"), None);
/// ```
pub fn describe(code: &str) -> Option<&'static str> {
    lookup(code).map(RelatedRoadwayType::description)
}

/// Whether a code belongs to the ramp family: a family letter followed by
/// a digit 1-9 or `U`.
pub fn is_ramp_code(code: &str) -> bool {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(second), None) => {
            RAMP_FAMILY_LETTERS.contains(&letter) && matches!(second, '1'..='9' | 'U')
        }
        _ => false,
    }
}

/// Whether a code is a crossroad or frontage road.
pub fn is_local_collector_code(code: &str) -> bool {
    matches!(code, "LX" | "FD" | "FI")
}
