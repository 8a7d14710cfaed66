//! Route descriptions: a parsed route identifier plus derived properties.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::config::{DECREASE_SUFFIX, ParseOptions};
use crate::domain::{RelatedRoadwayType, RouteError, Shield, rrq, rrt, shield};
use crate::parts::{RouteParts, parse_route_parts};

/// Divisor turning a numeric RRQ into the milepost where a ramp or branch
/// meets the mainline.
const RRQ_MILEPOST_DIVISOR: f64 = 100.0;

/// A parsed route identifier with derived properties.
///
/// A `RouteDescription` only exists for input that parsed: construction
/// always reports a mismatch as an error, whichever entry point is used.
///
/// # Examples
///
/// ```
/// use wsdot_route::{RouteDescription, domain::Shield};
///
/// let route: RouteDescription = "101COABERDN".parse().unwrap();
/// assert_eq!(route.shield(), Some(Shield::Us));
/// assert_eq!(route.rrt_description(), Some("Couplet"));
/// assert_eq!(route.rrq_description().as_deref(), Some("Aberdeen"));
/// assert!(!route.is_mainline());
/// assert_eq!(route.to_string(), "101COABERDN");
///
/// let ramp: RouteDescription = "005R109958".parse().unwrap();
/// assert!(ramp.is_ramp());
/// assert_eq!(ramp.mainline_connection_mp(), Some(99.58));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescription {
    parts: RouteParts,
    shield: Option<Shield>,
    accepts_suffix: bool,
    is_ramp: bool,
}

impl RouteDescription {
    /// Parse a route identifier with the given options.
    pub fn new(route_id: &str, options: &ParseOptions) -> Result<Self, RouteError> {
        let parts = parse_route_parts(route_id, options)?;
        Ok(Self::from_parts(parts, options))
    }

    /// Parse a WA Public Roads identifier, which may end in `d`.
    pub fn parse_wapr_route_id(route_id: &str) -> Result<Self, RouteError> {
        Self::new(route_id, &ParseOptions::wapr())
    }

    /// Parse a Roads & Highways identifier, which must end in `i`, `d` or `r`.
    pub fn parse_roads_and_highways_route_id(route_id: &str) -> Result<Self, RouteError> {
        Self::new(route_id, &ParseOptions::roads_and_highways())
    }

    fn from_parts(parts: RouteParts, options: &ParseOptions) -> Self {
        let shield = shield::classify_str(parts.mainline()).ok().flatten();
        let ramp_by_suffix = options
            .ramp_suffix
            .is_some_and(|ramp| parts.suffix() == Some(ramp));
        let ramp_by_rrt = parts
            .rrt()
            .is_some_and(|code| rrt::is_ramp_code(code) || options.vocabulary.is_ramp_code(code));
        Self {
            shield,
            accepts_suffix: options.accepts_suffix(),
            is_ramp: ramp_by_suffix || ramp_by_rrt,
            parts,
        }
    }

    /// The parsed parts.
    pub fn parts(&self) -> &RouteParts {
        &self.parts
    }

    /// Three-digit mainline route number.
    pub fn mainline(&self) -> &str {
        self.parts.mainline()
    }

    pub fn rrt(&self) -> Option<&str> {
        self.parts.rrt()
    }

    pub fn rrq(&self) -> Option<&str> {
        self.parts.rrq()
    }

    /// The suffix that followed the identifier, if any.
    pub fn suffix(&self) -> Option<char> {
        self.parts.suffix()
    }

    /// Shield of the mainline route, if it is a known state highway.
    pub fn shield(&self) -> Option<Shield> {
        self.shield
    }

    /// Whether this is a mainline identifier (no RRT or RRQ).
    pub fn is_mainline(&self) -> bool {
        self.rrt().is_none() && self.rrq().is_none()
    }

    /// Whether the route is a ramp.
    ///
    /// True when the RRT is a ramp code, or when the identifier ended in
    /// the context's ramp suffix (Roads & Highways `r`).
    pub fn is_ramp(&self) -> bool {
        self.is_ramp
    }

    /// Whether the route is a crossroad or frontage road.
    pub fn is_local_collector(&self) -> bool {
        self.rrt().is_some_and(rrt::is_local_collector_code)
    }

    /// Whether the identifier was marked as decreasing direction.
    ///
    /// `None` when the options did not accept a suffix at all.
    pub fn is_decrease(&self) -> Option<bool> {
        self.accepts_suffix
            .then(|| self.suffix() == Some(DECREASE_SUFFIX))
    }

    /// Milepost where the route leaves or joins the mainline, read from an
    /// all-digit RRQ in hundredths of a mile.
    pub fn mainline_connection_mp(&self) -> Option<f64> {
        let rrq = self.rrq()?;
        if !rrq.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hundredths: u32 = rrq.parse().ok()?;
        Some(f64::from(hundredths) / RRQ_MILEPOST_DIVISOR)
    }

    /// Full catalog entry for the RRT.
    pub fn rrt_entry(&self) -> Option<&'static RelatedRoadwayType> {
        self.rrt().and_then(rrt::lookup)
    }

    /// Description of the RRT, or the raw code if the catalog lacks it.
    pub fn rrt_description(&self) -> Option<&str> {
        let code = self.rrt()?;
        Some(rrt::describe(code).unwrap_or(code))
    }

    /// Description of the RRQ.
    ///
    /// A place name when the RRQ is a known code, "at milepost X" when it
    /// is numeric, and the raw RRQ otherwise.
    pub fn rrq_description(&self) -> Option<Cow<'_, str>> {
        let code = self.rrq()?;
        if let Some(place) = rrq::describe(code) {
            return Some(Cow::Borrowed(place));
        }
        match self.mainline_connection_mp() {
            Some(mp) => Some(Cow::Owned(format!("at milepost {mp}"))),
            None => Some(Cow::Borrowed(code)),
        }
    }
}

impl fmt::Display for RouteDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parts, f)
    }
}

impl FromStr for RouteDescription {
    type Err = RouteError;

    /// Parse with default options (no suffix).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, &ParseOptions::default())
    }
}
