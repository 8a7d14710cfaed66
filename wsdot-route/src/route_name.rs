//! Roads & Highways route names.
//!
//! The WSDOT linear referencing service names each route segment with a
//! route identifier, its mandatory `i`/`d`/`r` suffix, optional additional
//! information, and a scaled milepost: `005P101234i001234A`.
//!
//! A few real names embed compound ramp or couplet codes and do not match
//! this grammar. They are not supported:
//!
//! - `002R1CN097Adi000000A`
//! - `005CNLC2RMP1i000000A`
//! - `005CNLC2RMP2i000000A`
//! - `005CNLC2RMP3i000000A`

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::config::ParseOptions;
use crate::description::RouteDescription;
use crate::domain::{FormatError, Milepost, RouteError};
use crate::pattern::{PatternFragment, ROUTE_ID_FRAGMENT, RrtVocabulary, route_id_fragment};

static ROUTE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| route_name_fragment(&ROUTE_ID_FRAGMENT).to_regex().unwrap());

/// Embed a route identifier fragment in the full route name grammar.
fn route_name_fragment(route_id: &PatternFragment) -> PatternFragment {
    PatternFragment::from_source(format!(
        "(?P<route_id_and_dir>(?P<route_id>{route_id})(?P<route_type>[idr]))\
         (?P<additional_info>[0-9A-Za-z_]+[idr])?\
         (?P<mp_and_ab>(?P<mp_x1000>[0-9]+)(?P<ab>[AB]))"
    ))
}

/// Build the anchored route name pattern for a custom RRT vocabulary.
pub fn route_name_pattern(vocabulary: &RrtVocabulary) -> Result<Regex, RouteError> {
    if vocabulary.is_default() {
        return Ok(ROUTE_NAME_RE.clone());
    }
    route_name_fragment(&route_id_fragment(vocabulary)?).to_regex()
}

/// A route identifier and milepost parsed from a Roads & Highways route name.
///
/// # Examples
///
/// ```
/// use wsdot_route::RouteName;
///
/// let name = RouteName::parse("005P101234i001234A").unwrap();
/// assert_eq!(name.route().to_string(), "005P101234i");
/// assert!(name.route().is_ramp());
/// assert_eq!(name.milepost().value(), 1.234);
/// assert!(!name.milepost().is_back());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteName {
    route: RouteDescription,
    additional_info: Option<String>,
    milepost: Milepost,
}

impl RouteName {
    /// Create from already-parsed parts.
    pub fn new(route: RouteDescription, milepost: Milepost) -> Self {
        Self {
            route,
            additional_info: None,
            milepost,
        }
    }

    /// Parse a route name using the catalog's RRT vocabulary.
    pub fn parse(name: &str) -> Result<Self, RouteError> {
        Self::parse_with(name, &RrtVocabulary::default())
    }

    /// Parse a route name with a custom RRT vocabulary.
    pub fn parse_with(name: &str, vocabulary: &RrtVocabulary) -> Result<Self, RouteError> {
        if name.is_empty() {
            return Err(RouteError::EmptyInput);
        }
        let re = route_name_pattern(vocabulary)?;
        let Some(caps) = re.captures(name) else {
            trace!(input = name, pattern = re.as_str(), "route name did not match");
            return Err(FormatError::new(name, re.as_str()).into());
        };

        let options = ParseOptions::roads_and_highways().with_vocabulary(vocabulary.clone());
        let route = RouteDescription::new(&caps["route_id_and_dir"], &options)?;
        let milepost = Milepost::parse_scaled(&caps["mp_and_ab"])?;
        let additional_info = caps.name("additional_info").map(|m| m.as_str().to_string());

        Ok(Self {
            route,
            additional_info,
            milepost,
        })
    }

    /// The route identifier, including its direction/type suffix.
    pub fn route(&self) -> &RouteDescription {
        &self.route
    }

    /// Text between the route identifier and the milepost, if any.
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    pub fn milepost(&self) -> &Milepost {
        &self.milepost
    }

    /// Split into the route description and milepost.
    pub fn into_parts(self) -> (RouteDescription, Milepost) {
        (self.route, self.milepost)
    }
}

/// Parse a route name straight into its route description and milepost.
pub fn parse_route_id_and_milepost(name: &str) -> Result<(RouteDescription, Milepost), RouteError> {
    RouteName::parse(name).map(RouteName::into_parts)
}
