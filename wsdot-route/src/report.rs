//! Serializable reports of parsed routes and mileposts.

use serde::Serialize;

use crate::description::RouteDescription;
use crate::domain::{Directions, Milepost, RrtKind, Shield, known_routes};
use crate::route_name::RouteName;

/// A parsed route identifier and everything derived from it.
#[derive(Debug, Serialize)]
pub struct RouteReport {
    /// Canonical identifier text
    pub route_id: String,

    /// Three-digit mainline number
    pub mainline: String,

    pub rrt: Option<String>,

    pub rrq: Option<String>,

    /// Direction/type suffix, if one was parsed
    pub suffix: Option<char>,

    /// Shield type ("IS", "US", "SR")
    pub shield: Option<Shield>,

    /// Category of the RRT
    pub rrt_kind: Option<RrtKind>,

    pub is_mainline: bool,

    pub is_ramp: bool,

    pub is_local_collector: bool,

    /// Null when the grammar had no suffix
    pub is_decrease: Option<bool>,

    /// Where a ramp or branch meets the mainline
    pub mainline_connection_mp: Option<f64>,

    pub rrt_description: Option<String>,

    pub rrq_description: Option<String>,

    /// Directions of travel, for identifiers in the known-route directory
    pub directions: Option<Directions>,
}

/// A milepost with its rendered forms.
#[derive(Debug, Serialize)]
pub struct MilepostReport {
    pub value: f64,

    pub is_back: bool,

    /// Short form ("5", "5B")
    pub text: String,

    /// Form with the back indicator always present ("5A", "5B")
    pub text_with_back_char: String,
}

/// A parsed Roads & Highways route name.
#[derive(Debug, Serialize)]
pub struct RouteNameReport {
    pub route: RouteReport,

    pub additional_info: Option<String>,

    pub milepost: MilepostReport,
}

impl RouteReport {
    /// Create from a route description.
    pub fn from_description(route: &RouteDescription) -> Self {
        // The directory lists identifiers without a suffix
        let directions = known_routes::lookup(&unsuffixed_id(route)).map(|info| info.directions());

        Self {
            route_id: route.to_string(),
            mainline: route.mainline().to_string(),
            rrt: route.rrt().map(str::to_string),
            rrq: route.rrq().map(str::to_string),
            suffix: route.suffix(),
            shield: route.shield(),
            rrt_kind: route.rrt_entry().map(|entry| entry.kind()),
            is_mainline: route.is_mainline(),
            is_ramp: route.is_ramp(),
            is_local_collector: route.is_local_collector(),
            is_decrease: route.is_decrease(),
            mainline_connection_mp: route.mainline_connection_mp(),
            rrt_description: route.rrt_description().map(str::to_string),
            rrq_description: route.rrq_description().map(|d| d.into_owned()),
            directions,
        }
    }
}

impl MilepostReport {
    /// Create from a milepost.
    pub fn from_milepost(milepost: &Milepost) -> Self {
        Self {
            value: milepost.value(),
            is_back: milepost.is_back(),
            text: milepost.to_string(),
            text_with_back_char: milepost.format_with_back_char(),
        }
    }
}

impl RouteNameReport {
    /// Create from a route name.
    pub fn from_route_name(name: &RouteName) -> Self {
        Self {
            route: RouteReport::from_description(name.route()),
            additional_info: name.additional_info().map(str::to_string),
            milepost: MilepostReport::from_milepost(name.milepost()),
        }
    }
}

fn unsuffixed_id(route: &RouteDescription) -> String {
    format!(
        "{}{}{}",
        route.mainline(),
        route.rrt().unwrap_or_default(),
        route.rrq().unwrap_or_default()
    )
}
