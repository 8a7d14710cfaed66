//! WSDOT route identifier parsing.
//!
//! Splits state route identifiers such as `005`, `101COABERDN` or
//! `005P101234i` into their mainline, Related Roadway Type (RRT), Related
//! Roadway Qualifier (RRQ) and suffix, and derives shields, ramp and
//! direction flags, and human-readable descriptions from them. Also parses
//! mileposts and Roads & Highways route names.

pub mod config;
pub mod description;
pub mod domain;
pub mod parts;
pub mod pattern;
pub mod report;
pub mod route_name;

pub use config::ParseOptions;
pub use description::RouteDescription;
pub use parts::{RouteParts, parse_route_parts, try_parse_route_parts};
pub use route_name::{RouteName, parse_route_id_and_milepost};
