//! Domain types for WSDOT route identifiers.
//!
//! This module holds the static catalogs (shields, related roadway types and
//! qualifiers, known routes), the milepost type, and the error types shared
//! by every parser in the crate.

mod error;
pub mod known_routes;
mod milepost;
pub mod rrq;
pub mod rrt;
pub mod shield;

pub use error::{FormatError, RouteError};
pub use known_routes::{Directions, RouteInfo};
pub use milepost::{Milepost, parse_back_indicator};
pub use rrt::{RelatedRoadwayType, RrtKind};
pub use shield::{Shield, StatePrefix};
