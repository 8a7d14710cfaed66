//! Directory of known state route identifiers.
//!
//! Lists each signed route, spur and couplet together with its shield and
//! the directions of travel it carries.

use serde::Serialize;

use super::Shield;

/// Directions of travel carried by a route.
///
/// Stored as a bit set: increase is 1, decrease is 2, both is 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Directions {
    Increase = 1,
    Decrease = 2,
    Both = 3,
}

impl Directions {
    fn bits(self) -> u8 {
        self as u8
    }
}

/// A known route identifier with its shield and directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    id: &'static str,
    shield: Shield,
    directions: Directions,
}

impl RouteInfo {
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn shield(&self) -> Shield {
        self.shield
    }

    pub fn directions(&self) -> Directions {
        self.directions
    }

    /// Whether the route has an increasing component.
    pub fn is_increase(&self) -> bool {
        self.has(Directions::Increase)
    }

    /// Whether the route has a decreasing component.
    pub fn is_decrease(&self) -> bool {
        self.has(Directions::Decrease)
    }

    /// Whether the route has both increasing and decreasing components.
    pub fn is_both(&self) -> bool {
        self.has(Directions::Both)
    }

    fn has(&self, wanted: Directions) -> bool {
        self.directions.bits() & wanted.bits() == wanted.bits()
    }
}

const ROUTES: &[(&str, Shield, Directions)] = &[
    ("002", Shield::Us, Directions::Both),
    ("002COBROWNE", Shield::Us, Directions::Increase),
    ("002CODIVISN", Shield::Us, Directions::Increase),
    ("002CONEWPRT", Shield::Us, Directions::Both),
    ("003", Shield::StateRoute, Directions::Both),
    ("004", Shield::StateRoute, Directions::Both),
    ("004COKELSO", Shield::StateRoute, Directions::Both),
    ("005", Shield::Interstate, Directions::Both),
    ("005HD15463", Shield::Interstate, Directions::Increase),
    ("005HD15602", Shield::Interstate, Directions::Increase),
    ("005HI15420", Shield::Interstate, Directions::Increase),
    ("005RL005EXP", Shield::Interstate, Directions::Both),
    ("006", Shield::StateRoute, Directions::Both),
    ("007", Shield::StateRoute, Directions::Both),
    ("008", Shield::StateRoute, Directions::Both),
    ("009", Shield::StateRoute, Directions::Both),
    ("009SPSUMAS", Shield::StateRoute, Directions::Both),
    ("010", Shield::StateRoute, Directions::Both),
    ("011", Shield::StateRoute, Directions::Both),
    ("012", Shield::Us, Directions::Both),
    ("012COABERDN", Shield::Us, Directions::Increase),
    ("014", Shield::StateRoute, Directions::Both),
    ("014SPMARYHL", Shield::StateRoute, Directions::Both),
    ("016", Shield::StateRoute, Directions::Both),
    ("016AR", Shield::StateRoute, Directions::Increase),
    ("016SPGORST", Shield::StateRoute, Directions::Both),
    ("017", Shield::StateRoute, Directions::Both),
    ("018", Shield::StateRoute, Directions::Both),
    ("019", Shield::StateRoute, Directions::Both),
    ("020", Shield::StateRoute, Directions::Both),
    ("020SPANACRT", Shield::StateRoute, Directions::Both),
    ("021", Shield::StateRoute, Directions::Both),
    ("022", Shield::StateRoute, Directions::Both),
    ("023", Shield::StateRoute, Directions::Both),
    ("024", Shield::StateRoute, Directions::Both),
    ("025", Shield::StateRoute, Directions::Both),
    ("026", Shield::StateRoute, Directions::Both),
    ("026SPCOLFAX", Shield::StateRoute, Directions::Both),
    ("027", Shield::StateRoute, Directions::Both),
    ("028", Shield::StateRoute, Directions::Both),
    ("028COWENTCH", Shield::StateRoute, Directions::Increase),
    ("028SPWENTCH", Shield::StateRoute, Directions::Both),
    ("031", Shield::StateRoute, Directions::Both),
    ("041", Shield::StateRoute, Directions::Both),
    ("082", Shield::Interstate, Directions::Both),
    ("090", Shield::Interstate, Directions::Both),
    ("090RL090EXP", Shield::Interstate, Directions::Both),
    ("092", Shield::StateRoute, Directions::Both),
    ("092SPGRANIT", Shield::StateRoute, Directions::Both),
    ("096", Shield::StateRoute, Directions::Both),
    ("097", Shield::Us, Directions::Both),
    ("097AR", Shield::Us, Directions::Both),
    ("097COMARYHL", Shield::Us, Directions::Both),
    ("097SPORONDO", Shield::Us, Directions::Both),
    ("099", Shield::StateRoute, Directions::Both),
    ("099COVIADCT", Shield::StateRoute, Directions::Increase),
    ("100", Shield::StateRoute, Directions::Both),
    ("100SPCANBY", Shield::StateRoute, Directions::Both),
    ("101", Shield::Us, Directions::Both),
    ("101AR", Shield::Us, Directions::Both),
    ("101COABERDN", Shield::Us, Directions::Both),
    ("101COHERON", Shield::Us, Directions::Increase),
    ("101COPRTANG", Shield::Us, Directions::Both),
    ("102", Shield::StateRoute, Directions::Both),
    ("103", Shield::StateRoute, Directions::Both),
    ("104", Shield::StateRoute, Directions::Both),
    ("104COKNGSTN", Shield::StateRoute, Directions::Increase),
    ("104SPAURORA", Shield::StateRoute, Directions::Both),
    ("105", Shield::StateRoute, Directions::Both),
    ("105SPBOONE", Shield::StateRoute, Directions::Both),
    ("105SPWESTPT", Shield::StateRoute, Directions::Both),
    ("106", Shield::StateRoute, Directions::Both),
    ("107", Shield::StateRoute, Directions::Both),
    ("108", Shield::StateRoute, Directions::Both),
    ("109", Shield::StateRoute, Directions::Both),
    ("109COHQUIAM", Shield::StateRoute, Directions::Increase),
    ("109SPLONNGR", Shield::StateRoute, Directions::Both),
    ("110", Shield::StateRoute, Directions::Both),
    ("110SPMORA", Shield::StateRoute, Directions::Both),
    ("112", Shield::StateRoute, Directions::Both),
    ("113", Shield::StateRoute, Directions::Both),
    ("115", Shield::StateRoute, Directions::Both),
    ("116", Shield::StateRoute, Directions::Both),
    ("117", Shield::StateRoute, Directions::Both),
    ("119", Shield::StateRoute, Directions::Both),
    ("121", Shield::StateRoute, Directions::Both),
    ("122", Shield::StateRoute, Directions::Both),
    ("123", Shield::StateRoute, Directions::Both),
    ("124", Shield::StateRoute, Directions::Both),
    ("125", Shield::StateRoute, Directions::Both),
    ("125SP125SP", Shield::StateRoute, Directions::Both),
    ("127", Shield::StateRoute, Directions::Both),
    ("128", Shield::StateRoute, Directions::Both),
    ("129", Shield::StateRoute, Directions::Both),
    ("129SP6THST", Shield::StateRoute, Directions::Both),
    ("131", Shield::StateRoute, Directions::Both),
    ("141", Shield::StateRoute, Directions::Both),
    ("141SPUNDRWD", Shield::StateRoute, Directions::Both),
    ("142", Shield::StateRoute, Directions::Both),
    ("150", Shield::StateRoute, Directions::Both),
    ("153", Shield::StateRoute, Directions::Both),
    ("155", Shield::StateRoute, Directions::Both),
    ("155SPOMAK", Shield::StateRoute, Directions::Both),
    ("160", Shield::StateRoute, Directions::Both),
    ("161", Shield::StateRoute, Directions::Both),
    ("162", Shield::StateRoute, Directions::Both),
    ("163", Shield::StateRoute, Directions::Both),
    ("164", Shield::StateRoute, Directions::Both),
    ("165", Shield::StateRoute, Directions::Both),
    ("166", Shield::StateRoute, Directions::Both),
    ("167", Shield::StateRoute, Directions::Both),
    ("169", Shield::StateRoute, Directions::Both),
    ("170", Shield::StateRoute, Directions::Both),
    ("171", Shield::StateRoute, Directions::Both),
    ("172", Shield::StateRoute, Directions::Both),
    ("173", Shield::StateRoute, Directions::Both),
    ("174", Shield::StateRoute, Directions::Both),
    ("174SPCRWNPT", Shield::StateRoute, Directions::Both),
    ("174SPLEAHY", Shield::StateRoute, Directions::Both),
    ("181", Shield::StateRoute, Directions::Both),
    ("182", Shield::Interstate, Directions::Both),
    ("193", Shield::StateRoute, Directions::Both),
    ("194", Shield::StateRoute, Directions::Both),
    ("195", Shield::Us, Directions::Both),
    ("195SPGNESSE", Shield::Us, Directions::Both),
    ("197", Shield::Us, Directions::Both),
    ("202", Shield::StateRoute, Directions::Both),
    ("202COREDMND", Shield::StateRoute, Directions::Increase),
    ("203", Shield::StateRoute, Directions::Both),
    ("204", Shield::StateRoute, Directions::Both),
    ("205", Shield::Interstate, Directions::Both),
    ("206", Shield::StateRoute, Directions::Both),
    ("207", Shield::StateRoute, Directions::Both),
    ("211", Shield::StateRoute, Directions::Both),
    ("213", Shield::StateRoute, Directions::Both),
    ("215", Shield::StateRoute, Directions::Both),
    ("221", Shield::StateRoute, Directions::Both),
    ("223", Shield::StateRoute, Directions::Both),
    ("224", Shield::StateRoute, Directions::Both),
    ("225", Shield::StateRoute, Directions::Both),
    ("231", Shield::StateRoute, Directions::Both),
    ("240", Shield::StateRoute, Directions::Both),
    ("241", Shield::StateRoute, Directions::Both),
    ("243", Shield::StateRoute, Directions::Both),
    ("260", Shield::StateRoute, Directions::Both),
    ("261", Shield::StateRoute, Directions::Both),
    ("262", Shield::StateRoute, Directions::Both),
    ("263", Shield::StateRoute, Directions::Both),
    ("270", Shield::StateRoute, Directions::Both),
    ("270COPULLMN", Shield::StateRoute, Directions::Increase),
    ("271", Shield::StateRoute, Directions::Both),
    ("272", Shield::StateRoute, Directions::Both),
    ("274", Shield::StateRoute, Directions::Both),
    ("278", Shield::StateRoute, Directions::Both),
    ("281", Shield::StateRoute, Directions::Both),
    ("281SPBURKE", Shield::StateRoute, Directions::Both),
    ("282", Shield::StateRoute, Directions::Both),
    ("283", Shield::StateRoute, Directions::Both),
    ("285", Shield::StateRoute, Directions::Both),
    ("285COWENTCH", Shield::StateRoute, Directions::Both),
    ("290", Shield::StateRoute, Directions::Both),
    ("291", Shield::StateRoute, Directions::Both),
    ("292", Shield::StateRoute, Directions::Both),
    ("300", Shield::StateRoute, Directions::Both),
    ("302", Shield::StateRoute, Directions::Both),
    ("302SPPURDY", Shield::StateRoute, Directions::Both),
    ("303", Shield::StateRoute, Directions::Both),
    ("304", Shield::StateRoute, Directions::Both),
    ("304COTUNNEL", Shield::StateRoute, Directions::Increase),
    ("305", Shield::StateRoute, Directions::Both),
    ("307", Shield::StateRoute, Directions::Both),
    ("308", Shield::StateRoute, Directions::Both),
    ("310", Shield::StateRoute, Directions::Both),
    ("395", Shield::Us, Directions::Both),
    ("395SPNSC", Shield::Us, Directions::Both),
    ("397", Shield::StateRoute, Directions::Both),
    ("401", Shield::StateRoute, Directions::Both),
    ("405", Shield::Interstate, Directions::Both),
    ("405HI01093", Shield::Interstate, Directions::Increase),
    ("409", Shield::StateRoute, Directions::Both),
    ("410", Shield::StateRoute, Directions::Both),
    ("411", Shield::StateRoute, Directions::Both),
    ("432", Shield::StateRoute, Directions::Both),
    ("433", Shield::StateRoute, Directions::Both),
    ("500", Shield::StateRoute, Directions::Both),
    ("501", Shield::StateRoute, Directions::Both),
    ("501COVANCVR", Shield::StateRoute, Directions::Increase),
    ("502", Shield::StateRoute, Directions::Both),
    ("503", Shield::StateRoute, Directions::Both),
    ("503SPCOUGAR", Shield::StateRoute, Directions::Both),
    ("504", Shield::StateRoute, Directions::Both),
    ("504SPOLD504", Shield::StateRoute, Directions::Both),
    ("505", Shield::StateRoute, Directions::Both),
    ("506", Shield::StateRoute, Directions::Both),
    ("507", Shield::StateRoute, Directions::Both),
    ("507COPEARL", Shield::StateRoute, Directions::Increase),
    ("508", Shield::StateRoute, Directions::Both),
    ("509", Shield::StateRoute, Directions::Both),
    ("510", Shield::StateRoute, Directions::Both),
    ("510SPYELMLP", Shield::StateRoute, Directions::Both),
    ("512", Shield::StateRoute, Directions::Both),
    ("513", Shield::StateRoute, Directions::Both),
    ("515", Shield::StateRoute, Directions::Both),
    ("516", Shield::StateRoute, Directions::Both),
    ("518", Shield::StateRoute, Directions::Both),
    ("519", Shield::StateRoute, Directions::Both),
    ("520", Shield::StateRoute, Directions::Both),
    ("522", Shield::StateRoute, Directions::Both),
    ("523", Shield::StateRoute, Directions::Both),
    ("524", Shield::StateRoute, Directions::Both),
    ("524SP3RDAVE", Shield::StateRoute, Directions::Both),
    ("524SPCEDRWY", Shield::StateRoute, Directions::Both),
    ("525", Shield::StateRoute, Directions::Both),
    ("525SPPAINE", Shield::StateRoute, Directions::Both),
    ("526", Shield::StateRoute, Directions::Both),
    ("527", Shield::StateRoute, Directions::Both),
    ("528", Shield::StateRoute, Directions::Both),
    ("529", Shield::StateRoute, Directions::Both),
    ("529SPEVERET", Shield::StateRoute, Directions::Both),
    ("530", Shield::StateRoute, Directions::Both),
    ("531", Shield::StateRoute, Directions::Both),
    ("532", Shield::StateRoute, Directions::Both),
    ("534", Shield::StateRoute, Directions::Both),
    ("536", Shield::StateRoute, Directions::Both),
    ("538", Shield::StateRoute, Directions::Both),
    ("539", Shield::StateRoute, Directions::Both),
    ("539COLYNDEN", Shield::StateRoute, Directions::Both),
    ("539SPLYNDEN", Shield::StateRoute, Directions::Both),
    ("542", Shield::StateRoute, Directions::Both),
    ("542COMTBAKR", Shield::StateRoute, Directions::Increase),
    ("543", Shield::StateRoute, Directions::Both),
    ("544", Shield::StateRoute, Directions::Both),
    ("546", Shield::StateRoute, Directions::Both),
    ("547", Shield::StateRoute, Directions::Both),
    ("548", Shield::StateRoute, Directions::Both),
    ("599", Shield::StateRoute, Directions::Both),
    ("702", Shield::StateRoute, Directions::Both),
    ("704", Shield::StateRoute, Directions::Both),
    ("705", Shield::Interstate, Directions::Both),
    ("706", Shield::StateRoute, Directions::Both),
    ("730", Shield::Us, Directions::Both),
    ("730SPWALULA", Shield::Us, Directions::Both),
    ("821", Shield::StateRoute, Directions::Both),
    ("823", Shield::StateRoute, Directions::Both),
    ("900", Shield::StateRoute, Directions::Both),
    ("900CO2NDST", Shield::StateRoute, Directions::Increase),
    ("902", Shield::StateRoute, Directions::Both),
    ("903", Shield::StateRoute, Directions::Both),
    ("903SPCLEELM", Shield::StateRoute, Directions::Both),
    ("904", Shield::StateRoute, Directions::Both),
    ("906", Shield::StateRoute, Directions::Both),
    ("906SPHYAK", Shield::StateRoute, Directions::Both),
    ("970", Shield::StateRoute, Directions::Both),
    ("971", Shield::StateRoute, Directions::Both),
];

/// Iterate over every known route.
pub fn all() -> impl Iterator<Item = RouteInfo> {
    ROUTES.iter().map(|&(id, shield, directions)| RouteInfo {
        id,
        shield,
        directions,
    })
}

/// Find a known route by its exact identifier.
///
/// # Examples
///
/// ```
/// use wsdot_route::domain::{known_routes, Shield};
///
/// let info = known_routes::lookup("012COABERDN").unwrap();
/// assert_eq!(info.shield(), Shield::Us);
/// assert!(info.is_increase());
/// assert!(!info.is_decrease());
///
/// assert!(known_routes::lookup("001").is_none());
/// ```
pub fn lookup(route_id: &str) -> Option<RouteInfo> {
    all().find(|info| info.id == route_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shield;

    #[test]
    fn lookup_mainline() {
        let info = lookup("005").unwrap();
        assert_eq!(info.id(), "005");
        assert_eq!(info.shield(), Shield::Interstate);
        assert_eq!(info.directions(), Directions::Both);
        assert!(info.is_increase());
        assert!(info.is_decrease());
        assert!(info.is_both());
    }

    #[test]
    fn lookup_one_way_couplet() {
        let info = lookup("099COVIADCT").unwrap();
        assert!(info.is_increase());
        assert!(!info.is_decrease());
        assert!(!info.is_both());
    }

    #[test]
    fn lookup_missing() {
        assert!(lookup("").is_none());
        assert!(lookup("5").is_none());
        assert!(lookup("005R109958").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = all().map(|info| info.id()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn shields_agree_with_shield_table() {
        for info in all() {
            let classified = shield::classify_str(info.id()).unwrap();
            assert_eq!(classified, Some(info.shield()), "{}", info.id());
        }
    }
}
