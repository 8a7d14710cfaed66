//! Route names as published by the Roads & Highways linear referencing
//! service.

use wsdot_route::report::RouteNameReport;
use wsdot_route::{RouteName, parse_route_id_and_milepost};

/// Names that embed compound ramp or couplet codes.
const UNSUPPORTED: &[&str] = &[
    "002R1CN097Adi000000A",
    "005CNLC2RMP1i000000A",
    "005CNLC2RMP2i000000A",
    "005CNLC2RMP3i000000A",
];

const NAMES: &[&str] = &[
    "002i000000A",
    "002d000000A",
    "002R1CN097Adi000000A",
    "005i000000A",
    "005d276620A",
    "005P101234i001234A",
    "005S127661r000000A",
    "005CNLC2RMP1i000000A",
    "005CNLC2RMP2i000000A",
    "005CNLC2RMP3i000000A",
    "005COBROADWi000000A",
    "012SPABERDNi000000A",
    "097ARi000000A",
    "101COABERDNd099958B",
    "104SPKNGSTNi000000A",
    "529SPEVERETi000250A",
];

#[test]
fn sample_names_parse() {
    for &name in NAMES {
        if UNSUPPORTED.contains(&name) {
            assert!(RouteName::parse(name).is_err(), "{name} unexpectedly parsed");
            continue;
        }

        let parsed = RouteName::parse(name).unwrap_or_else(|e| panic!("{name}: {e}"));
        let route = parsed.route();
        assert_eq!(route.mainline(), &name[..3], "{name}");
        assert!(route.suffix().is_some(), "{name}");
        assert!(route.is_decrease().is_some(), "{name}");
        assert!(name.starts_with(&route.to_string()), "{name}");
        assert!(name.ends_with(parsed.milepost().back_char()), "{name}");
    }
}

#[test]
fn ramp_names() {
    let (route, milepost) = parse_route_id_and_milepost("005S127661r000000A").unwrap();
    assert_eq!(route.rrt(), Some("S1"));
    assert_eq!(route.rrq(), Some("27661"));
    assert!(route.is_ramp());
    assert_eq!(route.mainline_connection_mp(), Some(276.61));
    assert_eq!(milepost.value(), 0.0);
}

#[test]
fn reports_serialize() {
    let name = RouteName::parse("012SPABERDNi000000A").unwrap();
    let json = serde_json::to_string(&RouteNameReport::from_route_name(&name)).unwrap();
    assert!(json.contains(r#""shield":"US""#), "{json}");
    assert!(json.contains(r#""rrq_description":"Aberdeen""#), "{json}");
}
