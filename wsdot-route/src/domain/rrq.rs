//! Related Roadway Qualifier (RRQ) catalog.
//!
//! RRQs further identify a specific spur, couplet or ferry route. Many are
//! abbreviated place names; ramp RRQs are usually an encoded milepost and
//! have no catalog entry.

use std::collections::HashMap;
use std::sync::LazyLock;

const PLACES: &[(&str, &str)] = &[
    ("2NDST", "2nd St."),
    ("3RDAVE", "3rd Ave."),
    ("6THST", "6th St."),
    ("ABERDN", "Aberdeen"),
    ("ANACOR", "Anacortes"),
    ("ANACRT", "Anacortes"),
    ("ANAFT2", "ANAFT2"),
    ("AURORA", "Aurora"),
    ("BOONE", "Boone St."),
    ("BREMER", "Bremerton"),
    ("BROWNE", "Browne St."),
    ("BURKE", "Beverly Burke Rd."),
    ("CANBY", "Fort Canby"),
    ("CEDRWY", "Cedar Way"),
    ("CLEELM", "Cle Elem"),
    ("CLINTN", "Clifton"),
    ("COLFAX", "Colfax"),
    ("COUGAR", "Cougar"),
    ("COUPLT", "COUPLT"),
    ("COUPVL", "Coupville"),
    ("CRWNPT", "Crown Point"),
    ("CS0631", "CS0631"),
    ("DIVISN", "Division"),
    ("EAGHBR", "Eagle Harbor"),
    ("EDMOND", "Edmonds"),
    ("EVERET", "Everett"),
    ("FAUNTL", "Fauntleroy"),
    ("FIFE", "Fife"),
    ("FRIDAY", "Friday Harbor"),
    ("GNESSE", "GNESSE"),
    ("GORST", "Gorst"),
    ("HERON", "Heron St."),
    ("HQUIAM", "Hoquiam"),
    ("HYAK", "Hyak Dr."),
    ("KELRNO", "Keller North"),
    ("KELRSO", "Keller South"),
    ("KELSO", "Kelso"),
    ("KINFT1", "KINFT1"),
    ("KINGST", "Kingston"),
    ("KNGSTN", "Kingston"),
    ("LEAHY", "Leahy"),
    ("LONNGR", "LONNGR"),
    ("LOPEZ", "Lopez"),
    ("MARYHL", "Maryhill"),
    ("MKLTEO", "Mukilteo"),
    ("MONROE", "Monroe"),
    ("MORA", "Mora Rd."),
    ("MTBAKR", "Mt. Baker"),
    ("MUKILT", "Mukilteo"),
    ("NEWPRT", "Newport"),
    ("NSC", "NSC"),
    ("OLD504", "Old 504"),
    ("OMAK", "Omak"),
    ("ORCAS", "Orcas Island"),
    ("ORGBEG", "ORGBEG"),
    ("ORGMID", "ORGMID"),
    ("ORGSPR", "ORGSPR"),
    ("ORONDO", "Orondo"),
    ("OSO", "Oso"),
    ("PAINE", "Paine"),
    ("PEARL", "Pearl St."),
    ("PRTANG", "Port Angeles"),
    ("PTDEFI", "Pt. Defiance"),
    ("PTTFT2", "PTTFT2"),
    ("PTTOWN", "Port Townsend"),
    ("PULLMN", "Pullman"),
    ("PURDY", "Purdy Ln."),
    ("REDMND", "Redmond"),
    ("SEATAC", "SeaTac"),
    ("SEATTL", "Seattle"),
    ("SHAW", "Shaw Island"),
    ("SIDNEY", "Sidney"),
    ("SLVRDL", "Silverdale"),
    ("SOUTHW", "Southworth"),
    ("SUMAS", "Sumas"),
    ("TAHLEQ", "Tahlequa"),
    ("TUNNEL", "Tunnel"),
    ("UNDRWD", "Underwood"),
    ("VANCVR", "Vancouver"),
    ("VASHON", "Vashon"),
    ("VIADCT", "Alaskan Way Viaduct"),
    ("WALULA", "Wallula Junction"),
    ("WENTCH", "Wenatchee"),
    ("WESTPT", "Westport"),
    ("WINSLO", "Winslow"),
    ("XBASE", "XBASE"),
    ("YELMLP", "Yelm Loop"),
];

static LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PLACES.iter().copied().collect());

/// Describe a known RRQ code.
///
/// # Examples
///
/// ```
/// use wsdot_route::domain::rrq;
///
/// assert_eq!(rrq::describe("ABERDN"), Some("Aberdeen"));
/// assert_eq!(rrq::describe("09958"), None);
/// ```
pub fn describe(code: &str) -> Option<&'static str> {
    LOOKUP.get(code).copied()
}

/// Enumerate all known `(code, description)` pairs.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    PLACES.iter().copied()
}
