//! Decomposition of a route identifier into its parts.

use std::fmt;

use regex::Regex;
use tracing::trace;

use crate::config::ParseOptions;
use crate::domain::{FormatError, RouteError};

/// The parts of a route identifier.
///
/// `mainline` is always three digits. `rrt` and `rrq` are absent for a
/// mainline identifier; an RRQ never appears without an RRT, but an RRT
/// may appear with an empty RRQ (`016AR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteParts {
    mainline: String,
    rrt: Option<String>,
    rrq: Option<String>,
    suffix: Option<char>,
}

impl RouteParts {
    /// The three-digit mainline route number.
    pub fn mainline(&self) -> &str {
        &self.mainline
    }

    /// Related Roadway Type code.
    pub fn rrt(&self) -> Option<&str> {
        self.rrt.as_deref()
    }

    /// Related Roadway Qualifier.
    pub fn rrq(&self) -> Option<&str> {
        self.rrq.as_deref()
    }

    pub fn suffix(&self) -> Option<char> {
        self.suffix
    }

    fn from_match(re: &Regex, route_id: &str) -> Option<Self> {
        let caps = re.captures(route_id)?;
        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };
        Some(Self {
            mainline: group("mainline")?.to_string(),
            rrt: group("rrt").map(str::to_string),
            rrq: group("rrq").map(str::to_string),
            suffix: group("suffix").and_then(|s| s.chars().next()),
        })
    }
}

impl fmt::Display for RouteParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mainline)?;
        if let Some(rrt) = &self.rrt {
            f.write_str(rrt)?;
        }
        if let Some(rrq) = &self.rrq {
            f.write_str(rrq)?;
        }
        if let Some(suffix) = self.suffix {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

/// Split a route identifier into its parts, treating a mismatch as an error.
///
/// # Errors
///
/// - [`RouteError::EmptyInput`] if `route_id` is empty
/// - [`RouteError::Config`] if `options` describe an unusable grammar
/// - [`RouteError::Format`] if `route_id` does not match the grammar
///
/// # Examples
///
/// ```
/// use wsdot_route::{parse_route_parts, ParseOptions};
///
/// let parts = parse_route_parts("101COABERDN", &ParseOptions::default()).unwrap();
/// assert_eq!(parts.mainline(), "101");
/// assert_eq!(parts.rrt(), Some("CO"));
/// assert_eq!(parts.rrq(), Some("ABERDN"));
/// assert_eq!(parts.suffix(), None);
///
/// assert!(parse_route_parts("005AAA", &ParseOptions::default()).is_err());
/// ```
pub fn parse_route_parts(route_id: &str, options: &ParseOptions) -> Result<RouteParts, RouteError> {
    let re = checked_regex(route_id, options)?;
    RouteParts::from_match(&re, route_id).ok_or_else(|| {
        trace!(input = route_id, pattern = re.as_str(), "route identifier did not match");
        FormatError::new(route_id, re.as_str()).into()
    })
}

/// Split a route identifier into its parts, returning `Ok(None)` on a
/// mismatch.
///
/// Empty input and bad options are still errors.
///
/// # Examples
///
/// ```
/// use wsdot_route::{try_parse_route_parts, ParseOptions};
///
/// let options = ParseOptions::default();
/// assert!(try_parse_route_parts("005", &options).unwrap().is_some());
/// assert!(try_parse_route_parts("005AAA", &options).unwrap().is_none());
/// assert!(try_parse_route_parts("", &options).is_err());
/// ```
pub fn try_parse_route_parts(
    route_id: &str,
    options: &ParseOptions,
) -> Result<Option<RouteParts>, RouteError> {
    let re = checked_regex(route_id, options)?;
    let parts = RouteParts::from_match(&re, route_id);
    if parts.is_none() {
        trace!(input = route_id, "route identifier did not match; returning none");
    }
    Ok(parts)
}

fn checked_regex(route_id: &str, options: &ParseOptions) -> Result<Regex, RouteError> {
    if route_id.is_empty() {
        return Err(RouteError::EmptyInput);
    }
    options.regex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{RrtVocabulary, SuffixPresence};

    fn parse(route_id: &str) -> RouteParts {
        parse_route_parts(route_id, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn mainline() {
        let parts = parse("005");
        assert_eq!(parts.mainline(), "005");
        assert_eq!(parts.rrt(), None);
        assert_eq!(parts.rrq(), None);
        assert_eq!(parts.suffix(), None);
    }

    #[test]
    fn rrt_and_rrq() {
        let parts = parse("101COABERDN");
        assert_eq!(parts.mainline(), "101");
        assert_eq!(parts.rrt(), Some("CO"));
        assert_eq!(parts.rrq(), Some("ABERDN"));
    }

    #[test]
    fn ramp() {
        let parts = parse("005R109958");
        assert_eq!(parts.rrt(), Some("R1"));
        assert_eq!(parts.rrq(), Some("09958"));
    }

    #[test]
    fn rrt_without_rrq() {
        let parts = parse("016AR");
        assert_eq!(parts.rrt(), Some("AR"));
        assert_eq!(parts.rrq(), None);
    }

    #[test]
    fn rejects_unknown_rrt() {
        let err = parse_route_parts("005AAA", &ParseOptions::default()).unwrap_err();
        let format = err.as_format().unwrap();
        assert_eq!(format.input(), "005AAA");
        assert!(format.expected().starts_with('^'));
    }

    #[test]
    fn relaxed_grammar_accepts_unknown_rrt() {
        let parts = parse_route_parts("005AAA", &ParseOptions::default().relaxed()).unwrap();
        assert_eq!(parts.mainline(), "005");
        assert_eq!(parts.rrt(), Some("AA"));
        assert_eq!(parts.rrq(), Some("A"));

        let options = ParseOptions::roads_and_highways().relaxed();
        let parts = parse_route_parts("005AAAi", &options).unwrap();
        assert_eq!(parts.suffix(), Some('i'));
        assert!(parse_route_parts("005AAA", &options).is_err());
    }

    #[test]
    fn rejects_malformed() {
        let options = ParseOptions::default();
        for bad in ["5", "05", "0055", "I-5", "005co", "005SPTOOLONGX", " 005"] {
            assert!(matches!(
                parse_route_parts(bad, &options),
                Err(RouteError::Format(_))
            ), "{bad}");
        }
    }

    #[test]
    fn empty_input_is_not_a_format_error() {
        assert_eq!(
            parse_route_parts("", &ParseOptions::default()),
            Err(RouteError::EmptyInput)
        );
        assert_eq!(
            try_parse_route_parts("", &ParseOptions::default()),
            Err(RouteError::EmptyInput)
        );
    }

    #[test]
    fn required_suffix() {
        let options = ParseOptions::new(&["d"], SuffixPresence::Required);
        let parts = parse_route_parts("529SPEVERETd", &options).unwrap();
        assert_eq!(parts.rrq(), Some("EVERET"));
        assert_eq!(parts.suffix(), Some('d'));
        assert!(parse_route_parts("529SPEVERET", &options).is_err());
    }

    #[test]
    fn suffix_outside_alphabet() {
        let options = ParseOptions::new(&["i"], SuffixPresence::Required);
        assert!(parse_route_parts("529SPEVERETd", &options).is_err());
        assert!(parse_route_parts("529SPEVERETd", &ParseOptions::default()).is_err());
    }

    #[test]
    fn optional_suffix_absent() {
        let parts = parse_route_parts("005Q516479", &ParseOptions::wapr()).unwrap();
        assert_eq!(parts.rrt(), Some("Q5"));
        assert_eq!(parts.rrq(), Some("16479"));
        assert_eq!(parts.suffix(), None);
    }

    #[test]
    fn config_errors_surface_from_try_parse() {
        let options = ParseOptions::new(&[], SuffixPresence::Optional)
            .with_vocabulary(RrtVocabulary::new(vec!["TOO".into()], vec![]));
        assert!(matches!(
            try_parse_route_parts("005", &options),
            Err(RouteError::Config { .. })
        ));
    }

    #[test]
    fn display_reassembles() {
        assert_eq!(parse("101COABERDN").to_string(), "101COABERDN");
        let parts = parse_route_parts("005P101234i", &ParseOptions::roads_and_highways()).unwrap();
        assert_eq!(parts.to_string(), "005P101234i");
    }
}
