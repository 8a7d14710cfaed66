//! Regular expression construction for route identifiers.
//!
//! Patterns are assembled from [`PatternFragment`]s, which never carry
//! `^`/`$` anchors. A fragment can be extended (a suffix group appended) or
//! embedded in a larger fragment, and is only anchored when compiled.
//!
//! The RRT alternation is generated from the catalog rather than written by
//! hand. It is kept compact in two ways:
//!
//! - codes covered by the ramp letters (`P1`..`S9`, `PU`..) collapse into a
//!   single `[PQRS][0-9U]` class
//! - remaining codes are grouped by first letter (`C[DIO]`, `U[1-9CU]`)

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{RouteError, rrt};

/// Maximum length of an RRQ.
const RRQ_MAX_LEN: usize = 6;

/// A regular expression fragment with no anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFragment(String);

impl PatternFragment {
    /// Wrap regex source that is known to carry no anchors.
    pub(crate) fn from_source(source: String) -> Self {
        Self(source)
    }

    /// The fragment's regex source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compile the fragment as a whole-string pattern.
    pub fn to_regex(&self) -> Result<Regex, RouteError> {
        Regex::new(&format!("^(?:{})$", self.0)).map_err(|e| RouteError::config(e.to_string()))
    }

    fn has_suffix(&self) -> bool {
        self.0.contains("(?P<suffix>")
    }
}

impl fmt::Display for PatternFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an appended suffix must be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixPresence {
    #[default]
    Optional,
    Required,
}

/// How strictly the RRT of an identifier is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grammar {
    /// Only codes from an [`RrtVocabulary`].
    #[default]
    Strict,
    /// Any two capital letters or digits 1-9.
    Relaxed,
}

/// The RRT codes a route identifier pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrtVocabulary {
    /// Two-character RRT codes matched literally.
    pub codes: Vec<String>,

    /// Letters that start a ramp RRT. Any of these followed by a digit or
    /// `U` is accepted, whether or not it appears in `codes`.
    pub ramp_letters: Vec<char>,
}

impl RrtVocabulary {
    /// Create a vocabulary from explicit codes and ramp letters.
    pub fn new(codes: Vec<String>, ramp_letters: Vec<char>) -> Self {
        Self {
            codes,
            ramp_letters,
        }
    }

    /// Whether this is the catalog's own vocabulary.
    pub fn is_default(&self) -> bool {
        *self == *DEFAULT_VOCABULARY
    }

    /// Whether a code is covered by the ramp letter class.
    pub fn is_ramp_code(&self, code: &str) -> bool {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(second), None) => {
                self.ramp_letters.contains(&letter) && (second.is_ascii_digit() || second == 'U')
            }
            _ => false,
        }
    }
}

impl Default for RrtVocabulary {
    fn default() -> Self {
        DEFAULT_VOCABULARY.clone()
    }
}

static DEFAULT_VOCABULARY: LazyLock<RrtVocabulary> = LazyLock::new(|| RrtVocabulary {
    codes: rrt::catalog()
        .iter()
        .map(|entry| entry.code().to_string())
        .collect(),
    ramp_letters: rrt::DEFAULT_RAMP_LETTERS.to_vec(),
});

/// Fragment matching a route identifier with the catalog's vocabulary.
pub static ROUTE_ID_FRAGMENT: LazyLock<PatternFragment> =
    LazyLock::new(|| route_id_fragment(&DEFAULT_VOCABULARY).unwrap());

/// Fragment matching a route identifier with any two-character RRT.
pub static RELAXED_ROUTE_ID_FRAGMENT: LazyLock<PatternFragment> = LazyLock::new(|| {
    PatternFragment::from_source(format!(
        "(?P<mainline>[0-9]{{3}})(?:(?P<rrt>[A-Z1-9]{{2}})(?P<rrq>[A-Z0-9]{{0,{RRQ_MAX_LEN}}}))?"
    ))
});

/// Render a set of characters as a class body, collapsing `1`-`9` to a range.
fn class_body(chars: &BTreeSet<char>) -> String {
    let joined: String = chars.iter().collect();
    joined.replace("123456789", "1-9")
}

/// Render `letter` followed by any of `seconds` as a regex alternative.
fn grouped_alternative(letter: char, seconds: &BTreeSet<char>) -> String {
    if seconds.len() == 1 {
        format!("{letter}{}", class_body(seconds))
    } else {
        format!("{letter}[{}]", class_body(seconds))
    }
}

fn validate_vocabulary(vocabulary: &RrtVocabulary) -> Result<(), RouteError> {
    for code in &vocabulary.codes {
        if code.chars().count() != 2 {
            return Err(RouteError::config(format!(
                "RRT codes must be exactly two characters: {code:?}"
            )));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RouteError::config(format!(
                "RRT codes must be ASCII letters or digits: {code:?}"
            )));
        }
    }
    if let Some(bad) = vocabulary
        .ramp_letters
        .iter()
        .find(|c| !c.is_ascii_alphanumeric())
    {
        return Err(RouteError::config(format!(
            "ramp letters must be ASCII letters or digits: {bad:?}"
        )));
    }
    if vocabulary.codes.is_empty() && vocabulary.ramp_letters.is_empty() {
        return Err(RouteError::config("no RRT codes or ramp letters were provided"));
    }
    Ok(())
}

/// Build the fragment matching a route identifier.
///
/// Captures `mainline` (three digits) and, when present, `rrt` and `rrq`
/// (up to six capital letters or digits).
///
/// # Examples
///
/// ```
/// use wsdot_route::pattern::{route_id_fragment, RrtVocabulary};
///
/// let vocabulary = RrtVocabulary::new(vec!["SP".into(), "CO".into()], vec!['P', 'Q']);
/// let fragment = route_id_fragment(&vocabulary).unwrap();
/// assert_eq!(
///     fragment.as_str(),
///     "(?P<mainline>[0-9]{3})(?:(?P<rrt>SP|CO|[PQ][0-9U])(?P<rrq>[A-Z0-9]{0,6}))?"
/// );
/// ```
pub fn route_id_fragment(vocabulary: &RrtVocabulary) -> Result<PatternFragment, RouteError> {
    validate_vocabulary(vocabulary)?;

    // Group literal codes by first letter, keeping first-seen letter order.
    let mut groups: Vec<(char, BTreeSet<char>)> = Vec::new();
    for code in &vocabulary.codes {
        if vocabulary.is_ramp_code(code) {
            continue;
        }
        let mut chars = code.chars();
        let (Some(letter), Some(second)) = (chars.next(), chars.next()) else {
            continue;
        };
        match groups.iter_mut().find(|(l, _)| *l == letter) {
            Some((_, seconds)) => {
                seconds.insert(second);
            }
            None => groups.push((letter, BTreeSet::from([second]))),
        }
    }

    let mut alternatives: Vec<String> = groups
        .iter()
        .map(|(letter, seconds)| grouped_alternative(*letter, seconds))
        .collect();

    let mut ramp_letters: Vec<char> = Vec::new();
    for letter in &vocabulary.ramp_letters {
        if !ramp_letters.contains(letter) {
            ramp_letters.push(*letter);
        }
    }
    if !ramp_letters.is_empty() {
        let letters: String = ramp_letters.iter().collect();
        alternatives.push(format!("[{letters}][0-9U]"));
    }

    let fragment = PatternFragment::from_source(format!(
        "(?P<mainline>[0-9]{{3}})(?:(?P<rrt>{})(?P<rrq>[A-Z0-9]{{0,{RRQ_MAX_LEN}}}))?",
        alternatives.join("|")
    ));
    debug!(pattern = %fragment, "built route identifier pattern");
    Ok(fragment)
}

/// Return a copy of `fragment` with a one-character `suffix` group appended.
///
/// Every entry of `alphabet` must be exactly one character, and the alphabet
/// must not be empty.
pub fn with_suffix(
    fragment: &PatternFragment,
    alphabet: &[String],
    presence: SuffixPresence,
) -> Result<PatternFragment, RouteError> {
    if alphabet.is_empty() {
        return Err(RouteError::config("no suffixes were provided"));
    }
    if let Some(bad) = alphabet.iter().find(|s| s.chars().count() != 1) {
        return Err(RouteError::config(format!(
            "all suffixes must be exactly one character: {bad:?}"
        )));
    }
    if fragment.has_suffix() {
        return Err(RouteError::config("pattern already has a suffix group"));
    }

    let class: String = alphabet.iter().map(|s| regex::escape(s)).collect();
    let quantifier = match presence {
        SuffixPresence::Optional => "?",
        SuffixPresence::Required => "",
    };
    Ok(PatternFragment::from_source(format!(
        "{fragment}(?P<suffix>[{class}]){quantifier}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_fragment_is_compact() {
        let source = ROUTE_ID_FRAGMENT.as_str();
        assert!(source.contains("C[DIO]"), "{source}");
        assert!(source.contains("F[DIST]"), "{source}");
        assert!(source.contains("U[1-9CU]"), "{source}");
        assert!(source.contains("[PQRS][0-9U]"), "{source}");
        assert!(!source.contains("P1"), "{source}");
        assert!(!source.contains("S9"), "{source}");
        assert!(!source.contains('^') && !source.contains('$'));
    }

    #[test]
    fn default_fragment_keeps_proposed_route() {
        // PR starts with a ramp letter but is not a ramp
        let re = ROUTE_ID_FRAGMENT.to_regex().unwrap();
        let caps = re.captures("020PRX").unwrap();
        assert_eq!(&caps["rrt"], "PR");
        assert_eq!(&caps["rrq"], "X");
    }

    #[test]
    fn default_fragment_captures() {
        let re = ROUTE_ID_FRAGMENT.to_regex().unwrap();

        let caps = re.captures("101COABERDN").unwrap();
        assert_eq!(&caps["mainline"], "101");
        assert_eq!(&caps["rrt"], "CO");
        assert_eq!(&caps["rrq"], "ABERDN");

        let caps = re.captures("005R109958").unwrap();
        assert_eq!(&caps["rrt"], "R1");
        assert_eq!(&caps["rrq"], "09958");

        let caps = re.captures("005").unwrap();
        assert!(caps.name("rrt").is_none());

        assert!(!re.is_match("005AAA"));
        assert!(!re.is_match("05"));
        assert!(!re.is_match("005COABCDEFG"));
        assert!(!re.is_match("x005"));
    }

    #[test]
    fn custom_vocabulary() {
        let vocabulary = RrtVocabulary::new(codes(&["XX", "XY", "P1"]), vec!['P']);
        let fragment = route_id_fragment(&vocabulary).unwrap();
        assert_eq!(
            fragment.as_str(),
            "(?P<mainline>[0-9]{3})(?:(?P<rrt>X[XY]|[P][0-9U])(?P<rrq>[A-Z0-9]{0,6}))?"
        );
        let re = fragment.to_regex().unwrap();
        assert!(re.is_match("005XY123"));
        assert!(re.is_match("005P7"));
        assert!(!re.is_match("005CO"));
    }

    #[test]
    fn no_ramp_letters_keeps_literal_ramps() {
        let ramps = codes(&["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9"]);
        let vocabulary = RrtVocabulary::new(ramps, vec![]);
        let fragment = route_id_fragment(&vocabulary).unwrap();
        assert!(fragment.as_str().contains("(?P<rrt>P[1-9])"), "{fragment}");
    }

    #[test]
    fn invalid_vocabulary() {
        let too_long = RrtVocabulary::new(codes(&["ABC"]), vec![]);
        assert!(matches!(route_id_fragment(&too_long), Err(RouteError::Config { .. })));

        let metachar = RrtVocabulary::new(codes(&["A|"]), vec![]);
        assert!(matches!(route_id_fragment(&metachar), Err(RouteError::Config { .. })));

        let bad_letter = RrtVocabulary::new(vec![], vec!['-']);
        assert!(matches!(route_id_fragment(&bad_letter), Err(RouteError::Config { .. })));

        let empty = RrtVocabulary::new(vec![], vec![]);
        assert!(matches!(route_id_fragment(&empty), Err(RouteError::Config { .. })));
    }

    #[test]
    fn suffix_appended() {
        let fragment =
            with_suffix(&ROUTE_ID_FRAGMENT, &codes(&["d"]), SuffixPresence::Required).unwrap();
        assert!(fragment.as_str().ends_with("(?P<suffix>[d])"));
        let re = fragment.to_regex().unwrap();
        let caps = re.captures("529SPEVERETd").unwrap();
        assert_eq!(&caps["rrq"], "EVERET");
        assert_eq!(&caps["suffix"], "d");
        assert!(!re.is_match("529SPEVERET"));

        let optional =
            with_suffix(&ROUTE_ID_FRAGMENT, &codes(&["d"]), SuffixPresence::Optional).unwrap();
        assert!(optional.as_str().ends_with("(?P<suffix>[d])?"));
        assert!(optional.to_regex().unwrap().is_match("529SPEVERET"));
    }

    #[test]
    fn suffix_is_escaped() {
        let fragment =
            with_suffix(&ROUTE_ID_FRAGMENT, &codes(&["-", "]"]), SuffixPresence::Required).unwrap();
        let re = fragment.to_regex().unwrap();
        assert!(re.is_match("005-"));
        assert!(re.is_match("005]"));
        assert!(!re.is_match("005d"));
    }

    #[test]
    fn suffix_configuration_errors() {
        let err = with_suffix(&ROUTE_ID_FRAGMENT, &[], SuffixPresence::Optional).unwrap_err();
        assert!(matches!(err, RouteError::Config { .. }));

        let err =
            with_suffix(&ROUTE_ID_FRAGMENT, &codes(&["dd"]), SuffixPresence::Optional).unwrap_err();
        assert!(matches!(err, RouteError::Config { .. }));

        let err =
            with_suffix(&ROUTE_ID_FRAGMENT, &codes(&[""]), SuffixPresence::Optional).unwrap_err();
        assert!(matches!(err, RouteError::Config { .. }));

        let once =
            with_suffix(&ROUTE_ID_FRAGMENT, &codes(&["d"]), SuffixPresence::Optional).unwrap();
        let err = with_suffix(&once, &codes(&["i"]), SuffixPresence::Optional).unwrap_err();
        assert!(matches!(err, RouteError::Config { .. }));
    }

    #[test]
    fn relaxed_fragment_accepts_unknown_rrt() {
        let re = RELAXED_ROUTE_ID_FRAGMENT.to_regex().unwrap();
        let caps = re.captures("005AAA").unwrap();
        assert_eq!(&caps["rrt"], "AA");
        assert_eq!(&caps["rrq"], "A");
        assert!(re.is_match("005"));
        assert!(!re.is_match("005A"));
        assert!(!re.is_match("005A0"));
        assert!(!re.is_match("005AAABCDEFG"));

        let strict = ROUTE_ID_FRAGMENT.to_regex().unwrap();
        assert!(!strict.is_match("005AAA"));
    }

    #[test]
    fn relaxed_fragment_takes_suffix() {
        let fragment =
            with_suffix(&RELAXED_ROUTE_ID_FRAGMENT, &codes(&["d"]), SuffixPresence::Optional)
                .unwrap();
        let re = fragment.to_regex().unwrap();
        let caps = re.captures("005ZZTOPd").unwrap();
        assert_eq!(&caps["rrt"], "ZZ");
        assert_eq!(&caps["rrq"], "TOP");
        assert_eq!(&caps["suffix"], "d");
    }

    #[test]
    fn default_vocabulary() {
        assert!(RrtVocabulary::default().is_default());
        assert!(!RrtVocabulary::new(codes(&["SP"]), vec![]).is_default());
    }
}
