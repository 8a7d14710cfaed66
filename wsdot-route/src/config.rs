//! Route identifier parsing configuration.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::RouteError;
use crate::pattern::{
    Grammar, RELAXED_ROUTE_ID_FRAGMENT, ROUTE_ID_FRAGMENT, RrtVocabulary, SuffixPresence,
    route_id_fragment, with_suffix,
};

/// Suffix marking the decreasing direction of travel.
pub const DECREASE_SUFFIX: char = 'd';

/// Suffix marking a ramp in Roads & Highways route identifiers.
pub const RAMP_SUFFIX: char = 'r';

const WAPR_SUFFIXES: [&str; 1] = ["d"];
const ROADS_AND_HIGHWAYS_SUFFIXES: [&str; 3] = ["i", "d", "r"];

static ROUTE_ID_RE: LazyLock<Regex> = LazyLock::new(|| ROUTE_ID_FRAGMENT.to_regex().unwrap());

static WAPR_RE: LazyLock<Regex> = LazyLock::new(|| ParseOptions::wapr().build_regex().unwrap());

static ROADS_AND_HIGHWAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| ParseOptions::roads_and_highways().build_regex().unwrap());

/// Options controlling how a route identifier is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Characters accepted as a one-character suffix after the identifier.
    /// Empty means no suffix is accepted.
    pub suffix_alphabet: Vec<String>,

    /// Whether the suffix may be left off.
    /// Ignored when `suffix_alphabet` is empty.
    pub suffix_presence: SuffixPresence,

    /// Suffix that marks the route as a ramp, if the context has one.
    pub ramp_suffix: Option<char>,

    /// RRT codes and ramp letters the identifier may use.
    /// The relaxed grammar still consults it for ramp detection.
    pub vocabulary: RrtVocabulary,

    /// Whether the RRT must come from `vocabulary`.
    pub grammar: Grammar,
}

impl ParseOptions {
    /// Create options accepting a suffix from `suffix_alphabet`.
    pub fn new(suffix_alphabet: &[&str], suffix_presence: SuffixPresence) -> Self {
        Self {
            suffix_alphabet: suffix_alphabet.iter().map(|s| s.to_string()).collect(),
            suffix_presence,
            ..Self::default()
        }
    }

    /// WA Public Roads: an optional `d` marks the decreasing direction.
    pub fn wapr() -> Self {
        Self::new(&WAPR_SUFFIXES, SuffixPresence::Optional)
    }

    /// Roads & Highways: a mandatory `i`, `d` or `r` (increase, decrease,
    /// ramp) follows every identifier.
    pub fn roads_and_highways() -> Self {
        Self {
            ramp_suffix: Some(RAMP_SUFFIX),
            ..Self::new(&ROADS_AND_HIGHWAYS_SUFFIXES, SuffixPresence::Required)
        }
    }

    /// Replace the RRT vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: RrtVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Accept any two-character RRT, not just known codes.
    pub fn relaxed(mut self) -> Self {
        self.grammar = Grammar::Relaxed;
        self
    }

    /// Whether a suffix is part of the grammar at all.
    pub fn accepts_suffix(&self) -> bool {
        !self.suffix_alphabet.is_empty()
    }

    /// The compiled, anchored pattern for these options.
    ///
    /// The default, WAPR and Roads & Highways configurations share patterns
    /// compiled once per process; other configurations are compiled on
    /// each call.
    pub fn regex(&self) -> Result<Regex, RouteError> {
        if self.grammar == Grammar::Strict && self.vocabulary.is_default() {
            if !self.accepts_suffix() {
                return Ok(ROUTE_ID_RE.clone());
            }
            if self.suffix_matches(&WAPR_SUFFIXES, SuffixPresence::Optional) {
                return Ok(WAPR_RE.clone());
            }
            if self.suffix_matches(&ROADS_AND_HIGHWAYS_SUFFIXES, SuffixPresence::Required) {
                return Ok(ROADS_AND_HIGHWAYS_RE.clone());
            }
        }
        self.build_regex()
    }

    fn suffix_matches(&self, alphabet: &[&str], presence: SuffixPresence) -> bool {
        self.suffix_presence == presence && self.suffix_alphabet.iter().eq(alphabet.iter())
    }

    fn build_regex(&self) -> Result<Regex, RouteError> {
        let fragment = match self.grammar {
            Grammar::Strict => route_id_fragment(&self.vocabulary)?,
            Grammar::Relaxed => RELAXED_ROUTE_ID_FRAGMENT.clone(),
        };
        if self.accepts_suffix() {
            with_suffix(&fragment, &self.suffix_alphabet, self.suffix_presence)?.to_regex()
        } else {
            fragment.to_regex()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            suffix_alphabet: Vec::new(),
            suffix_presence: SuffixPresence::Optional,
            ramp_suffix: None,
            vocabulary: RrtVocabulary::default(),
            grammar: Grammar::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = ParseOptions::default();
        assert!(options.suffix_alphabet.is_empty());
        assert_eq!(options.suffix_presence, SuffixPresence::Optional);
        assert_eq!(options.ramp_suffix, None);
        assert!(options.vocabulary.is_default());
        assert!(!options.accepts_suffix());
        assert_eq!(options.grammar, Grammar::Strict);
    }

    #[test]
    fn presets() {
        let wapr = ParseOptions::wapr();
        assert_eq!(wapr.suffix_alphabet, vec!["d".to_string()]);
        assert_eq!(wapr.suffix_presence, SuffixPresence::Optional);
        assert_eq!(wapr.ramp_suffix, None);

        let rh = ParseOptions::roads_and_highways();
        assert_eq!(rh.suffix_alphabet, vec!["i", "d", "r"]);
        assert_eq!(rh.suffix_presence, SuffixPresence::Required);
        assert_eq!(rh.ramp_suffix, Some('r'));
    }

    #[test]
    fn preset_patterns_match_built_patterns() {
        for options in [
            ParseOptions::default(),
            ParseOptions::wapr(),
            ParseOptions::roads_and_highways(),
        ] {
            assert_eq!(
                options.regex().unwrap().as_str(),
                options.build_regex().unwrap().as_str()
            );
        }
    }

    #[test]
    fn custom_suffixes_compile() {
        let options = ParseOptions::new(&["x"], SuffixPresence::Required);
        let re = options.regex().unwrap();
        assert!(re.is_match("005x"));
        assert!(!re.is_match("005"));
    }

    #[test]
    fn invalid_suffixes_are_config_errors() {
        let options = ParseOptions::new(&["dd"], SuffixPresence::Optional);
        assert!(matches!(options.regex(), Err(RouteError::Config { .. })));
    }

    #[test]
    fn with_vocabulary() {
        let vocabulary = RrtVocabulary::new(vec!["ZZ".to_string()], vec![]);
        let options = ParseOptions::default().with_vocabulary(vocabulary.clone());
        assert_eq!(options.vocabulary, vocabulary);
        let re = options.regex().unwrap();
        assert!(re.is_match("005ZZ1"));
        assert!(!re.is_match("005SP1"));
    }

    #[test]
    fn relaxed_grammar() {
        let relaxed = ParseOptions::default().relaxed();
        assert_eq!(relaxed.grammar, Grammar::Relaxed);
        assert!(relaxed.regex().unwrap().is_match("005AAA"));
        assert!(!ParseOptions::default().regex().unwrap().is_match("005AAA"));

        let with_dir = ParseOptions::wapr().relaxed();
        let re = with_dir.regex().unwrap();
        assert!(re.is_match("005AAAd"));
        assert!(re.is_match("005AAA"));
        assert!(!ParseOptions::wapr().regex().unwrap().is_match("005AAAd"));
    }
}
