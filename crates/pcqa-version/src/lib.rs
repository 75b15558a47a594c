use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("version string is empty")]
    Empty,
    #[error("expected a numeric version component")]
    MissingComponent,
    #[error("unknown version suffix")]
    UnknownSuffix,
    #[error("expected a revision number after '-r'")]
    MissingRevision,
    #[error("numeric part does not fit into 64 bits")]
    NumberOverflow,
    #[error("unexpected trailing characters")]
    TrailingCharacters,
}

/// Release stage markers, ordered by how they sort between two versions
/// that are otherwise equal. A version without any suffix sorts above
/// `Rc` and below `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SuffixKind {
    Alpha,
    Beta,
    Pre,
    Rc,
    P,
}

impl fmt::Display for SuffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Pre => "pre",
            Self::Rc => "rc",
            Self::P => "p",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Suffix {
    kind: SuffixKind,
    /// A missing number sorts like an explicit zero.
    number: Option<u64>,
}

/// A package version of the form
/// `digits('.'digits)* [a-z]? ('_'stage digits?)* ('-r'digits)?`.
///
/// Numeric components are kept as the digit strings they were written as;
/// components after the first compare fractionally once a leading zero is
/// involved, so `1.01` sorts below `1.1` while `1.090` equals `1.09`.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<String>,
    letter: Option<char>,
    suffixes: Vec<Suffix>,
    revision: Option<u64>,
}

impl Version {
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.unwrap_or(0)
    }
}

/// Whether a string parses under the version grammar.
#[must_use]
pub fn is_pms_form(input: &str) -> bool {
    input.parse::<Version>().is_ok()
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut rest = input;

        let mut components = Vec::new();
        loop {
            let Some(digits) = take_digits(&mut rest) else {
                return Err(VersionError::MissingComponent);
            };
            components.push(digits.to_string());
            match rest.strip_prefix('.') {
                Some(after) => rest = after,
                None => break,
            }
        }

        let mut letter = None;
        if let Some(c) = rest.chars().next().filter(char::is_ascii_lowercase) {
            letter = Some(c);
            rest = &rest[1..];
        }

        let mut suffixes = Vec::new();
        while let Some(after) = rest.strip_prefix('_') {
            rest = after;
            let kind = take_suffix_kind(&mut rest).ok_or(VersionError::UnknownSuffix)?;
            let number = match take_digits(&mut rest) {
                Some(digits) => Some(parse_number(digits)?),
                None => None,
            };
            suffixes.push(Suffix { kind, number });
        }

        let mut revision = None;
        if let Some(after) = rest.strip_prefix("-r") {
            rest = after;
            let Some(digits) = take_digits(&mut rest) else {
                return Err(VersionError::MissingRevision);
            };
            revision = Some(parse_number(digits)?);
        }

        if !rest.is_empty() {
            return Err(VersionError::TrailingCharacters);
        }

        Ok(Self {
            components,
            letter,
            suffixes,
            revision,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))?;
        if let Some(letter) = self.letter {
            write!(f, "{letter}")?;
        }
        for suffix in &self.suffixes {
            write!(f, "_{}", suffix.kind)?;
            if let Some(number) = suffix.number {
                write!(f, "{number}")?;
            }
        }
        if let Some(revision) = self.revision {
            write!(f, "-r{revision}")?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_components(&self.components, &other.components)
            .then_with(|| self.letter.cmp(&other.letter))
            .then_with(|| compare_suffixes(&self.suffixes, &other.suffixes))
            .then_with(|| self.revision().cmp(&other.revision()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// Consumes the leading ASCII digit run, if any.
fn take_digits<'a>(input: &mut &'a str) -> Option<&'a str> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(end);
    *input = rest;
    Some(digits)
}

fn take_suffix_kind(input: &mut &str) -> Option<SuffixKind> {
    // "pre" must be tried before "p"
    const NAMES: [(&str, SuffixKind); 5] = [
        ("alpha", SuffixKind::Alpha),
        ("beta", SuffixKind::Beta),
        ("pre", SuffixKind::Pre),
        ("rc", SuffixKind::Rc),
        ("p", SuffixKind::P),
    ];
    for (name, kind) in NAMES {
        if let Some(rest) = input.strip_prefix(name) {
            *input = rest;
            return Some(kind);
        }
    }
    None
}

fn parse_number(digits: &str) -> Result<u64, VersionError> {
    digits.parse().map_err(|_| VersionError::NumberOverflow)
}

/// Integer comparison of two digit strings of arbitrary length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_components(a: &[String], b: &[String]) -> Ordering {
    for (index, (x, y)) in a.iter().zip(b).enumerate() {
        // The first component is always an integer. Later components
        // compare fractionally when either side carries a leading zero.
        let ordering = if index == 0 || (!x.starts_with('0') && !y.starts_with('0')) {
            compare_numeric(x, y)
        } else {
            x.trim_end_matches('0').cmp(y.trim_end_matches('0'))
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_suffixes(a: &[Suffix], b: &[Suffix]) -> Ordering {
    let mut left = a.iter();
    let mut right = b.iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (Some(x), Some(y)) => {
                let ordering = x
                    .kind
                    .cmp(&y.kind)
                    .then_with(|| x.number.unwrap_or(0).cmp(&y.number.unwrap_or(0)));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            // The exhausted side acts as "no suffix", which only `_p`
            // sorts above.
            (Some(x), None) => {
                return if x.kind == SuffixKind::P {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (None, Some(y)) => {
                return if y.kind == SuffixKind::P {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(input: &str) -> Version {
        input
            .parse()
            .unwrap_or_else(|e| panic!("'{input}' should parse: {e}"))
    }

    fn compare(a: &str, b: &str) -> Ordering {
        version(a).cmp(&version(b))
    }

    #[test]
    fn parses_a_plain_release() {
        let parsed = version("1.2.3");

        assert_eq!(parsed.to_string(), "1.2.3");
        assert_eq!(parsed.revision(), 0);
    }

    #[test]
    fn parses_every_grammar_element() {
        let parsed = version("10.0.1b_alpha2_p-r41");

        assert_eq!(parsed.to_string(), "10.0.1b_alpha2_p-r41");
        assert_eq!(parsed.revision(), 41);
    }

    #[test]
    fn parses_a_date_style_patch_suffix() {
        let parsed = version("1.0_p20240101");

        assert_eq!(parsed.to_string(), "1.0_p20240101");
    }

    #[test]
    fn display_preserves_leading_zeros() {
        assert_eq!(version("1.00").to_string(), "1.00");
        assert_eq!(version("1.010").to_string(), "1.010");
    }

    #[test]
    fn rejects_an_empty_string() {
        let error = "".parse::<Version>().expect_err("should fail");

        assert_eq!(error, VersionError::Empty);
    }

    #[test]
    fn rejects_a_missing_component() {
        assert_eq!(
            "1..2".parse::<Version>().expect_err("should fail"),
            VersionError::MissingComponent
        );
        assert_eq!(
            "1.".parse::<Version>().expect_err("should fail"),
            VersionError::MissingComponent
        );
        assert_eq!(
            "abc".parse::<Version>().expect_err("should fail"),
            VersionError::MissingComponent
        );
    }

    #[test]
    fn rejects_an_unknown_suffix() {
        let error = "1.0_gamma".parse::<Version>().expect_err("should fail");

        assert_eq!(error, VersionError::UnknownSuffix);
    }

    #[test]
    fn rejects_a_bare_revision_marker() {
        let error = "1.0-r".parse::<Version>().expect_err("should fail");

        assert_eq!(error, VersionError::MissingRevision);
    }

    #[test]
    fn rejects_trailing_characters() {
        assert_eq!(
            "1.0 ".parse::<Version>().expect_err("should fail"),
            VersionError::TrailingCharacters
        );
        assert_eq!(
            "1.0A".parse::<Version>().expect_err("should fail"),
            VersionError::TrailingCharacters
        );
        assert_eq!(
            "1.0-rc1".parse::<Version>().expect_err("should fail"),
            VersionError::TrailingCharacters
        );
    }

    #[test]
    fn rejects_oversized_numbers() {
        let error = "1.0_p99999999999999999999"
            .parse::<Version>()
            .expect_err("should fail");

        assert_eq!(error, VersionError::NumberOverflow);
    }

    #[test]
    fn orders_numeric_components_as_integers() {
        assert_eq!(compare("1.0", "1.0.1"), Ordering::Less);
        assert_eq!(compare("2.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare("10.0", "9.0"), Ordering::Greater);
        assert_eq!(compare("1.1", "1.10"), Ordering::Less);
    }

    #[test]
    fn orders_zero_led_components_fractionally() {
        assert_eq!(compare("1.0", "1.00"), Ordering::Equal);
        assert_eq!(compare("1.01", "1.1"), Ordering::Less);
        assert_eq!(compare("1.090", "1.09"), Ordering::Equal);
    }

    #[test]
    fn a_letter_outranks_its_absence() {
        assert_eq!(compare("1.2", "1.2a"), Ordering::Less);
        assert_eq!(compare("1.2a", "1.2b"), Ordering::Less);
    }

    #[test]
    fn stage_suffixes_sort_in_release_order() {
        assert_eq!(compare("1.0_alpha1", "1.0_beta"), Ordering::Less);
        assert_eq!(compare("1.0_beta", "1.0_pre"), Ordering::Less);
        assert_eq!(compare("1.0_pre", "1.0_rc3"), Ordering::Less);
        assert_eq!(compare("1.0_rc3", "1.0"), Ordering::Less);
        assert_eq!(compare("1.0", "1.0_p1"), Ordering::Less);
    }

    #[test]
    fn suffix_numbers_break_ties() {
        assert_eq!(compare("1.0_alpha", "1.0_alpha1"), Ordering::Less);
        assert_eq!(compare("1.0_p0", "1.0_p"), Ordering::Equal);
        assert_eq!(compare("1.0_rc2", "1.0_rc10"), Ordering::Less);
    }

    #[test]
    fn chained_suffixes_compare_pairwise() {
        assert_eq!(compare("1.0_alpha_p1", "1.0_alpha"), Ordering::Greater);
        assert_eq!(compare("1.0_alpha_beta", "1.0_alpha"), Ordering::Less);
    }

    #[test]
    fn revisions_compare_last() {
        assert_eq!(compare("1.0-r1", "1.0"), Ordering::Greater);
        assert_eq!(compare("1.0-r0", "1.0"), Ordering::Equal);
        assert_eq!(compare("1.0-r2", "1.0-r10"), Ordering::Less);
    }

    #[test]
    fn equality_follows_the_ordering() {
        assert_eq!(version("1.0"), version("1.00"));
        assert_eq!(version("1.0_p"), version("1.0_p0"));
        assert_ne!(version("1.0"), version("1.0.0"));
    }

    #[test]
    fn recognizes_well_formed_versions() {
        assert!(is_pms_form("1.2.3"));
        assert!(is_pms_form("1.2.3b_rc2-r4"));
        assert!(is_pms_form("20240101"));

        assert!(!is_pms_form(""));
        assert!(!is_pms_form("v1.0"));
        assert!(!is_pms_form("1.0.x"));
        assert!(!is_pms_form("1.0-20240101"));
        assert!(!is_pms_form("<no-set>"));
    }
}
