//! Canonical family resolution via ordered keyword matching.

use vmt_common::OsFamily;

/// Ordered (keywords, family) table, first match wins.
///
/// The order encodes precedence among overlapping keyword contexts (e.g.
/// "oracle" must be claimed before a generic "linux" marker could be, and
/// "amazon linux" before anything that merely mentions linux). Reordering
/// this table is a behavior change, not a cleanup.
const FAMILY_KEYWORDS: &[(&[&str], OsFamily)] = &[
    (&["red hat", "rhel"], OsFamily::Rhel),
    (&["centos"], OsFamily::CentOs),
    (&["oracle"], OsFamily::OracleLinux),
    (&["rocky"], OsFamily::Rocky),
    (&["amazon linux"], OsFamily::AmazonLinux),
    (&["suse"], OsFamily::Sles),
    (&["ubuntu"], OsFamily::Ubuntu),
    (&["debian"], OsFamily::Debian),
    (&["windows"], OsFamily::Windows),
];

/// Resolve a normalized guest-OS string to a canonical family.
///
/// Returns `None` when no keyword matches, a normal outcome for appliances
/// and unrecognized systems, not an error.
pub fn resolve_family(normalized: &str) -> Option<OsFamily> {
    for (keywords, family) in FAMILY_KEYWORDS {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return Some(*family);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_each_family() {
        let cases = [
            ("red hat linux 8", OsFamily::Rhel),
            ("rhel 9", OsFamily::Rhel),
            ("centos 7", OsFamily::CentOs),
            ("oracle linux 8", OsFamily::OracleLinux),
            ("rocky linux 9", OsFamily::Rocky),
            ("amazon linux 2", OsFamily::AmazonLinux),
            ("suse linux 12", OsFamily::Sles),
            ("ubuntu linux 22.04", OsFamily::Ubuntu),
            ("debian gnu/linux 11", OsFamily::Debian),
            ("windows server 2019", OsFamily::Windows),
        ];
        for (input, expected) in cases {
            assert_eq!(resolve_family(input), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn test_unknown_os_resolves_to_none() {
        assert_eq!(resolve_family("solaris 10"), None);
        assert_eq!(resolve_family("freebsd 13"), None);
        assert_eq!(resolve_family(""), None);
    }

    #[test]
    fn test_first_match_wins_over_later_keywords() {
        // Mentions both red hat and windows; the earlier entry claims it.
        assert_eq!(
            resolve_family("red hat linux on windows hyper-v"),
            Some(OsFamily::Rhel)
        );
    }
}
