//! Version ordering for release entries.

use std::cmp::Ordering;

use semver::Version;

/// Compare two release version strings.
///
/// Strings of the form `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` are compared
/// numerically on the MAJOR, MINOR, PATCH triple; the first difference
/// decides. On an equal triple a version without a prerelease tag orders
/// above one with a tag, and two prerelease tags are compared as whole
/// strings rather than segment by segment, so `2.0.0-alpha.10` orders below
/// `2.0.0-alpha.9`. Build metadata is accepted but never influences the
/// result.
///
/// When either side does not parse, both raw strings are compared textually.
/// That makes partial versions like `10.0` order below `2.0`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let (Ok(va), Ok(vb)) = (Version::parse(a), Version::parse(b)) else {
        return a.cmp(b);
    };

    va.major
        .cmp(&vb.major)
        .then_with(|| va.minor.cmp(&vb.minor))
        .then_with(|| va.patch.cmp(&vb.patch))
        .then_with(|| match (va.pre.is_empty(), vb.pre.is_empty()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => va.pre.as_str().cmp(vb.pre.as_str()),
        })
}
