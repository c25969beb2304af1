//! Latest-official-release selection.

use std::cmp::Ordering;

use crate::release::compare::compare_versions;
use crate::release::types::Release;

/// Pick the highest version among the releases published for
/// `official_package`.
///
/// A release qualifies when its version-info map carries the package name as
/// a key; the mapped value is irrelevant. Returns `None` when nothing
/// qualifies or `official_package` is empty. Equal versions keep the first
/// one seen.
pub fn find_latest_official_release(
    releases: &[Release],
    official_package: &str,
) -> Option<String> {
    if official_package.is_empty() {
        return None;
    }

    let mut latest: Option<&str> = None;
    for release in releases {
        if !release.version_info.contains_key(official_package) {
            continue;
        }
        match latest {
            Some(current) if compare_versions(&release.version, current) != Ordering::Greater => {}
            _ => latest = Some(&release.version),
        }
    }

    latest.map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn release(version: &str, packages: &[&str]) -> Release {
        let version_info: serde_json::Map<String, serde_json::Value> = packages
            .iter()
            .map(|p| (p.to_string(), json!({})))
            .collect();

        serde_json::from_value(json!({
            "version": version,
            "versionInfo": version_info,
        }))
        .unwrap()
    }

    #[test]
    fn returns_none_for_empty_release_list() {
        assert_eq!(find_latest_official_release(&[], "pkg.a"), None);
    }

    #[test]
    fn returns_none_for_empty_official_package() {
        let releases = vec![release("1.0.0", &["pkg.a"])];

        assert_eq!(find_latest_official_release(&releases, ""), None);
    }

    #[test]
    fn returns_none_when_no_release_carries_the_package() {
        let releases = vec![
            release("1.0.0", &["pkg.b"]),
            release("2.0.0", &["pkg.c"]),
        ];

        assert_eq!(find_latest_official_release(&releases, "pkg.a"), None);
    }

    #[test]
    fn picks_highest_version_among_official_releases_only() {
        let releases = vec![
            release("1.0.0", &["pkg.a"]),
            release("2.0.0", &["pkg.b"]),
            release("1.5.0", &["pkg.a"]),
        ];

        assert_eq!(
            find_latest_official_release(&releases, "pkg.a"),
            Some("1.5.0".to_string())
        );
    }

    #[test]
    fn membership_is_an_exact_key_match() {
        let releases = vec![release("1.0.0", &["pkg.a.extra"])];

        assert_eq!(find_latest_official_release(&releases, "pkg.a"), None);
    }

    #[test]
    fn stable_release_beats_older_prerelease_entries() {
        let releases = vec![
            release("2.0.0-alpha", &["pkg.a"]),
            release("2.0.0", &["pkg.a"]),
            release("2.0.0-beta", &["pkg.a"]),
        ];

        assert_eq!(
            find_latest_official_release(&releases, "pkg.a"),
            Some("2.0.0".to_string())
        );
    }

    #[test]
    fn equal_versions_keep_the_first_seen() {
        let releases = vec![
            release("1.0.0+build1", &["pkg.a"]),
            release("1.0.0+build2", &["pkg.a"]),
        ];

        assert_eq!(
            find_latest_official_release(&releases, "pkg.a"),
            Some("1.0.0+build1".to_string())
        );
    }

    #[test]
    fn non_semver_versions_use_the_textual_fallback() {
        let releases = vec![
            release("build-a", &["pkg.a"]),
            release("build-c", &["pkg.a"]),
            release("build-b", &["pkg.a"]),
        ];

        assert_eq!(
            find_latest_official_release(&releases, "pkg.a"),
            Some("build-c".to_string())
        );
    }
}
