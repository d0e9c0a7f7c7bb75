/// Last Data Dragon version shipping the legacy rune and mastery files.
pub const LEGACY_RUNES_VERSION: &str = "7.23.1";

/// Compare two dot separated numeric versions component by component.
///
/// Returns `true` only if `a` is strictly greater at the first differing
/// component. Any non-numeric component makes the comparison `false`.
pub fn version_greater_than(a: &str, b: &str) -> bool {
    for (left, right) in a.split('.').zip(b.split('.')) {
        let (Ok(left), Ok(right)) = (left.parse::<u64>(), right.parse::<u64>()) else {
            return false;
        };

        if left != right {
            return left > right;
        }
    }

    false
}

/// Version to request `file` with: legacy files are pinned to the last version having them.
pub(crate) fn effective_version<'a>(version: &'a str, file: &str) -> &'a str {
    let legacy = matches!(file, "rune.json" | "mastery.json");

    if legacy && version_greater_than(version, LEGACY_RUNES_VERSION) {
        LEGACY_RUNES_VERSION
    } else {
        version
    }
}
