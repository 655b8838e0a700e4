//! Version extraction from `--version` output.

use regex::Regex;
use std::sync::LazyLock;

/// First dotted numeric version in a string (e.g. `10.02.1`).
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").expect("VERSION_REGEX must compile"));

/// Extract a version number from presence-check output.
///
/// `gs --version` prints a bare version, `gm -version` and
/// `soffice --version` embed it in a banner line.
///
/// ```
/// use depstrap::tools::extract_version;
///
/// assert_eq!(extract_version("10.02.1\n"), Some("10.02.1".to_string()));
/// assert_eq!(extract_version("no digits here"), None);
/// ```
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .find(output)
        .map(|m| m.as_str().to_string())
}
