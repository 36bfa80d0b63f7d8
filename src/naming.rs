use std::sync::LazyLock;

use regex::Regex;

/// Identifier length limit of the target database (PostgreSQL `NAMEDATALEN - 1`).
pub const MAX_DATABASE_NAME_LEN: usize = 63;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid regex"));
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Maps a branch name onto `[a-z0-9-]`, collapsing runs of `-`.
pub fn sanitize_branch_name(branch_name: &str) -> String {
    let replaced = NON_ALNUM.replace_all(branch_name, "-");
    DASH_RUN.replace_all(&replaced, "-").to_lowercase()
}

/// Appends the sanitized branch to `base_name`, keeping the result within
/// [`MAX_DATABASE_NAME_LEN`].
///
/// An empty `branch_name` returns `base_name` as-is. When the branch does not
/// fit, its *tail* is kept: `feature/JIRA-1234-foo` loses `feature` first.
/// A base name that leaves no room for `-x` is cut to the limit and the
/// branch is dropped.
pub fn database_name_with_suffix(base_name: &str, branch_name: &str) -> String {
    if branch_name.is_empty() {
        return base_name.to_string();
    }

    let branch = sanitize_branch_name(branch_name);
    let base_len = base_name.chars().count();
    let remaining = MAX_DATABASE_NAME_LEN.saturating_sub(base_len + 1);

    if remaining == 0 {
        return base_name.chars().take(MAX_DATABASE_NAME_LEN).collect();
    }

    // sanitized output is ASCII, so byte offsets are char offsets
    let suffix = if branch.len() > remaining {
        &branch[branch.len() - remaining..]
    } else {
        branch.as_str()
    };
    format!("{base_name}-{suffix}")
}
