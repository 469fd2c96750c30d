//! Parsers for git's line-oriented output.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static BRANCH_REMOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^branch\.(.+?)\.remote (.+)").expect("valid regex"));

/// Local branch name → configured remote name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteBranchMap {
    remotes: HashMap<String, String>,
}

impl RemoteBranchMap {
    /// Remote configured for `branch`, if any.
    pub fn remote_for(&self, branch: &str) -> Option<&str> {
        self.remotes.get(branch).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RemoteBranchMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            remotes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse `git config --get-regexp branch.*.remote` output.
///
/// Lines that do not match `branch.<name>.remote <remote>` are ignored.
/// A later entry for the same branch replaces an earlier one.
pub fn parse_branch_remotes<'a, I>(lines: I) -> RemoteBranchMap
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            BRANCH_REMOTE_RE
                .captures(line)
                .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        })
        .collect()
}

/// Turn `refs/remotes/<remote>/<branch>` into `<branch>`.
pub fn strip_remote_prefix(full_ref: &str, remote: &str) -> String {
    let prefix = format!("refs/remotes/{}/", remote);
    full_ref
        .strip_prefix(&prefix)
        .unwrap_or(full_ref)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_branch_remote_lines() {
        let map = parse_branch_remotes([
            "branch.main.remote origin",
            "branch.feature/login.remote upstream",
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.remote_for("main"), Some("origin"));
        assert_eq!(map.remote_for("feature/login"), Some("upstream"));
        assert_eq!(map.remote_for("missing"), None);
    }

    #[test]
    fn branch_name_match_is_lazy() {
        // The shortest prefix before ".remote " wins, so dotted names survive.
        let map = parse_branch_remotes(["branch.release.v1.remote origin"]);
        assert_eq!(map.remote_for("release.v1"), Some("origin"));
    }

    #[test]
    fn ignores_unrelated_lines() {
        let map = parse_branch_remotes(["core.bare false", "", "branch.main.merge refs/heads/main"]);
        assert!(map.is_empty());
    }

    #[test]
    fn later_entries_win() {
        let map = parse_branch_remotes(["branch.dev.remote fork", "branch.dev.remote origin"]);
        assert_eq!(map.remote_for("dev"), Some("origin"));
    }

    #[test]
    fn strips_remote_prefix() {
        assert_eq!(strip_remote_prefix("refs/remotes/origin/main", "origin"), "main");
        assert_eq!(
            strip_remote_prefix("refs/remotes/origin/release/2.0", "origin"),
            "release/2.0"
        );
    }

    #[test]
    fn leaves_foreign_refs_untouched() {
        assert_eq!(
            strip_remote_prefix("refs/remotes/upstream/main", "origin"),
            "refs/remotes/upstream/main"
        );
    }
}
