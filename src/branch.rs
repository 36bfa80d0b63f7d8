use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Something that can report the current version-control branch.
///
/// An empty string means "no branch"; implementations never fail.
pub trait BranchSource {
    fn current_branch(&self) -> String;
}

impl<F> BranchSource for F
where
    F: Fn() -> String,
{
    fn current_branch(&self) -> String {
        self()
    }
}

/// Asks `git rev-parse --abbrev-ref HEAD`.
///
/// Any failure (git missing, not a repository, unborn HEAD, non-UTF-8
/// output) is reported as an empty branch.
#[derive(Debug, Clone, Default)]
pub struct GitBranchSource {
    dir: Option<PathBuf>,
}

impl GitBranchSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir` instead of the process working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl BranchSource for GitBranchSource {
    fn current_branch(&self) -> String {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        let output = cmd
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();
        let Ok(output) = output else {
            return String::new();
        };
        if !output.status.success() {
            return String::new();
        }
        String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}

/// A branch name known up front. Spawns nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedBranch(pub String);

impl FixedBranch {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Stands in for "no version control available".
    pub fn none() -> Self {
        Self::default()
    }
}

impl BranchSource for FixedBranch {
    fn current_branch(&self) -> String {
        self.0.clone()
    }
}
