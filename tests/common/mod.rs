#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

pub fn git(repo: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .current_dir(repo)
        .args(args)
        .status()
        .expect("spawn git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Repository with one commit, checked out on `branch`.
pub fn init_repo_on(repo: &Path, branch: &str) {
    fs::create_dir_all(repo).unwrap();
    git(repo, &["init", "-q", "-b", branch]);
    git(
        repo,
        &[
            "-c",
            "user.name=dbname-test",
            "-c",
            "user.email=dbname-test@example.com",
            "commit",
            "-q",
            "--allow-empty",
            "-m",
            "init",
        ],
    );
}

/// A directory that is not inside any git repository.
pub fn plain_dir(root: &Path) -> PathBuf {
    let dir = root.join("plain");
    fs::create_dir_all(&dir).unwrap();
    dir
}
