use std::cell::Cell;

use anyhow::{bail, Context, Result};

use branch_dbname::{
    add_database_with_branch_name_suffix, sanitize_branch_name, BranchSource, GitBranchSource,
    ServerResource,
};

use crate::cli::{NameArgs, SanitizeArgs};

pub(crate) fn cmd_name(args: NameArgs) -> Result<()> {
    if let Some(dir) = &args.repo {
        if !dir.is_dir() {
            bail!("Repo directory not found: {}", dir.display());
        }
    }

    // Detection runs lazily, only once the arguments have been accepted.
    let no_branch = Cell::new(false);
    let branches = || {
        let branch = resolve_branch(&args);
        no_branch.set(branch.is_empty());
        branch
    };

    let mut server = ServerResource::new(&args.server);
    let db = add_database_with_branch_name_suffix(
        &mut server,
        &args.resource_name,
        args.database.as_deref(),
        &branches,
    )?;
    if no_branch.get() && !args.quiet {
        eprintln!("Warning: no git branch detected; using the base database name unchanged");
    }

    if args.json {
        let text = serde_json::to_string_pretty(&server).context("Failed to serialize server")?;
        println!("{text}");
    } else {
        println!("{}", db.database_name);
    }
    Ok(())
}

pub(crate) fn cmd_sanitize(args: SanitizeArgs) -> Result<()> {
    println!("{}", sanitize_branch_name(&args.branch_name));
    Ok(())
}

/// `--branch`, then `DBNAME_BRANCH`, then git. Empty overrides count as unset.
fn resolve_branch(args: &NameArgs) -> String {
    if let Some(b) = args.branch.as_deref().filter(|b| !b.is_empty()) {
        return b.to_string();
    }
    if let Some(env) = std::env::var_os("DBNAME_BRANCH").filter(|v| !v.is_empty()) {
        return env.to_string_lossy().into_owned();
    }
    match &args.repo {
        Some(dir) => GitBranchSource::in_dir(dir).current_branch(),
        None => GitBranchSource::new().current_branch(),
    }
}
