//! Per-branch database names for local development.
//!
//! [`add_database_with_branch_name_suffix`] reads the current git branch,
//! sanitizes it and appends it to the database name before registering the
//! database, so every branch gets its own database.

pub mod branch;
pub mod error;
pub mod naming;
pub mod server;

pub use branch::{BranchSource, FixedBranch, GitBranchSource};
pub use error::InvalidArgument;
pub use naming::{database_name_with_suffix, sanitize_branch_name, MAX_DATABASE_NAME_LEN};
pub use server::{DatabaseResource, DatabaseServer, ServerResource};

/// Registers `resource_name` on `server` under a branch-suffixed database name.
///
/// `base_database_name` defaults to `resource_name`. When `branches` reports
/// no branch the base name is used unchanged. Only argument validation can
/// fail.
pub fn add_database_with_branch_name_suffix<S, B>(
    server: &mut S,
    resource_name: &str,
    base_database_name: Option<&str>,
    branches: &B,
) -> Result<S::Database, InvalidArgument>
where
    S: DatabaseServer + ?Sized,
    B: BranchSource + ?Sized,
{
    if resource_name.is_empty() {
        return Err(InvalidArgument::EmptyResourceName);
    }
    if base_database_name == Some("") {
        return Err(InvalidArgument::EmptyDatabaseName);
    }
    let base = base_database_name.unwrap_or(resource_name);

    let branch = branches.current_branch();
    let database_name = database_name_with_suffix(base, &branch);
    Ok(server.add_database(resource_name, &database_name))
}

/// Method form of [`add_database_with_branch_name_suffix`], detecting the
/// branch with git in the current directory.
pub trait DatabaseServerExt: DatabaseServer {
    fn add_database_with_branch_name_suffix(
        &mut self,
        resource_name: &str,
        base_database_name: Option<&str>,
    ) -> Result<Self::Database, InvalidArgument> {
        add_database_with_branch_name_suffix(
            self,
            resource_name,
            base_database_name,
            &GitBranchSource::new(),
        )
    }
}

impl<S: DatabaseServer + ?Sized> DatabaseServerExt for S {}
