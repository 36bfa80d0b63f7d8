use serde::Serialize;

/// The provisioning API a branch-suffixed database gets registered with.
///
/// `name` identifies the database resource, `database_name` is the name the
/// database server itself sees.
pub trait DatabaseServer {
    type Database;

    fn add_database(&mut self, name: &str, database_name: &str) -> Self::Database;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseResource {
    pub name: String,
    pub database_name: String,
}

/// In-memory database server resource that records every registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerResource {
    pub name: String,
    pub databases: Vec<DatabaseResource>,
}

impl ServerResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            databases: Vec::new(),
        }
    }
}

impl DatabaseServer for ServerResource {
    type Database = DatabaseResource;

    fn add_database(&mut self, name: &str, database_name: &str) -> DatabaseResource {
        let db = DatabaseResource {
            name: name.to_string(),
            database_name: database_name.to_string(),
        };
        self.databases.push(db.clone());
        db
    }
}
