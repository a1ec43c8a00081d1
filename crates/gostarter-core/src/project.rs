//! Project configuration model and validation
//!
//! A [`ProjectConfig`] can only be built through [`ProjectConfig::new`], which
//! enforces every field constraint. Anything downstream (the materializer, the
//! summary) can therefore assume the configuration is valid.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Host prefix of every generated Go module path
pub const MODULE_HOST: &str = "github.com";

/// Supported Go web frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Stdlib,
    Gin,
    Echo,
    Fiber,
    Chi,
}

impl Framework {
    /// All frameworks, in prompt order
    pub const ALL: [Framework; 5] = [
        Framework::Stdlib,
        Framework::Gin,
        Framework::Echo,
        Framework::Fiber,
        Framework::Chi,
    ];

    /// Stable lowercase identifier (CLI value and preset value)
    pub fn id(&self) -> &'static str {
        match self {
            Framework::Stdlib => "stdlib",
            Framework::Gin => "gin",
            Framework::Echo => "echo",
            Framework::Fiber => "fiber",
            Framework::Chi => "chi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Stdlib => "StdLib",
            Framework::Gin => "Gin",
            Framework::Echo => "Echo",
            Framework::Fiber => "Fiber",
            Framework::Chi => "Chi",
        }
    }

    /// Only Echo ships with the optional logging middleware
    pub fn supports_logging(&self) -> bool {
        matches!(self, Framework::Echo)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Supported databases
///
/// `Mysql` is selectable but has no adapter template in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgresql,
    Mysql,
    Mongodb,
    Sqlite,
    None,
}

impl Database {
    /// All databases, in prompt order
    pub const ALL: [Database; 5] = [
        Database::Postgresql,
        Database::Mysql,
        Database::Mongodb,
        Database::Sqlite,
        Database::None,
    ];

    /// Stable lowercase identifier (CLI value and preset value)
    pub fn id(&self) -> &'static str {
        match self {
            Database::Postgresql => "postgresql",
            Database::Mysql => "mysql",
            Database::Mongodb => "mongodb",
            Database::Sqlite => "sqlite",
            Database::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Database::Postgresql => "PostgreSQL",
            Database::Mysql => "MySQL",
            Database::Mongodb => "MongoDB",
            Database::Sqlite => "SQLite",
            Database::None => "None",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("GitHub UserID cannot be empty")]
    EmptyGithubUserId,

    #[error("project name cannot be empty")]
    EmptyProjectName,

    #[error("project name '{0}' must be a plain directory name (no path separators)")]
    InvalidProjectName(String),

    #[error("logging middleware is only available for Echo framework")]
    LoggingRequiresEcho,
}

/// Validate a GitHub user id as typed by the user
pub fn validate_github_user_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyGithubUserId);
    }
    Ok(())
}

/// Validate a project name; it becomes both a directory and a module path segment
pub fn validate_project_name(value: &str) -> Result<(), ValidationError> {
    let name = value.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyProjectName);
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ValidationError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}

/// Validate the logging choice against the selected framework
pub fn validate_logging(framework: Framework, logging: bool) -> Result<(), ValidationError> {
    if logging && !framework.supports_logging() {
        return Err(ValidationError::LoggingRequiresEcho);
    }
    Ok(())
}

/// A validated project configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    github_user_id: String,
    project_name: String,
    framework: Framework,
    database: Database,
    logging: bool,
}

impl ProjectConfig {
    /// Build a configuration, rejecting any invalid combination
    pub fn new(
        github_user_id: impl Into<String>,
        project_name: impl Into<String>,
        framework: Framework,
        database: Database,
        logging: bool,
    ) -> Result<Self, ValidationError> {
        let github_user_id = github_user_id.into().trim().to_string();
        let project_name = project_name.into().trim().to_string();

        validate_github_user_id(&github_user_id)?;
        validate_project_name(&project_name)?;
        validate_logging(framework, logging)?;

        Ok(Self {
            github_user_id,
            project_name,
            framework,
            database,
            logging,
        })
    }

    pub fn github_user_id(&self) -> &str {
        &self.github_user_id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn logging(&self) -> bool {
        self.logging
    }

    /// Go module path, e.g. `github.com/alice/demo1`
    pub fn module_path(&self) -> String {
        format!(
            "{}/{}/{}",
            MODULE_HOST, self.github_user_id, self.project_name
        )
    }
}
