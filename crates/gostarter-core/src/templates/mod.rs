//! Template catalog
//!
//! Maps configuration choices to static template files:
//! - `framework_entry` is total over [`Framework`]
//! - `database_entry` is partial over [`Database`] (no MySQL or "none" adapter)
//! - `plan` lists every file to write for a configuration, in write order
//!
//! Adding a framework or database means adding an enum variant, one arm here
//! and one constant in [`files`].

pub mod files;

use crate::project::{Database, Framework, ProjectConfig};
use std::borrow::Cow;

/// Marker replaced by the Go module path when a file is written
pub const MODULE_PATH_PLACEHOLDER: &str = "{{module}}";

/// Path of the generated entry point, relative to the project root
pub const ENTRY_POINT_PATH: &str = "cmd/main.go";

/// Path of the generated database adapter, relative to the project root
pub const DATABASE_ADAPTER_PATH: &str = "internal/adapters/repository/db.go";

/// A static file from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Logical name shown in progress output
    pub name: &'static str,
    /// Destination relative to the project root
    pub path: &'static str,
    /// File contents, written verbatim apart from [`MODULE_PATH_PLACEHOLDER`]
    pub content: &'static str,
}

impl TemplateEntry {
    /// Contents as written for a project with `module_path`
    pub fn render(&self, module_path: &str) -> Cow<'static, str> {
        if self.content.contains(MODULE_PATH_PLACEHOLDER) {
            Cow::Owned(self.content.replace(MODULE_PATH_PLACEHOLDER, module_path))
        } else {
            Cow::Borrowed(self.content)
        }
    }
}

/// Config loader, written for every project
pub const CONFIG_LOADER: TemplateEntry = TemplateEntry {
    name: "config loader",
    path: "internal/config/config.go",
    content: files::CONFIG_GO,
};

/// Echo request logger, written only for Echo with logging enabled
pub const LOGGER_MIDDLEWARE: TemplateEntry = TemplateEntry {
    name: "logging middleware",
    path: "pkg/utils/logger.go",
    content: files::LOGGER_GO,
};

/// Entry point for a framework
///
/// `logging` only changes the result for Echo; validated configurations never
/// combine it with another framework.
pub fn framework_entry(framework: Framework, logging: bool) -> TemplateEntry {
    let (name, content) = match framework {
        Framework::Stdlib => ("net/http entry point", files::MAIN_STDLIB),
        Framework::Gin => ("gin entry point", files::MAIN_GIN),
        Framework::Echo if logging => {
            ("echo entry point (with logger)", files::MAIN_ECHO_WITH_LOGGER)
        }
        Framework::Echo => ("echo entry point", files::MAIN_ECHO),
        Framework::Fiber => ("fiber entry point", files::MAIN_FIBER),
        Framework::Chi => ("chi entry point", files::MAIN_CHI),
    };

    TemplateEntry {
        name,
        path: ENTRY_POINT_PATH,
        content,
    }
}

/// Database adapter, if the catalog has one for this database
pub fn database_entry(database: Database) -> Option<TemplateEntry> {
    let (name, content) = match database {
        Database::Sqlite => ("sqlite adapter", files::DB_SQLITE),
        Database::Postgresql => ("postgresql adapter", files::DB_POSTGRESQL),
        Database::Mongodb => ("mongodb adapter", files::DB_MONGODB),
        // Selectable, but no adapter template exists
        Database::Mysql | Database::None => return None,
    };

    Some(TemplateEntry {
        name,
        path: DATABASE_ADAPTER_PATH,
        content,
    })
}

/// Every file to write for `config`, in write order
pub fn plan(config: &ProjectConfig) -> Vec<TemplateEntry> {
    let mut entries = vec![CONFIG_LOADER];

    if config.framework() == Framework::Echo && config.logging() {
        entries.push(LOGGER_MIDDLEWARE);
    }
    entries.push(framework_entry(config.framework(), config.logging()));

    if let Some(adapter) = database_entry(config.database()) {
        entries.push(adapter);
    }

    entries
}
