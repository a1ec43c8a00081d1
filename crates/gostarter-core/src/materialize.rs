//! Project materialization
//!
//! Turns a validated [`ProjectConfig`] into a project on disk:
//!
//! 1. create `<base>/<project_name>` (must not exist yet)
//! 2. create the fixed `internal/` skeleton
//! 3. `go mod init github.com/<user>/<name>`
//! 4. `git init`
//! 5. write the catalog files selected by [`templates::plan`]
//! 6. `go mod tidy`
//!
//! Every step is a precondition for the next. Nothing is rolled back on
//! failure: files already written stay on disk.

use crate::project::ProjectConfig;
use crate::runtime::tool::{CommandRunner, SystemRunner, ToolCommand, ToolError};
use crate::templates::{self, TemplateEntry};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directories created under every project root
pub const SKELETON_DIRS: [&str; 8] = [
    "internal/adapters",
    "internal/adapters/handlers",
    "internal/adapters/repository",
    "internal/config",
    "internal/core",
    "internal/core/domain",
    "internal/core/ports",
    "internal/core/services",
];

/// Materialization failure
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("directory '{}' already exists", path.display())]
    DirectoryExists { path: PathBuf },

    #[error("failed to create project directory '{}'", path.display())]
    RootDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory '{}'", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to initialize go module")]
    ModuleInit(#[source] ToolError),

    #[error("failed to initialize git repository")]
    VcsInit(#[source] ToolError),

    #[error("failed to write '{}'", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve dependencies")]
    DependencyResolution(#[source] ToolError),
}

/// Broad classification of a [`MaterializeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Directory,
    ExternalTool,
    FileWrite,
}

impl MaterializeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            MaterializeError::DirectoryExists { .. }
            | MaterializeError::RootDirectory { .. }
            | MaterializeError::DirectoryCreation { .. } => FailureKind::Directory,
            MaterializeError::ModuleInit(_)
            | MaterializeError::VcsInit(_)
            | MaterializeError::DependencyResolution(_) => FailureKind::ExternalTool,
            MaterializeError::FileWrite { .. } => FailureKind::FileWrite,
        }
    }
}

/// Materialization phases, reported as they start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Skeleton,
    ModuleInit,
    VcsInit,
    Templates,
    DependencyTidy,
}

impl Phase {
    pub fn describe(&self) -> &'static str {
        match self {
            Phase::Skeleton => "Creating project structure...",
            Phase::ModuleInit => "Initializing Go module...",
            Phase::VcsInit => "Initializing git repository...",
            Phase::Templates => "Writing project files...",
            Phase::DependencyTidy => "Resolving dependencies (go mod tidy)...",
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Absolute or base-relative project root
    pub root: PathBuf,
    pub module_path: String,
    /// Written files relative to `root`, in write order
    pub files_written: Vec<PathBuf>,
}

/// Creates projects under a base directory
pub struct Materializer<R = SystemRunner> {
    base_dir: PathBuf,
    runner: R,
}

impl Materializer<SystemRunner> {
    /// Materializer that runs the real `go` and `git` binaries
    pub fn system(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(base_dir, SystemRunner)
    }
}

impl<R: CommandRunner> Materializer<R> {
    pub fn new(base_dir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            base_dir: base_dir.into(),
            runner,
        }
    }

    /// Where `config` would be materialized
    pub fn project_root(&self, config: &ProjectConfig) -> PathBuf {
        self.base_dir.join(config.project_name())
    }

    /// Materialize `config` without progress reporting
    pub fn materialize(
        &self,
        config: &ProjectConfig,
    ) -> Result<MaterializeReport, MaterializeError> {
        self.materialize_with_progress(config, |_| {})
    }

    /// Materialize `config`, calling `on_phase` as each phase starts
    pub fn materialize_with_progress(
        &self,
        config: &ProjectConfig,
        mut on_phase: impl FnMut(Phase),
    ) -> Result<MaterializeReport, MaterializeError> {
        let root = self.project_root(config);
        let module_path = config.module_path();

        on_phase(Phase::Skeleton);
        create_root(&root)?;
        create_skeleton(&root)?;
        tracing::info!(root = %root.display(), "created project skeleton");

        on_phase(Phase::ModuleInit);
        self.runner
            .run(&ToolCommand::module_init(&module_path), &root)
            .map_err(MaterializeError::ModuleInit)?;

        on_phase(Phase::VcsInit);
        self.runner
            .run(&ToolCommand::vcs_init(), &root)
            .map_err(MaterializeError::VcsInit)?;

        on_phase(Phase::Templates);
        let mut files_written = Vec::new();
        for entry in templates::plan(config) {
            write_entry(&root, &entry, &module_path)?;
            files_written.push(PathBuf::from(entry.path));
        }
        tracing::info!(count = files_written.len(), "wrote template files");

        on_phase(Phase::DependencyTidy);
        self.runner
            .run(&ToolCommand::dependency_tidy(), &root)
            .map_err(MaterializeError::DependencyResolution)?;
        tracing::info!(module = %module_path, "project materialized");

        Ok(MaterializeReport {
            root,
            module_path,
            files_written,
        })
    }
}

fn create_root(root: &Path) -> Result<(), MaterializeError> {
    // Non-recursive: an existing directory is never reused
    fs::create_dir(root).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            MaterializeError::DirectoryExists {
                path: root.to_path_buf(),
            }
        } else {
            MaterializeError::RootDirectory {
                path: root.to_path_buf(),
                source,
            }
        }
    })
}

fn create_skeleton(root: &Path) -> Result<(), MaterializeError> {
    for dir in SKELETON_DIRS {
        let path = root.join(dir);
        tracing::debug!(path = %path.display(), "creating directory");
        fs::create_dir_all(&path)
            .map_err(|source| MaterializeError::DirectoryCreation { path, source })?;
    }
    Ok(())
}

/// Write one catalog file; a missing parent that cannot be created is a
/// write failure of that file, not a skeleton failure
fn write_entry(
    root: &Path,
    entry: &TemplateEntry,
    module_path: &str,
) -> Result<(), MaterializeError> {
    let path = root.join(entry.path);

    if let Some(parent) = path.parent() {
        if let Err(source) = fs::create_dir_all(parent) {
            return Err(MaterializeError::FileWrite { path, source });
        }
    }

    tracing::debug!(path = %path.display(), template = entry.name, "writing file");
    fs::write(&path, entry.render(module_path).as_bytes())
        .map_err(|source| MaterializeError::FileWrite { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_failure() -> ToolError {
        ToolError::Failed {
            command: "go mod tidy".to_string(),
            code: Some(1),
            stderr: String::new(),
        }
    }

    #[test]
    fn test_failure_kinds() {
        let exists = MaterializeError::DirectoryExists {
            path: PathBuf::from("demo"),
        };
        assert_eq!(exists.kind(), FailureKind::Directory);
        assert_eq!(
            MaterializeError::DependencyResolution(tool_failure()).kind(),
            FailureKind::ExternalTool
        );
        assert_eq!(
            MaterializeError::FileWrite {
                path: PathBuf::from("demo/cmd/main.go"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }
            .kind(),
            FailureKind::FileWrite
        );
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = MaterializeError::DirectoryExists {
            path: PathBuf::from("demo1"),
        };
        assert_eq!(err.to_string(), "directory 'demo1' already exists");

        let err = MaterializeError::FileWrite {
            path: PathBuf::from("demo1/cmd/main.go"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("demo1/cmd/main.go"));
    }

    #[test]
    fn test_skeleton_is_created_under_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("demo");
        create_root(&root).unwrap();
        create_skeleton(&root).unwrap();

        for sub in SKELETON_DIRS {
            assert!(root.join(sub).is_dir(), "missing {sub}");
        }
    }

    #[test]
    fn test_existing_root_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("demo");
        fs::create_dir(&root).unwrap();

        let err = create_root(&root).unwrap_err();
        assert!(matches!(err, MaterializeError::DirectoryExists { .. }));
    }

    #[test]
    fn test_write_entry_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        write_entry(dir.path(), &templates::LOGGER_MIDDLEWARE, "github.com/a/b").unwrap();

        let written = fs::read_to_string(dir.path().join("pkg/utils/logger.go")).unwrap();
        assert_eq!(written, templates::LOGGER_MIDDLEWARE.content);
    }

    #[test]
    fn test_blocked_parent_is_a_write_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("pkg"), "not a directory").unwrap();

        let err =
            write_entry(dir.path(), &templates::LOGGER_MIDDLEWARE, "github.com/a/b").unwrap_err();
        assert_eq!(err.kind(), FailureKind::FileWrite);
        let expected = dir.path().join("pkg/utils/logger.go");
        assert!(matches!(&err, MaterializeError::FileWrite { path, .. } if path == &expected));
    }

    #[test]
    fn test_write_entry_fills_module_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let entry = templates::framework_entry(crate::Framework::Echo, true);
        write_entry(dir.path(), &entry, "github.com/bob/demo2").unwrap();

        let written = fs::read_to_string(dir.path().join("cmd/main.go")).unwrap();
        assert!(written.contains("\"github.com/bob/demo2/pkg/utils\""));
        assert!(!written.contains(templates::MODULE_PATH_PLACEHOLDER));
    }
}
