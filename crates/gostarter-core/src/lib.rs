//! gostarter Core - Shared library for scaffolding Go web service projects
//!
//! A project is described by a validated [`ProjectConfig`] and materialized
//! from a fixed catalog of static Go source files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Configuration validation, the template catalog,
//!   toolchain detection and external tool invocation
//! - **Layer 2: Materialization** - `Materializer` creates the directory skeleton,
//!   writes catalog files and runs `go mod init`, `git init` and `go mod tidy`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use gostarter_core::{Database, Framework, Materializer, ProjectConfig};
//!
//! let config = ProjectConfig::new("alice", "demo1", Framework::Gin, Database::Sqlite, false)?;
//! let report = Materializer::system(".").materialize(&config)?;
//! println!("created {}", report.root.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod logging;
pub mod materialize;
pub mod product;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use materialize::{FailureKind, MaterializeError, MaterializeReport, Materializer, Phase};
pub use product::ProductConfig;
pub use project::{Database, Framework, ProjectConfig, ValidationError};
pub use runtime::{CommandRunner, SystemRunner, ToolCommand, ToolError};
pub use templates::TemplateEntry;

#[cfg(feature = "tui")]
pub use tui::run;
