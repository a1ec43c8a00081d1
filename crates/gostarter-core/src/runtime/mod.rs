//! Toolchain detection and external tool invocation
//!
//! This module provides:
//! - Go and git detection with install hints
//! - The `CommandRunner` seam used for `go mod init`, `git init` and `go mod tidy`

pub mod check;
pub mod tool;

pub use check::{check_tool, check_toolchain, check_toolchain_with, RuntimeInfo, Tool};
pub use tool::{CommandRunner, SystemRunner, ToolCommand, ToolError};
