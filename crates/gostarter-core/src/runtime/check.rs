//! Toolchain detection for Go and git

use anyhow::Result;
use std::fmt;
use std::process::Command;

/// External tools the generated project depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Go,
    Git,
}

impl Tool {
    /// Tools every materialization invokes
    pub const REQUIRED: [Tool; 2] = [Tool::Go, Tool::Git];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Go => "Go",
            Tool::Git => "git",
        }
    }

    fn program(&self) -> &'static str {
        match self {
            Tool::Go => "go",
            Tool::Git => "git",
        }
    }

    fn version_arg(&self) -> &'static str {
        match self {
            Tool::Go => "version",
            Tool::Git => "--version",
        }
    }

    fn install_hint(&self) -> &'static str {
        match self {
            Tool::Go => "Go (install from https://go.dev/dl)",
            Tool::Git => "git (install from https://git-scm.com/downloads)",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub tool: Tool,
    pub version: Option<String>,
    pub available: bool,
}

/// Probe a tool by asking it for its version
pub fn check_tool(tool: Tool) -> RuntimeInfo {
    detect_program(tool, tool.program())
}

fn detect_program(tool: Tool, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg(tool.version_arg()).output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                tool,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            tool,
            version: None,
            available: false,
        },
    }
}

/// Check every required tool, failing if any is missing
pub fn check_toolchain() -> Result<Vec<RuntimeInfo>> {
    check_toolchain_with(&Tool::REQUIRED, check_tool)
}

/// Check `tools` using `probe`; missing tools are listed with install hints
pub fn check_toolchain_with(
    tools: &[Tool],
    probe: impl Fn(Tool) -> RuntimeInfo,
) -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    for &tool in tools {
        let info = probe(tool);
        if info.available {
            results.push(info);
        } else {
            missing.push(tool.install_hint());
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}
