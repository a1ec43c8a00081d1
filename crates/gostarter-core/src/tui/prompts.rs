//! Charm-style CLI prompts using cliclack

use crate::config::Preset;
use crate::materialize::{MaterializeError, MaterializeReport, Materializer};
use crate::product::ProductConfig;
use crate::project::{self, Database, Framework, ProjectConfig};
use crate::runtime::check;
use crate::tui::summary;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// YAML preset with pre-filled answers
    pub preset: Option<PathBuf>,

    /// Answers given as flags; these win over the preset
    pub answers: Preset,

    /// Skip the go/git installation check
    pub skip_tool_check: bool,

    /// Skip the final confirmation
    pub yes: bool,
}

/// Run the wizard with interactive prompts, then materialize the project
pub fn run<C: ProductConfig>(product: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(product.display_name())?;

    // Step 1: Check toolchain
    if args.skip_tool_check {
        cliclack::log::info("Skipping tool check")?;
    } else {
        check_tools()?;
    }

    // Step 2: Collect answers
    let answers = load_answers(&args)?;
    let config = collect_config(answers)?;

    // Step 3: Confirm
    confirm_creation(&args)?;

    // Step 4: Create project
    let base_dir = std::env::current_dir().context("Failed to resolve current directory")?;
    let report = create_project(&base_dir, &config)?;

    // Step 5: Summary and next steps
    print_summary(product, &config, &report)?;

    Ok(())
}

fn check_tools() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    match check::check_toolchain() {
        Ok(tools) => {
            spinner.stop("Toolchain ready");
            for info in tools {
                cliclack::log::success(format!(
                    "{} installed ({})",
                    info.tool,
                    info.version.as_deref().unwrap_or("unknown")
                ))?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing tools");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing tools and try again.");
        }
    }
}

fn load_answers(args: &CreateArgs) -> Result<Preset> {
    let base = match &args.preset {
        Some(path) => {
            let preset = Preset::load(path)?;
            cliclack::log::info(format!("Using preset {}", path.display()))?;
            preset
        }
        None => Preset::default(),
    };

    Ok(base.overridden_by(args.answers.clone()))
}

/// Ask every question the answers do not already cover
fn collect_config(answers: Preset) -> Result<ProjectConfig> {
    let github_user_id = prompt_github_user_id(answers.github_user_id)?;
    let project_name = prompt_project_name(answers.project_name)?;
    let framework = prompt_framework(answers.framework)?;
    let database = prompt_database(answers.database)?;
    let logging = prompt_logging(framework, answers.logging)?;

    Ok(ProjectConfig::new(
        github_user_id,
        project_name,
        framework,
        database,
        logging,
    )?)
}

fn prompt_github_user_id(prefilled: Option<String>) -> Result<String> {
    if let Some(value) = prefilled {
        project::validate_github_user_id(&value)?;
        cliclack::log::info(format!("GitHub UserID: {}", value.trim()))?;
        return Ok(value);
    }

    let value: String = cliclack::input("Enter your GitHub UserID")
        .placeholder("johndoe")
        .validate(|input: &String| project::validate_github_user_id(input))
        .interact()?;

    Ok(value)
}

fn prompt_project_name(prefilled: Option<String>) -> Result<String> {
    if let Some(value) = prefilled {
        project::validate_project_name(&value)?;
        cliclack::log::info(format!("Project name: {}", value.trim()))?;
        return Ok(value);
    }

    let value: String = cliclack::input("Enter your Project Name")
        .placeholder("my-awesome-project")
        .validate(|input: &String| project::validate_project_name(input))
        .interact()?;

    Ok(value)
}

fn prompt_framework(prefilled: Option<Framework>) -> Result<Framework> {
    if let Some(framework) = prefilled {
        cliclack::log::info(format!("Framework: {}", framework.display_name()))?;
        return Ok(framework);
    }

    let mut select = cliclack::select("Choose a Go framework");
    for framework in Framework::ALL {
        select = select.item(framework, framework.display_name(), "");
    }

    Ok(select.interact()?)
}

fn prompt_database(prefilled: Option<Database>) -> Result<Database> {
    if let Some(database) = prefilled {
        cliclack::log::info(format!("Database: {}", database.display_name()))?;
        return Ok(database);
    }

    let mut select = cliclack::select("Choose a database");
    for database in Database::ALL {
        select = select.item(database, database.display_name(), "");
    }

    Ok(select.interact()?)
}

fn prompt_logging(framework: Framework, prefilled: Option<bool>) -> Result<bool> {
    if let Some(enabled) = prefilled {
        project::validate_logging(framework, enabled)?;
        return Ok(enabled);
    }

    // Re-ask until the answer fits the framework
    loop {
        let enabled: bool = cliclack::confirm("Enable Logging Middleware?")
            .initial_value(false)
            .interact()?;

        match project::validate_logging(framework, enabled) {
            Ok(()) => return Ok(enabled),
            Err(e) => cliclack::log::error(e.to_string())?,
        }
    }
}

fn confirm_creation(args: &CreateArgs) -> Result<()> {
    if args.yes {
        return Ok(());
    }

    let confirm: bool = cliclack::confirm("Create this project?")
        .initial_value(true)
        .interact()?;

    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }

    Ok(())
}

fn create_project(base_dir: &Path, config: &ProjectConfig) -> Result<MaterializeReport> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let materializer = Materializer::system(base_dir);
    let result = materializer
        .materialize_with_progress(config, |phase| spinner.set_message(phase.describe()));

    match result {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.files_written.len(),
                report.root.display()
            ));
            Ok(report)
        }
        Err(e) => {
            spinner.error("Failed to create project");
            if leaves_partial_project(&e) {
                cliclack::log::warning(format!(
                    "Partially created project was kept in {}",
                    materializer.project_root(config).display()
                ))?;
            }
            Err(e.into())
        }
    }
}

/// Every failure after the root directory was created leaves it on disk
fn leaves_partial_project(error: &MaterializeError) -> bool {
    !matches!(
        error,
        MaterializeError::DirectoryExists { .. } | MaterializeError::RootDirectory { .. }
    )
}

fn print_summary<C: ProductConfig>(
    product: &C,
    config: &ProjectConfig,
    report: &MaterializeReport,
) -> Result<()> {
    println!();
    println!("{}", summary::render_summary(config));

    let steps = product.next_steps(config, report);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Docs: {}", product.docs_url());

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ToolError;
    use std::io;

    #[test]
    fn test_partial_project_warning_scope() {
        let root = PathBuf::from("demo");
        let io_err = || io::Error::from(io::ErrorKind::PermissionDenied);

        assert!(!leaves_partial_project(&MaterializeError::DirectoryExists {
            path: root.clone()
        }));
        assert!(!leaves_partial_project(&MaterializeError::RootDirectory {
            path: root.clone(),
            source: io_err(),
        }));

        assert!(leaves_partial_project(&MaterializeError::DirectoryCreation {
            path: root.join("internal/core"),
            source: io_err(),
        }));
        assert!(leaves_partial_project(&MaterializeError::FileWrite {
            path: root.join("cmd/main.go"),
            source: io_err(),
        }));
        assert!(leaves_partial_project(&MaterializeError::VcsInit(
            ToolError::Failed {
                command: "git init".to_string(),
                code: Some(128),
                stderr: String::new(),
            }
        )));
    }
}
