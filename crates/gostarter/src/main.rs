//! gostarter CLI - Project scaffolding for Go web services

use anyhow::Result;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use gostarter_core::config::Preset;
use gostarter_core::templates::DATABASE_ADAPTER_PATH;
use gostarter_core::tui::CreateArgs;
use gostarter_core::{Database, Framework, MaterializeReport, ProductConfig, ProjectConfig};
use std::path::{Path, PathBuf};

/// gostarter product configuration
#[derive(Clone)]
pub struct GoStarter;

impl ProductConfig for GoStarter {
    fn name(&self) -> &'static str {
        "gostarter"
    }

    fn display_name(&self) -> &'static str {
        "gostarter"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Go web service projects"
    }

    fn docs_url(&self) -> &'static str {
        "https://go.dev/doc/"
    }

    fn next_steps(&self, config: &ProjectConfig, report: &MaterializeReport) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to the project if it is not the current directory
        if current.as_ref() != Some(&report.root) {
            steps.push(format!("cd {}", config.project_name()));
        }

        // Step 2: Point the adapter at a real database
        if report
            .files_written
            .iter()
            .any(|p| p.as_path() == Path::new(DATABASE_ADAPTER_PATH))
        {
            steps.push(format!(
                "Configure the {} connection in {}",
                config.database().display_name(),
                DATABASE_ADAPTER_PATH
            ));
        }

        // Step 3: Start the server
        steps.push("go run ./cmd".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "gostarter")]
#[command(version)]
pub struct Args {
    /// GitHub user id used in the module path
    #[arg(short = 'u', long = "github-user")]
    pub github_user: Option<String>,

    /// Project name (directory and module path segment)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Web framework
    #[arg(short, long, value_enum, ignore_case = true)]
    pub framework: Option<Framework>,

    /// Database adapter
    #[arg(short, long, value_enum, ignore_case = true)]
    pub database: Option<Database>,

    /// Enable the Echo logging middleware (true/false)
    #[arg(long)]
    pub logging: Option<bool>,

    /// YAML preset with pre-filled answers
    #[arg(short, long = "config")]
    pub config: Option<PathBuf>,

    /// Skip go/git installation check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,

    /// Auto-confirm project creation
    #[arg(short, long)]
    pub yes: bool,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            preset: args.config,
            answers: Preset {
                github_user_id: args.github_user,
                project_name: args.name,
                framework: args.framework,
                database: args.database,
                logging: args.logging,
            },
            skip_tool_check: args.skip_tool_check,
            yes: args.yes,
        }
    }
}

fn parse_args<C: ProductConfig>(product: &C) -> Args {
    let matches = Args::command()
        .name(product.name())
        .about(product.cli_description())
        .get_matches();

    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let product = GoStarter;
    let args = parse_args(&product);
    gostarter_core::logging::init_tracing(args.verbose);

    let result = gostarter_core::run(&product, args.into());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
