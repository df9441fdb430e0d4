//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - workflow: Workflow subcommands and their arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod workflow;

pub use completions::CompletionsArgs;
pub use workflow::{
    AddArgs, DeleteArgs, ListArgs, UpdateArgs, WorkflowArgs, WorkflowCommand,
};

/// marty - manage bundled GitHub workflows
#[derive(Parser, Debug)]
#[command(
    name = "marty",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage bundled GitHub workflows in your project",
    long_about = "marty ships a catalog of GitHub Actions workflows and installs, refreshes \
                  and removes them under <project>/.github/workflows.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  marty workflow list                       \x1b[90m# Show bundled workflows\x1b[0m\n   \
                  marty workflow add issue-discussion       \x1b[90m# Install one workflow\x1b[0m\n   \
                  marty workflow add --all                  \x1b[90m# Install everything missing\x1b[0m\n   \
                  marty workflow update --all               \x1b[90m# Refresh installed workflows\x1b[0m\n   \
                  marty workflow delete issue-discussion    \x1b[90m# Remove a workflow\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "MARTY_PATH")]
    pub path: Option<PathBuf>,

    /// Read bundled workflows from this directory instead of the built-in set
    #[arg(long, global = true, hide = true, value_name = "DIR")]
    pub workflows_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage GitHub workflows
    Workflow(WorkflowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_workflow_list() {
        let cli = Cli::try_parse_from(["marty", "workflow", "list"]).unwrap();
        match cli.command {
            Commands::Workflow(args) => {
                assert!(matches!(args.command, WorkflowCommand::List(_)));
            }
            _ => panic!("Expected Workflow command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["marty", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["marty", "-v", "-p", "/tmp/project", "workflow", "list"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.path, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_path_after_subcommand() {
        let cli = Cli::try_parse_from([
            "marty",
            "workflow",
            "add",
            "issue-discussion",
            "--path",
            "/tmp/project",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_workflows_dir() {
        let cli = Cli::try_parse_from([
            "marty",
            "workflow",
            "list",
            "--workflows-dir",
            "/tmp/bundled",
        ])
        .unwrap();
        assert_eq!(cli.workflows_dir, Some(PathBuf::from("/tmp/bundled")));
    }

    #[test]
    fn test_cli_workflow_requires_subcommand() {
        assert!(Cli::try_parse_from(["marty", "workflow"]).is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["marty", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
