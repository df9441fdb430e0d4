use clap::{Args, Parser, Subcommand};

/// Arguments for the workflow command
#[derive(Parser, Debug)]
pub struct WorkflowArgs {
    #[command(subcommand)]
    pub command: WorkflowCommand,
}

#[derive(Subcommand, Debug)]
pub enum WorkflowCommand {
    /// Add a workflow to your project
    Add(AddArgs),

    /// Update an existing workflow from the bundled version
    Update(UpdateArgs),

    /// Delete a workflow from your project
    Delete(DeleteArgs),

    /// List available and installed workflows
    List(ListArgs),
}

/// A workflow name given either positionally or with `--name`
#[derive(Args, Debug, Default)]
pub struct NameArg {
    /// Workflow name (e.g. issue-discussion)
    #[arg(value_name = "NAME", conflicts_with = "name_flag")]
    pub name: Option<String>,

    /// Workflow name, as an alternative to the positional argument
    #[arg(long = "name", id = "name_flag", value_name = "NAME")]
    pub name_flag: Option<String>,
}

impl NameArg {
    pub fn get(&self) -> Option<&str> {
        self.name.as_deref().or(self.name_flag.as_deref())
    }
}

/// Arguments for the workflow add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add a single workflow:\n    marty workflow add issue-discussion\n\n\
                  Add every bundled workflow that is not installed yet:\n    marty workflow add --all\n\n\
                  Add to another project:\n    marty workflow add issue-discussion --path ../other")]
pub struct AddArgs {
    #[command(flatten)]
    pub name: NameArg,

    /// Add all bundled workflows
    #[arg(long, short = 'a', conflicts_with_all = ["name", "name_flag"])]
    pub all: bool,
}

/// Arguments for the workflow update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update a single workflow:\n    marty workflow update issue-discussion\n\n\
                  Update every installed workflow:\n    marty workflow update --all")]
pub struct UpdateArgs {
    #[command(flatten)]
    pub name: NameArg,

    /// Update all installed workflows
    #[arg(long, short = 'a', conflicts_with_all = ["name", "name_flag"])]
    pub all: bool,
}

/// Arguments for the workflow delete command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete a workflow:\n    marty workflow delete issue-discussion")]
pub struct DeleteArgs {
    #[command(flatten)]
    pub name: NameArg,
}

/// Arguments for the workflow list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List bundled workflows:\n    marty workflow list\n\n\
                  Show content state and untracked workflows:\n    marty workflow list --detailed")]
pub struct ListArgs {
    /// Show whether installed workflows match the bundled version
    #[arg(long)]
    pub detailed: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use super::*;

    fn parse_workflow(args: &[&str]) -> WorkflowCommand {
        let mut argv = vec!["marty", "workflow"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Workflow(args) => args.command,
            _ => panic!("Expected Workflow command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_positional() {
        match parse_workflow(&["add", "issue-discussion"]) {
            WorkflowCommand::Add(args) => {
                assert_eq!(args.name.get(), Some("issue-discussion"));
                assert!(!args.all);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_name_flag() {
        match parse_workflow(&["add", "--name", "issue-discussion"]) {
            WorkflowCommand::Add(args) => {
                assert_eq!(args.name.get(), Some("issue-discussion"));
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_all() {
        match parse_workflow(&["add", "-a"]) {
            WorkflowCommand::Add(args) => {
                assert!(args.all);
                assert_eq!(args.name.get(), None);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_no_args() {
        match parse_workflow(&["add"]) {
            WorkflowCommand::Add(args) => {
                assert!(!args.all);
                assert_eq!(args.name.get(), None);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_add_name_conflicts_with_all() {
        let result = Cli::try_parse_from(["marty", "workflow", "add", "ci", "--all"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["marty", "workflow", "add", "--name", "ci", "--all"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_positional_conflicts_with_name_flag() {
        let result = Cli::try_parse_from(["marty", "workflow", "delete", "a", "--name", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_update_all() {
        match parse_workflow(&["update", "--all"]) {
            WorkflowCommand::Update(args) => assert!(args.all),
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_cli_parsing_delete() {
        match parse_workflow(&["delete", "issue-discussion"]) {
            WorkflowCommand::Delete(args) => {
                assert_eq!(args.name.get(), Some("issue-discussion"));
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_cli_parsing_list_detailed() {
        match parse_workflow(&["list", "--detailed"]) {
            WorkflowCommand::List(args) => assert!(args.detailed),
            _ => panic!("Expected List command"),
        }
    }
}
