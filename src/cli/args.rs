use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::TimeOfDay;
use crate::features::nlp::PriorityLevel;
use crate::tasks::{ListId, TaskId};

#[derive(Parser)]
#[command(name = "taskhint")]
#[command(about = "A task manager that reads times and priorities out of what you type")]
#[command(long_about = "taskhint - natural-language task annotation

Write tasks the way you think of them. taskhint picks up a time of day
(\"3pm\", \"11 am\") and a priority (\"urgent\", \"no rush\") from the title and
description, and fills in the fields for you.

QUICK START:
  taskhint add \"Call the bank at 3pm, urgent\"   Add a task
  taskhint annotate \"standup 9am low priority\"  Show what would be inferred
  taskhint agenda                               Overdue, today, upcoming
  taskhint today                                Today's agenda
  taskhint overdue                              Tasks past their time

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskhint <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to
    /// `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding config.yaml and the task database
    #[arg(long, env = "TASKHINT_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the time and priority inferred from text
    ///
    /// Nothing is stored. Words are joined with spaces before annotating.
    ///
    /// # Examples
    ///
    ///   taskhint annotate "Dentist at 11am"
    ///   taskhint annotate urgent call 3pm -o json
    Annotate {
        /// Text to annotate
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Add a task
    ///
    /// The title and description are annotated. An inferred time or
    /// priority replaces the one given with --time or --priority.
    ///
    /// # Examples
    ///
    ///   taskhint add "Call the bank at 3pm, urgent"
    ///   taskhint add "Water plants" --due tomorrow --time 08:00
    ///   taskhint add "Report" -d "no rush" --list 2
    ///   taskhint add "Lunch 1pm" --dry-run
    #[command(alias = "a")]
    Add(AddArgs),

    /// Edit a task
    ///
    /// The new title and description are annotated again. Inferred values
    /// replace the stored ones; otherwise stored values are kept.
    ///
    /// # Examples
    ///
    ///   taskhint edit 4 --title "Call the bank at 4pm"
    ///   taskhint edit 4 --due friday -p low
    #[command(alias = "e")]
    Edit(EditArgs),

    /// Mark a task as completed
    Complete {
        /// Task ID
        id: TaskId,
    },

    /// Mark a completed task as open again
    Reopen {
        /// Task ID
        id: TaskId,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },

    /// Overdue, today, and upcoming tasks in one view
    Agenda,

    /// Open tasks due today that are not yet overdue
    #[command(alias = "t")]
    Today,

    /// Open tasks whose due date and time have passed
    #[command(alias = "o")]
    Overdue,

    /// Open tasks due after today
    #[command(alias = "u")]
    Upcoming,

    /// List your tasks
    ///
    /// # Examples
    ///
    ///   taskhint tasks              Open tasks
    ///   taskhint tasks --all        Include completed tasks
    ///   taskhint tasks --list 2     Only tasks in list 2
    Tasks(TasksArgs),

    /// Search open tasks by title, or lists by name
    ///
    /// Matches a case-insensitive substring. A blank query matches nothing.
    ///
    /// # Examples
    ///
    ///   taskhint search bank
    ///   taskhint search --lists groc
    Search(SearchArgs),

    /// Completion counts and rates for the last 7 days
    ///
    /// Each day counts your tasks due that day and how many of them are
    /// completed.
    Stats,

    /// Manage task lists
    ///
    /// The Inbox (ID 1) always exists and cannot be renamed or removed.
    Lists(ListsArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: taskhint completions bash > ~/.bash_completion.d/taskhint
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for the add command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Task title, annotated together with the description
    pub title: String,

    /// Longer description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Due date: today, tomorrow, a weekday, "in 3 days", or YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,

    /// Time of day (HH:mm), used when the text names no time
    #[arg(long)]
    pub time: Option<TimeOfDay>,

    /// Priority (none, low, medium, high), used when the text implies none
    #[arg(short, long)]
    pub priority: Option<PriorityLevel>,

    /// List ID (defaults to the Inbox)
    #[arg(short, long)]
    pub list: Option<ListId>,

    /// Show the task that would be created without storing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the edit command.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Task ID
    pub id: TaskId,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New due date
    #[arg(long)]
    pub due: Option<String>,

    /// New time of day (HH:mm)
    #[arg(long)]
    pub time: Option<TimeOfDay>,

    /// New priority
    #[arg(short, long)]
    pub priority: Option<PriorityLevel>,

    /// Move to another list
    #[arg(short, long)]
    pub list: Option<ListId>,
}

/// Arguments for the tasks command.
#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Only tasks in this list
    #[arg(short, long)]
    pub list: Option<ListId>,

    /// Include completed tasks
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for
    pub query: String,

    /// Search list names instead of task titles
    #[arg(long)]
    pub lists: bool,
}

#[derive(Args)]
pub struct ListsArgs {
    #[command(subcommand)]
    pub command: ListsCommands,
}

#[derive(Subcommand)]
pub enum ListsCommands {
    /// Show the Inbox and your lists
    Show,

    /// Create a list
    Add {
        /// List name
        name: String,
    },

    /// Rename a list
    Rename {
        /// List ID
        id: ListId,
        /// New name
        name: String,
    },

    /// Remove a list; its tasks move to the Inbox
    Remove {
        /// List ID
        id: ListId,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["taskhint", "today"]).unwrap();
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["taskhint", "--output", "json", "today"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_after_subcommand() {
        let cli = Cli::try_parse_from(["taskhint", "today", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["taskhint", "-vv", "today"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_aliases() {
        let cli = Cli::try_parse_from(["taskhint", "t"]).unwrap();
        assert!(matches!(cli.command, Commands::Today));
        let cli = Cli::try_parse_from(["taskhint", "o"]).unwrap();
        assert!(matches!(cli.command, Commands::Overdue));
        let cli = Cli::try_parse_from(["taskhint", "u"]).unwrap();
        assert!(matches!(cli.command, Commands::Upcoming));
    }

    #[test]
    fn test_cli_annotate_joins_words() {
        let cli = Cli::try_parse_from(["taskhint", "annotate", "call", "at", "3pm"]).unwrap();
        if let Commands::Annotate { text } = cli.command {
            assert_eq!(text, vec!["call", "at", "3pm"]);
        } else {
            panic!("Expected Annotate command");
        }
    }

    #[test]
    fn test_cli_annotate_requires_text() {
        assert!(Cli::try_parse_from(["taskhint", "annotate"]).is_err());
    }

    #[test]
    fn test_cli_add_command() {
        let cli = Cli::try_parse_from([
            "taskhint", "add", "Report", "-d", "no rush", "--time", "09:30", "-p", "high",
            "--list", "2", "--dry-run",
        ])
        .unwrap();
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.title, "Report");
            assert_eq!(args.description, "no rush");
            assert_eq!(args.time, TimeOfDay::new(9, 30));
            assert_eq!(args.priority, Some(PriorityLevel::High));
            assert_eq!(args.list, Some(2));
            assert!(args.dry_run);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_add_rejects_bad_time() {
        assert!(Cli::try_parse_from(["taskhint", "add", "x", "--time", "3pm"]).is_err());
    }

    #[test]
    fn test_cli_add_rejects_bad_priority() {
        assert!(Cli::try_parse_from(["taskhint", "add", "x", "-p", "urgent"]).is_err());
    }

    #[test]
    fn test_cli_edit_command() {
        let cli = Cli::try_parse_from(["taskhint", "edit", "4", "--title", "New"]).unwrap();
        if let Commands::Edit(args) = cli.command {
            assert_eq!(args.id, 4);
            assert_eq!(args.title.as_deref(), Some("New"));
            assert!(args.description.is_none());
        } else {
            panic!("Expected Edit command");
        }
    }

    #[test]
    fn test_cli_lists_rename() {
        let cli = Cli::try_parse_from(["taskhint", "lists", "rename", "2", "Work"]).unwrap();
        if let Commands::Lists(args) = cli.command {
            assert!(matches!(
                args.command,
                ListsCommands::Rename { id: 2, ref name } if name == "Work"
            ));
        } else {
            panic!("Expected Lists command");
        }
    }

    #[test]
    fn test_cli_search_lists_flag() {
        let cli = Cli::try_parse_from(["taskhint", "search", "--lists", "groc"]).unwrap();
        if let Commands::Search(args) = cli.command {
            assert_eq!(args.query, "groc");
            assert!(args.lists);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_cli_agenda_and_stats() {
        let cli = Cli::try_parse_from(["taskhint", "agenda"]).unwrap();
        assert!(matches!(cli.command, Commands::Agenda));
        let cli = Cli::try_parse_from(["taskhint", "stats"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn test_cli_home_flag() {
        let cli = Cli::try_parse_from(["taskhint", "--home", "/tmp/th", "today"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/th")));
    }

    #[test]
    fn test_cli_completions_shell() {
        let cli = Cli::try_parse_from(["taskhint", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions {
                shell: Shell::Zsh,
                install: false
            }
        ));
    }
}
