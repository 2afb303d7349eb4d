use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;

use taskhint::cli::args::{Cli, Commands, OutputFormat};
use taskhint::cli::commands::{self, CommandContext};
use taskhint::config::{Config, Paths};
use taskhint::error::TaskhintError;
use taskhint::features::nlp::Annotator;
use taskhint::storage::Database;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

struct App {
    paths: Paths,
    config: Config,
    annotator: Annotator,
    format: OutputFormat,
}

impl App {
    /// Open the database and run a store-backed command against it.
    fn with_store<F>(&self, command: F) -> Result<String>
    where
        F: FnOnce(&CommandContext<'_>) -> Result<String, TaskhintError>,
    {
        let db = Database::open(&self.paths)
            .with_context(|| format!("opening {}", self.paths.database.display()))?;
        let owner = self.config.general.owner();
        let ctx = CommandContext {
            store: &db,
            annotator: &self.annotator,
            owner: &owner,
            now: Local::now().naive_local(),
            format: self.format,
        };
        Ok(command(&ctx)?)
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    taskhint::logging::init(cli.verbose);

    let paths = Paths::resolve(cli.home)?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();

    let app = App {
        format: cli.output.unwrap_or(config.general.default_output),
        annotator: config.annotator.build(),
        paths,
        config,
    };
    log::debug!("using {}", app.paths.root.display());

    let output = match cli.command {
        Commands::Annotate { text } => commands::annotate(&app.annotator, &text, app.format)?,
        Commands::Add(args) => app.with_store(|ctx| commands::add(ctx, args))?,
        Commands::Edit(args) => app.with_store(|ctx| commands::edit(ctx, args))?,
        Commands::Complete { id } => app.with_store(|ctx| commands::complete(ctx, id))?,
        Commands::Reopen { id } => app.with_store(|ctx| commands::reopen(ctx, id))?,
        Commands::Delete { id } => app.with_store(|ctx| commands::delete(ctx, id))?,
        Commands::Agenda => app.with_store(commands::agenda)?,
        Commands::Today => app.with_store(commands::today)?,
        Commands::Overdue => app.with_store(commands::overdue)?,
        Commands::Upcoming => app.with_store(commands::upcoming)?,
        Commands::Tasks(args) => app.with_store(|ctx| commands::tasks(ctx, &args))?,
        Commands::Search(args) => app.with_store(|ctx| commands::search(ctx, &args))?,
        Commands::Stats => app.with_store(commands::stats)?,
        Commands::Lists(args) => app.with_store(|ctx| commands::lists(ctx, args.command))?,
        Commands::Config(args) => {
            commands::config(&app.paths, &app.config, args.command, app.format)?
        },
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
