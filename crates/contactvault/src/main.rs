//! `cvault` - CLI for contactvault
//!
//! This binary provides the command-line interface for submitting,
//! browsing, and exporting locally stored contact-form submissions.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use contactvault::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, ExportCommand, ListCommand,
    MarkCommand, StatsCommand,
};
use contactvault::render::{render, render_empty, ContactFilter};
use contactvault::{export, init_logging, Config, ContactApi, Error, Store, Submission};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Add(cmd) => handle_add(&config, cmd).await,
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Delete(cmd) => handle_delete(&config, &cmd).await,
        Command::Mark(cmd) => handle_mark(&config, &cmd).await,
        Command::Export(cmd) => handle_export(&config, &cmd),
        Command::Stats(cmd) => handle_stats(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_api(config: &Config) -> anyhow::Result<ContactApi> {
    let store = Store::open(config.database_path())
        .with_context(|| format!("opening store at {}", config.database_path().display()))?;
    Ok(ContactApi::with_config(store, config.api_config()))
}

async fn handle_add(config: &Config, cmd: AddCommand) -> anyhow::Result<()> {
    let mut api = open_api(config)?;
    let submission = Submission::from(cmd);
    let first_name = submission.first_name.clone();

    match api.create(submission).await {
        Ok(record) => {
            println!(
                "Thank you {first_name}! Your message has been saved (contact #{}).",
                record.id
            );
            Ok(())
        }
        Err(Error::Validation(errors)) => {
            eprintln!("{}.", errors.join(". "));
            std::process::exit(1);
        }
        Err(Error::ServiceUnavailable) => {
            eprintln!("Failed to save contact. Please try again.");
            std::process::exit(1);
        }
        Err(e) if e.is_storage() => {
            // The record made it into memory but not onto disk; for a
            // one-shot CLI that means the submission is lost on exit.
            warn!("Persisting the contact failed: {e}");
            eprintln!("Failed to save contact. Please try again.");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let api = open_api(config)?;
    let filter = ContactFilter {
        search_term: cmd.search.clone(),
        status: cmd.status.map(Into::into),
    };

    let records = api.store().records();

    if cmd.json {
        let matched = filter.apply(records);
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if records.is_empty() {
        print!("{}", render_empty("No contacts saved yet."));
        return Ok(());
    }

    let rendered = render(records, &filter, config.view.message_preview_len);
    if rendered.is_empty() {
        print!(
            "{}",
            render_empty("No contacts found matching your criteria.")
        );
    } else {
        print!("{rendered}");
    }
    Ok(())
}

async fn handle_delete(config: &Config, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let mut api = open_api(config)?;

    if api.delete(cmd.id).await? {
        println!("Contact deleted successfully.");
    } else {
        println!("No contact with id {}.", cmd.id);
    }
    Ok(())
}

async fn handle_mark(config: &Config, cmd: &MarkCommand) -> anyhow::Result<()> {
    let mut api = open_api(config)?;
    let status = cmd.status.into();

    if api.update_status(cmd.id, status).await? {
        println!("Contact marked as {status}.");
    } else {
        println!("No contact with id {}.", cmd.id);
    }
    Ok(())
}

fn handle_export(config: &Config, cmd: &ExportCommand) -> anyhow::Result<()> {
    let api = open_api(config)?;
    let records = api.store().records();

    if records.is_empty() {
        println!("No contacts to export.");
        return Ok(());
    }

    let path = cmd.output.clone().unwrap_or_else(|| {
        export::export_file_name(chrono::Utc::now().date_naive()).into()
    });

    export::write_csv(&path, records)
        .with_context(|| format!("writing CSV to {}", path.display()))?;
    println!("Exported {} contacts to {}.", records.len(), path.display());
    Ok(())
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> anyhow::Result<()> {
    let api = open_api(config)?;
    let stats = api.store().stats();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("cvault stats");
        println!("------------");
        println!("Database:  {}", api.store().path().display());
        println!("Total:     {}", stats.total);
        println!("New:       {}", stats.new_count);
        println!("Read:      {}", stats.read_count);
        println!("Replied:   {}", stats.replied_count);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:       {}", config.database_path().display());
                println!();
                println!("[Api]");
                println!("  Create delay (ms):   {}", config.api.create_delay_ms);
                println!("  Mutate delay (ms):   {}", config.api.mutate_delay_ms);
                println!("  Failure probability: {}", config.api.failure_probability);
                println!();
                println!("[View]");
                println!("  Message preview:     {}", config.view.message_preview_len);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
