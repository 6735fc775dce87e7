use chrono::{Local, NaiveDate};
use clap::Parser;
use moodjour::application::{
    build_dashboard, init::init, list_entries, load_journal, ConfigService, RecordEntryService,
};
use moodjour::cli::{format_analysis, format_dashboard, format_entry_list, Cli, Commands};
use moodjour::domain::{Analysis, DATE_FORMAT};
use moodjour::error::MoodjourError;
use moodjour::infrastructure::{init_logging, Config, FileSystemRepository, JournalRepository};
use std::io::Read;

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Join positional words, or read the whole of stdin when there are none
fn collect_text(words: Vec<String>) -> Result<String, MoodjourError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn today_or(override_date: Option<NaiveDate>) -> NaiveDate {
    override_date.unwrap_or_else(|| Local::now().date_naive())
}

fn run(cli: Cli) -> Result<(), MoodjourError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Add { date, today, text } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let text = collect_text(text)?;
            let today = today_or(today);

            let mut service = RecordEntryService::open(repo.journal_store(&config))?;
            let date_input = date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
            let entry = service.execute(&date_input, &text, today)?;

            println!("Entry saved.");
            println!("Emotion: {}", entry.emotion().display(config.emoji));
            Ok(())
        }
        Commands::Analyze { text } => {
            // Outside a journal there is no config; use the default display
            let emoji = match FileSystemRepository::discover() {
                Ok(repo) => repo.load_config()?.emoji,
                Err(MoodjourError::NotJournalDirectory(_)) => Config::default().emoji,
                Err(e) => return Err(e),
            };
            let analysis = Analysis::of(&collect_text(text)?)?;
            print!("{}", format_analysis(&analysis, emoji));
            Ok(())
        }
        Commands::List { limit } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let journal = load_journal(&repo.journal_store(&config))?;

            println!("{}", format_entry_list(list_entries(&journal, limit), config.emoji));
            Ok(())
        }
        Commands::Dashboard { today } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let journal = load_journal(&repo.journal_store(&config))?;

            match build_dashboard(&journal, today_or(today)) {
                Some(dashboard) => print!("{}", format_dashboard(&dashboard, config.emoji)),
                None => println!("No data: Add some entries first!"),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("journal_file = {}", config.journal_file);
                println!("emoji = {}", config.emoji);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: journal_file, emoji, created");
                Ok(())
            }
        }
    }
}
