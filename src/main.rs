mod cli;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::{Cli, Command};
use colored::*;
use github_repo_record::RepoRecord;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout only carries field output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let record = load_record(&cli)?;

    match &cli.command {
        Command::Get { key } => print_value(record.get(key), cli.raw),
        Command::Owner { key } => {
            print_value(record.owner.as_ref().and_then(|owner| owner.get(key)), cli.raw)
        }
        Command::Fields => {
            for field in record.fields() {
                println!("{}", field);
            }
        }
        Command::Summary => print_summary(&record),
    }

    Ok(())
}

fn load_record(cli: &Cli) -> anyhow::Result<RepoRecord> {
    match &cli.file {
        Some(path) => {
            info!(path = %path.display(), "Reading repository document");
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            RepoRecord::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to decode {}", path.display()))
        }
        None => RepoRecord::from_reader(io::stdin().lock())
            .context("Failed to decode repository document from stdin"),
    }
}

fn print_value(value: Option<Value>, raw: bool) {
    match value {
        Some(value) if raw => println!("{}", value),
        Some(Value::String(text)) => println!("{}", text),
        Some(value) => println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        ),
        None if raw => println!("null"),
        None => eprintln!("{}", "(absent)".dimmed()),
    }
}

fn print_summary(record: &RepoRecord) {
    let title = record
        .full_name
        .as_deref()
        .or(record.name.as_deref())
        .unwrap_or("<unnamed repository>");

    println!("{}", title.bold().green());
    println!("{}", "=".repeat(50).dimmed());

    if let Some(description) = &record.description {
        println!("{}\n", description);
    }

    let count = |value: Option<u64>| value.map_or_else(|| "-".to_string(), |n| n.to_string());
    println!("⭐ Stars:       {}", count(record.stargazers_count));
    println!("🍴 Forks:       {}", count(record.forks_count.or(record.forks)));
    println!("👀 Watchers:    {}", count(record.watchers_count.or(record.watchers)));
    println!("🐛 Open issues: {}", count(record.open_issues_count.or(record.open_issues)));

    if let Some(login) = record.owner_login() {
        println!("👤 Owner:       {}", login);
    }
    if let Some(language) = &record.language {
        println!("💬 Language:    {}", language);
    }
    if let Some(branch) = &record.default_branch {
        println!("🌿 Branch:      {}", branch);
    }

    let flags: Vec<&str> = [
        ("private", record.private),
        ("fork", record.fork),
        ("issues", record.has_issues),
        ("wiki", record.has_wiki),
        ("pages", record.has_pages),
        ("projects", record.has_projects),
        ("downloads", record.has_downloads),
    ]
    .into_iter()
    .filter_map(|(label, flag)| (flag == Some(true)).then_some(label))
    .collect();
    if !flags.is_empty() {
        println!("🏷️  Flags:       {}", flags.join(", ").cyan());
    }

    // Unparseable timestamps are shown as received
    let timestamp = |parsed: Option<DateTime<Utc>>, raw: &Option<String>| match (parsed, raw) {
        (Some(at), _) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        (None, Some(raw)) => raw.yellow().to_string(),
        (None, None) => "-".dimmed().to_string(),
    };
    println!("\n{}", "Timestamps".bold());
    println!("  created: {}", timestamp(record.created_at_utc(), &record.created_at));
    println!("  updated: {}", timestamp(record.updated_at_utc(), &record.updated_at));
    println!("  pushed:  {}", timestamp(record.pushed_at_utc(), &record.pushed_at));
}
