use crate::common::config::{DEFAULT_BUCKET_COUNT, HISTORY_FILE, PROMPT, TableConfig};
use crate::common::exception::TableError;
use crate::common::logger::initialize_logger;
use crate::container::contact::Contact;
use crate::container::hash_function::HashStrategy;
use crate::container::hash_table::{ContactTable, InsertOutcome};
use clap::Parser;
use colored::*;
use log::{debug, info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::error::Error;
use std::io::{self, Write};
use std::ops::ControlFlow;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of buckets; fixed for the lifetime of the table
    #[arg(short, long, default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: usize,

    /// Hash strategy: additive, polynomial or xxh3
    #[arg(short = 'H', long = "hash", default_value_t = HashStrategy::Additive)]
    hash: HashStrategy,

    /// Load the sample contacts, print the table and exit
    #[arg(short, long)]
    demo: bool,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { name: String, number: String },
    Search { name: String },
    Print,
    Stats,
    Help,
    Exit,
}

/// Parses one line of shell input.
pub fn parse_command(line: &str) -> Result<Command, TableError> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err(TableError::InvalidCommand("empty input".to_string()));
    };
    let args: Vec<&str> = parts.collect();

    match (verb.to_lowercase().as_str(), args.as_slice()) {
        ("insert", [name, number]) => Ok(Command::Insert {
            name: name.to_string(),
            number: number.to_string(),
        }),
        ("insert", _) => Err(TableError::InvalidCommand(
            "usage: insert <name> <number>".to_string(),
        )),
        ("search", [name]) => Ok(Command::Search {
            name: name.to_string(),
        }),
        ("search", _) => Err(TableError::InvalidCommand(
            "usage: search <name>".to_string(),
        )),
        ("print", []) => Ok(Command::Print),
        ("stats", []) => Ok(Command::Stats),
        ("help", []) => Ok(Command::Help),
        ("exit" | "quit", []) => Ok(Command::Exit),
        (other, _) => Err(TableError::InvalidCommand(format!(
            "unknown command '{}', type 'help' for a list",
            other
        ))),
    }
}

/// Runs shell commands against a single table.
pub struct TableCommandExecutor {
    table: ContactTable,
}

impl TableCommandExecutor {
    pub fn new(table: ContactTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ContactTable {
        &self.table
    }

    /// Parses and runs one input line, writing any output to `out`.
    pub fn execute_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<ControlFlow<()>, TableError> {
        let command = parse_command(line)?;
        self.execute(command, out)
    }

    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<ControlFlow<()>, TableError> {
        match command {
            Command::Insert { name, number } => self.handle_insert(name, number, out)?,
            Command::Search { name } => self.handle_search(&name, out)?,
            Command::Print => self.table.write_to(out)?,
            Command::Stats => self.handle_stats(out)?,
            Command::Help => display_help(out)?,
            Command::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn handle_insert<W: Write>(
        &mut self,
        name: String,
        number: String,
        out: &mut W,
    ) -> Result<(), TableError> {
        let contact = Contact::new(name.clone(), number.clone());
        let verb = match self.table.insert(name, number) {
            InsertOutcome::Inserted => "Inserted",
            InsertOutcome::Updated => "Updated",
        };
        writeln!(out, "{} {}", verb, contact)?;
        Ok(())
    }

    fn handle_search<W: Write>(&self, name: &str, out: &mut W) -> Result<(), TableError> {
        match self.table.search(name) {
            Some(contact) => writeln!(out, "{}", contact)?,
            None => writeln!(out, "{} not found", name)?,
        }
        Ok(())
    }

    fn handle_stats<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        let snapshot = self.table.metrics_snapshot();
        writeln!(out, "{:<20}{}", "Hash Strategy", self.table.hash_strategy())?;
        writeln!(out, "{:<20}{}", "Buckets", snapshot.bucket_count)?;
        writeln!(out, "{:<20}{}", "Entries", snapshot.len)?;
        writeln!(out, "{:<20}{}", "Occupied Buckets", snapshot.occupied_buckets)?;
        writeln!(out, "{:<20}{}", "Longest Chain", snapshot.longest_chain)?;
        writeln!(out, "{:<20}{:.2}", "Load Factor", self.table.load_factor())?;
        writeln!(
            out,
            "{:<20}{} ({} new, {} updates)",
            "Inserts", snapshot.insert_calls, snapshot.insert_new, snapshot.insert_updates
        )?;
        writeln!(
            out,
            "{:<20}{} ({} hits, {} misses, {} chain steps)",
            "Searches",
            snapshot.search_calls,
            snapshot.search_hits,
            snapshot.search_misses,
            snapshot.search_chain_steps
        )?;
        Ok(())
    }
}

fn display_help<W: Write>(out: &mut W) -> Result<(), TableError> {
    writeln!(out, "Available Commands:")?;
    writeln!(out, "  insert <name> <number>  - Add a contact or replace its number")?;
    writeln!(out, "  search <name>           - Look up a contact")?;
    writeln!(out, "  print                   - Show every bucket and its chain")?;
    writeln!(out, "  stats                   - Show table shape and operation counters")?;
    writeln!(out, "  help                    - Show this help message")?;
    writeln!(out, "  exit                    - Leave the shell")?;
    Ok(())
}

/// Loads the sample contacts (with one update), prints the table and two lookups.
pub fn run_demo<W: Write>(table: &mut ContactTable, out: &mut W) -> Result<(), TableError> {
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");
    table.insert("Rebecca", "999-444-9999");

    table.write_to(out)?;

    writeln!(out)?;
    for name in ["John", "Chris"] {
        match table.search(name) {
            Some(contact) => writeln!(out, "Search for {}: {}", name, contact)?,
            None => writeln!(out, "Search for {}: not found", name)?,
        }
    }
    Ok(())
}

pub fn run_cli() -> Result<(), Box<dyn Error>> {
    initialize_logger();
    let args = Args::parse();

    let config = TableConfig::new(args.buckets, args.hash);
    let mut table = ContactTable::with_config(config)?;
    info!(
        "Contact table ready: {} buckets, {} hashing",
        config.bucket_count, config.hash_strategy
    );

    if args.demo {
        let mut stdout = io::stdout().lock();
        run_demo(&mut table, &mut stdout)?;
        return Ok(());
    }

    println!("{}", "\nChained Contact Table".blue().bold());
    println!("Type 'help' for commands\n");

    let mut executor = TableCommandExecutor::new(table);

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(HISTORY_FILE).is_err() {
        println!("{}", "No previous history.".yellow());
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }

                rl.add_history_entry(command)?;

                let mut stdout = io::stdout().lock();
                match executor.execute_line(command, &mut stdout) {
                    Ok(ControlFlow::Continue(())) => {}
                    Ok(ControlFlow::Break(())) => {
                        println!("Shutting down...");
                        break;
                    }
                    Err(e) => println!("{}", format!("Error: {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("Input closed, leaving shell");
                break;
            }
            Err(err) => {
                warn!("Line editor failed: {}", err);
                println!("Error: {}", err);
                break;
            }
        }
    }

    rl.save_history(HISTORY_FILE)?;
    Ok(())
}
