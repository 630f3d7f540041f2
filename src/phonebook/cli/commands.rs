//! # CLI Layer
//!
//! The **only** place that knows about terminal I/O, exit codes, and output
//! wording.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: Install `env_logger` (stderr; `-v` for debug, `RUST_LOG` wins)
//! 3. **Context Setup**: Resolve the phonebook file and build the `ContactStore`
//! 4. **API Dispatch**: Call the matching `ContactStore` method
//! 5. **Output Formatting**: Render records and outcomes for humans

use super::menu::Menu;
use super::print::{info, print_records, success};
use super::setup::{Cli, Commands};
use clap::Parser;
use log::debug;
use phonebook::api::{ContactStore, InitOutcome};
use phonebook::config::{default_config_file, PhonebookConfig};
use phonebook::error::Result;
use phonebook::model::ContactField;
use phonebook::store::fs::FileStore;
use std::io;

struct AppContext {
    api: ContactStore<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Create {
            name,
            phone,
            comment,
        }) => handle_create(&mut ctx, &name, &phone, &comment),
        Some(Commands::Search { query }) => handle_search(&ctx, &query),
        Some(Commands::Update {
            index,
            field,
            value,
        }) => handle_update(&mut ctx, index, field.into(), &value),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Init) => handle_init(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_file = match &cli.config {
        Some(path) => Some(path.clone()),
        None => default_config_file().ok(),
    };
    let mut config = PhonebookConfig::load(config_file.as_deref())?;
    if let Some(file) = &cli.file {
        config.file = Some(file.clone());
    }

    let path = config.store_file()?;
    debug!("using phonebook file {}", path.display());

    Ok(AppContext {
        api: ContactStore::open(path),
    })
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let attended = console::Term::stdout().is_term();
    Menu::new(&mut ctx.api, stdin.lock(), io::stdout())
        .with_screen_clearing(attended)
        .run()
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let records = ctx.api.load()?;
    print_records(&records, true, "No contacts.");
    Ok(())
}

fn handle_create(ctx: &mut AppContext, name: &str, phone: &str, comment: &str) -> Result<()> {
    let record = ctx.api.create(name, phone, comment)?;
    println!("{}", success(&format!("Contact created: {}", record.name)));
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let found = ctx.api.find(query)?;
    print_records(&found, false, "No matches.");
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    index: usize,
    field: ContactField,
    value: &str,
) -> Result<()> {
    let record = ctx.api.update(index, field, value)?;
    println!(
        "{}",
        success(&format!("Contact {} updated ({}): {}", index, field, record.name))
    );
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    let removed = ctx.api.delete(index)?;
    println!(
        "{}",
        success(&format!("Contact \"{}\" deleted", removed.name))
    );
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let location = ctx.api.location();
    match ctx.api.init()? {
        InitOutcome::Created => println!(
            "{}",
            success(&format!("Initialized phonebook at {}", location.display()))
        ),
        InitOutcome::AlreadyInitialized => println!(
            "{}",
            info(&format!(
                "Phonebook already initialized at {}",
                location.display()
            ))
        ),
    }
    Ok(())
}
