//! peoplepick CLI application entry point
//!
//! Opens an autocomplete picker over a list of people. Typing part of a name
//! narrows the suggestion list once typing pauses; picking a suggestion
//! prints that person.
//!
//! # Usage
//!
//! ```bash
//! # Interactive picker (default command)
//! peoplepick
//! peoplepick pick --debounce 150 --exit-on-select
//!
//! # Pick from your own data
//! peoplepick pick --data people.csv --json
//!
//! # Non-interactive listing
//! peoplepick list haver
//! peoplepick -q ls jan
//!
//! # Configuration
//! peoplepick config path
//! peoplepick config show
//! ```
//!
//! # Configuration
//!
//! On first run a default config is written to the user's config directory
//! (`~/.config/peoplepick/config.toml` on Linux).

use peoplepick::{
    cli::{Cli, Commands, ConfigCommands},
    config::PickerConfig,
    logging, output,
    people::Dataset,
    ui::{PickerApp, Theme},
    widget::{SearchWidget, WidgetConfig},
};
use std::path::PathBuf;

type Result<T> = peoplepick::Result<T>;

/// Handle the pick command - run the interactive picker
///
/// # Errors
///
/// Returns `PickerError` if the dataset cannot be loaded, the terminal cannot
/// be driven, or the selection cannot be serialized.
fn handle_pick_command(
    config: &PickerConfig,
    data: Option<PathBuf>,
    debounce: Option<u64>,
    exit_on_select: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    match config.log_path() {
        Some(log_path) => {
            if let Err(e) = logging::init(&log_path, &config.log_level) {
                if !quiet {
                    eprintln!("Warning: logging disabled: {e}");
                }
            }
        }
        None => {
            if !quiet {
                eprintln!("Warning: logging disabled: no cache directory");
            }
        }
    }

    let dataset = Dataset::load(data.as_deref().or(config.dataset.as_deref()))?;
    tracing::info!(people = dataset.len(), "dataset ready");

    let widget_config =
        debounce.map_or_else(|| config.widget_config(), WidgetConfig::from_millis);

    let widget = SearchWidget::new(dataset, widget_config).with_on_selected(|person| {
        tracing::debug!(label = %person.label(), "header updated");
    });

    let app = PickerApp::new()
        .with_theme(Theme::from(config.theme))
        .exit_on_select(exit_on_select || config.exit_on_select);

    match app.run(widget)? {
        Some(person) if json => println!("{}", output::person_json(&person)?),
        Some(person) => println!("{}", person.label()),
        None => tracing::info!("picker closed without a selection"),
    }

    Ok(())
}

/// Handle the list command - print matching people
///
/// # Errors
///
/// Returns `PickerError` if the dataset cannot be loaded or serialized.
fn handle_list_command(
    config: &PickerConfig,
    query: Option<&str>,
    data: Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let dataset = Dataset::load(data.as_deref().or(config.dataset.as_deref()))?;
    let query = query.unwrap_or("");
    let matches = dataset.search(query);

    if json {
        println!("{}", output::people_json(&matches)?);
        return Ok(());
    }

    for person in &matches {
        println!("{}", output::person_line(person, quiet));
    }

    if !quiet {
        println!(
            "\n{}",
            output::match_summary(matches.len(), dataset.len(), query)
        );
    }

    Ok(())
}

/// Handle config subcommands
///
/// # Errors
///
/// Returns `PickerError` if the config path cannot be resolved or the
/// configuration cannot be rendered.
fn handle_config_command(
    config: &PickerConfig,
    config_file: Option<PathBuf>,
    command: &ConfigCommands,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            let path = match config_file {
                Some(path) => path,
                None => PickerConfig::config_path()?,
            };
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| {
                ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
            })?;
            print!("{rendered}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => PickerConfig::load_from(path)?,
        None => PickerConfig::load()?,
    };

    let quiet = cli.quiet || config.quiet;

    match cli.get_command() {
        Commands::Pick {
            data_args,
            debounce,
            exit_on_select,
            json,
        } => handle_pick_command(&config, data_args.data, debounce, exit_on_select, json, quiet),
        Commands::List {
            query,
            data_args,
            json,
        } => handle_list_command(&config, query.as_deref(), data_args.data, json, quiet),
        Commands::Config { command } => handle_config_command(&config, cli.config, &command),
    }
}
