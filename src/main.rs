mod app;
mod catalog;
mod config;
mod container;
mod error;
mod filter;
mod logging;
mod search;
mod types;
mod ui;
mod view;

use clap::Parser;
use std::io;
use std::process::exit;

use catalog::Catalog;
use config::{Cli, SavedConfig, Settings, load_config, reset_config, save_config};
use container::FilterableTable;
use error::AppError;
use search::SearchEvents;

fn main() {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().or_else(config::default_log_path);
    match &log_path {
        Some(path) => {
            if let Err(e) = logging::init_logging(path, cli.debug) {
                eprintln!("⚠️  Warning: could not open log file {}: {}", path.display(), e);
            }
        }
        None => eprintln!("⚠️  Warning: no cache directory found, logging is disabled"),
    }

    // Handle reset flag first
    if cli.reset {
        match reset_config() {
            Ok(true) => println!("✅ Saved configuration has been reset."),
            Ok(false) => println!("ℹ️  No saved configuration found to reset."),
            Err(e) => {
                eprintln!("❌ Error resetting configuration: {}", e);
                exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("❌ {}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let saved = load_config();
    let mut table = startup(&cli, saved.as_ref(), save_config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&table.view())?);
        return Ok(());
    }

    log::info!(
        "Starting TUI with {} products in {} categories",
        table.catalog().len(),
        table.categories().len()
    );
    let mut terminal = ui::setup_terminal()?;
    let result = app::run(&mut table, &mut terminal);
    finish_tui(result, || ui::restore_terminal(&mut terminal))?;
    Ok(())
}

/// Restore the terminal after the event loop. An event-loop error wins over a
/// restore error; both are logged.
fn finish_tui(result: io::Result<()>, restore: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
    if let Err(e) = &result {
        log::error!("event loop failed: {}", e);
    }
    match (result, restore()) {
        (Err(e), Err(restore_err)) => {
            log::error!("restoring terminal failed: {}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

/// Resolve settings, load the catalog and apply the initial transitions from
/// the command line. Settings are saved only once the catalog has loaded.
fn startup(
    cli: &Cli,
    saved: Option<&SavedConfig>,
    save: impl FnOnce(&SavedConfig) -> io::Result<()>,
) -> Result<FilterableTable, AppError> {
    let settings = Settings::resolve(cli, saved);

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::reference(),
    };
    if catalog.is_empty() {
        log::warn!("Catalog has no products");
    }

    if cli.save {
        match save(&settings.to_saved()) {
            Ok(()) => eprintln!("💾 Configuration saved."),
            Err(e) => eprintln!("⚠️  Warning: Could not save configuration: {}", e),
        }
    }

    let mut table = FilterableTable::new(catalog, &settings.layout);
    if let Some(text) = &cli.filter {
        table.on_filter_text_changed(text.clone());
    }
    if cli.in_stock {
        table.on_stock_only_toggled();
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use std::cell::RefCell;

    fn no_save(_: &SavedConfig) -> io::Result<()> {
        panic!("settings must not be saved");
    }

    #[test]
    fn event_loop_error_survives_failed_restore() {
        let loop_err = io::Error::new(io::ErrorKind::BrokenPipe, "event loop");
        let result = finish_tui(Err(loop_err), || Err(io::Error::new(io::ErrorKind::Other, "restore")));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);

        let restored = std::cell::Cell::new(false);
        let result = finish_tui(Err(io::Error::new(io::ErrorKind::BrokenPipe, "event loop")), || {
            restored.set(true);
            Ok(())
        });
        assert!(restored.get());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);

        let result = finish_tui(Ok(()), || Err(io::Error::new(io::ErrorKind::Other, "restore")));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Other);
    }

    #[test]
    fn initial_flags_become_transitions() {
        let cli = Cli::try_parse_from(["product-table", "--filter", "BALL", "--in-stock"]).unwrap();
        let table = startup(&cli, None, no_save).unwrap();
        assert_eq!(table.state().filter_text, "BALL");
        assert!(table.state().in_stock_only);
        let view = table.view();
        let names: Vec<_> = view.table.sections[0].entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Football", "Baseball"]);
    }

    #[test]
    fn defaults_leave_state_untouched() {
        let table = startup(&Cli::default(), None, no_save).unwrap();
        assert_eq!(table.state().filter_text, "");
        assert!(!table.state().in_stock_only);
        assert_eq!(table.catalog().len(), 6);
    }

    #[test]
    fn broken_catalog_is_never_saved() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let cli = Cli { catalog: Some(missing), save: true, ..Cli::default() };

        let saved = RefCell::new(None);
        let result = startup(&cli, None, |config| {
            *saved.borrow_mut() = Some(config.clone());
            Ok(())
        });

        assert!(matches!(result, Err(AppError::Catalog(CatalogError::Io(_)))));
        assert_eq!(*saved.borrow(), None);
    }

    #[test]
    fn loaded_catalog_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"[{"name": "Kite", "category": "Toys", "price": "$5", "stocked": true}]"#).unwrap();
        let cli = Cli {
            catalog: Some(path.clone()),
            categories: Some(vec!["Toys".into()]),
            save: true,
            ..Cli::default()
        };

        let saved = RefCell::new(None);
        let table = startup(&cli, None, |config| {
            *saved.borrow_mut() = Some(config.clone());
            Ok(())
        })
        .unwrap();

        assert_eq!(table.categories(), &["Toys".to_string()]);
        let saved = saved.into_inner().unwrap();
        assert_eq!(saved.catalog_path, Some(path));
        assert_eq!(saved.categories, Some(vec!["Toys".to_string()]));
    }
}
