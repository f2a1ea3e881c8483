use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::types::CategoryLayout;

const APP_DIR: &str = "product-table";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "product-table.log";

#[derive(Parser, Debug, Default)]
#[command(name = "product-table", version, about = "Filterable product listing for the terminal")]
pub struct Cli {
    /// JSON file with an array of products (defaults to the built-in catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Comma-separated category order, e.g. "Sporting Goods,Electronics"
    #[arg(long, value_delimiter = ',')]
    pub categories: Option<Vec<String>>,
    /// Print the rendered table as JSON and exit
    #[arg(long)]
    pub json: bool,
    /// Initial search text
    #[arg(long)]
    pub filter: Option<String>,
    /// Start with "only show products in stock" checked
    #[arg(long)]
    pub in_stock: bool,
    /// Where to write the log (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log at debug level
    #[arg(long)]
    pub debug: bool,
    /// Remember --catalog and --categories for later runs
    #[arg(long)]
    pub save: bool,
    /// Forget saved settings and exit
    #[arg(long)]
    pub reset: bool,
}

/// Settings that survive between runs. Filter state is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

/// Where the catalog comes from and how it is laid out, after merging the
/// command line over the saved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub layout: CategoryLayout,
}

impl Settings {
    pub fn resolve(cli: &Cli, saved: Option<&SavedConfig>) -> Self {
        let catalog_path = cli
            .catalog
            .clone()
            .or_else(|| saved.and_then(|s| s.catalog_path.clone()));
        let configured = cli
            .categories
            .clone()
            .or_else(|| saved.and_then(|s| s.categories.clone()))
            .map(|list| {
                list.into_iter()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty());

        let layout = match (configured, &catalog_path) {
            (Some(list), _) => CategoryLayout::Fixed(list),
            (None, None) => Catalog::reference_layout(),
            (None, Some(_)) => CategoryLayout::Derived,
        };
        Settings { catalog_path, layout }
    }

    pub fn to_saved(&self) -> SavedConfig {
        SavedConfig {
            catalog_path: self.catalog_path.clone(),
            categories: match &self.layout {
                CategoryLayout::Fixed(list) => Some(list.clone()),
                CategoryLayout::Derived => None,
            },
        }
    }
}

fn app_dir(base: Option<PathBuf>) -> Option<PathBuf> {
    base.map(|dir| dir.join(APP_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    app_dir(dirs::config_dir()).map(|dir| dir.join(CONFIG_FILE))
}

pub fn default_log_path() -> Option<PathBuf> {
    app_dir(dirs::cache_dir().or_else(dirs::config_dir)).map(|dir| dir.join(LOG_FILE))
}

pub fn load_config() -> Option<SavedConfig> {
    load_config_at(&config_path()?)
}

pub fn load_config_at(path: &Path) -> Option<SavedConfig> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_config(config: &SavedConfig) -> io::Result<()> {
    let path = config_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory on this platform"))?;
    save_config_at(&path, config)
}

pub fn save_config_at(path: &Path, config: &SavedConfig) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    log::info!("Saved configuration to {}", path.display());
    Ok(())
}

/// Returns whether there was anything to remove.
pub fn reset_config() -> io::Result<bool> {
    match config_path() {
        Some(path) => reset_config_at(&path),
        None => Ok(false),
    }
}

pub fn reset_config_at(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
