//! Preference persistence.
//!
//! Display and pagination preferences survive across sessions as a
//! single JSON blob in a named slot. The slot contract mirrors a
//! browser-storage key: reading yields the raw string or nothing,
//! writing overwrites. Parsing and graceful degradation on malformed
//! content belong to the store, not the slot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which currency the view treats as primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// The reference currency prices are quoted in.
    #[serde(rename = "USD")]
    Usd,
    /// The secondary currency derived via the exchange rate.
    #[serde(rename = "Bs")]
    Bs,
}

/// How prices are presented. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    pub show_both_prices: bool,
    pub primary_currency: Currency,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            show_both_prices: true,
            primary_currency: Currency::Usd,
        }
    }
}

/// Items shown per page. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationPreference {
    pub items_per_page: usize,
}

impl Default for PaginationPreference {
    fn default() -> Self {
        Self { items_per_page: 6 }
    }
}

/// The persisted blob: at most two top-level fields, both optional so
/// a partial blob overlays only what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationPreference>,
}

/// A single named slot in a persistent key-value surface.
pub trait PreferenceSlot {
    /// The raw stored string, or `None` when the slot is absent or
    /// unreadable.
    fn read(&self) -> Option<String>;

    /// Overwrite the slot with `raw`.
    fn write(&self, raw: &str) -> io::Result<()>;
}

/// File-backed slot holding the blob at a fixed path.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default slot location: `{config_dir}/vitrina/preferences.json`,
    /// falling back to the current directory when the platform config
    /// directory is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vitrina").join("preferences.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceSlot for FileSlot {
    fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn write(&self, raw: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)
    }
}
