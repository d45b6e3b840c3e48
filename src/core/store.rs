//! Persistent slot store
//!
//! The storage port is a plain key/value interface over JSON-encoded string
//! values, so any backing (directory of files, in-memory map, embedded
//! database) can implement it. The application never sees a storage error:
//! a missing or undecodable slot falls back to the caller's default, and a
//! failed write is warned about and swallowed; in-memory state stays the
//! source of truth for the session either way.

use console::style;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// The seven named slots re-saved as a batch on every committed mutation
pub const SLOTS: [&str; 7] = [
    "chapters",
    "methodology",
    "references",
    "tasks",
    "notes",
    "darkMode",
    "coverPage",
];

/// Key/value storage port for JSON-encoded slot values
pub trait SlotStore {
    /// Read the raw value of a slot, `None` when absent
    fn read(&self, key: &str) -> Option<String>;

    /// Write the raw value of a slot
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Load a slot, falling back to `default` on absence or decode failure
///
/// Decode failure is treated identically to "key not found"; neither is
/// surfaced to the caller.
pub fn load<T: DeserializeOwned>(store: &dyn SlotStore, key: &str, default: T) -> T {
    match store.read(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or(default),
        None => default,
    }
}

/// Save a slot, warning and swallowing any storage failure
pub fn save<T: Serialize>(store: &mut dyn SlotStore, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} Failed to encode slot '{}': {}", style("!").yellow(), key, e);
            return;
        }
    };
    if let Err(e) = store.write(key, &encoded) {
        eprintln!("{} Failed to persist slot '{}': {}", style("!").yellow(), key, e);
    }
}

/// Slot store backed by a directory of `<key>.json` files
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(key), value)
    }
}

/// In-memory slot store for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
