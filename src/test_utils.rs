//! Testing utilities and mock implementations
//!
//! Mock implementations of the session collaborator seams so persistence
//! and export can be exercised on the host without a real store.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::error::Result;
use crate::session::{ExportSink, PersistenceProvider};

// =============================================================================
// Mock Persistence Store
// =============================================================================

/// In-memory string-keyed store standing in for the host's persistence
#[derive(Debug, Default)]
pub struct MockStore {
    entries: RefCell<HashMap<String, String>>,
    /// Record of saves: (key, value)
    save_log: RefCell<Vec<(String, String)>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry without going through `save`
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Current value under `key`, if any (for test verification)
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// All saves that have been made
    pub fn saves(&self) -> Vec<(String, String)> {
        self.save_log.borrow().clone()
    }
}

impl PersistenceProvider for MockStore {
    fn load(&mut self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.save_log
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

// =============================================================================
// Mock Export Sink
// =============================================================================

/// Export sink that records everything handed to it
#[derive(Debug, Default)]
pub struct MockSink {
    exports: RefCell<Vec<String>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All exported texts, in order
    pub fn exports(&self) -> Vec<String> {
        self.exports.borrow().clone()
    }
}

impl ExportSink for MockSink {
    fn export(&mut self, contents: &str) -> Result<()> {
        self.exports.borrow_mut().push(contents.to_string());
        Ok(())
    }
}
