//! Durable state slot
//!
//! A slot holds one serialized snapshot of the [`Store`]. The on-disk format
//! is a single JSON document; the [`Slot`] trait only moves text in and out so
//! tests can run against memory.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::store::Store;

/// Errors from reading or writing a slot
#[derive(Debug, Error, Diagnostic)]
pub enum SlotError {
    #[error("failed to read state from {path}")]
    #[diagnostic(code(aero::slot::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state to {path}")]
    #[diagnostic(
        code(aero::slot::write),
        help("check that the directory is writable, or point --data somewhere else")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize state")]
    #[diagnostic(code(aero::slot::serialize))]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    #[diagnostic(code(aero::slot::unavailable))]
    Unavailable(String),
}

/// A place a snapshot can be read from and written to
pub trait Slot {
    /// Current snapshot text, or `None` when nothing was ever saved
    fn read(&self) -> Result<Option<String>, SlotError>;

    /// Replace the snapshot
    fn write(&self, contents: &str) -> Result<(), SlotError>;
}

/// A JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|source| SlotError::Read {
                path: self.path.clone(),
                source,
            })
    }

    fn write(&self, contents: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SlotError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, contents).map_err(|source| SlotError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory slot, mostly for tests
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: RefCell<Option<String>>,
    read_only: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with a snapshot
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            read_only: false,
        }
    }

    /// A slot whose writes always fail
    pub fn read_only() -> Self {
        Self {
            contents: RefCell::new(None),
            read_only: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<(), SlotError> {
        if self.read_only {
            return Err(SlotError::Unavailable("slot is read-only".to_string()));
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

/// Load a store from a slot.
///
/// An absent, unreadable or malformed snapshot yields an empty store; the
/// problem is logged, never returned.
pub fn load_store<S: Slot + ?Sized>(slot: &S) -> Store {
    let text = match slot.read() {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!("no saved state, starting empty");
            return Store::new();
        }
        Err(e) => {
            warn!(error = %e, "could not read saved state, starting empty");
            return Store::new();
        }
    };

    match serde_json::from_str::<Store>(&text) {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "saved state is malformed, starting empty");
            Store::new()
        }
    }
}

/// Serialize a store into a slot
pub fn save_store<S: Slot + ?Sized>(slot: &S, store: &Store) -> Result<(), SlotError> {
    let json = serde_json::to_string_pretty(store)?;
    slot.write(&json)
}
