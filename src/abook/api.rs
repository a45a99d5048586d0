//! # API Facade
//!
//! [`AbookApi`] is the single entry point for driving an address book,
//! whatever the UI. It owns the [`ContactStore`], the [`StorageBackend`] the
//! store is persisted to, and the [`CommandRegistry`].
//!
//! The dispatch protocol is split so a UI can put its confirmation step in
//! the middle:
//!
//! 1. [`AbookApi::prepare`]: look up and parse one input line
//! 2. [`AbookApi::confirmation`]: text to confirm, if any
//! 3. [`AbookApi::execute`]: run, and persist if the command is a modifier
//!
//! Nothing here touches stdout or stdin.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `AbookApi<FsBackend>`
//! - Testing: `AbookApi<MemBackend>`

use crate::commands::tokenize::split_command;
use crate::commands::{CmdMessage, CmdResult, Command, CommandRegistry};
use crate::error::{AbookError, Result};
use crate::store::{ContactStore, StorageBackend};
use tracing::{debug, info, warn};

/// What to do when the persisted book cannot be parsed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptBookPolicy {
    /// Refuse to start. The file has to be repaired by hand.
    #[default]
    Fail,
    /// Start with an empty book and a warning. The corrupt file is
    /// overwritten by the next modifying command.
    StartEmpty,
}

pub struct AbookApi<B: StorageBackend> {
    store: ContactStore,
    backend: B,
    registry: CommandRegistry,
    notices: Vec<CmdMessage>,
}

impl<B: StorageBackend> AbookApi<B> {
    /// Load the book from `backend`. A backend with nothing saved yet gives
    /// an empty book.
    pub fn open(backend: B, policy: CorruptBookPolicy) -> Result<Self> {
        let mut store = ContactStore::new();
        let mut notices = Vec::new();

        if let Some(bytes) = backend.load()? {
            match store.load_from(&bytes) {
                Ok(()) => {}
                Err(AbookError::MalformedStoreData(e)) if policy == CorruptBookPolicy::StartEmpty => {
                    warn!(location = %backend.describe(), error = %e, "ignoring malformed book");
                    notices.push(CmdMessage::warning(format!(
                        "Could not read {} ({}); starting with an empty book",
                        backend.describe(),
                        e
                    )));
                }
                Err(e) => return Err(e),
            }
        }
        info!(location = %backend.describe(), contacts = store.len(), "book loaded");

        Ok(Self {
            store,
            backend,
            registry: CommandRegistry::standard(),
            notices,
        })
    }

    /// Parse one input line. `Ok(None)` means the line was blank.
    pub fn prepare(&self, line: &str) -> Result<Option<Command>> {
        let (name, remainder) = split_command(line);
        if name.is_empty() {
            return Ok(None);
        }
        let kind = self
            .registry
            .lookup(name)
            .ok_or_else(|| AbookError::UnsupportedCommand(name.to_string()))?;
        debug!(command = name, "parsing arguments");
        kind.parse(remainder, &self.store).map(Some)
    }

    pub fn confirmation(&self, command: &Command) -> Option<String> {
        command.confirmation(&self.store)
    }

    /// Run a prepared command. Modifiers are persisted before returning.
    pub fn execute(&mut self, command: Command) -> Result<CmdResult> {
        let modifier = command.is_modifier();
        let name = command.name();
        let result = command.run(&mut self.store, &self.registry)?;
        debug!(command = name, modifier, "command executed");
        if modifier {
            self.persist()?;
        }
        Ok(result)
    }

    /// Write the whole book to the backend.
    pub fn persist(&self) -> Result<()> {
        let bytes = self.store.save_to()?;
        self.backend.save(&bytes)?;
        info!(location = %self.backend.describe(), contacts = self.store.len(), "book saved");
        Ok(())
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Warnings produced while opening the book.
    pub fn take_notices(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.notices)
    }
}
