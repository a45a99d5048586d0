//! # Command Layer
//!
//! Every command the session understands is a variant of the closed
//! [`Command`] enum. A [`CommandKind`] is the stateless description of one
//! command (name, help text, modifier flag); parsing a kind against an
//! argument tail produces a fresh `Command` that owns its arguments and is
//! consumed by [`Command::run`]. Nothing parsed survives past one dispatch.
//!
//! The per-command modules hold the actual logic as free functions operating
//! on a [`ContactStore`]. They never print; results come back as a
//! [`CmdResult`] for the UI to render.

use crate::error::Result;
use crate::model::Contact;
use crate::store::ContactStore;

pub mod add;
pub mod delete;
pub mod exit;
pub mod help;
pub mod helpers;
pub mod list;
pub mod registry;
pub mod search;
pub mod tokenize;

pub use registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Whether the session keeps reading commands after this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Stop,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_contacts: Vec<Contact>,
    pub messages: Vec<CmdMessage>,
    pub flow: Flow,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }
}

/// Stateless description of a command. Dispatch is by exact, case-sensitive
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandKind {
    Add,
    Delete,
    Exit,
    Help,
    List,
    Search,
    Test,
}

impl CommandKind {
    pub fn all() -> &'static [CommandKind] {
        &[
            CommandKind::Add,
            CommandKind::Delete,
            CommandKind::Exit,
            CommandKind::Help,
            CommandKind::List,
            CommandKind::Search,
            CommandKind::Test,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::Delete => "delete",
            CommandKind::Exit => "exit",
            CommandKind::Help => "help",
            CommandKind::List => "list",
            CommandKind::Search => "search",
            CommandKind::Test => "test",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            CommandKind::Add => add::HELP,
            CommandKind::Delete => delete::HELP,
            CommandKind::Exit => exit::HELP,
            CommandKind::Help => help::HELP,
            CommandKind::List => list::HELP,
            CommandKind::Search => search::HELP,
            CommandKind::Test => test::HELP,
        }
    }

    /// Modifiers require the store to be persisted after a successful run.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            CommandKind::Add | CommandKind::Delete | CommandKind::Exit
        )
    }

    /// Parse the argument tail into a runnable command.
    ///
    /// Commands without arguments ignore the tail entirely, so stray text
    /// after `list` or `exit` is never an error.
    pub fn parse(self, remainder: &str, store: &ContactStore) -> Result<Command> {
        use crate::commands::tokenize::tokenize;

        match self {
            CommandKind::Add => add::parse(tokenize(remainder)?).map(Command::Add),
            CommandKind::Delete => {
                delete::parse(store, tokenize(remainder)?).map(Command::Delete)
            }
            CommandKind::Search => {
                search::parse(tokenize(remainder)?).map(|prefix| Command::Search { prefix })
            }
            CommandKind::Test => {
                test::parse(tokenize(remainder)?).map(|args| Command::Test { args })
            }
            CommandKind::List => Ok(Command::List),
            CommandKind::Help => Ok(Command::Help),
            CommandKind::Exit => Ok(Command::Exit),
        }
    }
}

/// One parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Contact),
    Delete(Contact),
    Search { prefix: String },
    Test { args: Vec<String> },
    List,
    Help,
    Exit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add(_) => CommandKind::Add,
            Command::Delete(_) => CommandKind::Delete,
            Command::Search { .. } => CommandKind::Search,
            Command::Test { .. } => CommandKind::Test,
            Command::List => CommandKind::List,
            Command::Help => CommandKind::Help,
            Command::Exit => CommandKind::Exit,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_modifier(&self) -> bool {
        self.kind().is_modifier()
    }

    /// Text the user must answer `y` to before [`Command::run`] is called,
    /// or `None` if the command runs unconfirmed.
    pub fn confirmation(&self, store: &ContactStore) -> Option<String> {
        match self {
            Command::Add(contact) => Some(add::confirmation(store, contact)),
            Command::Delete(contact) => Some(delete::confirmation(contact)),
            Command::Test { .. } => Some(test::CONFIRMATION.to_string()),
            Command::Search { .. } | Command::List | Command::Help | Command::Exit => None,
        }
    }

    pub fn run(self, store: &mut ContactStore, registry: &CommandRegistry) -> Result<CmdResult> {
        match self {
            Command::Add(contact) => add::run(store, contact),
            Command::Delete(contact) => delete::run(store, &contact.name),
            Command::Search { prefix } => search::run(store, &prefix),
            Command::Test { args } => test::run(&args),
            Command::List => list::run(store),
            Command::Help => help::run(registry),
            Command::Exit => exit::run(),
        }
    }
}
