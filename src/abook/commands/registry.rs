use super::CommandKind;
use std::collections::BTreeMap;

/// Immutable name → command mapping, built once at startup.
///
/// Iteration is in name order, which is also the order `help` prints.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandKind>,
}

impl CommandRegistry {
    /// Registry with every built-in command.
    pub fn standard() -> Self {
        let commands = CommandKind::all().iter().map(|k| (k.name(), *k)).collect();
        Self { commands }
    }

    pub fn lookup(&self, name: &str) -> Option<CommandKind> {
        self.commands.get(name).copied()
    }

    pub fn kinds(&self) -> impl Iterator<Item = CommandKind> + '_ {
        self.commands.values().copied()
    }

    pub fn help_lines(&self) -> Vec<&'static str> {
        self.kinds().map(CommandKind::help).collect()
    }
}
