use crate::commands::{CmdMessage, CmdResult, CommandRegistry};
use crate::error::Result;

pub const HELP: &str = "help: prints this message";

pub fn run(registry: &CommandRegistry) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Address book commands:"));
    for line in registry.help_lines() {
        result.add_message(CmdMessage::info(line));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandKind;

    #[test]
    fn prints_one_line_per_command_in_name_order() {
        let result = run(&CommandRegistry::standard()).unwrap();
        let lines: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(lines[0], "Address book commands:");
        assert_eq!(lines.len(), CommandKind::all().len() + 1);
        assert!(lines[1].starts_with("add "));
        assert!(lines[2].starts_with("delete "));
        assert_eq!(lines[7], "test: command for testing");
    }
}
