//! Turning a [`CmdResult`] into terminal lines.

use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn message(&self, message: &CmdMessage) -> String {
        if !self.color {
            return message.content.clone();
        }
        match message.level {
            MessageLevel::Info => message.content.clone(),
            MessageLevel::Warning => message.content.yellow().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        }
    }

    /// Listed contacts first, then messages.
    pub fn write_result<W: Write>(&self, out: &mut W, result: &CmdResult) -> io::Result<()> {
        for contact in &result.listed_contacts {
            writeln!(out, "{}", contact)?;
        }
        self.write_messages(out, &result.messages)
    }

    pub fn write_messages<W: Write>(&self, out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
        for message in messages {
            writeln!(out, "{}", self.message(message))?;
        }
        Ok(())
    }
}
