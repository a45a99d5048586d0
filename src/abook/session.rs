//! # Interactive Session
//!
//! The line-oriented loop: prompt, read, dispatch, repeat. Generic over the
//! reader and writer so tests can script a whole conversation.
//!
//! One cycle:
//!
//! 1. print `>` and read a line (blank lines are skipped)
//! 2. [`AbookApi::prepare`]: unknown commands and parse errors are reported
//!    and nothing else happens
//! 3. if the command asks for confirmation, print it with `[y/n]` and read
//!    one more line; anything but `y` cancels
//! 4. [`AbookApi::execute`]: runs the command and persists modifiers
//!
//! Errors from steps 2-4 are printed and the loop carries on. Only failures
//! to read input or write output, and the final save when input runs out,
//! end the session with an error.

use crate::api::AbookApi;
use crate::commands::{CmdMessage, Flow};
use crate::error::{AbookError, Result};
use crate::render::Renderer;
use crate::store::StorageBackend;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = ">";
pub const CONFIRM_SUFFIX: &str = "[y/n]";

pub struct Session<B: StorageBackend, R: BufRead, W: Write> {
    api: AbookApi<B>,
    input: R,
    output: W,
    renderer: Renderer,
}

impl<B: StorageBackend, R: BufRead, W: Write> Session<B, R, W> {
    pub fn new(api: AbookApi<B>, input: R, output: W) -> Self {
        Self {
            api,
            input,
            output,
            renderer: Renderer::plain(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.renderer = Renderer::new(color);
        self
    }

    /// Run until `exit` or end of input.
    ///
    /// `exit` persists as part of its own dispatch. Running out of input is
    /// treated as a quiet `exit`, so the book is saved once more here.
    pub fn run(&mut self) -> Result<()> {
        let notices = self.api.take_notices();
        self.renderer.write_messages(&mut self.output, &notices)?;

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("end of input");
                writeln!(self.output)?;
                return self.api.persist();
            };

            if self.dispatch(&line)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Handle one input line. The `Err` case is reserved for I/O on the
    /// session's own reader and writer; command failures are reported to
    /// the user and yield `Flow::Continue`.
    pub fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let command = match self.api.prepare(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e @ AbookError::UnsupportedCommand(_)) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                self.report(&e)?;
                writeln!(self.output)?;
                return Ok(Flow::Continue);
            }
        };

        if let Some(text) = self.api.confirmation(&command) {
            write!(self.output, "{}{}", text, CONFIRM_SUFFIX)?;
            self.output.flush()?;
            let answer = self.read_line()?;
            if answer.as_deref() != Some("y") {
                debug!(command = command.name(), "confirmation declined");
                writeln!(self.output, "cancelled")?;
                writeln!(self.output)?;
                return Ok(Flow::Continue);
            }
        }

        let flow = match self.api.execute(command) {
            Ok(result) => {
                self.renderer.write_result(&mut self.output, &result)?;
                result.flow
            }
            Err(e) => {
                self.report(&e)?;
                Flow::Continue
            }
        };
        writeln!(self.output)?;
        Ok(flow)
    }

    fn report(&mut self, error: &AbookError) -> Result<()> {
        let text = if error.is_user_error() {
            error.to_string()
        } else {
            format!("Command execution failed, error: {}", error)
        };
        let line = self.renderer.message(&CmdMessage::error(text));
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Next line with surrounding whitespace removed, or `None` at end of
    /// input. Bytes that are not valid UTF-8 become U+FFFD.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    pub fn into_parts(self) -> (AbookApi<B>, W) {
        (self.api, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CorruptBookPolicy;
    use crate::model::Contact;
    use crate::store::mem_backend::MemBackend;
    use std::io::Cursor;

    fn api_with(names: &[&str]) -> AbookApi<MemBackend> {
        let mut store = crate::store::ContactStore::new();
        for name in names {
            store.set(Contact::new(*name, "555", format!("{}@x.com", name.to_lowercase())));
        }
        let backend = MemBackend::with_bytes(store.save_to().unwrap());
        AbookApi::open(backend, CorruptBookPolicy::Fail).unwrap()
    }

    /// Feed `script` to a session and return its output and final api.
    fn converse(api: AbookApi<MemBackend>, script: &str) -> (String, AbookApi<MemBackend>) {
        let mut session = Session::new(api, Cursor::new(script.to_string()), Vec::new());
        session.run().unwrap();
        let (api, out) = session.into_parts();
        (String::from_utf8(out).unwrap(), api)
    }

    #[test]
    fn add_confirmed_then_list() {
        let (out, api) = converse(
            api_with(&[]),
            "add \"Jane Doe\" 555-1234 jane@x.com\ny\nlist\nexit\n",
        );
        assert!(out.contains(
            "You are about to add: Name: Jane Doe; Phone: 555-1234; email: jane@x.com\n\
             confirm addition[y/n]"
        ));
        assert!(out.contains(
            "Name: Jane Doe; Phone: 555-1234; email: jane@x.com\ntotal 1 contacts\n"
        ));
        assert!(out.contains("exiting...\n"));
        assert_eq!(api.store().len(), 1);
        assert_eq!(api.backend().snapshot(), Some(api.store().save_to().unwrap()));
    }

    #[test]
    fn search_lists_matches_in_order() {
        let (out, _) = converse(api_with(&["Alice", "Alan", "Bob"]), "search Al\nexit\n");
        assert!(out.contains(
            "Name: Alan; Phone: 555; email: alan@x.com\n\
             Name: Alice; Phone: 555; email: alice@x.com\n\
             total 2 contacts found\n"
        ));
    }

    #[test]
    fn search_without_matches_says_so() {
        let (out, _) = converse(api_with(&["Bob"]), "search Zed\nexit\n");
        assert!(out.contains("no contacts starting with 'Zed'\ntotal 0 contacts found\n"));
    }

    #[test]
    fn delete_missing_contact_aborts_without_saving() {
        let mut session = Session::new(api_with(&["Ann"]), Cursor::new(String::new()), Vec::new());
        assert_eq!(session.dispatch("delete Carol").unwrap(), Flow::Continue);

        let (api, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "Contact 'Carol' not found\n\n");
        assert_eq!(api.store().len(), 1);
        assert_eq!(api.backend().save_count(), 0);
    }

    #[test]
    fn wrong_arity_skips_confirmation() {
        let mut session = Session::new(api_with(&[]), Cursor::new(String::new()), Vec::new());
        session.dispatch("add a b").unwrap();

        let (api, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "invalid number of arguments, see help for details\n\n");
        assert!(!out.contains(CONFIRM_SUFFIX));
        assert!(api.store().is_empty());
    }

    #[test]
    fn anything_but_y_cancels() {
        for answer in ["n", "Y", "yes", "", "y y"] {
            let mut session = Session::new(
                api_with(&["Ann"]),
                Cursor::new(format!("{}\n", answer)),
                Vec::new(),
            );
            session.dispatch("delete Ann").unwrap();

            let (api, out) = session.into_parts();
            let out = String::from_utf8(out).unwrap();
            assert!(out.ends_with("confirm deletion[y/n]cancelled\n\n"), "{:?}", answer);
            assert!(api.store().get("Ann").is_some(), "{:?}", answer);
            assert_eq!(api.backend().save_count(), 0);
        }
    }

    #[test]
    fn declined_add_leaves_book_untouched() {
        for answer in ["n", "Y"] {
            let mut session = Session::new(
                api_with(&["Ann"]),
                Cursor::new(format!("{}\n", answer)),
                Vec::new(),
            );
            session.dispatch("add Ann 999 new@x.com").unwrap();

            let (api, out) = session.into_parts();
            let out = String::from_utf8(out).unwrap();
            assert!(out.ends_with("confirm addition[y/n]cancelled\n\n"), "{:?}", answer);
            assert_eq!(api.store().get("Ann").map(|c| c.phone.as_str()), Some("555"));
            assert_eq!(api.backend().save_count(), 0);
        }

        let mut session = Session::new(api_with(&[]), Cursor::new("n\n"), Vec::new());
        session.dispatch("add Bob 1 bob@x.com").unwrap();
        let (api, _) = session.into_parts();
        assert!(api.store().is_empty());
        assert_eq!(api.backend().save_count(), 0);
    }

    #[test]
    fn invalid_utf8_input_does_not_end_session() {
        let input = Cursor::new(b"add M\xfcller 1 m@x.com\ny\nlist\nexit\n".to_vec());
        let mut session = Session::new(api_with(&[]), input, Vec::new());
        session.run().unwrap();

        let (api, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Name: M\u{FFFD}ller; Phone: 1; email: m@x.com\ntotal 1 contacts\n"));
        assert!(out.contains("exiting...\n"));
        assert_eq!(api.store().len(), 1);
        assert_eq!(api.backend().save_count(), 2);
    }

    #[test]
    fn answer_is_trimmed_before_comparing() {
        let mut session = Session::new(api_with(&["Ann"]), Cursor::new("  y \n"), Vec::new());
        session.dispatch("delete Ann").unwrap();
        let (api, _) = session.into_parts();
        assert!(api.store().is_empty());
        assert_eq!(api.backend().save_count(), 1);
    }

    #[test]
    fn end_of_input_at_confirmation_cancels() {
        let mut session = Session::new(api_with(&["Ann"]), Cursor::new(""), Vec::new());
        session.dispatch("delete Ann").unwrap();
        let (api, _) = session.into_parts();
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn add_over_existing_shows_replacement() {
        let (out, api) = converse(api_with(&["Ann"]), "add Ann 999 new@x.com\ny\nexit\n");
        assert!(out.contains("Addition will replace: Name: Ann; Phone: 555; email: ann@x.com\n"));
        assert_eq!(api.store().get("Ann").map(|c| c.phone.as_str()), Some("999"));
    }

    #[test]
    fn unknown_command_is_reported_without_blank_line() {
        let mut session = Session::new(api_with(&[]), Cursor::new(""), Vec::new());
        session.dispatch("dance").unwrap();
        let (api, out) = session.into_parts();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Command 'dance' not supported, try help\n"
        );
        assert_eq!(api.backend().save_count(), 0);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (out, api) = converse(api_with(&[]), "\n   \nexit\n");
        assert_eq!(out, ">>>exiting...\n\n");
        assert_eq!(api.backend().save_count(), 1);
    }

    #[test]
    fn end_of_input_saves_and_ends() {
        let (out, api) = converse(api_with(&["Ann"]), "list\n");
        assert!(out.ends_with(">\n"));
        assert_eq!(api.backend().save_count(), 1);
    }

    #[test]
    fn save_failure_is_reported_and_loop_continues() {
        let api = api_with(&[]);
        api.backend().set_simulate_write_error(true);
        let mut session = Session::new(api, Cursor::new("y\n"), Vec::new());

        assert_eq!(session.dispatch("add Ann 1 a@x.com").unwrap(), Flow::Continue);
        let (_, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Command execution failed, error: Simulated write error\n"));
    }

    #[test]
    fn help_lists_commands() {
        let (out, _) = converse(api_with(&[]), "help\nexit\n");
        assert!(out.contains("Address book commands:\nadd <name> <phone> <mail>: add contact to book\n"));
        assert!(out.contains("search <starting part of the name>: searches for user\n"));
    }

    #[test]
    fn test_command_echoes_tokens_after_confirmation() {
        let (out, _) = converse(api_with(&[]), "test \"Mary Ann\" x\ny\nexit\n");
        assert!(out.contains("confirm testing[y/n]arguments: Mary Ann; x; \n"));
    }
}
