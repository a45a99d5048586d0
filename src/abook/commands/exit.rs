use crate::commands::{CmdMessage, CmdResult, Flow};
use crate::error::Result;

pub const HELP: &str = "exit: ends address book session";

/// Stops the session. Being a modifier, the book is saved on the way out.
pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default().with_flow(Flow::Stop);
    result.add_message(CmdMessage::info("exiting..."));
    Ok(result)
}
