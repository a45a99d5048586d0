use crate::commands::helpers::single_arg;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::store::ContactStore;

pub const HELP: &str = "search <starting part of the name>: searches for user";

const INVALID_SEARCH_ARGS: &str =
    "invalid number of arguments, search string should be single argument";

/// Returns the trimmed, non-empty prefix.
pub fn parse(args: Vec<String>) -> Result<String> {
    let prefix = single_arg(args, INVALID_SEARCH_ARGS)?.trim().to_string();
    if prefix.is_empty() {
        return Err(AbookError::Parse(
            "argument, search string is empty".to_string(),
        ));
    }
    Ok(prefix)
}

pub fn run(store: &ContactStore, prefix: &str) -> Result<CmdResult> {
    let found = store.search_prefix(prefix);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "no contacts starting with '{}'",
            prefix
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "total {} contacts found",
        found.len()
    )));
    Ok(result.with_listed_contacts(found))
}
