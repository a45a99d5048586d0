use crate::commands::helpers::{single_arg, INVALID_ARGUMENT_COUNT};
use crate::commands::CmdResult;
use crate::error::{AbookError, Result};
use crate::model::Contact;
use crate::store::ContactStore;
use tracing::debug;

pub const HELP: &str = "delete <contact name>: delete contact from book";

/// Resolves the name to the stored contact so the confirmation can show it.
pub fn parse(store: &ContactStore, args: Vec<String>) -> Result<Contact> {
    let name = single_arg(args, INVALID_ARGUMENT_COUNT)?;
    store
        .get(&name)
        .cloned()
        .ok_or(AbookError::ContactNotFound(name))
}

pub fn confirmation(contact: &Contact) -> String {
    format!("You are going to delete: {}\nconfirm deletion", contact)
}

pub fn run(store: &mut ContactStore, name: &str) -> Result<CmdResult> {
    let removed = store
        .remove(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;
    debug!(name = %removed.name, "contact removed");
    Ok(CmdResult::default())
}
