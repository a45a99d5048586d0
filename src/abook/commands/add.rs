use crate::commands::helpers::INVALID_ARGUMENT_COUNT;
use crate::commands::CmdResult;
use crate::error::{AbookError, Result};
use crate::model::Contact;
use crate::store::ContactStore;
use tracing::debug;

pub const HELP: &str = "add <name> <phone> <mail>: add contact to book";

pub fn parse(args: Vec<String>) -> Result<Contact> {
    let [name, phone, email]: [String; 3] = args
        .try_into()
        .map_err(|_| AbookError::Parse(INVALID_ARGUMENT_COUNT.to_string()))?;
    Ok(Contact::new(name, phone, email))
}

/// Describes the addition and, when the name is taken, what it replaces.
pub fn confirmation(store: &ContactStore, contact: &Contact) -> String {
    let mut text = format!("You are about to add: {}\n", contact);
    if let Some(old) = store.get(&contact.name) {
        text.push_str(&format!("Addition will replace: {}\n", old));
    }
    text.push_str("confirm addition");
    text
}

pub fn run(store: &mut ContactStore, contact: Contact) -> Result<CmdResult> {
    let replaced = store.set(contact.clone());
    debug!(name = %contact.name, replaced = replaced.is_some(), "contact stored");
    Ok(CmdResult::default())
}
