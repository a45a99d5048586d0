use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

pub const HELP: &str = "list: lists all contacts in address book";

pub fn run(store: &ContactStore) -> Result<CmdResult> {
    let all = store.all();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("total {} contacts", all.len())));
    Ok(result.with_listed_contacts(all))
}
