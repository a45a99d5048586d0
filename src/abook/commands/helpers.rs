use crate::error::{AbookError, Result};

pub const INVALID_ARGUMENT_COUNT: &str = "invalid number of arguments, see help for details";

/// Take exactly one argument, failing with `message` otherwise.
pub fn single_arg(args: Vec<String>, message: &str) -> Result<String> {
    let [arg]: [String; 1] = args
        .try_into()
        .map_err(|_| AbookError::Parse(message.to_string()))?;
    Ok(arg)
}
