//! Keypad commands

use super::{CommandResult, Output};
use crate::state::AppState;
use tabcalc_core::Key;

pub fn press_keys(state: &mut AppState, keys: &str) -> CommandResult<Output> {
    match state.with_calculator(|calc| calc.press_str(keys)) {
        Ok(()) => CommandResult::ok(Output::display(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn clear(state: &mut AppState) -> CommandResult<Output> {
    match state.with_calculator(|calc| calc.press(Key::Clear)) {
        Ok(()) => CommandResult::ok(Output::display(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn evaluate(state: &mut AppState) -> CommandResult<Output> {
    match state.with_calculator(|calc| calc.evaluate()) {
        Ok(_) => CommandResult::ok(Output::display(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
