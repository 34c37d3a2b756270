//! Tab management commands

use super::{CommandResult, Output};
use crate::state::AppState;

pub fn new_tab(state: &mut AppState) -> CommandResult<Output> {
    match state.with_calculator(|calc| Ok(calc.create_tab())) {
        Ok(name) => {
            tracing::debug!(tab = %name, "new_tab");
            CommandResult::ok(Output::display(state))
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Delete `name`, or the active tab when no name is given
pub fn delete_tab(state: &mut AppState, name: Option<String>) -> CommandResult<Output> {
    let result = state.with_calculator(|calc| {
        let name = match name {
            Some(name) => name,
            None => calc.active_tab().unwrap_or_default().to_string(),
        };
        calc.delete_tab(&name)
    });

    match result {
        Ok(()) => CommandResult::ok(Output::tabs(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn switch_tab(state: &mut AppState, name: &str) -> CommandResult<Output> {
    match state.with_calculator(|calc| calc.switch_tab(name)) {
        Ok(_) => CommandResult::ok(Output::display(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn rename_tab(state: &mut AppState, old: &str, new: &str) -> CommandResult<Output> {
    match state.with_calculator(|calc| calc.rename_tab(old, new)) {
        Ok(()) => CommandResult::ok(Output::tabs(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn move_tab(state: &mut AppState, moved: &str, target: &str) -> CommandResult<Output> {
    match state.with_calculator(|calc| Ok(calc.reorder_tab(moved, target))) {
        Ok(true) => CommandResult::ok(Output::tabs(state)),
        Ok(false) => CommandResult::ok(Output::message("Order unchanged")),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
