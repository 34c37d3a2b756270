//! Save and load commands

use super::{CommandResult, Output};
use crate::state::AppState;
use tabcalc_core::LoadOutcome;

pub fn save(state: &mut AppState) -> CommandResult<Output> {
    let result = state.with_calculator(|calc| {
        calc.save_session()?;
        calc.save_preferences()
    });

    match result {
        Ok(()) => CommandResult::ok(Output::message("Saved")),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Reload tab state. A failed load keeps the current tabs.
pub fn load(state: &mut AppState) -> CommandResult<Output> {
    let outcome = match state.with_calculator(|calc| Ok(calc.load_session())) {
        Ok(outcome) => outcome,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    match outcome {
        LoadOutcome::Loaded => CommandResult::ok(Output::tabs(state)),
        LoadOutcome::Missing => CommandResult::ok(Output::message("Nothing saved yet")),
        LoadOutcome::Failed(reason) => CommandResult::err(format!("Load failed: {}", reason)),
    }
}
