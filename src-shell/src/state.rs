//! Application state management
use tabcalc_core::{Calculator, Config, Result};

/// Owns the calculator for the lifetime of the shell
pub struct AppState {
    calculator: Calculator,
}

impl AppState {
    pub fn new(config: Config, in_memory: bool) -> Result<Self> {
        let calculator = if in_memory {
            Calculator::in_memory(config)?
        } else {
            Calculator::new(config)?
        };

        Ok(Self { calculator })
    }

    pub fn from_calculator(calculator: Calculator) -> Self {
        Self { calculator }
    }

    pub fn initialize(&mut self) {
        self.calculator.initialize();
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn with_calculator<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Calculator) -> Result<T>,
    {
        f(&mut self.calculator)
    }

    /// Prompt showing the active tab and its expression
    pub fn prompt(&self) -> String {
        let tab = self.calculator.active_tab().unwrap_or("-");
        format!("[{}] {} > ", tab, self.calculator.expression())
    }
}
