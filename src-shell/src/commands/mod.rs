//! Shell commands
//!
//! Lines starting with `@` are commands; anything else is keypad input.
//!
//! - `@new`, `@delete [name]`, `@switch <name>`, `@rename <old> <new>`,
//!   `@move <moved> <target>`, `@tabs`
//! - `@clear`, `@eval`
//! - `@save`, `@load`
//! - `@theme [id]`, `@mode [dark|light]`
//! - `@help`, `@quit`
//!
//! Names containing spaces can be wrapped in double quotes.

pub mod keypad;
pub mod sessions;
pub mod settings;
pub mod tabs;

use serde::Serialize;

use crate::state::AppState;
use tabcalc_core::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewTab,
    DeleteTab(Option<String>),
    SwitchTab(String),
    RenameTab { old: String, new: String },
    MoveTab { moved: String, target: String },
    ListTabs,
    Clear,
    Eval,
    Save,
    Load,
    Theme(Option<String>),
    Mode(Option<String>),
    Help,
    Quit,
    /// Plain input fed to the keypad
    Keys(String),
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('@') else {
            return Ok(Command::Keys(line.to_string()));
        };

        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args_text = parts.next().map(str::trim).unwrap_or_default();
        let args = split_args(args_text)?;

        let command = match name.as_str() {
            "new" | "n" => Command::NewTab,
            "delete" | "del" | "d" => Command::DeleteTab(join_all(&args)),
            "switch" | "s" => Command::SwitchTab(
                join_all(&args).ok_or_else(|| "usage: @switch <name>".to_string())?,
            ),
            "rename" | "r" => {
                // New names never contain spaces, so the last argument is the new name
                let (new, old) = args
                    .split_last()
                    .filter(|(_, old)| !old.is_empty())
                    .ok_or_else(|| "usage: @rename <old> <new>".to_string())?;
                Command::RenameTab {
                    old: old.join(" "),
                    new: new.clone(),
                }
            }
            "move" | "m" => {
                let (moved, target) = split_pair(&args).ok_or_else(|| {
                    "usage: @move <moved> <target> (quote names with spaces)".to_string()
                })?;
                Command::MoveTab { moved, target }
            }
            "tabs" | "t" => Command::ListTabs,
            "clear" | "c" => Command::Clear,
            "eval" | "e" => Command::Eval,
            "save" => Command::Save,
            "load" => Command::Load,
            "theme" => Command::Theme(join_all(&args)),
            "mode" => Command::Mode(join_all(&args)),
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command: @{}", other)),
        };

        Ok(command)
    }
}

/// Split on whitespace, keeping double-quoted runs together
fn split_args(text: &str) -> std::result::Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut has_token = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                has_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if quoted {
        return Err("Unterminated quote".to_string());
    }
    if has_token {
        args.push(current);
    }

    Ok(args)
}

fn join_all(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

/// Two names: either exactly two arguments, or an even number of
/// unquoted words split down the middle ("Tab 3 Tab 1").
fn split_pair(args: &[String]) -> Option<(String, String)> {
    match args.len() {
        2 => Some((args[0].clone(), args[1].clone())),
        n if n > 2 && n % 2 == 0 => {
            let (first, second) = args.split_at(n / 2);
            Some((first.join(" "), second.join(" ")))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabInfo {
    pub name: String,
    pub expression: String,
    pub active: bool,
}

impl TabInfo {
    fn from_tab(tab: Tab, active: Option<&str>) -> Self {
        let active = active == Some(tab.name.as_str());
        Self {
            name: tab.name,
            expression: tab.expression,
            active,
        }
    }
}

/// What a command shows back to the user
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    Display {
        tab: Option<String>,
        expression: String,
    },
    Tabs {
        tabs: Vec<TabInfo>,
    },
    Preferences {
        theme: String,
        mode: String,
    },
    Message {
        text: String,
    },
}

impl Output {
    pub fn display(state: &AppState) -> Self {
        let calc = state.calculator();
        Output::Display {
            tab: calc.active_tab().map(str::to_string),
            expression: calc.expression().to_string(),
        }
    }

    pub fn tabs(state: &AppState) -> Self {
        let calc = state.calculator();
        let active = calc.active_tab();
        Output::Tabs {
            tabs: calc
                .tabs()
                .into_iter()
                .map(|tab| TabInfo::from_tab(tab, active))
                .collect(),
        }
    }

    pub fn preferences(state: &AppState) -> Self {
        let prefs = state.calculator().preferences();
        Output::Preferences {
            theme: prefs.theme.clone(),
            mode: prefs.mode.to_string(),
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Output::Message { text: text.into() }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Display { tab, expression } => {
                write!(f, "{}: {}", tab.as_deref().unwrap_or("-"), expression)
            }
            Output::Tabs { tabs } => {
                for (i, tab) in tabs.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    let marker = if tab.active { '*' } else { ' ' };
                    write!(f, "{} {:<15} {}", marker, tab.name, tab.expression)?;
                }
                Ok(())
            }
            Output::Preferences { theme, mode } => write!(f, "theme: {}, mode: {}", theme, mode),
            Output::Message { text } => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

pub const HELP: &str = "\
Type digits and operators to build an expression, '=' to evaluate, 'C' to clear.
Commands:
  @new                    open a new tab
  @delete [name]          delete a tab (default: the active one)
  @switch <name>          switch to a tab
  @rename <old> <new>     rename a tab (new name: 1-15 letters/digits)
  @move <moved> <target>  move a tab to another tab's position
  @tabs                   list tabs
  @clear, @eval           clear or evaluate the expression
  @save, @load            save or reload tab state
  @theme [id]             show or set the theme
  @mode [dark|light]      toggle or set the display mode
  @quit                   leave";

/// Run a command against the state
pub fn dispatch(state: &mut AppState, command: Command) -> CommandResult<Output> {
    match command {
        Command::NewTab => tabs::new_tab(state),
        Command::DeleteTab(name) => tabs::delete_tab(state, name),
        Command::SwitchTab(name) => tabs::switch_tab(state, &name),
        Command::RenameTab { old, new } => tabs::rename_tab(state, &old, &new),
        Command::MoveTab { moved, target } => tabs::move_tab(state, &moved, &target),
        Command::ListTabs => CommandResult::ok(Output::tabs(state)),
        Command::Clear => keypad::clear(state),
        Command::Eval => keypad::evaluate(state),
        Command::Keys(keys) => keypad::press_keys(state, &keys),
        Command::Save => sessions::save(state),
        Command::Load => sessions::load(state),
        Command::Theme(theme) => settings::theme(state, theme),
        Command::Mode(mode) => settings::mode(state, mode.as_deref()),
        Command::Help => CommandResult::ok(Output::message(HELP)),
        Command::Quit => CommandResult::ok(Output::message("bye")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(
            Command::parse(" 2+3*4= ").unwrap(),
            Command::Keys("2+3*4=".to_string())
        );
    }

    #[test]
    fn test_parse_tab_commands() {
        assert_eq!(Command::parse("@new").unwrap(), Command::NewTab);
        assert_eq!(Command::parse("@delete").unwrap(), Command::DeleteTab(None));
        assert_eq!(
            Command::parse("@switch Tab 2").unwrap(),
            Command::SwitchTab("Tab 2".to_string())
        );
        assert_eq!(
            Command::parse("@rename Tab 1 Work").unwrap(),
            Command::RenameTab {
                old: "Tab 1".to_string(),
                new: "Work".to_string()
            }
        );
        assert_eq!(
            Command::parse("@move Tab 3 Tab 1").unwrap(),
            Command::MoveTab {
                moved: "Tab 3".to_string(),
                target: "Tab 1".to_string()
            }
        );
        assert_eq!(
            Command::parse(r#"@move Work "Tab 1""#).unwrap(),
            Command::MoveTab {
                moved: "Work".to_string(),
                target: "Tab 1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("@switch").is_err());
        assert!(Command::parse("@rename Work").is_err());
        assert!(Command::parse("@move Work Tab 1").is_err());
        assert!(Command::parse(r#"@switch "Tab 1"#).is_err());
        assert!(Command::parse("@bogus").is_err());
    }

    #[test]
    fn test_split_args_quotes() {
        assert_eq!(
            split_args(r#"a "b c"  d"#).unwrap(),
            vec!["a".to_string(), "b c".to_string(), "d".to_string()]
        );
        assert_eq!(split_args(r#""""#).unwrap(), vec![String::new()]);
        assert!(split_args("").unwrap().is_empty());
    }

    #[test]
    fn test_output_text() {
        let output = Output::Tabs {
            tabs: vec![
                TabInfo {
                    name: "Tab 1".to_string(),
                    expression: "7*3".to_string(),
                    active: true,
                },
                TabInfo {
                    name: "Tab 2".to_string(),
                    expression: String::new(),
                    active: false,
                },
            ],
        };
        let text = output.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("* Tab 1"));
        assert!(lines[0].ends_with("7*3"));
        assert!(lines[1].starts_with("  Tab 2"));
    }

    #[test]
    fn test_command_result_json() {
        let result = CommandResult::ok(Output::message("saved"));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"data":{"kind":"message","text":"saved"},"error":null}"#
        );
    }
}
