//! Session state
//!
//! Tabs, the active tab, and the expression currently being edited.

use tabcalc_tabs::{Tab, TabList};

use crate::error::SessionError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    tabs: TabList,
    active_tab: Option<String>,
    /// In-progress expression of the active tab. The tab's stored copy is
    /// only brought up to date by `flush`.
    expression: String,
}

impl Session {
    /// A session with a single empty "Tab 1"
    pub fn new() -> Self {
        let mut session = Self::empty();
        session.create_tab();
        session
    }

    /// A session without tabs, as produced by loading an empty record
    pub fn empty() -> Self {
        Self {
            tabs: TabList::new(),
            active_tab: None,
            expression: String::new(),
        }
    }

    /// Build a session from stored tabs. An unknown or missing `active_tab`
    /// falls back to the first tab.
    pub fn from_tabs(tabs: TabList, active_tab: Option<String>) -> Self {
        let active_tab = active_tab
            .filter(|name| tabs.contains(name))
            .or_else(|| tabs.first().map(|t| t.name.clone()));

        let expression = active_tab
            .as_deref()
            .and_then(|name| tabs.get(name).ok())
            .map(|t| t.expression.clone())
            .unwrap_or_default();

        Self {
            tabs,
            active_tab,
            expression,
        }
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.active_tab.as_deref()
    }

    /// The visible expression
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab_names(&self) -> Vec<String> {
        self.tabs.names()
    }

    /// Current expression of a tab, including unflushed edits on the active one
    pub fn tab_expression(&self, name: &str) -> Result<&str> {
        if self.active_tab.as_deref() == Some(name) {
            return Ok(&self.expression);
        }
        Ok(&self.tabs.get(name)?.expression)
    }

    /// Tabs in display order with up-to-date expressions
    pub fn tabs(&self) -> Vec<Tab> {
        self.tabs
            .iter()
            .map(|tab| match self.active_tab.as_deref() {
                Some(active) if active == tab.name => {
                    Tab::with_expression(tab.name.clone(), self.expression.clone())
                }
                _ => tab.clone(),
            })
            .collect()
    }

    /// Write the visible expression back into the active tab
    fn flush(&mut self) {
        if let Some(active) = self.active_tab.as_deref() {
            if let Ok(tab) = self.tabs.get_mut(active) {
                tab.expression.clone_from(&self.expression);
            }
        }
    }

    fn activate(&mut self, name: &str) -> Result<()> {
        let expression = self.tabs.get(name)?.expression.clone();
        self.active_tab = Some(name.to_string());
        self.expression = expression;
        Ok(())
    }

    /// Add an empty tab with the lowest free "Tab N" name and make it active
    pub fn create_tab(&mut self) -> String {
        self.flush();

        let name = self.tabs.next_default_name();
        self.tabs.push(Tab::new(name.clone()));
        self.active_tab = Some(name.clone());
        self.expression.clear();

        tracing::info!(tab = %name, tab_count = self.tabs.len(), "Created tab");

        name
    }

    /// Remove a tab. The last remaining tab cannot be deleted. Deleting the
    /// active tab activates the first remaining one.
    pub fn delete_tab(&mut self, name: &str) -> Result<()> {
        if !self.tabs.contains(name) {
            return Err(tabcalc_tabs::TabError::NotFound(name.to_string()).into());
        }
        if self.tabs.len() <= 1 {
            return Err(SessionError::CannotDeleteLastTab);
        }

        self.tabs.remove(name)?;

        if self.active_tab.as_deref() == Some(name) {
            if let Some(next) = self.tabs.first().map(|t| t.name.clone()) {
                self.activate(&next)?;
            }
        }

        tracing::info!(
            tab = %name,
            active = ?self.active_tab,
            tab_count = self.tabs.len(),
            "Deleted tab"
        );

        Ok(())
    }

    /// Make `name` active and return its expression
    pub fn switch_tab(&mut self, name: &str) -> Result<&str> {
        // Validate before touching anything
        self.tabs.get(name)?;

        self.flush();
        self.activate(name)?;

        tracing::debug!(tab = %name, "Switched tab");

        Ok(&self.expression)
    }

    /// Rename a tab, keeping its expression, position and active status
    pub fn rename_tab(&mut self, old: &str, new: &str) -> Result<()> {
        self.tabs.rename(old, new)?;

        if self.active_tab.as_deref() == Some(old) {
            self.active_tab = Some(new.to_string());
        }

        tracing::info!(from = %old, to = %new, "Renamed tab");

        Ok(())
    }

    /// Move `moved` to `target`'s position. Returns whether the order changed.
    pub fn reorder_tab(&mut self, moved: &str, target: &str) -> bool {
        let changed = self.tabs.move_to(moved, target);
        if changed {
            tracing::debug!(moved = %moved, target = %target, "Reordered tabs");
        }
        changed
    }

    pub fn append_char(&mut self, ch: char) {
        self.expression.push(ch);
    }

    pub fn push_str(&mut self, text: &str) {
        self.expression.push_str(text);
    }

    pub fn clear(&mut self) {
        self.expression.clear();
    }

    /// Replace the visible expression, e.g. with an evaluation result
    pub fn set_expression(&mut self, expression: impl Into<String>) {
        self.expression = expression.into();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabcalc_tabs::TabError;

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.tab_names(), vec!["Tab 1"]);
        assert_eq!(session.active_tab(), Some("Tab 1"));
        assert_eq!(session.expression(), "");
    }

    #[test]
    fn test_create_tab_uses_lowest_free_name() {
        let mut session = Session::new();
        assert_eq!(session.create_tab(), "Tab 2");
        assert_eq!(session.create_tab(), "Tab 3");

        session.delete_tab("Tab 2").unwrap();
        assert_eq!(session.create_tab(), "Tab 2");
        assert_eq!(session.tab_names(), vec!["Tab 1", "Tab 3", "Tab 2"]);
        assert_eq!(session.active_tab(), Some("Tab 2"));
    }

    #[test]
    fn test_create_tab_flushes_current_expression() {
        let mut session = Session::new();
        session.push_str("1+1");
        session.create_tab();

        assert_eq!(session.expression(), "");
        assert_eq!(session.tab_expression("Tab 1").unwrap(), "1+1");
    }

    #[test]
    fn test_switch_round_trip() {
        let mut session = Session::new();
        let a = session.active_tab().unwrap().to_string();
        session.push_str("7*3");

        let b = session.create_tab();
        session.append_char('9');

        assert_eq!(session.switch_tab(&a).unwrap(), "7*3");
        assert_eq!(session.expression(), "7*3");
        assert_eq!(session.tab_expression(&b).unwrap(), "9");

        assert_eq!(session.switch_tab(&b).unwrap(), "9");
    }

    #[test]
    fn test_switch_to_missing_tab() {
        let mut session = Session::new();
        session.push_str("42");

        assert!(matches!(
            session.switch_tab("Nope"),
            Err(SessionError::Tab(TabError::NotFound(_)))
        ));
        assert_eq!(session.active_tab(), Some("Tab 1"));
        assert_eq!(session.expression(), "42");
    }

    #[test]
    fn test_delete_all_but_one() {
        let mut session = Session::new();
        for _ in 0..5 {
            session.create_tab();
        }
        assert_eq!(session.tab_count(), 6);

        for name in session.tab_names().into_iter().skip(1) {
            session.delete_tab(&name).unwrap();
        }
        assert_eq!(session.tab_count(), 1);

        assert!(matches!(
            session.delete_tab("Tab 1"),
            Err(SessionError::CannotDeleteLastTab)
        ));
        assert_eq!(session.tab_count(), 1);
        assert_eq!(session.active_tab(), Some("Tab 1"));
    }

    #[test]
    fn test_delete_active_tab_activates_first() {
        let mut session = Session::new();
        session.push_str("1+2");
        session.create_tab();
        session.create_tab();
        session.push_str("5");

        session.delete_tab("Tab 3").unwrap();
        assert_eq!(session.active_tab(), Some("Tab 1"));
        assert_eq!(session.expression(), "1+2");
    }

    #[test]
    fn test_delete_inactive_tab_keeps_edits() {
        let mut session = Session::new();
        session.create_tab();
        session.push_str("8/2");

        session.delete_tab("Tab 1").unwrap();
        assert_eq!(session.active_tab(), Some("Tab 2"));
        assert_eq!(session.expression(), "8/2");
    }

    #[test]
    fn test_rename_collision_is_rejected() {
        let mut session = Session::new();
        session.create_tab();

        assert!(session.rename_tab("Tab 1", "Tab 2").is_err());
        assert_eq!(session.tab_names(), vec!["Tab 1", "Tab 2"]);
    }

    #[test]
    fn test_rename_active_tab() {
        let mut session = Session::new();
        session.push_str("3-1");

        session.rename_tab("Tab 1", "Budget").unwrap();
        assert_eq!(session.active_tab(), Some("Budget"));
        assert_eq!(session.expression(), "3-1");

        // Edits keep flowing to the renamed tab
        session.create_tab();
        assert_eq!(session.tab_expression("Budget").unwrap(), "3-1");
    }

    #[test]
    fn test_reorder_tab() {
        let mut session = Session::new();
        session.create_tab();
        session.create_tab();

        assert!(session.reorder_tab("Tab 3", "Tab 1"));
        assert_eq!(session.tab_names(), vec!["Tab 3", "Tab 1", "Tab 2"]);
        assert_eq!(session.active_tab(), Some("Tab 3"));

        assert!(!session.reorder_tab("Tab 1", "Tab 1"));
        assert!(!session.reorder_tab("Tab 1", "Missing"));
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.push_str("12+");
        session.clear();
        assert_eq!(session.expression(), "");
    }

    #[test]
    fn test_from_tabs_falls_back_to_first() {
        let tabs = [Tab::with_expression("A", "1"), Tab::with_expression("B", "2")]
            .into_iter()
            .collect();
        let session = Session::from_tabs(tabs, Some("Missing".to_string()));
        assert_eq!(session.active_tab(), Some("A"));
        assert_eq!(session.expression(), "1");
    }
}
