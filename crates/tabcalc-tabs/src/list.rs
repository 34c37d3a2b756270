//! Ordered tab list
//!
//! Names are unique. Position in the list is display order.

use crate::error::TabError;
use crate::tab::{default_name, validate_name, Tab};
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabList {
    tabs: Vec<Tab>,
}

impl TabList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.name.clone()).collect()
    }

    pub fn first(&self) -> Option<&Tab> {
        self.tabs.first()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.name == name)
    }

    pub fn get(&self, name: &str) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| TabError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| TabError::NotFound(name.to_string()))
    }

    /// Lowest-numbered "Tab N" not already in use
    pub fn next_default_name(&self) -> String {
        (1..)
            .map(default_name)
            .find(|name| !self.contains(name))
            .unwrap_or_else(|| default_name(self.tabs.len() + 1))
    }

    /// Append a tab. A tab with the same name is replaced in place.
    pub fn push(&mut self, tab: Tab) {
        match self.tabs.iter_mut().find(|t| t.name == tab.name) {
            Some(existing) => *existing = tab,
            None => self.tabs.push(tab),
        }
    }

    pub fn remove(&mut self, name: &str) -> Result<Tab> {
        let index = self
            .position(name)
            .ok_or_else(|| TabError::NotFound(name.to_string()))?;
        Ok(self.tabs.remove(index))
    }

    /// Rename a tab in place. Nothing changes unless every check passes.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.contains(old) {
            return Err(TabError::NotFound(old.to_string()));
        }
        if old == new {
            return Err(TabError::NameUnchanged(new.to_string()));
        }
        if self.contains(new) {
            return Err(TabError::NameTaken(new.to_string()));
        }
        validate_name(new)?;

        self.get_mut(old)?.name = new.to_string();

        tracing::debug!(from = %old, to = %new, "Renamed tab");

        Ok(())
    }

    /// Move `moved` to the index `target` occupies. Returns false when
    /// nothing moved (same tab, or either name missing).
    pub fn move_to(&mut self, moved: &str, target: &str) -> bool {
        if moved == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(moved), self.position(target)) else {
            return false;
        };

        let tab = self.tabs.remove(from);
        let insert_index = to.min(self.tabs.len());
        self.tabs.insert(insert_index, tab);

        true
    }
}

impl<'a> IntoIterator for &'a TabList {
    type Item = &'a Tab;
    type IntoIter = std::slice::Iter<'a, Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}

impl FromIterator<Tab> for TabList {
    fn from_iter<I: IntoIterator<Item = Tab>>(iter: I) -> Self {
        let mut list = Self::new();
        for tab in iter {
            list.push(tab);
        }
        list
    }
}
