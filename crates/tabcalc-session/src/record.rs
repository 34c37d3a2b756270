//! Persisted form of a session
//!
//! ```json
//! {"tabs": {"Tab 1": "7*3", "Tab 2": ""}, "current_tab": "Tab 1"}
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use tabcalc_tabs::{Tab, TabList};

use crate::session::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Tab name to expression, in display order
    #[serde(default)]
    pub tabs: IndexMap<String, String>,
    /// Active tab; older files call it `active_tab`
    #[serde(default, alias = "active_tab", skip_serializing_if = "Option::is_none")]
    pub current_tab: Option<String>,
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            tabs: session
                .tabs()
                .into_iter()
                .map(|tab| (tab.name, tab.expression))
                .collect(),
            current_tab: session.active_tab().map(str::to_string),
        }
    }
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        let tabs: TabList = record
            .tabs
            .into_iter()
            .map(|(name, expression)| Tab::with_expression(name, expression))
            .collect();
        Session::from_tabs(tabs, record.current_tab)
    }
}

/// Snapshot a session, including the active tab's unflushed edits
pub fn serialize(session: &Session) -> SessionRecord {
    SessionRecord::from(session)
}

/// Rebuild a session. A missing record gives an empty session.
pub fn deserialize(record: Option<SessionRecord>) -> Session {
    record.map(Session::from).unwrap_or_else(Session::empty)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Action {
        Create,
        Delete(usize),
        Switch(usize),
        Type(String),
        Reorder(usize, usize),
        Rename(usize, String),
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Create),
            any::<usize>().prop_map(Action::Delete),
            any::<usize>().prop_map(Action::Switch),
            "[0-9+*/.-]{1,6}".prop_map(Action::Type),
            (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Action::Reorder(a, b)),
            (any::<usize>(), "[a-zA-Z0-9]{1,15}").prop_map(|(i, n)| Action::Rename(i, n)),
        ]
    }

    fn pick(session: &Session, index: usize) -> String {
        let names = session.tab_names();
        names[index % names.len()].clone()
    }

    fn apply(session: &mut Session, action: Action) {
        match action {
            Action::Create => {
                session.create_tab();
            }
            Action::Delete(i) => {
                let name = pick(session, i);
                let _ = session.delete_tab(&name);
            }
            Action::Switch(i) => {
                let name = pick(session, i);
                session.switch_tab(&name).unwrap();
            }
            Action::Type(text) => session.push_str(&text),
            Action::Reorder(a, b) => {
                let moved = pick(session, a);
                let target = pick(session, b);
                session.reorder_tab(&moved, &target);
            }
            Action::Rename(i, new) => {
                let old = pick(session, i);
                let _ = session.rename_tab(&old, &new);
            }
        }
    }

    proptest! {
        /// deserialize(serialize(s)) keeps tabs, order, expressions and the active tab
        #[test]
        fn prop_record_round_trip(actions in prop::collection::vec(action_strategy(), 0..30)) {
            let mut session = Session::new();
            for action in actions {
                apply(&mut session, action);
            }

            let restored = deserialize(Some(serialize(&session)));

            prop_assert_eq!(restored.tabs(), session.tabs());
            prop_assert_eq!(restored.active_tab(), session.active_tab());
            prop_assert_eq!(restored.expression(), session.expression());
        }

        /// The tab set never drops below one tab
        #[test]
        fn prop_never_empty(actions in prop::collection::vec(action_strategy(), 0..30)) {
            let mut session = Session::new();
            for action in actions {
                apply(&mut session, action);
                prop_assert!(session.tab_count() >= 1);
                let active = session.active_tab().map(str::to_string);
                prop_assert!(active.is_some_and(|name| session.tab_names().contains(&name)));
            }
        }
    }
}
