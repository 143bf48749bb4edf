//! List element
//!
//! Unordered (`*`/`-`) and ordered (`N.`) lists. A list holds literal entries
//! and nested lists side by side: a level-2 list following the entry "Item 2"
//! is stored as the next entry of the level-1 list, not inside "Item 2".
//!
//! Examples:
//!       * Item 1
//!       * Item 2
//!         - Item 2.1
//!
//! yields `[Item("Item 1"), Item("Item 2"), Nested([Item("Item 2.1")])]`.
//!
//! Ordered lists keep the first literal number they saw as `start_number`;
//! later numbers are advisory and not stored.

use crate::mdc::lexing::ListKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub kind: ListKind,
    /// First literal item number of an ordered list, 1 for unordered lists
    pub start_number: u32,
    pub entries: Vec<ListEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ListEntry {
    Item(String),
    Nested(List),
}

impl List {
    pub fn unordered() -> Self {
        Self {
            kind: ListKind::Unordered,
            start_number: 1,
            entries: Vec::new(),
        }
    }

    pub fn ordered(start_number: u32) -> Self {
        Self {
            kind: ListKind::Ordered,
            start_number,
            entries: Vec::new(),
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.kind == ListKind::Ordered
    }

    pub fn push_item(&mut self, text: impl Into<String>) {
        self.entries.push(ListEntry::Item(text.into()));
    }

    pub fn push_nested(&mut self, list: List) {
        self.entries.push(ListEntry::Nested(list));
    }

    /// Appends a continuation line to the last literal entry
    pub fn extend_last_item(&mut self, text: &str) -> bool {
        match self.entries.last_mut() {
            Some(ListEntry::Item(existing)) => {
                existing.push(' ');
                existing.push_str(text);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest of every entry followed by a blank, nested lists inline
    pub fn digest(&self) -> String {
        let mut digest = String::new();
        for entry in &self.entries {
            digest.push_str(&entry.digest());
            digest.push(' ');
        }
        digest
    }
}

impl ListEntry {
    pub fn digest(&self) -> String {
        match self {
            ListEntry::Item(text) => text.clone(),
            ListEntry::Nested(list) => list.digest(),
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            ListEntry::Nested(list) => Some(list),
            ListEntry::Item(_) => None,
        }
    }
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListEntry::Item(text) => write!(f, "{}", text),
            ListEntry::Nested(list) => write!(f, "{}", list),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.entries.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_digest_and_display() {
        let mut inner = List::unordered();
        inner.push_item("Item 2.1");
        let mut outer = List::ordered(3);
        outer.push_item("Item 1");
        outer.push_nested(inner);

        assert_eq!(outer.digest(), "Item 1 Item 2.1  ");
        assert_eq!(outer.to_string(), "Item 1\nItem 2.1");
        assert_eq!(outer.entries[1].as_list().map(List::len), Some(1));
        assert!(outer.is_ordered());
    }
}
