//! # Registry
//!
//! Name → command lookup, built once at startup.
//!
//! Resolution is a case-insensitive exact match on the whole token: no
//! prefixes, no fuzzy matching, no aliases. Prefix search exists only as
//! [`Registry::complete`] for the renderer's Tab completion.

use std::collections::BTreeMap;

use log::warn;

use super::{Builtin, Category, Command};

pub struct Registry {
    /// Keyed by lower-cased name; BTreeMap keeps `names()` sorted for free.
    commands: BTreeMap<String, Box<dyn Command>>,
    /// Registration order, used to order names within a help category.
    order: Vec<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// An empty registry. Most callers want [`Registry::builtin`].
    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    /// The full built-in command set.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for builtin in Builtin::ALL {
            registry.register(builtin);
        }
        registry
    }

    /// Adds a command. A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, command: impl Command + 'static) {
        let key = command.name().to_lowercase();
        if self.commands.contains_key(&key) {
            warn!("Command '{key}' registered twice; keeping the latest");
            self.order.retain(|name| name != &key);
        }
        self.order.push(key.clone());
        self.commands.insert(key, Box::new(command));
    }

    pub fn resolve(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Names grouped by category in `Category::ALL` order. Uncategorized
    /// commands and empty categories are left out.
    pub fn by_category(&self) -> Vec<(Category, Vec<&str>)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let names: Vec<&str> = self
                    .order
                    .iter()
                    .filter(|name| {
                        self.commands
                            .get(name.as_str())
                            .is_some_and(|c| c.category() == Some(category))
                    })
                    .map(String::as_str)
                    .collect();
                (!names.is_empty()).then_some((category, names))
            })
            .collect()
    }

    /// Sorted names starting with `prefix` (case-insensitive).
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.commands
            .keys()
            .filter(|name| name.starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }
}
