// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Every card known to the API, keyed by exact (case-sensitive) name.
///
/// Backed by an `IndexMap` so a load/save cycle keeps the file's key order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CardCollection {
    cards: IndexMap<String, Card>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Card)> {
        self.cards.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.cards.keys()
    }

    /// Inserts or overwrites a single card. Returns the previous card, if any.
    pub fn insert(&mut self, name: impl Into<String>, card: Card) -> Option<Card> {
        self.cards.insert(name.into(), card)
    }

    /// Inserts or overwrites every entry of `batch`, returning the names written
    /// in batch order. An overwritten name keeps its original position.
    pub fn upsert_all(&mut self, batch: CardCollection) -> Vec<String> {
        let mut written = Vec::with_capacity(batch.len());
        for (name, card) in batch.cards {
            written.push(name.clone());
            self.cards.insert(name, card);
        }
        written
    }

    /// Replaces the card stored under `name` wholesale.
    /// Returns `false` and leaves the collection untouched when `name` is absent.
    pub fn replace(&mut self, name: &str, card: Card) -> bool {
        match self.cards.get_mut(name) {
            Some(slot) => {
                *slot = card;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Card> {
        self.cards.shift_remove(name)
    }

    /// Removes every name that is present; absent names are skipped.
    /// Returns the names actually removed, in request order.
    pub fn remove_all<'a, I>(&mut self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        names
            .into_iter()
            .filter(|name| self.cards.shift_remove(name.as_str()).is_some())
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, Card)> for CardCollection {
    fn from_iter<T: IntoIterator<Item = (String, Card)>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CardCollection {
    type Item = (String, Card);
    type IntoIter = indexmap::map::IntoIter<String, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
