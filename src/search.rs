// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Multi-field card search.
//!
//! Every supplied criterion must hold for a card to match; criteria left as
//! `None` impose nothing. A card that lacks the field a criterion targets never
//! matches that criterion.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::collection::CardCollection;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    /// Case-insensitive equality on the mana cost.
    #[serde(rename = "CCM", default)]
    pub converted_mana_cost: Option<String>,
    /// Case-insensitive equality.
    #[serde(default)]
    pub color: Option<String>,
    /// Exact membership in the keyword list.
    #[serde(default)]
    pub keywords: Option<String>,
    /// Case-insensitive equality.
    #[serde(rename = "type", default)]
    pub card_type: Option<String>,
    /// Case-sensitive substring of the rules text.
    #[serde(default)]
    pub text: Option<String>,
    /// Exact membership in the legality list.
    #[serde(default)]
    pub legality: Option<String>,
    /// Case-insensitive substring of the card name.
    #[serde(default)]
    pub name: Option<String>,
}

impl CardFilter {
    pub fn matches(&self, name: &str, card: &Card) -> bool {
        eq_ignore_case(&self.converted_mana_cost, &card.converted_mana_cost)
            && eq_ignore_case(&self.color, &card.color)
            && self.keywords.as_deref().map_or(true, |k| card.has_keyword(k))
            && eq_ignore_case(&self.card_type, &card.card_type)
            && self
                .text
                .as_deref()
                .map_or(true, |t| card.text.as_deref().is_some_and(|text| text.contains(t)))
            && self.legality.as_deref().map_or(true, |l| card.is_legal_in(l))
            && self
                .name
                .as_deref()
                .map_or(true, |n| name.to_lowercase().contains(&n.to_lowercase()))
    }

    /// Names of every matching card, in collection order.
    pub fn search<'a>(&self, cards: &'a CardCollection) -> Vec<&'a str> {
        cards
            .iter()
            .filter(|(name, card)| self.matches(name, card))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

fn eq_ignore_case(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match (wanted, actual) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(w), Some(a)) => w.to_lowercase() == a.to_lowercase(),
    }
}
