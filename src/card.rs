// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Card record.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Gameplay attributes of a single card.
///
/// A card carries no name: identity comes from the key it is stored under in a
/// [`CardCollection`](crate::collection::CardCollection). Every field is optional
/// and absent fields are left out of the serialized form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    /// Converted mana cost token, e.g. `"R"` or `"2UU"`.
    #[serde(rename = "CCM", default, skip_serializing_if = "Option::is_none")]
    pub converted_mana_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Formats the card is legal in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legality: Option<Vec<String>>,
}

impl Card {
    pub fn has_keyword(&self, keyword: &str) -> bool {
        contains(&self.keywords, keyword)
    }

    pub fn is_legal_in(&self, format: &str) -> bool {
        contains(&self.legality, format)
    }
}

fn contains(list: &Option<Vec<String>>, needle: &str) -> bool {
    list.as_ref()
        .map(|items| items.iter().any(|item| item == needle))
        .unwrap_or(false)
}

/// Renders as `Card{CCM='R', keywords=[Haste], type='Instant'}`.
/// Absent fields and empty lists are skipped.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if let Some(ccm) = &self.converted_mana_cost {
            parts.push(format!("CCM='{}'", ccm));
        }
        if let Some(color) = &self.color {
            parts.push(format!("color='{}'", color));
        }
        if let Some(keywords) = self.keywords.as_ref().filter(|k| !k.is_empty()) {
            parts.push(format!("keywords=[{}]", keywords.join(", ")));
        }
        if let Some(card_type) = &self.card_type {
            parts.push(format!("type='{}'", card_type));
        }
        if let Some(text) = &self.text {
            parts.push(format!("text='{}'", text));
        }
        if let Some(legality) = self.legality.as_ref().filter(|l| !l.is_empty()) {
            parts.push(format!("legality=[{}]", legality.join(", ")));
        }

        write!(f, "Card{{{}}}", parts.join(", "))
    }
}
