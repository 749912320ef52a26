// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Plain-text responses.

use crate::card::Card;
use crate::collection::CardCollection;

pub const NOT_IN_API: &str = "The card isn't in the API.";
pub const NO_CARDS: &str = "No cards found.";
pub const NO_MATCHES: &str = "No cards found with the specified characteristics.";

/// `Name: <name>,\nDetails: Card{...}\n\n`
pub fn card_block(name: &str, card: &Card) -> String {
    format!("Name: {},\nDetails: {}\n\n", name, card)
}

pub fn collection(cards: &CardCollection) -> String {
    if cards.is_empty() {
        return NO_CARDS.to_string();
    }
    cards.iter().map(|(name, card)| card_block(name, card)).collect()
}

pub fn added(names: &[String]) -> String {
    format!("{} has been added to the collection.", name_list(names))
}

pub fn removed_many(names: &[String]) -> String {
    format!("{} has been removed from the collection.", name_list(names))
}

pub fn updated(name: &str) -> String {
    format!("{} has been update.", name)
}

pub fn removed(name: &str) -> String {
    format!("{} has been removed from the API.", name)
}

pub fn matches(names: &[&str]) -> String {
    if names.is_empty() {
        NO_MATCHES.to_string()
    } else {
        format!("Matching cards: {}", names.join(", "))
    }
}

pub fn greeting(user_agent: &str) -> String {
    format!("Welcome to the MTG cards API!\nYour User-Agent is: {}", user_agent)
}

fn name_list(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}
