// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! mtg-cards: a card collection persisted as one flat JSON file, with
//! load/save, search and plain-text rendering.

pub mod config;
pub mod error;
pub mod card;
pub mod collection;
pub mod store;
pub mod search;
pub mod render;

pub use card::Card;
pub use collection::CardCollection;
pub use error::StoreError;
pub use search::CardFilter;
pub use store::CardStore;

#[cfg(test)]
pub mod tests;
