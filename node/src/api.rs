// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Request shapes.

use mtg_cards::{Card, CardCollection, CardFilter};

/// Body of `POST /cards` and `DELETE /cards`: card name to card.
/// For deletion only the names are used.
pub type CardBatchRequest = CardCollection;

/// Body of `PUT /cards/:name` and `PATCH /cards/:name`.
pub type UpdateCardRequest = Card;

/// Query string of `GET /cards/search`:
/// `CCM`, `color`, `keywords`, `type`, `text`, `legality`, `name`.
pub type SearchParams = CardFilter;
