// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// File the card collection lives in when no path is configured.
pub const DEFAULT_STORE_FILE: &str = "mtgCards.json";

/// Body of a freshly initialised store.
pub const EMPTY_STORE: &str = "{}";
