// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod card_tests;
pub mod render_tests;

use crate::card::Card;

/// `{"CCM": ccm, "type": card_type}`
pub(crate) fn card(ccm: &str, card_type: &str) -> Card {
    Card {
        converted_mana_cost: Some(ccm.to_string()),
        card_type: Some(card_type.to_string()),
        ..Default::default()
    }
}
