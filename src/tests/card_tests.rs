// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::card::Card;
use crate::tests::card;

#[test]
fn test_card_json_field_names() {
    let json = r#"{
        "CCM": "R",
        "color": "Red",
        "keywords": ["Haste"],
        "type": "Instant",
        "text": "Deal 3 damage to any target.",
        "legality": ["Modern", "Legacy"]
    }"#;
    let c: Card = serde_json::from_str(json).unwrap();

    assert_eq!(c.converted_mana_cost.as_deref(), Some("R"));
    assert_eq!(c.color.as_deref(), Some("Red"));
    assert_eq!(c.card_type.as_deref(), Some("Instant"));
    assert!(c.has_keyword("Haste"));
    assert!(c.is_legal_in("Legacy"));
    assert!(!c.is_legal_in("Standard"));
}

#[test]
fn test_absent_fields_are_omitted() {
    let c = card("R", "Instant");
    let value = serde_json::to_value(&c).unwrap();
    let obj = value.as_object().unwrap();

    assert_eq!(obj.len(), 2);
    assert_eq!(obj["CCM"], "R");
    assert_eq!(obj["type"], "Instant");
    assert!(!obj.contains_key("color"));
    assert!(!obj.contains_key("legality"));
}

#[test]
fn test_empty_object_is_a_card() {
    let c: Card = serde_json::from_str("{}").unwrap();
    assert_eq!(c, Card::default());
    assert!(!c.has_keyword("Flying"));
    assert!(!c.is_legal_in("Modern"));
}

#[test]
fn test_unknown_fields_ignored() {
    let c: Card = serde_json::from_str(r#"{"CCM": "1", "rarity": "mythic"}"#).unwrap();
    assert_eq!(c.converted_mana_cost.as_deref(), Some("1"));
}

#[test]
fn test_display_skips_absent_and_empty() {
    assert_eq!(card("R", "Instant").to_string(), "Card{CCM='R', type='Instant'}");
    assert_eq!(Card::default().to_string(), "Card{}");

    let c = Card {
        color: Some("Green".into()),
        keywords: Some(vec![]),
        legality: Some(vec!["Modern".into(), "Pauper".into()]),
        ..Default::default()
    };
    assert_eq!(c.to_string(), "Card{color='Green', legality=[Modern, Pauper]}");
}

#[test]
fn test_display_field_order() {
    let c = Card {
        converted_mana_cost: Some("2G".into()),
        color: Some("Green".into()),
        keywords: Some(vec!["Trample".into(), "Haste".into()]),
        card_type: Some("Creature".into()),
        text: Some("Big.".into()),
        legality: Some(vec!["Legacy".into()]),
    };
    assert_eq!(
        c.to_string(),
        "Card{CCM='2G', color='Green', keywords=[Trample, Haste], type='Creature', text='Big.', legality=[Legacy]}"
    );
}
