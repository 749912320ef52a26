// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::collection::CardCollection;
use crate::render;
use crate::tests::card;

#[test]
fn test_card_block() {
    let block = render::card_block("Shock", &card("R", "Instant"));
    assert_eq!(block, "Name: Shock,\nDetails: Card{CCM='R', type='Instant'}\n\n");
}

#[test]
fn test_collection_blocks_in_order() {
    let mut cards = CardCollection::new();
    cards.insert("Shock", card("R", "Instant"));
    cards.insert("Opt", card("U", "Instant"));

    let text = render::collection(&cards);
    let shock = text.find("Name: Shock").unwrap();
    let opt = text.find("Name: Opt").unwrap();
    assert!(shock < opt);
    assert!(text.ends_with("\n\n"));

    assert_eq!(render::collection(&CardCollection::new()), render::NO_CARDS);
}

#[test]
fn test_messages() {
    let names = vec!["Shock".to_string(), "Opt".to_string()];
    assert_eq!(render::added(&names), "[Shock, Opt] has been added to the collection.");
    assert_eq!(render::removed_many(&[]), "[] has been removed from the collection.");
    assert_eq!(render::removed("Shock"), "Shock has been removed from the API.");
    assert_eq!(render::updated("Shock"), "Shock has been update.");
    assert_eq!(render::matches(&["Bolt", "Shock"]), "Matching cards: Bolt, Shock");
    assert_eq!(render::matches(&[]), render::NO_MATCHES);
    assert!(render::greeting("curl/8.0").ends_with("Your User-Agent is: curl/8.0"));
}
