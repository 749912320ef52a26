// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::TypedHeader;
use headers::UserAgent;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use mtg_cards::{render, CardCollection, CardStore};

use crate::api::*;
use crate::errors::ApiError;

/// The store behind one lock: each handler holds it across its whole
/// load → mutate → save sequence, so concurrent writers cannot lose updates.
///
/// Store I/O is blocking `std::fs` run directly on the runtime worker while the
/// lock is held. Every request serializes on the lock anyway and the file is
/// small, so nothing is moved to `spawn_blocking`.
pub type SharedStore = Arc<Mutex<CardStore>>;

pub fn shared_store(store: CardStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

pub fn build_router(state: SharedStore) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/cards", get(list_cards).post(create_cards).delete(delete_cards))
        // A card may be named "search": only GET is the search itself.
        .route(
            "/cards/search",
            get(search_cards)
                .put(replace_search_card)
                .patch(patch_search_card)
                .delete(remove_search_card),
        )
        .route(
            "/cards/:name",
            get(get_card).put(replace_card).patch(patch_card).delete(remove_card),
        )
        // Observability
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn record_request(op: &'static str) {
    metrics::increment_counter!("mtg_cards_requests_total", "op" => op);
}

fn record_size(cards: &CardCollection) {
    metrics::gauge!("mtg_cards_collection_size", cards.len() as f64);
}

async fn greeting(user_agent: Option<TypedHeader<UserAgent>>) -> String {
    record_request("greeting");
    let agent = user_agent
        .as_ref()
        .map(|TypedHeader(ua)| ua.as_str())
        .unwrap_or("Unknown");
    render::greeting(agent)
}

async fn list_cards(State(state): State<SharedStore>) -> Result<String, ApiError> {
    record_request("list");
    let store = state.lock().await;
    let cards = store.load_all()?;
    record_size(&cards);
    Ok(render::collection(&cards))
}

async fn get_card(
    State(state): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<String, ApiError> {
    record_request("get");
    let store = state.lock().await;
    let cards = store.load_all()?;
    match cards.get(&name) {
        Some(card) => Ok(render::card_block(&name, card)),
        None => {
            tracing::debug!("Card {:?} not found", name);
            Err(ApiError::NotFound)
        }
    }
}

async fn create_cards(
    State(state): State<SharedStore>,
    payload: Result<Json<CardBatchRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    record_request("create");
    let Json(batch) = payload?;
    let store = state.lock().await;

    let mut cards = store.load_all()?;
    let written = cards.upsert_all(batch);
    store.save_all(&cards)?;
    record_size(&cards);

    tracing::info!("Added {:?} to the collection", written);
    Ok(render::added(&written))
}

async fn delete_cards(
    State(state): State<SharedStore>,
    payload: Result<Json<CardBatchRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    record_request("delete_many");
    let Json(batch) = payload?;
    let store = state.lock().await;

    let mut cards = store.load_all()?;
    let removed = cards.remove_all(batch.names());
    store.save_all(&cards)?;
    record_size(&cards);

    tracing::info!("Removed {:?} from the collection", removed);
    Ok(render::removed_many(&removed))
}

async fn replace_card(
    State(state): State<SharedStore>,
    Path(name): Path<String>,
    payload: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    record_request("replace");
    update_card(state, name, payload).await
}

/// Same whole-card replacement as `PUT`; fields are not merged.
async fn patch_card(
    State(state): State<SharedStore>,
    Path(name): Path<String>,
    payload: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    record_request("patch");
    update_card(state, name, payload).await
}

/// Name of the card shadowed by the `/cards/search` route.
const SEARCH_CARD: &str = "search";

async fn replace_search_card(
    State(state): State<SharedStore>,
    payload: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    record_request("replace");
    update_card(state, SEARCH_CARD.to_string(), payload).await
}

async fn patch_search_card(
    State(state): State<SharedStore>,
    payload: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    record_request("patch");
    update_card(state, SEARCH_CARD.to_string(), payload).await
}

async fn update_card(
    state: SharedStore,
    name: String,
    payload: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(card) = payload?;
    tracing::info!("Updating card {:?} with {}", name, card);
    let store = state.lock().await;

    let mut cards = store.load_all()?;
    if !cards.replace(&name, card) {
        tracing::debug!("Card {:?} not found", name);
        return Err(ApiError::NotFound);
    }
    store.save_all(&cards)?;

    Ok(render::updated(&name))
}

async fn remove_card(
    State(state): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<String, ApiError> {
    record_request("remove");
    remove_named(state, name).await
}

async fn remove_search_card(State(state): State<SharedStore>) -> Result<String, ApiError> {
    record_request("remove");
    remove_named(state, SEARCH_CARD.to_string()).await
}

async fn remove_named(state: SharedStore, name: String) -> Result<String, ApiError> {
    let store = state.lock().await;

    let mut cards = store.load_all()?;
    if cards.remove(&name).is_none() {
        tracing::debug!("Card {:?} not found", name);
        return Err(ApiError::NotFound);
    }
    store.save_all(&cards)?;
    record_size(&cards);

    tracing::info!("Removed {:?} from the API", name);
    Ok(render::removed(&name))
}

async fn search_cards(
    State(state): State<SharedStore>,
    Query(params): Query<SearchParams>,
) -> Result<String, ApiError> {
    record_request("search");
    tracing::info!("Searching for cards with {:?}", params);
    let store = state.lock().await;

    let cards = store.load_all()?;
    let names = params.search(&cards);
    Ok(render::matches(&names))
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
