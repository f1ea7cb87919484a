use anyhow::Result;
use std::time::Duration;

use tower::Layer;
use tower_http::services::ServeDir;
use tracing::info;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, put},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, method_override, state::*, ServerConfig};
use crate::catalog_store::{Album, AlbumFields, Artist};
use crate::catalog_sync::SyncError;
use crate::inventory::{
    AlbumView, ArtistView, CollectionView, EditAlbumView, Inventory, InventoryError, Outcome,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub albums_count: usize,
    pub artists_count: usize,
}

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

/// Body of a 207 response: the write happened, the artist sync did not.
#[derive(Serialize)]
struct PartialSuccessBody {
    record: Album,
    warning: String,
}

#[derive(Serialize)]
struct CascadeDeleteBody {
    albums_deleted: usize,
    warning: String,
}

#[derive(Deserialize, Debug)]
struct BestAlbumsQuery {
    pub min_rating: Option<i64>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

fn redirect_or_partial(outcome: Outcome<Album>, redirect_to: &str) -> Response {
    match outcome.warning {
        None => Redirect::to(redirect_to).into_response(),
        Some(warning) => (
            StatusCode::MULTI_STATUS,
            Json(PartialSuccessBody {
                record: outcome.value,
                warning: warning.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let store = state.inventory.store();
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        albums_count: store.get_albums_count(),
        artists_count: store.get_artists_count(),
    };
    Json(stats)
}

async fn not_found() -> Response {
    let body = ErrorBody {
        status: StatusCode::NOT_FOUND.as_u16(),
        message: "Page not found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

// =========================================================================
// Collection
// =========================================================================

async fn get_collection(
    State(inventory): State<GuardedInventory>,
) -> Result<Json<CollectionView>, InventoryError> {
    Ok(Json(inventory.collection()?))
}

async fn post_album(
    State(inventory): State<GuardedInventory>,
    Form(fields): Form<AlbumFields>,
) -> Result<Response, InventoryError> {
    let outcome = inventory.create_album(&fields)?;
    Ok(redirect_or_partial(outcome, "/collection"))
}

async fn put_album(
    State(inventory): State<GuardedInventory>,
    Path(id): Path<String>,
    Form(fields): Form<AlbumFields>,
) -> Result<Response, InventoryError> {
    let outcome = inventory.update_album(&id, &fields)?;
    Ok(redirect_or_partial(outcome, "/collection"))
}

async fn delete_album(
    State(inventory): State<GuardedInventory>,
    Path(id): Path<String>,
) -> Result<Response, InventoryError> {
    let outcome = inventory.delete_album(&id)?;
    Ok(redirect_or_partial(outcome, "/collection"))
}

// =========================================================================
// Artists
// =========================================================================

async fn get_artists(
    State(inventory): State<GuardedInventory>,
) -> Result<Json<Vec<Artist>>, InventoryError> {
    Ok(Json(inventory.artists()?))
}

async fn delete_artist(
    State(inventory): State<GuardedInventory>,
    Path(id): Path<String>,
) -> Response {
    match inventory.delete_artist(&id) {
        Ok(report) => {
            info!("Artist {} deleted with {} albums", id, report.albums_deleted);
            Redirect::to("/artists").into_response()
        }
        // The albums may be partly gone while the artist still stands.
        Err(InventoryError::Cascade(err)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(CascadeDeleteBody {
                albums_deleted: match &err {
                    SyncError::ArtistRemoval { albums_deleted, .. } => *albums_deleted,
                    _ => 0,
                },
                warning: err.to_string(),
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

// =========================================================================
// Pages
// =========================================================================

async fn get_best_albums(
    State(inventory): State<GuardedInventory>,
    Query(query): Query<BestAlbumsQuery>,
) -> Result<Json<CollectionView>, InventoryError> {
    Ok(Json(inventory.best_albums(query.min_rating)?))
}

async fn get_view_info(
    State(inventory): State<GuardedInventory>,
    Path(id): Path<String>,
) -> Result<Json<AlbumView>, InventoryError> {
    Ok(Json(inventory.album(&id)?))
}

async fn get_edit_info(
    State(inventory): State<GuardedInventory>,
    Path(id): Path<String>,
) -> Result<Json<EditAlbumView>, InventoryError> {
    Ok(Json(inventory.edit_album(&id)?))
}

async fn get_show_artist(
    State(inventory): State<GuardedInventory>,
    Path(id): Path<String>,
) -> Result<Json<ArtistView>, InventoryError> {
    Ok(Json(inventory.artist_detail(&id)?))
}

pub fn make_app(config: ServerConfig, inventory: Inventory) -> Result<Router> {
    let state = ServerState::new(config.clone(), inventory);

    let collection_routes: Router = Router::new()
        .route("/", get(get_collection).post(post_album))
        .route("/{id}", put(put_album).delete(delete_album))
        .with_state(state.clone());

    let artist_routes: Router = Router::new()
        .route("/", get(get_artists))
        .route("/{id}", delete(delete_artist))
        .with_state(state.clone());

    let page_routes: Router = Router::new()
        .route("/bestAlbums", get(get_best_albums))
        .route("/viewInfo/{id}", get(get_view_info))
        .route("/editInfo/{id}", get(get_edit_info))
        .route("/showArtist/{id}", get(get_show_artist))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .fallback(not_found)
            .with_state(state.clone()),
    };

    let routes: Router = home_router
        .nest("/collection", collection_routes)
        .nest("/artists", artist_routes)
        .merge(page_routes);

    // Wrapping the whole router lets the rewritten method take part in routing.
    let app = Router::new()
        .fallback_service(middleware::from_fn(method_override).layer(routes))
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(inventory: Inventory, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let app = make_app(config, inventory)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
