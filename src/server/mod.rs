//! HTTP server for the feed and the post listing

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{Collections, ExportFormat};
use crate::helpers::url_for;
use crate::Blog;

/// Server state
struct ServerState {
    blog: Blog,
}

/// Build the router: the feed at its configured path and `posts.json`
pub fn router(blog: Blog) -> Router {
    let feed_route = url_for(&blog.config, &blog.config.feed.path);
    let listing_route = url_for(&blog.config, "posts.json");
    tracing::debug!("Routes: {} {}", feed_route, listing_route);

    let state = Arc::new(ServerState { blog });

    Router::new()
        .route(&feed_route, get(feed_handler))
        .route(&listing_route, get(listing_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(blog.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!(
        "Feed available at http://{}:{}{}",
        ip,
        port,
        url_for(&blog.config, &blog.config.feed.path)
    );
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Read the entries export fresh for every request
async fn load_collections(blog: &Blog) -> Result<Collections> {
    let format = ExportFormat::from_path(&blog.entries_path)?;
    let content = tokio::fs::read_to_string(&blog.entries_path).await?;
    Ok(Collections::parse(&content, format)?)
}

async fn feed_handler(State(state): State<Arc<ServerState>>) -> Response {
    match load_collections(&state.blog).await {
        Ok(collections) => {
            let xml = state.blog.render_feed(&collections);
            (
                [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
                xml,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to build feed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build feed").into_response()
        }
    }
}

async fn listing_handler(State(state): State<Arc<ServerState>>) -> Response {
    match load_collections(&state.blog).await {
        Ok(collections) => Json(state.blog.listing(&collections, None)).into_response(),
        Err(e) => {
            tracing::error!("Failed to build listing: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build listing").into_response()
        }
    }
}
