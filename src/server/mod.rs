//! Development server rendering pages on request

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::helpers::{archive_path, post_path, url_for};
use crate::templates::BLOG_JS;
use crate::Blog;

type SharedBlog = Arc<Blog>;

#[derive(Debug, Deserialize)]
struct MoreQuery {
    shown: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct LegacyPostQuery {
    slug: Option<String>,
}

/// Build the application router
pub fn router(blog: Blog) -> Router {
    let static_dir = blog.static_dir.clone();
    let state: SharedBlog = Arc::new(blog);

    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/archive/", get(archive_handler))
        .route("/archive", get(|| async { Redirect::permanent("/archive/") }))
        .route("/posts/more", get(more_handler))
        .route("/posts/more.html", get(more_handler))
        .route("/posts/:slug/", get(post_handler))
        .route("/posts/:slug", get(post_redirect_handler))
        .route("/post.html", get(legacy_post_handler))
        .route("/js/blog.js", get(script_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the development server
pub async fn start(blog: Blog, ip: &str, port: u16) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let app = router(blog);

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(blog): State<SharedBlog>) -> Html<String> {
    Html(blog.render_index())
}

async fn archive_handler(State(blog): State<SharedBlog>) -> Html<String> {
    Html(blog.render_archive())
}

/// Entries past the first `shown`, for the "Show More" affordance
async fn more_handler(
    State(blog): State<SharedBlog>,
    Query(query): Query<MoreQuery>,
) -> Html<String> {
    let shown = query
        .shown
        .or(blog.config.listing_limit())
        .unwrap_or(blog.registry.len());
    Html(blog.render_more(shown))
}

async fn post_handler(State(blog): State<SharedBlog>, Path(slug): Path<String>) -> Response {
    let page = blog.render_post_page(&slug).await;
    if page.found {
        Html(page.html).into_response()
    } else {
        (StatusCode::NOT_FOUND, Html(page.html)).into_response()
    }
}

async fn post_redirect_handler(
    State(blog): State<SharedBlog>,
    Path(slug): Path<String>,
) -> Redirect {
    Redirect::permanent(&url_for(&blog.config, &post_path(&slug)))
}

/// `post.html?slug=...` links point at the post page
async fn legacy_post_handler(
    State(blog): State<SharedBlog>,
    Query(query): Query<LegacyPostQuery>,
) -> Redirect {
    let target = match query.slug.as_deref() {
        Some(slug) if !slug.is_empty() => url_for(&blog.config, &post_path(slug)),
        _ => url_for(&blog.config, archive_path()),
    };
    Redirect::permanent(&target)
}

async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        BLOG_JS,
    )
}
