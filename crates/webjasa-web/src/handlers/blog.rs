//! Blog listing, category filter and single posts.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use webjasa_common::Result;

use crate::content::blog::{self, BlogPost, ALL_CATEGORY_SLUG};
use crate::handlers::not_found::not_found_page;
use crate::handlers::render_page;
use crate::state::{AppState, SharedState};

pub async fn blog_page(State(state): State<SharedState>) -> Result<Html<String>> {
    render_listing(&state, ALL_CATEGORY_SLUG, blog::regular().collect(), true)
}

pub async fn blog_category_page(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Response> {
    let slug = slug.to_lowercase();
    let Some(posts) = blog::in_category(&slug) else {
        return Ok(not_found_page(&state, &format!("/blog/category/{slug}")));
    };
    let show_featured = slug == ALL_CATEGORY_SLUG;
    let posts = if show_featured {
        posts.into_iter().filter(|p| !p.featured).collect()
    } else {
        posts
    };
    Ok(render_listing(&state, &slug, posts, show_featured)?.into_response())
}

/// Non-numeric and unknown ids both get the 404 page.
pub async fn blog_post_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let Some(post) = id.parse::<u32>().ok().and_then(blog::find) else {
        return Ok(not_found_page(&state, &format!("/blog/{id}")));
    };
    let related: Vec<&BlogPost> = blog::POSTS
        .iter()
        .filter(|p| p.id != post.id)
        .take(3)
        .collect();

    let html = render_page(&state, "blog_post.html", context! {
        active => "/blog",
        post,
        category_slug => blog::slugify(post.category),
        related,
    })?;
    Ok(html.into_response())
}

fn render_listing(
    state: &AppState,
    active_category: &str,
    posts: Vec<&BlogPost>,
    show_featured: bool,
) -> Result<Html<String>> {
    let featured: Vec<&BlogPost> = if show_featured { blog::featured().collect() } else { Vec::new() };
    render_page(state, "blog.html", context! {
        active => "/blog",
        active_category,
        featured,
        posts,
        categories => blog::categories(),
        popular => blog::popular().collect::<Vec<_>>(),
    })
}
