use axum::{extract::Path, response::IntoResponse};

use crate::content::{BLOG_POSTS, BlogPost, blog_post};
use crate::error::AppError;
use crate::template::{current_year, render};

#[derive(askama::Template)]
#[template(path = "blog.html")]
pub struct BlogIndexTemplate {
    pub year: i32,
    pub active: &'static str,
    pub posts: &'static [BlogPost],
}

pub async fn index() -> impl IntoResponse {
    render(BlogIndexTemplate {
        year: current_year(),
        active: "blog",
        posts: BLOG_POSTS,
    })
}

#[derive(askama::Template)]
#[template(path = "blog_post.html")]
pub struct BlogPostTemplate {
    pub year: i32,
    pub active: &'static str,
    pub post: &'static BlogPost,
}

pub async fn post(Path(slug): Path<String>) -> Result<impl IntoResponse, AppError> {
    let post = blog_post(&slug).ok_or(AppError::NotFound)?;

    Ok(render(BlogPostTemplate {
        year: current_year(),
        active: "blog",
        post,
    }))
}
