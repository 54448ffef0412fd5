//! Aggregate statistics over all stored blogs.

use actix_web::{HttpResponse, web};

use bloglist_core::stats;
use bloglist_shared::dto::{AuthorBlogsStat, AuthorLikesStat, FavoriteBlogStat, StatsResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn summary(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut blogs = state.blogs.find_all().await?;
    // Tie-breaking follows list order, so use the same order as GET /api/blogs.
    blogs.sort_by_key(|blog| blog.created_at);

    let response = StatsResponse {
        total_likes: stats::total_likes(&blogs),
        favorite_blog: stats::favorite_blog(&blogs).map(|f| FavoriteBlogStat {
            title: f.title,
            author: f.author,
            likes: f.likes,
        }),
        most_blogs: stats::most_blogs(&blogs).map(|m| AuthorBlogsStat {
            author: m.author,
            blogs: m.blogs,
        }),
        most_likes: stats::most_likes(&blogs).map(|m| AuthorLikesStat {
            author: m.author,
            likes: m.likes,
        }),
    };

    Ok(HttpResponse::Ok().json(response))
}
