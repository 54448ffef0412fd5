//! Aggregations over a list of blogs.
//!
//! Every helper returns `None` for an empty slice. Ties go to whichever
//! candidate is encountered first: the earlier blog for [`favorite_blog`], the
//! author whose first blog appears earlier for [`most_blogs`] and [`most_likes`].
//! Like counts saturate at `i64::MAX` instead of overflowing.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Blog;

/// Summary of the most liked blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: i64,
}

/// Author with the largest number of blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// Author whose blogs have the most likes combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// Sum of likes over all blogs.
pub fn total_likes(blogs: &[Blog]) -> Option<i64> {
    if blogs.is_empty() {
        return None;
    }
    Some(
        blogs
            .iter()
            .fold(0_i64, |sum, b| sum.saturating_add(b.likes)),
    )
}

/// The blog with the most likes.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let favorite = blogs
        .iter()
        .reduce(|best, b| if b.likes > best.likes { b } else { best })?;

    Some(FavoriteBlog {
        title: favorite.title.clone(),
        author: favorite.author.clone(),
        likes: favorite.likes,
    })
}

/// The author who wrote the most blogs.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    let (author, blogs) = top_author(blogs, |_| 1_i64)?;
    Some(AuthorBlogs {
        author,
        blogs: blogs as usize,
    })
}

/// The author whose blogs collected the most likes.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let (author, likes) = top_author(blogs, |b| b.likes)?;
    Some(AuthorLikes { author, likes })
}

/// Group by author in first-seen order and pick the strict maximum of `weight`.
fn top_author(blogs: &[Blog], weight: impl Fn(&Blog) -> i64) -> Option<(String, i64)> {
    let mut order: Vec<(&str, i64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for blog in blogs {
        let slot = *index.entry(blog.author.as_str()).or_insert_with(|| {
            order.push((blog.author.as_str(), 0));
            order.len() - 1
        });
        order[slot].1 = order[slot].1.saturating_add(weight(blog));
    }

    order
        .into_iter()
        .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
        .map(|(author, total)| (author.to_string(), total))
}
