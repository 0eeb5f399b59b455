//! Date-sorted post listings with category badges

use serde::Serialize;

use super::post::{sort_by_date_desc, Post, PostData};
use crate::helpers::{classify, CategoryStyle};

/// One row of a listing page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub id: String,
    pub url: String,
    #[serde(flatten)]
    pub data: PostData,
    pub badge: CategoryStyle,
}

/// Dated posts, newest first, each with its category badge
pub fn listing<I>(posts: I) -> Vec<ListingItem>
where
    I: IntoIterator<Item = Post>,
{
    let mut dated: Vec<Post> = posts.into_iter().filter(Post::is_dated).collect();
    sort_by_date_desc(&mut dated);

    dated
        .into_iter()
        .map(|post| ListingItem {
            badge: classify(post.data.category.as_deref()),
            id: post.id,
            url: post.url,
            data: post.data,
        })
        .collect()
}
