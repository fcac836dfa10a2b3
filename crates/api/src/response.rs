use chanarc_types::post::{Post, Thread};
use tracing::warn;

use super::error::Error;

/// A fetched thread document, exactly as served.
#[derive(Debug, Clone)]
pub struct ThreadResponse {
    pub raw: serde_json::Value,
}

impl ThreadResponse {
    pub async fn parse(resp: reqwest::Response) -> Result<Self, Error> {
        let raw = resp.json::<serde_json::Value>().await?;
        Ok(ThreadResponse { raw })
    }

    /// The typed view used to find attachments.
    /// A post that does not fit the model is skipped with a warning; only a
    /// document without a `posts` array is rejected.
    pub fn thread(&self) -> Result<Thread, Error> {
        let posts = self
            .raw
            .get("posts")
            .and_then(serde_json::Value::as_array)
            .ok_or(Error::InvalidResponse)?;
        let posts = posts
            .iter()
            .enumerate()
            .filter_map(|(i, post)| match serde_json::from_value::<Post>(post.clone()) {
                Ok(post) => Some(post),
                Err(e) => {
                    warn!("Skipping post #{} of thread document: {}", i, e);
                    None
                }
            })
            .collect();
        Ok(Thread { posts })
    }
}
