use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The attachment-bearing part of a thread document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Thread {
    pub posts: Vec<Post>,
}

impl Thread {
    /// Every file attached to the thread, in post order.
    /// A post's main file comes before its extra files.
    pub fn files(&self) -> Vec<PostFile> {
        self.posts.iter().flat_map(Post::files).collect()
    }
}

/// Server-side file stem. vichan boards use a millisecond timestamp,
/// 8chan's file store uses a hex digest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tim {
    Number(u64),
    Text(String),
}

impl Display for Tim {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Only the fields needed to locate a post's files. Everything else in the
/// document is kept verbatim in the raw JSON and never typed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub no: u64,
    pub tim: Option<Tim>,
    pub ext: Option<String>,
    pub filename: Option<String>,
    pub extra_files: Option<Vec<ExtraFile>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtraFile {
    pub tim: Option<Tim>,
    pub ext: Option<String>,
    pub filename: Option<String>,
}

/// One file reference lifted out of a post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostFile {
    pub post_no: u64,
    pub tim: String,
    pub ext: String,
    pub original: Option<String>,
}

impl PostFile {
    fn new(
        post_no: u64,
        tim: Option<&Tim>,
        ext: Option<&String>,
        original: Option<&String>,
    ) -> Option<Self> {
        let tim = tim?.to_string();
        let ext = ext?.clone();
        if tim.is_empty() || ext.is_empty() {
            return None;
        }
        Some(PostFile {
            post_no,
            tim,
            ext,
            original: original.map(|name| format!("{}{}", name, ext)),
        })
    }

    /// The name the file is stored under on the server.
    pub fn filename(&self) -> String {
        format!("{}{}", self.tim, self.ext)
    }
}

impl Post {
    pub fn files(&self) -> Vec<PostFile> {
        let main = PostFile::new(
            self.no,
            self.tim.as_ref(),
            self.ext.as_ref(),
            self.filename.as_ref(),
        );
        let extras = self.extra_files.iter().flatten().filter_map(|extra| {
            PostFile::new(
                self.no,
                extra.tim.as_ref(),
                extra.ext.as_ref(),
                extra.filename.as_ref(),
            )
        });
        main.into_iter().chain(extras).collect()
    }
}
