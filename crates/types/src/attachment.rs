use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::utils::decode_html;

/// A (board, thread id) pair naming one thread.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadRef {
    pub board: String,
    pub thread_id: String,
}

impl ThreadRef {
    pub fn new(board: impl Into<String>, thread_id: impl Into<String>) -> Self {
        ThreadRef {
            board: board.into(),
            thread_id: thread_id.into(),
        }
    }
}

impl Display for ThreadRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.board, self.thread_id)
    }
}

/// One media file referenced by a thread, ready to be fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub file_url: String,
    pub original_name: Option<String>,
}

impl Attachment {
    pub fn new(filename: String, file_url: String, original_name: Option<&str>) -> Self {
        Attachment {
            filename,
            file_url,
            original_name: original_name.map(decode_html),
        }
    }
}
