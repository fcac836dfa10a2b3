use chanarc_types::attachment::ThreadRef;

use super::client::Config;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    /// Full JSON document of one thread: board, thread id.
    Thread(String, String),
    /// A file in the content-addressed media store, by stored filename.
    Media(String),
}

impl Endpoint {
    pub const API_HOST: &'static str = "8ch.net";
    pub const MEDIA_HOST: &'static str = "media.8ch.net";

    pub fn thread(thread: &ThreadRef) -> Self {
        Self::Thread(thread.board.clone(), thread.thread_id.clone())
    }

    pub fn path(&self) -> String {
        match self {
            Self::Thread(board, thread_id) => format!("{}/res/{}.json", board, thread_id),
            Self::Media(filename) => format!("file_store/{}", filename),
        }
    }

    fn host<'a>(&self, cfg: &'a Config) -> &'a str {
        match self {
            Self::Thread(..) => cfg.api_host(),
            Self::Media(_) => cfg.media_host(),
        }
    }

    pub fn url(&self, cfg: &Config) -> String {
        format!("{}://{}/{}", cfg.scheme(), self.host(cfg), self.path())
    }
}
