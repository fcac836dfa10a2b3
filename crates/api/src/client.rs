use chanarc_types::{
    attachment::{Attachment, ThreadRef},
    post::Thread,
    utils::is_safe_filename,
};
use tracing::{debug, error, warn};

use super::{endpoint::Endpoint, error::Error, fetch::Fetcher, response::ThreadResponse};

/// Configuration for the client.
/// use_https: Whether to use HTTPS for requests. (default: true)
/// api_host: Host serving the thread JSON API. (default: 8ch.net)
/// media_host: Host serving attached files. (default: media.8ch.net)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub use_https: Option<bool>,
    pub api_host: Option<String>,
    pub media_host: Option<String>,
}

impl Config {
    const DEFAULT_USE_HTTPS: bool = true;

    pub fn new(
        use_https: Option<bool>,
        api_host: Option<String>,
        media_host: Option<String>,
    ) -> Self {
        Config {
            use_https,
            api_host,
            media_host,
        }
    }

    pub fn use_https(&self) -> bool {
        self.use_https.unwrap_or(Self::DEFAULT_USE_HTTPS)
    }

    pub fn scheme(&self) -> &'static str {
        if self.use_https() {
            "https"
        } else {
            "http"
        }
    }

    pub fn api_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or(Endpoint::API_HOST)
    }

    pub fn media_host(&self) -> &str {
        self.media_host.as_deref().unwrap_or(Endpoint::MEDIA_HOST)
    }
}

/// A client for the 8chan thread API.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Option<Config>) -> Self {
        Self {
            cfg: cfg.unwrap_or_default(),
            http: reqwest::Client::new(),
        }
    }

    /// A fetcher sharing this client's connection pool.
    pub fn fetcher(&self) -> Fetcher {
        Fetcher::new(self.http.clone())
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<reqwest::Response, Error> {
        let url = endpoint.url(&self.cfg);
        debug!("Sending request to {}", url);
        Ok(self.http.get(&url).send().await?)
    }

    pub async fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<ThreadResponse, Error> {
        let url = endpoint.url(&self.cfg);
        match resp.status() {
            status if status.is_success() => {
                debug!("request: {} status: {}", url, status);
                ThreadResponse::parse(resp).await
            }
            reqwest::StatusCode::NOT_FOUND => {
                error!("request {} status: 404", url);
                Err(Error::NotFound(url))
            }
            status => {
                error!("request {} status: {}", url, status);
                Err(Error::StatusCode(status.as_u16()))
            }
        }
    }

    pub async fn get_thread(&self, thread: &ThreadRef) -> Result<ThreadResponse, Error> {
        let endpoint = Endpoint::thread(thread);
        let resp = self.get(&endpoint).await?;
        self.handle_response(&endpoint, resp).await
    }

    /// Attachment records for every file in `thread`, in post order.
    /// Files whose stored name could escape the target directory are dropped.
    pub fn attachments(&self, thread: &Thread) -> Vec<Attachment> {
        thread
            .files()
            .into_iter()
            .filter_map(|file| {
                let filename = file.filename();
                if !is_safe_filename(&filename) {
                    warn!(
                        "Skipping file {:?} in post {}: unsafe filename",
                        filename, file.post_no
                    );
                    return None;
                }
                let file_url = Endpoint::Media(filename.clone()).url(&self.cfg);
                Some(Attachment::new(filename, file_url, file.original.as_deref()))
            })
            .collect()
    }

    pub async fn fetch_thread_attachments(
        &self,
        thread: &ThreadRef,
    ) -> Result<Vec<Attachment>, Error> {
        let resp = self.get_thread(thread).await?;
        Ok(self.attachments(&resp.thread()?))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
