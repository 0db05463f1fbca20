//! Blocking text fetch for documents and stylesheets.
//!
//! Parsers never touch the network; they are handed text. Whatever obtains
//! that text implements [`Fetch`]. [`NetFetcher`] serves `http`, `https` and
//! `file` URLs; tests usually pass a closure instead.
use std::fmt;
use std::io::{self, Read};
use std::time::Duration;
use url::Url;

#[derive(Debug)]
pub enum FetchError {
    InvalidUrl { url: String, reason: url::ParseError },
    UnsupportedScheme { url: String, scheme: String },
    Status { url: String, code: u16 },
    Transport { url: String, message: String },
    Io { url: String, source: io::Error },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::UnsupportedScheme { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Io { url, .. } => url,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl { url, reason } => write!(f, "invalid url {url:?}: {reason}"),
            FetchError::UnsupportedScheme { url, scheme } => {
                write!(f, "unsupported scheme {scheme:?} in {url}")
            }
            FetchError::Status { url, code } => write!(f, "{url} answered with status {code}"),
            FetchError::Transport { url, message } => write!(f, "fetching {url} failed: {message}"),
            FetchError::Io { url, source } => write!(f, "reading {url} failed: {source}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::InvalidUrl { reason, .. } => Some(reason),
            FetchError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Obtains the text behind a URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// Bodies are truncated to this many bytes.
    pub max_body_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Tangerine/0.1".to_string(),
            timeout: Duration::from_secs(10),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

pub struct NetFetcher {
    agent: ureq::Agent,
    config: FetchConfig,
}

impl NetFetcher {
    pub fn new(config: FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn fetch_http(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.agent.request_url("GET", url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => FetchError::Status {
                url: url.to_string(),
                code,
            },
            ureq::Error::Transport(transport) => FetchError::Transport {
                url: url.to_string(),
                message: transport.to_string(),
            },
        })?;
        let mut buf = Vec::new();
        response
            .into_reader()
            .take(self.config.max_body_bytes)
            .read_to_end(&mut buf)
            .map_err(|source| FetchError::Io {
                url: url.to_string(),
                source,
            })?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn fetch_file(&self, url: &Url) -> Result<String, FetchError> {
        let path = url.to_file_path().map_err(|()| FetchError::UnsupportedScheme {
            url: url.to_string(),
            scheme: url.scheme().to_string(),
        })?;
        let io_error = |source| FetchError::Io {
            url: url.to_string(),
            source,
        };
        let mut buf = Vec::new();
        std::fs::File::open(&path)
            .map_err(io_error)?
            .take(self.config.max_body_bytes)
            .read_to_end(&mut buf)
            .map_err(io_error)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for NetFetcher {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl Fetch for NetFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|reason| FetchError::InvalidUrl {
            url: url.to_string(),
            reason,
        })?;
        let start = std::time::Instant::now();
        let result = match parsed.scheme() {
            "http" | "https" => self.fetch_http(&parsed),
            "file" => self.fetch_file(&parsed),
            other => Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
                scheme: other.to_string(),
            }),
        };
        match &result {
            Ok(body) => log::debug!(
                target: "net.fetch",
                "{url}: {} bytes in {} ms",
                body.len(),
                start.elapsed().as_millis()
            ),
            Err(err) => log::debug!(target: "net.fetch", "{err}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tangerine-net-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn reads_file_urls() {
        let path = temp_file("page.html", "<p>local</p>");
        let url = Url::from_file_path(&path).expect("absolute path");
        let body = NetFetcher::default().fetch(url.as_str()).expect("file fetch");
        assert_eq!(body, "<p>local</p>");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn truncates_to_body_limit() {
        let path = temp_file("big.css", "abcdefghij");
        let url = Url::from_file_path(&path).expect("absolute path");
        let fetcher = NetFetcher::new(FetchConfig {
            max_body_bytes: 4,
            ..FetchConfig::default()
        });
        assert_eq!(fetcher.fetch(url.as_str()).expect("file fetch"), "abcd");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("tangerine-net-definitely-missing.css");
        let url = Url::from_file_path(&path).expect("absolute path");
        let err = NetFetcher::default().fetch(url.as_str()).unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }), "{err}");
        assert_eq!(err.url(), url.as_str());
    }

    #[test]
    fn rejects_bad_urls_and_schemes() {
        let fetcher = NetFetcher::default();
        assert!(matches!(fetcher.fetch("not a url"), Err(FetchError::InvalidUrl { .. })));
        let err = fetcher.fetch("ftp://example.com/a.css").unwrap_err();
        assert!(matches!(&err, FetchError::UnsupportedScheme { scheme, .. } if scheme == "ftp"));
        assert_eq!(err.to_string(), "unsupported scheme \"ftp\" in ftp://example.com/a.css");
    }

    #[test]
    fn closures_are_fetchers() {
        let fetcher = |url: &str| -> Result<String, FetchError> {
            if url.ends_with(".css") {
                Ok("p { x: 1 }".to_string())
            } else {
                Err(FetchError::Status { url: url.to_string(), code: 404 })
            }
        };
        assert_eq!(fetcher.fetch("http://a/s.css").expect("css"), "p { x: 1 }");
        let err = fetcher.fetch("http://a/missing").unwrap_err();
        assert_eq!(err.to_string(), "http://a/missing answered with status 404");
    }
}
