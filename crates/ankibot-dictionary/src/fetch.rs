use ankibot_config::dictionary::DictionaryConfig;
use ankibot_core::FetchError;
use async_trait::async_trait;
use reqwest::Url;

/// Outcome of fetching a word page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedPage {
    /// The source answered with its generic landing page
    NotFound,
    Found { url: String, body: String },
}

/// Retrieves the raw page for a word
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, word: &str) -> Result<FetchedPage, FetchError>;
}

/// Fetches `{url_prefix}{word}` over HTTP, following redirects
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url_prefix: String,
}

impl HttpFetcher {
    pub fn new(config: &DictionaryConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url_prefix: config.url_prefix.clone(),
        })
    }

    pub fn word_url(&self, word: &str) -> Result<Url, FetchError> {
        let raw = format!("{}{}", self.url_prefix, word);
        Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, word: &str) -> Result<FetchedPage, FetchError> {
        let url = self.word_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        // Unknown words are redirected to the dictionary's landing page
        if is_landing_url(response.url()) {
            return Ok(FetchedPage::NotFound);
        }

        // Any status below 500 is treated as a word page and left to the parser
        let status = response.status();
        if status.is_server_error() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let url = response.url().to_string();
        let body = response.text().await.map_err(transport_error)?;

        Ok(FetchedPage::Found { url, body })
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(Box::new(e))
    }
}

/// A URL whose last path segment is empty, e.g. `.../dictionary/english/`
pub fn is_landing_url(url: &Url) -> bool {
    url.path_segments()
        .and_then(|segments| segments.last())
        .is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use ankibot_core::{Dictionary, DictionaryError};
    use tokio::net::TcpListener;

    use super::*;
    use crate::cambridge::RemoteHtmlDictionary;
    use crate::parser::tests::RUN_PAGE;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_landing_url_detection() {
        assert!(is_landing_url(&url(
            "https://dictionary.cambridge.org/dictionary/english/"
        )));
        assert!(is_landing_url(&url("https://dictionary.cambridge.org/")));
        assert!(!is_landing_url(&url(
            "https://dictionary.cambridge.org/dictionary/english/run"
        )));
        assert!(!is_landing_url(&url(
            "https://dictionary.cambridge.org/dictionary/english/look-up?q=x"
        )));
    }

    #[test]
    fn test_word_url_uses_prefix() {
        let fetcher = HttpFetcher::new(&DictionaryConfig::default()).unwrap();
        let url = fetcher.word_url("run").unwrap();
        assert_eq!(
            url.as_str(),
            "https://dictionary.cambridge.org/dictionary/english/run"
        );
    }

    #[test]
    fn test_word_url_encodes_spaces() {
        let fetcher = HttpFetcher::new(&DictionaryConfig::default()).unwrap();
        let url = fetcher.word_url("look up").unwrap();
        assert!(url.as_str().ends_with("/english/look%20up"));
        assert!(!is_landing_url(&url));
    }

    #[test]
    fn test_invalid_prefix_is_reported() {
        let config = DictionaryConfig {
            url_prefix: "not a url/".to_string(),
            ..DictionaryConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert!(matches!(
            fetcher.word_url("run"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    /// Minimal HTTP/1.1 server for a dictionary rooted at `/dictionary/english/`
    async fn serve() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&request);
                    let path = request.split_whitespace().nth(1).unwrap_or("/");

                    let (status, extra, body) = match path {
                        "/dictionary/english/run" => ("200 OK", "", RUN_PAGE),
                        "/dictionary/english/" => ("200 OK", "", "<html>landing</html>"),
                        "/dictionary/english/qwxz" => {
                            ("302 Found", "Location: /dictionary/english/\r\n", "")
                        }
                        "/dictionary/english/down" => ("503 Service Unavailable", "", ""),
                        "/dictionary/english/slow" => {
                            tokio::time::sleep(Duration::from_secs(5)).await;
                            ("200 OK", "", RUN_PAGE)
                        }
                        _ => ("404 Not Found", "", "<html>no such page</html>"),
                    };

                    let response = format!(
                        "HTTP/1.1 {status}\r\n{extra}Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{addr}/dictionary/english/")
    }

    async fn local_fetcher(timeout_seconds: u64) -> HttpFetcher {
        let config = DictionaryConfig {
            url_prefix: serve().await,
            timeout_seconds,
            ..DictionaryConfig::default()
        };
        HttpFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_word_page() {
        let fetcher = local_fetcher(5).await;
        match fetcher.fetch("run").await {
            Ok(FetchedPage::Found { url, body }) => {
                assert!(url.ends_with("/dictionary/english/run"));
                assert_eq!(body, RUN_PAGE);
            }
            other => panic!("Expected a word page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_redirect_to_landing_is_not_found() {
        let fetcher = local_fetcher(5).await;
        assert_eq!(fetcher.fetch("qwxz").await.unwrap(), FetchedPage::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_status() {
        let fetcher = local_fetcher(5).await;
        assert!(matches!(
            fetcher.fetch("down").await,
            Err(FetchError::Status(503))
        ));
    }

    #[tokio::test]
    async fn test_fetch_client_error_goes_to_parser() {
        let fetcher = local_fetcher(5).await;
        match fetcher.fetch("gone").await {
            Ok(FetchedPage::Found { body, .. }) => {
                assert_eq!(body, "<html>no such page</html>");
            }
            other => panic!("Expected the error page body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let fetcher = local_fetcher(1).await;
        assert!(matches!(
            fetcher.fetch("slow").await,
            Err(FetchError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_dictionary_over_http() {
        let dict = RemoteHtmlDictionary::new("local", local_fetcher(5).await);

        assert!(dict.exists("run").await.unwrap());
        assert_eq!(dict.get_entries("run").await.unwrap().len(), 3);
        assert!(!dict.exists("qwxz").await.unwrap());

        let down = dict.exists("down").await.unwrap_err();
        assert!(down.is_transient());

        // A 404 word page has no definition blocks
        assert!(matches!(
            dict.exists("gone").await,
            Err(DictionaryError::Parse { .. })
        ));
    }
}
