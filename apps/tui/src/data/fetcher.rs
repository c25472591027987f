use async_trait::async_trait;
use tokio::fs;

use crate::data::error::LoadError;

/// A place the summary payload can be read from
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human readable location, used in logs and the header
    fn describe(&self) -> &str;
}

/// Picks a fetcher from the shape of the source string
pub fn fetcher_for(source: &str) -> Result<Box<dyn Fetch>, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Box::new(UrlFetcher::new(source)))
    } else if let Some(path) = source.strip_prefix("file://") {
        Ok(Box::new(FileFetcher::new(path)))
    } else {
        Err(LoadError::UnsupportedSource(source.to_string()))
    }
}

pub struct UrlFetcher {
    url: String,
    client: reqwest::Client,
}

impl UrlFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetch for UrlFetcher {
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> &str {
        &self.url
    }
}

pub struct FileFetcher {
    path: String,
}

impl FileFetcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Fetch for FileFetcher {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers a single request on 127.0.0.1 and returns the URL to hit
    pub(crate) async fn serve_once(status: &'static str, body: &'static str) -> std::io::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        Ok(format!("http://{addr}/summary"))
    }

    #[tokio::test]
    async fn test_url_fetcher_maps_server_error_to_status() -> Result<(), Box<dyn std::error::Error>> {
        let url = serve_once("500 Internal Server Error", r#"{"message": "down"}"#).await?;
        let fetcher = fetcher_for(&url)?;

        let result = fetcher.fetch().await;
        assert!(matches!(result, Err(LoadError::Status(500))), "got {result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn test_url_fetcher_returns_body_on_success() -> Result<(), Box<dyn std::error::Error>> {
        let url = serve_once("200 OK", r#"{"Countries": []}"#).await?;
        let fetcher = fetcher_for(&url)?;

        assert_eq!(fetcher.fetch().await?, r#"{"Countries": []}"#);
        Ok(())
    }

    #[test]
    fn test_fetcher_for_rejects_unknown_scheme() {
        let result = fetcher_for("ftp://example.com/summary");
        assert!(matches!(result, Err(LoadError::UnsupportedSource(_))));

        let result = fetcher_for("ht");
        assert!(matches!(result, Err(LoadError::UnsupportedSource(_))));
    }

    #[test]
    fn test_fetcher_for_http() -> Result<(), LoadError> {
        let fetcher = fetcher_for("https://api.covid19api.com/summary")?;
        assert_eq!(fetcher.describe(), "https://api.covid19api.com/summary");
        Ok(())
    }

    #[tokio::test]
    async fn test_file_fetcher_reads_payload() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"Countries": []}}"#)?;

        let source = format!("file://{}", file.path().display());
        let fetcher = fetcher_for(&source)?;
        let body = fetcher.fetch().await?;
        assert_eq!(body, r#"{"Countries": []}"#);

        Ok(())
    }

    #[tokio::test]
    async fn test_file_fetcher_missing_file_is_io_error() {
        let fetcher = FileFetcher::new("/definitely/not/here/summary.json");
        assert!(matches!(fetcher.fetch().await, Err(LoadError::Io(_))));
    }
}
