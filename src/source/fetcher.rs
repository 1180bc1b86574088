use crate::model::SourceError;
use crate::source::traits::CsvSource;

use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Fetches the CSV from the well-known serving path over HTTP.
pub struct HttpCsvSource {
    client: Client,
    url: String,
}

impl HttpCsvSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent("licita-board/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        Ok(Self { client, url })
    }
}

#[async_trait::async_trait]
impl CsvSource for HttpCsvSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout
                } else {
                    SourceError::Http(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))
    }
}

/// The user-supplied import path: a CSV file already on disk.
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CsvSource for LocalFileSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_file_source_reads_csv_text() {
        let path = std::env::temp_dir().join("licita-board-source-test.csv");
        tokio::fs::write(&path, "bidding_id,edital\n1,Edital A\n")
            .await
            .unwrap();

        let text = LocalFileSource::new(&path).fetch().await.unwrap();
        assert!(text.starts_with("bidding_id,edital"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_a_load_failure_not_an_empty_dataset() {
        let source = LocalFileSource::new("/definitely/not/here.csv");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
