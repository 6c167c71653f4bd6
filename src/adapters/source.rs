use crate::config::cli::LocalStorage;
use crate::core::{Dataset, DatasetSource, Storage};
use crate::utils::error::{Result, TravelError};
use crate::utils::validation::is_remote;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the dataset over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Dataset> {
        tracing::debug!("Making request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(TravelError::HttpStatusError {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        Dataset::from_slice(&body)
    }
}

/// Reads the dataset from a file through a [`Storage`] backend.
#[derive(Debug, Clone)]
pub struct FileSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> DatasetSource for FileSource<S> {
    fn describe(&self) -> String {
        self.path.clone()
    }

    async fn fetch(&self) -> Result<Dataset> {
        let bytes = self.storage.read_file(&self.path).await?;
        Dataset::from_slice(&bytes)
    }
}

/// Source picked at runtime from a location string.
#[derive(Debug, Clone)]
pub enum AnySource {
    Remote(HttpSource),
    Local(FileSource<LocalStorage>),
}

impl AnySource {
    /// `http://` and `https://` locations are fetched; anything else is a
    /// path relative to the working directory.
    pub fn from_location(location: &str) -> Self {
        if is_remote(location) {
            AnySource::Remote(HttpSource::new(location.trim()))
        } else {
            AnySource::Local(FileSource::new(LocalStorage::new("."), location))
        }
    }
}

#[async_trait]
impl DatasetSource for AnySource {
    fn describe(&self) -> String {
        match self {
            AnySource::Remote(source) => source.describe(),
            AnySource::Local(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<Dataset> {
        match self {
            AnySource::Remote(source) => source.fetch().await,
            AnySource::Local(source) => source.fetch().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "countries": [{"name": "Brazil", "cities": [
            {"name": "Rio de Janeiro, Brazil", "imageUrl": "rio.jpg", "description": "Carnival"}
        ]}],
        "temples": [],
        "beaches": [{"name": "Copacabana Beach, Brazil", "imageUrl": "copa.jpg", "description": "Sand"}]
    }"#;

    #[tokio::test]
    async fn test_http_source_parses_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/travel_recommendation_api.json");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(DOC);
            })
            .await;

        let source = HttpSource::new(server.url("/travel_recommendation_api.json"));
        let dataset = source.fetch().await.unwrap();

        mock.assert_async().await;
        assert_eq!(dataset.city_count(), 1);
        assert_eq!(dataset.beaches[0].name, "Copacabana Beach, Brazil");
    }

    #[tokio::test]
    async fn test_http_source_rejects_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing.json");
                then.status(404);
            })
            .await;

        let err = HttpSource::new(server.url("/missing.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, TravelError::HttpStatusError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_http_source_rejects_bad_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/broken.json");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = HttpSource::new(server.url("/broken.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, TravelError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_file_source_reads_through_storage() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("data.json"), DOC).unwrap();

        let source = FileSource::new(LocalStorage::new(temp_dir.path()), "data.json");
        let dataset = source.fetch().await.unwrap();
        assert_eq!(dataset.countries[0].name, "Brazil");
    }

    #[test]
    fn test_location_selects_adapter() {
        assert!(matches!(
            AnySource::from_location("https://example.com/a.json"),
            AnySource::Remote(_)
        ));
        assert!(matches!(
            AnySource::from_location("travel_recommendation_api.json"),
            AnySource::Local(_)
        ));
    }
}
