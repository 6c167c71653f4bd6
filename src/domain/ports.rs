use crate::domain::model::Dataset;
use crate::render::view::ResultsView;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the recommendation document is fetched from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<Dataset>;
}

/// A rendering target for search results.
///
/// `draw` replaces whatever the surface showed before, so drawing the same
/// view twice leaves the same state as drawing it once.
pub trait ResultsSurface {
    fn draw(&mut self, view: &ResultsView) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}
