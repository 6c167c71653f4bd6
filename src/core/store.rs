use crate::core::{Dataset, DatasetSource};
use crate::utils::error::{Result, TravelError};
use tokio::sync::OnceCell;

/// Holds the recommendation dataset once it has been fetched.
///
/// Starts empty and is populated by the first successful fetch. Callers that
/// ask for the dataset while a fetch is in flight wait on that same fetch.
/// A failed fetch leaves the store empty, so the next caller fetches again.
pub struct DataStore<S: DatasetSource> {
    source: S,
    dataset: OnceCell<Dataset>,
}

impl<S: DatasetSource> DataStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            dataset: OnceCell::new(),
        }
    }

    /// Builds a store that is already populated.
    pub fn with_dataset(source: S, dataset: Dataset) -> Self {
        Self {
            source,
            dataset: OnceCell::new_with(Some(dataset)),
        }
    }

    pub fn get(&self) -> Option<&Dataset> {
        self.dataset.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.initialized()
    }

    pub async fn ensure_loaded(&self) -> Result<&Dataset> {
        self.dataset
            .get_or_try_init(|| async {
                tracing::debug!("Fetching travel data from {}", self.source.describe());
                let dataset = self.source.fetch().await?;
                tracing::info!(
                    "Travel data loaded successfully: {} countries, {} cities, {} temples, {} beaches",
                    dataset.countries.len(),
                    dataset.city_count(),
                    dataset.temples.len(),
                    dataset.beaches.len()
                );
                Ok::<_, TravelError>(dataset)
            })
            .await
    }

    /// Page-load fetch. Failures are logged and the store stays empty.
    pub async fn preload(&self) -> bool {
        match self.ensure_loaded().await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Error fetching travel data: {}", e);
                false
            }
        }
    }
}
