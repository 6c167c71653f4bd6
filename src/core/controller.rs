use crate::config::DEFAULT_FALLBACK_IMAGE;
use crate::core::matcher::Query;
use crate::core::store::DataStore;
use crate::core::{DatasetSource, ResultsSurface};
use crate::render::view::ResultsView;
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The input was empty after trimming; nothing was drawn.
    NotSearched,
    /// The dataset could not be loaded; the empty view was drawn.
    Unavailable,
    Rendered { count: usize },
}

/// Routes page events (load, submit, clear) to the store, matcher and
/// surface.
pub struct Controller<S: DatasetSource, R: ResultsSurface> {
    store: Arc<DataStore<S>>,
    surface: R,
    input: String,
    fallback_image: String,
}

impl<S: DatasetSource, R: ResultsSurface> Controller<S, R> {
    pub fn new(store: Arc<DataStore<S>>, surface: R) -> Self {
        Self {
            store,
            surface,
            input: String::new(),
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
        }
    }

    pub fn with_fallback_image(mut self, fallback_image: impl Into<String>) -> Self {
        self.fallback_image = fallback_image.into();
        self
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub async fn on_page_load(&self) -> bool {
        tracing::info!("Page loaded. Fetching travel data...");
        self.store.preload().await
    }

    pub async fn submit(&mut self) -> Result<SearchOutcome> {
        let Some(query) = Query::parse(&self.input) else {
            tracing::info!("Please enter a search term");
            return Ok(SearchOutcome::NotSearched);
        };

        tracing::info!("Searching for: {}", query.term());
        if !self.store.is_loaded() {
            tracing::info!("Data not loaded yet. Loading...");
        }

        let dataset = match self.store.ensure_loaded().await {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::warn!("Travel data unavailable, showing no results: {}", e);
                self.surface.draw(&ResultsView::empty())?;
                return Ok(SearchOutcome::Unavailable);
            }
        };

        let results = query.run(dataset);
        tracing::debug!("Search results: {}", results.len());

        let view = ResultsView::from_matches(&results, &self.fallback_image);
        self.surface.draw(&view)?;
        Ok(SearchOutcome::Rendered {
            count: results.len(),
        })
    }

    /// Types `text` into the input and submits.
    pub async fn search(&mut self, text: &str) -> Result<SearchOutcome> {
        self.set_input(text);
        self.submit().await
    }

    pub fn clear(&mut self) -> Result<()> {
        self.input.clear();
        self.surface.clear()?;
        tracing::info!("Search cleared");
        Ok(())
    }
}
