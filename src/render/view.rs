use crate::domain::model::{Kind, Match};

pub const NO_RESULTS_MESSAGE: &str =
    "No recommendations found. Try searching for \"beaches\", \"temples\", or \"countries\".";

/// One result card, detached from the dataset so surfaces can keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: Kind,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub fallback_image: String,
}

/// What a surface should show for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    NoResults { message: String },
    Found { title: String, cards: Vec<Card> },
}

impl ResultsView {
    pub fn from_matches(results: &[Match<'_>], fallback_image: &str) -> Self {
        if results.is_empty() {
            return Self::empty();
        }

        let cards = results
            .iter()
            .map(|m| Card {
                kind: m.kind,
                name: m.item.name.clone(),
                description: m.item.description.clone(),
                image_url: m.item.image_url.clone(),
                fallback_image: fallback_image.to_string(),
            })
            .collect();

        Self::Found {
            title: found_title(results.len()),
            cards,
        }
    }

    pub fn empty() -> Self {
        Self::NoResults {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::NoResults { .. } => 0,
            Self::Found { cards, .. } => cards.len(),
        }
    }
}

pub fn found_title(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {} Recommendation{}", count, plural)
}
