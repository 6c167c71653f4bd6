use crate::core::{Dataset, Kind, Match, Place};

/// A normalized, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    term: String,
    shortcuts: Shortcuts,
}

/// Category selectors found inside the query text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shortcuts {
    pub countries: bool,
    pub cities: bool,
    pub temples: bool,
    pub beaches: bool,
}

impl Shortcuts {
    fn detect(term: &str) -> Self {
        let has = |a: &str, b: &str| term.contains(a) || term.contains(b);
        Self {
            countries: has("country", "countries"),
            cities: has("city", "cities"),
            temples: has("temple", "temples"),
            beaches: has("beach", "beaches"),
        }
    }

    fn all_cities(&self) -> bool {
        self.countries || self.cities
    }
}

impl Query {
    /// Lowercases and trims `raw`. Returns `None` when nothing is left,
    /// meaning no search should be performed.
    pub fn parse(raw: &str) -> Option<Self> {
        let term = raw.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }
        let shortcuts = Shortcuts::detect(&term);
        Some(Self { term, shortcuts })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn shortcuts(&self) -> Shortcuts {
        self.shortcuts
    }

    fn hits(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.term)
    }

    fn hits_place(&self, place: &Place) -> bool {
        self.hits(&place.name) || self.hits(&place.description)
    }

    /// Cities, then temples, then beaches, each in dataset order.
    pub fn run<'a>(&self, dataset: &'a Dataset) -> Vec<Match<'a>> {
        let mut results = Vec::new();

        for country in &dataset.countries {
            let country_hit = self.shortcuts.all_cities() || self.hits(&country.name);
            for city in &country.cities {
                if country_hit || self.hits_place(city) {
                    results.push(Match {
                        kind: Kind::City,
                        item: city,
                    });
                }
            }
        }

        for temple in &dataset.temples {
            if self.shortcuts.temples || self.hits_place(temple) {
                results.push(Match {
                    kind: Kind::Temple,
                    item: temple,
                });
            }
        }

        for beach in &dataset.beaches {
            if self.shortcuts.beaches || self.hits_place(beach) {
                results.push(Match {
                    kind: Kind::Beach,
                    item: beach,
                });
            }
        }

        results
    }
}

/// Matches `query` against `dataset`. An empty or whitespace-only query
/// yields no matches.
pub fn search<'a>(dataset: &'a Dataset, query: &str) -> Vec<Match<'a>> {
    match Query::parse(query) {
        Some(query) => query.run(dataset),
        None => Vec::new(),
    }
}
