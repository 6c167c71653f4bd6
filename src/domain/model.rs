use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<Place>,
}

/// The whole recommendation document. Never mutated once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub temples: Vec<Place>,
    #[serde(default)]
    pub beaches: Vec<Place>,
}

impl Dataset {
    pub fn from_slice(bytes: &[u8]) -> crate::utils::error::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    City,
    Temple,
    Beach,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::City => "city",
            Kind::Temple => "temple",
            Kind::Beach => "beach",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search hit, borrowing the place from the loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub kind: Kind,
    pub item: &'a Place,
}
