use serde::{Deserialize, Serialize};
use std::fmt;

/// A country as returned by the country-lookup API.
///
/// Only the fields this crate reads are modeled; everything else in the
/// payload is ignored. All fields except `name` tolerate being absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub alpha2_code: Option<String>,
    #[serde(default)]
    pub alpha3_code: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub population: u64,
    /// URL of the flag image.
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    /// Alpha-3 codes of bordering countries. Absent for island nations.
    #[serde(default)]
    pub borders: Vec<String>,
}

impl Country {
    /// Returns the alpha-3 code of the first bordering country, if any.
    #[must_use]
    pub fn first_neighbour(&self) -> Option<&str> {
        self.borders
            .iter()
            .map(String::as_str)
            .find(|code| !code.trim().is_empty())
    }

    /// Population in millions.
    #[must_use]
    pub fn population_millions(&self) -> f64 {
        self.population as f64 / 1_000_000.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    pub native_name: Option<String>,
    #[serde(rename = "iso639_1")]
    pub iso639_1: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// The place a pair of coordinates resolves to, as reported by the
/// reverse-geocoding API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: Option<String>,
    pub country: Option<String>,
    /// Province or state. The geocoding service calls this `prov`.
    #[serde(rename = "prov")]
    pub state: Option<String>,
}

/// A payload that is either a single entity or a list of them.
///
/// The country API answers name searches with a list and code lookups with
/// a bare object (older deployments return a one-element list for both).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Returns the single entity, or the first element of the list.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.into_iter().next(),
        }
    }
}

/// A country together with its first neighbour, produced by
/// [`Client::country_with_neighbour`](crate::Client::country_with_neighbour).
#[derive(Debug, Clone, PartialEq)]
pub struct CountryWithNeighbour {
    pub country: Country,
    /// `None` when the country has no borders and the lookup was allowed to
    /// stop early.
    pub neighbour: Option<Country>,
}

/// A reverse-geocoded place and the country it lies in, produced by
/// [`Client::where_am_i`](crate::Client::where_am_i).
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedCountry {
    pub location: Location,
    pub country: Country,
}

/// What a dependent lookup does when the related entity it would chain to is
/// missing from the first response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighbourPolicy {
    /// Stop quietly and report no neighbour.
    #[default]
    Skip,
    /// Fail with [`FetchError::MissingData`](crate::FetchError::MissingData).
    Require,
}
