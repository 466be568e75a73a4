use crate::types::Coordinates;

// --- URL Construction ---
pub const DEFAULT_COUNTRIES_BASE_URL: &str = "https://restcountries.com";
pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://geocode.xyz";

const COUNTRIES_API_VERSION: &str = "v2";

/// Base URLs for the two services the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    pub countries: String,
    pub geocode: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES_BASE_URL.to_string(),
            geocode: DEFAULT_GEOCODE_BASE_URL.to_string(),
        }
    }
}

/// Represents the remote endpoints this crate knows how to reach.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    /// Search countries by (partial) name
    CountryByName { name: &'a str },
    /// Look up a single country by its 2- or 3-letter code
    CountryByCode { code: &'a str },
    /// Resolve coordinates to a place
    ReverseGeocode { coordinates: Coordinates },
}

impl Endpoint<'_> {
    /// Constructs the URL path (and query) for this endpoint
    fn to_path(&self) -> String {
        match self {
            Self::CountryByName { name } => {
                format!(
                    "/{COUNTRIES_API_VERSION}/name/{}",
                    urlencoding::encode(name.trim())
                )
            }
            Self::CountryByCode { code } => {
                format!(
                    "/{COUNTRIES_API_VERSION}/alpha/{}",
                    urlencoding::encode(code.trim())
                )
            }
            Self::ReverseGeocode { coordinates } => {
                format!("/{coordinates}?geoit=json")
            }
        }
    }

    const fn is_geocode(&self) -> bool {
        matches!(self, Self::ReverseGeocode { .. })
    }
}

/// Constructs a URL for a specific endpoint against the given base URLs.
#[must_use]
pub fn construct_endpoint_url(base_urls: &BaseUrls, endpoint: Endpoint) -> String {
    let base = if endpoint.is_geocode() {
        &base_urls.geocode
    } else {
        &base_urls.countries
    };
    format!("{}{}", base.trim_end_matches('/'), endpoint.to_path())
}
