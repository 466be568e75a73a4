//! Typed lookups against the country and geocoding APIs, and the
//! dependent-fetch chains built from them.

use crate::combinators::all;
use crate::http::common::Endpoint;
use crate::types::{
    Coordinates, Country, CountryWithNeighbour, LocatedCountry, Location, NeighbourPolicy,
    OneOrMany,
};
use crate::{Client, FetchError};
use tracing::debug;

const COUNTRY_NOT_FOUND: &str = "Country not found";
const NEIGHBOUR_NOT_FOUND: &str = "Neighbour country not found";
const GEOCODING_FAILED: &str = "Problem with geocoding";

impl Client {
    /// Looks up a country by name.
    ///
    /// The API matches partial names and answers with a list; the first
    /// match is returned.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidInput`] if `name` is blank
    /// - [`FetchError::Status`] labelled `"Country not found"` on a non-2xx status
    /// - [`FetchError::MissingData`] if the API returned an empty list
    /// - any transport or decode error from the fetch
    pub async fn country(&self, name: &str) -> Result<Country, FetchError> {
        if name.trim().is_empty() {
            return Err(FetchError::InvalidInput(
                "Country name must not be empty".to_string(),
            ));
        }

        let url = self.endpoint_url(Endpoint::CountryByName { name });
        let payload: OneOrMany<Country> = self.get_json(&url, Some(COUNTRY_NOT_FOUND)).await?;
        payload
            .into_first()
            .ok_or_else(|| FetchError::MissingData(format!("No country matched '{name}'")))
    }

    /// Looks up a country by its 2- or 3-letter code.
    ///
    /// # Errors
    ///
    /// Same as [`Client::country`].
    pub async fn country_by_code(&self, code: &str) -> Result<Country, FetchError> {
        self.fetch_country_by_code(code, COUNTRY_NOT_FOUND).await
    }

    async fn fetch_country_by_code(&self, code: &str, label: &str) -> Result<Country, FetchError> {
        if code.trim().is_empty() {
            return Err(FetchError::InvalidInput(
                "Country code must not be empty".to_string(),
            ));
        }

        let url = self.endpoint_url(Endpoint::CountryByCode { code });
        let payload: OneOrMany<Country> = self.get_json(&url, Some(label)).await?;
        payload
            .into_first()
            .ok_or_else(|| FetchError::MissingData(format!("No country has code '{code}'")))
    }

    /// Resolves coordinates to a place.
    ///
    /// # Errors
    ///
    /// [`FetchError::Status`] labelled `"Problem with geocoding"` on a non-2xx
    /// status, or any transport or decode error from the fetch.
    pub async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Location, FetchError> {
        let url = self.endpoint_url(Endpoint::ReverseGeocode { coordinates });
        self.get_json(&url, Some(GEOCODING_FAILED)).await
    }

    /// Looks up a country, then its first neighbour.
    ///
    /// The neighbour request is only issued when the first response lists at
    /// least one border. What happens when it lists none is decided by
    /// `policy`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countries_rs::{Client, NeighbourPolicy};
    ///
    /// # async fn example() -> Result<(), countries_rs::FetchError> {
    /// let client = Client::new();
    /// let result = client
    ///     .country_with_neighbour("portugal", NeighbourPolicy::Skip)
    ///     .await?;
    /// if let Some(neighbour) = result.neighbour {
    ///     println!("{} borders {}", result.country.name, neighbour.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - any error from the primary lookup
    /// - [`FetchError::MissingData`] if the country has no borders and
    ///   `policy` is [`NeighbourPolicy::Require`]
    /// - [`FetchError::Status`] labelled `"Neighbour country not found"` if
    ///   the neighbour lookup returns a non-2xx status
    pub async fn country_with_neighbour(
        &self,
        name: &str,
        policy: NeighbourPolicy,
    ) -> Result<CountryWithNeighbour, FetchError> {
        let country = self.country(name).await?;

        let Some(code) = country.first_neighbour().map(str::to_owned) else {
            return match policy {
                NeighbourPolicy::Skip => {
                    debug!("{} has no neighbour, skipping second lookup", country.name);
                    Ok(CountryWithNeighbour {
                        country,
                        neighbour: None,
                    })
                }
                NeighbourPolicy::Require => Err(FetchError::MissingData(format!(
                    "{} has no neighbour",
                    country.name
                ))),
            };
        };

        debug!("Looking up neighbour {code} of {}", country.name);
        let neighbour = self.fetch_country_by_code(&code, NEIGHBOUR_NOT_FOUND).await?;

        Ok(CountryWithNeighbour {
            country,
            neighbour: Some(neighbour),
        })
    }

    /// Resolves coordinates to a place, then looks up the country it lies in.
    ///
    /// # Errors
    ///
    /// - any error from [`Client::reverse_geocode`]
    /// - [`FetchError::MissingData`] if the geocoding response names no country
    /// - any error from [`Client::country`]
    pub async fn where_am_i(&self, coordinates: Coordinates) -> Result<LocatedCountry, FetchError> {
        let location = self.reverse_geocode(coordinates).await?;

        let country_name = location
            .country
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                FetchError::MissingData(format!("No country found at {coordinates}"))
            })?;

        debug!(
            "{coordinates} is in {}, {country_name}",
            location.city.as_deref().unwrap_or("an unknown city")
        );
        let country = self.country(country_name).await?;

        Ok(LocatedCountry { location, country })
    }

    /// Looks up several countries concurrently.
    ///
    /// Results are in the same order as `names`.
    ///
    /// # Errors
    ///
    /// The first error from any lookup; the others are dropped.
    pub async fn countries<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Country>, FetchError> {
        all(names.iter().map(|name| self.country(name.as_ref()))).await
    }
}
