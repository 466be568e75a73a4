//! # countries-rs
//!
//! An async client for a public country-lookup API and a reverse-geocoding
//! API.
//!
//! At its core is a JSON fetch helper ([`Client::get_json`]) that performs
//! one GET, rejects non-2xx statuses with a labelled [`FetchError::Status`],
//! and decodes the body. On top of it sit typed lookups, dependent fetch
//! chains, and combinators for running several fetches together.
//!
//! # Quick Start
//!
//! ```no_run
//! use countries_rs::{Client, NeighbourPolicy, first_settled};
//!
//! # async fn example() -> Result<(), countries_rs::FetchError> {
//! let client = Client::new();
//!
//! // Two-step dependent chain
//! let portugal = client
//!     .country_with_neighbour("portugal", NeighbourPolicy::Skip)
//!     .await?;
//!
//! // Several lookups at once, in input order
//! let capitals = client.countries(&["portugal", "canada", "tanzania"]).await?;
//!
//! // Whichever answers first
//! let fastest = first_settled([
//!     client.country("italy"),
//!     client.country("egypt"),
//!     client.country("mexico"),
//! ])
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Debugging
//!
//! Set `LOUD_WIRE=1` to dump every request URL and response body to stderr.

pub mod client;
pub mod combinators;
pub mod errors;
pub(crate) mod http;
mod lookup;
pub mod types;

pub use client::{Client, ClientBuilder};
pub use combinators::{all, first_settled, first_success, wait, with_deadline};
pub use errors::FetchError;
pub use http::fetch::DEFAULT_ERROR_LABEL;
pub use types::{
    Coordinates, Country, CountryWithNeighbour, Currency, Language, LocatedCountry, Location,
    NeighbourPolicy, OneOrMany,
};
