//! Common test utilities shared across all integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

use countries_rs::Client;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Creates a client whose both base URLs point at `server`.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .countries_base_url(server.uri())
        .geocode_base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Returns a base URL on which nothing is listening.
///
/// Binds an ephemeral port and releases it immediately, so connecting to it
/// is refused.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// A country payload shaped like the v2 country API.
#[allow(dead_code)]
pub fn country_json(name: &str, alpha3: &str, borders: &[&str]) -> Value {
    json!({
        "name": name,
        "alpha3Code": alpha3,
        "capital": format!("Capital of {name}"),
        "region": "Europe",
        "population": 10_000_000,
        "flag": format!("https://flagcdn.com/{}.svg", alpha3.to_lowercase()),
        "borders": borders,
        "languages": [{"name": "Testish", "nativeName": "Testish", "iso639_1": "tt"}],
        "currencies": [{"code": "EUR", "name": "Euro", "symbol": "€"}]
    })
}

/// A reverse-geocoding payload.
#[allow(dead_code)]
pub fn location_json(city: &str, country: &str) -> Value {
    json!({
        "staddress": "",
        "city": city,
        "prov": "XX",
        "country": country,
        "latt": "0.0",
        "longt": "0.0"
    })
}
