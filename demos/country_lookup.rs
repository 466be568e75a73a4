//! Example: Country lookups, dependent chains and combinators
//!
//! Looks up a country and its neighbour, resolves a pair of coordinates,
//! and runs several lookups together.
//!
//! Run with: cargo run --example country_lookup [country] [lat] [lng]
//!
//! Set `LOUD_WIRE=1` to see every request and response.

use countries_rs::{
    Client, Coordinates, Country, FetchError, NeighbourPolicy, all, first_settled, first_success,
    with_deadline,
};
use std::env;
use std::error::Error;
use std::time::Duration;

fn describe(country: &Country) -> String {
    let language = country.languages.first().map_or("?", |l| l.name.as_str());
    let currency = country
        .currencies
        .first()
        .and_then(|c| c.name.as_deref())
        .unwrap_or("?");
    format!(
        "{} ({}) | {:.1}M people | speaks {language} | pays in {currency}",
        country.name,
        country.region.as_deref().unwrap_or("?"),
        country.population_millions(),
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "portugal".to_string());
    let lat: f64 = args.next().map_or(Ok(52.508), |s| s.parse())?;
    let lng: f64 = args.next().map_or(Ok(13.381), |s| s.parse())?;

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    // =========================================================================
    // Dependent chain: a country, then its first neighbour
    // =========================================================================
    println!("=== Country and neighbour ===\n");

    match client
        .country_with_neighbour(&name, NeighbourPolicy::Skip)
        .await
    {
        Ok(result) => {
            println!("{}", describe(&result.country));
            match result.neighbour {
                Some(neighbour) => println!("  neighbour: {}", describe(&neighbour)),
                None => println!("  no land neighbours"),
            }
        }
        Err(e) => println!("Something went wrong: {e}"),
    }

    // =========================================================================
    // Reverse geocoding, raced against a deadline
    // =========================================================================
    println!("\n=== Where am I? ===\n");

    let coordinates = Coordinates::new(lat, lng);
    match with_deadline(Duration::from_secs(5), client.where_am_i(coordinates)).await {
        Ok(located) => println!(
            "You are in {}, {}",
            located.location.city.as_deref().unwrap_or("somewhere"),
            located.country.name
        ),
        Err(FetchError::Timeout(d)) => println!("Geocoding took longer than {d:?}"),
        Err(e) => println!("Something went wrong: {e}"),
    }

    // =========================================================================
    // Combinators
    // =========================================================================
    println!("\n=== Combinators ===\n");

    let capitals = all([
        client.country("portugal"),
        client.country("canada"),
        client.country("tanzania"),
    ])
    .await?;
    let capitals: Vec<_> = capitals
        .iter()
        .map(|c| c.capital.as_deref().unwrap_or("?"))
        .collect();
    println!("all:           {}", capitals.join(", "));

    let fastest = first_settled([
        client.country("italy"),
        client.country("egypt"),
        client.country("mexico"),
    ])
    .await?;
    println!("first settled: {}", fastest.name);

    let any = first_success([
        client.country("atlantis"),
        client.country("egypt"),
        client.country("mexico"),
    ])
    .await?;
    println!("first success: {}", any.name);

    Ok(())
}
