//! Tests for typed lookups and the dependent-fetch chains.

mod common;

use common::{client_for, country_json, location_json};
use countries_rs::{Coordinates, FetchError, NeighbourPolicy};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_country(server: &MockServer, request_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_country_returns_first_match() {
    let server = MockServer::start().await;
    mount_country(
        &server,
        "/v2/name/portugal",
        json!([country_json("Portugal", "PRT", &["ESP"])]),
    )
    .await;

    let country = client_for(&server).country("portugal").await.unwrap();

    assert_eq!(country.name, "Portugal");
    assert_eq!(country.alpha3_code.as_deref(), Some("PRT"));
    assert_eq!(country.borders, vec!["ESP".to_string()]);
}

#[tokio::test]
async fn test_country_empty_list_is_missing_data() {
    let server = MockServer::start().await;
    mount_country(&server, "/v2/name/nowhere", json!([])).await;

    let err = client_for(&server).country("nowhere").await.unwrap_err();
    assert!(matches!(err, FetchError::MissingData(_)));
}

#[tokio::test]
async fn test_country_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;
    mount_country(&server, "/v2/name/portugal", json!([{"capital": "Lisbon"}])).await;

    let err = client_for(&server).country("portugal").await.unwrap_err();
    match err {
        FetchError::Decode(message) => assert!(message.contains("Lisbon")),
        other => panic!("Expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_country_not_found_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/name/atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).country("atlantis").await.unwrap_err();
    assert_eq!(err.to_string(), "Country not found (404)");
}

#[tokio::test]
async fn test_country_blank_name_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).country("   ").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidInput(_)));
}

#[tokio::test]
async fn test_country_by_code_accepts_object_body() {
    let server = MockServer::start().await;
    mount_country(&server, "/v2/alpha/ESP", country_json("Spain", "ESP", &["PRT", "FRA"])).await;

    let country = client_for(&server).country_by_code("ESP").await.unwrap();
    assert_eq!(country.name, "Spain");
}

#[tokio::test]
async fn test_country_with_neighbour_issues_dependent_fetch() {
    let server = MockServer::start().await;
    mount_country(
        &server,
        "/v2/name/portugal",
        json!([country_json("Portugal", "PRT", &["ESP"])]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v2/alpha/ESP"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(country_json("Spain", "ESP", &["PRT"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .country_with_neighbour("portugal", NeighbourPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(result.country.name, "Portugal");
    assert_eq!(result.neighbour.unwrap().name, "Spain");
}

#[tokio::test]
async fn test_country_without_borders_never_issues_second_fetch() {
    let server = MockServer::start().await;
    mount_country(
        &server,
        "/v2/name/iceland",
        json!([country_json("Iceland", "ISL", &[])]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path_regex("^/v2/alpha/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Nowhere"})))
        .expect(0)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .country_with_neighbour("iceland", NeighbourPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(result.country.name, "Iceland");
    assert!(result.neighbour.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_country_without_borders_field_never_issues_second_fetch() {
    let server = MockServer::start().await;
    mount_country(&server, "/v2/name/fiji", json!([{"name": "Fiji"}])).await;
    Mock::given(method("GET"))
        .and(path_regex("^/v2/alpha/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .country_with_neighbour("fiji", NeighbourPolicy::Require)
        .await
        .unwrap_err();

    match err {
        FetchError::MissingData(message) => assert!(message.contains("Fiji")),
        other => panic!("Expected MissingData, got {other:?}"),
    }
}

#[tokio::test]
async fn test_neighbour_failure_uses_neighbour_label() {
    let server = MockServer::start().await;
    mount_country(
        &server,
        "/v2/name/portugal",
        json!([country_json("Portugal", "PRT", &["ESP"])]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v2/alpha/ESP"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .country_with_neighbour("portugal", NeighbourPolicy::Skip)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Neighbour country not found (500)");
}

#[tokio::test]
async fn test_primary_failure_stops_chain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/name/atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/v2/alpha/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .country_with_neighbour("atlantis", NeighbourPolicy::Skip)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_reverse_geocode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/52.508,13.381"))
        .and(query_param("geoit", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_json("Berlin", "Germany")))
        .mount(&server)
        .await;

    let location = client_for(&server)
        .reverse_geocode(Coordinates::new(52.508, 13.381))
        .await
        .unwrap();

    assert_eq!(location.city.as_deref(), Some("Berlin"));
    assert_eq!(location.country.as_deref(), Some("Germany"));
}

#[tokio::test]
async fn test_reverse_geocode_failure_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .reverse_geocode(Coordinates::new(19.037, 72.873))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Problem with geocoding (403)");
}

#[tokio::test]
async fn test_where_am_i_chains_geocode_into_country() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/-33.933,18.474"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(location_json("Cape Town", "South Africa")),
        )
        .mount(&server)
        .await;
    mount_country(
        &server,
        "/v2/name/South%20Africa",
        json!([country_json("South Africa", "ZAF", &["BWA", "NAM"])]),
    )
    .await;

    let located = client_for(&server)
        .where_am_i(Coordinates::new(-33.933, 18.474))
        .await
        .unwrap();

    assert_eq!(located.location.city.as_deref(), Some("Cape Town"));
    assert_eq!(located.country.name, "South Africa");
}

#[tokio::test]
async fn test_where_am_i_without_country_never_issues_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/0,0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"city": null, "country": ""})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/v2/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .where_am_i(Coordinates::new(0.0, 0.0))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::MissingData(_)));
}

#[tokio::test]
async fn test_countries_preserves_order() {
    let server = MockServer::start().await;
    for (name, code) in [("portugal", "PRT"), ("canada", "CAN"), ("tanzania", "TZA")] {
        let display = name[..1].to_uppercase() + &name[1..];
        mount_country(
            &server,
            &format!("/v2/name/{name}"),
            json!([country_json(&display, code, &[])]),
        )
        .await;
    }

    let countries = client_for(&server)
        .countries(&["portugal", "canada", "tanzania"])
        .await
        .unwrap();

    let names: Vec<_> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Portugal", "Canada", "Tanzania"]);
}

#[tokio::test]
async fn test_countries_fails_if_any_fails() {
    let server = MockServer::start().await;
    mount_country(
        &server,
        "/v2/name/portugal",
        json!([country_json("Portugal", "PRT", &[])]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v2/name/atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .countries(&["portugal", "atlantis"])
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
}
