// src/tests/router_tests/city_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, card_count, generic_cities, request, test_app};
use http::Method;

#[test]
fn city_page_renders_listings_and_resets_filters() {
    let (app, _fake) = test_app();

    // Narrow the previous session first
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    handle(request(Method::GET, "/listings?type=Flat", ""), &app).unwrap();

    let mut resp = handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Zolo Tech Park"));
    assert!(body.contains("Showing 3 properties across city"));
    assert_eq!(card_count(&body), 3);
    assert!(body.contains("25,000"), "rent estimate missing");
    assert!(body.contains("17% Above Market"));
}

#[test]
fn type_tab_filters_listings_fragment() {
    let (app, _fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();

    let mut resp = handle(request(Method::GET, "/listings?type=PG", ""), &app).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_count(&body), 2);
    assert!(!body.contains("Modern 1BHK"));
    assert!(body.contains("Showing 2 properties across city"));
}

#[test]
fn area_and_search_compose_with_type() {
    let (app, _fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();

    let mut resp = handle(request(Method::GET, "/listings?area=HSR%20Layout", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Properties in HSR Layout"));

    // search within the active area
    let mut resp = handle(request(Method::GET, "/listings?q=wifi", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties found matching your criteria."));

    // clicking the same area again clears it
    handle(request(Method::GET, "/listings?area=HSR%20Layout", ""), &app).unwrap();
    let mut resp = handle(request(Method::GET, "/listings?q=WiFi", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Zolo Tech Park"));
}

#[test]
fn bad_type_filter_is_rejected() {
    let (app, _fake) = test_app();
    let err = handle(request(Method::GET, "/listings?type=Castle", ""), &app).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
}

#[test]
fn unreachable_backend_degrades_to_placeholder() {
    let (app, fake) = test_app();
    fake.fail_reads(true);

    let mut resp = handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("We could not fetch data for Bengaluru"));
}

#[test]
fn unknown_city_degrades_to_placeholder() {
    let (app, _fake) = test_app();
    let mut resp = handle(request(Method::GET, "/city/Atlantis", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("We could not fetch data for Atlantis"));
}

#[test]
fn blank_city_search_is_a_validation_error() {
    let (app, _fake) = test_app();
    let err = handle(request(Method::GET, "/search?city=%20%20", ""), &app).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));

    let resp = handle(request(Method::GET, "/search?city=New+Delhi", ""), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/city/New%20Delhi"
    );
}

#[test]
fn static_views_render() {
    let (app, _fake) = test_app();

    for path in ["/", "/guide", "/guide/Chennai", "/map/Chennai", "/list-property"] {
        let resp = handle(request(Method::GET, path, ""), &app).unwrap();
        assert_eq!(resp.status(), 200, "{path}");
    }

    let mut resp = handle(request(Method::GET, "/guide/Chennai", ""), &app).unwrap();
    assert!(body_string(&mut resp).contains("Marina Beach"));
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _fake) = test_app();
    let err = handle(request(Method::GET, "/nope/nope/nope", ""), &app).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn filter_click_reloads_the_city_the_page_shows() {
    let (app, fake) = test_app();
    let (pune, chennai) = generic_cities();
    fake.add_city(pune);
    fake.add_city(chennai);

    handle(request(Method::GET, "/city/Pune", ""), &app).unwrap();
    handle(request(Method::GET, "/city/Chennai", ""), &app).unwrap();

    let mut resp = handle(request(Method::GET, "/listings?type=All&city=Pune", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Pune Central PG"));
    assert!(!body.contains("Chennai Central PG"));
    assert!(app.session().is_showing("pune"));

    // same city: the session and its filters are reused
    handle(request(Method::GET, "/listings?type=Flat&city=Pune", ""), &app).unwrap();
    let mut resp = handle(request(Method::GET, "/listings?city=Pune", ""), &app).unwrap();
    assert_eq!(card_count(&body_string(&mut resp)), 0);
}

#[test]
fn filter_click_for_unknown_city_is_not_found() {
    let (app, _fake) = test_app();
    let err = handle(request(Method::GET, "/listings?city=Atlantis", ""), &app).unwrap_err();
    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 404);
}

#[test]
fn area_cards_have_html_safe_ids_and_carry_the_city() {
    let (app, _fake) = test_app();
    let mut resp = handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("id=\"area-hsr-layout\""));
    assert!(!body.contains("id=\"area-HSR Layout\""));
    assert!(body.contains("/listings?area=HSR%20Layout&amp;city=Bengaluru"));
    assert!(body.contains("/saved/101/toggle?city=Bengaluru"));
}
