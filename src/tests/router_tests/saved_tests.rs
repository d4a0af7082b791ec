// src/tests/router_tests/saved_tests.rs

use crate::domain::{ListingId, ListingType};
use crate::router::handle;
use crate::tests::utils::{
    body_string, city_with, generic_cities, listing, request, test_app,
};
use http::Method;

#[test]
fn toggle_saves_then_unsaves_a_listing() {
    let (app, fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();

    let mut resp = handle(request(Method::POST, "/saved/101/toggle", ""), &app).unwrap();
    assert_eq!(resp.headers().get("HX-Trigger").unwrap(), "saved-changed");
    let body = body_string(&mut resp);
    assert!(body.contains("❤️"));
    assert!(body.contains("text-red-500"));
    assert!(app.is_saved(&ListingId::from(101_i64)));
    assert_eq!(fake.saved_ids(), vec!["101"]);

    let mut resp = handle(request(Method::POST, "/saved/101/toggle", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("🤍"));
    assert!(!app.is_saved(&ListingId::from("101")));
    assert!(fake.saved_ids().is_empty());
}

#[test]
fn saved_listing_shows_filled_heart_in_grid() {
    let (app, _fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    handle(request(Method::POST, "/saved/102/toggle", ""), &app).unwrap();

    let mut resp = handle(request(Method::GET, "/listings?type=Flat", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("❤️"));

    let mut resp = handle(request(Method::GET, "/saved", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Modern 1BHK"));
    assert!(body.contains("28,000"));
}

#[test]
fn failed_save_reports_and_keeps_unsaved_icon() {
    let (app, fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    fake.fail_writes(true);

    let mut resp = handle(request(Method::POST, "/saved/101/toggle", ""), &app).unwrap();
    assert!(resp.headers().get("HX-Trigger").is_none());
    let body = body_string(&mut resp);
    assert!(body.contains("🤍"));
    assert!(body.contains("role=\"alert\""));
    assert!(body.contains("Failed to save"));
    assert!(!app.is_saved(&ListingId::from("101")));
}

#[test]
fn failed_unsave_still_drops_local_entry() {
    let (app, fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    handle(request(Method::POST, "/saved/101/toggle", ""), &app).unwrap();
    fake.fail_writes(true);

    let mut resp = handle(request(Method::POST, "/saved/101/toggle", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Failed to unsave"));
    assert!(!app.is_saved(&ListingId::from("101")));
    assert_eq!(fake.saved_ids(), vec!["101"]);
}

#[test]
fn toggling_an_unknown_listing_is_not_found() {
    let (app, _fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();

    let err = handle(request(Method::POST, "/saved/999/toggle", ""), &app).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn saved_entries_load_at_startup_and_count_in_nav() {
    let (app, fake) = test_app();
    handle(request(Method::GET, "/city/Bengaluru", ""), &app).unwrap();
    handle(request(Method::POST, "/saved/103/toggle", ""), &app).unwrap();

    // fresh app over the same backend
    let restarted = crate::state::AppState::new(Box::new(fake.clone()));
    restarted.load_saved();
    assert!(restarted.is_saved(&ListingId::from(103_i64)));

    let mut resp = handle(request(Method::GET, "/saved/count", ""), &restarted).unwrap();
    assert!(body_string(&mut resp).contains(">1<"));

    // removing from the saved page works without a city loaded
    let mut resp = handle(request(Method::POST, "/saved/103/toggle", ""), &restarted).unwrap();
    assert!(body_string(&mut resp).contains("🤍"));
    assert!(fake.saved_ids().is_empty());
}

#[test]
fn empty_saved_page_shows_empty_state() {
    let (app, _fake) = test_app();
    let mut resp = handle(request(Method::GET, "/saved", ""), &app).unwrap();
    assert!(body_string(&mut resp).contains("You haven't saved any properties yet."));
}

#[test]
fn save_uses_the_city_the_page_shows() {
    let (app, fake) = test_app();
    let (pune, chennai) = generic_cities();
    fake.add_city(pune);
    fake.add_city(chennai);

    handle(request(Method::GET, "/city/Pune", ""), &app).unwrap();
    handle(request(Method::GET, "/city/Chennai", ""), &app).unwrap();

    // heart clicked on the Pune page still open in another tab
    let mut resp = handle(request(Method::POST, "/saved/901/toggle?city=Pune", ""), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("❤️"));
    assert!(body.contains("/saved/901/toggle?city=Pune"));

    let entries = fake.saved_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].city, "Pune");
    assert_eq!(entries[0].name, "Pune Central PG");

    // the loaded session is left on Chennai
    let mut resp = handle(request(Method::GET, "/listings", ""), &app).unwrap();
    assert!(body_string(&mut resp).contains("Chennai Central PG"));
}

#[test]
fn listing_without_amount_is_not_saved() {
    let (app, fake) = test_app();
    fake.add_city(city_with(
        "Mysuru",
        vec![listing(5, ListingType::Flat, "Heritage Flat", "Gokulam", "Price on request", "2BHK", &[])],
    ));
    handle(request(Method::GET, "/city/Mysuru", ""), &app).unwrap();

    let mut resp = handle(request(Method::POST, "/saved/5/toggle?city=Mysuru", ""), &app).unwrap();
    assert!(resp.headers().get("HX-Trigger").is_none());
    let body = body_string(&mut resp);
    assert!(body.contains("🤍"));
    assert!(body.contains("has no price to save"));
    assert!(fake.saved_entries().is_empty());
    assert!(!app.is_saved(&ListingId::from("5")));
}
