// src/tests/router_tests/community_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, request, test_app};
use http::Method;

#[test]
fn review_can_be_posted_and_liked() {
    let (app, _fake) = test_app();

    let mut resp = handle(
        request(
            Method::POST,
            "/reviews",
            "city=Bengaluru&rent_amount=18000&property_type=PG&comment=Great+food",
        ),
        &app,
    )
    .unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Great food"));
    assert!(body.contains("18,000"));
    assert!(body.contains("Review submitted"));

    let mut resp = handle(request(Method::POST, "/reviews/1/like", ""), &app).unwrap();
    assert_eq!(body_string(&mut resp), "1");
}

#[test]
fn reviews_fragment_handles_empty_and_failure() {
    let (app, fake) = test_app();

    let mut resp = handle(request(Method::GET, "/city/Bengaluru/reviews", ""), &app).unwrap();
    assert!(body_string(&mut resp).contains("No reviews yet"));

    fake.fail_reads(true);
    let mut resp = handle(request(Method::GET, "/city/Bengaluru/reviews", ""), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Failed to load reviews."));
}

#[test]
fn review_with_bad_rent_is_rejected() {
    let (app, _fake) = test_app();
    let err = handle(
        request(
            Method::POST,
            "/reviews",
            "city=Bengaluru&rent_amount=lots&property_type=PG&comment=hi",
        ),
        &app,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn blank_question_is_a_validation_error() {
    let (app, _fake) = test_app();
    let err = handle(request(Method::POST, "/questions", "text=+++"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn question_and_answer_flow() {
    let (app, _fake) = test_app();

    let mut resp = handle(
        request(Method::POST, "/questions", "text=Is+Koramangala+safe%3F"),
        &app,
    )
    .unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Is Koramangala safe?"));

    let mut resp = handle(
        request(Method::POST, "/questions/1/answers", "text=Very+safe"),
        &app,
    )
    .unwrap();
    assert!(body_string(&mut resp).contains("Very safe"));

    let mut resp = handle(request(Method::GET, "/faq", ""), &app).unwrap();
    assert!(body_string(&mut resp).contains("Is Koramangala safe?"));
}

#[test]
fn failed_question_post_shows_alert_without_swap() {
    let (app, fake) = test_app();
    fake.fail_writes(true);

    let mut resp = handle(request(Method::POST, "/questions", "text=Hello"), &app).unwrap();
    assert_eq!(resp.headers().get("HX-Reswap").unwrap(), "none");
    assert!(body_string(&mut resp).contains("Failed to post"));
}

#[test]
fn answer_to_missing_question_is_not_found() {
    let (app, _fake) = test_app();
    let err = handle(request(Method::POST, "/questions/42/answers", "text=hi"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn property_submission_returns_receipt() {
    let (app, fake) = test_app();

    let mut resp = handle(
        request(
            Method::POST,
            "/list-property",
            "owner_name=Asha&contact=99999&type=PG&city=Chennai&area=Adyar&description=",
        ),
        &app,
    )
    .unwrap();
    assert!(body_string(&mut resp).contains("Listing submitted for approval"));

    let submissions = fake.state.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].description, None);
}
