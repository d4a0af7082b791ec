use crate::api::{ApiError, CityInfo, NewAnswer, NewQuestion, NewReview, PropertySubmission};
use crate::domain::saved::{self, ToggleError};
use crate::domain::view::decode_segment;
use crate::domain::{ListingId, SavedSnapshot, TypeFilter, View};
use crate::errors::ServerError;
use crate::responses::{html_no_swap, html_response, html_with_trigger, redirect, ResultResp};
use crate::state::{AppState, CitySession};
use crate::templates::components::listings::{listings_results, save_button, ListingsVm};
use crate::templates::components::questions::{answers_block, question_feed};
use crate::templates::components::reviews::reviews_list;
use crate::templates::components::saved::saved_grid;
use crate::templates::components::{alert_oob, notice_oob};
use crate::templates::layouts::desktop::saved_count_badge;
use crate::templates::pages;
use astra::Request;
use log::{debug, warn};
use maud::{html, Markup};
use std::collections::{HashMap, HashSet};
use std::io::Read;

/// htmx event fired after the saved mirror changes.
const SAVED_CHANGED: &str = "saved-changed";

type Params = HashMap<String, String>;

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);

    debug!("{method} {path}");

    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect::<Option<_>>()
        .ok_or(ServerError::NotFound)?;
    let segs: Vec<&str> = segments.iter().map(String::as_str).collect();

    match (method.as_str(), segs.as_slice()) {
        ("GET", ["search"]) => search(&query),

        // Listing filters
        ("GET", ["listings"]) => listings(app, &query),

        // Saved properties
        ("POST", ["saved", id, "toggle"]) => toggle_saved(app, id, &query),
        ("GET", ["saved", "grid"]) => {
            let entries = app.mirror().entries().to_vec();
            html_response(saved_grid(&entries))
        }
        ("GET", ["saved", "count"]) => html_response(saved_count_badge(saved_count(app))),

        // Reviews
        ("GET", ["city", city, "reviews"]) => html_response(reviews_fragment(app, city)),
        ("POST", ["reviews"]) => {
            let form = read_form(&mut req)?;
            create_review(app, &form)
        }
        ("POST", ["reviews", id, "like"]) => like_review(app, parse_id(id)?),

        // Q&A
        ("GET", ["questions"]) => html_response(questions_fragment(app)),
        ("POST", ["questions"]) => {
            let form = read_form(&mut req)?;
            create_question(app, &form)
        }
        ("GET", ["questions", id, "answers"]) => {
            let question_id = parse_id(id)?;
            html_response(answers_fragment(app, question_id))
        }
        ("POST", ["questions", id, "answers"]) => {
            let question_id = parse_id(id)?;
            let form = read_form(&mut req)?;
            create_answer(app, question_id, &form)
        }

        ("POST", ["list-property"]) => {
            let form = read_form(&mut req)?;
            submit_property(app, &form)
        }

        ("GET", _) => render_view(app, View::from_path(&path)),

        _ => Err(ServerError::NotFound),
    }
}

fn render_view(app: &AppState, view: View) -> ResultResp {
    let count = saved_count(app);

    match view {
        View::Home => html_response(pages::home_page(count)),
        View::City(name) => load_city(app, &name),
        View::Map(name) => html_response(pages::map_page(&name, count)),
        View::Faq => {
            let questions = app
                .api
                .questions()
                .map_err(|e| warn!("questions unavailable: {e}"))
                .ok();
            html_response(pages::faq_page(questions.as_deref(), count))
        }
        View::Saved => {
            let entries = app.mirror().entries().to_vec();
            html_response(pages::saved_page(&entries))
        }
        View::Guide(city) => html_response(pages::guide_page(&city, count)),
        View::ListProperty => html_response(pages::list_property_page(count)),
        View::NotFound => Err(ServerError::NotFound),
    }
}

fn search(query: &Params) -> ResultResp {
    let city = query.get("city").map(|c| c.trim()).unwrap_or("");
    if city.is_empty() {
        return Err(ServerError::BadRequest("Please enter a city name.".into()));
    }
    redirect(&format!("/city/{}", urlencoding::encode(city)))
}

/// Fetch a city, start a fresh filter session for it and render the page.
fn load_city(app: &AppState, name: &str) -> ResultResp {
    let count = saved_count(app);

    let info = match fetch_into_session(app, name) {
        Ok(info) => info,
        Err(e) => {
            warn!("city-info for {name} failed: {e}");
            return html_response(pages::city_unavailable_page(name, count));
        }
    };

    let saved_ids = saved_ids(app);
    let results = render_results(&app.session(), &saved_ids);

    html_response(pages::city_page(&info, results, count))
}

/// Replace the session with `name`'s listings. The returned info has its
/// listings moved into the session.
fn fetch_into_session(app: &AppState, name: &str) -> Result<CityInfo, ApiError> {
    let mut info = app.api.city_info(name)?;
    let listings = std::mem::take(&mut info.listings);
    app.session().load(&info.city_name, listings, info.areas.clone());
    Ok(info)
}

fn listings(app: &AppState, query: &Params) -> ResultResp {
    let kind = query
        .get("type")
        .map(|t| t.parse::<TypeFilter>())
        .transpose()
        .map_err(ServerError::BadRequest)?;

    // The page may be showing a different city than the one loaded last.
    if let Some(city) = city_param(query) {
        if !app.session().is_showing(city) {
            debug!("listings for {city} requested, reloading session");
            fetch_into_session(app, city)?;
        }
    }

    let saved_ids = saved_ids(app);
    let mut session = app.session();

    if let Some(kind) = kind {
        session.filter.set_type(kind);
    }
    if let Some(area) = query.get("area") {
        session.filter.toggle_area(area);
    }
    if let Some(term) = query.get("q") {
        session.filter.set_search(term);
    }

    html_response(render_results(&session, &saved_ids))
}

fn render_results(session: &CitySession, saved_ids: &HashSet<ListingId>) -> Markup {
    listings_results(&ListingsVm {
        city: session.city.as_deref().unwrap_or(""),
        areas: &session.areas,
        filter: &session.filter,
        visible: session.visible(),
        saved_ids,
    })
}

fn toggle_saved(app: &AppState, raw_id: &str, query: &Params) -> ResultResp {
    let id = ListingId::from(raw_id);
    let city = city_param(query);

    // Removing needs no listing details.
    let snapshot = if app.mirror().is_saved(&id) {
        None
    } else {
        listing_snapshot(app, &id, city)
    };

    let outcome = snapshot
        .transpose()
        .and_then(|snapshot| saved::toggle(&app.saved, app.api.as_ref(), &id, snapshot));
    let city = city.unwrap_or("");

    match outcome {
        Ok(state) => html_with_trigger(save_button(&id, city, state.is_saved()), SAVED_CHANGED),
        Err(ToggleError::MissingSnapshot(_)) => Err(ServerError::NotFound),
        Err(e) => {
            let message = match e {
                ToggleError::RemoveFailed { .. } => "Failed to unsave. Check connection.",
                ToggleError::Unpriced(_) => "This listing has no price to save.",
                _ => "Failed to save. Check connection.",
            };
            let markup = html! {
                (save_button(&id, city, e.state().is_saved()))
                (alert_oob(message))
            };
            match e {
                // The mirror already dropped the entry.
                ToggleError::RemoveFailed { .. } => html_with_trigger(markup, SAVED_CHANGED),
                _ => html_response(markup),
            }
        }
    }
}

/// Listing details for `id` as shown on `city`'s page. The session is used
/// when it holds that city; otherwise the city is fetched without touching it.
fn listing_snapshot(
    app: &AppState,
    id: &ListingId,
    city: Option<&str>,
) -> Option<Result<SavedSnapshot, ToggleError>> {
    {
        let session = app.session();
        match city {
            Some(city) if !session.is_showing(city) => {}
            _ => return session.snapshot_for(id),
        }
    }

    let city = city?;
    match app.api.city_info(city) {
        Ok(info) => info
            .listings
            .iter()
            .find(|l| l.id == *id)
            .map(|l| SavedSnapshot::from_listing(l, &info.city_name)),
        Err(e) if e.is_not_found() => None,
        Err(source) => Some(Err(ToggleError::SaveFailed {
            id: id.clone(),
            source,
        })),
    }
}

fn reviews_fragment(app: &AppState, city: &str) -> Markup {
    let reviews = app
        .api
        .reviews(city)
        .map_err(|e| warn!("reviews for {city} unavailable: {e}"))
        .ok();
    reviews_list(reviews.as_deref())
}

fn create_review(app: &AppState, form: &Params) -> ResultResp {
    let city = required(form, "city")?;
    let comment = required(form, "comment")?;
    let property_type = required(form, "property_type")?;
    let rent_amount = required(form, "rent_amount")?
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| ServerError::BadRequest("Rent must be a whole number.".into()))?;

    let review = NewReview {
        city: city.to_string(),
        rent_amount,
        property_type: property_type.to_string(),
        comment: comment.to_string(),
        likes: 0,
    };

    match app.api.create_review(&review) {
        Ok(_) => html_response(html! {
            (reviews_fragment(app, city))
            (notice_oob("Review submitted! Thank you."))
        }),
        Err(e) => {
            warn!("review submit failed: {e}");
            html_no_swap(alert_oob("Error submitting review."))
        }
    }
}

fn like_review(app: &AppState, review_id: i64) -> ResultResp {
    match app.api.like_review(review_id) {
        Ok(likes) => html_response(html! { (likes) }),
        Err(e) => {
            warn!("like for review {review_id} failed: {e}");
            html_no_swap(alert_oob("Failed to like review. Check connection."))
        }
    }
}

fn questions_fragment(app: &AppState) -> Markup {
    let questions = app
        .api
        .questions()
        .map_err(|e| warn!("questions unavailable: {e}"))
        .ok();
    question_feed(questions.as_deref())
}

fn create_question(app: &AppState, form: &Params) -> ResultResp {
    let text = required(form, "text")?;
    let question = NewQuestion {
        text: text.to_string(),
        user_name: "You".to_string(),
    };

    match app.api.create_question(&question) {
        Ok(_) => html_response(questions_fragment(app)),
        Err(e) => {
            warn!("question post failed: {e}");
            html_no_swap(alert_oob("Failed to post. Check connection."))
        }
    }
}

fn answers_fragment(app: &AppState, question_id: i64) -> Markup {
    let answers = app
        .api
        .answers(question_id)
        .map_err(|e| warn!("answers for {question_id} unavailable: {e}"))
        .ok();
    answers_block(question_id, answers.as_deref())
}

fn create_answer(app: &AppState, question_id: i64, form: &Params) -> ResultResp {
    let text = required(form, "text")?;
    let answer = NewAnswer {
        text: text.to_string(),
        user_name: "You".to_string(),
    };

    match app.api.create_answer(question_id, &answer) {
        Ok(_) => html_response(answers_fragment(app, question_id)),
        Err(e) if e.is_not_found() => Err(ServerError::NotFound),
        Err(e) => {
            warn!("answer post failed: {e}");
            html_no_swap(alert_oob("Failed to post reply. Check connection."))
        }
    }
}

fn submit_property(app: &AppState, form: &Params) -> ResultResp {
    let submission = PropertySubmission {
        owner_name: required(form, "owner_name")?.to_string(),
        contact: required(form, "contact")?.to_string(),
        kind: form
            .get("type")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .unwrap_or("Flat")
            .to_string(),
        city: required(form, "city")?.to_string(),
        area: required(form, "area")?.to_string(),
        description: form
            .get("description")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
    };

    match app.api.submit_listing(&submission) {
        Ok(receipt) => html_response(pages::submission_result(&receipt)),
        Err(e) => {
            warn!("property submission failed: {e}");
            html_no_swap(alert_oob("Could not submit your listing. Check connection."))
        }
    }
}

fn saved_count(app: &AppState) -> usize {
    app.mirror().len()
}

fn saved_ids(app: &AppState) -> HashSet<ListingId> {
    app.mirror()
        .entries()
        .iter()
        .map(|e| e.listing_id.clone())
        .collect()
}

/// The `city` a fragment request was made from, if it says.
fn city_param(query: &Params) -> Option<&str> {
    query
        .get("city")
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
}

/// Trimmed, non-empty form field.
fn required<'a>(form: &'a Params, key: &str) -> Result<&'a str, ServerError> {
    form.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("{key} is required")))
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
