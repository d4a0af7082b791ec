use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup)
}

fn html_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Fragment that also fires a client-side htmx event (via `HX-Trigger`).
pub fn html_with_trigger(markup: Markup, event: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("HX-Trigger", event)
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Out-of-band content only; the element that made the request is left alone.
pub fn html_no_swap(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("HX-Reswap", "none")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
