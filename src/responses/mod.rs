pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use html::{html_no_swap, html_response, html_with_trigger};
pub use redirect::redirect;
