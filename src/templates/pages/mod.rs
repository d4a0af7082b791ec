pub mod city;
pub mod faq;
pub mod guide;
pub mod home;
pub mod list_property;
pub mod map;
pub mod saved;

pub use city::{city_page, city_unavailable_page};
pub use faq::faq_page;
pub use guide::guide_page;
pub use home::home_page;
pub use list_property::{list_property_page, submission_result};
pub use map::map_page;
pub use saved::saved_page;
