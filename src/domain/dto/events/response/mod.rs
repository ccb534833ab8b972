pub mod event_response;

pub use event_response::{DeletedEventsResponse, EventResponse};
