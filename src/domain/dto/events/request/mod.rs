pub mod create_event;
pub mod event_query;

pub use create_event::CreateEventRequest;
pub use event_query::{DeleteEventsQuery, EventListQuery};
