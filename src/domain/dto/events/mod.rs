pub mod request;
pub mod response;

pub use request::{AvailableEventsQuery, CreateEventRequest, UpdateEventRequest};
pub use response::{
    EventAvailabilityResponse, EventResponse, EventSummaryResponse, RegisteredEventResponse,
    UpdatedEventResponse,
};
