pub mod fetch;
pub mod http;
pub mod services;

pub use fetch::{FetchController, FetchDisposer, FetchOutcome, FetchSlot, FetchState, FetchStatus, FetchTicket};
pub use http::{HttpPayloadSource, window_url};
