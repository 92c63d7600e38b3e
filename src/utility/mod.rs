//! Module for the authenticated http requests against the Rancher API.
//!
//! All requests carry the API token as `Authorization: Bearer <token>`.
//! Only a 200 response is considered successful; the body of any other response is discarded.
//!
mod functions;

pub use functions::*;
