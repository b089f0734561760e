// Job search: one outbound call to the job-search API, reshaped into dashboard matches.
// Any failure collapses to a single fallback match.

pub mod client;
pub mod handlers;
pub mod mapping;
