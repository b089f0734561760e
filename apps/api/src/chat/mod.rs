// Chat assistant: mode selection, canned replies and the response resolver.
// Live calls go through llm_client; every failure resolves to canned text.

pub mod handlers;
pub mod mode;
pub mod picker;
pub mod resolver;
pub mod templates;
