//! Category set management: form markup and creation endpoint.

mod create_endpoint;

pub use create_endpoint::{category_form, create_category_endpoint};
