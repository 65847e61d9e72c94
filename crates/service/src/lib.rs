//! Business services for the music-collection backend.
//! - Entity CRUD services validate payloads and own the NOT_FOUND checks.
//! - The `link` and `attributed` modules hold the generic association
//!   components, instantiated per entity pair in `links`.
//! - All errors surface through `errors::ServiceError`.

pub mod errors;
pub mod link;
pub mod attributed;
pub mod links;

pub mod album;
pub mod band;
pub mod musician;
pub mod collector;
pub mod prize;
pub mod track;
pub mod comment;

mod lookup;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;
