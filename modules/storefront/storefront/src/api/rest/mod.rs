//! REST surface: DTOs, extractors, guards, handlers and the router.

pub mod dto;
pub mod error;
mod extract;
pub mod guards;
mod handlers;
pub mod routes;
