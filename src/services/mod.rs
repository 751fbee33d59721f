//! Resource services.
//!
//! One module per resource, each function a direct mapping to a REST
//! endpoint. Failure diagnostics are handled once at the client boundary
//! (labelled with the Spanish operation identity each function passes in),
//! so every function simply awaits and re-raises.

pub mod auth;
pub mod categories;
pub mod orders;
pub mod products;

#[cfg(test)]
mod tests;
