//! Thin wrappers over native browser APIs.
//!
//! Everything that touches `web_sys` directly lives here: the fetch
//! transport, sessionStorage access, and the History-based router. The rest
//! of the crate stays platform-neutral and testable on native targets.

mod http;
pub mod route;
pub mod router;
mod storage;

pub use http::FetchTransport;
pub use storage::SessionStorage;

/// Writes a diagnostic line to the browser console (stderr on native
/// targets, which is where tests run).
pub fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}
