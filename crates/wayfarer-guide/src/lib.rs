//! Interactive tourist-guide chat over a local Ollama backend.
//!
//! The library half holds the persona and the seeded greeting so they can
//! be reused and tested; the binary in `main.rs` wires them to a
//! [`Session`](wayfarer_rs::Session) over stdin/stdout.

pub mod prompt;

pub use prompt::{GREETING, tour_guide_persona};
