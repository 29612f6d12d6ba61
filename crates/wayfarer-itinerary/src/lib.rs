//! Interactive day-wise itinerary planner over a local Ollama backend.
//!
//! The library half holds the parameterized planner persona, the
//! trip-length validation, and the synthetic request formatting; the
//! binary in `main.rs` wires them to a [`Session`](wayfarer_rs::Session)
//! over stdin/stdout.

pub mod prompt;

pub use prompt::{GREETING, itinerary_persona, itinerary_request, parse_trip_length};
