//! UI layer.
//!
//! `core` holds the engine (surfaces and size negotiation), `widgets` the
//! widget set built on it, and `backend` the seam to whatever owns the screen.

pub mod core;

pub mod backend;

pub mod widgets;
