//! Job search app: drives the core state machine against the engine and a UI surface.
pub mod platform;
