//! Reactive state shapes shared between the controller and components.
//!
//! DESIGN
//! ======
//! Plain data structs; the Leptos layer wraps them in `RwSignal`s so the same
//! types can be exercised natively in tests.

pub mod assets;
pub mod form;
pub mod search;
