//! Generic actor framework for resource management.
//!
//! The cart and order services are both [`ResourceActor`]s: a task owning a
//! store of entities and serving CRUD plus custom actions over a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait resource types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns and mutates entities
//! - [`ResourceClient`] - Cloneable, typed handle for sending requests
//! - [`FrameworkError`] - Transport and entity errors
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use self::core::*;
