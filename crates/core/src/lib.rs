//! Core types for the Penetra penetration-mechanics framework.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Material`], [`Target`], [`Penetrator`] — validated, immutable
//!   parameter objects
//! - [`State`] — the per-step record a model evolves
//! - [`History`], [`Sample`], [`VelocitySweep`] — channel series returned by a run
//! - [`PenetrationModel`] — the capability a time-march driver needs from a model
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for the state and channel
//!   types, using the conventional channel names (`t`, `DoP`, `L`, `Rt`, ...).

mod error;
mod history;
mod material;
mod model;
mod observer;
mod penetrator;
mod state;
mod target;

pub use error::ParameterError;
pub use history::{History, Sample, VelocitySweep};
pub use material::Material;
pub use model::PenetrationModel;
pub use observer::Observer;
pub use penetrator::{HEMISPHERICAL_CRH, Penetrator};
pub use state::State;
pub use target::Target;
