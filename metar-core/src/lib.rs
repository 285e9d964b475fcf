//! Core library for the `metar` CLI.
//!
//! This crate defines:
//! - The decoded-METAR data model exchanged with the decode service
//! - An HTTP client for the decode service, behind the [`DecodeService`] trait
//! - The result renderer and the display-surface abstraction it writes to
//! - The input controller tying one submission to exactly one displayed result
//! - Configuration handling
//!
//! It is used by `metar-cli`, but can also be embedded by other front ends.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
pub mod surface;

pub use client::{DecodeOutcome, DecodeService, HttpDecodeService};
pub use config::{Config, OutputFormat};
pub use controller::{InputController, Submission};
pub use error::TransportError;
pub use model::{CloudLayer, DecodeRequest, DecodedMetar, ErrorResult};
pub use render::{Document, Field, FieldValue, render};
pub use surface::{DisplaySurface, MemorySurface, Output};
