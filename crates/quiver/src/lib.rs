//! Quiver: a membership and equipment registry for archery federations.
//!
//! The [`Registry`] is the public surface: typed CRUD over every entity
//! the schema declares, with derived slugs, soft activation, and
//! delete protection on membership foreign keys.

pub mod config;
pub mod registry;
pub mod seed;

pub use config::RegistryConfig;
pub use quiver_core::Error;
pub use registry::Registry;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, Registry, RegistryConfig, seed};
    pub use quiver_core::{
        db::{executor::StatusReport, query::ListQuery},
        prelude::*,
    };
    pub use quiver_schema::prelude::*;
}
