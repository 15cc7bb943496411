//! Core runtime for Quiver: entity traits, the base record, the slug
//! deriver, in-memory stores, executors, and the ergonomics exported via
//! the `prelude`.

// public exports are one module level down
pub mod db;
pub mod error;
pub mod model;
pub mod obs;
pub mod record;
pub mod sanitize;
pub mod serialize;
pub mod slug;
pub mod store;
pub mod traits;
pub mod types;
pub mod validate;
pub mod value;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No executors, stores, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        model::{
            entity::EntityModel,
            field::{FieldKind, FieldModel},
            index::IndexModel,
            relation::RelationModel,
            slug::SlugSource,
        },
        record::BaseRecord,
        sanitize::Sanitize,
        traits::{EntityKind, Path},
        types::{RecordId, UserId},
        validate::{Issues, Validate},
        value::Value,
    };
}
