pub mod entity;
pub mod field;
pub mod index;
pub mod relation;
pub mod slug;
