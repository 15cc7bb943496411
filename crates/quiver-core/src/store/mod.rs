mod data;
mod registry;
mod row;

pub use data::DataStore;
pub use registry::StoreRegistry;
pub use row::{MAX_ROW_BYTES, RawRow};
