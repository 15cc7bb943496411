mod delete;
mod lifecycle;
mod load;
mod save;

pub use delete::DeleteExecutor;
pub use lifecycle::{LifecycleExecutor, StatusReport};
pub use load::LoadExecutor;
pub use save::{SaveExecutor, SaveMode};
