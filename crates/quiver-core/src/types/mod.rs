mod id;
mod user;

pub use id::RecordId;
pub use user::UserId;
