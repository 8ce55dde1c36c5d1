pub mod user;

pub use user::{Credentials, UserRecord};
