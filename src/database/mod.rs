pub mod store;

pub use store::{Db, StoreError};
