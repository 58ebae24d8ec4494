pub mod core {
    pub mod config;
    pub mod error;
    pub mod state;
    pub mod tracing_init;
}

pub mod models {
    pub mod status;
    pub mod user;
}

pub mod stores {
    pub mod repository;
    pub mod user_store;
}

pub mod catalog {
    pub mod render;
    pub mod section;
}

pub use crate::models::status::{classify, LoginStatus};
pub use crate::models::user::{UserRecord, UserRecordBuilder};
pub use crate::stores::repository::{PlaceholderRepository, Repository};
pub use crate::stores::user_store::UserStore;
