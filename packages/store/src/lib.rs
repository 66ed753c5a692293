pub mod config;
pub mod guard;
pub mod local;
pub mod models;
pub mod query;
pub mod session;
pub mod table;
pub mod validate;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::LmsConfig;
pub use guard::{Destination, GuardDecision};
pub use models::{
    Course, CourseAnalytics, CourseInput, Enrollment, Page, Role, User, UserAnalytics,
};
pub use query::QueryClient;
pub use session::{KeyValueStore, SessionStore, StorageError};
pub use table::{SortOrder, SortState, TableState};
