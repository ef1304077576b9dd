pub mod error;
pub mod filter;
pub mod storage;
pub mod types;

pub use error::{Result, StoreError};
pub use storage::{from_document, load_store, save_store, to_document};
pub use types::{CandidateStore, ClientStore, Record, Store};
