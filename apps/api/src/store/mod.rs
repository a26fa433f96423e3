// Resume persistence. One pretty-printed JSON file per record under the
// storage directory; the in-memory map is rebuilt from those files on open.

pub mod handlers;
pub mod resume_store;

pub use resume_store::{ResumeStore, StoreError};
