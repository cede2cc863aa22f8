//! Session Store Adapter.
//!
//! The signed-in identity lives behind [`SessionStore`], a small key-value
//! interface shaped like browser storage. Nothing else in the workspace
//! reads or writes the session file directly.

pub mod errors;
pub mod file_store;
pub mod store;
pub mod types;

pub use errors::SessionStoreError;
pub use file_store::FileSessionStore;
pub use store::{MemorySessionStore, SessionStore, identity_headers};
pub use types::{
    Identity, ROLE_HEADER, ROLE_KEY, USERNAME_HEADER, USERNAME_KEY,
};
