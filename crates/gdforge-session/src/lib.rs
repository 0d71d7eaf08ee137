//! gdforge-session — the editing lifecycle for one record.
//!
//! An [`EditSession`] owns selection, the draft buffer (a deep copy of the
//! record under edit), a bounded undo history, and the synchronization
//! between the structured row view and the tagged text view. Commit and
//! delete dispatch to an external [`RecordStore`] collaborator; the session
//! owns no persistence itself.

pub mod config;
pub mod history;
pub mod session;
pub mod store;

pub use config::{resolve_identity, CollectionCatalog, CollectionConfig};
pub use history::{History, HISTORY_CAP};
pub use session::{EditSession, SessionError, SessionState, View};
pub use store::{MemoryStore, RecordStore, StoreError};
