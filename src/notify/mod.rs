pub mod error;
pub mod registry;
pub mod types;

pub use error::{NotifyError, NotifyErrorKind};
pub use registry::ActionRegistry;
pub use types::{
    ActionCatalog, ActionEntry, ActionId, DuplicatePolicy, NO_ACTION_ID, NO_ACTION_NAME,
    NULL_ACTION, Severity,
};
