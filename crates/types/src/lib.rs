pub mod ids;
pub mod progress;
pub mod record;

pub use ids::{DEFAULT_PAGE, Identity, ScopeKey};
pub use progress::{ChangeEvent, Progress};
pub use record::StateRecord;
