pub mod paged;
pub mod session;

mod time;
pub use time::now_millis;

pub use paged::{PageControls, PageData, PageRequest, Paged};
pub use session::{SessionPhase, SessionState};
