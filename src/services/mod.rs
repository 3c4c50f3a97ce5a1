pub mod error;
pub mod session_probe;

pub use error::{ProbeError, NOT_AUTHENTICATED_MESSAGE};
pub use session_probe::{HttpSessionProbe, SessionProbe};
