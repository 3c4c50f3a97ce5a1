pub mod session;

pub use session::{ErrorDetail, Session};
