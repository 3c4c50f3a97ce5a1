pub mod callback_viewmodel;
pub mod lifecycle;

pub use callback_viewmodel::{CallbackDisplay, CallbackViewModel};
pub use lifecycle::MountToken;
