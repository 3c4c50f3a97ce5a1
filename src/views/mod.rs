pub mod callback;
pub mod login;

pub use callback::render_callback;
pub use login::render_login;
