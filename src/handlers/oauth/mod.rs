mod callback_handler;
mod login_handler;
mod logout_handler;

pub use callback_handler::callback_handler;
pub use login_handler::login_handler;
pub use logout_handler::logout_handler;
