//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `login_form`: The login screen

mod field_renderer;
mod login_form;

pub use login_form::draw_login;
