//! Form domain layer
//!
//! Field values, validation rules and focus handling for the login screen.

mod field;
mod login_form;
mod validator;

pub use field::{FieldName, FormField};
pub use login_form::{Form, LoginForm, LoginRow};
