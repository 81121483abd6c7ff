pub mod patterns;
pub mod validator;

pub use validator::{InputValidator, ValidationError};
