//! Reusable form widgets and the sign-up sub-form.

pub mod button;
pub mod input;
pub mod signup;
