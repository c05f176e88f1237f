//! API route handlers

pub mod callback;
pub mod health;
pub mod layout;
pub mod page;
