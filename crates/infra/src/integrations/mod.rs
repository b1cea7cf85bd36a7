//! External service integrations

pub mod nylas;
