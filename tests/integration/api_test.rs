//! HTTP-level integration tests for the SCricPlay API

mod common;

mod auth;
mod users;
