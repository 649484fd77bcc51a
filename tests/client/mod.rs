//! Rendering tests for the client views.
//!
//! Each test renders the application through the router with an in-memory history and
//! inspects the resulting HTML.

mod components;
mod routes;
