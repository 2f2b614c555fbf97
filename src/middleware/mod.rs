//! Middleware module
//!
//! HTTP request logging

pub mod logging;
