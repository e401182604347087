//! # LIGHTROUTE CORE LIBRARY
//!
//! **MINIMAL HTTP REQUEST ROUTER**
//!
//! **ARCHITECTURE**: Patterns compile to matchers at registration, dispatch is pure
//! **GUARANTEE**: First match in registration order wins, captured parameters are immutable
//! **SURFACE**: Register routes, resolve requests, reverse-lookup paths for redirects

pub mod api;
pub mod errors;
pub mod request;
pub mod response;
pub mod routing;
