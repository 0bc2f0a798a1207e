//! Web dashboard layer for browser-based UI.
//!
//! Uses Askama templates for server-side rendering. The page is rebuilt from
//! the roster snapshot, the current summary state and the request's search
//! and sort parameters on every request.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration
//! - [`view`] - View models consumed by the template

pub mod handlers;
pub mod routes;
pub mod view;
