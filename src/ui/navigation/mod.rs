//! Typed screen navigation.
//!
//! Screens are a closed set of [`Route`]s, each carrying the input it needs.
//! Moving between them is a [`Transition`] value applied to the
//! [`Navigator`], which owns the mounted screens and reports the fetch each
//! newly mounted screen has to start.

mod navigator;
mod route;

pub use navigator::{Navigator, Screen};
pub use route::{Route, ScreenId, Transition};
