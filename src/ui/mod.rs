pub mod app;
pub mod components;
pub mod events;
pub mod fetch;
pub mod fetcher;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
