//! Terminal front end for the calculator screen.

mod app;
mod render;
mod terminal;

pub use app::run;
