//! Visual styling.
//!
//! Two built-in colour schemes mirror the light and dark modes of the web
//! finder. [`ThemeKind`] names them and [`Theme`] carries the styles the
//! widgets read.

mod theme;

pub use theme::{DARK, LIGHT, Theme, ThemeKind};
