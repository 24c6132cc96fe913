//! UI building blocks shared across rendering and state modules.

/// A single result card.
pub mod card;
/// Detail overlay for the selected book.
pub mod detail;
/// Grid layout and navigation for result cards.
pub mod grid;
/// Overlay helpers and the "no matches" alert.
pub mod modal;
/// Header, query prompt, and status line.
pub mod prompt;
/// Scrollbar for viewports.
pub mod scrollbar;

pub use card::{NO_COVER, UNKNOWN_AUTHOR, card_lines};
pub use detail::{DetailContext, NO_COVER_AVAILABLE, UNKNOWN, detail_lines, render_detail};
pub use grid::{GridContext, GridState, render_grid};
pub use modal::{AlertArea, centered_rect, render_empty_alert};
pub use prompt::{InputContext, StatusContext, render_header, render_input, render_status};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
