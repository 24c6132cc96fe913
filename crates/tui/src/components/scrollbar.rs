//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a viewport measured in rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Total number of rows in the content.
	pub content_length: usize,
	/// Number of rows visible at once.
	pub viewport_len: usize,
	/// Largest valid offset.
	pub max_scroll: usize,
	/// Whether content overflows the viewport.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Compute metrics from content length and viewport height.
	///
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		let max_scroll = content_length.saturating_sub(viewport_len);

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Offset that keeps `row` visible, starting from `offset`.
	#[must_use]
	pub fn offset_showing(&self, offset: usize, row: usize) -> usize {
		if self.viewport_len == 0 {
			return 0;
		}
		let offset = if row < offset {
			row
		} else if row >= offset + self.viewport_len {
			row + 1 - self.viewport_len
		} else {
			offset
		};
		offset.min(self.max_scroll)
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a themed vertical scrollbar on the right edge of `area` and return
/// the area left for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	offset: usize,
	theme: &Theme,
) -> Rect {
	if !metrics.needs_scrollbar || area.width < 2 {
		return area;
	}

	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());
	let mut state = ScrollbarState::new(metrics.max_scroll.saturating_add(1))
		.viewport_content_length(1)
		.position(offset.min(metrics.max_scroll));

	let bar_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		width: 1,
		..area
	};
	frame.render_stateful_widget(scrollbar, bar_area, &mut state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
