use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{App, Focus};
use crate::components::{
	DetailContext, GridContext, InputContext, StatusContext, render_detail, render_empty_alert,
	render_grid, render_header, render_input, render_status,
};

const QUERY_KEYS: &str = "Enter search · Tab results · Ctrl+L clear · Ctrl+T theme · Esc quit";
const RESULT_KEYS: &str = "Arrows move · Enter details · Tab search · Ctrl+L clear";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(2),
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		render_header(frame, layout[0], &self.ui, self.theme_kind, &self.theme);

		self.input_area = Some(layout[1]);
		render_input(
			frame,
			layout[1],
			InputContext {
				input: &self.search_input,
				focused: self.focus == Focus::Query,
				theme: &self.theme,
			},
		);

		render_status(
			frame,
			layout[2],
			StatusContext {
				state: self.search.state(),
				query: self.search.query(),
				labels: &self.ui,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);

		render_grid(
			frame,
			layout[3],
			self.search.results(),
			&mut self.grid,
			GridContext {
				covers_url: &self.covers_url,
				theme: &self.theme,
				focused: self.focus == Focus::Results,
			},
		);

		self.render_footer(frame, layout[4]);
		self.render_overlays(frame, area);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let keys = match self.focus {
			Focus::Query => QUERY_KEYS,
			Focus::Results => RESULT_KEYS,
		};
		let footer = Line::from(Span::styled(keys, self.theme.empty)).alignment(Alignment::Center);
		frame.render_widget(Paragraph::new(footer), area);
	}

	fn render_overlays(&mut self, frame: &mut Frame, area: Rect) {
		self.alert_area = self
			.search
			.is_empty_result()
			.then(|| render_empty_alert(frame, area, &self.ui, &self.theme));

		self.detail_area = render_detail(
			frame,
			area,
			self.search.selection(),
			DetailContext {
				title: &self.ui.detail_title,
				covers_url: &self.covers_url,
				theme: &self.theme,
			},
		);
	}
}
