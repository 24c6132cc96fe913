use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Header title and card borders.
	pub header: Style,
	/// Selected card.
	pub row_highlight: Style,
	/// Search prompt and tagline accents.
	pub prompt: Style,
	/// Muted text: hints, placeholders, secondary card lines.
	pub empty: Style,
	/// Emphasised text such as titles.
	pub highlight: Style,
	/// Inline error messages and alert headings.
	pub error: Style,
}

impl Theme {
	/// Border colour, falling back to the terminal default.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

impl Default for Theme {
	fn default() -> Self {
		LIGHT
	}
}

pub const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Rgb(37, 99, 235)),
	row_highlight: Style::new()
		.bg(Color::Rgb(219, 234, 254))
		.fg(Color::Rgb(15, 23, 42)),
	prompt: Style::new().fg(Color::Rgb(37, 99, 235)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	error: Style::new()
		.fg(Color::Rgb(220, 38, 38))
		.add_modifier(Modifier::BOLD),
};

pub const DARK: Theme = Theme {
	header: Style::new().fg(Color::Rgb(96, 165, 250)),
	row_highlight: Style::new()
		.bg(Color::Rgb(55, 65, 81))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::Rgb(250, 204, 21)),
	empty: Style::new().fg(Color::Rgb(156, 163, 175)),
	highlight: Style::new()
		.fg(Color::Rgb(243, 244, 246))
		.add_modifier(Modifier::BOLD),
	error: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.add_modifier(Modifier::BOLD),
};

/// The built-in colour schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeKind {
	#[default]
	Light,
	Dark,
}

impl ThemeKind {
	/// Every built-in scheme, in display order.
	pub const ALL: [ThemeKind; 2] = [ThemeKind::Light, ThemeKind::Dark];

	#[must_use]
	pub fn theme(self) -> Theme {
		match self {
			Self::Light => LIGHT,
			Self::Dark => DARK,
		}
	}

	/// The other scheme.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Look a scheme up by name, ignoring case and surrounding whitespace.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"light" | "day" => Some(Self::Light),
			"dark" | "night" => Some(Self::Dark),
			_ => None,
		}
	}
}

impl fmt::Display for ThemeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for ThemeKind {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::from_name(value).ok_or_else(|| format!("unknown theme '{}'", value.trim()))
	}
}
