//! Credits-style roll of the final screen.
//!
//! The text enters from the bottom edge and travels upward until its last
//! line has left the top, over the configured crawl duration.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

/// Playback position of the crawl, advanced by the animation tick.
pub struct CrawlAnimation {
    elapsed: Duration,
    duration: Duration,
    intro: Option<Effect>,
    pending: Duration,
}

impl CrawlAnimation {
    /// Starts at the bottom. `animated` adds the coalesce intro.
    #[must_use]
    pub fn new(duration: Duration, animated: bool) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
            intro: animated.then(|| fx::coalesce((800, Interpolation::CircOut))),
            pending: Duration::ZERO,
        }
    }

    /// Advances playback.
    pub fn tick(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.pending = self.pending.saturating_add(delta);
    }

    /// Time played so far.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Checks whether the text has scrolled out of view.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Row of the first content line relative to the top of the area.
    ///
    /// Starts at `area_height` and ends at `-content_height`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn top_row(&self, content_height: u16, area_height: u16) -> i32 {
        let travel = f64::from(area_height) + f64::from(content_height);
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        i32::from(area_height) - (travel * fraction).round() as i32
    }
}

/// Draws crawl lines at the position given by a [`CrawlAnimation`].
pub struct CrawlView<'a> {
    lines: &'a [String],
    animation: &'a mut CrawlAnimation,
    style: Style,
}

impl<'a> CrawlView<'a> {
    /// Creates the view.
    pub fn new(lines: &'a [String], animation: &'a mut CrawlAnimation) -> Self {
        Self {
            lines,
            animation,
            style: Style::default(),
        }
    }

    /// Text style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for CrawlView<'_> {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let content_height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        let top = self.animation.top_row(content_height, area.height);

        let visible: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let row = top + i32::try_from(i).ok()?;
                (0..i32::from(area.height))
                    .contains(&row)
                    .then(|| Line::from(line.as_str()))
            })
            .collect();

        if visible.is_empty() {
            return;
        }

        let first_row = top.max(0) as u16;
        let target = Rect::new(
            area.x,
            area.y + first_row,
            area.width,
            area.height.saturating_sub(first_row),
        );
        Paragraph::new(visible)
            .alignment(Alignment::Center)
            .style(self.style)
            .render(target, buf);

        let pending = std::mem::take(&mut self.animation.pending);
        if let Some(intro) = self.animation.intro.as_mut() {
            if intro.process(pending.into(), buf, target).is_some() {
                self.animation.intro = None;
            }
        }
    }
}
