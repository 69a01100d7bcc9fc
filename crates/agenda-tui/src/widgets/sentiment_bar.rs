//! Sentiment breakdown as a three-segment proportional bar.

use agenda_core::present::{SentimentSegment, percent_label};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::theme;

/// Split `width` cells between `shares` by largest remainder.
///
/// Every cell is assigned, so the segments fill the bar exactly. Ties in
/// the remainder go to the earlier segment. All-zero input yields an empty
/// bar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn apportion(shares: &[f64], width: u16) -> Vec<u16> {
    let usable = |s: f64| s.is_finite() && s > 0.0;
    let total: f64 = shares.iter().copied().filter(|s| usable(*s)).sum();
    if total <= 0.0 {
        return vec![0; shares.len()];
    }

    let exact: Vec<f64> = shares
        .iter()
        .map(|&s| {
            if usable(s) {
                s / total * f64::from(width)
            } else {
                0.0
            }
        })
        .collect();
    let mut cells: Vec<u16> = exact.iter().map(|e| e.floor() as u16).collect();
    let assigned: u16 = cells.iter().sum();

    let mut order: Vec<usize> = (0..exact.len()).collect();
    order.sort_by(|&a, &b| {
        let frac = |i: usize| exact[i] - exact[i].floor();
        frac(b).total_cmp(&frac(a))
    });
    for &i in order.iter().take(usize::from(width.saturating_sub(assigned))) {
        cells[i] += 1;
    }
    cells
}

/// One bar row followed by a legend row per segment.
pub struct SentimentBar<'a> {
    segments: &'a [SentimentSegment],
}

impl<'a> SentimentBar<'a> {
    pub fn new(segments: &'a [SentimentSegment]) -> Self {
        Self { segments }
    }
}

impl Widget for SentimentBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let shares: Vec<f64> = self.segments.iter().map(|s| s.share).collect();
        let widths = apportion(&shares, area.width);
        let mut x = area.x;
        for (segment, width) in self.segments.iter().zip(widths) {
            let fill = "█".repeat(usize::from(width));
            buf.set_string(
                x,
                area.y,
                fill,
                Style::default().fg(theme::sentiment_color(segment.sentiment)),
            );
            x += width;
        }

        for (row, segment) in (1..area.height).zip(self.segments) {
            let y = area.y + row;
            let style = Style::default().fg(theme::sentiment_color(segment.sentiment));
            buf.set_string(area.x, y, "■ ", style);
            buf.set_string(
                area.x + 2,
                y,
                format!("{:<9}{}", segment.sentiment.label(), percent_label(segment.raw)),
                theme::table_row(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use agenda_core::SentimentBreakdown;
    use agenda_core::present::sentiment_segments;
    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;

    use super::*;

    #[test]
    fn remainder_goes_to_largest_fraction() {
        assert_eq!(apportion(&[0.5, 0.25, 0.25], 10), vec![5, 3, 2]);
        assert_eq!(apportion(&[1.0, 1.0, 1.0], 7), vec![3, 2, 2]);
    }

    #[test]
    fn widths_always_fill_the_bar() {
        for width in [1u16, 3, 17, 40, 101] {
            let cells = apportion(&[0.61, 0.27, 0.12], width);
            assert_eq!(cells.iter().sum::<u16>(), width, "width {width}");
        }
    }

    #[test]
    fn zero_shares_leave_bar_empty() {
        assert_eq!(apportion(&[0.0, 0.0, 0.0], 12), vec![0, 0, 0]);
    }

    #[test]
    fn renders_bar_and_legend() {
        let segments = sentiment_segments(&SentimentBreakdown {
            positive: 0.5,
            neutral: 0.25,
            negative: 0.25,
        });
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        SentimentBar::new(&segments).render(area, &mut buf);

        let row = |y: u16| -> String { (0..20).map(|x| buf[(x, y)].symbol()).collect() };
        assert_eq!(row(0), "█".repeat(20));
        assert_eq!(buf[(0, 0)].fg, theme::sentiment_color(agenda_core::Sentiment::Positive));
        assert_eq!(buf[(10, 0)].fg, theme::sentiment_color(agenda_core::Sentiment::Neutral));
        assert_eq!(buf[(15, 0)].fg, theme::sentiment_color(agenda_core::Sentiment::Negative));
        assert!(row(1).starts_with("■ Positive 50%"));
        assert!(row(3).starts_with("■ Negative 25%"));
    }
}
