//! Dashboard screen: headline cards, weekly trend, sentiment, job types.

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;

use agenda_core::present::{
    JOB_TYPES_TITLE, SENTIMENT_TITLE, TREND_TITLE, dashboard_cards, sentiment_segments,
};
use agenda_core::{Dashboard, KpiSnapshot, Kpis, ResourceKind};

use super::tab::Tab;
use super::{panel, screen_block};
use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::placeholder::render_unsettled;
use crate::widgets::sentiment_bar::SentimentBar;

pub struct DashboardScreen {
    focused: bool,
    tab: Tab<Kpis>,
    throbber_state: ThrobberState,
}

impl DashboardScreen {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            focused: false,
            tab: Tab::new(ScreenId::Dashboard, dashboard),
            throbber_state: ThrobberState::default(),
        }
    }

    fn render_cards(frame: &mut Frame, area: Rect, kpis: &KpiSnapshot) {
        let cards = dashboard_cards(kpis);
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for (card, column) in cards.iter().zip(columns.iter()) {
            let block = panel(card.label);
            let inner = block.inner(*column);
            frame.render_widget(block, *column);
            frame.render_widget(
                Paragraph::new(Span::styled(card.value.clone(), theme::metric_value()))
                    .alignment(Alignment::Center),
                inner,
            );
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    fn render_trend(frame: &mut Frame, area: Rect, kpis: &KpiSnapshot) {
        let points: Vec<(f64, f64)> = kpis
            .trend
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.calls as f64))
            .collect();
        let x_max = points.len().saturating_sub(1).max(1) as f64;
        let peak = kpis.trend.iter().map(|p| p.calls).max().unwrap_or(0);
        let y_max = (peak as f64 * 1.2).max(1.0);

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::LEAF_GREEN))
            .data(&points);

        let x_labels: Vec<Span> = kpis
            .trend
            .iter()
            .map(|p| Span::styled(p.day.clone(), theme::key_hint()))
            .collect();
        let y_labels = vec![
            Span::styled("0", theme::key_hint()),
            Span::styled(peak.to_string(), theme::key_hint()),
        ];

        let chart = Chart::new(vec![dataset])
            .block(panel(TREND_TITLE))
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(x_labels)
                    .style(theme::key_hint()),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_max])
                    .labels(y_labels)
                    .style(theme::key_hint()),
            );
        frame.render_widget(chart, area);
    }

    fn render_sentiment(frame: &mut Frame, area: Rect, kpis: &KpiSnapshot) {
        let block = panel(SENTIMENT_TITLE);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let segments = sentiment_segments(&kpis.sentiment);
        frame.render_widget(SentimentBar::new(&segments), inner);
    }

    fn render_job_types(frame: &mut Frame, area: Rect, kpis: &KpiSnapshot) {
        let bars: Vec<Bar> = kpis
            .job_types
            .iter()
            .enumerate()
            .map(|(i, job)| {
                let color = theme::bar_color(i);
                Bar::default()
                    .value(job.count)
                    .label(Line::from(job.job_type.clone()))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(theme::BG_HIGHLIGHT).bg(color))
            })
            .collect();

        let count = u16::try_from(bars.len().max(1)).unwrap_or(u16::MAX);
        let bar_width = (area.width.saturating_sub(2) / count).saturating_sub(1).clamp(1, 12);

        let chart = BarChart::default()
            .block(panel(JOB_TYPES_TITLE))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1);
        frame.render_widget(chart, area);
    }
}

impl Component for DashboardScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.tab.init(action_tx);
        Ok(())
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::Tick = action {
            self.throbber_state.calc_next();
        } else {
            self.tab.update(action);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = screen_block(ScreenId::Dashboard, self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(kpis) = render_unsettled(
            frame,
            inner,
            self.tab.state(),
            ResourceKind::Kpis,
            &self.throbber_state,
        ) else {
            return;
        };

        let [cards, charts] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(8)]).areas(inner);
        let [trend, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(charts);
        let [sentiment, jobs] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(5)]).areas(right);

        Self::render_cards(frame, cards, kpis);
        Self::render_trend(frame, trend, kpis);
        Self::render_sentiment(frame, sentiment, kpis);
        Self::render_job_types(frame, jobs, kpis);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.tab.set_focused(focused);
    }

    fn id(&self) -> &str {
        ScreenId::Dashboard.label()
    }
}
