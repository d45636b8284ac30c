//! TUI rendering and input handling for Sentinel.
//!
//! This crate reads state from [`sentinel_engine::App`] and renders it; no
//! application logic lives here. Layout, top to bottom:
//!
//! - title banner
//! - access terminal (locked prompt, or operator line + target input)
//! - audit report panel built from the [`DisplayModel`]
//! - status footer with the health-probe indicator

mod input;
pub mod theme;

pub use input::handle_events;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use sentinel_engine::App;
use sentinel_types::{DisplayModel, ServiceHealth};

const TITLE: &str = "SENTINEL AI";
const LOCKED_PROMPT: &str = "CONNECT WALLET TO PROCEED";
const INPUT_PLACEHOLDER: &str = "ENTER TX HASH OR ADDRESS";
const ANALYSIS_HEADING: &str = "AI ANALYSIS";

/// Render one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_access_panel(frame, chunks[1], app);
    draw_report_panel(frame, chunks[2], &app.display());
    draw_footer(frame, chunks[3], app.health());
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(theme::title_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme::border_style()));
    frame.render_widget(title, area);
}

fn draw_access_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" ACCESS TERMINAL ")
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(theme::panel_style());

    let lines = if app.is_unlocked() {
        vec![
            Line::from(vec![
                Span::styled("OPERATOR: ", theme::muted_style()),
                Span::styled(app.operator_label(), theme::title_style()),
            ]),
            Line::default(),
            input_line(app),
            Line::default(),
            action_line(app),
        ]
    } else {
        vec![
            Line::default(),
            Line::styled(LOCKED_PROMPT, theme::muted_style()),
            Line::default(),
            Line::styled(
                "set SENTINEL_WALLET_ADDRESS, or SENTINEL_BYPASS=true for demo access",
                theme::muted_style(),
            ),
        ]
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(panel, area);
}

fn input_line(app: &App) -> Line<'_> {
    if app.target().is_empty() {
        Line::from(vec![
            Span::styled("> ", theme::title_style()),
            Span::styled(INPUT_PLACEHOLDER, theme::muted_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", theme::title_style()),
            Span::raw(app.target()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    }
}

fn action_line(app: &App) -> Line<'static> {
    if app.is_scanning() {
        Line::styled("SCANNING...", theme::muted_style())
    } else {
        Line::styled("[ENTER] INITIATE AUDIT", theme::title_style())
    }
}

fn draw_report_panel(frame: &mut Frame, area: Rect, model: &DisplayModel) {
    let block = Block::default()
        .title(" AUDIT REPORT ")
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(theme::panel_style());

    let paragraph = Paragraph::new(report_lines(model))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Build the report body lines from the display model.
fn report_lines(model: &DisplayModel) -> Vec<Line<'static>> {
    if model.scanning {
        return vec![
            Line::default(),
            Line::styled("SCANNING TARGET...", theme::muted_style()),
        ];
    }

    let Some(badge) = &model.badge else {
        return vec![
            Line::default(),
            Line::styled("READY. NO REPORT.", theme::muted_style()),
        ];
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("STATUS: ", theme::muted_style()),
        Span::styled(badge.clone(), theme::badge_style(model.severity)),
    ])];

    if let Some(integrity) = model.safety_integrity {
        lines.push(Line::from(vec![
            Span::styled("SAFETY INTEGRITY: ", theme::muted_style()),
            Span::styled(
                format!("{integrity}%"),
                theme::badge_style(model.severity),
            ),
        ]));
    }

    if let Some(body) = &model.body {
        lines.push(Line::default());
        for text_line in body.lines() {
            lines.push(Line::raw(text_line.to_string()));
        }
    }

    if let Some(analysis) = &model.analysis {
        lines.push(Line::default());
        lines.push(Line::styled(ANALYSIS_HEADING, theme::title_style()));
        for text_line in analysis.lines() {
            lines.push(Line::raw(text_line.to_string()));
        }
    }

    lines
}

fn draw_footer(frame: &mut Frame, area: Rect, health: ServiceHealth) {
    let style = match health {
        ServiceHealth::Online => Style::default().fg(theme::PALETTE.success),
        ServiceHealth::Offline => Style::default().fg(theme::PALETTE.danger),
    };
    let footer = Line::from(vec![
        Span::styled("SYSTEM STATUS: ", theme::muted_style()),
        Span::styled(health.as_str(), style),
        Span::styled(" | NET: DEVNET", theme::muted_style()),
    ]);
    let paragraph = Paragraph::new(footer).alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_types::Severity;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn idle_model_renders_ready_placeholder() {
        let lines = report_lines(&DisplayModel::default());
        assert!(lines.iter().any(|l| line_text(l).contains("READY")));
    }

    #[test]
    fn scanning_model_renders_progress_indicator() {
        let model = DisplayModel {
            scanning: true,
            ..DisplayModel::default()
        };
        let lines = report_lines(&model);
        assert!(lines.iter().any(|l| line_text(l).contains("SCANNING")));
    }

    #[test]
    fn report_shows_badge_integrity_body_and_analysis() {
        let model = DisplayModel {
            badge: Some("SAFE".to_string()),
            severity: Severity::Nominal,
            safety_integrity: Some(90),
            body: Some("No malicious patterns detected.".to_string()),
            analysis: Some("ABI is standard.".to_string()),
            scanning: false,
        };
        let text: Vec<String> = report_lines(&model).iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("STATUS: SAFE")));
        assert!(text.iter().any(|l| l.contains("SAFETY INTEGRITY: 90%")));
        assert!(text.iter().any(|l| l.contains("No malicious patterns")));
        assert!(text.iter().any(|l| l == ANALYSIS_HEADING));
        assert!(text.iter().any(|l| l.contains("ABI is standard.")));
    }

    #[test]
    fn report_without_score_omits_integrity_line() {
        let model = DisplayModel {
            badge: Some("UNKNOWN".to_string()),
            body: Some("Audit Failed. Check Console.".to_string()),
            ..DisplayModel::default()
        };
        let text: Vec<String> = report_lines(&model).iter().map(line_text).collect();
        assert!(!text.iter().any(|l| l.contains("SAFETY INTEGRITY")));
        assert!(text.iter().any(|l| l.contains("Audit Failed. Check Console.")));
    }
}
