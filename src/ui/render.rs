use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::stagger::StaggerSchedule;
use crate::typing::TypingPhase;
use crate::ui::app::{App, PanelContent, PanelView, PANEL_ROWS};
use crate::ui::layout::{layout_regions, panel_rect};
use crate::ui::theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    draw_header(frame, header, app);
    draw_body(frame, body, app);
    draw_footer(frame, footer, app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme::PANEL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let headline = stagger_line(
        app.headline(),
        app.headline_elapsed(),
        app.reduced_motion(),
        Style::default()
            .fg(theme::HEADLINE)
            .add_modifier(Modifier::BOLD),
    );

    let rotation = app.rotation_machine();
    let role = if app.reduced_motion() {
        rotation.current_text()
    } else {
        rotation.shown_text()
    };
    // Blinking stops under reduced motion; a steady cursor still marks
    // the insertion point.
    let cursor_on = app.reduced_motion() || app.cursor_visible();
    let role_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(theme::ACCENT)),
        Span::styled(role.to_string(), Style::default().fg(theme::SUBTITLE)),
        Span::styled(
            if cursor_on { "▌" } else { " " },
            Style::default().fg(theme::ACCENT),
        ),
    ]);

    frame.render_widget(Paragraph::new(vec![headline, role_line]), inner);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App) {
    for (i, panel) in app.panels().iter().enumerate() {
        let Some(rect) = panel_rect(area, i, PANEL_ROWS, app.scroll()) else {
            continue;
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PANEL_BORDER))
            .title(Span::styled(
                format!(" {} ", panel.title),
                Style::default().fg(theme::PANEL_TITLE),
            ));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height == 0 {
            continue;
        }

        let paragraph = if panel.gate.is_active() {
            panel_paragraph(panel, app)
        } else {
            // Gated content is not rendered at all before the gate opens.
            Paragraph::new(Line::from(Span::styled(
                "· · ·",
                Style::default().fg(theme::PLACEHOLDER),
            )))
        };
        frame.render_widget(paragraph.wrap(Wrap { trim: true }), inner);
    }
}

fn panel_paragraph(panel: &PanelView, app: &App) -> Paragraph<'static> {
    match &panel.content {
        PanelContent::Typewriter => {
            let machine = app.typing_machine();
            let text = if app.reduced_motion() {
                machine.options().text.as_str()
            } else {
                machine.shown_text()
            };
            let mut spans = vec![Span::styled(
                text.to_string(),
                Style::default().fg(theme::BODY_FULL),
            )];
            if !app.reduced_motion() && machine.phase() != TypingPhase::Done {
                spans.push(Span::styled("▌", Style::default().fg(theme::ACCENT)));
            }
            Paragraph::new(Line::from(spans))
        }
        PanelContent::Stagger(schedule) => {
            let line = stagger_line(
                schedule,
                app.panel_elapsed(panel),
                app.reduced_motion(),
                Style::default().fg(theme::BODY_FULL),
            );
            Paragraph::new(line)
        }
    }
}

/// Build one line from a stagger schedule at `elapsed`.
///
/// Items that have not begun keep their cell width as blanks so the line
/// never shifts; in-transition items pass through dim and mid shades as
/// their eased progress climbs.
fn stagger_line(
    schedule: &StaggerSchedule,
    elapsed: Duration,
    reduced: bool,
    full_style: Style,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(schedule.len() * 2);
    for (i, item) in schedule.items().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let progress = if reduced {
            1.0
        } else {
            schedule.progress_at(i, elapsed)
        };
        let span = if progress <= 0.0 {
            Span::raw(" ".repeat(item.chars().count()))
        } else if progress < 0.5 {
            Span::styled(item.clone(), Style::default().fg(theme::BODY_DIM))
        } else if progress < 1.0 {
            Span::styled(item.clone(), Style::default().fg(theme::BODY_MID))
        } else {
            Span::styled(item.clone(), full_style)
        };
        spans.push(span);
    }
    Line::from(spans)
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut rows = (area.y..area.y + area.height).map(|y| Rect {
        x: area.x,
        y,
        width: area.width,
        height: 1,
    });

    if let Some(row) = rows.next() {
        let raw = app.raw_progress();
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme::GAUGE_RAW))
                .ratio(raw as f64)
                .label(format!("raw {:>3.0}%", raw * 100.0)),
            row,
        );
    }
    if let Some(row) = rows.next() {
        let smoothed = app.smoothed_progress().clamp(0.0, 1.0);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme::GAUGE_SMOOTH))
                .ratio(smoothed as f64)
                .label(format!("eased {:>3.0}%", smoothed * 100.0)),
            row,
        );
    }
    if let Some(row) = rows.next() {
        let status = format!(
            "scene {}/{} · {} · motion: {}",
            app.active_scene() + 1,
            app.scene_count(),
            app.active_panel_title(),
            if app.reduced_motion() { "reduced" } else { "full" },
        );
        frame.render_widget(
            Paragraph::new(Span::styled(status, Style::default().fg(theme::STATUS))),
            row,
        );
    }
    if let Some(row) = rows.next() {
        let hint = Span::styled(
            "j/k scroll · space page · g/G ends · q quit",
            Style::default().fg(theme::STATUS),
        );
        frame.render_widget(Paragraph::new(hint), row);
    }
}
