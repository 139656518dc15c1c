use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use skiphire_core::{
    model::SkipOffering,
    pricing::total_price,
    progress::{BookingStep, StepStatus},
    screen::LoadState,
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, WhichUse};

use crate::{
    app::{App, COLUMNS},
    theme::Palette,
};

/// Rows taken by one skip card including its border.
const CARD_HEIGHT: u16 = 9;

const DISCLAIMER: &str = "Imagery and information shown throughout this website may not reflect the exact shape or size specification, colours may vary, options and/or accessories may be featured at additional cost.";

pub(crate) fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.base).fg(palette.text)),
        area,
    );

    let footer_height = if app.screen.selected_offering().is_some() {
        6
    } else {
        3
    };

    // Outer layout: progress, title, cards, footer
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [progress_area, title_area, content_area, footer_area] = chunks else {
        return;
    };

    draw_progress(frame, app, &palette, *progress_area);
    draw_title(frame, &palette, *title_area);

    match app.screen.load_state().clone() {
        LoadState::Loading => draw_loading(frame, app, &palette, *content_area),
        LoadState::Failed(message) => {
            let paragraph = Paragraph::new(vec![
                Line::styled(
                    format!("Could not load skips: {message}"),
                    Style::default().fg(palette.error),
                ),
                Line::raw(""),
                Line::raw("Press r to try again or Esc to go back."),
            ])
            .alignment(Alignment::Center)
            .block(card_block(&palette, false, false).title("Skips"))
            .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *content_area);
        }
        LoadState::Ready if app.screen.offerings().is_empty() => {
            let paragraph = Paragraph::new(format!(
                "No skips are available for {}. Press Esc to go back and try another postcode.",
                app.query
            ))
            .alignment(Alignment::Center)
            .block(card_block(&palette, false, false).title("Skips"))
            .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *content_area);
        }
        LoadState::Ready => draw_cards(frame, app, &palette, *content_area),
    }

    match app.screen.selected_offering() {
        Some(offering) => draw_selection_footer(frame, offering, &palette, *footer_area),
        None => draw_hint_footer(frame, app, &palette, *footer_area),
    }
}

fn draw_progress(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let mut spans = Vec::new();
    for (idx, step) in BookingStep::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(palette.surface)));
        }

        let (marker, style) = match step.status(BookingStep::SelectSkip) {
            StepStatus::Completed => ("✓".to_owned(), Style::default().fg(palette.success)),
            StepStatus::Current => (
                step.number().to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Upcoming => (step.number().to_string(), Style::default().fg(palette.subtext)),
        };
        spans.push(Span::styled(format!("{marker} {}", step.label()), style));
    }

    let progress = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.surface))
            .title(Line::from(format!(" {} t ", app.theme.toggle_icon())).right_aligned()),
    );
    frame.render_widget(progress, area);
}

fn draw_title(frame: &mut Frame<'_>, palette: &Palette, area: Rect) {
    let title = Paragraph::new(vec![
        Line::styled(
            "Choose Your Skip Size",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Select the skip size that best suits your project needs. All prices include VAT and delivery.",
            Style::default().fg(palette.subtext),
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(title, area);
}

fn draw_loading(frame: &mut Frame<'_>, app: &mut App, palette: &Palette, area: Rect) {
    let label = "Loading available skips...";
    // throbber glyph + space + label
    let width = u16::try_from(label.chars().count() + 2).unwrap_or(area.width);
    let line = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height / 2,
        width: width.min(area.width),
        height: 1.min(area.height),
    };

    let throbber = Throbber::default()
        .label(label)
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin)
        .throbber_style(Style::default().fg(palette.highlight))
        .style(Style::default().fg(palette.text));
    frame.render_stateful_widget(throbber, line, &mut app.spinner);
}

fn draw_cards(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let offerings = app.screen.offerings();
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let cursor_row = app.cursor / COLUMNS;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let rows = offerings.chunks(COLUMNS).enumerate().skip(first_row).take(visible_rows);
    for (screen_row, (row, cards)) in rows.enumerate() {
        let offset = u16::try_from(screen_row).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
        let row_area = Rect {
            x: area.x,
            y: area.y.saturating_add(offset),
            width: area.width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(offset)),
        };
        if row_area.height == 0 {
            break;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); COLUMNS])
            .split(row_area);

        for (column, (offering, card_area)) in cards.iter().zip(columns.iter()).enumerate() {
            let focused = row * COLUMNS + column == app.cursor;
            let selected = app.screen.selection().is_selected(offering.id);
            draw_card(frame, offering, palette, focused, selected, *card_area);
        }
    }
}

fn draw_card(
    frame: &mut Frame<'_>,
    offering: &SkipOffering,
    palette: &Palette,
    focused: bool,
    selected: bool,
    area: Rect,
) {
    let mut title = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        title = title.fg(palette.success);
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(offering.title(), title),
            Span::styled(
                if selected { "  ✓" } else { "" },
                Style::default().fg(palette.success),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("£{}", total_price(offering)),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" inc. VAT", Style::default().fg(palette.subtext)),
        ]),
        Line::raw(format!("{} day hire period", offering.hire_period_days)),
    ];

    lines.push(if offering.allowed_on_road {
        Line::styled("Road permit included", Style::default().fg(palette.success))
    } else {
        Line::styled("⚠ Private property only", Style::default().fg(palette.warning))
    });
    lines.push(if offering.allows_heavy_waste {
        Line::styled("✓ Heavy waste allowed", Style::default().fg(palette.subtext))
    } else {
        Line::raw("")
    });
    lines.push(Line::raw(""));
    lines.push(if selected {
        Line::styled(
            "✓ Selected",
            Style::default()
                .fg(palette.base)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled("Select Skip", Style::default().fg(palette.subtext))
    });

    let border = if focused {
        palette.highlight
    } else if selected {
        palette.accent
    } else {
        palette.surface
    };

    let card = Paragraph::new(lines).block(
        card_block(palette, focused, selected)
            .border_style(Style::default().fg(border))
            .title(format!(" {} Yards ", offering.size)),
    );
    frame.render_widget(card, area);
}

fn card_block<'a>(palette: &Palette, focused: bool, selected: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(if focused || selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(palette.surface))
        .padding(Padding::horizontal(1))
}

fn draw_selection_footer(frame: &mut Frame<'_>, offering: &SkipOffering, palette: &Palette, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::styled(DISCLAIMER, Style::default().fg(palette.subtext)),
        Line::styled(
            format!("{} Selected", offering.title()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(
                format!("£{} inc. VAT", total_price(offering)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" • {} day hire", offering.hire_period_days)),
            Span::styled(
                "    Esc Back · Enter Continue →",
                Style::default().fg(palette.highlight),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.surface)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn draw_hint_footer(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let hint = match app.screen.load_state() {
        LoadState::Loading => "Esc back · t theme · q/Ctrl-C quit",
        LoadState::Failed(_) => "r retry · Esc back · t theme · q/Ctrl-C quit",
        LoadState::Ready => {
            "←/→/↑/↓ move · Space select · Enter continue · Esc back · t theme · q/Ctrl-C quit"
        }
    };

    let status = Paragraph::new(hint)
        .style(Style::default().fg(palette.subtext))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.surface)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}
