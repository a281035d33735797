//! Terminal preview of a sortable list, drawn with ratatui into an
//! off-screen buffer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::config::Labels;
use crate::ui::theme::{
    CONTAINER_BORDER, DISABLED, DROP_INDICATOR, HINT_TEXT, ITEM_FILL, ITEM_TEXT,
    PLACEHOLDER_BORDER, STATUS_ERROR,
};

use super::pool::{Collection, Mode};
use super::state::{HoverTarget, SortableState};

/// Narrowest preview that still fits borders and one item.
const MIN_WIDTH: u16 = 12;

/// Render `state` as plain text, `width` columns wide.
pub fn render_preview(state: &SortableState, labels: &Labels, width: u16) -> String {
    let width = width.max(MIN_WIDTH);
    let inner_width = width.saturating_sub(2);

    let target_spans = target_spans(state);
    let source_spans = source_spans(state, labels);
    let target_height = block_height(&target_spans, inner_width);
    let source_height = block_height(&source_spans, inner_width);
    let notice = state.notice().map(|n| n.to_string());

    let height = preview_height(target_height, source_height, notice.is_some());
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);

    let rows = Layout::vertical([
        Constraint::Length(target_height),
        Constraint::Length(source_height),
        Constraint::Length(1),
        Constraint::Length(u16::from(notice.is_some())),
    ])
    .split(area);

    container(" Target ", state, HoverTarget::TargetContainer, target_spans).render(rows[0], &mut buffer);
    container(" Source ", state, HoverTarget::SourceContainer, source_spans).render(rows[1], &mut buffer);

    let (button_text, button_style) = if state.is_submitted() {
        (labels.submitted.as_str(), Style::default().fg(DISABLED))
    } else {
        (
            labels.submit.as_str(),
            Style::default().fg(ITEM_FILL).add_modifier(Modifier::BOLD),
        )
    };
    Paragraph::new(Line::from(Span::styled(format!("( {} )", button_text), button_style)))
        .alignment(Alignment::Center)
        .render(rows[2], &mut buffer);

    if let Some(notice) = notice {
        Paragraph::new(Span::styled(notice, Style::default().fg(STATUS_ERROR)))
            .render(rows[3], &mut buffer);
    }

    buffer_to_string(&buffer)
}

fn container<'a>(
    title: &'a str,
    state: &SortableState,
    hover: HoverTarget,
    spans: Vec<Span<'a>>,
) -> Paragraph<'a> {
    let highlighted = state.hover.is_some_and(|h| h.target == hover);
    let border = if highlighted { DROP_INDICATOR } else { CONTAINER_BORDER };
    Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}

fn target_spans(state: &SortableState) -> Vec<Span<'static>> {
    let snapshot = state.pool.snapshot();
    let fixed = matches!(snapshot.mode, Mode::Fixed { .. });
    snapshot
        .target
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            let hover = if fixed {
                HoverTarget::Slot(index)
            } else {
                HoverTarget::TargetItem(index)
            };
            let hovered = state.hover.is_some_and(|h| h.target == hover);
            match slot {
                None => Span::styled(
                    format!("[ {} ] ", index + 1),
                    Style::default().fg(if hovered { DROP_INDICATOR } else { PLACEHOLDER_BORDER }),
                ),
                Some(label) => item_span(label, state.is_dragging(Collection::Target, index), hovered),
            }
        })
        .collect()
}

fn source_spans(state: &SortableState, labels: &Labels) -> Vec<Span<'static>> {
    let source = state.pool.snapshot().source;
    if source.is_empty() {
        return vec![Span::styled(
            labels.source_hint.clone(),
            Style::default().fg(HINT_TEXT),
        )];
    }
    source
        .into_iter()
        .enumerate()
        .map(|(index, label)| item_span(label, state.is_dragging(Collection::Source, index), false))
        .collect()
}

fn item_span(label: String, dragging: bool, hovered: bool) -> Span<'static> {
    let mut style = Style::default().fg(ITEM_TEXT).bg(ITEM_FILL);
    if dragging {
        style = style.add_modifier(Modifier::DIM);
    }
    if hovered {
        style = style.bg(DROP_INDICATOR);
    }
    Span::styled(format!("[{}] ", label), style)
}

/// Both containers, the button row, and the notice row if present.
fn preview_height(target: u16, source: u16, notice: bool) -> u16 {
    target
        .saturating_add(source)
        .saturating_add(1)
        .saturating_add(u16::from(notice))
}

/// Bordered block tall enough for `spans` wrapped at `inner_width`.
fn block_height(spans: &[Span<'_>], inner_width: u16) -> u16 {
    let content: usize = spans.iter().map(Span::width).sum();
    let inner = usize::from(inner_width.max(1));
    let lines = content.div_ceil(inner).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
