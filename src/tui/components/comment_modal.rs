//! Read-only comment modal
//!
//! Shows a block of text verbatim inside a panel that blocks the rest of the
//! screen. The panel has two dismiss controls, an icon in the header and a
//! `Close` button in the footer. Activating either one calls the `on_close`
//! callback supplied by the owner; unmounting the modal afterwards is the
//! owner's job.
//!
//! Keyboard: `Esc` activates the header icon, `Enter` the `Close` button,
//! arrows / page keys / `Home` / `End` scroll the body.
//! Mouse: left click on a control activates it, the wheel scrolls.

use super::{
    icons::{GlyphIcons, Icon, IconDirective, IconRenderer},
    Component, ComponentState, Scrollable,
};
use crate::tui::{
    styles::Theme,
    utils::layout,
    Frame,
};
use crate::utils::text::string;
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tracing::{debug, trace};

/// Callback fired when the user dismisses the modal
pub type CloseCallback = Box<dyn FnMut() + Send + Sync>;

pub const DEFAULT_TITLE: &str = "Comment";
pub const DEFAULT_WIDTH_PERCENT: u16 = 80;
pub const DEFAULT_HEIGHT_PERCENT: u16 = 60;

const MIN_PANEL_WIDTH: u16 = 24;
const MIN_PANEL_HEIGHT: u16 = 7;
const ICON_WIDTH: u16 = 3;
const CLOSE_LABEL: &str = "[ Close ]";
const WHEEL_STEP: usize = 3;

/// The two controls that dismiss the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissControl {
    /// Icon button in the header
    Icon,
    /// Textual `Close` button in the footer
    Button,
}

/// Screen regions of a rendered modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub panel: Rect,
    pub header: Rect,
    pub title: Rect,
    pub close_icon: Rect,
    pub upper_rule: Rect,
    pub body: Rect,
    pub lower_rule: Rect,
    pub footer: Rect,
    pub status: Rect,
    pub close_button: Rect,
}

impl ModalLayout {
    /// Compute the regions for a modal drawn over `area`
    pub fn compute(area: Rect, width_percent: u16, height_percent: u16) -> Self {
        let panel = layout::centered_rect(
            layout::scaled(area.width, width_percent, MIN_PANEL_WIDTH),
            layout::scaled(area.height, height_percent, MIN_PANEL_HEIGHT),
            area,
        );
        let inner = Block::default().borders(Borders::ALL).inner(panel);

        let row = |y: u16, present: bool| Rect {
            y,
            height: u16::from(present),
            ..inner
        };

        let header = row(inner.y, inner.height >= 1);
        let upper_rule = row(inner.y + 1, inner.height >= 3);
        let lower_rule = row(inner.bottom().saturating_sub(2), inner.height >= 4);
        let footer = row(inner.bottom().saturating_sub(1), inner.height >= 2);

        let body_top = (inner.y + 2).min(inner.bottom());
        let body_bottom = if inner.height >= 4 {
            inner.bottom() - 2
        } else {
            body_top
        };
        let body = Rect {
            x: inner.x + inner.width.min(1),
            y: body_top,
            width: inner.width.saturating_sub(2),
            height: body_bottom.saturating_sub(body_top),
        };

        let icon_width = ICON_WIDTH.min(header.width);
        let close_icon = Rect {
            x: header.right() - icon_width,
            width: icon_width,
            ..header
        };
        let title = Rect {
            x: header.x + header.width.min(1),
            width: header.width.saturating_sub(icon_width + 2),
            ..header
        };

        let label_width = (string::display_width(CLOSE_LABEL) as u16).min(footer.width);
        let close_button = Rect {
            x: footer.right().saturating_sub(label_width + 1).max(footer.x),
            width: label_width,
            ..footer
        };
        let status = Rect {
            x: footer.x + footer.width.min(1),
            width: close_button.x.saturating_sub(footer.x).saturating_sub(2),
            ..footer
        };

        Self {
            panel,
            header,
            title,
            close_icon,
            upper_rule,
            body,
            lower_rule,
            footer,
            status,
            close_button,
        }
    }

    /// Which dismiss control, if any, covers the given cell
    pub fn control_at(&self, column: u16, row: u16) -> Option<DismissControl> {
        if layout::contains(self.close_icon, column, row) {
            Some(DismissControl::Icon)
        } else if layout::contains(self.close_button, column, row) {
            Some(DismissControl::Button)
        } else {
            None
        }
    }
}

/// Modal dialog presenting a read-only comment
pub struct CommentModal {
    state: ComponentState,
    comment: String,
    on_close: CloseCallback,
    icons: Box<dyn IconRenderer>,
    title: String,
    width_percent: u16,
    height_percent: u16,
    scroll: usize,
}

impl CommentModal {
    pub fn new(comment: impl Into<String>, on_close: impl FnMut() + Send + Sync + 'static) -> Self {
        Self {
            state: ComponentState::new(),
            comment: comment.into(),
            on_close: Box::new(on_close),
            icons: Box::new(GlyphIcons),
            title: DEFAULT_TITLE.to_string(),
            width_percent: DEFAULT_WIDTH_PERCENT,
            height_percent: DEFAULT_HEIGHT_PERCENT,
            scroll: 0,
        }
    }

    pub fn with_icons(mut self, icons: Box<dyn IconRenderer>) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Panel size as a percentage of the screen
    pub fn with_panel_size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent;
        self.height_percent = height_percent;
        self
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Regions the modal occupies when drawn over `area`
    pub fn layout(&self, area: Rect) -> ModalLayout {
        ModalLayout::compute(area, self.width_percent, self.height_percent)
    }

    /// Dismiss control under a screen cell, based on the last rendered area
    pub fn control_at(&self, column: u16, row: u16) -> Option<DismissControl> {
        self.layout(self.state.size).control_at(column, row)
    }

    /// Notify the owner that the user dismissed the modal
    pub fn activate(&mut self, control: DismissControl) {
        debug!(?control, "Comment modal dismissed");
        (self.on_close)();
    }

    fn rows(&self, width: u16) -> Vec<String> {
        string::preformat(&self.comment, usize::from(width))
    }

    fn page_size(&self) -> usize {
        usize::from(self.layout(self.state.size).body.height).max(1)
    }

    fn max_scroll(&self) -> usize {
        let body = self.layout(self.state.size).body;
        self.rows(body.width)
            .len()
            .saturating_sub(usize::from(body.height))
    }
}

fn render_if_visible<W: Widget>(frame: &mut Frame, widget: W, area: Rect) {
    if area.area() > 0 {
        frame.render_widget(widget, area);
    }
}

#[async_trait]
impl Component for CommentModal {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if event.kind != KeyEventKind::Press {
            return Ok(());
        }

        match event.code {
            KeyCode::Esc => self.activate(DismissControl::Icon),
            KeyCode::Enter => self.activate(DismissControl::Button),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.page_size()),
            KeyCode::PageDown => self.scroll_down(self.page_size()),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => {}
        }

        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(control) = self.control_at(event.column, event.row) {
                    self.activate(control);
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_STEP),
            _ => {}
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.state.size = area;
        let layout = self.layout(area);

        let rows = self.rows(layout.body.width);
        let visible_rows = usize::from(layout.body.height);
        let max_scroll = rows.len().saturating_sub(visible_rows);
        if self.scroll > max_scroll {
            trace!(from = self.scroll, to = max_scroll, "Clamping comment scroll");
            self.scroll = max_scroll;
        }

        // Dim whatever is underneath, then draw the panel on top.
        frame.buffer_mut().set_style(area, theme.backdrop_style());
        render_if_visible(frame, Clear, layout.panel);
        render_if_visible(
            frame,
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .style(theme.panel_style()),
            layout.panel,
        );

        render_if_visible(
            frame,
            Paragraph::new(Line::from(Span::styled(self.title.as_str(), theme.title_style()))),
            layout.title,
        );
        let icon = self.icons.render(
            Icon::Close,
            IconDirective::new(layout.close_icon.width, theme.text_dim),
        );
        render_if_visible(frame, Paragraph::new(Line::from(icon)), layout.close_icon);

        for rule in [layout.upper_rule, layout.lower_rule] {
            render_if_visible(
                frame,
                Paragraph::new("─".repeat(usize::from(rule.width))).style(theme.border_style()),
                rule,
            );
        }

        let lines: Vec<Line> = rows
            .iter()
            .skip(self.scroll)
            .take(visible_rows)
            .map(|row| Line::from(row.as_str()))
            .collect();
        render_if_visible(frame, Paragraph::new(Text::from(lines)), layout.body);

        if rows.len() > visible_rows {
            let last = (self.scroll + visible_rows).min(rows.len());
            let position = format!("{}-{} of {}", self.scroll + 1, last, rows.len());
            render_if_visible(
                frame,
                Paragraph::new(Span::styled(position, theme.help_style())),
                layout.status,
            );
        }

        render_if_visible(
            frame,
            Paragraph::new(Span::styled(CLOSE_LABEL, theme.button_style())),
            layout.close_button,
        );
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }
}

impl Scrollable for CommentModal {
    fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn scroll_position(&self) -> usize {
        self.scroll
    }

    fn can_scroll_up(&self) -> bool {
        self.scroll > 0
    }

    fn can_scroll_down(&self) -> bool {
        self.scroll < self.max_scroll()
    }
}
