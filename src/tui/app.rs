use crate::config::Config;
use crate::tui::{
    components::{Component, CommentModal, IconSet},
    events::{Event, COMMENT_CLOSED},
    keys::KeyMap,
    styles::Theme,
    Frame,
};
use anyhow::{Context, Result};
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Host screen that owns the comment modal while it is visible
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current application dimensions
    pub size: Rect,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// Current theme for styling
    pub theme: Theme,

    /// Whether mouse events reach the modal
    pub mouse_enabled: bool,

    /// The modal; `None` once dismissed
    modal: Option<CommentModal>,
}

impl App {
    /// Create the host with a visible modal showing `comment`.
    ///
    /// Dismissing the modal posts [`COMMENT_CLOSED`] on `event_sender`.
    pub fn new(config: &Config, comment: String, event_sender: mpsc::UnboundedSender<Event>) -> Result<Self> {
        let theme = Theme::from_name(&config.theme)
            .with_context(|| format!("Unknown theme '{}'", config.theme))?;
        let icons: IconSet = config.icons.parse()?;

        let on_close = move || {
            let event = Event::Custom(COMMENT_CLOSED.to_string());
            if event_sender.send(event).is_err() {
                debug!("Event channel closed, dismissal dropped");
            }
        };

        let modal = CommentModal::new(comment, on_close)
            .with_title(config.title.clone())
            .with_icons(icons.renderer())
            .with_panel_size(config.panel_width_percent, config.panel_height_percent);

        Ok(Self {
            should_quit: false,
            size: Rect::default(),
            key_map: KeyMap::default(),
            theme,
            mouse_enabled: config.mouse_enabled,
            modal: Some(modal),
        })
    }

    pub fn modal(&self) -> Option<&CommentModal> {
        self.modal.as_ref()
    }

    /// Handle an event; returns `true` when the application should exit
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => {
                if self.key_map.should_quit(&key) {
                    info!("Quit requested");
                    self.should_quit = true;
                } else if let Some(modal) = self.modal.as_mut() {
                    modal.handle_key_event(key).await?;
                }
            }
            Event::Mouse(mouse) => {
                if self.mouse_enabled {
                    if let Some(modal) = self.modal.as_mut() {
                        modal.handle_mouse_event(mouse).await?;
                    }
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.size = Rect::new(0, 0, width, height);
            }
            Event::Tick => {}
            Event::Custom(name) if name == COMMENT_CLOSED => {
                info!("Comment dismissed");
                self.modal = None;
                self.should_quit = true;
            }
            Event::Custom(name) => {
                debug!("Ignoring event: {}", name);
            }
        }

        Ok(self.should_quit)
    }

    /// Render the host screen and, on top of it, the modal
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        self.size = area;

        frame.render_widget(Block::default().style(self.theme.base_style()), area);

        if area.height > 0 {
            let help_area = Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(self.key_map.help_text(), self.theme.help_style())),
                help_area,
            );
        }

        if let Some(modal) = self.modal.as_mut() {
            modal.render(frame, area, &self.theme);
        }
    }
}
