//! Shell state and event loop
//!
//! The shell owns the category store and the tool registry, mounts at most
//! one tool view at a time, and runs generation jobs on tokio. Finished jobs
//! come back over a channel tagged with the mount they belong to; results for
//! a view that has since been unmounted are dropped.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use alchemy_core::secrets::IMAGE_SERVICE_SECRET;
use alchemy_core::{
    log_debug, log_info, log_warn, resolve_view, save_image, AdOutput, AppConfig, CanvasView,
    CategoryStore, GenerationResult, SecretStore, SharedLogger, ToolKind, ToolRegistry,
    TypographyOutput,
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::canvas::{self, GRID_COLUMNS};
use crate::sidebar::{self, NEW_CATEGORY_NAME};
use crate::theme::Theme;
use crate::views::{AdView, ToolAction, TypographyView};

const TICK: Duration = Duration::from_millis(80);

const HELP: &str = "Tab switch panel · ↑↓ move · Enter select · n new category · Esc back · Ctrl+C quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Canvas,
}

/// Body of the mounted tool
pub enum ToolView {
    Ad(AdView),
    Typography(TypographyView),
}

struct Mounted {
    id: u64,
    tool_id: String,
    view: ToolView,
}

/// Completion messages from background jobs
pub enum AppEvent {
    AdsReady {
        mount: u64,
        results: Vec<AdOutput>,
    },
    RenderFinished {
        mount: u64,
        outcome: GenerationResult<TypographyOutput>,
    },
    Downloaded(std::result::Result<PathBuf, String>),
}

pub struct App {
    store: CategoryStore,
    registry: ToolRegistry,
    config: AppConfig,
    secrets: Arc<dyn SecretStore>,
    logger: SharedLogger,
    theme: Theme,
    focus: Focus,
    sidebar_cursor: usize,
    grid_cursor: usize,
    mounted: Option<Mounted>,
    next_mount: u64,
    status: Option<String>,
    tick: usize,
    should_quit: bool,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: AppConfig, secrets: Arc<dyn SecretStore>, logger: SharedLogger) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            store: CategoryStore::new(Arc::clone(&logger)),
            registry: ToolRegistry::with_builtin_tools(Arc::clone(&logger)),
            config,
            secrets,
            logger,
            theme: Theme::default(),
            focus: Focus::Sidebar,
            sidebar_cursor: 0,
            grid_cursor: 0,
            mounted: None,
            next_mount: 0,
            status: None,
            tick: 0,
            should_quit: false,
            events_tx,
            events_rx,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn store(&self) -> &CategoryStore {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn grid_cursor(&self) -> usize {
        self.grid_cursor
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mounted_view(&self) -> Option<&ToolView> {
        self.mounted.as_ref().map(|m| &m.view)
    }

    pub fn mounted_view_mut(&mut self) -> Option<&mut ToolView> {
        self.mounted.as_mut().map(|m| &mut m.view)
    }

    /// Draw, drain finished jobs, and dispatch key presses until quit
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        log_info!(self.logger, "[App] Started");
        while !self.should_quit() {
            self.drain_events();
            terminal.draw(|f| self.render(f))?;

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            } else {
                self.tick = self.tick.wrapping_add(1);
            }
        }
        self.unmount();
        log_info!(self.logger, "[App] Exiting");
        Ok(())
    }

    pub fn render(&self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(rows[0]);

        sidebar::render(
            f,
            columns[0],
            &self.theme,
            self.store().categories(),
            self.store().active_category_id(),
            self.sidebar_cursor,
            self.focus() == Focus::Sidebar,
        );

        let view = resolve_view(&self.store, &self.registry);
        canvas::render(f, columns[1], self, &view, self.focus() == Focus::Canvas);

        let status = match self.status() {
            Some(message) => Span::styled(message.to_string(), Style::default().fg(self.theme.accent)),
            None => Span::styled(HELP, self.theme.muted()),
        };
        f.render_widget(Paragraph::new(Line::from(status)), rows[1]);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Sidebar => Focus::Canvas,
                Focus::Canvas => Focus::Sidebar,
            };
            return;
        }

        self.status = None;
        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Canvas => self.handle_canvas_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let rows = sidebar::row_count(self.store.categories());
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar_cursor = self.sidebar_cursor.checked_sub(1).unwrap_or(rows - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.sidebar_cursor = (self.sidebar_cursor + 1) % rows;
            }
            KeyCode::Enter => match self.store.categories().get(self.sidebar_cursor) {
                Some(category) => {
                    let id = category.id.clone();
                    self.select_category(id);
                    self.focus = Focus::Canvas;
                }
                None => self.add_category(),
            },
            KeyCode::Char('n') => self.add_category(),
            KeyCode::Esc => {
                self.store.clear_category();
                self.sync_mount();
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_canvas_key(&mut self, key: KeyEvent) {
        let tool_ids: Option<Vec<String>> = match resolve_view(&self.store, &self.registry) {
            CanvasView::ActiveTool(_) => None,
            CanvasView::CategoryGrid { tools, .. } => Some(tools.iter().map(|t| t.id.clone()).collect()),
            CanvasView::Dashboard => Some(Vec::new()),
        };

        let Some(tool_ids) = tool_ids else {
            self.handle_tool_key(key);
            return;
        };

        if self.store.active_category_id().is_none() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.add_category(),
                KeyCode::Esc => self.focus = Focus::Sidebar,
                _ => {}
            }
            return;
        }

        let last = tool_ids.len().saturating_sub(1);
        match key.code {
            KeyCode::Left => self.grid_cursor = self.grid_cursor.saturating_sub(1),
            KeyCode::Right => self.grid_cursor = (self.grid_cursor + 1).min(last),
            KeyCode::Up => self.grid_cursor = self.grid_cursor.saturating_sub(GRID_COLUMNS),
            KeyCode::Down => self.grid_cursor = (self.grid_cursor + GRID_COLUMNS).min(last),
            KeyCode::Enter => {
                if let Some(id) = tool_ids.get(self.grid_cursor) {
                    self.store.select_tool(Some(id.clone()));
                    self.sync_mount();
                }
            }
            KeyCode::Esc => self.focus = Focus::Sidebar,
            _ => {}
        }
    }

    fn handle_tool_key(&mut self, key: KeyEvent) {
        let action = match self.mounted_view_mut() {
            Some(ToolView::Ad(view)) => view.handle_key(key),
            Some(ToolView::Typography(view)) => view.handle_key(key),
            None => return,
        };

        match action {
            ToolAction::None => {}
            ToolAction::Generate => self.start_generation(),
            ToolAction::Download => self.start_download(),
            ToolAction::Back => {
                self.store.select_tool(None);
                self.sync_mount();
            }
        }
    }

    pub fn select_category(&mut self, id: String) {
        self.store.select_category(id);
        self.grid_cursor = 0;
        self.sync_mount();
    }

    pub fn add_category(&mut self) {
        let name = self.store.next_available_name(NEW_CATEGORY_NAME);
        self.status = Some(match self.store.add_category(&name) {
            Ok(category) => format!("Created category '{}'", category.name),
            Err(e) => e.to_string(),
        });
    }

    /// Mount or unmount the tool view so it matches the selection
    fn sync_mount(&mut self) {
        let wanted = match resolve_view(&self.store, &self.registry) {
            CanvasView::ActiveTool(tool) => Some((tool.id.clone(), tool.kind)),
            _ => None,
        };

        if let (Some(mounted), Some((tool_id, _))) = (&self.mounted, &wanted) {
            if &mounted.tool_id == tool_id {
                return;
            }
        }

        self.unmount();
        if let Some((tool_id, kind)) = wanted {
            self.mount(tool_id, kind);
        }
    }

    fn mount(&mut self, tool_id: String, kind: ToolKind) {
        let id = self.next_mount;
        self.next_mount += 1;

        let logger = Arc::clone(&self.logger);
        let view = match kind {
            ToolKind::AdGenerator => ToolView::Ad(AdView::new(&self.config, logger)),
            ToolKind::TypographyRenderer => {
                let api_key = self.secrets.get(IMAGE_SERVICE_SECRET);
                ToolView::Typography(TypographyView::new(&self.config, api_key, logger))
            }
        };

        log_debug!(self.logger, "[App] Mounted {} (#{})", tool_id, id);
        self.mounted = Some(Mounted { id, tool_id, view });
    }

    /// Discard the mounted view; an in-flight render is cancelled on drop
    fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            log_debug!(self.logger, "[App] Unmounted {} (#{})", mounted.tool_id, mounted.id);
        }
    }

    fn start_generation(&mut self) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };
        let mount = mounted.id;
        let tx = self.events_tx.clone();

        match &mut mounted.view {
            ToolView::Ad(view) => {
                if let Some(job) = view.generator_mut().start() {
                    tokio::spawn(async move {
                        let results = job.run().await;
                        let _ = tx.send(AppEvent::AdsReady { mount, results });
                    });
                }
            }
            ToolView::Typography(view) => {
                if let Some(job) = view.renderer_mut().start() {
                    tokio::spawn(async move {
                        let outcome = job.run().await;
                        let _ = tx.send(AppEvent::RenderFinished { mount, outcome });
                    });
                }
            }
        }
    }

    fn start_download(&mut self) {
        let Some(ToolView::Typography(view)) = self.mounted_view() else {
            return;
        };
        let Some(output) = view.renderer().result() else {
            return;
        };

        let url = output.image_url.clone();
        let file_name = view.renderer().input().download_file_name();
        let dir = self.config.downloads.directory();
        let tx = self.events_tx.clone();
        self.status = Some(format!("Downloading {}...", file_name));

        tokio::spawn(async move {
            let outcome = save_image(&url, &dir, &file_name)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Downloaded(outcome));
        });
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AdsReady { mount, results } => match self.mounted.as_mut() {
                Some(Mounted { id, view: ToolView::Ad(view), .. }) if *id == mount => {
                    view.generator_mut().complete(results);
                }
                _ => log_debug!(self.logger, "[App] Dropping ads for unmounted view #{}", mount),
            },
            AppEvent::RenderFinished { mount, outcome } => match self.mounted.as_mut() {
                Some(Mounted { id, view: ToolView::Typography(view), .. }) if *id == mount => {
                    view.renderer_mut().complete(outcome);
                }
                _ => log_debug!(self.logger, "[App] Dropping render for unmounted view #{}", mount),
            },
            AppEvent::Downloaded(Ok(path)) => {
                log_info!(self.logger, "[App] Saved image to {}", path.display());
                self.status = Some(format!("Saved {}", path.display()));
            }
            AppEvent::Downloaded(Err(e)) => {
                log_warn!(self.logger, "[App] Download failed: {}", e);
                self.status = Some(format!("Download failed: {}", e));
            }
        }
    }

    /// Wait for the next finished job and apply it
    #[cfg(test)]
    pub(crate) async fn next_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_event(event);
        }
    }
}
