use crate::tui::input::InputState;
use crate::tui::panel::PanelState;
use crate::tui::ui;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use typeahead::{logging, AppConfig, Directory, SearchClient, SearchHit, SearchResponse};

pub struct App {
    // Data
    pub directory: Arc<Directory>,
    pub suggestions: Vec<SearchHit>,

    // Sub-states
    pub input: InputState,
    pub panel: PanelState,

    pub status_message: String,
    pub should_quit: bool,

    /// Inner rect of the suggestion list from the last draw; mouse hits
    /// are resolved against it
    pub list_area: Option<Rect>,

    // Search plumbing
    client: SearchClient,
    responses: Receiver<SearchResponse>,
    /// Id of the most recently issued request; anything older is stale
    latest_request: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let directory = Arc::new(Directory::generate(
            config.directory_seed,
            config.directory_size,
        ));
        let (client, responses) =
            SearchClient::new(Arc::clone(&directory), config.match_options, config.delay);

        logging::info("APP", &format!("directory ready: {} records", directory.len()));

        Self {
            directory,
            suggestions: Vec::new(),
            input: InputState::default(),
            panel: PanelState::default(),
            status_message: "Type a name".to_string(),
            should_quit: false,
            list_area: None,
            client,
            responses,
            latest_request: 0,
        }
    }

    pub fn run<B: Backend<Error = std::io::Error>>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> typeahead::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => self.handle_key(key),
                    Ok(Event::Mouse(mouse)) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_responses();
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.panel.open {
                    self.close_panel();
                } else if !self.input.is_empty() {
                    self.input.clear();
                    self.status_message = "Type a name".to_string();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Down => self.panel.highlight_next(self.suggestions.len()),
            KeyCode::Up => self.panel.highlight_prev(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Backspace => {
                if self.input.backspace() {
                    self.on_input_changed();
                }
            }
            KeyCode::Delete => {
                if self.input.delete() {
                    self.on_input_changed();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert(c);
                self.on_input_changed();
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if !self.panel.open {
            return;
        }
        let Some(area) = self.list_area else {
            return;
        };
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return;
        }
        let index = (mouse.row - area.y) as usize + self.panel.scroll_offset;
        if index < self.suggestions.len() {
            self.select_index(index);
        }
    }

    // --- Search flow ---

    /// Every edit re-runs the search; emptying the input closes the panel
    /// without dispatching.
    fn on_input_changed(&mut self) {
        if self.input.is_empty() {
            // Invalidate any in-flight request so its late response
            // cannot reopen the panel
            self.latest_request += 1;
            self.close_panel();
            self.suggestions.clear();
            self.status_message = "Type a name".to_string();
            return;
        }

        self.latest_request += 1;
        self.client.dispatch(self.latest_request, &self.input.query);
        self.status_message = "Searching...".to_string();
    }

    fn process_responses(&mut self) {
        while let Ok(response) = self.responses.try_recv() {
            self.apply_response(response);
        }
    }

    /// Apply a completed search. Responses for anything but the latest
    /// issued request are dropped, so out-of-order completions cannot
    /// overwrite newer panels.
    fn apply_response(&mut self, response: SearchResponse) {
        if response.request_id != self.latest_request {
            logging::debug(
                "APP",
                &format!(
                    "drop stale response #{} (latest is #{})",
                    response.request_id, self.latest_request
                ),
            );
            return;
        }

        logging::debug(
            "APP",
            &format!(
                "response #{}: {} hits for '{}'",
                response.request_id,
                response.hits.len(),
                response.query
            ),
        );

        self.status_message = if response.hits.is_empty() {
            format!("No matches for '{}'", response.query)
        } else {
            format!("{} matches", response.hits.len())
        };
        self.suggestions = response.hits;
        self.panel.open_at_top();
    }

    // --- Selection ---

    fn select_highlighted(&mut self) {
        if self.panel.open {
            self.select_index(self.panel.highlighted);
        }
    }

    fn select_index(&mut self, index: usize) {
        // With the placeholder showing there is nothing to select
        let Some(hit) = self.suggestions.get(index) else {
            return;
        };
        let name = hit.user.name.clone();
        logging::info("APP", &format!("selected '{}'", name));

        self.input.set_value(&name);
        self.status_message = format!("Selected {}", name);
        // A selection also invalidates whatever search is still in flight
        self.latest_request += 1;
        self.suggestions.clear();
        self.close_panel();
    }

    fn close_panel(&mut self) {
        self.panel.close();
        self.list_area = None;
    }
}
