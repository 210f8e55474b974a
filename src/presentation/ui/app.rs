//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::services::{Announcer, ControllerSettings, ScreenController};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::{FiredTimer, FullscreenPort, TimerPort};
use crate::domain::screen::Deck;
use crate::infrastructure::config::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult, TextEdit};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{DeckScreen, DeckSurface, HelpPopup, SurfaceOptions};
use crate::presentation::widgets::NavButton;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// The running presentation: controller, input handling and drawing.
pub struct App<T, F> {
    state: AppState,
    controller: ScreenController<DeckSurface, T>,
    timer_rx: mpsc::UnboundedReceiver<FiredTimer>,
    fullscreen: F,
    commands: CommandRegistry,
    help_bindings: Vec<Keybind>,
    announcer: Announcer,
    theme: Theme,
    mouse: bool,
    show_help: bool,
}

impl<T: TimerPort, F: FullscreenPort> App<T, F> {
    /// Wires a deck to its controller. `timer_rx` must receive what `timer` fires.
    #[must_use]
    pub fn new(
        deck: &Deck,
        config: &AppConfig,
        timer: T,
        timer_rx: mpsc::UnboundedReceiver<FiredTimer>,
        fullscreen: F,
    ) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        let crawl = config.crawl.timing();

        let mut surface = DeckSurface::new(
            deck,
            SurfaceOptions {
                show_progress: config.ui.show_progress,
                show_aside: config.ui.show_aside,
                animations: config.ui.enable_animations,
                crawl_duration: crawl.duration,
            },
        );
        if let Some(input) = surface.input_mut() {
            input.set_accent(theme.accent);
        }

        let controller = ScreenController::new(
            surface,
            timer,
            ControllerSettings {
                input_screen: deck.input_screen(),
                crawl,
                submit_advance_delay: config.ui.submit_advance_delay(),
            },
        );

        let commands = CommandRegistry::with_overrides(&config.keybindings);
        let help_bindings = commands.help_bindings();

        let announcer = Announcer::new(config.ui.announce_duration());
        let announcer = if config.ui.announce {
            announcer
        } else {
            announcer.disabled()
        };

        Self {
            state: AppState::Running,
            controller,
            timer_rx,
            fullscreen,
            commands,
            help_bindings,
            announcer,
            theme,
            mouse: config.mouse,
            show_help: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.controller.go_to(0);

        self.run_event_loop(terminal).await?;

        if let Err(e) = self.fullscreen.exit() {
            warn!(error = %e, "Failed to leave presentation mode");
        }
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                Some(fired) = self.timer_rx.recv() => {
                    self.controller.on_timer(fired);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    self.controller.surface_mut().tick(ANIMATION_TICK_RATE);
                    self.announcer.tick();
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let announcement = self.announcer.current().map(|a| a.message.clone());

        frame.render_stateful_widget(
            DeckScreen::new(&self.theme)
                .presenting(self.fullscreen.is_active())
                .announcement(announcement.as_deref()),
            area,
            self.controller.surface_mut(),
        );

        if self.show_help {
            frame.render_widget(HelpPopup::new(&self.help_bindings, &self.theme), area);
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse => self.handle_mouse(mouse),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        let action = self.commands.find_action(key);

        if self.show_help {
            if matches!(action, Some(Action::Cancel | Action::ToggleHelp | Action::Quit)) {
                self.show_help = false;
            }
            return EventResult::Consumed;
        }

        if self.controller.surface().is_input_focused()
            && !EventHandler::is_submit_event(&key)
            && let Some(edit) = EventHandler::text_edit(&key)
        {
            self.apply_text_edit(edit);
            return EventResult::Consumed;
        }

        let result = action.map_or(EventResult::Continue, |action| self.dispatch(action));
        self.announcer
            .announce_screen(self.controller.current_index());
        result
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Continue;
        }
        if self.show_help {
            self.show_help = false;
            return EventResult::Consumed;
        }

        let surface = self.controller.surface();
        let Some(button) = surface.button_at(mouse.column, mouse.row) else {
            return EventResult::Continue;
        };

        let (backward, forward) = surface.navigation_enabled();
        let action = match button {
            NavButton::First if backward => Action::First,
            NavButton::Previous if backward => Action::Previous,
            NavButton::Next if forward => Action::Next,
            NavButton::JumpToEnd if forward => Action::JumpToEnd,
            NavButton::Help => Action::ToggleHelp,
            NavButton::Present => Action::ToggleFullscreen,
            _ => {
                debug!(?button, "Ignoring click on disabled button");
                return EventResult::Consumed;
            }
        };
        self.dispatch(action)
    }

    fn dispatch(&mut self, action: Action) -> EventResult {
        match action {
            Action::Quit => return EventResult::Exit,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::Next => {
                self.controller.next();
            }
            Action::Previous => {
                self.controller.prev();
            }
            Action::First => {
                self.controller.go_to(0);
            }
            Action::JumpToEnd => {
                self.controller.go_to_end();
            }
            Action::Confirm => self.confirm(),
            Action::Cancel => {
                if self.fullscreen.is_active() {
                    self.toggle_fullscreen();
                }
            }
        }
        EventResult::Consumed
    }

    /// Enter advances past the title screen and saves a typed response.
    fn confirm(&mut self) {
        if self.controller.current_index() == 0 {
            self.controller.next();
            return;
        }

        if !self.controller.on_input_screen() {
            return;
        }
        let value = self
            .controller
            .surface()
            .input()
            .map(|i| i.value().to_string())
            .unwrap_or_default();
        if self.controller.submit_input(&value).is_some() {
            info!("Response saved");
        }
    }

    fn toggle_fullscreen(&mut self) {
        let result = if self.fullscreen.is_active() {
            self.fullscreen.exit().map(|_| ())
        } else {
            self.fullscreen.request()
        };
        if let Err(e) = result {
            warn!(error = %e, "Presentation mode toggle failed");
        }
    }

    fn apply_text_edit(&mut self, edit: TextEdit) {
        let Some(input) = self.controller.surface_mut().input_mut() else {
            return;
        };
        match edit {
            TextEdit::Insert(c) => input.input_char(c),
            TextEdit::Backspace => input.backspace(),
            TextEdit::Delete => input.delete(),
            TextEdit::CursorStart => input.move_start(),
            TextEdit::CursorEnd => input.move_end(),
        }
    }
}
