use super::event::AppEvent;
use super::gesture::SwipeTracker;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::config::Config;
use crate::engine::{Announcer, Navigator};
use crate::speech::{FlashHaptics, SpeechService};
use crate::ui::layout::{Hit, ScreenLayout};
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;
use tracing::{debug, info};

pub struct App {
    config: Config,
    mode: AppMode,
    navigator: Navigator<RenderState>,
    haptics: FlashHaptics,
    swipe: SwipeTracker,
    layout: ScreenLayout,
}

impl App {
    pub fn new(config: Config, speech: Box<dyn SpeechService>) -> Self {
        let haptics = FlashHaptics::new();
        let announcer = Announcer::new(speech, Box::new(haptics.clone()));
        let navigator = Navigator::new(announcer, RenderState::empty(AppMode::Learning));
        let swipe = SwipeTracker::new(config.gesture.swipe_threshold);

        Self {
            config,
            mode: AppMode::Learning,
            navigator,
            haptics,
            swipe,
            layout: ScreenLayout::default(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator<RenderState> {
        &self.navigator
    }

    pub fn render_state(&self) -> &RenderState {
        self.navigator.surface()
    }

    pub fn is_flashing(&self) -> bool {
        self.haptics
            .is_flashing(Duration::from_millis(self.config.ui.flash_ms))
    }

    /// Hit areas from the most recent frame, used to route mouse input
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if self.mode == AppMode::Help {
            match event {
                AppEvent::Quit => self.set_mode(AppMode::Quit),
                AppEvent::None => {}
                _ => self.set_mode(AppMode::Learning),
            }
            return;
        }

        match event {
            AppEvent::TapLetter(index) => {
                self.navigator.select_index(index);
            }
            AppEvent::TapNext | AppEvent::SwipeLeft => {
                self.navigator.advance();
            }
            AppEvent::TapPrevious | AppEvent::SwipeRight => {
                self.navigator.retreat();
            }
            AppEvent::TapPlay => self.navigator.announce_current(),
            AppEvent::ToggleHelp => self.set_mode(AppMode::Help),
            AppEvent::Quit => self.set_mode(AppMode::Quit),
            AppEvent::None => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.handle_event(AppEvent::from_key(key));
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let event = self.mouse_to_event(mouse);
        self.handle_event(event);
    }

    fn mouse_to_event(&mut self, mouse: MouseEvent) -> AppEvent {
        let hit = self.layout.hit(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Hit::Letter(index) => AppEvent::TapLetter(index as i64),
                Hit::Previous => AppEvent::TapPrevious,
                Hit::Play => AppEvent::TapPlay,
                Hit::Next => AppEvent::TapNext,
                Hit::Card => {
                    self.swipe.press(mouse.column);
                    AppEvent::None
                }
                Hit::Nothing => AppEvent::None,
            },
            MouseEventKind::Up(MouseButton::Left) => {
                let event = self.swipe.release(mouse.column);
                if event != AppEvent::None {
                    debug!(?event, "swipe recognised");
                }
                event
            }
            _ => AppEvent::None,
        }
    }

    fn set_mode(&mut self, mode: AppMode) {
        if self.mode != mode {
            info!(from = ?self.mode, to = ?mode, "mode change");
        }
        self.mode = mode;
        self.swipe.cancel();
        self.navigator.surface_mut().mode = mode;
    }
}
