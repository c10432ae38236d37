use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use qa_core::{update, AppState, Msg};
use qa_engine::{ClientSettings, DEFAULT_BASE_URL};
use qa_logging::qa_info;
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::input::{self, Focus, KeyCommand};
use super::{logging, ui};

const TICK_INTERVAL: Duration = Duration::from_millis(75);
const INPUT_POLL: Duration = Duration::from_millis(25);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    qa_info!("Q/A client starting; backend at {}", DEFAULT_BASE_URL);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(ClientSettings::default(), msg_tx.clone())?;

    // Background tick to throttle rendering and animate the loading indicator.
    thread::spawn(move || {
        while msg_tx.send(Msg::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let mut terminal = ratatui::init();
    let result = App::new(effects, msg_rx).run(&mut terminal);
    ratatui::restore();
    qa_info!("Q/A client exiting");
    result
}

struct App {
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    focus: Focus,
    spinner: usize,
    /// Set by UI-local changes (focus) that the core state does not track.
    needs_render: bool,
    quit: bool,
}

impl App {
    fn new(effects: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            effects,
            msg_rx,
            focus: Focus::default(),
            spinner: 0,
            needs_render: true,
            quit: false,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.quit {
            if event::poll(INPUT_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.process_pending_messages() {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::render(frame, &view, self.focus, self.spinner))?;
            }
        }
        self.effects.shutdown();
        Ok(())
    }

    fn handle_key(&mut self, key: event::KeyEvent) {
        match input::handle_key(self.focus, key, &self.state) {
            KeyCommand::Send(msg) => self.dispatch_msg(msg),
            KeyCommand::FocusNext => {
                self.focus = self.focus.next();
                self.needs_render = true;
            }
            KeyCommand::FocusPrev => {
                self.focus = self.focus.prev();
                self.needs_render = true;
            }
            KeyCommand::Quit => self.quit = true,
            KeyCommand::Ignore => {}
        }
    }

    /// Drains the inbox; returns true when a tick found something to redraw.
    fn process_pending_messages(&mut self) -> bool {
        let mut render = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if msg == Msg::Tick {
                render |= self.on_tick();
            }
            self.dispatch_msg(msg);
        }
        render
    }

    fn on_tick(&mut self) -> bool {
        let loading = self.state.is_any_loading();
        if loading {
            self.spinner = self.spinner.wrapping_add(1);
        }
        let dirty = self.state.consume_dirty();
        let render = dirty || loading || self.needs_render;
        self.needs_render = false;
        render
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }
}
