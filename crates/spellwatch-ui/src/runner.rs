//! Terminal lifecycle and the draw loop.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use spellwatch_core::{Dashboard, Route, Transport};

use crate::actions;
use crate::refresh::PollTask;
use crate::state::{AppState, StatusMessage, UiAction, UiMessage};
use crate::views;

const INPUT_POLL: Duration = Duration::from_millis(100);

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Take over the terminal, run the UI until the user quits, then restore it.
pub async fn run<T: Transport + 'static>(
    dashboard: Arc<Dashboard<T>>,
    routes: watch::Receiver<Route>,
) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, dashboard, routes).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

struct Runner<T: Transport + 'static> {
    dashboard: Arc<Dashboard<T>>,
    app: AppState,
    routes: watch::Receiver<Route>,
    shutdown: CancellationToken,
    poll: Option<PollTask>,
    tx: UnboundedSender<UiMessage>,
    rx: UnboundedReceiver<UiMessage>,
}

async fn run_loop<T: Transport + 'static>(
    terminal: &mut Tui,
    dashboard: Arc<Dashboard<T>>,
    routes: watch::Receiver<Route>,
) -> io::Result<()> {
    let initial = *routes.borrow();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut runner = Runner {
        dashboard,
        app: AppState::new(initial),
        routes,
        shutdown: CancellationToken::new(),
        poll: None,
        tx,
        rx,
    };

    let result = runner.drive(terminal).await;
    runner.shutdown.cancel();
    result
}

impl<T: Transport + 'static> Runner<T> {
    async fn drive(&mut self, terminal: &mut Tui) -> io::Result<()> {
        while !self.app.should_quit() {
            self.sync_route();
            self.ensure_polling();
            self.app.set_poll_state(self.dashboard.poll().state());
            while let Ok(message) = self.rx.try_recv() {
                self.app.apply(message);
            }

            {
                let view = self.dashboard.view();
                let view = view.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                terminal.draw(|frame| views::draw(frame, &self.app, &view))?;
            }

            // crossterm's poll blocks; keep it off the runtime's workers.
            let input = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
                if event::poll(INPUT_POLL)? {
                    Ok(Some(event::read()?))
                } else {
                    Ok(None)
                }
            })?;

            if let Some(Event::Key(key)) = input
                && key.kind == KeyEventKind::Press
                && let Some(action) = self.app.on_key(key)
            {
                self.dispatch(action);
            }
        }
        Ok(())
    }

    fn sync_route(&mut self) {
        if !self.routes.has_changed().unwrap_or(false) {
            return;
        }
        let route = *self.routes.borrow_and_update();
        if route == Route::Login {
            if let Some(poll) = self.poll.take() {
                poll.stop();
            }
            self.dashboard
                .view()
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .reset();
        }
        self.app.set_route(route);
    }

    fn ensure_polling(&mut self) {
        if self.app.route() != Route::Dashboard {
            return;
        }
        if self.poll.as_ref().is_some_and(PollTask::is_running) {
            return;
        }
        self.poll = Some(PollTask::spawn(self.dashboard.clone(), &self.shutdown));
    }

    fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::SubmitLogin(username) => {
                actions::spawn_login(self.dashboard.clone(), username, self.tx.clone())
            }
            UiAction::Cast(spell) => {
                actions::spawn_cast(self.dashboard.clone(), spell, self.tx.clone())
            }
            UiAction::Refresh => actions::spawn_refresh(self.dashboard.clone(), self.tx.clone()),
            UiAction::Logout => {
                if let Err(message) = actions::logout(&self.dashboard) {
                    self.app.set_status(StatusMessage::Error(message));
                }
            }
            UiAction::Quit => {}
        }
    }
}
