use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use spellwatch_core::{PollState, Route};

use super::forms::{CastPrompt, LoginFormState};

/// What a key press asks the UI loop to do.
#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    SubmitLogin(String),
    Cast(String),
    Refresh,
    Logout,
    Quit,
}

/// Result of a background task, sent back to the UI loop.
#[derive(Clone, Debug, PartialEq)]
pub enum UiMessage {
    LoginFinished(Result<String, String>),
    CastFinished(Result<String, String>),
    RefreshFinished(Result<(), String>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }
}

/// Everything the UI shows besides the dashboard view model.
#[derive(Clone, Debug)]
pub struct AppState {
    route: Route,
    pub login: LoginFormState,
    pub cast_prompt: CastPrompt,
    status: Option<StatusMessage>,
    poll_state: PollState,
    should_quit: bool,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            login: LoginFormState::default(),
            cast_prompt: CastPrompt::Closed,
            status: None,
            poll_state: PollState::Idle,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn poll_state(&self) -> PollState {
        self.poll_state
    }

    pub fn set_poll_state(&mut self, state: PollState) {
        self.poll_state = state;
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Switch views. Entering the login route starts from an empty form.
    pub fn set_route(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.route = route;
        self.cast_prompt = CastPrompt::Closed;
        if route == Route::Login {
            self.login = LoginFormState::default();
            self.status = None;
        }
    }

    /// Map a key press to an action, updating local input state.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return self.quit();
        }

        match self.route {
            Route::Login => self.on_login_key(key),
            Route::Dashboard if self.cast_prompt.is_open() => self.on_prompt_key(key),
            Route::Dashboard => self.on_dashboard_key(key),
        }
    }

    fn on_login_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => self.login.begin_submit().map(UiAction::SubmitLogin),
            KeyCode::Backspace => {
                self.login.backspace();
                None
            }
            KeyCode::Char(c) => {
                self.login.push(c);
                None
            }
            _ => None,
        }
    }

    fn on_prompt_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        match key.code {
            KeyCode::Esc => {
                self.cast_prompt = CastPrompt::Closed;
                None
            }
            KeyCode::Enter => {
                let spell = self.cast_prompt.submit()?;
                self.status = Some(StatusMessage::Info(format!("Casting {}...", spell)));
                Some(UiAction::Cast(spell))
            }
            KeyCode::Backspace => {
                self.cast_prompt.backspace();
                None
            }
            KeyCode::Char(c) => {
                self.cast_prompt.push(c);
                None
            }
            _ => None,
        }
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') => {
                self.cast_prompt = CastPrompt::open();
                None
            }
            KeyCode::Char('r') => Some(UiAction::Refresh),
            KeyCode::Char('l') => Some(UiAction::Logout),
            _ => None,
        }
    }

    fn quit(&mut self) -> Option<UiAction> {
        self.should_quit = true;
        Some(UiAction::Quit)
    }

    /// Apply the result of a background task.
    pub fn apply(&mut self, message: UiMessage) {
        match message {
            UiMessage::LoginFinished(Ok(username)) => {
                self.login.finish_submit(None);
                self.status = Some(StatusMessage::Info(format!("Signed in as {}", username)));
            }
            UiMessage::LoginFinished(Err(message)) => {
                self.login.finish_submit(Some(message));
            }
            UiMessage::CastFinished(Ok(message)) => {
                self.status = Some(StatusMessage::Info(message));
            }
            UiMessage::CastFinished(Err(message)) => {
                self.status = Some(StatusMessage::Error(format!("Cast failed: {}", message)));
            }
            UiMessage::RefreshFinished(Ok(())) => {}
            UiMessage::RefreshFinished(Err(message)) => {
                self.status = Some(StatusMessage::Error(format!("Refresh failed: {}", message)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            assert!(app.on_key(key(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn test_login_typing_and_submit() {
        let mut app = AppState::new(Route::Login);
        type_text(&mut app, "alicee");
        app.on_key(key(KeyCode::Backspace));

        let action = app.on_key(key(KeyCode::Enter));

        assert_eq!(action, Some(UiAction::SubmitLogin("alice".to_string())));
        assert!(app.login.submitting);
    }

    #[test]
    fn test_login_q_is_text_not_quit() {
        let mut app = AppState::new(Route::Login);
        type_text(&mut app, "q");
        assert_eq!(app.login.username, "q");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_login_failure_shown_inline() {
        let mut app = AppState::new(Route::Login);
        type_text(&mut app, "mallory");
        app.on_key(key(KeyCode::Enter));

        app.apply(UiMessage::LoginFinished(Err("User 'mallory' not found".to_string())));

        assert_eq!(app.route(), Route::Login);
        assert_eq!(app.login.error.as_deref(), Some("User 'mallory' not found"));
        assert!(!app.login.submitting);
    }

    #[test]
    fn test_dashboard_keys() {
        let mut app = AppState::new(Route::Dashboard);
        assert_eq!(app.on_key(key(KeyCode::Char('r'))), Some(UiAction::Refresh));
        assert_eq!(app.on_key(key(KeyCode::Char('l'))), Some(UiAction::Logout));
        assert_eq!(app.on_key(key(KeyCode::Char('q'))), Some(UiAction::Quit));
        assert!(app.should_quit());
    }

    #[test]
    fn test_cast_prompt_flow() {
        let mut app = AppState::new(Route::Dashboard);
        assert!(app.on_key(key(KeyCode::Char('c'))).is_none());
        assert!(app.cast_prompt.is_open());

        // 'q' and 'r' are text while the prompt is open
        type_text(&mut app, "Reparo");
        let action = app.on_key(key(KeyCode::Enter));

        assert_eq!(action, Some(UiAction::Cast("Reparo".to_string())));
        assert!(!app.cast_prompt.is_open());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_cast_prompt_escape_closes() {
        let mut app = AppState::new(Route::Dashboard);
        app.on_key(key(KeyCode::Char('c')));
        assert!(app.on_key(key(KeyCode::Esc)).is_none());
        assert!(!app.cast_prompt.is_open());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = AppState::new(Route::Login);
        let action = app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, Some(UiAction::Quit));
        assert!(app.should_quit());
    }

    #[test]
    fn test_entering_login_resets_form() {
        let mut app = AppState::new(Route::Dashboard);
        app.apply(UiMessage::CastFinished(Ok("Lumos cast".to_string())));
        app.login.username = "stale".to_string();

        app.set_route(Route::Login);

        assert_eq!(app.route(), Route::Login);
        assert!(app.login.username.is_empty());
        assert!(app.status().is_none());
    }

    #[test]
    fn test_task_results_update_status() {
        let mut app = AppState::new(Route::Dashboard);

        app.apply(UiMessage::CastFinished(Err("Forbidden spell".to_string())));
        assert_eq!(
            app.status(),
            Some(&StatusMessage::Error("Cast failed: Forbidden spell".to_string()))
        );

        app.apply(UiMessage::RefreshFinished(Err("timed out".to_string())));
        assert_eq!(app.status().map(|s| s.text()), Some("Refresh failed: timed out"));
    }
}
