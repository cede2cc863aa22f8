use tokio::sync::watch;

use spellwatch_core::{Navigator, Route};

/// Navigator that publishes the active route to the UI loop.
///
/// Background tasks (login, polling) navigate through this; the UI loop
/// watches the receiver and switches views on change.
pub struct RouteNavigator {
    tx: watch::Sender<Route>,
}

impl RouteNavigator {
    pub fn new(initial: Route) -> (Self, watch::Receiver<Route>) {
        let (tx, rx) = watch::channel(initial);
        (Self { tx }, rx)
    }
}

impl Navigator for RouteNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(event = "ui.route.changed", route = %route);
        self.tx.send_replace(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_publishes_route() {
        let (navigator, mut rx) = RouteNavigator::new(Route::Dashboard);
        assert_eq!(*rx.borrow_and_update(), Route::Dashboard);

        navigator.navigate(Route::Login);

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Route::Login);
    }
}
