//! Session context
//!
//! Authentication and date-selection state for one interactive session.
//! Handlers receive this explicitly; nothing lives in ambient globals.

use chrono::Local;

/// Fixed single-user passcode
pub const PASSCODE: &str = "1512";

/// Today's date as an ISO date string
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Per-session state, created at session start and cleared at session end
#[derive(Debug, Clone)]
pub struct Session {
    authenticated: bool,
    selected_date: String,
}

impl Session {
    /// Start a fresh session: locked, with today selected
    pub fn start() -> Self {
        Self {
            authenticated: false,
            selected_date: today(),
        }
    }

    /// Attempt to unlock with a passcode. A wrong passcode leaves the
    /// current state unchanged.
    pub fn unlock(&mut self, passcode: &str) -> bool {
        if passcode == PASSCODE {
            self.authenticated = true;
        }
        self.authenticated
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn select_date(&mut self, date: &str) {
        self.selected_date = date.to_string();
    }

    /// End the session, restoring start-of-session state
    pub fn end(&mut self) {
        self.authenticated = false;
        self.selected_date = today();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked_on_today() {
        let session = Session::start();
        assert!(!session.is_authenticated());
        assert_eq!(session.selected_date(), today());
    }

    #[test]
    fn test_unlock() {
        let mut session = Session::start();
        assert!(!session.unlock("0000"));
        assert!(!session.is_authenticated());

        assert!(session.unlock(PASSCODE));
        assert!(session.is_authenticated());

        // A later wrong attempt does not re-lock
        assert!(session.unlock("0000"));
    }

    #[test]
    fn test_end_resets_state() {
        let mut session = Session::start();
        session.unlock(PASSCODE);
        session.select_date("2024-01-03");

        session.end();
        assert!(!session.is_authenticated());
        assert_eq!(session.selected_date(), today());
    }
}
