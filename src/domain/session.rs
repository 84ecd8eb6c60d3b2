// Session lifecycle: not started -> running -> game over -> (restart) running.

/// Shown while the game-over message is still being produced.
pub const MESSAGE_PLACEHOLDER: &str = "Analyzing performance...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    Running,
    GameOver,
}

/// Game-over flavor text as the session sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOverMessage {
    Idle,
    Loading,
    Ready(String),
}

#[derive(Debug, Clone)]
pub struct Session {
    status: SessionStatus,
    score: u32,
    message: GameOverMessage,
    // Incremented on every (re)start; tags in-flight message requests.
    round: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: SessionStatus::NotStarted,
            score: 0,
            message: GameOverMessage::Idle,
            round: 0,
        }
    }
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn message(&self) -> &GameOverMessage {
        &self.message
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Text a renderer should show for the message slot, if any.
    pub fn display_message(&self) -> Option<&str> {
        match &self.message {
            GameOverMessage::Idle => None,
            GameOverMessage::Loading => Some(MESSAGE_PLACEHOLDER),
            GameOverMessage::Ready(text) => Some(text),
        }
    }

    /// Enters `Running` from `NotStarted` or `GameOver`, resetting score and message.
    ///
    /// Returns false (and changes nothing) if a session is already running.
    pub fn begin(&mut self) -> bool {
        if self.status == SessionStatus::Running {
            return false;
        }
        self.status = SessionStatus::Running;
        self.score = 0;
        self.message = GameOverMessage::Idle;
        self.round += 1;
        true
    }

    /// Fires the `Running -> GameOver` edge. Returns true only on the transition itself.
    pub fn end(&mut self) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.status = SessionStatus::GameOver;
        self.message = GameOverMessage::Loading;
        true
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Stores the game-over message for `round`; stale rounds are ignored.
    pub fn resolve_message(&mut self, round: u64, text: String) -> bool {
        if round != self.round || self.message != GameOverMessage::Loading {
            return false;
        }
        self.message = GameOverMessage::Ready(text);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_session_is_new_then_it_is_not_started_with_zero_score() {
        let session = Session::default();

        assert_eq!(session.status(), SessionStatus::NotStarted);
        assert_eq!(session.score(), 0);
        assert_eq!(session.display_message(), None);
    }

    #[test]
    fn when_end_is_called_twice_then_only_the_first_call_reports_the_edge() {
        let mut session = Session::default();
        assert!(session.begin());

        assert!(session.end());
        assert!(!session.end());
        assert_eq!(session.status(), SessionStatus::GameOver);
    }

    #[test]
    fn when_not_running_then_end_is_a_no_op() {
        let mut session = Session::default();

        assert!(!session.end());
        assert_eq!(session.status(), SessionStatus::NotStarted);
    }

    #[test]
    fn when_begin_is_called_while_running_then_nothing_changes() {
        let mut session = Session::default();
        session.begin();
        session.award(30);

        assert!(!session.begin());
        assert_eq!(session.score(), 30);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn when_restarted_after_game_over_then_score_and_message_reset() {
        let mut session = Session::default();
        session.begin();
        session.award(20);
        session.end();
        session.resolve_message(1, "gg".to_string());

        assert!(session.begin());
        assert_eq!(session.score(), 0);
        assert_eq!(session.message(), &GameOverMessage::Idle);
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn when_game_over_then_placeholder_shows_until_message_arrives() {
        let mut session = Session::default();
        session.begin();
        session.end();

        assert_eq!(session.display_message(), Some(MESSAGE_PLACEHOLDER));
        assert!(session.resolve_message(1, "Nice flying".to_string()));
        assert_eq!(session.display_message(), Some("Nice flying"));
    }

    #[test]
    fn when_message_belongs_to_an_earlier_round_then_it_is_ignored() {
        let mut session = Session::default();
        session.begin();
        session.end();
        session.begin();
        session.end();

        assert!(!session.resolve_message(1, "stale".to_string()));
        assert_eq!(session.message(), &GameOverMessage::Loading);
    }
}
