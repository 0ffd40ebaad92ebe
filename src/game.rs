use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::config::GameConfig;
use crate::constants::COUNTDOWN_PERIOD;
use crate::input::InputState;
use crate::session::{Phase, Session, TickEvents};

/// Fixed-period timer fed with elapsed wall time.
///
/// Partial periods carry over between calls; a cancelled timer never fires
/// until it is re-armed.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    accumulated: Duration,
    active: bool,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        IntervalTimer {
            period,
            accumulated: Duration::ZERO,
            active: true,
        }
    }

    /// Adds `elapsed` and returns how many whole periods completed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.active || self.period.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn rearm(&mut self) {
        self.active = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Drives a session from two scheduled sources: the per-frame tick and the
/// one-second countdown. Both are cancelled together on teardown.
pub struct GameLoop {
    session: Session,
    countdown: IntervalTimer,
    frame_active: bool,
    restart_held: bool,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self::with_session(Session::new(config)?))
    }

    pub fn with_session(session: Session) -> Self {
        GameLoop {
            session,
            countdown: IntervalTimer::new(COUNTDOWN_PERIOD),
            frame_active: true,
            restart_held: false,
        }
    }

    /// One frame: pending countdown seconds first, then a single tick.
    /// Returns `None` once the loop has been torn down.
    pub fn frame(&mut self, input: &InputState, elapsed: Duration) -> Option<TickEvents> {
        if !self.frame_active {
            return None;
        }

        if input.restart && !self.restart_held {
            self.restart();
        }
        self.restart_held = input.restart;

        for _ in 0..self.countdown.advance(elapsed) {
            if self.session.on_second_elapsed().is_some() {
                break;
            }
        }

        let events = self.session.tick(input);
        if self.session.phase() == Phase::GameOver && self.countdown.is_active() {
            debug!("Countdown stopped");
            self.countdown.cancel();
        }
        Some(events)
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.countdown.rearm();
    }

    /// Cancels both the frame task and the countdown.
    pub fn teardown(&mut self) {
        if !self.frame_active {
            return;
        }
        self.frame_active = false;
        self.countdown.cancel();
        info!("Game loop torn down");
    }

    pub fn is_running(&self) -> bool {
        self.frame_active
    }

    pub fn is_countdown_active(&self) -> bool {
        self.countdown.is_active()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.teardown();
    }
}
