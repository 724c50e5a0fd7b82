#[cfg(test)]
#[path = "poll_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;

use super::SessionToken;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub initial: Duration,
    pub retry: Duration,
    pub steady: Duration,
}

impl Schedule {
    pub fn from_config() -> Result<Schedule> {
        return Ok(Schedule {
            initial: Duration::from_millis(Config::get(ConfigKey::InitialDelay).parse::<u64>()?),
            retry: Duration::from_millis(Config::get(ConfigKey::RetryDelay).parse::<u64>()?),
            steady: Duration::from_millis(Config::get(ConfigKey::UpdateInterval).parse::<u64>()?),
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PollPhase {
    Unauthenticated,
    PollingRetry,
    PollingSteady,
    Reauthenticating,
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextPoll {
    After(Duration),
    Halt,
}

/// Owns the session token, the loaded flag, and the polling phase. The
/// transition methods are pure so the scheduling rules can be tested without
/// any I/O behind them.
///
/// Phase walk: `Unauthenticated` until the startup login has run, then
/// `PollingRetry` until the first successful fetch promotes the state to
/// `PollingSteady`. A 401 detours through `Reauthenticating` and drops back to
/// whichever polling phase the loaded flag points at. Any other fetch failure
/// parks the state in `Halted`, which is terminal on purpose: the process
/// exits and leaves restart policy to its supervisor.
pub struct PollState {
    schedule: Schedule,
    phase: PollPhase,
    loaded: bool,
    token: Option<SessionToken>,
}

impl PollState {
    pub fn new(schedule: Schedule) -> PollState {
        return PollState {
            schedule,
            phase: PollPhase::Unauthenticated,
            loaded: false,
            token: None,
        };
    }

    pub fn phase(&self) -> PollPhase {
        return self.phase;
    }

    /// True once at least one fetch has succeeded. One-shot, a later 401 does
    /// not clear it.
    pub fn is_loaded(&self) -> bool {
        return self.loaded;
    }

    /// The token to put on the wire, or an empty string before the first
    /// successful login. An empty bearer draws a 401, which funnels the loop
    /// into the re-authentication path.
    pub fn bearer(&self) -> &str {
        if let Some(token) = &self.token {
            return token.as_str();
        }

        return "";
    }

    /// Records the startup login outcome and hands back the warmup delay
    /// before the first poll.
    pub fn begin(&mut self, token: Option<SessionToken>) -> Duration {
        if let Some(token) = token {
            self.token = Some(token);
        }
        self.phase = PollPhase::PollingRetry;

        return self.schedule.initial;
    }

    pub fn fetch_succeeded(&mut self) -> NextPoll {
        self.loaded = true;
        self.phase = PollPhase::PollingSteady;

        return NextPoll::After(self.schedule.steady);
    }

    pub fn fetch_unauthorized(&mut self) {
        self.phase = PollPhase::Reauthenticating;
    }

    /// A failed re-login keeps the previous token. Only a successful login
    /// ever overwrites it.
    pub fn relogin_finished(&mut self, token: Option<SessionToken>) -> NextPoll {
        if let Some(token) = token {
            self.token = Some(token);
        }

        if self.loaded {
            self.phase = PollPhase::PollingSteady;
            return NextPoll::After(self.schedule.steady);
        }

        self.phase = PollPhase::PollingRetry;
        return NextPoll::After(self.schedule.retry);
    }

    pub fn fetch_failed(&mut self) -> NextPoll {
        self.phase = PollPhase::Halted;

        return NextPoll::Halt;
    }
}
