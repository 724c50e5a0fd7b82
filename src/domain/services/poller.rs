#[cfg(test)]
#[path = "poller_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::ApiError;
use crate::domain::models::CloudApi;
use crate::domain::models::Credentials;
use crate::domain::models::Event;
use crate::domain::models::FormatOptions;
use crate::domain::models::NextPoll;
use crate::domain::models::PollState;
use crate::domain::models::ProbeView;
use crate::domain::models::Schedule;
use crate::domain::models::SessionToken;

/// Logs in once, then fetches the device list on a timer and feeds the widget
/// through the event channel. Requests run strictly one at a time: every
/// network call is awaited before the next delay is chosen, so a slow cycle
/// can never be overtaken by a later one.
pub struct Poller<C: CloudApi> {
    api: C,
    credentials: Credentials,
    format: FormatOptions,
    state: PollState,
    tx: mpsc::UnboundedSender<Event>,
}

impl<C: CloudApi> Poller<C> {
    pub fn new(
        api: C,
        credentials: Credentials,
        schedule: Schedule,
        format: FormatOptions,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Poller<C> {
        return Poller {
            api,
            credentials,
            format,
            state: PollState::new(schedule),
            tx,
        };
    }

    /// Runs until polling halts. A halt is terminal, the returned error ends
    /// the process so a supervisor can decide about a restart.
    pub async fn run(&mut self) -> Result<()> {
        let token = self.try_login().await;
        let warmup = self.state.begin(token);
        time::sleep(warmup).await;

        loop {
            match self.poll_once().await? {
                NextPoll::After(delay) => time::sleep(delay).await,
                NextPoll::Halt => {
                    bail!("device polling halted after an unrecoverable error")
                }
            }
        }
    }

    async fn try_login(&self) -> Option<SessionToken> {
        match self.api.login(&self.credentials).await {
            Ok(token) => {
                tracing::debug!("session token acquired");
                return Some(token);
            }
            Err(err) => {
                tracing::error!(error = ?err, "could not log in to the cloud account");
                return None;
            }
        }
    }

    async fn poll_once(&mut self) -> Result<NextPoll> {
        match self.api.fetch_devices(self.state.bearer()).await {
            Ok(readings) => {
                let probes = readings
                    .iter()
                    .map(|reading| return ProbeView::from_reading(reading, &self.format))
                    .collect::<Vec<ProbeView>>();

                tracing::debug!(devices = probes.len(), "device list refreshed");
                self.tx.send(Event::DevicesUpdated(probes))?;

                return Ok(self.state.fetch_succeeded());
            }
            Err(ApiError::Unauthorized) => {
                tracing::warn!("session token was rejected, logging in again");

                // Refresh the widget from the held data before the re-login
                // round trip adds its own delay.
                self.tx.send(Event::RenderStale())?;

                self.state.fetch_unauthorized();
                let token = self.try_login().await;

                return Ok(self.state.relogin_finished(token));
            }
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    phase = %self.state.phase(),
                    "could not load device data, polling stops here"
                );

                return Ok(self.state.fetch_failed());
            }
        }
    }
}
