use super::ProbeView;

pub enum Event {
    /// Full replacement of the probe list after a successful poll.
    DevicesUpdated(Vec<ProbeView>),
    /// Re-render whatever is already held. Sent when a 401 interrupts polling
    /// so the widget refreshes from stale data while re-login runs.
    RenderStale(),
}
