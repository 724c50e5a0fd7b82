#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use super::html;
use super::html::RenderOptions;
use super::Translations;
use crate::domain::models::Event;
use crate::domain::models::ProbeView;

/// Widget-side copy of what the poller has reported so far. The probe list is
/// only ever replaced wholesale.
#[derive(Default)]
pub struct AppState {
    pub probes: Vec<ProbeView>,
    pub loaded: bool,
}

impl AppState {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::DevicesUpdated(probes) => {
                self.probes = probes;
                self.loaded = true;
            }
            // Nothing to mutate, the probe list is re-rendered as held.
            Event::RenderStale() => {}
        }
    }

    pub fn render(&self, options: &RenderOptions, translations: &Translations) -> String {
        if !self.loaded {
            return html::loading(translations);
        }

        return html::device_table(&self.probes, options);
    }
}
