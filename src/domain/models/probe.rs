#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;

use super::DeviceReading;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Formatting knobs applied while mapping raw readings to display strings.
/// `calculating` is the localized label substituted for the `-1` sentinel the
/// cloud reports while it is still estimating a remaining time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub whole_degrees: bool,
    pub calculating: String,
}

impl FormatOptions {
    pub fn from_config(calculating: &str) -> FormatOptions {
        return FormatOptions {
            whole_degrees: Config::get_bool(ConfigKey::RoundTemperature),
            calculating: calculating.to_string(),
        };
    }

    /// `36.66` becomes `"36.7"`, or `"37"` with `whole_degrees` set. Ties
    /// round up, so `36.5` is `"37"`. Absent readings stay absent rather than
    /// turning into a zero.
    pub fn temperature(&self, value: Option<f64>) -> Option<String> {
        let temperature = value?;
        if self.whole_degrees {
            let rounded = temperature.round();
            return Some(format!("{rounded:.0}"));
        }

        let rounded = (temperature * 10.0).round() / 10.0;
        return Some(format!("{rounded:.1}"));
    }

    /// Seconds to zero-padded `HH:MM:SS`, with hours running past 99 if a cook
    /// drags on that long.
    pub fn duration(&self, value: Option<i64>) -> Option<String> {
        let seconds = value?;
        if seconds == -1 {
            return Some(self.calculating.clone());
        }

        let hours = seconds / 3600;
        let minutes = (seconds - hours * 3600) / 60;
        let remainder = seconds - hours * 3600 - minutes * 60;

        return Some(format!("{hours:02}:{minutes:02}:{remainder:02}"));
    }
}

/// A probe ready for rendering. Every value is pre-formatted, absent readings
/// are `None` and render as empty cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeView {
    pub id: String,
    pub internal: Option<String>,
    pub ambient: Option<String>,
    pub target: Option<String>,
    pub peak: Option<String>,
    pub name: Option<String>,
    pub elapsed: Option<String>,
    pub remaining: Option<String>,
    pub is_cook: bool,
}

impl ProbeView {
    pub fn from_reading(reading: &DeviceReading, options: &FormatOptions) -> ProbeView {
        let cook = reading.cook.as_ref();

        return ProbeView {
            id: reading.id.to_string(),
            internal: options.temperature(reading.internal),
            ambient: options.temperature(reading.ambient),
            target: options.temperature(cook.and_then(|e| return e.target)),
            peak: options.temperature(cook.and_then(|e| return e.peak)),
            name: cook.and_then(|e| return e.name.clone()),
            elapsed: options.duration(cook.and_then(|e| return e.elapsed)),
            remaining: options.duration(cook.and_then(|e| return e.remaining)),
            is_cook: cook.is_some(),
        };
    }
}
