#[cfg(test)]
#[path = "html_test.rs"]
mod tests;

use super::Translations;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ProbeView;

const DEGREE: &str = "°";

/// Column toggles for the probe table. Defaults mirror the config surface:
/// everything on except the peak column and row coloring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub colored: bool,
    pub show_cook_name: bool,
    pub show_cooks_only: bool,
    pub show_temperature_peak: bool,
    pub show_temperature_target: bool,
    pub show_time_elapsed: bool,
    pub show_time_remaining: bool,
}

impl RenderOptions {
    pub fn from_config() -> RenderOptions {
        return RenderOptions {
            colored: Config::get_bool(ConfigKey::Colored),
            show_cook_name: Config::get_bool(ConfigKey::ShowCookName),
            show_cooks_only: Config::get_bool(ConfigKey::ShowCooksOnly),
            show_temperature_peak: Config::get_bool(ConfigKey::ShowTemperaturePeak),
            show_temperature_target: Config::get_bool(ConfigKey::ShowTemperatureTarget),
            show_time_elapsed: Config::get_bool(ConfigKey::ShowTimeElapsed),
            show_time_remaining: Config::get_bool(ConfigKey::ShowTimeRemaining),
        };
    }
}

pub fn loading(translations: &Translations) -> String {
    return notice(&translations.get("LOADING"));
}

pub fn credentials_missing(translations: &Translations) -> String {
    return notice(&translations.get("CREDENTIALS_MISSING"));
}

fn notice(text: &str) -> String {
    return format!("<div class=\"dimmed light small\">{text}</div>");
}

/// Renders the probe table fragment. Each probe takes a pair of rows: internal
/// temperature and elapsed time on top, ambient temperature and remaining time
/// below, with the cook name and target spanning both.
pub fn device_table(probes: &[ProbeView], options: &RenderOptions) -> String {
    let mut html = String::from("<table class=\"small\">");

    for probe in probes {
        if options.show_cooks_only && !probe.is_cook {
            continue;
        }
        push_probe_rows(&mut html, probe, options);
    }

    html.push_str("</table>");

    return html;
}

fn push_probe_rows(html: &mut String, probe: &ProbeView, options: &RenderOptions) {
    let target_cell = options.show_temperature_target && probe.target.is_some();
    // The peak column sits below the target. Without a target column there is
    // nowhere to put it.
    let peak_cell = options.show_temperature_peak && target_cell;

    if options.colored {
        html.push_str("<tr class=\"colored\">");
    } else {
        html.push_str("<tr>");
    }

    if options.show_cook_name {
        if let Some(name) = probe.name.as_deref().filter(|name| return !name.is_empty()) {
            html.push_str(&format!("<td rowspan=\"2\">{}</td>", escape(name)));
        }
    }

    if target_cell {
        let target = probe.target.as_deref().unwrap_or_default();
        if peak_cell {
            html.push_str(&format!("<td>{target}{DEGREE}</td>"));
        } else {
            html.push_str(&format!("<td rowspan=\"2\">{target}{DEGREE}</td>"));
        }
    }

    push_temperature(html, probe.internal.as_deref(), Some("fa fa-home"));

    if options.show_time_elapsed {
        if let Some(elapsed) = probe.elapsed.as_deref() {
            html.push_str(&format!("<td>{elapsed}</td>"));
        }
    }

    html.push_str("</tr><tr>");

    if peak_cell {
        push_temperature(html, probe.peak.as_deref(), None);
    }

    push_temperature(html, probe.ambient.as_deref(), None);

    if options.show_time_remaining {
        if let Some(remaining) = probe.remaining.as_deref() {
            html.push_str(&format!("<td>{remaining}</td>"));
        }
    }

    html.push_str("</tr>");
}

fn push_temperature(html: &mut String, value: Option<&str>, class: Option<&str>) {
    // Absent readings stay empty, the degree suffix only follows a value.
    let text = value
        .map(|temperature| return format!("{temperature}{DEGREE}"))
        .unwrap_or_default();

    match class {
        Some(class) => html.push_str(&format!("<td class=\"{class}\">{text}</td>")),
        None => html.push_str(&format!("<td>{text}</td>")),
    }
}

/// Cook names are the only strings in a fragment that the cloud account owner
/// controls, everything else is formatted locally or ships with the binary.
fn escape(text: &str) -> String {
    return text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");
}
