use anyhow::Result;

use super::credentials_missing;
use super::device_table;
use super::loading;
use super::RenderOptions;
use super::Translations;
use crate::domain::models::ProbeView;

fn options() -> RenderOptions {
    return RenderOptions {
        colored: false,
        show_cook_name: true,
        show_cooks_only: true,
        show_temperature_peak: false,
        show_temperature_target: true,
        show_time_elapsed: true,
        show_time_remaining: true,
    };
}

fn cooking_probe() -> ProbeView {
    return ProbeView {
        id: "probe-1".to_string(),
        internal: Some("36.7".to_string()),
        ambient: Some("151.2".to_string()),
        target: Some("90.0".to_string()),
        peak: Some("38.5".to_string()),
        name: Some("Brisket".to_string()),
        elapsed: Some("00:02:05".to_string()),
        remaining: Some("Calculating &hellip;".to_string()),
        is_cook: true,
    };
}

fn idle_probe() -> ProbeView {
    return ProbeView {
        id: "probe-2".to_string(),
        internal: Some("21.0".to_string()),
        ambient: Some("21.4".to_string()),
        is_cook: false,
        ..ProbeView::default()
    };
}

#[test]
fn it_renders_the_loading_notice() -> Result<()> {
    let translations = Translations::load("en")?;

    assert_eq!(
        loading(&translations),
        "<div class=\"dimmed light small\">Loading &hellip;</div>"
    );

    return Ok(());
}

#[test]
fn it_renders_the_credentials_notice() -> Result<()> {
    assert_eq!(
        credentials_missing(&Translations::load("en")?),
        "<div class=\"dimmed light small\">Please check your MEATER Cloud email and password settings.</div>"
    );
    assert_eq!(
        credentials_missing(&Translations::load("de")?),
        "<div class=\"dimmed light small\">Bitte E-Mail und Passwort für die MEATER Cloud in den Einstellungen prüfen.</div>"
    );

    return Ok(());
}

#[test]
fn it_renders_a_cooking_probe_with_the_default_columns() {
    let html = device_table(&[cooking_probe()], &options());

    assert_eq!(
        html,
        concat!(
            "<table class=\"small\">",
            "<tr>",
            "<td rowspan=\"2\">Brisket</td>",
            "<td rowspan=\"2\">90.0°</td>",
            "<td class=\"fa fa-home\">36.7°</td>",
            "<td>00:02:05</td>",
            "</tr><tr>",
            "<td>151.2°</td>",
            "<td>Calculating &hellip;</td>",
            "</tr>",
            "</table>"
        )
    );
}

#[test]
fn it_skips_idle_probes_when_showing_cooks_only() {
    let html = device_table(&[cooking_probe(), idle_probe()], &options());

    assert!(html.contains("Brisket"));
    assert!(!html.contains("21.0"));
}

#[test]
fn it_renders_idle_probes_with_temperatures_only() {
    let mut opts = options();
    opts.show_cooks_only = false;

    let html = device_table(&[idle_probe()], &opts);

    assert_eq!(
        html,
        concat!(
            "<table class=\"small\">",
            "<tr><td class=\"fa fa-home\">21.0°</td></tr>",
            "<tr><td>21.4°</td></tr>",
            "</table>"
        )
    );
}

#[test]
fn it_renders_the_peak_below_the_target_when_enabled() {
    let mut opts = options();
    opts.show_temperature_peak = true;

    let html = device_table(&[cooking_probe()], &opts);

    assert!(html.contains("<td>90.0°</td><td class=\"fa fa-home\">"));
    assert!(html.contains("</tr><tr><td>38.5°</td><td>151.2°</td>"));
    assert!(!html.contains("rowspan=\"2\">90.0°"));
}

#[test]
fn it_keeps_the_peak_cell_empty_when_the_value_is_absent() {
    let mut opts = options();
    opts.show_temperature_peak = true;

    let mut probe = cooking_probe();
    probe.peak = None;

    let html = device_table(&[probe], &opts);

    assert!(html.contains("</tr><tr><td></td><td>151.2°</td>"));
}

#[test]
fn it_drops_the_peak_without_a_target_column() {
    let mut opts = options();
    opts.show_temperature_peak = true;
    opts.show_temperature_target = false;

    let html = device_table(&[cooking_probe()], &opts);

    assert!(!html.contains("38.5"));
    assert!(!html.contains("90.0"));
}

#[test]
fn it_colors_the_first_row_of_each_pair() {
    let mut opts = options();
    opts.colored = true;

    let html = device_table(&[cooking_probe()], &opts);

    assert!(html.starts_with("<table class=\"small\"><tr class=\"colored\">"));
    assert!(html.contains("</tr><tr><td>151.2°</td>"));
}

#[test]
fn it_escapes_cook_names() {
    let mut probe = cooking_probe();
    probe.name = Some("R&D \"Ribs\" <low>".to_string());

    let html = device_table(&[probe], &options());

    assert!(html.contains("<td rowspan=\"2\">R&amp;D &quot;Ribs&quot; &lt;low&gt;</td>"));
}

#[test]
fn it_skips_the_name_cell_for_empty_names() {
    let mut probe = cooking_probe();
    probe.name = Some("".to_string());

    let html = device_table(&[probe], &options());

    assert!(!html.contains("rowspan=\"2\"></td>"));
    assert!(html.starts_with("<table class=\"small\"><tr><td rowspan=\"2\">90.0°</td>"));
}

#[test]
fn it_renders_empty_cells_for_absent_temperatures() {
    let mut probe = cooking_probe();
    probe.internal = None;

    let html = device_table(&[probe], &options());

    assert!(html.contains("<td class=\"fa fa-home\"></td>"));
    assert!(!html.contains("0°</td><td>00:02:05"));
}

#[test]
fn it_renders_an_empty_table_without_probes() {
    let html = device_table(&[], &options());

    assert_eq!(html, "<table class=\"small\"></table>");
}

#[test]
fn it_hides_every_optional_column_when_toggled_off() {
    let opts = RenderOptions {
        colored: false,
        show_cook_name: false,
        show_cooks_only: false,
        show_temperature_peak: false,
        show_temperature_target: false,
        show_time_elapsed: false,
        show_time_remaining: false,
    };

    let html = device_table(&[cooking_probe()], &opts);

    assert_eq!(
        html,
        concat!(
            "<table class=\"small\">",
            "<tr><td class=\"fa fa-home\">36.7°</td></tr>",
            "<tr><td>151.2°</td></tr>",
            "</table>"
        )
    );
}
