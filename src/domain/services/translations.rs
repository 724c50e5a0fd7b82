#[cfg(test)]
#[path = "translations_test.rs"]
mod tests;

use std::collections::HashMap;

use anyhow::bail;
use anyhow::Result;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "translations/"]
struct Locales;

/// Locale strings bundled into the binary. Values may carry HTML entities and
/// are inserted into fragments unescaped.
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn load(language: &str) -> Result<Translations> {
        let mut asset = Locales::get(&format!("{language}.json"));
        if asset.is_none() {
            tracing::warn!(
                language = language,
                "no translations for language, falling back to en"
            );
            asset = Locales::get("en.json");
        }

        let asset = match asset {
            Some(asset) => asset,
            None => bail!("translation assets are missing from the binary"),
        };

        let entries: HashMap<String, String> = serde_json::from_slice(asset.data.as_ref())?;

        return Ok(Translations { entries });
    }

    /// Unknown keys fall back to the key itself so a missing entry stays
    /// visible instead of blanking a cell.
    pub fn get(&self, key: &str) -> String {
        if let Some(value) = self.entries.get(key) {
            return value.to_string();
        }

        return key.to_string();
    }

    pub fn list() -> Vec<String> {
        let mut languages = Locales::iter()
            .filter_map(|file| {
                return file
                    .as_ref()
                    .strip_suffix(".json")
                    .map(|language| return language.to_string());
            })
            .collect::<Vec<String>>();
        languages.sort();

        return languages;
    }
}
