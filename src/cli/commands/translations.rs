//! Locale and translation lookup commands.

use crate::catalog::TranslationCatalog;
use crate::cli::TranslationsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::{LocaleData, LocalesData, TranslationData};

/// Execute the locales command.
///
/// # Errors
///
/// Returns an error if the translation catalog cannot be loaded.
pub fn execute_locales(json: bool, config: &Config) -> Result<()> {
    let catalog = TranslationCatalog::load(&config.translations_path)?;
    let locales = catalog.list_locales();

    if json {
        println!("{}", serde_json::to_string_pretty(&LocalesData { locales })?);
    } else {
        for locale in locales {
            println!("{locale}");
        }
    }

    Ok(())
}

/// Execute the translations command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, or the locale or key is absent.
pub fn execute(args: &TranslationsArgs, json: bool, config: &Config) -> Result<()> {
    let catalog = TranslationCatalog::load(&config.translations_path)?;
    let locale = args.locale.as_str();

    if let Some(key) = args.key.as_deref() {
        let value = catalog.lookup_key(locale, key)?;
        if json {
            let data = TranslationData { locale, key, value };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            println!("{value}");
        }
        return Ok(());
    }

    let translations = catalog.lookup_locale(locale)?;
    if json {
        let data = LocaleData {
            locale,
            translations,
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        for (key, value) in translations {
            println!("{key} = {value}");
        }
    }

    Ok(())
}
