use eframe::Storage;
use log::debug;

use crate::state::Settings;

const SETTINGS_KEY: &str = "wordlace/settings";

#[must_use]
pub(crate) fn load_settings(storage: &dyn Storage) -> Option<Settings> {
    let settings = eframe::get_value(storage, SETTINGS_KEY);
    if settings.is_none() {
        debug!("no saved settings, using defaults");
    }
    settings
}

pub(crate) fn save_settings(storage: &mut dyn Storage, settings: &Settings) {
    eframe::set_value(storage, SETTINGS_KEY, settings);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_settings_survive_save_and_load() {
        let mut storage = MemoryStorage::default();
        assert_eq!(load_settings(&storage), None);

        let settings = Settings {
            grid_size: 9,
            allow_diagonals: false,
            allow_backwards: true,
            words: "owl\nfox".to_owned(),
        };
        save_settings(&mut storage, &settings);
        assert_eq!(load_settings(&storage), Some(settings));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut storage = MemoryStorage::default();
        storage.set_string(SETTINGS_KEY, "(grid_size: 7)".to_owned());
        let settings = load_settings(&storage).unwrap();
        assert_eq!(settings.grid_size, 7);
        assert_eq!(settings.words, Settings::default().words);
    }
}
