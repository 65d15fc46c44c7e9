use sphere_common::theme::PreferenceStore;
use gloo_console::error as console_error;
use web_sys::Storage;

// local preferences
//
// the theme flag is stored as a bare string, so a value written by hand
// ("light"/"dark") is read back as is.  storage can be missing entirely
// (disabled, or a sandboxed frame); failures only reach the console and the
// caller falls back to the system setting when nothing can be read.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

fn local_storage() -> Option<Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        console_error!("Local storage is unavailable");
    }
    storage
}

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };

        storage
            .set_item(key, value)
            .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
    }
}
