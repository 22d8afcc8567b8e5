//! Build-time configuration for the provider endpoint with an optional
//! runtime override read from `window.AULA_CONFIG`, so static deployments
//! can repoint the app without rebuilding. Values here are public; the anon
//! key is the provider's publishable key, not a secret.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_anon_key: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies
    /// runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("AULA_WEB_API_BASE_URL").unwrap_or("");
        let api_anon_key = option_env!("AULA_WEB_API_ANON_KEY").unwrap_or("");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            api_anon_key: api_anon_key.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    api_anon_key: Option<String>,
}

/// Empty or whitespace-only runtime values never clobber build-time ones.
fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url.as_deref().and_then(normalize_runtime_value) {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.api_anon_key.as_deref().and_then(normalize_runtime_value) {
        config.api_anon_key = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AULA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        api_anon_key: read_runtime_value(&object, "api_anon_key"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://project.supabase.co "),
            Some("https://project.supabase.co".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            api_anon_key: "default-key".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: Some(String::new()),
            api_anon_key: Some("   ".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.api_anon_key, "default-key");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            api_anon_key: "default-key".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: Some("https://api.override".to_string()),
            api_anon_key: Some(" override-key ".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.api_anon_key, "override-key");
    }
}
