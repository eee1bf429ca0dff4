use anyhow::{Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_NASA_API_KEY: &str = "DEMO_KEY";

const CONFIG_DIR_NAME: &str = "stellina";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_NOVELTY_WINDOW_DAYS: u64 = 7;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub arcsecond_api_key: Option<String>,
    pub nasa_api_key: String,
    pub cache_ttl: Duration,
    pub novelty_window: Duration,
    pub request_timeout: Duration,
    pub endpoints: Endpoints,
}

/// Upstream service URLs. Every external call goes through one of these so
/// deployments (and tests) can point the app at substitutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub gemini: String,
    pub visible_planets: String,
    pub arcsecond: String,
    pub geolocation: String,
    pub hubble: String,
    pub skyview: String,
    pub sdss: String,
    pub wikimedia: String,
    pub apod: String,
    pub fallback_image: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gemini: DEFAULT_GEMINI_BASE_URL.to_string(),
            visible_planets: "https://api.visibleplanets.dev/v3".to_string(),
            arcsecond: "https://api.arcsecond.io".to_string(),
            geolocation: "https://ipapi.co/json/".to_string(),
            hubble: "https://hubblesite.org/api/v3/images".to_string(),
            skyview: "https://skyview.gsfc.nasa.gov/current/cgi/pskcall".to_string(),
            sdss: "https://skyserver.sdss.org/dr16/SkyServerWS/ImgCutout/getjpeg".to_string(),
            wikimedia: "https://commons.wikimedia.org/w/api.php".to_string(),
            apod: "https://api.nasa.gov/planetary/apod".to_string(),
            fallback_image: "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?w=1200"
                .to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFileConfig {
    gemini_api_key: Option<String>,
    gemini_model: Option<String>,
    arcsecond_api_key: Option<String>,
    nasa_api_key: Option<String>,
    cache_ttl_secs: Option<u64>,
    novelty_window_days: Option<u64>,
    request_timeout_secs: Option<u64>,
    endpoints: Option<RawEndpoints>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEndpoints {
    gemini: Option<String>,
    visible_planets: Option<String>,
    arcsecond: Option<String>,
    geolocation: Option<String>,
    hubble: Option<String>,
    skyview: Option<String>,
    sdss: Option<String>,
    wikimedia: Option<String>,
    apod: Option<String>,
    fallback_image: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    pub fn load_with_path(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => discover_config_path()?,
        };
        let file_config = load_file_config(&config_path, explicit_path.is_some())?;

        dotenvy::dotenv().ok();

        let file_api_key = file_config
            .as_ref()
            .and_then(|cfg| cfg.gemini_api_key.as_ref())
            .and_then(|value| non_empty(value).map(ToOwned::to_owned));
        let file_model = file_config
            .as_ref()
            .and_then(|cfg| cfg.gemini_model.as_ref())
            .and_then(|value| non_empty(value).map(ToOwned::to_owned));
        let file_arcsecond_key = file_config
            .as_ref()
            .and_then(|cfg| cfg.arcsecond_api_key.as_ref())
            .and_then(|value| non_empty(value).map(ToOwned::to_owned));
        let file_nasa_key = file_config
            .as_ref()
            .and_then(|cfg| cfg.nasa_api_key.as_ref())
            .and_then(|value| non_empty(value).map(ToOwned::to_owned));

        let cache_ttl_secs = file_config
            .as_ref()
            .and_then(|cfg| cfg.cache_ttl_secs)
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);
        let novelty_window_days = file_config
            .as_ref()
            .and_then(|cfg| cfg.novelty_window_days)
            .unwrap_or(DEFAULT_NOVELTY_WINDOW_DAYS);
        let request_timeout_secs = file_config
            .as_ref()
            .and_then(|cfg| cfg.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let mut endpoints =
            resolve_endpoints(file_config.as_ref().and_then(|cfg| cfg.endpoints.as_ref()));
        if let Some(base_url) = env_non_empty("GEMINI_BASE_URL") {
            endpoints.gemini = base_url;
        }

        Ok(Self {
            gemini_api_key: env_non_empty("GEMINI_API_KEY").or(file_api_key),
            gemini_model: env_non_empty("GEMINI_MODEL")
                .or(file_model)
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            arcsecond_api_key: env_non_empty("ARCSECOND_API_KEY").or(file_arcsecond_key),
            nasa_api_key: env_non_empty("NASA_API_KEY")
                .or(file_nasa_key)
                .unwrap_or_else(|| DEFAULT_NASA_API_KEY.to_string()),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            novelty_window: Duration::from_secs(novelty_window_days * 24 * 60 * 60),
            request_timeout: Duration::from_secs(request_timeout_secs),
            endpoints,
        })
    }
}

fn discover_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg.trim();
        if trimmed.is_empty() {
            bail!("Failed to resolve config path: XDG_CONFIG_HOME is set but empty");
        }

        return Ok(PathBuf::from(trimmed)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME));
    }

    let home = dirs::home_dir().ok_or_else(|| {
        anyhow!("Failed to resolve config path: HOME directory is unavailable")
    })?;

    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

fn load_file_config(config_path: &Path, explicit: bool) -> Result<Option<RawFileConfig>> {
    if !config_path.is_file() {
        if explicit {
            bail!(
                "Failed to load config {}: file not found",
                config_path.display()
            );
        }
        return Ok(None);
    }

    let config_text = fs::read_to_string(config_path).map_err(|err| {
        anyhow!(
            "Failed to load config {}: unable to read file: {err}",
            config_path.display()
        )
    })?;

    toml::from_str(&config_text).map(Some).map_err(|err| {
        anyhow!(
            "Failed to load config {}: {err}",
            config_path.display()
        )
    })
}

fn resolve_endpoints(raw: Option<&RawEndpoints>) -> Endpoints {
    let mut endpoints = Endpoints::default();
    let Some(raw) = raw else {
        return endpoints;
    };

    let fields = [
        (&mut endpoints.gemini, &raw.gemini),
        (&mut endpoints.visible_planets, &raw.visible_planets),
        (&mut endpoints.arcsecond, &raw.arcsecond),
        (&mut endpoints.geolocation, &raw.geolocation),
        (&mut endpoints.hubble, &raw.hubble),
        (&mut endpoints.skyview, &raw.skyview),
        (&mut endpoints.sdss, &raw.sdss),
        (&mut endpoints.wikimedia, &raw.wikimedia),
        (&mut endpoints.apod, &raw.apod),
        (&mut endpoints.fallback_image, &raw.fallback_image),
    ];
    for (target, value) in fields {
        if let Some(value) = value.as_ref().and_then(|value| non_empty(value)) {
            *target = value.to_string();
        }
    }

    endpoints
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_GEMINI_MODEL, DEFAULT_NASA_API_KEY, Endpoints};
    use serial_test::serial;
    use std::env;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;

    fn reset_vars() {
        unsafe {
            env::remove_var("GEMINI_API_KEY");
            env::remove_var("GEMINI_MODEL");
            env::remove_var("GEMINI_BASE_URL");
            env::remove_var("ARCSECOND_API_KEY");
            env::remove_var("NASA_API_KEY");
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn with_cwd<T>(path: &Path, f: impl FnOnce() -> T) -> T {
        let cwd = env::current_dir().expect("current dir");
        env::set_current_dir(path).expect("set current dir");
        let result = f();
        env::set_current_dir(cwd).expect("restore current dir");
        result
    }

    #[test]
    #[serial]
    fn load_uses_defaults_when_unset() {
        let tmp = tempfile::tempdir().expect("tempdir");
        reset_vars();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", tmp.path());
        }

        let cfg = with_cwd(tmp.path(), || AppConfig::load().expect("load config"));
        assert_eq!(cfg.gemini_api_key, None);
        assert_eq!(cfg.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.nasa_api_key, DEFAULT_NASA_API_KEY);
        assert_eq!(cfg.cache_ttl, Duration::from_secs(3600));
        assert_eq!(cfg.novelty_window, Duration::from_secs(7 * 24 * 60 * 60));
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.endpoints, Endpoints::default());
    }

    #[test]
    #[serial]
    fn load_env_overrides_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config_dir = tmp.path().join("stellina");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(
            config_dir.join("config.toml"),
            r#"
gemini_api_key = "file_key"
gemini_model = "file_model"
arcsecond_api_key = "file_arcsecond"
"#,
        )
        .expect("write config");

        reset_vars();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", tmp.path());
            env::set_var("GEMINI_API_KEY", "os_key");
            env::set_var("GEMINI_MODEL", "os_model");
        }

        let cfg = with_cwd(tmp.path(), || AppConfig::load().expect("load config"));
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("os_key"));
        assert_eq!(cfg.gemini_model, "os_model");
        assert_eq!(cfg.arcsecond_api_key.as_deref(), Some("file_arcsecond"));
    }

    #[test]
    #[serial]
    fn load_does_not_override_existing_os_env_with_dotenv() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::write(
            tmp.path().join(".env"),
            "GEMINI_API_KEY=dotenv_key\nGEMINI_MODEL=dotenv_model\n",
        )
        .expect("write env file");

        reset_vars();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", tmp.path());
            env::set_var("GEMINI_API_KEY", "os_key");
            env::set_var("GEMINI_MODEL", "os_model");
        }

        let cfg = with_cwd(tmp.path(), || AppConfig::load().expect("load config"));

        assert_eq!(cfg.gemini_api_key.as_deref(), Some("os_key"));
        assert_eq!(cfg.gemini_model, "os_model");
    }

    #[test]
    #[serial]
    fn load_parses_durations_and_endpoints_from_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config_dir = tmp.path().join("stellina");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(
            config_dir.join("config.toml"),
            r#"
cache_ttl_secs = 60
novelty_window_days = 1
request_timeout_secs = 5

[endpoints]
visible_planets = "http://localhost:9000/v3"
geolocation = "http://localhost:9000/json/"
"#,
        )
        .expect("write config");

        reset_vars();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", tmp.path());
        }

        let cfg = with_cwd(tmp.path(), || AppConfig::load().expect("load config"));
        assert_eq!(cfg.cache_ttl, Duration::from_secs(60));
        assert_eq!(cfg.novelty_window, Duration::from_secs(24 * 60 * 60));
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
        assert_eq!(cfg.endpoints.visible_planets, "http://localhost:9000/v3");
        assert_eq!(cfg.endpoints.geolocation, "http://localhost:9000/json/");
        // Untouched entries keep their defaults.
        assert_eq!(cfg.endpoints.hubble, Endpoints::default().hubble);
    }

    #[test]
    #[serial]
    fn load_gemini_base_url_env_overrides_endpoint() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config_dir = tmp.path().join("stellina");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(
            config_dir.join("config.toml"),
            r#"
[endpoints]
gemini = "http://file-endpoint:1234"
"#,
        )
        .expect("write config");

        reset_vars();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", tmp.path());
            env::set_var("GEMINI_BASE_URL", "http://env-endpoint:5678");
        }

        let cfg = with_cwd(tmp.path(), || AppConfig::load().expect("load config"));
        assert_eq!(cfg.endpoints.gemini, "http://env-endpoint:5678");
    }

    #[test]
    #[serial]
    fn load_fails_when_xdg_config_home_is_empty() {
        reset_vars();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", "   ");
        }

        let err = AppConfig::load().expect_err("load should fail");
        assert!(
            err.to_string()
                .contains("Failed to resolve config path: XDG_CONFIG_HOME is set but empty")
        );
    }

    #[test]
    #[serial]
    fn load_fails_on_unknown_root_key() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config_dir = tmp.path().join("stellina");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(config_dir.join("config.toml"), "unknown_key = 1").expect("write config");

        reset_vars();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", tmp.path());
        }

        let err = with_cwd(tmp.path(), || AppConfig::load().expect_err("load should fail"));
        assert!(err.to_string().contains("Failed to load config"));
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    #[serial]
    fn load_with_explicit_path_reads_that_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config_path = tmp.path().join("custom.toml");
        fs::write(&config_path, r#"gemini_model = "custom_model""#).expect("write config");

        reset_vars();
        let cfg = with_cwd(tmp.path(), || {
            AppConfig::load_with_path(Some(&config_path)).expect("load config")
        });
        assert_eq!(cfg.gemini_model, "custom_model");
    }

    #[test]
    #[serial]
    fn load_with_explicit_path_fails_when_missing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config_path = tmp.path().join("missing.toml");

        reset_vars();
        let err = with_cwd(tmp.path(), || {
            AppConfig::load_with_path(Some(&config_path)).expect_err("load should fail")
        });
        assert!(err.to_string().contains("file not found"));
    }
}
