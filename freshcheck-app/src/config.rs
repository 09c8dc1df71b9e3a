use anyhow::Result;
use std::env;

use freshcheck_core::UserLocation;
use vision_client::DEFAULT_VISION_MODEL;

/// FreshCheck 配置，从环境变量加载
pub struct AppConfig {
    /// 视觉服务 API Key。仅 `assess` 需要；其余命令不访问 AI 服务。
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub vision_model: String,
    pub database_url: String,
    pub log_file: String,
}

impl AppConfig {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn load() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let vision_model =
            env::var("VISION_MODEL").unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());
        let database_url =
            env::var("FRESHCHECK_DB").unwrap_or_else(|_| "freshcheck.db".to_string());
        let log_file =
            env::var("FRESHCHECK_LOG").unwrap_or_else(|_| "logs/freshcheck.log".to_string());

        Ok(Self {
            openai_api_key,
            openai_base_url,
            vision_model,
            database_url,
            log_file,
        })
    }

    /// The API key, or an actionable error for commands that call the AI service.
    pub fn require_api_key(&self) -> Result<&str> {
        self.openai_api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!("OPENAI_API_KEY is required for assessment. Set it in .env or environment.")
        })
    }
}

/// One-shot location read from `FRESHCHECK_LAT` / `FRESHCHECK_LON`.
///
/// 对应原版的一次性 geolocation 读取：缺失或无法解析时保持 unknown，
/// 只影响首页的地域提示。
pub fn load_location() -> UserLocation {
    let lat = env::var("FRESHCHECK_LAT").ok();
    let lon = env::var("FRESHCHECK_LON").ok();
    match (lat, lon) {
        (Some(lat), Some(lon)) => match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => UserLocation::from_coords(latitude, longitude),
            _ => {
                tracing::warn!(lat, lon, "FRESHCHECK_LAT/LON not parseable, region stays unknown");
                UserLocation::unknown()
            }
        },
        _ => UserLocation::unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshcheck_core::Region;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("VISION_MODEL");
        env::remove_var("FRESHCHECK_DB");
        env::remove_var("FRESHCHECK_LOG");

        let config = AppConfig::load().unwrap();

        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.vision_model, "gpt-4o-mini");
        assert_eq!(config.database_url, "freshcheck.db");
        assert_eq!(config.log_file, "logs/freshcheck.log");
        assert!(config.require_api_key().is_err());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        env::remove_var("OPENAI_API_KEY");
        env::set_var("OPENAI_API_KEY", "custom_key");
        env::remove_var("OPENAI_BASE_URL");
        env::set_var("OPENAI_BASE_URL", "https://custom.api.com/v1");
        env::remove_var("VISION_MODEL");
        env::set_var("VISION_MODEL", "gpt-4o");
        env::remove_var("FRESHCHECK_DB");
        env::set_var("FRESHCHECK_DB", "sqlite:/tmp/fc.db");
        env::remove_var("FRESHCHECK_LOG");
        env::set_var("FRESHCHECK_LOG", "/tmp/fc.log");

        let config = AppConfig::load().unwrap();

        assert_eq!(config.openai_api_key.as_deref(), Some("custom_key"));
        assert_eq!(config.require_api_key().unwrap(), "custom_key");
        assert_eq!(config.openai_base_url, "https://custom.api.com/v1");
        assert_eq!(config.vision_model, "gpt-4o");
        assert_eq!(config.database_url, "sqlite:/tmp/fc.db");
        assert_eq!(config.log_file, "/tmp/fc.log");
    }

    #[test]
    #[serial]
    fn test_empty_api_key_counts_as_unset() {
        env::remove_var("OPENAI_API_KEY");
        env::set_var("OPENAI_API_KEY", "");

        let config = AppConfig::load().unwrap();

        assert!(config.openai_api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_load_location_north_south_and_missing() {
        env::remove_var("FRESHCHECK_LAT");
        env::remove_var("FRESHCHECK_LON");
        assert_eq!(load_location().region, Region::Unknown);

        env::set_var("FRESHCHECK_LAT", "39.9");
        env::set_var("FRESHCHECK_LON", "116.4");
        assert_eq!(load_location().region, Region::North);

        env::set_var("FRESHCHECK_LAT", "23.1");
        env::set_var("FRESHCHECK_LON", "113.3");
        assert_eq!(load_location().region, Region::South);

        env::set_var("FRESHCHECK_LAT", "thirty-nine");
        assert_eq!(load_location().region, Region::Unknown);

        env::remove_var("FRESHCHECK_LAT");
        env::remove_var("FRESHCHECK_LON");
    }
}
