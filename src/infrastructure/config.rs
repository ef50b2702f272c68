use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub openweather: OpenWeatherSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenWeatherSettings {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Appended to geocoding queries, e.g. "Karnataka,IN"
    #[serde(default)]
    pub region_hint: Option<String>,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service"))
        .add_source(config::Environment::with_prefix("ADVISORY").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_config_from_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [openweather]
            api_key = "test-key"
            region_hint = "Karnataka,IN"
        "#;

        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        let parsed: ServiceConfig = settings.try_deserialize().unwrap();

        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.openweather.api_key, "test-key");
        assert_eq!(parsed.openweather.base_url, "https://api.openweathermap.org");
        assert_eq!(parsed.openweather.region_hint.as_deref(), Some("Karnataka,IN"));
    }
}
