use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geofix.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_GEOCODING_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Config {
    pub db: Db,
    pub geocoding: Geocoding,
}

impl Config {
    /// Load the configuration file.
    ///
    /// The embedded defaults are used if no file has been
    /// specified and `geofix.toml` does not exist. The
    /// database URL can be overridden by `DATABASE_URL`.
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let cfg_string = fs::read_to_string(file_path).map_err(|err| {
                    anyhow!("Failed to read configuration file {}: {err}", file_path.display())
                })?;
                toml::from_str(&cfg_string)?
            }
            None => {
                log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                    Ok(cfg_string) => toml::from_str(&cfg_string)?,
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        log::info!(
                            "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                        );
                        raw::Config::default()
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    Nominatim {
        base_url: String,
        user_agent: String,
        proxy: Option<String>,
        timeout: Duration,
        language: Option<String>,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            geocoding,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                            proxy,
                            timeout,
                            language,
                        } = gateway.nominatim.ok_or_else(|| {
                            anyhow!("Missing 'nominatim' gateway configuration")
                        })?;
                        if user_agent.trim().is_empty() {
                            return Err(anyhow!(
                                "Missing user agent for the 'nominatim' gateway"
                            ));
                        }
                        GeocodingGateway::Nominatim {
                            base_url: base_url.unwrap_or_else(|| {
                                geofix_gateways::nominatim::DEFAULT_BASE_URL.to_string()
                            }),
                            user_agent,
                            proxy,
                            timeout: timeout.unwrap_or(DEFAULT_GEOCODING_TIMEOUT),
                            language,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self { db, geocoding })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cfg_string: &str) -> Result<Config> {
        let raw_config: raw::Config = toml::from_str(cfg_string)?;
        Config::try_from(raw_config)
    }

    #[test]
    fn convert_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!("geofix.sqlite", cfg.db.conn_sqlite);
        assert_eq!(4, cfg.db.conn_pool_size);
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::Nominatim { .. })
        ));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse(
            r#"
[geocoding]
gateway = "nominatim"
"#,
        )
        .unwrap();
        assert_eq!("geofix.sqlite", cfg.db.conn_sqlite);
        let Some(GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            timeout,
            ..
        }) = cfg.geocoding.gateway
        else {
            panic!("no geocoding gateway");
        };
        assert_eq!(geofix_gateways::nominatim::DEFAULT_BASE_URL, base_url);
        assert_eq!("geofix", user_agent);
        assert_eq!(DEFAULT_GEOCODING_TIMEOUT, timeout);
    }

    #[test]
    fn geocoding_without_gateway() {
        let cfg = parse(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 1
"#,
        )
        .unwrap();
        assert_eq!(":memory:", cfg.db.conn_sqlite);
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn reject_empty_connection_pool() {
        let res = parse(
            r#"
[db]
connection-sqlite = "geofix.sqlite"
connection-pool-size = 0
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn reject_empty_user_agent() {
        let res = parse(
            r#"
[geocoding]
gateway = "nominatim"

[gateway.nominatim]
user-agent = " "
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn fail_on_missing_config_file() {
        let res = Config::try_load_from_file_or_default(Some(Path::new(
            "this/file/does/not/exist.toml",
        )));
        assert!(res.is_err());
    }
}
