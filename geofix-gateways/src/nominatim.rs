use anyhow::anyhow;
use geofix_core::{
    entities::Coordinate,
    gateways::geocode::{self, ProviderAddress, ReverseGeocodingGateway},
};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim requires an application specific user agent.
    pub user_agent: String,
    pub proxy: Option<String>,
    pub timeout: Duration,
    /// Preferred language of the results, e.g. `de` or `en-US`.
    pub language: Option<String>,
}

/// Reverse geocoding with a Nominatim server.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    reverse_url: String,
    language: Option<String>,
}

impl Nominatim {
    pub fn try_new(config: NominatimConfig) -> anyhow::Result<Self> {
        let NominatimConfig {
            base_url,
            user_agent,
            proxy,
            timeout,
            language,
        } = config;
        let mut builder = Client::builder().user_agent(user_agent).timeout(timeout);
        if let Some(proxy) = proxy {
            log::info!("Sending geocoding requests through proxy {proxy}");
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            reverse_url: reverse_url(&base_url),
            language,
        })
    }

    fn fetch(&self, pos: Coordinate) -> anyhow::Result<String> {
        let (lat, lng) = pos.to_lat_lng_deg();
        let mut query = vec![
            ("format", "jsonv2".to_owned()),
            ("addressdetails", "1".to_owned()),
            ("lat", lat.to_string()),
            ("lon", lng.to_string()),
        ];
        if let Some(language) = &self.language {
            query.push(("accept-language", language.clone()));
        }
        let response = self.client.get(&self.reverse_url).query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Unexpected response status {status}"));
        }
        Ok(response.text()?)
    }
}

impl ReverseGeocodingGateway for Nominatim {
    fn reverse_geocode(&self, pos: Coordinate) -> Result<ProviderAddress, geocode::Error> {
        log::debug!("Requesting address of {pos}");
        let body = self.fetch(pos)?;
        parse_reverse_response(&body)
    }
}

fn reverse_url(base_url: &str) -> String {
    format!("{}/reverse", base_url.trim_end_matches('/'))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReverseResponse {
    Error { error: Value },
    Place(Place),
}

#[derive(Debug, Deserialize)]
struct Place {
    display_name: String,
    #[serde(default)]
    address: Map<String, Value>,
    #[serde(default)]
    osm_id: i64,
    #[serde(default)]
    osm_type: String,
}

fn parse_reverse_response(body: &str) -> Result<ProviderAddress, geocode::Error> {
    let response: ReverseResponse = serde_json::from_str(body)
        .map_err(|err| anyhow!("Invalid reverse geocoding response: {err}"))?;
    match response {
        ReverseResponse::Error { error } => {
            log::debug!("No address found: {error}");
            Err(geocode::Error::NotFound)
        }
        ReverseResponse::Place(Place {
            display_name,
            address,
            osm_id,
            osm_type,
        }) => Ok(ProviderAddress {
            display_name,
            fields: address,
            entity_id: osm_id,
            entity_type: osm_type,
        }),
    }
}
