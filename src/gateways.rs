use crate::config::{Geocoding, GeocodingGateway};
use anyhow::{anyhow, Result};
use geofix_gateways::nominatim::{Nominatim, NominatimConfig};

pub fn geocoding_gateway(cfg: &Geocoding) -> Result<Nominatim> {
    match &cfg.gateway {
        Some(GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            proxy,
            timeout,
            language,
        }) => {
            log::info!("Use Nominatim geocoding gateway ({base_url})");
            Nominatim::try_new(NominatimConfig {
                base_url: base_url.clone(),
                user_agent: user_agent.clone(),
                proxy: proxy.clone(),
                timeout: *timeout,
                language: language.clone(),
            })
        }
        None => Err(anyhow!("No geocoding gateway configured")),
    }
}
