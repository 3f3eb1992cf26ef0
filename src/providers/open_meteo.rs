//! Current conditions from Open-Meteo: geocode the city, then read the forecast.

use async_trait::async_trait;
use serde::Deserialize;

use super::{Provider, ProviderError, get_json, url_with_params};

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

pub struct OpenMeteo {
    client: reqwest::Client,
}

impl OpenMeteo {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn geocode(&self, city: &str) -> Result<Place, ProviderError> {
        let url = url_with_params(
            GEOCODING_URL,
            &[("name", city), ("count", "1"), ("language", "en"), ("format", "json")],
        )?;
        let resp: GeocodingResponse = get_json(&self.client, url).await?;
        resp.results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NotFound(city.to_string()))
    }

    async fn current(&self, place: &Place) -> Result<CurrentWeather, ProviderError> {
        let lat = place.latitude.to_string();
        let lon = place.longitude.to_string();
        let url = url_with_params(
            FORECAST_URL,
            &[("latitude", lat.as_str()), ("longitude", lon.as_str()), ("current_weather", "true")],
        )?;
        let resp: ForecastResponse = get_json(&self.client, url).await?;
        resp.current_weather
            .ok_or_else(|| ProviderError::Malformed("forecast has no current_weather".into()))
    }
}

#[async_trait]
impl Provider for OpenMeteo {
    fn name(&self) -> &str {
        "open-meteo"
    }

    async fn fetch(&self, city: &str) -> Result<String, ProviderError> {
        let place = self.geocode(city).await?;
        let weather = self.current(&place).await?;
        Ok(format_report(&place, &weather))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u16,
}

fn format_report(place: &Place, weather: &CurrentWeather) -> String {
    let location = match &place.country {
        Some(country) => format!("{}, {}", place.name, country),
        None => place.name.clone(),
    };
    format!(
        "Currently in {}: {:.0}°C and {}, with wind at {:.0} km/h.",
        location,
        weather.temperature,
        describe(weather.weathercode),
        weather.windspeed
    )
}

/// WMO weather interpretation codes.
fn describe(code: u16) -> &'static str {
    match code {
        0 => "clear skies",
        1 => "mostly clear",
        2 => "partly cloudy",
        3 => "overcast",
        45 | 48 => "foggy",
        51 | 53 | 55 => "drizzling",
        56 | 57 => "freezing drizzle",
        61 | 63 | 65 => "raining",
        66 | 67 => "freezing rain",
        71 | 73 | 75 | 77 => "snowing",
        80..=82 => "rain showers",
        85 | 86 => "snow showers",
        95 => "thunderstorms",
        96 | 99 => "thunderstorms with hail",
        _ => "unsettled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_without_results_decodes_empty() {
        let resp: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn format_report_with_country() {
        let place: Place = serde_json::from_str(
            r#"{"name": "Paris", "latitude": 48.85, "longitude": 2.35, "country": "France"}"#,
        )
        .unwrap();
        let weather: CurrentWeather = serde_json::from_str(
            r#"{"temperature": 18.4, "windspeed": 11.6, "winddirection": 250, "weathercode": 2}"#,
        )
        .unwrap();
        assert_eq!(
            format_report(&place, &weather),
            "Currently in Paris, France: 18°C and partly cloudy, with wind at 12 km/h."
        );
    }

    #[test]
    fn format_report_without_country() {
        let place = Place {
            name: "Atlantis".into(),
            latitude: 0.0,
            longitude: 0.0,
            country: None,
        };
        let weather = CurrentWeather {
            temperature: -3.0,
            windspeed: 0.0,
            weathercode: 71,
        };
        assert_eq!(
            format_report(&place, &weather),
            "Currently in Atlantis: -3°C and snowing, with wind at 0 km/h."
        );
    }

    #[test]
    fn forecast_missing_current_weather_decodes_none() {
        let resp: ForecastResponse = serde_json::from_str(r#"{"latitude": 1.0}"#).unwrap();
        assert!(resp.current_weather.is_none());
    }

    #[test]
    fn describe_unknown_code() {
        assert_eq!(describe(0), "clear skies");
        assert_eq!(describe(81), "rain showers");
        assert_eq!(describe(1234), "unsettled");
    }
}
