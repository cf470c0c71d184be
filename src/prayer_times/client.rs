use chrono::NaiveTime;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{City, PrayerEntry, PrayerName};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("timing source answered with HTTP {0}")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("bad {prayer} time '{value}'")]
    MalformedTime { prayer: PrayerName, value: String },
}

/// One day of timings for a city.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingsDay {
    pub entries: Vec<PrayerEntry>,
    /// IANA zone the source computed the times in
    pub timezone: Option<String>,
    pub readable_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Payload,
}

#[derive(Debug, Deserialize)]
struct Payload {
    timings: Timings,
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    date: Option<DateInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Timings {
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

#[derive(Debug, Deserialize)]
struct Meta {
    timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DateInfo {
    readable: Option<String>,
}

pub struct TimingsClient {
    client: Client,
    base_url: String,
    method: u8,
}

impl TimingsClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, api))
    }

    fn with_client(client: Client, api: &ApiConfig) -> Self {
        Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            method: api.method,
        }
    }

    pub fn fetch(&self, city: &City) -> Result<TimingsDay, FetchError> {
        let url = format!("{}/timingsByCity", self.base_url);
        log::debug!("Fetching timings for {} from {}", city.label(), url);

        let method = self.method.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("city", city.name),
                ("country", city.country),
                ("method", method.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        parse_timings(&body)
    }
}

/// Parse a `timingsByCity` response body into the six entries in canonical order.
pub fn parse_timings(body: &str) -> Result<TimingsDay, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let t = envelope.data.timings;

    let values = [t.fajr, t.sunrise, t.dhuhr, t.asr, t.maghrib, t.isha];

    let entries = PrayerName::all()
        .into_iter()
        .zip(values)
        .map(|(name, value)| parse_entry(name, &value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TimingsDay {
        entries,
        timezone: envelope.data.meta.and_then(|m| m.timezone),
        readable_date: envelope.data.date.and_then(|d| d.readable),
    })
}

// Some methods append the zone, e.g. "05:30 (IST)".
fn parse_entry(name: PrayerName, value: &str) -> Result<PrayerEntry, FetchError> {
    let token = value.split_whitespace().next().unwrap_or_default();
    let time = NaiveTime::parse_from_str(token, "%H:%M").map_err(|_| FetchError::MalformedTime {
        prayer: name,
        value: value.to_string(),
    })?;
    Ok(PrayerEntry::new(name, token, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    const DUBLIN: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "05:30",
                "Sunrise": "06:45",
                "Dhuhr": "12:15",
                "Asr": "15:30",
                "Sunset": "17:58",
                "Maghrib": "18:00",
                "Isha": "19:30",
                "Imsak": "05:20",
                "Midnight": "00:08"
            },
            "date": { "readable": "14 Mar 2024", "timestamp": "1710374400" },
            "meta": { "timezone": "Europe/Dublin", "method": { "id": 2 } }
        }
    }"#;

    #[test]
    fn test_parse_keeps_canonical_order_and_ignores_extras() {
        let day = parse_timings(DUBLIN).unwrap();
        let rows: Vec<(PrayerName, &str)> = day
            .entries
            .iter()
            .map(|e| (e.name, e.label.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (PrayerName::Fajr, "05:30"),
                (PrayerName::Sunrise, "06:45"),
                (PrayerName::Dhuhr, "12:15"),
                (PrayerName::Asr, "15:30"),
                (PrayerName::Maghrib, "18:00"),
                (PrayerName::Isha, "19:30"),
            ]
        );
        assert_eq!(day.timezone.as_deref(), Some("Europe/Dublin"));
        assert_eq!(day.readable_date.as_deref(), Some("14 Mar 2024"));
    }

    #[test]
    fn test_parse_strips_zone_suffix() {
        let body = DUBLIN.replace("\"05:30\"", "\"05:30 (IST)\"");
        let day = parse_timings(&body).unwrap();
        assert_eq!(day.entries[0].label, "05:30");
        assert_eq!(day.entries[0].time, NaiveTime::from_hms_opt(5, 30, 0).unwrap());
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let body = DUBLIN.replace("\"Isha\": \"19:30\",", "");
        assert!(matches!(parse_timings(&body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_malformed_time_names_the_prayer() {
        let body = DUBLIN.replace("\"15:30\"", "\"half past three\"");
        match parse_timings(&body) {
            Err(FetchError::MalformedTime { prayer, value }) => {
                assert_eq!(prayer, PrayerName::Asr);
                assert_eq!(value, "half past three");
            }
            other => panic!("expected MalformedTime, got {:?}", other),
        }
    }

    #[test]
    fn test_meta_is_optional() {
        let body = r#"{"data":{"timings":{"Fajr":"04:10","Sunrise":"05:40","Dhuhr":"12:20",
            "Asr":"15:45","Maghrib":"18:30","Isha":"20:00"}}}"#;
        let day = parse_timings(body).unwrap();
        assert_eq!(day.entries.len(), 6);
        assert_eq!(day.timezone, None);
    }

    /// Serve one canned reply on a loopback port. The handle yields the request line.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1/", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_string()
        });

        (base_url, handle)
    }

    // Loopback requests must not be routed through an ambient HTTP_PROXY.
    fn client_for(base_url: String) -> TimingsClient {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let api = ApiConfig {
            base_url,
            ..ApiConfig::default()
        };
        TimingsClient::with_client(client, &api)
    }

    #[test]
    fn test_fetch_sends_city_country_and_method() {
        let (base_url, server) = serve_once("200 OK", DUBLIN);
        let city = City::find("newyork").unwrap();

        let day = client_for(base_url).fetch(&city).unwrap();
        let request_line = server.join().unwrap();

        assert_eq!(
            request_line,
            "GET /v1/timingsByCity?city=New+York&country=United+States&method=2 HTTP/1.1"
        );
        assert_eq!(day.entries.len(), 6);
        assert_eq!(day.timezone.as_deref(), Some("Europe/Dublin"));
    }

    #[test]
    fn test_fetch_maps_error_status() {
        let (base_url, server) = serve_once("502 Bad Gateway", "upstream down");
        let city = City::default();

        let result = client_for(base_url).fetch(&city);
        server.join().unwrap();

        match result {
            Err(FetchError::Status(status)) => assert_eq!(status, StatusCode::BAD_GATEWAY),
            other => panic!("expected Status error, got {:?}", other),
        }
    }
}
