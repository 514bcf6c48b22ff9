use crate::domain::{FetchError, FetchResult, Passenger, PassengerPage, PassengerSource};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Body of `GET /passenger`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PassengerListResponse {
    total_passengers: u64,
    #[serde(default)]
    data: Vec<Passenger>,
}

/// Reads passengers from the instantwebtools-style REST API.
pub struct HttpPassengerSource {
    client: Client,
    base_url: String,
}

impl HttpPassengerSource {
    pub fn new(base_url: &str, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn page_url(&self, page: usize, rows_per_page: usize) -> String {
        format!("{}/passenger?page={}&size={}", self.base_url, page, rows_per_page)
    }
}

impl PassengerSource for HttpPassengerSource {
    fn fetch_page(&self, page: usize, rows_per_page: usize) -> FetchResult<PassengerPage> {
        let response = self
            .client
            .get(self.page_url(page, rows_per_page))
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_page(&body)
    }
}

/// Decodes a listing body into rows (in server order) and the total count.
pub fn parse_page(body: &str) -> FetchResult<PassengerPage> {
    let response: PassengerListResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(PassengerPage {
        items: response.data,
        total_count: response.total_passengers,
    })
}
