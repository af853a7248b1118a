//! HTTP retrieval of NDBC feeds.
//!
//! The client only moves bytes: it builds the feed URL, checks the status and
//! hands the body to the parser. No retries are attempted.

use crate::config::FetchConfig;
use crate::error::{NdbcError, Result};
use crate::models::{Feed, Observation, StationId};
use crate::parser::build_observations;
use tracing::{debug, info};

/// Client for the NDBC text feeds
#[derive(Debug, Clone)]
pub struct NdbcClient {
    http: reqwest::Client,
    config: FetchConfig,
}

impl NdbcClient {
    /// Create a client from validated configuration
    pub fn new(config: FetchConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http, config })
    }

    /// Create a client around an already configured HTTP client.
    ///
    /// The timeout and user agent in `config` are not applied to `http`.
    pub fn with_http_client(config: FetchConfig, http: reqwest::Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the raw body of a station's feed
    pub async fn fetch_raw(&self, feed: Feed, station: &StationId) -> Result<Vec<u8>> {
        let url = feed.url(&self.config.base_url, station);
        info!("Fetching {:?} feed for station {}", feed, station);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NdbcError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(body.to_vec())
    }

    /// Fetch a station's feed and parse at most `max_records` rows (0 = all)
    pub async fn fetch_observations(
        &self,
        feed: Feed,
        station: &StationId,
        max_records: usize,
    ) -> Result<Vec<Observation>> {
        let raw = self.fetch_raw(feed, station).await?;
        build_observations(&raw, max_records)
    }

    /// Most recent observations from the five-day feed
    pub async fn five_day(
        &self,
        station: &StationId,
        max_records: usize,
    ) -> Result<Vec<Observation>> {
        self.fetch_observations(Feed::FiveDay, station, max_records)
            .await
    }

    /// Most recent observations from the 45-day realtime feed
    pub async fn realtime(
        &self,
        station: &StationId,
        max_records: usize,
    ) -> Result<Vec<Observation>> {
        self.fetch_observations(Feed::Realtime, station, max_records)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const FEED_BODY: &str = "#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE
#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft
2024 03 14 18 50 210  7.0  9.0   1.2     6   4.9 197 1015.6  10.1   8.4   6.3   MM -0.8    MM
2024 03 14 18 40 200  6.0  8.0    MM    MM    MM  MM 1015.8  10.2   8.4   6.2   MM   MM    MM
";

    /// Serve one canned HTTP response; the receiver yields the request line
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{}", addr), rx)
    }

    fn create_test_client(base_url: &str) -> NdbcClient {
        let config = FetchConfig::default().with_base_url(base_url);
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        NdbcClient::with_http_client(config, http).unwrap()
    }

    #[tokio::test]
    async fn test_five_day_fetch_and_parse() {
        let (base_url, request) = serve_once("200 OK", FEED_BODY).await;
        let client = create_test_client(&base_url);
        let station: StationId = "44030".parse().unwrap();

        let observations = client.five_day(&station, 1).await.unwrap();

        assert_eq!(request.await.unwrap(), "GET /data/5day2/44030_5day.txt HTTP/1.1");
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].minute, Some(50));
        assert_eq!(observations[0].pressure_tendency, Some(-0.8));
    }

    #[tokio::test]
    async fn test_realtime_fetch_uses_realtime_path() {
        let (base_url, request) = serve_once("200 OK", FEED_BODY).await;
        let client = create_test_client(&base_url);
        let station: StationId = "pclf1".parse().unwrap();

        let observations = client.realtime(&station, 0).await.unwrap();

        assert_eq!(request.await.unwrap(), "GET /data/realtime2/PCLF1.txt HTTP/1.1");
        assert_eq!(observations.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_raw_returns_body() {
        let (base_url, _request) = serve_once("200 OK", FEED_BODY).await;
        let client = create_test_client(&base_url);
        let station: StationId = "44030".parse().unwrap();

        let raw = client.fetch_raw(Feed::FiveDay, &station).await.unwrap();
        assert_eq!(raw, FEED_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let (base_url, _request) = serve_once("404 Not Found", "").await;
        let client = create_test_client(&base_url);
        let station: StationId = "00000".parse().unwrap();

        match client.five_day(&station, 1).await {
            Err(NdbcError::UnexpectedStatus { url, status }) => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/data/5day2/00000_5day.txt"));
            }
            other => panic!("Expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_structural_error_passes_through() {
        let (base_url, _request) = serve_once("200 OK", "not a feed").await;
        let client = create_test_client(&base_url);
        let station: StationId = "44030".parse().unwrap();

        let error = client.five_day(&station, 1).await.unwrap_err();
        assert!(error.is_structural());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = FetchConfig::default().with_timeout_secs(0);
        assert!(matches!(
            NdbcClient::new(config),
            Err(NdbcError::Configuration { .. })
        ));
    }

    #[test]
    fn test_new_keeps_config() {
        let config = FetchConfig::default().with_base_url("http://localhost:9999");
        let client = NdbcClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
