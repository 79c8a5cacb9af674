use crate::robots::{RobotsData, RobotsError};
use crate::source::checker_config::CheckerConfig;
use crate::source::fetch_error::FetchError;
use reqwest::StatusCode;
use url::Url;

/// The raw robots.txt body fetched for a site.
#[derive(Debug, Clone)]
pub struct RobotsTxtSource {
    url: Url,
    content: Vec<u8>,
}

impl RobotsTxtSource {
    pub fn new(url: Url, content: impl Into<Vec<u8>>) -> Self {
        Self {
            url,
            content: content.into(),
        }
    }

    /// Fetches `/robots.txt` on the host of `url`. A missing file is treated as empty.
    pub async fn load_from_url(url: &Url, config: &CheckerConfig) -> Result<Self, FetchError> {
        let robots_txt_url = Self::robots_txt_url(url);
        tracing::info!(url = %robots_txt_url, "fetching robots.txt");

        let client = reqwest::Client::builder()
            .user_agent(config.agent())
            .timeout(config.timeout())
            .build()?;
        let robots_response = client.get(robots_txt_url.clone()).send().await?;
        if !robots_response.status().is_success() {
            if robots_response.status() == StatusCode::NOT_FOUND {
                tracing::info!(url = %robots_txt_url, "no robots.txt, everything is allowed");
                return Ok(Self::new(robots_txt_url, Vec::new()));
            }
            return Err(FetchError::HttpError(robots_response.status().as_u16()));
        }

        if let Some(content_type) = robots_response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            match content_type.parse::<mime::Mime>() {
                Ok(content_type) if content_type.type_() == mime::TEXT => {}
                Ok(content_type) => {
                    tracing::warn!(
                        url = %robots_txt_url,
                        %content_type,
                        "robots.txt served with a non-text content type"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        url = %robots_txt_url,
                        content_type,
                        error = %e,
                        "robots.txt served with a malformed content type"
                    );
                }
            }
        }

        let content = robots_response.bytes().await?;
        Ok(Self::new(robots_txt_url, content.to_vec()))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn parse(&self) -> Result<RobotsData, RobotsError> {
        RobotsData::from_bytes(&self.content)
    }

    fn robots_txt_url(url: &Url) -> Url {
        let mut robots_txt_url = url.clone();
        robots_txt_url.set_path("/robots.txt");
        robots_txt_url.set_query(None);
        robots_txt_url.set_fragment(None);
        robots_txt_url
    }
}
