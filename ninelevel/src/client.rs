use crate::request::default_base_url;
use crate::{Config, Error};
use bon::bon;
use ninelevel_common::retry::RetryConfig;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Client {
    pub(crate) http_client: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) retry: RetryConfig,
    pub(crate) max_concurrency: Option<usize>,
}

#[bon]
impl Client {
    /// - `base_url`: 默认为`http://web.klokah.tw/ninew/php/`
    /// - `timeout`: 每个请求的超时时间，默认30秒
    /// - `max_concurrency`: 同时进行的请求数，默认不限制
    #[builder]
    pub fn new(
        #[builder(default = default_base_url())] base_url: Url,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
        #[builder(default)] retry: RetryConfig,
        max_concurrency: Option<usize>,
    ) -> Result<Self, Error> {
        // 超时为0时每个请求都会立刻失败
        if timeout.is_zero() {
            return Err(Error::Common("timeout must be greater than 0".to_owned()));
        }
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
            retry,
            max_concurrency,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Common(format!("invalid base url {}: {e}", config.base_url)))?;

        Client::builder()
            .base_url(base_url)
            .timeout(Duration::from_secs(config.timeout_secs))
            .retry(config.retry.clone())
            .maybe_max_concurrency(config.max_concurrency)
            .build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
