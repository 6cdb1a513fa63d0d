use crate::{Client, Error};
use ninelevel_common::helper::{parse_json_slice, read_success_body};
use ninelevel_common::retry::with_retry;
use serde_json::Value;

impl Client {
    /// 请求`url`并把响应体解析为JSON
    ///
    /// 响应体不是合法JSON时会重新请求，最多尝试`retry.max_attempts`次；
    /// 连接失败、超时等网络错误不重试，直接返回。
    pub async fn fetch(&self, url: &str) -> Result<Value, Error> {
        with_retry(&self.retry, || self.fetch_once(url))
            .await
            .map_err(|e| match e {
                Error::TransientDecode(source) => Error::DecodeExhausted {
                    url: url.to_owned(),
                    attempts: self.retry.max_attempts.max(1),
                    message: source.to_string(),
                },
                other => other,
            })
    }

    async fn fetch_once(&self, url: &str) -> Result<Value, Error> {
        tracing::debug!(url, "fetching lesson");
        let resp = self.http_client.get(url).send().await?;
        let body = read_success_body(resp).await?;

        parse_json_slice(&body).map_err(Error::TransientDecode)
    }
}
