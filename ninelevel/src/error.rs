use ninelevel_common::retry::IsRetryable;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),
    #[error("no lesson matches {dialect}: level {level:?}, class {class:?}")]
    NoMatchingLesson {
        dialect: String,
        level: Option<u8>,
        class: Option<u8>,
    },
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// 连接、DNS、超时等传输层错误，不会重试
    ///
    /// 服务端返回非2xx状态码不在这里，见[`Error::RequestAPIFailed`]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// 服务端返回了非2xx状态码，`message`是响应体，不会重试
    ///
    /// 与[`Error::Network`]一起都属于网络失败，可以用[`Error::is_network`]统一判断
    #[error("lesson request failed with status {status}: {message}")]
    RequestAPIFailed { status: String, message: String },
    // 响应体还不是合法的JSON，会被重试
    #[error("response body is not valid json: {0}")]
    TransientDecode(#[source] serde_json::Error),
    #[error("response of {url} is still not valid json after {attempts} attempts: {message}")]
    DecodeExhausted {
        url: String,
        attempts: u32,
        message: String,
    },
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("error: {0}")]
    Common(String),
}

impl From<ninelevel_common::Error> for Error {
    fn from(e: ninelevel_common::Error) -> Self {
        match e {
            ninelevel_common::Error::Status { status, message } => {
                Error::RequestAPIFailed { status, message }
            }
            ninelevel_common::Error::Http(e) => Error::Network(e),
        }
    }
}

impl Error {
    /// 传输失败或HTTP状态码失败
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::RequestAPIFailed { .. })
    }
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        matches!(self, Error::TransientDecode(_))
    }
}
