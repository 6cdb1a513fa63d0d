/// 发送请求、读取响应时的错误
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 服务端返回了非2xx状态码
    #[error("unexpected http status {status}: {message}")]
    Status { status: String, message: String },
    /// 连接、超时、读取响应体失败等
    #[error("http transport failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[test]
fn status_error_display_test() {
    let e = Error::Status {
        status: "503 Service Unavailable".to_owned(),
        message: "busy".to_owned(),
    };
    assert_eq!(e.to_string(), "unexpected http status 503 Service Unavailable: busy");
}
