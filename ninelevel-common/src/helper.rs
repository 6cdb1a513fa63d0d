use crate::Error;
use bytes::Bytes;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 把非2xx响应转成[`Error::Status`]，响应体作为错误信息
pub async fn status_error(resp: reqwest::Response) -> Error {
    let status = resp.status().to_string();
    resp.text()
        .await
        .map_or_else(Error::Http, |message| Error::Status { status, message })
}

/// 检查状态码后读取完整的响应体
///
/// 不依赖`Content-Type`，服务端返回的类型经常是缺失或错误的
pub async fn read_success_body(resp: reqwest::Response) -> Result<Bytes, Error> {
    let status = resp.status();

    if !status.is_success() {
        return Err(status_error(resp).await);
    }

    let bytes = resp.bytes().await?;
    Ok(bytes)
}

/// 去掉开头的 UTF-8 BOM（如果有）
pub fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// 把字节当作 JSON 解析，忽略开头的 BOM
pub fn parse_json_slice<T: serde::de::DeserializeOwned>(
    bytes: &[u8],
) -> Result<T, serde_json::Error> {
    serde_json::from_slice(strip_utf8_bom(bytes))
}

#[test]
fn strip_utf8_bom_test() {
    assert_eq!(strip_utf8_bom(b"\xEF\xBB\xBF{}"), b"{}");
    assert_eq!(strip_utf8_bom(b"{}"), b"{}");
    assert_eq!(strip_utf8_bom(b""), b"");
}

#[test]
fn parse_json_slice_test() {
    let v: serde_json::Value = parse_json_slice("\u{feff}{\"title\":\"A\"}".as_bytes()).unwrap();
    assert_eq!(v["title"], "A");

    assert!(parse_json_slice::<serde_json::Value>(b"{\"title\":").is_err());
}
