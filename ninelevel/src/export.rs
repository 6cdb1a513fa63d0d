//! 导出为 JSON / CSV 文件
//!
//! 文件名：`{label} - {title} ({level_id}階{class_id}課).{ext}`，文件内容只包含句子。

use crate::{Error, LessonResult};
use futures::future::try_join_all;
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const CSV_HEADER: [&str; 3] = ["order", "dialect", "chinese_translation"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

pub fn file_name(label: &str, result: &LessonResult, ext: &str) -> String {
    // 标题里的`/`会被当成目录
    let title = result.title.replace(['/', '\\'], "_");
    format!(
        "{label} - {title} ({}階{}課).{ext}",
        result.level_id, result.class_id
    )
}

/// JSON数组，非ASCII字符原样输出
pub fn to_json_bytes(result: &LessonResult) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(&result.data)?)
}

/// 带BOM的UTF-8，第一行为表头
pub fn to_csv_bytes(result: &LessonResult) -> Result<Vec<u8>, Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(UTF8_BOM.to_vec());
    wtr.write_record(CSV_HEADER)?;
    for record in &result.data {
        wtr.serialize(record)?;
    }
    wtr.into_inner().map_err(|e| Error::IO(e.into_error()))
}

pub async fn write(
    result: &LessonResult,
    dir: impl AsRef<Path>,
    label: &str,
    format: Format,
) -> Result<PathBuf, Error> {
    let bytes = match format {
        Format::Json => to_json_bytes(result)?,
        Format::Csv => to_csv_bytes(result)?,
    };
    let path = dir
        .as_ref()
        .join(file_name(label, result, format.extension()));
    tokio::fs::write(&path, bytes).await?;

    tracing::debug!(path = %path.display(), "lesson exported");
    Ok(path)
}

pub async fn to_json(
    result: &LessonResult,
    dir: impl AsRef<Path>,
    label: &str,
) -> Result<PathBuf, Error> {
    write(result, dir, label, Format::Json).await
}

pub async fn to_csv(
    result: &LessonResult,
    dir: impl AsRef<Path>,
    label: &str,
) -> Result<PathBuf, Error> {
    write(result, dir, label, Format::Csv).await
}

/// 并发写出所有结果，目录不存在时会创建
pub async fn write_all(
    results: &[LessonResult],
    dir: impl AsRef<Path>,
    label: &str,
    format: Format,
) -> Result<Vec<PathBuf>, Error> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;
    try_join_all(results.iter().map(|r| write(r, dir, label, format))).await
}
