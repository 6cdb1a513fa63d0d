use crate::cleaner::{SentenceRecord, clean};
use crate::request::{RequestDescriptor, Selection};
use crate::{Client, Error};
use futures::{StreamExt, TryStreamExt, stream};
use serde::Serialize;

/// 一课的内容，导出时只使用`data`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LessonResult {
    pub level_id: String,
    pub class_id: String,
    pub title: String,
    pub data: Vec<SentenceRecord>,
}

/// 与[`Selection`]的形状一致
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Downloaded {
    Single(LessonResult),
    Many(Vec<LessonResult>),
}

impl Downloaded {
    pub fn as_slice(&self) -> &[LessonResult] {
        match self {
            Downloaded::Single(r) => std::slice::from_ref(r),
            Downloaded::Many(v) => v,
        }
    }

    pub fn into_vec(self) -> Vec<LessonResult> {
        match self {
            Downloaded::Single(r) => vec![r],
            Downloaded::Many(v) => v,
        }
    }
}

impl Client {
    pub async fn download_lesson(&self, request: &RequestDescriptor) -> Result<LessonResult, Error> {
        let payload = self.fetch(&request.url).await?;
        let (title, records) = clean(payload)?;
        let data: Vec<_> = records.collect();

        tracing::info!(
            dialect = %request.dialect_name,
            level_id = %request.level_id,
            class_id = %request.class_id,
            sentences = data.len(),
            "lesson downloaded"
        );

        Ok(LessonResult {
            level_id: request.level_id.clone(),
            class_id: request.class_id.clone(),
            title,
            data,
        })
    }

    /// 多个请求时并发下载，结果顺序与请求顺序一致
    ///
    /// 任意一个失败则整体失败，不返回部分结果；需要部分结果请使用[`Client::download_settled`]
    pub async fn download(&self, selection: &Selection) -> Result<Downloaded, Error> {
        match selection {
            Selection::Single(request) => {
                Ok(Downloaded::Single(self.download_lesson(request).await?))
            }
            Selection::Many(requests) => {
                let results: Vec<_> = stream::iter(requests.iter().map(|r| self.download_lesson(r)))
                    .buffered(self.concurrency(requests.len()))
                    .try_collect()
                    .await?;
                Ok(Downloaded::Many(results))
            }
        }
    }

    /// 每个请求都有自己的结果，顺序与请求顺序一致
    pub async fn download_settled(
        &self,
        requests: &[RequestDescriptor],
    ) -> Vec<Result<LessonResult, Error>> {
        stream::iter(requests.iter().map(|r| self.download_lesson(r)))
            .buffered(self.concurrency(requests.len()))
            .collect()
            .await
    }

    fn concurrency(&self, total: usize) -> usize {
        self.max_concurrency.unwrap_or(total).clamp(1, total.max(1))
    }
}
