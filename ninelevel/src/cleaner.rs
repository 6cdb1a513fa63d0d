//! 从接口返回的JSON中取出句子
//!
//! 接口返回的结构：
//!
//! ```json
//! {
//!     "title": "Kapah haw kisu?",
//!     "titleCh": "你好嗎？",
//!     "sentence": [
//!         {
//!             "order": "1",
//!             "chinese": "你好嗎，老師？",
//!             "word": [{ "ab": "Kapah", "ch": "好" }, ...]
//!         }
//!     ]
//! }
//! ```

use crate::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([,?.:;!])").unwrap());

/// 一个句子：序号、方言原文、中文翻译
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub order: String,
    pub dialect: String,
    pub chinese_translation: String,
}

// 字段只要求存在，值可以是任意标量
#[derive(Deserialize)]
struct RawLesson {
    title: Value,
    #[serde(rename = "titleCh")]
    title_ch: Value,
    sentence: Vec<RawSentence>,
}

#[derive(Deserialize)]
struct RawSentence {
    order: Value,
    chinese: Value,
    word: Vec<RawWord>,
}

#[derive(Deserialize)]
struct RawWord {
    ab: Value,
}

// null为空字符串，字符串原样保留，其他值用JSON文本表示
fn to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// 用空格连接所有`ab`，再去掉标点符号前的空格
pub fn concat_ab_values<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let joined = words.into_iter().collect::<Vec<_>>().join(" ");
    SPACE_BEFORE_PUNCT.replace_all(&joined, "$1").into_owned()
}

/// 返回`(title, 句子迭代器)`，句子的顺序与输入相同
///
/// 缺少任何需要的键都返回[`Error::MalformedPayload`]，值为`null`时当作空字符串
pub fn clean(payload: Value) -> Result<(String, impl Iterator<Item = SentenceRecord>), Error> {
    let raw: RawLesson =
        serde_json::from_value(payload).map_err(|e| Error::MalformedPayload(e.to_string()))?;

    let title = format!("{} {}", to_text(raw.title), to_text(raw.title_ch));
    let records = raw.sentence.into_iter().map(|s| {
        let words: Vec<String> = s.word.into_iter().map(|w| to_text(w.ab)).collect();
        SentenceRecord {
            order: to_text(s.order),
            dialect: concat_ab_values(words.iter().map(String::as_str)),
            chinese_translation: to_text(s.chinese),
        }
    });

    Ok((title, records))
}
