//! 生成请求地址，并按 level / class 筛选
//!
//! 每个方言都有 9 个 level，每个 level 有 10 个 class，一共 90 个请求地址：
//!
//! ```text
//! http://web.klokah.tw/ninew/php/getTextNew.php?d=14&l=1&c=1
//! http://web.klokah.tw/ninew/php/getTextNew.php?d=14&l=2&c=1
//! ...
//! http://web.klokah.tw/ninew/php/getTextNew.php?d=14&l=9&c=10
//! ```

use crate::Error;
use regex::Regex;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::sync::LazyLock;
use url::Url;

pub const BASE_URL: &str = "http://web.klokah.tw/ninew/php/";

pub const LEVELS: RangeInclusive<u8> = 1..=9;
pub const CLASSES: RangeInclusive<u8> = 1..=10;

static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&l=(\d+)").unwrap());
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&c=(\d+)").unwrap());

pub fn default_base_url() -> Url {
    Url::parse(BASE_URL).unwrap()
}

/// 一次请求需要的信息，`level_id`和`class_id`与`url`中的查询参数一致
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    pub dialect_name: String,
    pub level_id: String,
    pub class_id: String,
    pub url: String,
}

/// 同时指定 level 和 class 时只有一个请求，否则是一组
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Single(RequestDescriptor),
    Many(Vec<RequestDescriptor>),
}

impl Selection {
    pub fn len(&self) -> usize {
        match self {
            Selection::Single(_) => 1,
            Selection::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<RequestDescriptor> {
        match self {
            Selection::Single(d) => vec![d],
            Selection::Many(v) => v,
        }
    }
}

/// 顺序：外层 class，内层 level
pub fn enumerate(base_url: &Url, dialect_id: u8) -> Result<Vec<String>, Error> {
    let level_urls = LEVELS
        .map(|level| {
            base_url
                .join(&format!("getTextNew.php?d={dialect_id}&l={level}"))
                .map(String::from)
                .map_err(|e| Error::Common(format!("invalid base url {base_url}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CLASSES
        .flat_map(|class| {
            level_urls
                .iter()
                .map(move |level_url| format!("{level_url}&c={class}"))
        })
        .collect())
}

/// 从url中取回`(level_id, class_id)`
pub fn parse_level_and_class(url: &str) -> Option<(String, String)> {
    let level = LEVEL_RE.captures(url)?.get(1)?.as_str();
    let class = CLASS_RE.captures(url)?.get(1)?.as_str();
    Some((level.to_owned(), class.to_owned()))
}

fn describe(dialect_name: &str, url: String) -> Result<RequestDescriptor, Error> {
    let (level_id, class_id) = parse_level_and_class(&url)
        .ok_or_else(|| Error::Common(format!("cannot find level or class in {url}")))?;
    Ok(RequestDescriptor {
        dialect_name: dialect_name.to_owned(),
        level_id,
        class_id,
        url,
    })
}

/// 按筛选条件选出请求
///
/// - 只给`level`：返回该 level 的 10 个请求
/// - `level`和`class`都给：返回唯一的请求
/// - 都不给：返回全部 90 个请求
/// - 只给`class`：忽略`class`，返回全部请求
///
/// 没有匹配时返回[`Error::NoMatchingLesson`]
pub fn select(
    dialect_name: &str,
    dialect_id: u8,
    level: Option<u8>,
    class: Option<u8>,
    base_url: &Url,
) -> Result<Selection, Error> {
    let all = enumerate(base_url, dialect_id)?
        .into_iter()
        .map(|url| describe(dialect_name, url))
        .collect::<Result<Vec<_>, _>>()?;

    let no_match = || Error::NoMatchingLesson {
        dialect: dialect_name.to_owned(),
        level,
        class,
    };

    match (level, class) {
        (Some(l), Some(c)) => {
            let (l, c) = (l.to_string(), c.to_string());
            all.into_iter()
                .find(|d| d.level_id == l && d.class_id == c)
                .map(Selection::Single)
                .ok_or_else(no_match)
        }
        (Some(l), None) => {
            let l = l.to_string();
            let matched: Vec<_> = all.into_iter().filter(|d| d.level_id == l).collect();
            if matched.is_empty() {
                return Err(no_match());
            }
            Ok(Selection::Many(matched))
        }
        (None, class) => {
            if let Some(c) = class {
                tracing::warn!(class = c, "class filter without level is ignored");
            }
            Ok(Selection::Many(all))
        }
    }
}
