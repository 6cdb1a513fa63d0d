//! 下载 klokah 九階教材的方言句子和中文翻译，并导出为 JSON 或 CSV
//!
//! ```no_run
//! use ninelevel::Client;
//!
//! # async fn example() -> Result<(), ninelevel::Error> {
//! let client = Client::builder().build()?;
//! let files = client
//!     .nine_level()
//!     .dialect("霧台魯凱語")
//!     .level(1)
//!     .class(2)
//!     .build()
//!     .to_csv("./out")
//!     .await?;
//! println!("{files:?}");
//! # Ok(())
//! # }
//! ```

pub mod cleaner;
pub mod dialect;
pub mod export;
pub mod request;

mod client;
mod config;
mod download;
mod error;
mod fetch;
mod nine_level;

pub use client::Client;
pub use config::Config;
pub use download::{Downloaded, LessonResult};
pub use error::Error;
pub use nine_level::{NineLevel, NineLevelBuilder};
pub use ninelevel_common::retry::RetryConfig;
