use crate::export::{self, Format};
use crate::request::{self, Selection};
use crate::{Client, Downloaded, Error, dialect};
use bon::Builder;
use std::path::{Path, PathBuf};

/// 按方言、level、class下载教材
///
/// 导出的文件名以方言名开头
#[derive(Builder)]
pub struct NineLevel<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(into)]
    dialect: String,
    level: Option<u8>,
    class: Option<u8>,
}

impl Client {
    pub fn nine_level(&self) -> NineLevelBuilder<'_> {
        NineLevel::builder(self)
    }
}

impl NineLevel<'_> {
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    pub fn selection(&self) -> Result<Selection, Error> {
        let id = dialect::lookup(&self.dialect)?;
        request::select(
            &self.dialect,
            id,
            self.level,
            self.class,
            &self.client.base_url,
        )
    }

    pub async fn download_data(&self) -> Result<Downloaded, Error> {
        let selection = self.selection()?;
        self.client.download(&selection).await
    }

    /// 全部下载成功后才写文件
    pub async fn export(&self, dir: impl AsRef<Path>, format: Format) -> Result<Vec<PathBuf>, Error> {
        let downloaded = self.download_data().await?;
        export::write_all(downloaded.as_slice(), dir, &self.dialect, format).await
    }

    pub async fn to_json(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, Error> {
        self.export(dir, Format::Json).await
    }

    pub async fn to_csv(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, Error> {
        self.export(dir, Format::Csv).await
    }
}
