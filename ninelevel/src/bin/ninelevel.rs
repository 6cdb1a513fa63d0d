use clap::{Parser, ValueEnum};
use ninelevel::export::{self, Format};
use ninelevel::{Client, Config, Error, LessonResult, dialect};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    Json,
    Csv,
    Both,
}

impl Output {
    fn formats(self) -> &'static [Format] {
        match self {
            Output::Json => &[Format::Json],
            Output::Csv => &[Format::Csv],
            Output::Both => &[Format::Json, Format::Csv],
        }
    }
}

/// 下载九階教材并导出为 JSON / CSV
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 方言名，例如`霧台魯凱語`
    #[arg(required_unless_present = "list")]
    dialect: Option<String>,
    /// 1~9
    #[arg(short, long)]
    level: Option<u8>,
    /// 1~10，需要同时指定 level
    #[arg(short, long)]
    class: Option<u8>,
    #[arg(short, long, value_enum, default_value_t = Output::Csv)]
    format: Output,
    /// 覆盖配置文件中的`out_dir`
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// TOML 配置文件
    #[arg(long)]
    config: Option<PathBuf>,
    /// 部分请求失败时继续导出成功的部分
    #[arg(long)]
    keep_going: bool,
    /// 列出所有方言
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "ninelevel failed");
            ExitCode::FAILURE
        }
    }
}

/// 返回是否全部成功
async fn run(args: Args) -> Result<bool, Error> {
    if args.list {
        for d in dialect::entries() {
            println!("{}\t{}", d.id, d.name);
        }
        return Ok(true);
    }

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let out_dir = args.out_dir.clone().unwrap_or_else(|| config.out_dir.clone());
    let client = Client::from_config(&config)?;

    let dialect_name = args.dialect.unwrap_or_default();
    let nine_level = client
        .nine_level()
        .dialect(dialect_name.as_str())
        .maybe_level(args.level)
        .maybe_class(args.class)
        .build();

    let (lessons, failed) = if args.keep_going {
        let selection = nine_level.selection()?;
        let mut lessons = Vec::with_capacity(selection.len());
        let mut failed = 0usize;
        for res in client.download_settled(&selection.into_vec()).await {
            match res {
                Ok(lesson) => lessons.push(lesson),
                Err(e) => {
                    failed += 1;
                    tracing::error!(error = %e, "lesson download failed");
                }
            }
        }
        (lessons, failed)
    } else {
        (nine_level.download_data().await?.into_vec(), 0)
    };

    write_lessons(&lessons, &out_dir, &dialect_name, args.format).await?;

    if failed > 0 {
        tracing::warn!(failed, succeeded = lessons.len(), "some lessons were not downloaded");
    }
    Ok(failed == 0)
}

async fn write_lessons(
    lessons: &[LessonResult],
    out_dir: &Path,
    label: &str,
    output: Output,
) -> Result<(), Error> {
    for format in output.formats() {
        let files = export::write_all(lessons, out_dir, label, *format).await?;
        tracing::info!(
            count = files.len(),
            dir = %out_dir.display(),
            format = format.extension(),
            "files written"
        );
    }
    Ok(())
}
