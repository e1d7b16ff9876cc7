use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vehicle_tco::app::{self, AppError};
use vehicle_tco::currency::format_thb;
use vehicle_tco::preset::PresetCatalog;
use vehicle_tco::vehicle::VehicleKind;
use vehicle_tco::{config, report};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum KindArg {
    Ice,
    Ev,
}

impl From<KindArg> for VehicleKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Ice => VehicleKind::Ice,
            KindArg::Ev => VehicleKind::Ev,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vehicle_tco_cli", version, about = "EV vs ICE total cost of ownership")]
struct Cli {
    /// 표시 언어 (auto, en-us, th-th)
    #[arg(long, global = true, default_value = "auto")]
    lang: String,

    /// 프리셋 카탈로그 JSON (기본: 내장)
    #[arg(long, global = true)]
    presets: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 비교 요청 JSON을 읽어 결과를 출력한다
    Compare {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
        /// 차량별 연도 표도 출력
        #[arg(long)]
        yearly: bool,
    },
    /// 프리셋 목록
    Presets {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// 요청 JSON 검증만 수행
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// 대화형 메뉴 (기본)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(code) => code,
        Err(AppError::Validation(errors)) => {
            eprintln!("Invalid input:");
            for e in errors.errors() {
                eprintln!("  - {e}");
            }
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<ExitCode, AppError> {
    let mut cfg = config::load_or_default()?;
    let tr = app::translator_for(&cfg, &cli.lang);
    let preset_path = cli.presets.or_else(|| cfg.preset_path());
    let presets = PresetCatalog::load_or_built_in(preset_path.as_deref())?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Compare {
            input,
            format,
            yearly,
        } => {
            let request = app::load_request(&input)?;
            let output = app::run_comparison(&request)?;
            match format {
                OutputFormat::Table => print!("{}", report::full_report(&output, &tr, yearly)),
                OutputFormat::Json => println!("{}", output.to_json_pretty()?),
            }
        }
        Command::Presets { kind } => {
            let kinds = match kind {
                Some(k) => vec![VehicleKind::from(k)],
                None => vec![VehicleKind::Ice, VehicleKind::Ev],
            };
            for kind in kinds {
                for p in presets.for_kind(kind) {
                    let price = p.base().purchase_price.map(format_thb).unwrap_or_default();
                    println!("{:<22} {:<4} {:<32} {:>16}", p.id(), kind.as_str(), p.name(), price);
                }
            }
        }
        Command::Validate { input } => {
            let request = app::load_request(&input)?;
            app::run_comparison(&request)?;
            println!("OK: {} vehicles", request.vehicles.len());
        }
        Command::Interactive => app::run(&mut cfg, tr, &presets)?,
    }
    Ok(ExitCode::SUCCESS)
}
