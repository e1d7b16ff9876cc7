use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::engine::{compare, ComparisonOutput};
use crate::i18n::{self, Translator};
use crate::input::ComparisonRequest;
use crate::preset::{PresetCatalog, PresetError};
use crate::ui_cli::{self, MenuChoice, Session};
use crate::validation::{validate_comparison, ValidationErrors};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Preset(#[from] PresetError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 설정의 언어 값으로 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: &str) -> Translator {
    let code = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    Translator::new_with_pack(&code, config.language_pack_dir.as_deref())
}

/// JSON 파일에서 비교 요청을 읽는다.
pub fn load_request(path: &Path) -> Result<ComparisonRequest, AppError> {
    let content = fs::read_to_string(path)?;
    let request = ComparisonRequest::from_json(&content)?;
    tracing::debug!(path = %path.display(), vehicles = request.vehicles.len(), "request loaded");
    Ok(request)
}

/// 검증 후 비교. 필드 오류는 모두 모아서 돌려준다.
pub fn run_comparison(request: &ComparisonRequest) -> Result<ComparisonOutput, AppError> {
    let input = validate_comparison(request)?;
    Ok(compare(&input))
}

/// CLI 대화형 모드의 메인 루프를 실행한다.
pub fn run(config: &mut Config, mut tr: Translator, presets: &PresetCatalog) -> Result<(), AppError> {
    let mut session = Session::from_config(config);
    tracing::info!(
        lang = tr.language_code(),
        presets = presets.len(),
        "interactive session started"
    );
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::AddPreset => ui_cli::handle_add_preset(&tr, &mut session, presets)?,
            MenuChoice::AddIce => ui_cli::handle_add_ice(&tr, &mut session)?,
            MenuChoice::AddEv => ui_cli::handle_add_ev(&tr, &mut session)?,
            MenuChoice::List => ui_cli::handle_list(&tr, &session),
            MenuChoice::Remove => ui_cli::handle_remove(&tr, &mut session)?,
            MenuChoice::Assumptions => ui_cli::handle_assumptions(&tr, &mut session)?,
            MenuChoice::Compare => ui_cli::handle_compare(&tr, &session)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    // 메뉴에서 고른 언어가 --lang보다 우선
                    tr = translator_for(config, "auto");
                }
                config.save()?;
            }
            MenuChoice::Exit => {
                config.default_horizon_years = session.horizon_years;
                config.default_annual_km = session.annual_km;
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
