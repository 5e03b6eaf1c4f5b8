use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::load::{self, Load};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 부하 계산 오류
    Load(load::LoadCalcError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Load(e) => write!(f, "부하 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<load::LoadCalcError> for AppError {
    fn from(value: load::LoadCalcError) -> Self {
        AppError::Load(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 세션 부하 목록은 이 루프가 소유하며, 핵심 계산 모듈은 호출 간 상태를
/// 갖지 않는다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut loads: Vec<Load> = Vec::new();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::AddLoad => ui_cli::handle_add_load(tr, &mut loads)?,
            MenuChoice::ShowCircuit => ui_cli::handle_show_circuit(tr, config, &loads)?,
            MenuChoice::SaveReport => ui_cli::handle_save_report(tr, config, &loads)?,
            MenuChoice::ClearLoads => ui_cli::handle_clear_loads(tr, &mut loads)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
