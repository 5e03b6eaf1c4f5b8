use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ADD_LOAD: &str = "main_menu.add_load";
    pub const MAIN_MENU_SHOW_CIRCUIT: &str = "main_menu.show_circuit";
    pub const MAIN_MENU_SAVE_REPORT: &str = "main_menu.save_report";
    pub const MAIN_MENU_CLEAR_LOADS: &str = "main_menu.clear_loads";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ADD_LOAD_HEADING: &str = "add_load.heading";
    pub const PROMPT_LOAD_NAME: &str = "add_load.prompt_name";
    pub const PROMPT_VOLTAGE: &str = "add_load.prompt_voltage";
    pub const POWER_UNIT_OPTIONS: &str = "add_load.power_unit_options";
    pub const PROMPT_POWER_VALUE: &str = "add_load.prompt_power_value";
    pub const PROMPT_CONTINUOUS: &str = "add_load.prompt_continuous";
    pub const PROMPT_EFFICIENCY: &str = "add_load.prompt_efficiency";
    pub const ADD_LOAD_ADDED: &str = "add_load.added";

    pub const CIRCUIT_HEADING: &str = "circuit.heading";
    pub const CIRCUIT_EMPTY: &str = "circuit.empty";
    pub const RESULT_TOTAL_CURRENT: &str = "result.total_current";
    pub const RESULT_BREAKER: &str = "result.breaker";
    pub const RESULT_GAUGE: &str = "result.gauge";
    pub const RESULT_BREAKER_EXCEEDS: &str = "result.breaker_exceeds";
    pub const RESULT_GAUGE_CONSULT: &str = "result.gauge_consult";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_TOTAL: &str = "report.total";
    pub const REPORT_BREAKER: &str = "report.breaker";
    pub const REPORT_GAUGE: &str = "report.gauge";
    pub const REPORT_PROMPT_FILENAME: &str = "report.prompt_filename";
    pub const REPORT_SAVED: &str = "report.saved";

    pub const CLEAR_DONE: &str = "clear.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_APPLY: &str = "settings.apply";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const HELP_ADD_LOAD: &str = "help.add_load";
    pub const HELP_CIRCUIT: &str = "help.circuit";
    pub const HELP_REPORT: &str = "help.report";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") || c.starts_with("es") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/es)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "es" => Some("es-es".into()),
        "es-es" => Some("es-es".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("es") => Some("es-es".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "es" => Some("es-es".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., es-es)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., es)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "es-es" | "es" => parse_toml_to_map(include_str!("../locales/es-es.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Electrical Load Toolbox ===",
        MAIN_MENU_ADD_LOAD => "1) 부하 추가",
        MAIN_MENU_SHOW_CIRCUIT => "2) 회로 집계/선정 결과",
        MAIN_MENU_SAVE_REPORT => "3) 보고서 저장 (TXT)",
        MAIN_MENU_CLEAR_LOADS => "4) 목록 비우기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ADD_LOAD_HEADING => "\n-- 부하 추가 --",
        PROMPT_LOAD_NAME => "부하 설명 (ex: 펌프 모터): ",
        PROMPT_VOLTAGE => "전압 [V]: ",
        POWER_UNIT_OPTIONS => "전력 단위: 1=W 2=HP",
        PROMPT_POWER_VALUE => "전력 값: ",
        PROMPT_CONTINUOUS => "연속 부하(>3h)? (y/N): ",
        PROMPT_EFFICIENCY => "전동기 효율 (0~1, HP에만 적용, 기본 0.85): ",
        ADD_LOAD_ADDED => "추가됨:",
        CIRCUIT_HEADING => "\n-- 회로 상세 --",
        CIRCUIT_EMPTY => "부하가 없습니다. 먼저 부하를 추가하세요.",
        RESULT_TOTAL_CURRENT => "총 부하 전류:",
        RESULT_BREAKER => "추천 차단기:",
        RESULT_GAUGE => "추천 전선:",
        RESULT_BREAKER_EXCEEDS => "표 범위 초과 (>200A)",
        RESULT_GAUGE_CONSULT => "전문 표 참조 (> 2 AWG)",
        REPORT_TITLE => "전기 기술 보고서",
        REPORT_TOTAL => "총 전류",
        REPORT_BREAKER => "추천 차단기",
        REPORT_GAUGE => "추천 전선",
        REPORT_PROMPT_FILENAME => "파일명 (엔터 = technical_report.txt): ",
        REPORT_SAVED => "보고서 저장됨:",
        CLEAR_DONE => "부하 목록을 비웠습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) Español",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_APPLY => "적용",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HELP_ADD_LOAD => "도움말: 전압[V], 전력(W 또는 HP), 연속 여부, 효율 순으로 입력. HP는 (HP×746)/효율로 환산 후 1.25 계수가 항상 적용됩니다.",
        HELP_CIRCUIT => "도움말: 총 전류 이상인 가장 작은 상용 차단기와, 총 전류를 포함하는 첫 AWG 행을 선정합니다.",
        HELP_REPORT => "도움말: 부하별 전류, 총 전류, 차단기, 전선을 텍스트 파일로 저장합니다.",
        HELP_SETTINGS => "도움말: 표시 언어를 바꿉니다. 선정 표는 config.toml에서 수정할 수 있습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Electrical Load Toolbox ===",
        MAIN_MENU_ADD_LOAD => "1) Add load",
        MAIN_MENU_SHOW_CIRCUIT => "2) Circuit totals & sizing",
        MAIN_MENU_SAVE_REPORT => "3) Save report (TXT)",
        MAIN_MENU_CLEAR_LOADS => "4) Clear load list",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ADD_LOAD_HEADING => "\n-- Add Load --",
        PROMPT_LOAD_NAME => "Load description (ex: pump motor): ",
        PROMPT_VOLTAGE => "Voltage [V]: ",
        POWER_UNIT_OPTIONS => "Power unit: 1=W 2=HP",
        PROMPT_POWER_VALUE => "Power value: ",
        PROMPT_CONTINUOUS => "Continuous duty (>3h)? (y/N): ",
        PROMPT_EFFICIENCY => "Motor efficiency (0-1, HP only, default 0.85): ",
        ADD_LOAD_ADDED => "Added:",
        CIRCUIT_HEADING => "\n-- Circuit Detail --",
        CIRCUIT_EMPTY => "No loads yet. Add your first load to start.",
        RESULT_TOTAL_CURRENT => "Total load current:",
        RESULT_BREAKER => "Recommended breaker:",
        RESULT_GAUGE => "Recommended conductor:",
        RESULT_BREAKER_EXCEEDS => "Exceeds table range (>200A)",
        RESULT_GAUGE_CONSULT => "Consult special tables (> 2 AWG)",
        REPORT_TITLE => "ELECTRICAL TECHNICAL REPORT",
        REPORT_TOTAL => "TOTAL AMPS",
        REPORT_BREAKER => "RECOMMENDED BREAKER",
        REPORT_GAUGE => "RECOMMENDED CABLE",
        REPORT_PROMPT_FILENAME => "File name (enter = technical_report.txt): ",
        REPORT_SAVED => "Report saved:",
        CLEAR_DONE => "Load list cleared.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) Español",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_APPLY => "Apply",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HELP_ADD_LOAD => "Help: enter voltage [V], power (W or HP), duty flag, efficiency. HP converts as (HP*746)/efficiency and always gets the 1.25 factor.",
        HELP_CIRCUIT => "Help: picks the smallest commercial breaker >= total amps, and the first AWG row whose limit covers the total.",
        HELP_REPORT => "Help: saves per-load currents, total amps, breaker and cable to a text file.",
        HELP_SETTINGS => "Help: changes display language. Sizing tables can be edited in config.toml.",
        _ => return None,
    })
}
