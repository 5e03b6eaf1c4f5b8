use std::io::{self, Write};

use crate::app::AppError;
use crate::circuit;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::load::{self, Load, LoadInput, PowerUnit};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddLoad,
    ShowCircuit,
    SaveReport,
    ClearLoads,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ADD_LOAD));
    println!("{}", tr.t(keys::MAIN_MENU_SHOW_CIRCUIT));
    println!("{}", tr.t(keys::MAIN_MENU_SAVE_REPORT));
    println!("{}", tr.t(keys::MAIN_MENU_CLEAR_LOADS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::AddLoad),
            "2" => return Ok(MenuChoice::ShowCircuit),
            "3" => return Ok(MenuChoice::SaveReport),
            "4" => return Ok(MenuChoice::ClearLoads),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 부하 추가 메뉴를 처리한다. 정규화에 성공하면 목록 끝에 추가한다.
pub fn handle_add_load(tr: &Translator, loads: &mut Vec<Load>) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ADD_LOAD_HEADING));
    let name = read_line(tr.t(keys::PROMPT_LOAD_NAME))?;
    let voltage_v = read_f64(tr, tr.t(keys::PROMPT_VOLTAGE))?;
    let power_unit = read_power_unit(tr)?;
    let power_value = read_f64(tr, tr.t(keys::PROMPT_POWER_VALUE))?;
    let continuous = read_line(tr.t(keys::PROMPT_CONTINUOUS))?;
    let continuous_duty = matches!(continuous.trim(), "y" | "Y" | "yes" | "YES");
    let motor_efficiency = if power_unit == PowerUnit::Horsepower {
        let eff = read_line(tr.t(keys::PROMPT_EFFICIENCY))?;
        eff.trim().parse::<f64>().unwrap_or(0.85)
    } else {
        0.85
    };

    match load::normalize(LoadInput {
        name: name.trim().to_string(),
        power_value,
        power_unit,
        voltage_v,
        continuous_duty,
        motor_efficiency,
    }) {
        Ok(load) => {
            println!(
                "{} {} | {} | {:.2} A",
                tr.t(keys::ADD_LOAD_ADDED),
                load.name,
                load.power_label(),
                load.current_a
            );
            loads.push(load);
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 회로 상세와 선정 결과를 출력한다. 목록이 비어 있으면 안내만 한다.
pub fn handle_show_circuit(tr: &Translator, cfg: &Config, loads: &[Load]) -> Result<(), AppError> {
    if loads.is_empty() {
        println!("{}", tr.t(keys::CIRCUIT_EMPTY));
        return Ok(());
    }
    let circuit = circuit::aggregate(loads, &cfg.tables);
    println!("{}", tr.t(keys::CIRCUIT_HEADING));
    for (i, load) in circuit.loads.iter().enumerate() {
        println!(
            "{}. {} | {} | {:.2} A",
            i + 1,
            load.name,
            load.power_label(),
            load.current_a
        );
    }
    println!(
        "{} {:.2} A",
        tr.t(keys::RESULT_TOTAL_CURRENT),
        circuit.total_current_a
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_BREAKER),
        report::breaker_text(&circuit.breaker, tr)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_GAUGE),
        report::gauge_text(&circuit.gauge, tr)
    );
    Ok(())
}

/// 텍스트 보고서를 파일로 저장한다.
pub fn handle_save_report(tr: &Translator, cfg: &Config, loads: &[Load]) -> Result<(), AppError> {
    if loads.is_empty() {
        println!("{}", tr.t(keys::CIRCUIT_EMPTY));
        return Ok(());
    }
    let circuit = circuit::aggregate(loads, &cfg.tables);
    let text = report::render_text_report(&circuit, tr);
    let name = read_line(tr.t(keys::REPORT_PROMPT_FILENAME))?;
    let file_name = if name.trim().is_empty() {
        "technical_report.txt"
    } else {
        name.trim()
    };
    std::fs::write(file_name, text)?;
    println!("{} {file_name}", tr.t(keys::REPORT_SAVED));
    Ok(())
}

/// 부하 목록을 비운다.
pub fn handle_clear_loads(tr: &Translator, loads: &mut Vec<Load>) -> Result<(), AppError> {
    loads.clear();
    println!("{}", tr.t(keys::CLEAR_DONE));
    Ok(())
}

/// 설정 메뉴를 처리한다. 현재는 표시 언어만 변경한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "ko-kr".to_string(),
        "2" => "en-us".to_string(),
        "3" => "es-es".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_power_unit(tr: &Translator) -> Result<PowerUnit, AppError> {
    println!("{}", tr.t(keys::POWER_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let unit = match sel.trim() {
        "2" => PowerUnit::Horsepower,
        _ => PowerUnit::Watts,
    };
    Ok(unit)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
