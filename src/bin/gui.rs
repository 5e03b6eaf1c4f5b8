#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use electrical_load_toolbox::{
    circuit, config,
    i18n::{self, keys},
    load::{self, Load, LoadInput, PowerUnit},
    report,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/es-es)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([520.0, 680.0]);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Electrical Load Toolbox",
        cfg,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["EL_Cal.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// CLI 메뉴 문자열("1) 부하 추가")에서 번호 접두어를 제거한다.
fn menu_label(text: &str) -> &str {
    text.split_once(") ").map(|(_, rest)| rest).unwrap_or(text)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    // 세션 부하 목록
    loads: Vec<Load>,
    // 입력 폼
    name_input: String,
    voltage_input: f64,
    power_unit: PowerUnit,
    power_input: f64,
    continuous_duty: bool,
    efficiency_input: f64,
    add_error: Option<String>,
    report_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang, None);
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            lang_save_status: None,
            loads: Vec::new(),
            name_input: String::new(),
            voltage_input: 120.0,
            power_unit: PowerUnit::Watts,
            power_input: 0.0,
            continuous_duty: false,
            efficiency_input: 0.85,
            add_error: None,
            report_status: None,
        }
    }

    fn add_load_from_form(&mut self) {
        match load::normalize(LoadInput {
            name: self.name_input.trim().to_string(),
            power_value: self.power_input,
            power_unit: self.power_unit,
            voltage_v: self.voltage_input,
            continuous_duty: self.continuous_duty,
            motor_efficiency: self.efficiency_input,
        }) {
            Ok(load) => {
                self.loads.push(load);
                self.name_input.clear();
                self.power_input = 0.0;
                self.continuous_duty = false;
                self.add_error = None;
                self.report_status = None;
            }
            Err(e) => self.add_error = Some(e.to_string()),
        }
    }

    fn save_report(&mut self) {
        let circuit = circuit::aggregate(&self.loads, &self.config.tables);
        let text = report::render_text_report(&circuit, &self.tr);
        if let Some(path) = FileDialog::new()
            .set_file_name("technical_report.txt")
            .save_file()
        {
            match fs::write(&path, text) {
                Ok(()) => {
                    self.report_status = Some(format!(
                        "{} {}",
                        self.tr.t(keys::REPORT_SAVED),
                        path.display()
                    ));
                }
                Err(e) => {
                    self.report_status =
                        Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
                }
            }
        }
    }

    fn form_section(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::ADD_LOAD_HEADING).trim())
            .on_hover_text(self.tr.t(keys::HELP_ADD_LOAD));
        egui::Grid::new("load_form").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_LOAD_NAME).trim());
            ui.text_edit_singleline(&mut self.name_input);
            ui.end_row();

            ui.label(self.tr.t(keys::PROMPT_VOLTAGE).trim());
            ui.add(egui::DragValue::new(&mut self.voltage_input).speed(1.0));
            ui.end_row();

            ui.label(self.tr.t(keys::POWER_UNIT_OPTIONS).trim());
            egui::ComboBox::from_id_source("power_unit")
                .selected_text(self.power_unit.symbol())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.power_unit, PowerUnit::Watts, "W");
                    ui.selectable_value(&mut self.power_unit, PowerUnit::Horsepower, "HP");
                });
            ui.end_row();

            ui.label(self.tr.t(keys::PROMPT_POWER_VALUE).trim());
            ui.add(egui::DragValue::new(&mut self.power_input).speed(10.0));
            ui.end_row();

            ui.label(self.tr.t(keys::PROMPT_CONTINUOUS).trim());
            ui.checkbox(&mut self.continuous_duty, "");
            ui.end_row();

            ui.label(self.tr.t(keys::PROMPT_EFFICIENCY).trim());
            ui.add_enabled(
                self.power_unit == PowerUnit::Horsepower,
                egui::Slider::new(&mut self.efficiency_input, 0.5..=1.0),
            );
            ui.end_row();
        });
        if ui.button(menu_label(self.tr.t(keys::MAIN_MENU_ADD_LOAD))).clicked() {
            self.add_load_from_form();
        }
        if let Some(ref err) = self.add_error {
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }
    }

    fn circuit_section(&mut self, ui: &mut egui::Ui) {
        if self.loads.is_empty() {
            ui.label(self.tr.t(keys::CIRCUIT_EMPTY));
            return;
        }
        ui.heading(self.tr.t(keys::CIRCUIT_HEADING).trim())
            .on_hover_text(self.tr.t(keys::HELP_CIRCUIT));
        let circuit = circuit::aggregate(&self.loads, &self.config.tables);
        for (i, load) in circuit.loads.iter().enumerate() {
            ui.label(format!(
                "{}. {} | {} | {:.2} A",
                i + 1,
                load.name,
                load.power_label(),
                load.current_a
            ));
        }
        ui.separator();
        ui.label(format!(
            "{} {:.2} A",
            self.tr.t(keys::RESULT_TOTAL_CURRENT),
            circuit.total_current_a
        ));
        ui.label(format!(
            "{} {}",
            self.tr.t(keys::RESULT_BREAKER),
            report::breaker_text(&circuit.breaker, &self.tr)
        ));
        ui.label(format!(
            "{} {}",
            self.tr.t(keys::RESULT_GAUGE),
            report::gauge_text(&circuit.gauge, &self.tr)
        ));
        ui.horizontal(|ui| {
            if ui
                .button(menu_label(self.tr.t(keys::MAIN_MENU_SAVE_REPORT)))
                .on_hover_text(self.tr.t(keys::HELP_REPORT))
                .clicked()
            {
                self.save_report();
            }
            if ui
                .button(menu_label(self.tr.t(keys::MAIN_MENU_CLEAR_LOADS)))
                .clicked()
            {
                self.loads.clear();
                self.report_status = None;
            }
        });
        if let Some(ref status) = self.report_status {
            ui.label(status.clone());
        }
    }

    fn settings_section(&mut self, ui: &mut egui::Ui) {
        ui.collapsing(self.tr.t(keys::SETTINGS_HEADING).trim(), |ui| {
            ui.label(self.tr.t(keys::HELP_SETTINGS));
            ui.horizontal(|ui| {
                ui.label(self.tr.t(keys::SETTINGS_CURRENT_LANGUAGE));
                egui::ComboBox::from_id_source("language")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        for code in ["auto", "ko-kr", "en-us", "es-es"] {
                            ui.selectable_value(&mut self.lang_input, code.to_string(), code);
                        }
                    });
            });
            if ui.button(self.tr.t(keys::SETTINGS_APPLY)).clicked() {
                self.config.language = self.lang_input.clone();
                let lang =
                    i18n::resolve_language("auto", Some(self.config.language.as_str()));
                self.tr = i18n::Translator::new_with_pack(&lang, None);
                self.lang_save_status = match self.config.save() {
                    Ok(()) => Some(format!(
                        "{} {}",
                        self.tr.t(keys::SETTINGS_SAVED),
                        self.config.language
                    )),
                    Err(e) => Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))),
                };
            }
            if let Some(ref status) = self.lang_save_status {
                ui.label(status.clone());
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Electrical Load Toolbox");
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.form_section(ui);
                ui.separator();
                self.circuit_section(ui);
                ui.separator();
                self.settings_section(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_match_original_ui() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.voltage_input, 120.0);
        assert_eq!(app.efficiency_input, 0.85);
        assert!(app.loads.is_empty());
    }
}
