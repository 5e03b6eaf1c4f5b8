//! 텍스트 보고서 렌더링 테스트.
use electrical_load_toolbox::circuit::{self, SizingTables};
use electrical_load_toolbox::i18n::Translator;
use electrical_load_toolbox::load::{self, LoadInput, PowerUnit};
use electrical_load_toolbox::report;

fn sample_circuit() -> circuit::Circuit {
    let l1 = load::normalize(LoadInput {
        name: "heater".to_string(),
        power_value: 1000.0,
        power_unit: PowerUnit::Watts,
        voltage_v: 120.0,
        continuous_duty: false,
        motor_efficiency: 0.85,
    })
    .expect("normalize");
    let l2 = load::normalize(LoadInput {
        name: "pump motor".to_string(),
        power_value: 2.0,
        power_unit: PowerUnit::Horsepower,
        voltage_v: 120.0,
        continuous_duty: false,
        motor_efficiency: 0.85,
    })
    .expect("normalize");
    circuit::aggregate(&[l1, l2], &SizingTables::default())
}

#[test]
fn report_has_title_loads_and_totals_in_order() {
    let tr = Translator::new("en");
    let text = report::render_text_report(&sample_circuit(), &tr);
    let title_pos = text.find("ELECTRICAL TECHNICAL REPORT").expect("title");
    let load_pos = text.find("- heater: 8.33 A").expect("per-load line");
    let total_pos = text.find("TOTAL AMPS: 26.62 A").expect("total");
    let breaker_pos = text.find("RECOMMENDED BREAKER: 30 A").expect("breaker");
    let gauge_pos = text.find("RECOMMENDED CABLE: 10 AWG").expect("gauge");
    assert!(title_pos < load_pos);
    assert!(load_pos < total_pos);
    assert!(total_pos < breaker_pos);
    assert!(breaker_pos < gauge_pos);
}

#[test]
fn report_currents_use_two_decimals() {
    let tr = Translator::new("en");
    let text = report::render_text_report(&sample_circuit(), &tr);
    assert!(text.contains("- pump motor: 18.28 A") || text.contains("- pump motor: 18.29 A"));
}

#[test]
fn out_of_range_report_shows_markers() {
    let tr = Translator::new("en");
    let big = load::normalize(LoadInput {
        name: "furnace".to_string(),
        power_value: 30_000.0,
        power_unit: PowerUnit::Watts,
        voltage_v: 120.0,
        continuous_duty: false,
        motor_efficiency: 0.85,
    })
    .expect("normalize");
    let circuit = circuit::aggregate(&[big], &SizingTables::default());
    let text = report::render_text_report(&circuit, &tr);
    assert!(text.contains("Exceeds table range"));
    assert!(text.contains("Consult special tables"));
}

#[test]
fn korean_translator_renders_korean_labels() {
    let tr = Translator::new("ko");
    let text = report::render_text_report(&sample_circuit(), &tr);
    assert!(text.contains("전기 기술 보고서"));
    assert!(text.contains("총 전류: 26.62 A"));
}
