//! 부하 정규화(와트/마력, 안전계수, 입력 검증) 회귀 테스트.
use electrical_load_toolbox::load::{self, LoadCalcError, LoadInput, PowerUnit};

fn watts_input(power_w: f64, voltage_v: f64, continuous: bool) -> LoadInput {
    LoadInput {
        name: "test".to_string(),
        power_value: power_w,
        power_unit: PowerUnit::Watts,
        voltage_v,
        continuous_duty: continuous,
        motor_efficiency: 0.85,
    }
}

#[test]
fn watts_non_continuous_is_plain_division() {
    let load = load::normalize(watts_input(1000.0, 120.0, false)).expect("normalize");
    assert_eq!(load.real_power_w, 1000.0);
    assert_eq!(load.current_a, 1000.0 / 120.0);
}

#[test]
fn watts_continuous_gets_125_percent() {
    let load = load::normalize(watts_input(1000.0, 120.0, true)).expect("normalize");
    assert!((load.current_a - 1000.0 / 120.0 * 1.25).abs() < 1e-12);
}

#[test]
fn horsepower_applies_efficiency_and_factor() {
    // 2 HP, 120 V, 효율 0.85: 1492/0.85 = 1755.29 W → 14.63 A → ×1.25 = 18.29 A
    let load = load::normalize(LoadInput {
        name: "motor".to_string(),
        power_value: 2.0,
        power_unit: PowerUnit::Horsepower,
        voltage_v: 120.0,
        continuous_duty: false,
        motor_efficiency: 0.85,
    })
    .expect("normalize");
    assert!((load.real_power_w - 1755.294117).abs() < 1e-3);
    assert!((load.current_a - 18.2843).abs() < 1e-3);
}

#[test]
fn horsepower_factor_ignores_duty_flag() {
    let make = |continuous| {
        load::normalize(LoadInput {
            name: String::new(),
            power_value: 1.0,
            power_unit: PowerUnit::Horsepower,
            voltage_v: 230.0,
            continuous_duty: continuous,
            motor_efficiency: 0.9,
        })
        .expect("normalize")
    };
    // 전동기는 연속 여부와 무관하게 1.25 적용
    assert_eq!(make(false).current_a, make(true).current_a);
}

#[test]
fn zero_power_is_allowed() {
    let load = load::normalize(watts_input(0.0, 120.0, false)).expect("normalize");
    assert_eq!(load.current_a, 0.0);
}

#[test]
fn negative_power_is_rejected() {
    let err = load::normalize(watts_input(-5.0, 120.0, false)).unwrap_err();
    assert!(matches!(err, LoadCalcError::InvalidInput(_)));
}

#[test]
fn non_positive_voltage_is_rejected_before_division() {
    for v in [0.0, -120.0] {
        let err = load::normalize(watts_input(1000.0, v, false)).unwrap_err();
        assert!(matches!(err, LoadCalcError::InvalidInput(_)));
    }
}

#[test]
fn non_positive_efficiency_is_rejected_for_hp() {
    for eff in [0.0, -0.5, 1.5] {
        let err = load::normalize(LoadInput {
            name: String::new(),
            power_value: 1.0,
            power_unit: PowerUnit::Horsepower,
            voltage_v: 120.0,
            continuous_duty: false,
            motor_efficiency: eff,
        })
        .unwrap_err();
        assert!(matches!(err, LoadCalcError::InvalidInput(_)), "eff={eff}");
    }
}

#[test]
fn efficiency_is_ignored_for_watts_input() {
    // W 입력은 효율이 나눗수로 쓰이지 않으므로 0이어도 오류가 아니다
    let mut input = watts_input(500.0, 120.0, false);
    input.motor_efficiency = 0.0;
    let load = load::normalize(input).expect("normalize");
    assert_eq!(load.real_power_w, 500.0);
}

#[test]
fn empty_name_gets_placeholder() {
    let mut input = watts_input(100.0, 120.0, false);
    input.name = "   ".to_string();
    let load = load::normalize(input).expect("normalize");
    assert_eq!(load.name, load::DEFAULT_LOAD_NAME);
}

#[test]
fn power_label_shows_original_entry() {
    let load = load::normalize(LoadInput {
        name: "pump".to_string(),
        power_value: 2.0,
        power_unit: PowerUnit::Horsepower,
        voltage_v: 120.0,
        continuous_duty: false,
        motor_efficiency: 0.85,
    })
    .expect("normalize");
    assert_eq!(load.power_label(), "2 HP");
}
