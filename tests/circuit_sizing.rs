//! 회로 집계와 차단기/전선 선정 테스트.
use electrical_load_toolbox::circuit::{
    self, BreakerSelection, GaugeSelection, SizingTables,
};
use electrical_load_toolbox::load::{self, Load, LoadInput, PowerUnit};

fn watts_load(power_w: f64, voltage_v: f64) -> Load {
    load::normalize(LoadInput {
        name: String::new(),
        power_value: power_w,
        power_unit: PowerUnit::Watts,
        voltage_v,
        continuous_duty: false,
        motor_efficiency: 0.85,
    })
    .expect("normalize")
}

/// 지정한 총 전류를 만드는 단일 부하 (120V, 비연속 W 부하).
fn load_with_current(current_a: f64) -> Load {
    watts_load(current_a * 120.0, 120.0)
}

#[test]
fn empty_list_selects_smallest_entries() {
    let tables = SizingTables::default();
    let circuit = circuit::aggregate(&[], &tables);
    assert_eq!(circuit.total_current_a, 0.0);
    assert_eq!(circuit.breaker, BreakerSelection::Rating(15));
    assert_eq!(circuit.gauge, GaugeSelection::Awg("14 AWG".to_string()));
}

#[test]
fn boundary_is_inclusive_at_table_edges() {
    let tables = SizingTables::default();
    assert_eq!(
        circuit::select_breaker(15.0, &tables),
        BreakerSelection::Rating(15)
    );
    assert_eq!(
        circuit::select_gauge(15.0, &tables),
        GaugeSelection::Awg("14 AWG".to_string())
    );
    assert_eq!(
        circuit::select_breaker(15.01, &tables),
        BreakerSelection::Rating(20)
    );
    assert_eq!(
        circuit::select_gauge(15.01, &tables),
        GaugeSelection::Awg("12 AWG".to_string())
    );
}

#[test]
fn over_table_range_is_tagged_not_numeric() {
    let tables = SizingTables::default();
    assert_eq!(
        circuit::select_breaker(250.0, &tables),
        BreakerSelection::ExceedsTable
    );
    assert_eq!(
        circuit::select_gauge(250.0, &tables),
        GaugeSelection::ConsultSpecialTables
    );
}

#[test]
fn example_circuit_end_to_end() {
    // 1000 W @ 120 V (비연속) + 2 HP @ 120 V (효율 0.85)
    let tables = SizingTables::default();
    let l1 = watts_load(1000.0, 120.0);
    let l2 = load::normalize(LoadInput {
        name: "motor".to_string(),
        power_value: 2.0,
        power_unit: PowerUnit::Horsepower,
        voltage_v: 120.0,
        continuous_duty: false,
        motor_efficiency: 0.85,
    })
    .expect("normalize");
    assert!((l1.current_a - 8.33).abs() < 5e-3);
    assert!((l2.current_a - 18.2843).abs() < 1e-3);

    let circuit = circuit::aggregate(&[l1, l2], &tables);
    assert!((circuit.total_current_a - 26.62).abs() < 5e-3);
    assert_eq!(circuit.breaker, BreakerSelection::Rating(30));
    assert_eq!(circuit.gauge, GaugeSelection::Awg("10 AWG".to_string()));
}

#[test]
fn aggregate_is_idempotent() {
    let tables = SizingTables::default();
    let loads = vec![load_with_current(8.0), load_with_current(12.5)];
    let a = circuit::aggregate(&loads, &tables);
    let b = circuit::aggregate(&loads, &tables);
    assert_eq!(a.total_current_a.to_bits(), b.total_current_a.to_bits());
    assert_eq!(a.breaker, b.breaker);
    assert_eq!(a.gauge, b.gauge);
}

#[test]
fn total_and_selection_are_monotonic() {
    let tables = SizingTables::default();
    let breaker_amps = |sel: &BreakerSelection| match sel {
        BreakerSelection::Rating(b) => f64::from(*b),
        BreakerSelection::ExceedsTable => f64::INFINITY,
    };
    let mut prev_total = -1.0;
    let mut prev_breaker = 0.0;
    for current in [0.0, 5.0, 14.99, 15.0, 16.0, 29.0, 80.0, 129.0, 199.0, 300.0] {
        let circuit = circuit::aggregate(&[load_with_current(current)], &tables);
        assert!(circuit.total_current_a >= prev_total);
        let b = breaker_amps(&circuit.breaker);
        assert!(b >= prev_breaker, "breaker shrank at {current} A");
        prev_total = circuit.total_current_a;
        prev_breaker = b;
    }
}

#[test]
fn insertion_order_is_preserved() {
    let tables = SizingTables::default();
    let mut first = load_with_current(1.0);
    first.name = "first".to_string();
    let mut second = load_with_current(2.0);
    second.name = "second".to_string();
    let circuit = circuit::aggregate(&[first, second], &tables);
    assert_eq!(circuit.loads[0].name, "first");
    assert_eq!(circuit.loads[1].name, "second");
}

#[test]
fn injected_table_variant_is_honored() {
    // 관측된 11항목 변형표: 200A 대신 150A가 상한인 경우
    let tables = SizingTables {
        breaker_ratings_a: vec![15, 20, 30, 40, 50, 60, 70, 80, 100, 125, 150],
        ..SizingTables::default()
    };
    assert_eq!(
        circuit::select_breaker(160.0, &tables),
        BreakerSelection::ExceedsTable
    );
}
