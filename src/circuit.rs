use serde::{Deserialize, Serialize};

use crate::load::Load;

/// 차단기 선정 결과. 표 범위를 넘는 경우는 숫자와 섞이지 않는 별도 변형으로 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerSelection {
    /// 표준 상용 정격 [A]
    Rating(u32),
    /// 총 전류가 표의 최대 정격을 초과
    ExceedsTable,
}

/// 전선 굵기 선정 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GaugeSelection {
    /// AWG 라벨 (ex: "10 AWG")
    Awg(String),
    /// 총 전류가 표의 최대 한계를 초과하여 전문 표 참조 필요
    ConsultSpecialTables,
}

/// 전선 굵기 표의 한 행. max_amps는 포함 상한이다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeRow {
    pub max_amps: f64,
    pub label: String,
}

/// 차단기/전선 선정에 쓰이는 기준 표. 규정 개정에 대비해 설정으로 주입한다.
///
/// 두 표 모두 오름차순을 전제로 한다. (상용 정격 13개, 전선 8행 기본값)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingTables {
    /// 표준 상용 차단기 정격 [A], 오름차순
    pub breaker_ratings_a: Vec<u32>,
    /// NEC 간이 전선 표, (포함 상한 전류 → AWG 라벨), 오름차순
    pub gauge_rows: Vec<GaugeRow>,
}

impl Default for SizingTables {
    fn default() -> Self {
        let gauge = |max_amps: f64, label: &str| GaugeRow {
            max_amps,
            label: label.to_string(),
        };
        Self {
            breaker_ratings_a: vec![15, 20, 30, 40, 50, 60, 70, 80, 100, 125, 150, 175, 200],
            gauge_rows: vec![
                gauge(15.0, "14 AWG"),
                gauge(20.0, "12 AWG"),
                gauge(30.0, "10 AWG"),
                gauge(55.0, "8 AWG"),
                gauge(75.0, "6 AWG"),
                gauge(95.0, "4 AWG"),
                gauge(115.0, "3 AWG"),
                gauge(130.0, "2 AWG"),
            ],
        }
    }
}

/// 부하 목록에서 파생되는 회로 뷰. 목록이 바뀔 때마다 전체를 다시 계산한다.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// 입력 순서를 유지한 부하 목록
    pub loads: Vec<Load>,
    /// 전 부하 정격 전류의 합 [A]
    pub total_current_a: f64,
    pub breaker: BreakerSelection,
    pub gauge: GaugeSelection,
}

/// 부하 목록을 합산하고 차단기 정격과 전선 굵기를 선정한다.
///
/// 빈 목록은 총 전류 0으로 처리하며 가장 작은 표 항목이 선정된다.
/// 순수 함수이므로 같은 입력에 대해 항상 같은 결과를 반환한다.
pub fn aggregate(loads: &[Load], tables: &SizingTables) -> Circuit {
    let total_current_a: f64 = loads.iter().map(|l| l.current_a).sum();
    Circuit {
        loads: loads.to_vec(),
        total_current_a,
        breaker: select_breaker(total_current_a, tables),
        gauge: select_gauge(total_current_a, tables),
    }
}

/// 총 전류 이상인 가장 작은 상용 정격을 고른다.
pub fn select_breaker(total_current_a: f64, tables: &SizingTables) -> BreakerSelection {
    tables
        .breaker_ratings_a
        .iter()
        .find(|&&b| f64::from(b) >= total_current_a)
        .map(|&b| BreakerSelection::Rating(b))
        .unwrap_or(BreakerSelection::ExceedsTable)
}

/// 총 전류를 포함 상한으로 갖는 첫 행의 AWG 라벨을 고른다.
pub fn select_gauge(total_current_a: f64, tables: &SizingTables) -> GaugeSelection {
    tables
        .gauge_rows
        .iter()
        .find(|row| total_current_a <= row.max_amps)
        .map(|row| GaugeSelection::Awg(row.label.clone()))
        .unwrap_or(GaugeSelection::ConsultSpecialTables)
}
