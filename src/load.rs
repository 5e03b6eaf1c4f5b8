use serde::{Deserialize, Serialize};

/// 마력(HP) → 와트 환산 계수.
pub const WATTS_PER_HP: f64 = 746.0;
/// 연속 부하/전동기 부하에 적용하는 규정 안전계수 (NEC 125%).
pub const CONTINUOUS_SAFETY_FACTOR: f64 = 1.25;
/// 이름이 비어 있을 때 사용하는 기본 라벨.
pub const DEFAULT_LOAD_NAME: &str = "일반 부하";

/// 입력 전력 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watts,
    Horsepower,
}

impl PowerUnit {
    /// 표시용 기호를 반환한다.
    pub fn symbol(&self) -> &'static str {
        match self {
            PowerUnit::Watts => "W",
            PowerUnit::Horsepower => "HP",
        }
    }
}

/// 부하 계산 오류를 표현한다.
#[derive(Debug)]
pub enum LoadCalcError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for LoadCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadCalcError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for LoadCalcError {}

/// 부하 정규화 입력값. UI 계층이 폼에서 그대로 채워 넘긴다.
#[derive(Debug, Clone)]
pub struct LoadInput {
    pub name: String,
    pub power_value: f64,
    pub power_unit: PowerUnit,
    pub voltage_v: f64,
    /// 3시간 이상 연속 운전하는 부하 여부
    pub continuous_duty: bool,
    /// 전동기 효율(0~1]. HP 입력일 때만 나눗수로 사용된다.
    pub motor_efficiency: f64,
}

/// 정규화된 부하. 생성 시점에 실소비전력과 전류가 확정되며 이후 불변이다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    pub name: String,
    pub power_value: f64,
    pub power_unit: PowerUnit,
    pub voltage_v: f64,
    pub continuous_duty: bool,
    pub motor_efficiency: f64,
    /// 효율 보정 후 실소비전력 [W]
    pub real_power_w: f64,
    /// 안전계수 적용 후 정격 전류 [A]
    pub current_a: f64,
}

impl Load {
    /// "2 HP", "1000 W" 형태의 원본 입력 표시 문자열.
    pub fn power_label(&self) -> String {
        format!("{} {}", self.power_value, self.power_unit.symbol())
    }
}

/// 원시 부하 사양을 실소비전력과 정격 전류로 정규화한다.
///
/// - HP 입력: real_power_w = power_value * 746 / motor_efficiency
/// - W 입력: real_power_w = power_value
/// - 연속 부하 또는 HP(전동기) 부하는 전류에 1.25 안전계수를 적용한다.
///   전동기는 continuous_duty 플래그와 무관하게 항상 적용된다.
pub fn normalize(input: LoadInput) -> Result<Load, LoadCalcError> {
    if input.voltage_v <= 0.0 {
        return Err(LoadCalcError::InvalidInput("전압은 0보다 커야 합니다."));
    }
    if input.power_value < 0.0 {
        return Err(LoadCalcError::InvalidInput("전력값은 음수일 수 없습니다."));
    }

    let real_power_w = match input.power_unit {
        PowerUnit::Horsepower => {
            if input.motor_efficiency <= 0.0 || input.motor_efficiency > 1.0 {
                return Err(LoadCalcError::InvalidInput(
                    "전동기 효율은 0 초과 1 이하여야 합니다.",
                ));
            }
            input.power_value * WATTS_PER_HP / input.motor_efficiency
        }
        PowerUnit::Watts => input.power_value,
    };

    let base_current_a = real_power_w / input.voltage_v;
    let current_a = if input.continuous_duty || input.power_unit == PowerUnit::Horsepower {
        base_current_a * CONTINUOUS_SAFETY_FACTOR
    } else {
        base_current_a
    };

    let name = if input.name.trim().is_empty() {
        DEFAULT_LOAD_NAME.to_string()
    } else {
        input.name
    };

    Ok(Load {
        name,
        power_value: input.power_value,
        power_unit: input.power_unit,
        voltage_v: input.voltage_v,
        continuous_duty: input.continuous_duty,
        motor_efficiency: input.motor_efficiency,
        real_power_w,
        current_a,
    })
}
