use crate::circuit::{BreakerSelection, Circuit, GaugeSelection};
use crate::i18n::{keys, Translator};

const SEPARATOR_WIDTH: usize = 30;

/// 차단기 선정 결과의 표시 문자열.
pub fn breaker_text(breaker: &BreakerSelection, tr: &Translator) -> String {
    match breaker {
        BreakerSelection::Rating(b) => format!("{b} A"),
        BreakerSelection::ExceedsTable => tr.t(keys::RESULT_BREAKER_EXCEEDS).to_string(),
    }
}

/// 전선 선정 결과의 표시 문자열.
pub fn gauge_text(gauge: &GaugeSelection, tr: &Translator) -> String {
    match gauge {
        GaugeSelection::Awg(label) => label.clone(),
        GaugeSelection::ConsultSpecialTables => tr.t(keys::RESULT_GAUGE_CONSULT).to_string(),
    }
}

/// 회로 집계 결과를 텍스트 보고서로 렌더링한다.
///
/// 구성: 제목 → 구분선 → 부하별 전류 → 구분선 → 총 전류/차단기/전선.
/// 전류는 모두 소수 둘째 자리까지 표기한다.
pub fn render_text_report(circuit: &Circuit, tr: &Translator) -> String {
    let sep = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    out.push_str(tr.t(keys::REPORT_TITLE));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for load in &circuit.loads {
        out.push_str(&format!("- {}: {:.2} A\n", load.name, load.current_a));
    }
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!(
        "{}: {:.2} A\n",
        tr.t(keys::REPORT_TOTAL),
        circuit.total_current_a
    ));
    out.push_str(&format!(
        "{}: {}\n",
        tr.t(keys::REPORT_BREAKER),
        breaker_text(&circuit.breaker, tr)
    ));
    out.push_str(&format!(
        "{}: {}\n",
        tr.t(keys::REPORT_GAUGE),
        gauge_text(&circuit.gauge, tr)
    ));
    out
}
