//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI에서도 같은 코드를 쓴다.

pub mod app;
pub mod circuit;
pub mod config;
pub mod i18n;
pub mod load;
pub mod report;
pub mod ui_cli;
