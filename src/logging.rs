//! tracing 구독자 초기화.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 로그 출력을 설치한다.
///
/// `RUST_LOG`가 설정되어 있으면 그것을, 아니면 `default_filter`(설정 파일의
/// `log_level`)를 사용한다. 로그는 표준 오류로 나가므로 CLI 결과 출력과
/// 섞이지 않는다.
pub fn init(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
}
