//! aconvert - AUDIO FOLDER CONVERTER
//!
//! 폴더 내 오디오 파일들을 하위 구조를 유지한 채 다른 포맷으로 일괄
//! 변환하는 고성능 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🚀 **병렬 변환**: 고정 크기 스레드 풀로 대량 파일 고속 변환
//! - 📊 **진행률 표시**: 탐색/변환 진행 상황을 시각적으로 확인
//! - 🛡️ **장애 격리**: 파일 하나가 깨져도 나머지 변환은 계속 진행
//! - 🎚️ **샘플레이트 변경**: 출력 샘플레이트 지정 지원
//! - 🔍 **패턴 필터링**: glob 형식의 파일 이름 필터링
//! - 📈 **상세 통계**: 성공/실패 파일 수, 입출력 용량, 성공률 등 표시
//! - 🧪 **드라이런 모드**: 실제 변환 없이 처리될 파일 목록 미리 확인
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (m4a → wav)
//! aconvert -i ./music -o ./converted
//!
//! # 포맷과 샘플레이트 지정
//! aconvert -i ./music -o ./converted -f m4a -t flac --sample-rate 44100
//!
//! # 스레드 수 지정 + 드라이런
//! aconvert -i ./music -o ./converted -j 4 --dry-run
//! ```

pub mod cli;
pub mod error;
pub mod mapper;
pub mod pattern;
pub mod pool;
pub mod scanner;
pub mod stats;
pub mod transcode;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{AConvertError, Result};
pub use mapper::map_output_path;
pub use pattern::PatternMatcher;
pub use pool::{run_pool, ErrorSink, Outcome, ProgressTracker, WorkItem};
pub use scanner::scan_audio_files;
pub use stats::{format_bytes, Statistics};
pub use transcode::{FfmpegTranscoder, TranscodeOptions, Transcoder};
