//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// aconvert CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "aconvert",
    author = "YourName <your@email.com>",
    version,
    about = "AUDIO FOLDER CONVERTER - 폴더 내 오디오 파일들을 다른 포맷으로 일괄 변환하는 고성능 CLI 도구",
    long_about = r#"
AUDIO FOLDER CONVERTER
======================

지정된 폴더 내의 모든 오디오 파일을 탐색하여
하위 폴더 구조를 유지한 채 다른 포맷으로 일괄 변환합니다.

특징:
  • 고정 크기 스레드 풀로 대량 파일 병렬 변환
  • 진행률 표시 및 상세 통계
  • 파일 하나가 실패해도 나머지 변환은 계속 진행
  • 샘플레이트 변경 지원
  • 상세한 오류 보고

예제:
  aconvert -i ./music -o ./converted
  aconvert -i ./music -o ./converted -f m4a -t wav
  aconvert -i ./music -o ./converted --sample-rate 44100 -j 4
  aconvert -i ./music -o ./converted --pattern "*_live_*" --dry-run
"#
)]
pub struct Args {
    /// 오디오 파일들이 있는 입력 폴더 경로
    #[arg(short, long)]
    pub input: PathBuf,

    /// 변환된 파일이 저장될 출력 폴더 경로
    #[arg(short, long)]
    pub output: PathBuf,

    /// 입력 오디오 포맷 (점 없는 확장자)
    #[arg(short = 'f', long, default_value = "m4a")]
    pub input_format: String,

    /// 출력 오디오 포맷 (점 없는 확장자)
    #[arg(short = 't', long, default_value = "wav")]
    pub output_format: String,

    /// 출력 샘플레이트 Hz (미지정 시 원본 유지)
    #[arg(short = 'r', long)]
    pub sample_rate: Option<u32>,

    /// 병렬 변환 스레드 수
    #[arg(short = 'j', long, default_value_t = 8)]
    pub threads: usize,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "*_live_*", "track?.m4a")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 파일 검색 진행 상황 표시
    #[arg(long)]
    pub scan_progress: bool,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 에러 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl Args {
    /// "입력 → 출력" 포맷 표기 문자열 반환
    pub fn format_label(&self) -> String {
        format!("{} → {}", self.input_format, self.output_format)
    }
}
