//! 에러 타입 정의 모듈
//!
//! aconvert에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// aconvert에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum AConvertError {
    /// 입력 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path:?}")]
    InputNotFound { path: PathBuf },

    /// 입력이 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path:?}")]
    NotADirectory { path: PathBuf },

    /// 스레드 수가 0
    #[error("스레드 수는 1 이상이어야 합니다: {count}")]
    InvalidThreadCount { count: usize },

    /// 유효하지 않은 포맷 문자열 (빈 문자열 또는 점으로 시작)
    #[error("유효하지 않은 오디오 포맷: {format:?} (점 없는 확장자를 입력하세요)")]
    InvalidFormat { format: String },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 입력 파일이 입력 루트 아래에 있지 않음
    #[error("입력 루트 {root:?} 밖의 경로입니다: {file:?}")]
    OutsideRoot { file: PathBuf, root: PathBuf },

    /// 파일 이름이 기대한 확장자로 끝나지 않음
    #[error("파일 이름이 .{extension} 확장자로 끝나지 않습니다: {file:?}")]
    ExtensionMismatch { file: PathBuf, extension: String },

    /// 출력 디렉토리 생성 실패
    #[error("출력 디렉토리 생성 실패 ({path:?}): {reason}")]
    CreateDirError { path: PathBuf, reason: String },

    /// 오디오 변환 실패
    #[error("변환 실패 ({file:?}): {reason}")]
    TranscodeError { file: PathBuf, reason: String },

    /// 스레드 풀 초기화 실패
    #[error("스레드 풀 초기화 실패: {reason}")]
    ThreadPoolError { reason: String },
}

/// aconvert 결과 타입 별칭
pub type Result<T> = std::result::Result<T, AConvertError>;
