//! 오디오 변환 모듈
//!
//! 개별 파일의 디코드/리샘플/인코드를 담당하는 변환기 인터페이스와
//! ffmpeg 서브프로세스 기반 기본 구현을 제공합니다.

use std::path::Path;
use std::process::Command;

use crate::error::{AConvertError, Result};

/// 단일 파일 변환기 인터페이스
///
/// 파일 하나를 입력 경로에서 읽어 출력 경로에 변환 결과를 씁니다.
/// 구현체는 실패를 에러로 반환할 뿐, 다른 파일의 변환에 영향을 주지
/// 않아야 합니다.
pub trait Transcoder {
    /// 입력 파일을 출력 경로의 대상 포맷으로 변환
    fn transcode(&self, input: &Path, output: &Path) -> Result<()>;
}

/// 변환 옵션
#[derive(Debug, Clone, Default)]
pub struct TranscodeOptions {
    /// 출력 샘플레이트 (None이면 원본 유지)
    pub sample_rate: Option<u32>,
}

impl TranscodeOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 출력 샘플레이트 설정
    pub fn with_sample_rate(mut self, sample_rate: Option<u32>) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

/// ffmpeg 서브프로세스를 사용하는 기본 변환기
///
/// 출력 포맷은 출력 파일의 확장자로 결정됩니다. 기존 출력 파일은
/// 덮어쓰므로 같은 입력으로 다시 실행해도 결과가 동일합니다.
#[derive(Debug)]
pub struct FfmpegTranscoder {
    options: TranscodeOptions,
}

impl FfmpegTranscoder {
    /// 새 변환기 생성
    pub fn new(options: TranscodeOptions) -> Self {
        Self { options }
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, input: &Path, output: &Path) -> Result<()> {
        let mut command = Command::new("ffmpeg");
        command
            .arg("-hide_banner")
            .arg("-nostdin")
            .args(["-loglevel", "error"])
            .arg("-y")
            .arg("-i")
            .arg(input);

        if let Some(sample_rate) = self.options.sample_rate {
            command.arg("-ar").arg(sample_rate.to_string());
        }

        command.arg(output);

        let result = command
            .output()
            .map_err(|e| AConvertError::TranscodeError {
                file: input.to_path_buf(),
                reason: format!("ffmpeg 실행 실패: {}", e),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(AConvertError::TranscodeError {
                file: input.to_path_buf(),
                reason: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}
