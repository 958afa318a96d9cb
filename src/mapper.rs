//! 출력 경로 계산 모듈
//!
//! 입력 파일 경로를 출력 루트 아래의 대응 경로로 변환합니다.
//! 입력 트리의 하위 폴더 구조를 그대로 유지하고 확장자만 교체합니다.

use std::path::{Path, PathBuf};

use crate::error::{AConvertError, Result};

/// 입력 파일의 출력 경로 계산
///
/// 입력 루트 기준 상대 경로를 구한 뒤, 출력 루트 아래에 같은 하위 구조로
/// 배치하고 말단 확장자를 `output_format`으로 교체합니다. 순수 함수이며
/// 파일 시스템에 접근하지 않습니다. 출력 디렉토리 생성은 쓰기 시점에
/// 호출자의 책임입니다.
///
/// # Arguments
/// * `input_root` - 입력 루트 폴더
/// * `input_path` - 입력 루트 아래의 입력 파일 경로
/// * `output_root` - 출력 루트 폴더
/// * `input_format` - 기대하는 입력 확장자 (점 제외, 대소문자 구분)
/// * `output_format` - 출력 확장자 (점 제외)
///
/// # Errors
/// * `OutsideRoot` - `input_path`가 `input_root` 아래에 있지 않은 경우
/// * `ExtensionMismatch` - 파일 이름이 `.{input_format}`으로 끝나지 않거나
///   확장자를 제외한 이름이 비어 있는 경우
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use aconvert::mapper::map_output_path;
///
/// let output = map_output_path(
///     Path::new("/music"),
///     Path::new("/music/album/track.m4a"),
///     Path::new("/out"),
///     "m4a",
///     "wav",
/// )
/// .unwrap();
/// assert_eq!(output, PathBuf::from("/out/album/track.wav"));
/// ```
pub fn map_output_path(
    input_root: &Path,
    input_path: &Path,
    output_root: &Path,
    input_format: &str,
    output_format: &str,
) -> Result<PathBuf> {
    let relative = input_path
        .strip_prefix(input_root)
        .map_err(|_| AConvertError::OutsideRoot {
            file: input_path.to_path_buf(),
            root: input_root.to_path_buf(),
        })?;

    let extension_mismatch = || AConvertError::ExtensionMismatch {
        file: input_path.to_path_buf(),
        extension: input_format.to_string(),
    };

    let name = relative
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(extension_mismatch)?;

    // 길이 기반으로 말단 ".{확장자}"만 잘라내므로 이름 안의 다른 점은 유지
    let suffix = format!(".{}", input_format);
    let stem = name
        .strip_suffix(suffix.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(extension_mismatch)?;

    let mut output = output_root.join(relative);
    output.set_file_name(format!("{}.{}", stem, output_format));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_simple_file() {
        let output = map_output_path(
            Path::new("/in"),
            Path::new("/in/song.m4a"),
            Path::new("/out"),
            "m4a",
            "wav",
        )
        .unwrap();

        assert_eq!(output, PathBuf::from("/out/song.wav"));
    }

    #[test]
    fn test_map_preserves_nested_structure() {
        let output = map_output_path(
            Path::new("/in"),
            Path::new("/in/a/b/y.m4a"),
            Path::new("/out"),
            "m4a",
            "wav",
        )
        .unwrap();

        assert_eq!(output, PathBuf::from("/out/a/b/y.wav"));
    }

    #[test]
    fn test_map_keeps_inner_dots() {
        let output = map_output_path(
            Path::new("/in"),
            Path::new("/in/song.old.m4a"),
            Path::new("/out"),
            "m4a",
            "wav",
        )
        .unwrap();

        assert_eq!(output, PathBuf::from("/out/song.old.wav"));
    }

    #[test]
    fn test_map_outside_root() {
        let result = map_output_path(
            Path::new("/in"),
            Path::new("/elsewhere/song.m4a"),
            Path::new("/out"),
            "m4a",
            "wav",
        );

        assert!(matches!(result, Err(AConvertError::OutsideRoot { .. })));
    }

    #[test]
    fn test_map_wrong_extension() {
        let result = map_output_path(
            Path::new("/in"),
            Path::new("/in/song.mp3"),
            Path::new("/out"),
            "m4a",
            "wav",
        );

        assert!(matches!(
            result,
            Err(AConvertError::ExtensionMismatch { .. })
        ));
    }

    #[test]
    fn test_map_extension_is_case_sensitive() {
        let result = map_output_path(
            Path::new("/in"),
            Path::new("/in/song.M4A"),
            Path::new("/out"),
            "m4a",
            "wav",
        );

        assert!(matches!(
            result,
            Err(AConvertError::ExtensionMismatch { .. })
        ));
    }

    #[test]
    fn test_map_empty_stem_rejected() {
        // 이름이 ".m4a" 하나뿐이면 숨김 파일 ".wav"가 되므로 거부
        let result = map_output_path(
            Path::new("/in"),
            Path::new("/in/.m4a"),
            Path::new("/out"),
            "m4a",
            "wav",
        );

        assert!(matches!(
            result,
            Err(AConvertError::ExtensionMismatch { .. })
        ));
    }
}
