//! 파일 탐색 모듈
//!
//! 입력 폴더 트리를 순회하며 대상 확장자의 오디오 파일을 수집합니다.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::pattern::PatternMatcher;

/// 입력 폴더 아래의 오디오 파일 수집
///
/// 트리 전체를 순회하여 이름이 `.{extension}`으로 끝나는 일반 파일만
/// 모읍니다 (대소문자 구분, 말단 일치). 읽을 수 없는 항목은 건너뛰며
/// 탐색 전체를 중단하지 않습니다. 반환되는 목록은 탐색 완료 후 확정되므로
/// 전체 작업 수를 미리 알 수 있습니다.
///
/// # Arguments
/// * `root` - 탐색 시작 폴더
/// * `extension` - 대상 확장자 (점 제외)
/// * `max_depth` - 최대 탐색 깊이 (None이면 제한 없음)
/// * `matcher` - 글로브 필터 (패턴에 '/'가 있으면 루트 기준 상대 경로와 비교)
/// * `on_found` - 파일 발견 시마다 호출되는 콜백 (탐색 진행 표시용)
///
/// # Returns
/// 발견된 파일 경로 목록 (형제 간 순서는 보장하지 않음)
pub fn scan_audio_files<F>(
    root: &Path,
    extension: &str,
    max_depth: Option<usize>,
    matcher: &PatternMatcher,
    mut on_found: F,
) -> Vec<PathBuf>
where
    F: FnMut(&Path),
{
    let walker = match max_depth {
        Some(depth) => WalkDir::new(root).max_depth(depth),
        None => WalkDir::new(root),
    };

    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    // 읽기 실패한 항목은 빈 폴더 취급으로 건너뜀
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let extension_ok = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(suffix.as_str()))
            .unwrap_or(false);

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if extension_ok && matcher.matches_path(relative) {
            on_found(path);
            files.push(path.to_path_buf());
        }
    }

    files
}
