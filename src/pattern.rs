//! 패턴 매칭 모듈
//!
//! glob 패턴을 사용한 파일 이름 필터링을 담당합니다. 패턴에 경로
//! 구분자('/')가 포함되면 파일 이름 대신 루트 기준 상대 경로 전체와
//! 비교하므로 특정 하위 폴더만 골라낼 수 있습니다.

use glob::Pattern;
use std::path::Path;

use crate::error::{AConvertError, Result};

/// 컴파일된 패턴 매처
#[derive(Default)]
pub struct PatternMatcher {
    pattern: Option<Pattern>,
    match_full_path: bool,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 글로브 패턴 문자열 (None이면 모든 파일 매칭)
    ///
    /// # Returns
    /// 컴파일된 `PatternMatcher` 또는 에러
    ///
    /// # Examples
    /// ```
    /// use aconvert::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Some("*_live_*".to_string())).unwrap();
    /// assert!(matcher.matches("concert_live_01.m4a"));
    /// assert!(!matcher.matches("studio_take.m4a"));
    /// ```
    pub fn new(pattern: Option<String>) -> Result<Self> {
        let match_full_path = pattern
            .as_deref()
            .map(|p| p.contains('/'))
            .unwrap_or(false);

        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p)
                    .map_err(|_| AConvertError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self {
            pattern: compiled,
            match_full_path,
        })
    }

    /// 파일 이름이 패턴과 일치하는지 확인
    ///
    /// # Arguments
    /// * `file_name` - 검사할 파일 이름
    ///
    /// # Returns
    /// 패턴 일치 여부 (패턴이 없으면 항상 true)
    pub fn matches(&self, file_name: &str) -> bool {
        match &self.pattern {
            Some(p) => p.matches(file_name),
            None => true,
        }
    }

    /// 루트 기준 상대 경로가 패턴과 일치하는지 확인
    ///
    /// 패턴에 '/'가 있으면 상대 경로 전체와, 없으면 말단 파일 이름과
    /// 비교합니다.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use aconvert::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Some("live/*".to_string())).unwrap();
    /// assert!(matcher.matches_path(Path::new("live/encore.m4a")));
    /// assert!(!matcher.matches_path(Path::new("studio/take1.m4a")));
    /// ```
    pub fn matches_path(&self, relative: &Path) -> bool {
        let Some(pattern) = &self.pattern else {
            return true;
        };

        let candidate = if self.match_full_path {
            relative.to_str()
        } else {
            relative.file_name().and_then(|n| n.to_str())
        };

        candidate.map(|c| pattern.matches(c)).unwrap_or(false)
    }

    /// 패턴이 설정되어 있는지 확인
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pattern_matcher_with_wildcard() {
        let matcher = PatternMatcher::new(Some("*_live_*".to_string())).unwrap();
        assert!(matcher.matches("concert_live_01.m4a"));
        assert!(matcher.matches("tour2023_live_encore.m4a"));
        assert!(!matcher.matches("studio.m4a"));
        assert!(!matcher.matches("live.m4a"));
    }

    #[test]
    fn test_pattern_matcher_with_question_mark() {
        let matcher = PatternMatcher::new(Some("track?.m4a".to_string())).unwrap();
        assert!(matcher.matches("track1.m4a"));
        assert!(matcher.matches("trackA.m4a"));
        assert!(!matcher.matches("track.m4a"));
        assert!(!matcher.matches("track12.m4a"));
    }

    #[test]
    fn test_pattern_matcher_with_brackets() {
        let matcher = PatternMatcher::new(Some("cd[0-9]_*.m4a".to_string())).unwrap();
        assert!(matcher.matches("cd1_opening.m4a"));
        assert!(matcher.matches("cd9_finale.m4a"));
        assert!(!matcher.matches("cdX_hidden.m4a"));
    }

    #[test]
    fn test_pattern_matcher_none() {
        let matcher = PatternMatcher::new(None).unwrap();
        assert!(matcher.matches("anything.m4a"));
        assert!(matcher.matches_path(&PathBuf::from("any/nested/file.m4a")));
    }

    #[test]
    fn test_name_pattern_ignores_parent_folders() {
        let matcher = PatternMatcher::new(Some("*_live_*".to_string())).unwrap();
        assert!(matcher.matches_path(&PathBuf::from("a/b/concert_live_01.m4a")));
        assert!(!matcher.matches_path(&PathBuf::from("a/b/studio_take.m4a")));
    }

    #[test]
    fn test_path_pattern_scopes_to_subdirectory() {
        let matcher = PatternMatcher::new(Some("live/*".to_string())).unwrap();
        assert!(matcher.matches_path(&PathBuf::from("live/encore.m4a")));
        assert!(!matcher.matches_path(&PathBuf::from("studio/encore.m4a")));
        // '/'가 있으면 파일 이름만으로는 매칭되지 않음
        assert!(!matcher.matches_path(&PathBuf::from("encore.m4a")));
    }

    #[test]
    fn test_pattern_matcher_invalid() {
        let result = PatternMatcher::new(Some("[invalid".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_has_pattern() {
        let with_pattern = PatternMatcher::new(Some("*.m4a".to_string())).unwrap();
        let without_pattern = PatternMatcher::new(None).unwrap();

        assert!(with_pattern.has_pattern());
        assert!(!without_pattern.has_pattern());
    }
}
