//! 작업 풀 모듈
//!
//! 고정 크기 스레드 풀로 작업 항목을 병렬 처리합니다. 각 항목의 결과는
//! 채널을 통해 단일 소비자에게 전달되어 진행률과 에러가 집계됩니다.
//! 개별 항목의 실패는 해당 항목에서만 끝나며 나머지 작업을 중단시키지
//! 않습니다.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Mutex};

use crate::error::{AConvertError, Result};
use crate::transcode::Transcoder;

/// 작업 항목: 입력 파일 하나와 그에 대응하는 출력 경로
#[derive(Debug, Clone)]
pub struct WorkItem {
    /// 입력 파일 경로
    pub input: PathBuf,
    /// 출력 파일 경로
    pub output: PathBuf,
}

impl WorkItem {
    /// 새 작업 항목 생성
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }
}

/// 작업 항목 하나의 처리 결과 (항목당 정확히 한 번 생성)
#[derive(Debug)]
pub struct Outcome {
    /// 처리된 작업 항목
    pub item: WorkItem,
    /// 에러 메시지 (실패 시)
    pub error: Option<String>,
    /// 읽은 입력 파일 크기
    pub bytes_read: u64,
    /// 쓴 출력 파일 크기
    pub bytes_written: u64,
}

impl Outcome {
    /// 성공 결과 생성
    pub fn success(item: WorkItem, bytes_read: u64, bytes_written: u64) -> Self {
        Self {
            item,
            error: None,
            bytes_read,
            bytes_written,
        }
    }

    /// 실패 결과 생성
    pub fn failure(item: WorkItem, error: String, bytes_read: u64) -> Self {
        Self {
            item,
            error: Some(error),
            bytes_read,
            bytes_written: 0,
        }
    }

    /// 성공 여부
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 완료 작업 수를 집계하는 진행률 트래커
///
/// 실행마다 새로 만들어 참조로 전달합니다. 전체 작업 수는 스캔 완료
/// 시점에 확정되며 이후 변하지 않습니다.
#[derive(Debug)]
pub struct ProgressTracker {
    total: usize,
    completed: AtomicUsize,
}

impl ProgressTracker {
    /// 전체 작업 수를 지정하여 생성
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: AtomicUsize::new(0),
        }
    }

    /// 완료 카운트 1 증가 (성공/실패 무관)
    pub fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// 결과 하나 반영
    pub fn record(&self, _outcome: &Outcome) {
        self.increment();
    }

    /// 완료된 작업 수 반환
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// 전체 작업 수 반환
    pub fn total(&self) -> usize {
        self.total
    }
}

/// 실패한 항목의 (입력 경로, 에러 메시지)를 모으는 수집기
#[derive(Debug, Default)]
pub struct ErrorSink {
    entries: Mutex<Vec<(PathBuf, String)>>,
}

impl ErrorSink {
    /// 빈 수집기 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 실패 항목 추가
    pub fn push(&self, path: PathBuf, message: String) {
        self.entries.lock().unwrap().push((path, message));
    }

    /// 결과가 실패인 경우에만 추가
    pub fn record(&self, outcome: &Outcome) {
        if let Some(ref error) = outcome.error {
            self.push(outcome.item.input.clone(), error.clone());
        }
    }

    /// 수집된 에러 수 반환
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// 수집된 에러가 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 수집된 에러 목록 반환 (소비)
    pub fn into_entries(self) -> Vec<(PathBuf, String)> {
        self.entries.into_inner().unwrap()
    }
}

/// 작업 항목들을 고정 크기 풀에서 병렬 처리
///
/// 정확히 `threads` 개의 실행 슬롯이 공유 큐에서 항목을 하나씩 가져가
/// 변환을 끝까지 수행합니다. 항목마다 `Outcome`이 정확히 한 번 생성되어
/// 채널로 전달되고, 단일 소비자가 트래커/수집기/콜백에 반영합니다.
/// 모든 항목이 결과를 내기 전에는 반환하지 않습니다.
///
/// # Arguments
/// * `items` - 처리할 작업 항목 목록
/// * `transcoder` - 파일 변환기
/// * `threads` - 동시 실행 슬롯 수 (1 이상)
/// * `tracker` - 진행률 트래커
/// * `sink` - 에러 수집기
/// * `on_outcome` - 결과마다 호출되는 콜백 (진행률 바/통계 갱신용)
pub fn run_pool<T, F>(
    items: Vec<WorkItem>,
    transcoder: &T,
    threads: usize,
    tracker: &ProgressTracker,
    sink: &ErrorSink,
    mut on_outcome: F,
) -> Result<()>
where
    T: Transcoder + Sync,
    F: FnMut(&Outcome),
{
    if items.is_empty() {
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| AConvertError::ThreadPoolError {
            reason: e.to_string(),
        })?;

    let (tx, rx) = mpsc::channel::<Outcome>();

    std::thread::scope(|scope| {
        scope.spawn(move || {
            pool.install(|| {
                items.into_par_iter().for_each_with(tx, |tx, item| {
                    // 수신자가 먼저 끊겨도 풀 자체는 실패하지 않음
                    let _ = tx.send(process_item(item, transcoder));
                });
            });
        });

        // 모든 송신자가 닫힐 때까지 결과를 순서대로 소비
        for outcome in rx {
            tracker.record(&outcome);
            sink.record(&outcome);
            on_outcome(&outcome);
        }
    });

    Ok(())
}

/// 항목 하나 처리: 출력 폴더 보장 후 변환, 결과를 Outcome으로 포장
fn process_item<T: Transcoder>(item: WorkItem, transcoder: &T) -> Outcome {
    let bytes_read = fs::metadata(&item.input).map(|m| m.len()).unwrap_or(0);

    let result = ensure_output_dir(&item.output)
        .and_then(|_| transcoder.transcode(&item.input, &item.output));

    match result {
        Ok(()) => {
            let bytes_written = fs::metadata(&item.output).map(|m| m.len()).unwrap_or(0);
            Outcome::success(item, bytes_read, bytes_written)
        }
        Err(e) => Outcome::failure(item, e.to_string(), bytes_read),
    }
}

/// 출력 파일의 부모 폴더 생성 (이미 있으면 성공, 동시 생성에 안전)
fn ensure_output_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| AConvertError::CreateDirError {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_tracker_concurrent_increments() {
        let tracker = Arc::new(ProgressTracker::new(400));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    for _ in 0..100 {
                        tracker.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(tracker.completed(), 400);
        assert_eq!(tracker.total(), 400);
    }

    #[test]
    fn test_sink_records_only_failures() {
        let sink = ErrorSink::new();
        let ok_item = WorkItem::new(PathBuf::from("a.m4a"), PathBuf::from("a.wav"));
        let bad_item = WorkItem::new(PathBuf::from("b.m4a"), PathBuf::from("b.wav"));

        sink.record(&Outcome::success(ok_item, 10, 20));
        sink.record(&Outcome::failure(bad_item, "깨진 파일".to_string(), 10));

        assert_eq!(sink.len(), 1);
        let entries = sink.into_entries();
        assert_eq!(entries[0].0, PathBuf::from("b.m4a"));
        assert_eq!(entries[0].1, "깨진 파일");
    }

    #[test]
    fn test_sink_concurrent_push() {
        let sink = Arc::new(ErrorSink::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    sink.push(PathBuf::from(format!("{}.m4a", i)), "에러".to_string());
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 8);
    }

    #[test]
    fn test_outcome_constructors() {
        let item = WorkItem::new(PathBuf::from("x.m4a"), PathBuf::from("x.wav"));
        let ok = Outcome::success(item.clone(), 100, 200);
        assert!(ok.is_success());
        assert_eq!(ok.bytes_written, 200);

        let failed = Outcome::failure(item, "reason".to_string(), 100);
        assert!(!failed.is_success());
        assert_eq!(failed.bytes_written, 0);
    }

    #[test]
    fn test_run_pool_empty_items() {
        struct NeverCalled;
        impl Transcoder for NeverCalled {
            fn transcode(&self, input: &Path, _output: &Path) -> crate::error::Result<()> {
                panic!("호출되면 안 됨: {:?}", input);
            }
        }

        let tracker = ProgressTracker::new(0);
        let sink = ErrorSink::new();

        run_pool(Vec::new(), &NeverCalled, 4, &tracker, &sink, |_| {}).unwrap();

        assert_eq!(tracker.completed(), 0);
        assert!(sink.is_empty());
    }
}
