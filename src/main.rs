//! aconvert - AUDIO FOLDER CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use aconvert::{
    cli::Args,
    error::AConvertError,
    mapper::map_output_path,
    pattern::PatternMatcher,
    pool::{run_pool, ErrorSink, ProgressTracker, WorkItem},
    scanner::scan_audio_files,
    stats::Statistics,
    transcode::{FfmpegTranscoder, TranscodeOptions},
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 입력 및 설정 유효성 검사 (작업 시작 전에 실패)
    validate_input(&args)?;

    // 헤더 출력
    print_header(&args);

    // 패턴 매처 초기화
    let pattern_matcher = PatternMatcher::new(args.pattern.clone())?;

    // 오디오 파일 수집
    let audio_files = collect_audio_files(&args, &pattern_matcher);

    if audio_files.is_empty() {
        println!("{}", "⚠️ 변환할 오디오 파일이 없습니다.".yellow());
        return Ok(());
    }

    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        audio_files.len().to_string().bright_green()
    );

    // 통계 초기화
    let stats = Statistics::new(audio_files.len());

    // 드라이런 모드
    if args.dry_run {
        print_dry_run(&audio_files);
        return Ok(());
    }

    // 변환 실행
    run_conversion(&args, audio_files, &stats)
}

/// 입력 경로 및 설정 유효성 검사
fn validate_input(args: &Args) -> aconvert::Result<()> {
    if !args.input.exists() {
        return Err(AConvertError::InputNotFound {
            path: args.input.clone(),
        });
    }

    if !args.input.is_dir() {
        return Err(AConvertError::NotADirectory {
            path: args.input.clone(),
        });
    }

    if args.threads == 0 {
        return Err(AConvertError::InvalidThreadCount {
            count: args.threads,
        });
    }

    for format in [&args.input_format, &args.output_format] {
        if format.is_empty() || format.starts_with('.') {
            return Err(AConvertError::InvalidFormat {
                format: format.clone(),
            });
        }
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🎵 AUDIO FOLDER CONVERTER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), args.input);
    println!("  {} 출력 폴더: {:?}", "📁".bright_green(), args.output);
    println!("  {} 변환: {}", "🔄".bright_yellow(), args.format_label());
    println!("  {} 스레드 수: {}", "⚙️".bright_white(), args.threads);

    if let Some(sample_rate) = args.sample_rate {
        println!("  {} 샘플레이트: {} Hz", "🎚️".bright_magenta(), sample_rate);
    }

    if let Some(ref pattern) = args.pattern {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), pattern);
    }

    if let Some(depth) = args.max_depth {
        println!("  {} 최대 깊이: {}", "📏".bright_white(), depth);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 오디오 파일 수집 (옵션에 따라 탐색 진행 스피너 표시)
fn collect_audio_files(args: &Args, pattern_matcher: &PatternMatcher) -> Vec<PathBuf> {
    if args.scan_progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} 파일 검색 중... {pos}")
                .unwrap(),
        );

        let files = scan_audio_files(
            &args.input,
            &args.input_format,
            args.max_depth,
            pattern_matcher,
            |_| spinner.inc(1),
        );

        spinner.finish_and_clear();
        files
    } else {
        scan_audio_files(
            &args.input,
            &args.input_format,
            args.max_depth,
            pattern_matcher,
            |_| {},
        )
    }
}

/// 드라이런 출력
fn print_dry_run(audio_files: &[PathBuf]) {
    println!("\n{}", "📋 처리 예정 파일 목록:".bright_cyan());
    for (i, path) in audio_files.iter().enumerate() {
        println!("  {}. {:?}", i + 1, path.file_name().unwrap_or_default());
    }
    println!(
        "\n{} 총 {} 개의 파일이 변환될 예정입니다.",
        "ℹ️".bright_blue(),
        audio_files.len().to_string().bright_green()
    );
}

/// 스캔 결과로 작업 항목 생성
///
/// 경로 계산에 실패한 파일은 해당 항목만 실패로 집계하고 (트래커/통계/
/// 수집기) 나머지 항목은 그대로 변환 대상에 포함합니다.
fn build_work_items<F>(
    args: &Args,
    audio_files: Vec<PathBuf>,
    tracker: &ProgressTracker,
    sink: &ErrorSink,
    stats: &Statistics,
    mut on_failure: F,
) -> Vec<WorkItem>
where
    F: FnMut(&AConvertError),
{
    let mut items = Vec::with_capacity(audio_files.len());

    for path in audio_files {
        match map_output_path(
            &args.input,
            &path,
            &args.output,
            &args.input_format,
            &args.output_format,
        ) {
            Ok(output) => items.push(WorkItem::new(path, output)),
            Err(e) => {
                tracker.increment();
                stats.increment_error();
                sink.push(path, e.to_string());
                on_failure(&e);
            }
        }
    }

    items
}

/// 변환 실행
fn run_conversion(args: &Args, audio_files: Vec<PathBuf>, stats: &Statistics) -> Result<()> {
    // 전체 작업 수는 스캔 결과로 확정
    let tracker = ProgressTracker::new(audio_files.len());
    let sink = ErrorSink::new();

    // 병렬 변환 (헤더는 진행률 바가 그려지기 전에 출력)
    println!("\n{}", "⚡ 병렬 변환 중...".bright_cyan());

    // 진행률 바 설정
    let pb = create_progress_bar(audio_files.len());

    // 작업 항목 생성
    let items = build_work_items(args, audio_files, &tracker, &sink, stats, |e| {
        pb.println(format!("  {} {}", "•".red(), e.to_string().red()));
        pb.inc(1);
    });

    // 변환기 생성
    let options = TranscodeOptions::new().with_sample_rate(args.sample_rate);
    let transcoder = FfmpegTranscoder::new(options);

    run_pool(items, &transcoder, args.threads, &tracker, &sink, |outcome| {
        pb.inc(1);

        match &outcome.error {
            None => {
                stats.increment_success();
                stats.add_bytes_read(outcome.bytes_read);
                stats.add_bytes_written(outcome.bytes_written);

                if args.verbose {
                    pb.println(format!(
                        "  {} {:?}",
                        "✓".green(),
                        outcome.item.input.file_name().unwrap_or_default()
                    ));
                }
            }
            Some(error) => {
                stats.increment_error();
                stats.add_bytes_read(outcome.bytes_read);
                pb.println(format!("  {} {}", "•".red(), error.red()));
            }
        }
    })?;

    pb.finish_with_message("완료!");

    // 에러 출력
    let completed = tracker.completed();
    let total = tracker.total();
    let errors = sink.into_entries();
    print_errors(&errors, args.verbose);

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_error_log(log_path, &errors)?;
    }

    // 통계 출력
    stats.print_summary();

    println!(
        "\n{} 모든 변환이 완료되었습니다. ({}/{})\n",
        "✅".bright_green(),
        completed,
        total
    );

    Ok(())
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}

/// 에러 목록 출력
fn print_errors(errors: &[(PathBuf, String)], verbose: bool) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 파일:".bright_red());
    for (path, error) in errors {
        println!("  {} {:?}", "•".red(), path.file_name().unwrap_or_default());
        if verbose {
            println!("    {}", error.dimmed());
        }
    }
}

/// 에러 로그 파일 작성
fn write_error_log(log_path: &PathBuf, errors: &[(PathBuf, String)]) -> Result<()> {
    let mut log_file = File::create(log_path)?;

    writeln!(log_file, "aconvert 에러 로그")?;
    writeln!(log_file, "생성 시간: {}", chrono_now())?;
    writeln!(log_file, "총 에러 수: {}", errors.len())?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for (path, error) in errors {
        writeln!(log_file, "\n파일: {:?}", path)?;
        writeln!(log_file, "에러: {}", error)?;
    }

    println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}

/// 현재 시간 문자열 반환
fn chrono_now() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now();
    let duration = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", duration.as_secs())
}
