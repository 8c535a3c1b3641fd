//! Integration tests for scalar queries
//!
//! Questions answered end to end against the catalog fixture, plus the SQL
//! a relational adapter would run for them.

mod common;

use common::{date, fixed_now, run_pipeline, CREATOR_A, CREATOR_B};
use pretty_assertions::assert_eq;
use vidnlq::resolver::midnight_utc;
use vidnlq::{
    answer, build_scalar_query_at, emit_sql, parse_intent, Measure, MemoryStore, Metric,
    QueryIntent, SqlParam, TimeRange,
};

#[test]
fn test_video_counts() {
    assert_eq!(run_pipeline("Сколько всего видео есть в системе?").unwrap(), 4);
    assert_eq!(
        run_pipeline("Сколько видео появилось с 1 ноября 2025 по 5 ноября 2025?").unwrap(),
        1
    );
    assert_eq!(
        run_pipeline(&format!(
            "Сколько видео у креатора с id {CREATOR_A} вышло с 1 ноября 2025 по 30 ноября 2025?"
        ))
        .unwrap(),
        2
    );
}

#[test]
fn test_final_sums() {
    assert_eq!(run_pipeline("Сколько жалоб за всё время").unwrap(), 10);
    assert_eq!(run_pipeline("просмотры вчера").unwrap(), 5000);
    assert_eq!(
        run_pipeline("Сколько просмотров набрали видео за последние 7 дней?").unwrap(),
        5000
    );
}

#[test]
fn test_min_views_threshold() {
    // Views win the metric table, so this sums views of the qualifying videos.
    assert_eq!(
        run_pipeline("Сколько видео набрало больше 100000 просмотров за всё время?").unwrap(),
        320000
    );
}

#[test]
fn test_growth_on_a_day() {
    // The snapshot at 23:59:59 the day before and the one at midnight after
    // fall outside the day.
    assert_eq!(
        run_pipeline("На сколько просмотров в сумме выросли все видео 27 ноября 2025?").unwrap(),
        1800
    );
    assert_eq!(run_pipeline("прирост просмотров сегодня").unwrap(), 5100);
}

#[test]
fn test_growth_can_be_negative() {
    assert_eq!(run_pipeline("На сколько выросли лайки вчера?").unwrap(), 22);
}

#[test]
fn test_distinct_videos_with_growth() {
    // A snapshot with a zero delta still counts its video.
    assert_eq!(
        run_pipeline("Сколько разных видео получили прирост просмотров 27 ноября 2025?").unwrap(),
        3
    );
    assert_eq!(
        run_pipeline(&format!(
            "Сколько разных видео креатора {CREATOR_A} получили прирост просмотров вчера?"
        ))
        .unwrap(),
        2
    );
}

#[test]
fn test_growth_for_one_creator() {
    assert_eq!(
        run_pipeline(&format!("прирост просмотров креатора {CREATOR_B} за последние 7 дней")).unwrap(),
        5000
    );
}

#[test]
fn test_empty_results_are_zero() {
    assert_eq!(run_pipeline("how many comments today").unwrap(), 0);

    let empty = MemoryStore::default();
    for metric in Metric::ALL {
        for measure in [Measure::Final, Measure::DeltaSum] {
            let intent = QueryIntent::new(metric, measure, TimeRange::last_n_days(30));
            if !intent.is_supported_combination() {
                continue;
            }
            let query = build_scalar_query_at(&intent, Some(fixed_now())).unwrap();
            let value = vidnlq::ScalarExecutor::fetch_scalar(&empty, &query).unwrap();
            assert_eq!(value, 0, "{metric} {measure}");
        }
    }
}

#[test]
fn test_unsupported_questions_fail_whole() {
    let store = common::catalog_store();
    let err = answer("На сколько выросло количество видео вчера?", &store, Some(fixed_now())).unwrap_err();
    assert!(err.is_unsupported_combination());
    assert!(answer("сколько подписчиков", &store, Some(fixed_now())).is_err());
}

#[test]
fn test_sql_for_creator_growth() {
    let intent = parse_intent(&format!("прирост просмотров креатора {CREATOR_B} за последние 7 дней")).unwrap();
    let statement = emit_sql(&build_scalar_query_at(&intent, Some(fixed_now())).unwrap()).unwrap();

    assert_eq!(
        statement.sql,
        "SELECT COALESCE(SUM(video_snapshots.delta_views_count), 0) AS \"value\"\n\
         FROM video_snapshots\n\
         JOIN videos ON video_snapshots.video_id = videos.id\n\
         WHERE video_snapshots.created_at >= $1\n  \
         AND video_snapshots.created_at < $2\n  \
         AND videos.creator_id = $3"
    );
    assert_eq!(
        statement.params,
        vec![
            SqlParam::Timestamp(midnight_utc(date(2025, 11, 22))),
            SqlParam::Timestamp(midnight_utc(date(2025, 11, 29))),
            SqlParam::Text(CREATOR_B.to_string()),
        ]
    );
}

#[test]
fn test_sql_for_min_views() {
    let intent = parse_intent("Сколько видео набрало больше 100000 просмотров за всё время?").unwrap();
    let statement = emit_sql(&build_scalar_query_at(&intent, Some(fixed_now())).unwrap()).unwrap();
    assert!(statement.sql.starts_with("SELECT COALESCE(SUM(videos.views_count), 0)"));
    assert!(statement.sql.ends_with("AND videos.views_count >= 100000"));
    assert_eq!(statement.params.len(), 2);
}
