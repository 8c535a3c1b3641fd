//! Request boundary
//!
//! Ties the pipeline together for a caller that holds raw input: a JSON
//! intent document or a free-text question. Every failure comes back as an
//! `Error`; `user_hint` turns it into a reply a person can act on.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::builder::build_scalar_query_at;
use crate::error::Error;
use crate::executor::ScalarExecutor;
use crate::intent::QueryIntent;
use crate::parser::parse_intent;
use crate::validator::intent_from_value;

/// Turn raw input into a validated intent
///
/// Input that is a JSON object is tried as an intent document first; when it
/// fails validation the same text goes to the rule-based parser. Anything
/// else is a question for the parser alone.
pub fn interpret(input: &str) -> Result<QueryIntent, Error> {
    let input = input.trim();
    let document = match serde_json::from_str::<Value>(input) {
        Ok(doc @ Value::Object(_)) => Some(doc),
        _ => None,
    };
    interpret_request(input, document)
}

/// Turn a question plus an optional intent document into a validated intent
///
/// The document, typically produced upstream from the question, is tried
/// first. When it is absent or fails validation the question itself goes to
/// the rule-based parser, whose error is the one reported.
pub fn interpret_request(question: &str, document: Option<Value>) -> Result<QueryIntent, Error> {
    if let Some(doc) = document {
        match intent_from_value(doc) {
            Ok(intent) => {
                debug!("intent document accepted");
                return Ok(intent);
            }
            Err(err) => {
                warn!(field = err.field(), error = %err, "intent document rejected, parsing question");
            }
        }
    }
    let intent = parse_intent(question)?;
    debug!("question accepted as free text");
    Ok(intent)
}

/// Answer one question with one number
///
/// All-or-nothing: either the scalar comes back or the first error does.
pub fn answer<E>(input: &str, executor: &E, now: Option<DateTime<Utc>>) -> Result<i64, Error>
where
    E: ScalarExecutor + ?Sized,
{
    let intent = interpret(input)?;
    let query = build_scalar_query_at(&intent, now)?;
    let value = executor.fetch_scalar(&query)?;
    info!(
        metric = %intent.metric,
        measure = %intent.measure,
        time_range = %intent.time_range,
        value,
        "answered question"
    );
    Ok(value)
}

const EXAMPLES: &[&str] = &[
    "Сколько всего видео есть в системе?",
    "Сколько просмотров набрали видео за последние 7 дней?",
    "На сколько выросли лайки вчера?",
    "Сколько комментариев было с 1 ноября 2025 по 5 ноября 2025?",
    "Сколько разных видео получили прирост просмотров 27 ноября 2025?",
];

/// A reply for the person who asked, listing phrasings that work
pub fn user_hint(err: &Error) -> String {
    let lead = if err.is_unsupported_combination() {
        "Для количества видео можно узнать только итоговое значение, а не прирост. \
         Прирост доступен для просмотров, лайков, комментариев и жалоб."
    } else if err.is_unsupported_metric() {
        "Не понял, какую метрику посчитать. Доступны: видео, просмотры, лайки, комментарии, жалобы."
    } else {
        "Не удалось разобрать запрос."
    };

    let mut hint = format!("{lead}\n\nПопробуйте сформулировать так:");
    for example in EXAMPLES {
        hint.push_str("\n- ");
        hint.push_str(example);
    }
    hint
}
