use std::collections::BTreeMap;

use super::score_page;
use crate::domains::scoring::models::{round2, CompareResult, Criteria, ScoreResult, OVERALL_KEY};
use crate::kernel::ServerDeps;

/// Score two variants of a page independently and report after − before.
///
/// Both runs share the URL and criteria and execute concurrently.
pub async fn compare_pages(
    before_html: &str,
    after_html: &str,
    url: Option<&str>,
    criteria: &Criteria,
    deps: &ServerDeps,
) -> CompareResult {
    let (before, after) = tokio::join!(
        score_page(before_html, url, criteria, deps),
        score_page(after_html, url, criteria, deps),
    );

    let delta = score_delta(&before, &after, criteria);
    CompareResult {
        before,
        after,
        delta,
    }
}

/// Per-criterion and overall change, rounded to two decimals.
pub fn score_delta(
    before: &ScoreResult,
    after: &ScoreResult,
    criteria: &Criteria,
) -> BTreeMap<String, f64> {
    let mut delta: BTreeMap<String, f64> = criteria
        .iter()
        .map(|name| {
            let b = before.score_of(name).map_or(before.overall, f64::from);
            let a = after.score_of(name).map_or(after.overall, f64::from);
            (name.to_string(), round2(a - b))
        })
        .collect();

    delta.insert(OVERALL_KEY.to_string(), round2(after.overall - before.overall));
    delta
}
