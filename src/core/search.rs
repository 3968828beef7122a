use crate::core::index::CourseIndex;
use crate::domain::model::Course;
use crate::utils::error::{CatalogError, Result};
use std::cmp::Ordering;

/// Hard cap on returned results.
pub const MAX_RESULTS: usize = 10;
/// Flat bonus added per emphasis marker when a boosted word is literally
/// contained in the course text.
pub const BOOST_UNIT: f64 = 0.1;
/// A term may carry at most this many trailing `*` markers.
pub const MAX_BOOST: usize = 5;

/// A query split into its three term classes. All terms are lowercased.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedQuery {
    pub normal: Vec<String>,
    pub boosted: Vec<(String, usize)>,
    pub excluded: Vec<String>,
}

/// Splits the raw query into normal, boosted (`word*` .. `word*****`) and
/// excluded (`!word`) terms. Each token matches exactly one rule, checked in
/// that order; tokens that reduce to the empty string are dropped.
///
/// A blank query is an error: "nothing matched" and "nothing was asked" must
/// stay distinguishable.
pub fn parse_query(raw: &str) -> Result<ParsedQuery> {
    if raw.trim().is_empty() {
        return Err(CatalogError::EmptyQuery);
    }

    let mut query = ParsedQuery::default();
    for line in raw.lines() {
        for token in line.split_whitespace() {
            if let Some(rest) = token.strip_prefix('!') {
                if !rest.is_empty() {
                    query.excluded.push(rest.to_lowercase());
                }
                continue;
            }
            let stars = token.chars().rev().take_while(|c| *c == '*').count();
            if (1..=MAX_BOOST).contains(&stars) {
                // '*' is a single byte, so this slice is char-safe.
                let base = &token[..token.len() - stars];
                if !base.is_empty() {
                    query.boosted.push((base.to_lowercase(), stars));
                }
                continue;
            }
            query.normal.push(token.to_lowercase());
        }
    }
    Ok(query)
}

/// Raw score per course, in catalog order. Exposed separately from
/// [`search`] so the scoring arithmetic can be asserted on directly.
pub fn score_courses(courses: &[Course], index: &CourseIndex, query: &ParsedQuery) -> Vec<f64> {
    let texts: Vec<String> = courses
        .iter()
        .map(|c| c.full_text().to_lowercase())
        .collect();

    let mut scores = vec![0.0; courses.len()];
    for (doc, score) in scores.iter_mut().enumerate() {
        for term in &query.normal {
            *score += index.term_score(term, doc);
        }
        for (base, multiplier) in &query.boosted {
            *score += index.term_score(base, doc);
            if texts[doc].contains(base.as_str()) {
                *score += BOOST_UNIT * *multiplier as f64;
            }
        }
        // Exclusion overrides everything the course accumulated.
        if query.excluded.iter().any(|t| texts[doc].contains(t.as_str())) {
            *score = 0.0;
        }
    }
    scores
}

/// Ranks the catalog against a free-text query: positive-scoring courses
/// only, best first, ties kept in catalog order, capped at [`MAX_RESULTS`].
pub fn search(courses: &[Course], raw_query: &str) -> Result<Vec<Course>> {
    let query = parse_query(raw_query)?;
    let index = CourseIndex::build(courses);
    let scores = score_courses(courses, &index, &query);

    let mut ranked: Vec<(usize, f64)> = scores
        .into_iter()
        .enumerate()
        .filter(|(_, score)| *score > 0.0)
        .collect();
    // Stable sort keeps catalog order on equal scores.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(MAX_RESULTS);

    tracing::debug!("Query matched {} course(s)", ranked.len());
    Ok(ranked.into_iter().map(|(doc, _)| courses[doc].clone()).collect())
}
