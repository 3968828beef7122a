use crate::domain::model::Course;
use std::collections::HashMap;

/// Term-weighted document matrix over the course catalog: one row per
/// course, built from name, instructor, description and related topics.
///
/// Weights follow the smooth tf-idf scheme (`idf = ln((1+n)/(1+df)) + 1`)
/// with L2-normalized rows. The index is cheap to build for catalogs of a
/// few hundred courses and is rebuilt on every query, since the catalog may
/// have changed between calls.
pub struct CourseIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(|t| t.to_lowercase()).collect()
}

impl CourseIndex {
    pub fn build(courses: &[Course]) -> Self {
        let docs: Vec<Vec<String>> = courses.iter().map(|c| tokenize(&c.full_text())).collect();

        let mut vocabulary = HashMap::new();
        for doc in &docs {
            for term in doc {
                let next = vocabulary.len();
                vocabulary.entry(term.clone()).or_insert(next);
            }
        }

        // Document frequency per vocabulary slot.
        let mut df = vec![0usize; vocabulary.len()];
        for doc in &docs {
            let mut seen = vec![false; vocabulary.len()];
            for term in doc {
                let idx = vocabulary[term];
                if !seen[idx] {
                    seen[idx] = true;
                    df[idx] += 1;
                }
            }
        }

        let n = docs.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = docs
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; vocabulary.len()];
                for term in doc {
                    row[vocabulary[term]] += 1.0;
                }
                for (idx, weight) in row.iter_mut().enumerate() {
                    *weight *= idf[idx];
                }
                let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for weight in &mut row {
                        *weight /= norm;
                    }
                }
                row
            })
            .collect();

        Self {
            vocabulary,
            idf,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn doc_count(&self) -> usize {
        self.rows.len()
    }

    /// Query vector for a single lowercase term: the term's idf weight in
    /// its vocabulary slot, zero everywhere else. Terms outside the
    /// vocabulary produce the zero vector.
    pub fn query_vector(&self, term: &str) -> Vec<f64> {
        let mut vec = vec![0.0; self.vocabulary.len()];
        if let Some(&idx) = self.vocabulary.get(term) {
            vec[idx] = self.idf[idx];
        }
        vec
    }

    /// Cosine similarity between a query vector and one document row.
    pub fn similarity(&self, query: &[f64], doc: usize) -> f64 {
        let row = &self.rows[doc];
        let dot: f64 = query.iter().zip(row.iter()).map(|(q, d)| q * d).sum();
        let q_norm: f64 = query.iter().map(|q| q * q).sum::<f64>().sqrt();
        // Rows are already L2-normalized.
        if q_norm == 0.0 {
            return 0.0;
        }
        dot / q_norm
    }

    /// Similarity of a single term against one document.
    pub fn term_score(&self, term: &str, doc: usize) -> f64 {
        self.similarity(&self.query_vector(term), doc)
    }
}
