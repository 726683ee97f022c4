use std::collections::BTreeMap;

use crate::config::{Reducer, Stat, StatBasis};

/// Run every configured stat over its basis and produce the flat
/// name → number map the view renders into tiles.
pub(crate) fn compute<'a, T>(
    stats: &[Stat<T>],
    working: &'a [T],
    filtered: &[&'a T],
) -> BTreeMap<&'static str, f64> {
    let mut out = BTreeMap::new();
    for stat in stats {
        let value = match stat.basis {
            StatBasis::Working => reduce(&stat.reducer, working.iter()),
            StatBasis::Filtered => reduce(&stat.reducer, filtered.iter().copied()),
        };
        out.insert(stat.name, value);
    }
    out
}

fn reduce<'a, T: 'a>(reducer: &Reducer<T>, records: impl Iterator<Item = &'a T>) -> f64 {
    match reducer {
        Reducer::Count => records.count() as f64,
        Reducer::CountWhere(pred) => records.filter(|&r| pred(r)).count() as f64,
        Reducer::Sum(value) => records.map(|r| value(r)).sum(),
        Reducer::Average(value) => {
            let mut sum = 0.0;
            let mut n = 0u64;
            for record in records {
                if let Some(v) = value(record) {
                    sum += v;
                    n += 1;
                }
            }
            // Empty input must read 0, not NaN.
            if n == 0 { 0.0 } else { sum / n as f64 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        score: Option<f64>,
        flagged: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                score: Some(4.0),
                flagged: true,
            },
            Row {
                score: None,
                flagged: false,
            },
            Row {
                score: Some(5.0),
                flagged: true,
            },
        ]
    }

    #[test]
    fn average_skips_missing_values() {
        let stats = vec![Stat {
            name: "avg_score",
            basis: StatBasis::Working,
            reducer: Reducer::Average(|r: &Row| r.score),
        }];
        let working = rows();
        let out = compute(&stats, &working, &[]);
        assert_eq!(out["avg_score"], 4.5);
    }

    #[test]
    fn average_of_empty_set_is_zero() {
        let stats = vec![Stat {
            name: "avg_score",
            basis: StatBasis::Working,
            reducer: Reducer::Average(|r: &Row| r.score),
        }];
        let out = compute(&stats, &[], &[]);
        assert_eq!(out["avg_score"], 0.0);
    }

    #[test]
    fn filtered_basis_sees_only_filtered_records() {
        let stats = vec![
            Stat {
                name: "working_count",
                basis: StatBasis::Working,
                reducer: Reducer::Count,
            },
            Stat {
                name: "filtered_count",
                basis: StatBasis::Filtered,
                reducer: Reducer::Count,
            },
            Stat {
                name: "flagged",
                basis: StatBasis::Filtered,
                reducer: Reducer::CountWhere(|r: &Row| r.flagged),
            },
        ];
        let working = rows();
        let filtered: Vec<&Row> = working.iter().take(2).collect();
        let out = compute(&stats, &working, &filtered);
        assert_eq!(out["working_count"], 3.0);
        assert_eq!(out["filtered_count"], 2.0);
        assert_eq!(out["flagged"], 1.0);
    }
}
