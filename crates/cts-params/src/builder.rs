//! The combinator algebra building parameter spaces.

use crate::value::{ParamValue, TestParams};

/// One fully expanded top-level combination plus the subcase records that
/// share its setup.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseEntry {
    pub params: TestParams,
    /// Never empty: a space defined without subcases gets a single empty
    /// subcase record, so runners have exactly one iteration shape.
    pub subcases: Vec<TestParams>,
}

/// Builder over named axes of variation.
///
/// Combinators apply in definition order, and `filter` prunes immediately,
/// so an `expand` callback only ever sees combinations that survived every
/// earlier filter — dependent axes are never computed for discarded
/// records. Each combinator preserves ordering, making the final expansion
/// deterministic and reproducible.
#[derive(Clone, Debug)]
pub struct ParamsBuilder {
    cases: Vec<TestParams>,
    /// Per-case subcase records, parallel to `cases`. `None` until
    /// `begin_subcases` switches levels.
    subcases: Option<Vec<Vec<TestParams>>>,
}

impl Default for ParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamsBuilder {
    /// A space with one empty combination: the identity for `combine`.
    pub fn new() -> Self {
        Self {
            cases: vec![TestParams::new()],
            subcases: None,
        }
    }

    /// All axes defined on the returned builder are subcases of a single
    /// top-level case.
    pub fn subcases_only() -> Self {
        Self::new().begin_subcases()
    }

    /// Cross the space with a new axis: an existing size-`m` space and `n`
    /// values yield `m * n` combinations.
    ///
    /// Panics if `name` is already bound at either level.
    pub fn combine<V>(
        mut self,
        name: &'static str,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        V: Into<ParamValue>,
    {
        let values: Vec<ParamValue> = values.into_iter().map(Into::into).collect();
        self.assert_unbound(name);
        self.apply(|record| {
            values
                .iter()
                .map(|v| {
                    let mut r = record.clone();
                    r.insert(name, v.clone());
                    r
                })
                .collect()
        });
        self
    }

    /// Cross the space with pre-built records (several axes bound at once,
    /// possibly with non-rectangular value combinations).
    pub fn combine_with_params(mut self, records: Vec<TestParams>) -> Self {
        self.apply(|record| {
            records.iter().map(|extra| record.merged(extra)).collect()
        });
        self
    }

    /// Remove combinations for which `pred` is false. Applied eagerly:
    /// later combinators never see rejected records.
    ///
    /// At the subcase level the predicate sees the merged case + subcase
    /// bindings.
    pub fn filter(mut self, pred: impl Fn(&TestParams) -> bool) -> Self {
        match &mut self.subcases {
            None => self.cases.retain(|c| pred(c)),
            Some(subcases) => {
                for (case, subs) in self.cases.iter().zip(subcases.iter_mut()) {
                    subs.retain(|s| pred(&case.merged(s)));
                }
            }
        }
        self
    }

    /// Add a dependent axis: `f` receives each record bound so far and
    /// returns that record's value set for the new axis.
    pub fn expand<V>(
        mut self,
        name: &'static str,
        f: impl Fn(&TestParams) -> Vec<V>,
    ) -> Self
    where
        V: Into<ParamValue>,
    {
        self.assert_unbound(name);
        match &mut self.subcases {
            None => {
                self.cases = self
                    .cases
                    .iter()
                    .flat_map(|record| {
                        f(record).into_iter().map(|v| {
                            let mut r = record.clone();
                            r.insert(name, v.into());
                            r
                        })
                    })
                    .collect();
            }
            Some(subcases) => {
                for (case, subs) in self.cases.iter().zip(subcases.iter_mut()) {
                    *subs = subs
                        .iter()
                        .flat_map(|sub| {
                            f(&case.merged(sub)).into_iter().map(|v| {
                                let mut r = sub.clone();
                                r.insert(name, v.into());
                                r
                            })
                        })
                        .collect();
                }
            }
        }
        self
    }

    /// Switch to the subcase level: axes defined from here on vary within
    /// one top-level case, sharing its setup.
    pub fn begin_subcases(mut self) -> Self {
        assert!(
            self.subcases.is_none(),
            "begin_subcases called twice on one builder"
        );
        self.subcases = Some(vec![vec![TestParams::new()]; self.cases.len()]);
        self
    }

    /// Expand to the final ordered sequence of case entries.
    pub fn build(self) -> Vec<CaseEntry> {
        let subcases = self
            .subcases
            .unwrap_or_else(|| vec![vec![TestParams::new()]; self.cases.len()]);
        self.cases
            .into_iter()
            .zip(subcases)
            // A case whose subcases were all filtered away has nothing to
            // run; dropping it keeps the no-empty-subcases invariant.
            .filter(|(_, subcases)| !subcases.is_empty())
            .map(|(params, subcases)| CaseEntry { params, subcases })
            .collect()
    }

    /// Apply a record-to-records transform at the current level.
    fn apply(&mut self, f: impl Fn(&TestParams) -> Vec<TestParams>) {
        match &mut self.subcases {
            None => {
                self.cases = self.cases.iter().flat_map(|c| f(c)).collect();
            }
            Some(subcases) => {
                for subs in subcases.iter_mut() {
                    *subs = subs.iter().flat_map(|s| f(s)).collect();
                }
            }
        }
    }

    /// Definition-time collision check across both levels, run before any
    /// expansion of the new axis.
    fn assert_unbound(&self, name: &str) {
        for case in &self.cases {
            assert!(
                case.get(name).is_none(),
                "axis '{name}' is already bound at the case level"
            );
        }
        if let Some(subcases) = &self.subcases {
            for subs in subcases {
                for sub in subs {
                    assert!(
                        sub.get(name).is_none(),
                        "axis '{name}' is already bound at the subcase level"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(entries: &[CaseEntry]) -> Vec<String> {
        entries
            .iter()
            .flat_map(|e| {
                e.subcases
                    .iter()
                    .map(|s| e.params.merged(s).to_string())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn test_cross_product_size() {
        let entries = ParamsBuilder::new()
            .combine("a", [1, 2, 3])
            .combine("b", ["x", "y"])
            .build();
        assert_eq!(entries.len(), 6);
        // Each entry has exactly one (empty) subcase.
        assert!(entries.iter().all(|e| e.subcases.len() == 1));
        assert_eq!(flat(&entries)[0], "a=1;b=x");
        assert_eq!(flat(&entries)[5], "a=3;b=y");
    }

    #[test]
    fn test_filter_removes_exact_count() {
        let entries = ParamsBuilder::new()
            .combine("a", [1, 2, 3])
            .combine("b", [1, 2])
            .filter(|p| !(p.int("a") == 2 && p.int("b") == 1))
            .build();
        assert_eq!(entries.len(), 3 * 2 - 1);
    }

    #[test]
    fn test_expand_sees_only_surviving_records() {
        let entries = ParamsBuilder::new()
            .combine("a", [1, 2, 3])
            .filter(|p| p.int("a") != 2)
            .expand("b", |p| {
                assert_ne!(p.int("a"), 2, "expand saw a filtered-out record");
                vec![p.int("a") * 10, p.int("a") * 10 + 1]
            })
            .build();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].params.to_string(), "a=1;b=10");
        assert_eq!(entries[3].params.to_string(), "a=3;b=31");
    }

    #[test]
    fn test_subcases_share_top_level_case() {
        let entries = ParamsBuilder::new()
            .combine("format", ["r8", "rg8"])
            .begin_subcases()
            .combine("offset", [0, 4, 8])
            .build();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.subcases.len() == 3));
        assert_eq!(entries[0].params.to_string(), "format=r8");
        assert_eq!(entries[0].subcases[2].to_string(), "offset=8");
    }

    #[test]
    fn test_subcase_expand_sees_case_bindings() {
        let entries = ParamsBuilder::new()
            .combine("n", [2, 3])
            .begin_subcases()
            .expand("i", |p| (0..p.int("n")).collect::<Vec<_>>())
            .build();
        assert_eq!(entries[0].subcases.len(), 2);
        assert_eq!(entries[1].subcases.len(), 3);
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let build = || {
            ParamsBuilder::new()
                .combine("a", [1, 2, 3, 4])
                .combine("b", ["p", "q"])
                .filter(|p| p.int("a") % 2 == 0)
                .begin_subcases()
                .combine("c", [false, true])
                .build()
        };
        assert_eq!(build(), build());
        assert_eq!(flat(&build()), flat(&build()));
    }

    #[test]
    #[should_panic(expected = "already bound at the case level")]
    fn test_axis_collision_panics_before_expansion() {
        let _ = ParamsBuilder::new()
            .combine("a", [1, 2])
            .combine("a", [3, 4]);
    }

    #[test]
    #[should_panic(expected = "already bound")]
    fn test_subcase_collision_with_case_axis_panics() {
        let _ = ParamsBuilder::new()
            .combine("a", [1, 2])
            .begin_subcases()
            .combine("a", [3]);
    }

    #[test]
    fn test_combine_with_params_non_rectangular() {
        let mut r1 = TestParams::new();
        r1.insert("dim", "1d");
        r1.insert("layers", 1);
        let mut r2 = TestParams::new();
        r2.insert("dim", "2d");
        r2.insert("layers", 6);
        let entries = ParamsBuilder::new()
            .combine("usage", ["sampled", "storage"])
            .combine_with_params(vec![r1, r2])
            .build();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1].params.to_string(), "usage=sampled;dim=2d;layers=6");
    }

    #[test]
    fn test_case_with_no_surviving_subcases_is_dropped() {
        let entries = ParamsBuilder::new()
            .combine("n", [1, 2])
            .begin_subcases()
            .combine("i", [10, 20])
            .filter(|p| p.int("n") != 2)
            .build();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].params.to_string(), "n=1");
    }

    #[test]
    fn test_subcases_only() {
        let entries = ParamsBuilder::subcases_only()
            .combine("x", [1, 2, 3])
            .build();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subcases.len(), 3);
        assert!(entries[0].params.is_empty());
    }
}
