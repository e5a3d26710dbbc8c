//! Candidate evaluation under a ranking or a value table.

use optimal_core::{CompetitionSet, Example, PartialOrder, WeightTable};

/// Outcome of strict-domination evaluation of a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtEvaluation {
    survivors: Vec<usize>,
}

impl OtEvaluation {
    /// Candidate indices left after every stratum was applied.
    pub fn survivors(&self) -> &[usize] {
        &self.survivors
    }

    /// The predicted optimum: the first survivor, or the first candidate if
    /// nothing survived.
    pub fn predicted(&self) -> usize {
        self.survivors.first().copied().unwrap_or(0)
    }

    /// True if `winner` is the one and only survivor.
    pub fn is_decisive_for(&self, winner: usize) -> bool {
        self.survivors == [winner]
    }
}

/// Filters candidates stratum by stratum, highest first.
///
/// Within a stratum, a candidate survives only if it has the minimum
/// violation count, among current survivors, on every constraint of the
/// stratum. Ties pass through to the next stratum.
pub fn evaluate_ot(candidates: &[&Example], order: &PartialOrder) -> OtEvaluation {
    let mut survivors: Vec<usize> = (0..candidates.len()).collect();

    for stratum in order.strata() {
        if survivors.len() <= 1 {
            break;
        }
        let minima: Vec<u32> = stratum
            .iter()
            .map(|c| {
                survivors
                    .iter()
                    .map(|&i| candidates[i].violation(c.name()))
                    .min()
                    .unwrap_or(0)
            })
            .collect();

        survivors.retain(|&i| {
            stratum
                .iter()
                .zip(&minima)
                .all(|(c, &min)| candidates[i].violation(c.name()) == min)
        });
    }

    OtEvaluation { survivors }
}

/// Predicts the optimal candidate of a competition set under `order`.
///
/// Returns `None` only for an empty set.
pub fn predict_ot<'a>(set: &CompetitionSet<'a>, order: &PartialOrder) -> Option<&'a Example> {
    if set.is_empty() {
        return None;
    }
    let evaluation = evaluate_ot(set.candidates(), order);
    Some(set.candidates()[evaluation.predicted()])
}

/// Index of the candidate with the highest harmony under `values`.
///
/// Ties are broken against `winner`: the labeled winner is only returned if
/// it strictly out-scores every competitor. Otherwise the earliest
/// maximal candidate wins.
pub fn best_by_harmony(candidates: &[&Example], values: &WeightTable, winner: usize) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        let harmony = candidate.harmony(values);
        best = match best {
            None => Some((i, harmony)),
            Some((_, top)) if harmony > top => Some((i, harmony)),
            Some((b, top)) if harmony == top && b == winner => Some((i, harmony)),
            keep => keep,
        };
    }
    best.map_or(0, |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use optimal_core::Constraint;

    use super::*;
    use crate::test_utils::pat_grammar;

    fn ranked(edges: &[(&str, &str)]) -> PartialOrder {
        let mut order = PartialOrder::new(pat_grammar().constraints().iter().cloned());
        for (h, l) in edges {
            order.add_dominance(h, l).unwrap();
        }
        order
    }

    #[test]
    fn test_unranked_grammar_has_no_survivor() {
        let grammar = pat_grammar();
        let set = grammar.competition_set("/pat/");
        let evaluation = evaluate_ot(set.candidates(), &ranked(&[]));

        assert!(evaluation.survivors().is_empty());
        assert_eq!(evaluation.predicted(), 0);
        assert!(!evaluation.is_decisive_for(0));
    }

    #[test]
    fn test_correct_ranking_selects_winner() {
        let grammar = pat_grammar();
        let set = grammar.competition_set("/pat/");
        let order = ranked(&[("NOCODA", "DEP"), ("MAX", "DEP")]);

        let evaluation = evaluate_ot(set.candidates(), &order);
        assert!(evaluation.is_decisive_for(0));
        assert_eq!(predict_ot(&set, &order).map(Example::output_form), Some("pa.ta"));
    }

    #[test]
    fn test_wrong_ranking_selects_loser() {
        let grammar = pat_grammar();
        let set = grammar.competition_set("/pat/");
        let order = ranked(&[("DEP", "NOCODA"), ("NOCODA", "MAX")]);

        assert_eq!(predict_ot(&set, &order).map(Example::output_form), Some("pa"));
    }

    #[test]
    fn test_predict_empty_set() {
        let grammar = pat_grammar();
        let set = grammar.competition_set("/none/");
        let order = PartialOrder::new([Constraint::new("DEP")]);
        assert!(predict_ot(&set, &order).is_none());
    }

    #[test]
    fn test_harmony_ties_go_against_winner() {
        let grammar = pat_grammar();
        let set = grammar.competition_set("/pat/");
        let equal: WeightTable = ["NOCODA", "MAX", "DEP"]
            .into_iter()
            .map(|n| (n.to_string(), 100.0))
            .collect();

        assert_eq!(best_by_harmony(set.candidates(), &equal, 0), 1);

        let mut favoring_winner = equal.clone();
        favoring_winner.insert("DEP".to_string(), 90.0);
        assert_eq!(best_by_harmony(set.candidates(), &favoring_winner, 0), 0);
    }
}
