//! Grammars, competition sets and winner/loser pairs.

use std::collections::BTreeSet;

use crate::constraint::Constraint;
use crate::example::Example;

/// An ordered constraint set plus labeled examples.
///
/// The constraint order is only a display fallback; learners never rely on it
/// for ranking decisions.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, Example, Grammar};
///
/// let mut grammar = Grammar::new(vec![Constraint::new("NOCODA"), Constraint::new("DEP")]);
/// grammar.add_example(Example::new("/pat/", "pa.ta", true).with_violation("DEP", 1));
/// grammar.add_example(Example::new("/pat/", "pat", false).with_violation("NOCODA", 1));
///
/// let sets = grammar.competition_sets();
/// assert_eq!(sets.len(), 1);
/// assert_eq!(grammar.winner_loser_pairs().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    constraints: Vec<Constraint>,
    #[cfg_attr(feature = "serde", serde(default))]
    examples: Vec<Example>,
}

impl Grammar {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self {
            constraints,
            examples: Vec::new(),
        }
    }

    pub fn with_examples(constraints: Vec<Constraint>, examples: Vec<Example>) -> Self {
        Self {
            constraints,
            examples,
        }
    }

    pub fn add_example(&mut self, example: Example) {
        self.examples.push(example);
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Looks up a declared constraint by name.
    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name() == name)
    }

    /// Labeled-optimal examples in declaration order.
    pub fn winners(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter().filter(|e| e.is_optimal())
    }

    /// Groups examples by input form, in order of first appearance.
    pub fn competition_sets(&self) -> Vec<CompetitionSet<'_>> {
        let mut sets: Vec<CompetitionSet<'_>> = Vec::new();
        for example in &self.examples {
            match sets.iter_mut().find(|s| s.input == example.input_form()) {
                Some(set) => set.candidates.push(example),
                None => sets.push(CompetitionSet {
                    input: example.input_form(),
                    candidates: vec![example],
                }),
            }
        }
        sets
    }

    /// All candidates competing for the given input form.
    pub fn competition_set(&self, input: &str) -> CompetitionSet<'_> {
        CompetitionSet {
            input: self
                .examples
                .iter()
                .map(Example::input_form)
                .find(|i| *i == input)
                .unwrap_or_default(),
            candidates: self
                .examples
                .iter()
                .filter(|e| e.input_form() == input)
                .collect(),
        }
    }

    /// Every (optimal, non-optimal) pairing that shares an input form.
    pub fn winner_loser_pairs(&self) -> Vec<WinnerLoserPair<'_>> {
        self.winners()
            .flat_map(move |winner| {
                self.examples
                    .iter()
                    .filter(move |e| !e.is_optimal() && e.input_form() == winner.input_form())
                    .map(move |loser| WinnerLoserPair { winner, loser })
            })
            .collect()
    }

    /// Constraint names used in violation profiles but never declared.
    ///
    /// Such violations are tolerated but ignored by every learner.
    pub fn undeclared_constraint_names(&self) -> BTreeSet<&str> {
        self.examples
            .iter()
            .flat_map(|e| e.violations().keys())
            .map(String::as_str)
            .filter(|name| self.constraint(name).is_none())
            .collect()
    }
}

/// All candidates sharing one input form.
#[derive(Debug, Clone)]
pub struct CompetitionSet<'a> {
    input: &'a str,
    candidates: Vec<&'a Example>,
}

impl<'a> CompetitionSet<'a> {
    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn candidates(&self) -> &[&'a Example] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The first labeled-optimal candidate, if any.
    pub fn winner(&self) -> Option<&'a Example> {
        self.candidates.iter().copied().find(|e| e.is_optimal())
    }

    /// Index of the first labeled-optimal candidate, if any.
    pub fn winner_index(&self) -> Option<usize> {
        self.candidates.iter().position(|e| e.is_optimal())
    }

    /// Non-optimal candidates.
    pub fn losers(&self) -> impl Iterator<Item = &'a Example> + '_ {
        self.candidates.iter().copied().filter(|e| !e.is_optimal())
    }
}

/// A labeled winner and one of its losing competitors.
#[derive(Debug, Clone, Copy)]
pub struct WinnerLoserPair<'a> {
    pub winner: &'a Example,
    pub loser: &'a Example,
}

impl<'a> WinnerLoserPair<'a> {
    pub fn new(winner: &'a Example, loser: &'a Example) -> Self {
        Self { winner, loser }
    }

    /// True if `constraint` assigns the loser strictly more violations.
    pub fn prefers_winner(&self, constraint: &str) -> bool {
        self.loser.violation(constraint) > self.winner.violation(constraint)
    }

    /// True if `constraint` assigns the winner strictly more violations.
    pub fn prefers_loser(&self, constraint: &str) -> bool {
        self.winner.violation(constraint) > self.loser.violation(constraint)
    }

    /// Declared constraints that prefer the winner.
    pub fn winner_preferring<'c>(&self, constraints: &'c [Constraint]) -> Vec<&'c Constraint> {
        constraints
            .iter()
            .filter(|c| self.prefers_winner(c.name()))
            .collect()
    }

    /// Declared constraints that prefer the loser.
    pub fn loser_preferring<'c>(&self, constraints: &'c [Constraint]) -> Vec<&'c Constraint> {
        constraints
            .iter()
            .filter(|c| self.prefers_loser(c.name()))
            .collect()
    }
}
