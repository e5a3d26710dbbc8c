//! Dominance graphs over a fixed constraint set.
//!
//! A [`PartialOrder`] stores direct dominance edges and answers transitive
//! queries by iterative reachability. Edges that would close a cycle are
//! rejected, so the relation is always a strict partial order.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::constraint::Constraint;
use crate::error::{OptimalError, Result};
use crate::example::WeightTable;

/// A strict partial order (dominance relation) over constraints.
///
/// # Example
///
/// ```
/// use optimal_core::{Constraint, PartialOrder};
///
/// let mut order = PartialOrder::new(["A", "B", "C"].map(Constraint::new));
/// order.add_dominance("A", "B").unwrap();
/// order.add_dominance("B", "C").unwrap();
///
/// assert!(order.dominates("A", "C"));
/// assert!(order.add_dominance("C", "A").is_err());
/// assert_eq!(order.to_string(), "A >> B >> C");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartialOrder {
    constraints: Vec<Constraint>,
    index: HashMap<String, usize>,
    dominated: Vec<BTreeSet<usize>>,
}

impl PartialOrder {
    /// Creates an empty relation over the given constraints.
    ///
    /// Later duplicates of an already-seen name are dropped.
    pub fn new(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        let mut order = Self::default();
        for constraint in constraints {
            if order.index.contains_key(constraint.name()) {
                continue;
            }
            order
                .index
                .insert(constraint.name().to_string(), order.constraints.len());
            order.constraints.push(constraint);
            order.dominated.push(BTreeSet::new());
        }
        order
    }

    /// Builds an order from a numeric table: `a >> b` whenever
    /// `value(a) - value(b) > margin`.
    ///
    /// Missing values count as zero. A margin of zero gives the
    /// strict-inequality conversion; a positive margin leaves near-ties unranked.
    pub fn from_values(
        constraints: impl IntoIterator<Item = Constraint>,
        values: &WeightTable,
        margin: f64,
    ) -> Self {
        let mut order = Self::new(constraints);
        let value = |c: &Constraint| values.get(c.name()).copied().unwrap_or(0.0);

        let mut ranked: Vec<usize> = (0..order.constraints.len()).collect();
        ranked.sort_by(|&a, &b| {
            value(&order.constraints[b]).total_cmp(&value(&order.constraints[a]))
        });

        for (i, &higher) in ranked.iter().enumerate() {
            for &lower in &ranked[i + 1..] {
                let gap = value(&order.constraints[higher]) - value(&order.constraints[lower]);
                if gap > margin {
                    order.dominated[higher].insert(lower);
                }
            }
        }
        order
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of direct dominance edges.
    pub fn edge_count(&self) -> usize {
        self.dominated.iter().map(BTreeSet::len).sum()
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| OptimalError::UnknownConstraint(name.to_string()))
    }

    /// Records that `higher` directly dominates `lower`.
    ///
    /// Returns `Ok(true)` for a new edge and `Ok(false)` if the edge already
    /// existed.
    ///
    /// # Errors
    ///
    /// `UnknownConstraint` for undeclared names; `CyclicDominance` if
    /// `higher == lower` or `lower` already dominates `higher`.
    pub fn add_dominance(&mut self, higher: &str, lower: &str) -> Result<bool> {
        let h = self.position(higher)?;
        let l = self.position(lower)?;
        if h == l || self.reaches(l, h) {
            return Err(OptimalError::CyclicDominance {
                higher: higher.to_string(),
                lower: lower.to_string(),
            });
        }
        Ok(self.dominated[h].insert(l))
    }

    /// True if `lower` is reachable from `higher` along direct edges.
    ///
    /// Unknown names never dominate nor are dominated.
    pub fn dominates(&self, higher: &str, lower: &str) -> bool {
        match (self.index.get(higher), self.index.get(lower)) {
            (Some(&h), Some(&l)) => self.reaches(h, l),
            _ => false,
        }
    }

    /// True if the edge `higher >> lower` was added directly.
    pub fn directly_dominates(&self, higher: &str, lower: &str) -> bool {
        match (self.index.get(higher), self.index.get(lower)) {
            (Some(&h), Some(&l)) => self.dominated[h].contains(&l),
            _ => false,
        }
    }

    /// Iterative depth-first search with a visited guard.
    fn reaches(&self, from: usize, to: usize) -> bool {
        let mut visited = vec![false; self.constraints.len()];
        let mut stack: Vec<usize> = self.dominated[from].iter().copied().collect();
        while let Some(node) = stack.pop() {
            if node == to {
                return true;
            }
            if std::mem::replace(&mut visited[node], true) {
                continue;
            }
            stack.extend(self.dominated[node].iter().copied().filter(|&n| !visited[n]));
        }
        false
    }

    /// Reachability matrix: `closure[a][b]` iff `a` dominates `b`.
    fn closure(&self) -> Vec<Vec<bool>> {
        (0..self.constraints.len())
            .map(|from| {
                let mut reached = vec![false; self.constraints.len()];
                let mut stack: Vec<usize> = self.dominated[from].iter().copied().collect();
                while let Some(node) = stack.pop() {
                    if std::mem::replace(&mut reached[node], true) {
                        continue;
                    }
                    stack.extend(self.dominated[node].iter().copied().filter(|&n| !reached[n]));
                }
                reached
            })
            .collect()
    }

    fn strata_indices(&self) -> Vec<Vec<usize>> {
        let closure = self.closure();
        let mut remaining: BTreeSet<usize> = (0..self.constraints.len()).collect();
        let mut strata = Vec::new();

        while !remaining.is_empty() {
            let stratum: Vec<usize> = remaining
                .iter()
                .copied()
                .filter(|&c| !remaining.iter().any(|&o| o != c && closure[o][c]))
                .collect();
            if stratum.is_empty() {
                break;
            }
            for c in &stratum {
                remaining.remove(c);
            }
            strata.push(stratum);
        }

        if !remaining.is_empty() {
            strata.push(remaining.into_iter().collect());
        }
        strata
    }

    /// Splits the constraints into strata, highest-ranked first.
    ///
    /// Each stratum holds the constraints not dominated by anything still
    /// unplaced, sorted by name. Every constraint appears in exactly one stratum.
    pub fn strata(&self) -> Vec<Vec<&Constraint>> {
        self.strata_indices()
            .into_iter()
            .map(|stratum| {
                let mut members: Vec<&Constraint> =
                    stratum.into_iter().map(|i| &self.constraints[i]).collect();
                members.sort_by(|a, b| a.name().cmp(b.name()));
                members
            })
            .collect()
    }

    /// Stratum index of each constraint, keyed by name.
    pub fn stratum_of(&self, name: &str) -> Option<usize> {
        let position = *self.index.get(name)?;
        self.strata_indices()
            .iter()
            .position(|stratum| stratum.contains(&position))
    }

    /// Direct edges as `(higher, lower)` pairs, in declaration order.
    pub fn direct_dominance_pairs(&self) -> Vec<(&Constraint, &Constraint)> {
        self.dominated
            .iter()
            .enumerate()
            .flat_map(|(h, lowers)| {
                lowers
                    .iter()
                    .map(move |&l| (&self.constraints[h], &self.constraints[l]))
            })
            .collect()
    }

    /// True if the direct edges form no cycle (Kahn's algorithm).
    pub fn is_acyclic(&self) -> bool {
        self.kahn_order().len() == self.constraints.len()
    }

    /// A linear extension of the order, ties broken alphabetically.
    ///
    /// Returns `None` if the relation is cyclic.
    pub fn topological_order(&self) -> Option<Vec<&Constraint>> {
        let order = self.kahn_order();
        (order.len() == self.constraints.len())
            .then(|| order.into_iter().map(|i| &self.constraints[i]).collect())
    }

    fn kahn_order(&self) -> Vec<usize> {
        let mut in_degree = vec![0usize; self.constraints.len()];
        for lowers in &self.dominated {
            for &l in lowers {
                in_degree[l] += 1;
            }
        }

        let mut ready: BTreeSet<(&str, usize)> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &d)| d == 0)
            .map(|(i, _)| (self.constraints[i].name(), i))
            .collect();
        let mut order = Vec::with_capacity(self.constraints.len());

        while let Some(next) = ready.pop_first() {
            let node = next.1;
            order.push(node);
            for &l in &self.dominated[node] {
                in_degree[l] -= 1;
                if in_degree[l] == 0 {
                    ready.insert((self.constraints[l].name(), l));
                }
            }
        }
        order
    }
}

impl fmt::Display for PartialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .strata()
            .into_iter()
            .map(|stratum| match stratum.as_slice() {
                [single] => single.name().to_string(),
                members => format!(
                    "{{{}}}",
                    members
                        .iter()
                        .map(|c| c.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
            .collect();
        f.write_str(&rendered.join(" >> "))
    }
}

#[cfg(test)]
mod tests;
