//! Tests for partial orders.

use super::*;

fn abc() -> PartialOrder {
    PartialOrder::new(["A", "B", "C"].map(Constraint::new))
}

fn names(stratum: &[&Constraint]) -> Vec<String> {
    stratum.iter().map(|c| c.name().to_string()).collect()
}

#[test]
fn test_empty_order_is_one_stratum() {
    let order = abc();
    assert_eq!(order.len(), 3);
    assert_eq!(order.edge_count(), 0);
    assert_eq!(order.strata().len(), 1);
    assert_eq!(order.to_string(), "{A, B, C}");
}

#[test]
fn test_duplicate_names_are_dropped() {
    let order = PartialOrder::new(["A", "B", "A"].map(Constraint::new));
    assert_eq!(order.len(), 2);
}

#[test]
fn test_direct_dominance() {
    let mut order = abc();
    assert_eq!(order.add_dominance("A", "B"), Ok(true));
    assert_eq!(order.add_dominance("A", "B"), Ok(false));
    assert!(order.dominates("A", "B"));
    assert!(!order.dominates("B", "A"));
    assert!(order.directly_dominates("A", "B"));
}

#[test]
fn test_transitive_dominance() {
    let mut order = abc();
    order.add_dominance("A", "B").unwrap();
    order.add_dominance("B", "C").unwrap();

    assert!(order.dominates("A", "C"));
    assert!(!order.directly_dominates("A", "C"));
    assert!(!order.dominates("C", "A"));
}

#[test]
fn test_cycle_is_rejected() {
    let mut order = abc();
    order.add_dominance("A", "B").unwrap();
    order.add_dominance("B", "C").unwrap();

    let err = order.add_dominance("C", "A").unwrap_err();
    assert_eq!(
        err,
        OptimalError::CyclicDominance {
            higher: "C".into(),
            lower: "A".into()
        }
    );
    assert!(order.add_dominance("B", "B").is_err());
    assert_eq!(order.edge_count(), 2);
    assert!(order.is_acyclic());
}

#[test]
fn test_no_mutual_dominance() {
    let mut order = PartialOrder::new(["A", "B", "C", "D"].map(Constraint::new));
    let edges = [("A", "B"), ("B", "A"), ("C", "D"), ("D", "B"), ("B", "C")];
    for (h, l) in edges {
        let _ = order.add_dominance(h, l);
    }
    for a in ["A", "B", "C", "D"] {
        for b in ["A", "B", "C", "D"] {
            assert!(!(order.dominates(a, b) && order.dominates(b, a)), "{a} <-> {b}");
        }
    }
}

#[test]
fn test_unknown_constraint() {
    let mut order = abc();
    assert_eq!(
        order.add_dominance("A", "Z"),
        Err(OptimalError::UnknownConstraint("Z".into()))
    );
    assert!(!order.dominates("Z", "A"));
    assert!(!order.contains("Z"));
}

#[test]
fn test_strata_two_over_one() {
    let mut order = abc();
    order.add_dominance("A", "C").unwrap();
    order.add_dominance("B", "C").unwrap();

    let strata = order.strata();
    assert_eq!(strata.len(), 2);
    assert_eq!(names(&strata[0]), vec!["A", "B"]);
    assert_eq!(names(&strata[1]), vec!["C"]);
    assert_eq!(order.to_string(), "{A, B} >> C");
    assert_eq!(order.stratum_of("C"), Some(1));
    assert_eq!(order.stratum_of("Z"), None);
}

#[test]
fn test_strata_partition_constraints() {
    let mut order = PartialOrder::new(["E", "D", "C", "B", "A"].map(Constraint::new));
    order.add_dominance("E", "A").unwrap();
    order.add_dominance("D", "B").unwrap();
    order.add_dominance("B", "A").unwrap();

    let mut seen: Vec<String> = order
        .strata()
        .iter()
        .flat_map(|s| names(s))
        .collect();
    seen.sort();
    assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_from_values_strict() {
    let values: WeightTable = [("A", 3.0), ("B", 3.0), ("C", 1.0)]
        .into_iter()
        .map(|(n, v)| (n.to_string(), v))
        .collect();
    let order = PartialOrder::from_values(["C", "B", "A"].map(Constraint::new), &values, 0.0);

    assert!(order.dominates("A", "C"));
    assert!(order.dominates("B", "C"));
    assert!(!order.dominates("A", "B"));
    assert!(!order.dominates("B", "A"));
    assert_eq!(order.to_string(), "{A, B} >> C");
}

#[test]
fn test_from_values_margin_keeps_near_ties_together() {
    let values: WeightTable = [("A", 1.005), ("B", 1.0), ("C", 0.5)]
        .into_iter()
        .map(|(n, v)| (n.to_string(), v))
        .collect();
    let order = PartialOrder::from_values(["A", "B", "C"].map(Constraint::new), &values, 0.01);

    assert_eq!(order.stratum_of("A"), order.stratum_of("B"));
    assert!(order.dominates("A", "C"));
    assert_eq!(order.to_string(), "{A, B} >> C");
}

#[test]
fn test_topological_order() {
    let mut order = abc();
    order.add_dominance("C", "A").unwrap();

    let linear: Vec<_> = order
        .topological_order()
        .unwrap()
        .into_iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(linear, vec!["B", "C", "A"]);
}

#[test]
fn test_direct_dominance_pairs() {
    let mut order = abc();
    order.add_dominance("B", "C").unwrap();
    order.add_dominance("A", "C").unwrap();

    let pairs: Vec<_> = order
        .direct_dominance_pairs()
        .into_iter()
        .map(|(h, l)| (h.name(), l.name()))
        .collect();
    assert_eq!(pairs, vec![("A", "C"), ("B", "C")]);
}
