//! Grammars that no strict ranking can satisfy.

use optimal_core::Grammar;

use crate::{constraints, example};

/// `/x/` needs `B >> A` while `/y/` needs `A >> B`.
pub fn contradictory_grammar() -> Grammar {
    Grammar::with_examples(
        constraints(&["A", "B"]),
        vec![
            example("/x/", "x1", true, &[("A", 1)]),
            example("/x/", "x2", false, &[("B", 1)]),
            example("/y/", "y1", true, &[("B", 1)]),
            example("/y/", "y2", false, &[("A", 1)]),
        ],
    )
}

/// A winner with exactly the same violations as its competitor.
pub fn tied_grammar() -> Grammar {
    Grammar::with_examples(
        constraints(&["ONSET", "NOCODA"]),
        vec![
            example("/ba/", "ba", true, &[("NOCODA", 0)]),
            example("/ba/", "bá", false, &[]),
        ],
    )
}
