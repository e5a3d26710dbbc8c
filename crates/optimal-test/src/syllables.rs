//! Syllable-structure grammars with rankings consistent with their data.

use optimal_core::Grammar;

use crate::{constraints, example};

/// `/pat/` resolved by epenthesis: `pa.ta` beats `pat` and `pa`.
///
/// Every learner should rank DEP below both NOCODA and MAX.
pub fn pat_grammar() -> Grammar {
    Grammar::with_examples(
        constraints(&["NOCODA", "MAX", "DEP"]),
        vec![
            example("/pat/", "pa.ta", true, &[("NOCODA", 0), ("MAX", 0), ("DEP", 1)]),
            example("/pat/", "pat", false, &[("NOCODA", 1), ("MAX", 0), ("DEP", 0)]),
            example("/pat/", "pa", false, &[("NOCODA", 0), ("MAX", 1), ("DEP", 0)]),
        ],
    )
}

/// `/pat/` plus `/apa/`, where onsetless `a.pa` wins.
///
/// The only consistent stratification is `{MAX, NOCODA} >> DEP >> ONSET`.
pub fn onset_grammar() -> Grammar {
    let base = pat_grammar();
    let mut all = base.constraints().to_vec();
    all.extend(constraints(&["ONSET"]));

    let mut examples = base.examples().to_vec();
    examples.extend([
        example("/apa/", "a.pa", true, &[("ONSET", 1)]),
        example("/apa/", "ʔa.pa", false, &[("DEP", 1)]),
        example("/apa/", "pa", false, &[("MAX", 1)]),
    ]);
    Grammar::with_examples(all, examples)
}

/// Two constraints, one winner: `A >> B` is the only ranking.
pub fn two_constraint_grammar() -> Grammar {
    Grammar::with_examples(
        constraints(&["A", "B"]),
        vec![
            example("/x/", "x1", true, &[("B", 1)]),
            example("/x/", "x2", false, &[("A", 1)]),
        ],
    )
}
