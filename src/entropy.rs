use crate::stats::{LabelCounts, ValueTable};

/// Shannon entropy (base 2) of a label distribution. Must not be called on an
/// empty table.
pub fn entropy(counts: &LabelCounts) -> f64 {
    if counts.len() == 1 {
        return 0.;
    }
    let total = counts.total() as f64;
    counts
        .iter()
        .map(|(_, count)| count as f64 / total)
        .map(|frac| frac * frac.log2())
        .fold(0., |acc, v| acc - v)
}

/// Parent entropy minus the size-weighted entropy of the children produced by
/// splitting on one feature.
pub fn information_gain(total: &LabelCounts, values: &ValueTable) -> f64 {
    let size = total.total() as f64;
    let children = values
        .iter()
        .map(|(_, counts)| counts.total() as f64 / size * entropy(counts))
        .fold(0., |acc, v| acc + v);
    entropy(total) - children
}
