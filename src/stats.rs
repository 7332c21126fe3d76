use crate::record::Record;

/// Label occurrence counts, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelCounts {
    counts: Vec<(String, usize)>,
}

/// Per-value label counts for a single feature column, in first-seen order.
pub type ValueTable = Vec<(String, LabelCounts)>;

impl LabelCounts {
    pub fn add(&mut self, label: &str) {
        match self.counts.iter_mut().find(|(key, _)| key == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label.to_owned(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(key, _)| key == label)
            .map_or(0, |(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The label held by all `size` rows, if there is one.
    pub fn pure_label(&self, size: usize) -> Option<&str> {
        self.iter()
            .find(|(_, count)| *count == size)
            .map(|(label, _)| label)
    }

    /// Most frequent label; equal counts go to the lexicographically smallest label.
    pub fn majority(&self) -> Option<&str> {
        self.iter()
            .fold(None, |best: Option<(&str, usize)>, (label, count)| match best {
                Some((best_label, best_count))
                    if best_count > count || (best_count == count && best_label < label) =>
                {
                    best
                }
                _ => Some((label, count)),
            })
            .map(|(label, _)| label)
    }
}

pub fn label_counts(records: &[Record]) -> LabelCounts {
    let mut counts = LabelCounts::default();
    for record in records {
        counts.add(&record.class);
    }
    counts
}

pub fn value_table(feature: usize, records: &[Record]) -> ValueTable {
    let mut table: ValueTable = Vec::new();
    for record in records {
        let value = &record.features[feature];
        match table.iter_mut().find(|(key, _)| key == value) {
            Some((_, counts)) => counts.add(&record.class),
            None => {
                let mut counts = LabelCounts::default();
                counts.add(&record.class);
                table.push((value.clone(), counts));
            }
        }
    }
    table
}

pub fn majority_label(records: &[Record]) -> Option<String> {
    label_counts(records).majority().map(str::to_owned)
}
