use crate::dataset::Dataset;
use crate::decision::DecisionTree;
use crate::error::Result;

/// Counts indexed by (predicted label, true label) over the sorted true labels
/// of a test set.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    pub labels: Vec<String>,
    cells: Vec<Vec<usize>>,
    /// Pairs with a label outside `labels`; kept out of the grid.
    pub unmatched: usize,
}

impl ConfusionMatrix {
    pub fn new(labels: Vec<String>) -> Self {
        let size = labels.len();
        ConfusionMatrix {
            labels,
            cells: vec![vec![0; size]; size],
            unmatched: 0,
        }
    }

    fn index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|known| known == label)
    }

    pub fn record(&mut self, predicted: &str, actual: &str) {
        match (self.index(predicted), self.index(actual)) {
            (Some(row), Some(column)) => self.cells[row][column] += 1,
            _ => self.unmatched += 1,
        }
    }

    pub fn get(&self, predicted: &str, actual: &str) -> usize {
        match (self.index(predicted), self.index(actual)) {
            (Some(row), Some(column)) => self.cells[row][column],
            _ => 0,
        }
    }

    pub fn row_total(&self, predicted: &str) -> usize {
        self.index(predicted)
            .map_or(0, |row| self.cells[row].iter().sum())
    }

    pub fn column_total(&self, actual: &str) -> usize {
        self.index(actual)
            .map_or(0, |column| self.cells.iter().map(|row| row[column]).sum())
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub predictions: Vec<String>,
    pub correct: usize,
    /// Rows answered by the training-set majority because of an unseen value.
    pub fallbacks: usize,
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
}

pub fn evaluate(validation_data: &Dataset, learner: &DecisionTree) -> Result<Evaluation> {
    let mut confusion = ConfusionMatrix::new(validation_data.labels());
    let mut predictions = Vec::with_capacity(validation_data.len());
    let mut correct = 0;
    let mut fallbacks = 0;
    let truths = validation_data.label_column();
    for (actual, predicted) in truths.iter().zip(learner.predict(validation_data)?) {
        if predicted.class == *actual {
            correct += 1;
        }
        if predicted.fallback {
            fallbacks += 1;
        }
        confusion.record(&predicted.class, actual);
        predictions.push(predicted.class);
    }
    let accuracy = if truths.is_empty() {
        0.
    } else {
        correct as f64 / truths.len() as f64
    };
    Ok(Evaluation {
        predictions,
        correct,
        fallbacks,
        accuracy,
        confusion,
    })
}
