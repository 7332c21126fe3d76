use crate::decision::Path;
use crate::evaluate::{ConfusionMatrix, Evaluation};
use itertools::Itertools;

fn branch_line(path: &Path) -> String {
    path.steps
        .iter()
        .enumerate()
        .map(|(index, (feature, value))| format!("{}:{}={}", index + 1, feature, value))
        .chain(std::iter::once(path.class.clone()))
        .join(" ")
}

/// One line per path, shortest first; equal lengths keep tree order.
pub fn branches(paths: &[Path]) -> String {
    let lines = paths
        .iter()
        .sorted_by(|a, b| a.steps.len().cmp(&b.steps.len()))
        .map(branch_line)
        .join("\n");
    format!("[BRANCHES]:\n{}", lines)
}

pub fn predictions(evaluation: &Evaluation) -> String {
    format!("[PREDICTIONS]: {}", evaluation.predictions.join(" "))
}

pub fn accuracy(evaluation: &Evaluation) -> String {
    format!("[ACCURACY]: {:.5}", evaluation.accuracy)
}

/// One line per true label, one column per predicted label.
pub fn confusion_matrix(matrix: &ConfusionMatrix) -> String {
    let rows = matrix
        .labels
        .iter()
        .map(|actual| {
            matrix
                .labels
                .iter()
                .map(|predicted| matrix.get(predicted, actual))
                .join(" ")
        })
        .join("\n");
    format!("[CONFUSION_MATRIX]:\n{}", rows)
}
