use crate::dataset::Dataset;
use crate::entropy::information_gain;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::stats::{label_counts, majority_label, value_table};

#[derive(Debug, Clone, PartialEq)]
pub struct BranchNode {
    pub feature: String,
    /// One child per value of `feature` seen at this node, in first-seen order.
    pub paths: Vec<(String, Node)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Branch(BranchNode),
    Leaf(LeafNode),
}

impl Node {
    fn leaf(class: String) -> Self {
        Node::Leaf(LeafNode { class })
    }

    fn majority_leaf(records: &[Record]) -> Self {
        Node::leaf(majority_label(records).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class: String,
    /// Set when the row carried a value no branch was trained on.
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub steps: Vec<(String, String)>,
    pub class: String,
}

#[derive(Debug, Default)]
pub struct DecisionTree {
    root: Option<Node>,
    max_depth: Option<usize>,
    features: Vec<String>,
    fallback: Option<String>,
}

impl DecisionTree {
    pub fn new(max_depth: Option<usize>) -> Self {
        DecisionTree {
            max_depth,
            ..Default::default()
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Majority label of the whole training set, used for unseen feature values.
    pub fn fallback_class(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn fit(&mut self, data: &Dataset) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyDataset);
        }
        self.features = data.features.clone();
        self.fallback = majority_label(&data.records);
        self.root = Some(self.build(&data.records, &data.records, &data.features, 0));
        Ok(())
    }

    fn build(
        &self,
        sub_set: &[Record],
        parent: &[Record],
        features: &[String],
        depth: usize,
    ) -> Node {
        if sub_set.is_empty() {
            return Node::majority_leaf(parent);
        }
        if features.is_empty() {
            return Node::majority_leaf(sub_set);
        }
        let distribution = label_counts(sub_set);
        if let Some(class) = distribution.pure_label(sub_set.len()) {
            return Node::leaf(class.to_owned());
        }
        if self.max_depth == Some(depth) {
            return Node::majority_leaf(sub_set);
        }

        // Leftmost feature wins when gains are equal.
        let (feature, _gain) = (0..features.len())
            .map(|index| {
                (
                    index,
                    information_gain(&distribution, &value_table(index, sub_set)),
                )
            })
            .fold((0, std::f64::NEG_INFINITY), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            });

        let mut remaining = features.to_vec();
        let name = remaining.remove(feature);
        let paths = value_table(feature, sub_set)
            .into_iter()
            .map(|(value, _)| {
                let child_set: Vec<Record> = sub_set
                    .iter()
                    .filter(|record| record.features[feature] == value)
                    .map(|record| record.without_feature(feature))
                    .collect();
                let child = self.build(&child_set, sub_set, &remaining, depth + 1);
                (value, child)
            })
            .collect();

        Node::Branch(BranchNode {
            feature: name,
            paths,
        })
    }

    /// `features` is the header of the row's own dataset; its column order may
    /// differ from the training data.
    pub fn classify(&self, features: &[String], record: &Record) -> Result<Prediction> {
        let mut node = self.root.as_ref().ok_or(Error::NotFitted)?;
        // Every descent consumes a feature, so a leaf is reached within this bound.
        for _ in 0..=record.features.len() {
            let branch = match node {
                Node::Leaf(leaf) => {
                    return Ok(Prediction {
                        class: leaf.class.clone(),
                        fallback: false,
                    })
                }
                Node::Branch(branch) => branch,
            };
            let value = features
                .iter()
                .position(|name| *name == branch.feature)
                .and_then(|index| record.features.get(index))
                .ok_or_else(|| Error::UnknownFeature(branch.feature.clone()))?;
            match branch.paths.iter().find(|(path, _)| path == value) {
                Some((_, child)) => node = child,
                None => break,
            }
        }
        self.fallback_prediction()
    }

    fn fallback_prediction(&self) -> Result<Prediction> {
        let class = self.fallback.clone().ok_or(Error::NotFitted)?;
        Ok(Prediction {
            class,
            fallback: true,
        })
    }

    pub fn predict(&self, data: &Dataset) -> Result<Vec<Prediction>> {
        data.records
            .iter()
            .map(|record| self.classify(&data.features, record))
            .collect()
    }

    pub fn paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        if let Some(root) = &self.root {
            collect_paths(root, &mut Vec::new(), &mut paths);
        }
        paths
    }

    pub fn depth(&self) -> usize {
        self.paths().iter().map(|path| path.steps.len()).max().unwrap_or(0)
    }

    pub fn leaf_count(&self) -> usize {
        self.paths().len()
    }
}

fn collect_paths(node: &Node, steps: &mut Vec<(String, String)>, paths: &mut Vec<Path>) {
    match node {
        Node::Leaf(leaf) => paths.push(Path {
            steps: steps.clone(),
            class: leaf.class.clone(),
        }),
        Node::Branch(branch) => {
            for (value, child) in &branch.paths {
                steps.push((branch.feature.clone(), value.clone()));
                collect_paths(child, steps, paths);
                steps.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn weather() -> Dataset {
        Dataset::parse("Weather,Play\nSunny,Yes\nSunny,Yes\nRainy,No\nRainy,No\n").unwrap()
    }

    // The classic 14-row play-tennis table.
    fn tennis() -> Dataset {
        Dataset::parse(
            "Outlook,Temperature,Humidity,Wind,Play\n\
             Sunny,Hot,High,Weak,No\n\
             Sunny,Hot,High,Strong,No\n\
             Overcast,Hot,High,Weak,Yes\n\
             Rain,Mild,High,Weak,Yes\n\
             Rain,Cool,Normal,Weak,Yes\n\
             Rain,Cool,Normal,Strong,No\n\
             Overcast,Cool,Normal,Strong,Yes\n\
             Sunny,Mild,High,Weak,No\n\
             Sunny,Cool,Normal,Weak,Yes\n\
             Rain,Mild,Normal,Weak,Yes\n\
             Sunny,Mild,Normal,Strong,Yes\n\
             Overcast,Mild,High,Strong,Yes\n\
             Overcast,Hot,Normal,Weak,Yes\n\
             Rain,Mild,High,Strong,No\n",
        )
        .unwrap()
    }

    fn row(features: &[&str]) -> Record {
        Record {
            features: features.iter().map(|f| f.to_string()).collect(),
            class: String::new(),
        }
    }

    fn leaf(class: &str) -> Node {
        Node::leaf(class.to_owned())
    }

    #[test]
    fn single_split_with_pure_leaves() {
        let mut tree = DecisionTree::default();
        tree.fit(&weather()).unwrap();
        let expected = Node::Branch(BranchNode {
            feature: "Weather".to_owned(),
            paths: vec![("Sunny".to_owned(), leaf("Yes")), ("Rainy".to_owned(), leaf("No"))],
        });
        assert_eq!(tree.root(), Some(&expected));
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn unseen_value_takes_the_fallback() {
        let mut tree = DecisionTree::default();
        tree.fit(&weather()).unwrap();
        let features = vec!["Weather".to_owned()];
        let prediction = tree.classify(&features, &row(&["Cloudy"])).unwrap();
        // Two Yes and two No: the alphabetically smaller label wins.
        assert_eq!(prediction.class, "No");
        assert!(prediction.fallback);
        let prediction = tree.classify(&features, &row(&["Sunny"])).unwrap();
        assert_eq!(prediction.class, "Yes");
        assert!(!prediction.fallback);
    }

    #[test]
    fn no_features_left_gives_majority() {
        let data = Dataset::parse("Const,Label\nx,Yes\nx,Yes\nx,No\nx,Yes\n").unwrap();
        let tree = DecisionTree::default();
        let node = tree.build(&data.records, &data.records, &[], 0);
        assert_eq!(node, leaf("Yes"));
    }

    #[test]
    fn empty_subset_uses_parent_majority() {
        let data = Dataset::parse("A,Label\nx,No\ny,Yes\nz,No\n").unwrap();
        let tree = DecisionTree::default();
        let node = tree.build(&[], &data.records, &data.features, 1);
        assert_eq!(node, leaf("No"));
    }

    #[test]
    fn depth_zero_is_a_single_majority_leaf() {
        let mut tree = DecisionTree::new(Some(0));
        tree.fit(&tennis()).unwrap();
        assert_eq!(tree.root(), Some(&leaf("Yes")));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn depth_limit_caps_split_levels() {
        let mut tree = DecisionTree::new(Some(1));
        tree.fit(&tennis()).unwrap();
        assert_eq!(tree.depth(), 1);
        match tree.root() {
            Some(Node::Branch(branch)) => {
                assert_eq!(branch.feature, "Outlook");
                let values: Vec<&str> = branch.paths.iter().map(|(v, _)| v.as_str()).collect();
                assert_eq!(values, vec!["Sunny", "Overcast", "Rain"]);
                // Sunny is 2 Yes / 3 No, Rain is 3 Yes / 2 No.
                assert_eq!(branch.paths[0].1, leaf("No"));
                assert_eq!(branch.paths[1].1, leaf("Yes"));
                assert_eq!(branch.paths[2].1, leaf("Yes"));
            }
            other => panic!("expected a branch, got {:?}", other),
        }
    }

    #[test]
    fn full_tennis_tree() {
        let mut tree = DecisionTree::default();
        tree.fit(&tennis()).unwrap();
        let paths = tree.paths();
        let rendered: Vec<(Vec<(&str, &str)>, &str)> = paths
            .iter()
            .map(|path| {
                (
                    path.steps.iter().map(|(f, v)| (f.as_str(), v.as_str())).collect(),
                    path.class.as_str(),
                )
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                (vec![("Outlook", "Sunny"), ("Humidity", "High")], "No"),
                (vec![("Outlook", "Sunny"), ("Humidity", "Normal")], "Yes"),
                (vec![("Outlook", "Overcast")], "Yes"),
                (vec![("Outlook", "Rain"), ("Wind", "Weak")], "Yes"),
                (vec![("Outlook", "Rain"), ("Wind", "Strong")], "No"),
            ]
        );
    }

    #[test]
    fn training_rows_classify_to_their_own_label() {
        let data = tennis();
        let mut tree = DecisionTree::default();
        tree.fit(&data).unwrap();
        for (record, prediction) in data.records.iter().zip(tree.predict(&data).unwrap()) {
            assert_eq!(prediction.class, record.class);
            assert!(!prediction.fallback);
        }
    }

    #[test]
    fn test_header_order_may_differ() {
        let mut tree = DecisionTree::default();
        tree.fit(&tennis()).unwrap();
        let test = Dataset::parse(
            "Wind,Humidity,Temperature,Outlook,Play\n\
             Strong,High,Mild,Rain,No\n",
        )
        .unwrap();
        let predictions = tree.predict(&test).unwrap();
        assert_eq!(predictions[0].class, "No");
    }

    #[test]
    fn gain_ties_go_to_the_leftmost_feature() {
        let data = Dataset::parse("B,A,Label\np,p,Yes\nq,q,No\n").unwrap();
        let mut tree = DecisionTree::default();
        tree.fit(&data).unwrap();
        match tree.root() {
            Some(Node::Branch(branch)) => assert_eq!(branch.feature, "B"),
            other => panic!("expected a branch, got {:?}", other),
        }
    }

    #[test]
    fn refit_replaces_the_tree() {
        let mut tree = DecisionTree::default();
        tree.fit(&tennis()).unwrap();
        tree.fit(&weather()).unwrap();
        assert_eq!(tree.features(), &["Weather".to_owned()]);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn errors() {
        let tree = DecisionTree::default();
        assert!(matches!(tree.classify(&[], &row(&["x"])), Err(Error::NotFitted)));

        let mut tree = DecisionTree::default();
        let empty = Dataset::parse("A,Label\n").unwrap();
        assert!(matches!(tree.fit(&empty), Err(Error::EmptyDataset)));

        tree.fit(&weather()).unwrap();
        let other = vec!["Season".to_owned()];
        match tree.classify(&other, &row(&["Winter"])) {
            Err(Error::UnknownFeature(name)) => assert_eq!(name, "Weather"),
            other => panic!("unexpected {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn pure_dataset_is_one_leaf(rows in prop::collection::vec(("[a-c]", "[x-z]"), 1..20)) {
            let records: Vec<Record> = rows
                .into_iter()
                .map(|(a, b)| Record { features: vec![a, b], class: "Same".to_owned() })
                .collect();
            let data = Dataset {
                features: vec!["A".to_owned(), "B".to_owned()],
                label: "Label".to_owned(),
                records,
            };
            let mut tree = DecisionTree::default();
            tree.fit(&data).unwrap();
            prop_assert_eq!(tree.root(), Some(&leaf("Same")));
        }
    }
}
