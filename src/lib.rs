//! ID3 decision trees over categorical CSV data.
//!
//! A [`Dataset`](dataset::Dataset) is parsed from text, a
//! [`DecisionTree`](decision::DecisionTree) is fitted to it by recursively
//! splitting on the feature with the highest information gain, and
//! [`evaluate`](evaluate::evaluate) scores the tree against a labeled test set.

pub mod config;
pub mod dataset;
pub mod decision;
pub mod entropy;
pub mod error;
pub mod evaluate;
pub mod logging;
pub mod record;
pub mod report;
pub mod stats;
