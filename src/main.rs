use id3_tree::config::{app, Config};
use id3_tree::decision::DecisionTree;
use id3_tree::error;
use id3_tree::evaluate::evaluate;
use id3_tree::logging::{log, LogLevel};
use id3_tree::report;
use std::process;

fn run(config: &Config) -> error::Result<()> {
    let level = config.log_level;
    let (train, test) = config.datasets()?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "training on {} rows, {} features; testing on {} rows",
            train.len(),
            train.features.len(),
            test.len()
        ),
    );

    let mut learner = DecisionTree::new(config.max_depth);
    learner.fit(&train)?;
    let limit = learner
        .max_depth()
        .map_or_else(|| "none".to_owned(), |depth| depth.to_string());
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "tree depth {} (limit {}), {} leaves, fallback label {}",
            learner.depth(),
            limit,
            learner.leaf_count(),
            learner.fallback_class().unwrap_or("-")
        ),
    );
    log(level, LogLevel::Normal, &report::branches(&learner.paths()));

    let evaluation = evaluate(&test, &learner)?;
    log(level, LogLevel::Normal, &report::predictions(&evaluation));
    log(level, LogLevel::Normal, &report::accuracy(&evaluation));
    log(
        level,
        LogLevel::Normal,
        &report::confusion_matrix(&evaluation.confusion),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "{} of {} correct, {} answered by fallback, {} outside the test label set",
            evaluation.correct,
            test.len(),
            evaluation.fallbacks,
            evaluation.confusion.unmatched
        ),
    );
    Ok(())
}

fn main() {
    let matches = app().get_matches();
    let result = Config::from_matches(&matches).and_then(|config| run(&config));
    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
