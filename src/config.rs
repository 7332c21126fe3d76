use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use clap::{App, Arg, ArgMatches};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use std::path::PathBuf;

/// Where the test rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// A separate test file.
    Holdout(PathBuf),
    /// Evaluate on the training rows themselves.
    Training,
    /// Shuffle the training file and keep this percentage for training.
    Random(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub train: PathBuf,
    pub validation: Validation,
    pub max_depth: Option<usize>,
    pub seed: Option<u64>,
    pub log_level: LogLevel,
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("id3 decision tree")
        .version("0.1")
        .author("Pearce Keesling")
        .about("Builds an ID3 decision tree from categorical CSV data and evaluates it")
        .arg(Arg::with_name("train")
             .help("training CSV, header row first, label in the last column")
             .required(true)
             .index(1))
        .arg(Arg::with_name("test")
             .help("test CSV with the same columns")
             .index(2))
        .arg(Arg::with_name("max_depth")
             .help("maximum number of split levels, same as --depth")
             .index(3)
             .requires("test")
             .conflicts_with("depth"))
        .arg(Arg::with_name("depth")
             .short("d")
             .long("depth")
             .help("maximum number of split levels")
             .takes_value(true))
        .arg(Arg::with_name("validation")
             .short("v")
             .long("validation")
             .help("`training` or `random <percent>` when no test file is given")
             .min_values(1)
             .max_values(2)
             .takes_value(true)
             .conflicts_with("test")
             .required_unless("test"))
        .arg(Arg::with_name("seed")
             .long("seed")
             .help("seed for the `random` validation shuffle")
             .takes_value(true))
        .arg(Arg::with_name("quiet")
             .short("q")
             .long("quiet"))
        .arg(Arg::with_name("verbose")
             .long("verbose")
             .conflicts_with("quiet"))
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| Error::InvalidArgument(format!("{} `{}`", name, value)))
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let train = PathBuf::from(matches.value_of("train").unwrap_or_default());
        let validation = match matches.value_of("test") {
            Some(test) => Validation::Holdout(PathBuf::from(test)),
            None => {
                let mut values = matches.values_of("validation").into_iter().flatten();
                match (values.next(), values.next()) {
                    (Some("training"), None) => Validation::Training,
                    (Some("random"), Some(percent)) => {
                        let percent: f64 = parse_value("percentage", percent)?;
                        if !(percent > 0. && percent < 100.) {
                            return Err(Error::InvalidArgument(format!(
                                "percentage `{}` must be between 0 and 100",
                                percent
                            )));
                        }
                        Validation::Random(percent)
                    }
                    (mode, _) => {
                        return Err(Error::InvalidArgument(format!(
                            "validation mode `{}`",
                            mode.unwrap_or_default()
                        )))
                    }
                }
            }
        };
        let max_depth = match matches
            .value_of("depth")
            .or_else(|| matches.value_of("max_depth"))
        {
            Some(depth) => Some(parse_value("depth", depth)?),
            None => None,
        };
        let seed = match matches.value_of("seed") {
            Some(seed) => Some(parse_value("seed", seed)?),
            None => None,
        };
        let log_level = if matches.is_present("quiet") {
            LogLevel::Quiet
        } else if matches.is_present("verbose") {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        };
        Ok(Config {
            train,
            validation,
            max_depth,
            seed,
            log_level,
        })
    }

    pub fn datasets(&self) -> Result<(Dataset, Dataset)> {
        let mut data = Dataset::load(&self.train)?;
        match &self.validation {
            Validation::Holdout(test) => Ok((data, Dataset::load(test)?)),
            Validation::Training => Ok((data.clone(), data)),
            Validation::Random(percent) => {
                match self.seed {
                    Some(seed) => data.shuffle(&mut StdRng::seed_from_u64(seed)),
                    None => data.shuffle(&mut thread_rng()),
                }
                Ok(data.split(*percent))
            }
        }
    }
}
