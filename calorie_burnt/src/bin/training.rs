use calorie_burnt::{FeatureRecord, dataset::GymRecord, model::TreeModel};
use csv::Reader;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file location with training data
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("input.csv"), required = false)]
    pub input: PathBuf,
    /// Output model file. _Note_: will truncate old file if exists
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("calorie_burnt.json"), required = false)]
    pub output: PathBuf,
    /// Don't save changes
    #[arg(short, long, default_value_t = false, required = false)]
    pub dry: bool,
    /// Print result to stdout
    #[arg(short, long, default_value_t = false, required = false)]
    pub print: bool,
    /// Log debug output
    #[arg(short, long, default_value_t = false, required = false)]
    pub verbose: bool,
}

/// Reads rows and turns them into the same features the predictor builds.
/// Rows that fail to parse or validate are skipped.
fn load_data(file_path: impl AsRef<Path>) -> Result<Vec<(FeatureRecord, f64)>, Box<dyn Error>> {
    let mut reader = Reader::from_path(file_path.as_ref())
        .map_err(|e| format!("Failed to open input file. Reason: {e}"))?;

    let data = reader
        .deserialize::<GymRecord>()
        .enumerate()
        .filter_map(|(row, record)| {
            let record = record
                .inspect_err(|e| tracing::warn!(row, "Skipping unreadable record: {e}"))
                .ok()?;

            let (features, corrections) = FeatureRecord::build(&record.input())
                .inspect_err(|e| tracing::warn!(row, "Skipping invalid record: {e}"))
                .ok()?;

            for correction in corrections {
                tracing::debug!(row, "{correction}");
            }

            Some((features, record.calories_burned))
        })
        .collect();

    Ok(data)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        output,
        dry,
        print,
        verbose,
    } = <Args as clap::Parser>::parse();

    calorie_burnt::logging::init(verbose);

    let data = load_data(input)?;

    tracing::info!("Number of records for training: {}", data.len());

    let model = TreeModel::fit(data.iter().map(|(features, kcal)| (features, *kcal)))?;

    if print {
        println!("{}", model.to_json()?);
    }

    if !dry {
        tracing::info!("Save to {}", output.to_string_lossy());

        model
            .save(&output)
            .map_err(|e| format!("Failed to save model. Reason: {e}"))?;
    }

    tracing::info!("Done!");

    Ok(())
}
