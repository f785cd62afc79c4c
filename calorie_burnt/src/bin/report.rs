use std::{fs::File, io::Write, path::PathBuf};

use calorie_burnt::{Predictor, dataset::GymRecord, model::TreeModel};

#[derive(Debug, serde::Serialize)]
pub struct Report {
    row: usize,
    expected: f64,
    raw: f64,
    constrained: f64,
    raw_precision: f64,
    constrained_precision: f64,
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file location
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("input.csv"), required = false)]
    pub input: PathBuf,
    /// Output csv file. _Note_: will truncate old file if exists
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("output.csv"), required = false)]
    pub output: PathBuf,
    /// Model json file
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("calorie_burnt.json"), required = false)]
    pub model: PathBuf,
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

/// Ratio of the smaller to the larger value, `1.0` is an exact hit.
fn precision(expected: f64, actual: f64) -> f64 {
    let precision = match expected < actual {
        true => expected / actual,
        false => actual / expected,
    };

    precision.abs()
}

/// Floored percentage of `count` in `total`, `0` when there are no records.
fn share(count: usize, total: usize) -> f64 {
    match total {
        0 => 0.0,
        total => ((count as f64 / total as f64) * 100.0).floor(),
    }
}

/// Histogram over 10% precision buckets.
///
/// 0 - Threshold for precision
/// 1 - Count for this 10% precision category
/// 2 - Count for all precision >= threshold
struct Thresholds([(f64, usize, usize); 9]);

impl Thresholds {
    fn new() -> Self {
        Self([
            (0.9, 0, 0),
            (0.8, 0, 0),
            (0.7, 0, 0),
            (0.6, 0, 0),
            (0.5, 0, 0),
            (0.4, 0, 0),
            (0.3, 0, 0),
            (0.2, 0, 0),
            (0.1, 0, 0),
        ])
    }

    fn add(&mut self, precision: f64) {
        if let Some((_, count, _)) = self.0.iter_mut().find(|(th, _, _)| precision > *th) {
            *count += 1;
        }

        for (_, _, count) in self.0.iter_mut().filter(|(th, _, _)| precision > *th) {
            *count += 1;
        }
    }

    fn print(&self, title: &str, total: usize) {
        println!("{title}");

        for (f, count, count_total) in self.0 {
            println!(
                "> {f}: {count:5} records | total: {count_total:5} - {}%",
                share(count_total, total)
            )
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        output,
        model,
        dry,
        print,
        verbose,
    } = <Args as clap::Parser>::parse();

    calorie_burnt::logging::init(verbose);

    let mut rdr = csv::Reader::from_reader(
        File::open(input).map_err(|e| format!("Failed to read input file. Reason: {e}"))?,
    );

    let mut wrt = match dry {
        true => None,
        false => Some(
            csv::Writer::from_path(&output)
                .map_err(|e| format!("Failed to open output file. Reason: {e}"))?,
        ),
    };

    let data = rdr
        .deserialize::<GymRecord>()
        .filter_map(|this| {
            this.inspect_err(|e| tracing::warn!("Skipping unreadable record: {e}"))
                .ok()
        })
        .collect::<Vec<_>>();

    let predictor = Predictor::new(
        TreeModel::load(model).map_err(|e| format!("Failed to init model. Reason: {e}"))?,
    );

    let mut io = match print {
        true => {
            let mut io = std::io::stdout().lock();

            writeln!(io, "row,expected,raw,constrained")?;

            Some(io)
        }
        false => None,
    };

    let mut raw_thresholds = Thresholds::new();
    let mut constrained_thresholds = Thresholds::new();
    let mut total_data = 0;

    for (row, record) in data.into_iter().enumerate() {
        let result = match predictor.predict(&record.input()) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(row, "Skipping record: {e}");
                continue;
            }
        };

        total_data += 1;

        let expected = record.calories_burned;
        let raw_precision = precision(expected, result.raw_kcal);
        let constrained_precision = precision(expected, result.constrained_kcal);

        raw_thresholds.add(raw_precision);
        constrained_thresholds.add(constrained_precision);

        if let Some(io) = &mut io {
            writeln!(
                io,
                "{row},{expected},{},{}",
                result.raw_kcal, result.constrained_kcal
            )?;
        }

        if let Some(wrt) = &mut wrt {
            wrt.serialize(Report {
                row,
                expected,
                raw: result.raw_kcal,
                constrained: result.constrained_kcal,
                raw_precision,
                constrained_precision,
            })?;
        }
    }

    // Release stdout before the summary goes through `println!`
    drop(io);

    println!("Total: {total_data} records");

    raw_thresholds.print("Raw prediction:", total_data);
    constrained_thresholds.print("Constrained prediction:", total_data);

    if let Some(mut wrt) = wrt {
        tracing::info!("Saving to {}", output.to_string_lossy());
        wrt.flush()?;
    }

    tracing::info!("Done!");

    Ok(())
}
