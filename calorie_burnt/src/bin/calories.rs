use std::path::PathBuf;

use calorie_burnt::{
    ExperienceLevel, HeartRate, Predictor, Sex, WorkoutInput, WorkoutType,
    maintenance::maintenance_calories, model::TreeModel,
};
use heart_rate::{Caution, SmokingAssessment, SmokingStatus, smoking_cautions};

const NO_CAUTIONS: &str = "No significant cautions: Your heart rate and smoking status do not \
    indicate immediate concerns for exercise. Always monitor your health and consult a doctor \
    if needed.";

const TDEE_NOTE: &str = "TDEE is your estimated daily calorie needs to maintain weight, based on \
    your activity level. Adjust based on weight loss or gain goals.";

#[derive(Debug, clap::Parser)]
#[command(about = "Workout calorie burn, maintenance calories and smoking cautions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Print the input summary
    #[arg(long, global = true, default_value_t = false)]
    pub details: bool,
    /// Print results as json
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    /// Log debug output
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Estimate calories burned during a workout
    Burn(BurnArgs),
    /// Calculate daily maintenance calories
    Maintenance(MaintenanceArgs),
    /// Check exercise cautions based on smoking status
    Smoking(SmokingArgs),
}

#[derive(Debug, clap::Args)]
pub struct BurnArgs {
    /// Model json file
    #[arg(long, default_value_os_t = std::env::current_dir().unwrap_or_default().join("calorie_burnt.json"))]
    pub model: PathBuf,
    /// Age (10-100 years)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(10..=100))]
    pub age: u8,
    #[arg(long, default_value_t = Sex::Male)]
    pub gender: Sex,
    /// Weight in kilograms (30-200 kg)
    #[arg(long, default_value_t = 76.0, value_parser = parse_weight)]
    pub weight: f64,
    /// Height in meters (1.0-2.5 m)
    #[arg(long, default_value_t = 1.84, value_parser = parse_height)]
    pub height: f64,
    /// Body fat percentage (5-50%)
    #[arg(long, default_value_t = 15.0, value_parser = parse_fat)]
    pub fat_percentage: f64,
    /// Maximum heart rate (80-220 BPM)
    #[arg(long, default_value_t = 140, value_parser = clap::value_parser!(u8).range(80..=220))]
    pub max_bpm: u8,
    /// Average heart rate during the workout (60-200 BPM)
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u8).range(60..=200))]
    pub avg_bpm: u8,
    /// Resting heart rate (40-100 BPM)
    #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(u8).range(40..=100))]
    pub resting_bpm: u8,
    /// Session duration in hours (0.05-5.0 h)
    #[arg(long, default_value_t = 1.5, value_parser = parse_duration)]
    pub duration: f64,
    /// Workouts per week (1-7 days)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=7))]
    pub frequency: u8,
    /// Yoga, Cardio, Strength or HIIT
    #[arg(long, default_value_t = WorkoutType::Strength)]
    pub workout_type: WorkoutType,
    /// 1 (Beginner), 2 (Intermediate) or 3 (Expert)
    #[arg(long, default_value_t = ExperienceLevel::Intermediate)]
    pub experience: ExperienceLevel,
    /// Daily water intake in liters (0.5-5.0 l)
    #[arg(long, default_value_t = 2.5, value_parser = parse_water)]
    pub water: f64,
}

#[derive(Debug, clap::Args)]
pub struct MaintenanceArgs {
    /// Age (10-100 years)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(10..=100))]
    pub age: u8,
    #[arg(long, default_value_t = Sex::Male)]
    pub gender: Sex,
    /// Weight in kilograms (30-200 kg)
    #[arg(long, default_value_t = 76.0, value_parser = parse_weight)]
    pub weight: f64,
    /// Height in meters (1.0-2.5 m)
    #[arg(long, default_value_t = 1.84, value_parser = parse_height)]
    pub height: f64,
    /// Workouts per week (1-7 days)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=7))]
    pub frequency: u8,
}

#[derive(Debug, clap::Args)]
pub struct SmokingArgs {
    /// Average heart rate during the workout (60-200 BPM)
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u8).range(60..=200))]
    pub avg_bpm: u8,
    /// Maximum heart rate (80-220 BPM)
    #[arg(long, default_value_t = 140, value_parser = clap::value_parser!(u8).range(80..=220))]
    pub max_bpm: u8,
    /// "None", "Very Less", "Occasional" or "Very Much"
    #[arg(long, default_value_t = SmokingStatus::Never)]
    pub status: SmokingStatus,
}

fn bounded(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("{s:?} is not a number: {e}"))?;

    match (min..=max).contains(&value) {
        true => Ok(value),
        false => Err(format!("{value} is not in {min}..={max}")),
    }
}

fn parse_weight(s: &str) -> Result<f64, String> {
    bounded(s, 30.0, 200.0)
}

fn parse_height(s: &str) -> Result<f64, String> {
    bounded(s, 1.0, 2.5)
}

fn parse_fat(s: &str) -> Result<f64, String> {
    bounded(s, 5.0, 50.0)
}

fn parse_duration(s: &str) -> Result<f64, String> {
    bounded(s, 0.05, 5.0)
}

fn parse_water(s: &str) -> Result<f64, String> {
    bounded(s, 0.5, 5.0)
}

#[derive(Debug, serde::Serialize)]
struct SmokingReport {
    status: SmokingStatus,
    assessment: SmokingAssessment,
    cautions: Vec<String>,
}

fn burn(args: BurnArgs, details: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input = WorkoutInput {
        age: args.age,
        sex: args.gender,
        weight_kg: args.weight,
        height_m: args.height,
        heart_rate: HeartRate::new(args.max_bpm, args.avg_bpm, args.resting_bpm),
        duration_hours: args.duration,
        workout_type: args.workout_type,
        fat_percentage: args.fat_percentage,
        water_intake_liters: args.water,
        workout_frequency: args.frequency,
        experience_level: args.experience,
    };

    let model = TreeModel::load(&args.model)
        .map_err(|e| format!("Failed to init model. Reason: {e}"))?;
    let predictor = Predictor::new(model);

    let result = predictor.predict(&input).map_err(|e| e.to_string())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for correction in &result.corrections {
        println!("Warning: {correction}");
    }

    println!("Estimated Calories Burned");
    println!("Raw Prediction: {:.2} kcal", result.raw_kcal);
    println!("Constrained Prediction: {:.2} kcal", result.constrained_kcal);
    println!(
        "MET: {:.2} (MET estimate: {:.2} kcal)",
        result.met, result.met_estimate_kcal
    );

    if details {
        let features = &result.features;
        let input = &features.input;

        println!();
        println!("Input Summary:");
        println!("- Age: {} years", input.age);
        println!("- Gender: {}", input.sex);
        println!("- Weight: {} kg", input.weight_kg);
        println!("- Height: {} m", input.height_m);
        println!("- Max BPM: {}", input.heart_rate.max_bpm);
        println!("- Average BPM: {}", input.heart_rate.avg_bpm);
        println!("- Resting BPM: {}", input.heart_rate.resting_bpm);
        println!("- Duration: {} hours", input.duration_hours);
        println!("- Workout Type: {}", input.workout_type);
        println!("- Fat Percentage: {}%", input.fat_percentage);
        println!("- Water Intake: {} liters", input.water_intake_liters);
        println!("- Workout Frequency: {} days/week", input.workout_frequency);
        println!("- Experience Level: {}", input.experience_level);
        println!("- Intensity: {:.3}", features.derived.intensity);
        println!("- BMI: {:.2}", features.derived.bmi);
    }

    Ok(())
}

fn maintenance(
    args: MaintenanceArgs,
    details: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = maintenance_calories(args.age, args.gender, args.weight, args.height, args.frequency);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Maintenance Calories");
    println!("Basal Metabolic Rate (BMR): {:.2} kcal/day", result.bmr_kcal_per_day);
    println!(
        "Total Daily Energy Expenditure (TDEE): {:.2} kcal/day",
        result.tdee_kcal_per_day
    );
    println!("{TDEE_NOTE}");

    if details {
        println!();
        println!("Input Summary:");
        println!("- Age: {} years", args.age);
        println!("- Gender: {}", args.gender);
        println!("- Weight: {} kg", args.weight);
        println!("- Height: {} m", args.height);
        println!("- Workout Frequency: {} days/week", args.frequency);
        println!("- BMI: {:.2}", args.weight / (args.height * args.height));
    }

    Ok(())
}

fn smoking(args: SmokingArgs, details: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cautions = smoking_cautions(args.avg_bpm, args.max_bpm, args.status);

    if json {
        let report = SmokingReport {
            status: args.status,
            assessment: SmokingAssessment::new(args.avg_bpm, args.max_bpm),
            cautions: cautions.iter().map(Caution::to_string).collect(),
        };

        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match cautions.is_empty() {
        true => println!("{NO_CAUTIONS}"),
        false => {
            println!("Health Cautions");

            for caution in &cautions {
                println!("- {caution}");
            }
        }
    }

    if details {
        let assessment = SmokingAssessment::new(args.avg_bpm, args.max_bpm);

        println!();
        println!("Input Summary:");
        println!("- Average BPM: {}", args.avg_bpm);
        println!("- Max BPM: {}", args.max_bpm);
        println!("- Smoking Status: {}", args.status);
        println!(
            "- Intensity: {:.3} (assuming resting BPM = 70)",
            assessment.intensity
        );
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        command,
        details,
        json,
        verbose,
    } = <Cli as clap::Parser>::parse();

    calorie_burnt::logging::init(verbose);

    match command {
        Command::Burn(args) => burn(args, details, json),
        Command::Maintenance(args) => maintenance(args, details, json),
        Command::Smoking(args) => smoking(args, details, json),
    }
}
