use clap::{Parser, Subcommand};
use milan_base::{BirthDetails, Kundali, kundali_from_birth};
use milan_kuta::{DrawPolicy, GunMilanScore, ScoreBand, gun_milan};

#[derive(Parser)]
#[command(name = "milan", about = "Gun Milan matchmaking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the kundali attribute set for a birth date and time
    Kundali {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (HH:MM, 24-hour)
        time: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Score two kundalis with the 36-point Gun Milan system
    Score {
        /// First birth date (YYYY-MM-DD)
        date_a: String,
        /// First birth time (HH:MM)
        time_a: String,
        /// Second birth date (YYYY-MM-DD)
        date_b: String,
        /// Second birth time (HH:MM)
        time_b: String,
        /// Draw the placeholder kutas from fresh entropy instead of the
        /// pair-seeded generator
        #[arg(long)]
        entropy: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_birth(date: &str, time: &str) -> BirthDetails {
    BirthDetails::parse(date, time).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize: {e}");
        std::process::exit(1);
    })
}

fn print_kundali(k: &Kundali) {
    println!(
        "Moon sign: {} ({})",
        k.moon_sign.name(),
        k.moon_sign.western_name()
    );
    println!("Nakshatra: {} (index {})", k.nakshatra.name(), k.nakshatra.index());
    println!(
        "Gana: {} - Nadi: {} - Varna: {}",
        k.gana.name(),
        k.nadi.name(),
        k.varna.name()
    );
    println!("Yoni: {} ({})", k.yoni.name(), k.yoni.sanskrit_name());
    println!("Tara: {}", k.tara);
}

fn print_score(s: &GunMilanScore) {
    println!("Varna       : {}/1", s.varna);
    println!("Vashya      : {}/2", s.vashya);
    println!("Tara        : {}/3", s.tara);
    println!("Yoni        : {}/4", s.yoni);
    println!("Graha Maitri: {}/5", s.graha_maitri);
    println!("Gana        : {}/6", s.gana);
    println!("Bhakoot     : {}/7", s.bhakoot);
    println!("Nadi        : {}/8", s.nadi);
    println!(
        "Total: {}/{} - {} ({})",
        s.total,
        s.max_points,
        s.recommendation.name(),
        ScoreBand::from_total(s.total).name()
    );
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Kundali { date, time, json } => {
            let kundali = kundali_from_birth(&parse_birth(&date, &time));
            if json {
                println!("{}", to_json(&kundali));
            } else {
                print_kundali(&kundali);
            }
        }

        Commands::Score {
            date_a,
            time_a,
            date_b,
            time_b,
            entropy,
            json,
        } => {
            let a = kundali_from_birth(&parse_birth(&date_a, &time_a));
            let b = kundali_from_birth(&parse_birth(&date_b, &time_b));
            let policy = if entropy {
                DrawPolicy::Entropy
            } else {
                DrawPolicy::Seeded
            };
            let score = gun_milan(&a, &b, policy);
            if json {
                println!("{}", to_json(&score));
            } else {
                print_score(&score);
            }
        }
    }
}
