use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sizhu::{BurdenProfile, Chart, DateTime, input};

#[derive(Parser)]
#[command(name = "sizhu")]
#[command(about = "Four-pillar charts and elemental burden profiles.")]
struct CommandLine {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the four pillars of a date of birth
    #[command(alias = "c")]
    Chart(Birth),
    /// Resolve the chart and score its elemental burden
    #[command(alias = "b")]
    Burden(Birth),
}

#[derive(Args)]
struct Birth {
    /// Date of birth, dd/mm/yyyy or yyyy-mm-dd
    date: String,
    /// Time of birth, HH:MM (24-hour); midnight when omitted
    #[arg(short, long)]
    time: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Birth {
    fn resolve(&self) -> anyhow::Result<DateTime> {
        Ok(input::parse_datetime(&self.date, self.time.as_deref())?)
    }

    fn input_json(&self) -> serde_json::Value {
        json!({
            "date_of_birth": self.date,
            "time_of_birth": self.time,
        })
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "sizhu=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// JSON response: the input as given, the chart, and the profile if scored.
fn envelope(birth: &Birth, chart: &Chart, profile: Option<&BurdenProfile>) -> serde_json::Value {
    let mut out = json!({
        "input": birth.input_json(),
        "bazi_chart": chart,
    });
    if let Some(profile) = profile {
        out["yin_burden"] = json!(profile);
    }
    out
}

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();
    init_logging();

    match &commands.command {
        Commands::Chart(birth) => {
            let chart = Chart::new(birth.resolve()?);
            match commands.format {
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&envelope(birth, &chart, None))?
                ),
                Format::Text => print_chart(&chart),
            }
        }
        Commands::Burden(birth) => {
            let chart = Chart::new(birth.resolve()?);
            let profile = BurdenProfile::from_chart(&chart);
            match commands.format {
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&envelope(birth, &chart, Some(&profile)))?
                ),
                Format::Text => {
                    print_chart(&chart);
                    println!();
                    print_profile(&profile);
                }
            }
        }
    }
    Ok(())
}

fn print_chart(chart: &Chart) {
    let [year, month, day, hour] = chart.codes();
    println!("year   {year}");
    println!("month  {month}");
    println!("day    {day}");
    println!("hour   {hour}");
    println!("day master  {}", chart.day_master());
    if chart.year_boundary.is_approximate() {
        println!("(year {} is outside the Li Chun table; year boundary not adjusted)", chart.resolved_year);
    }
}

fn print_profile(profile: &BurdenProfile) {
    println!("{} (score {}, level {})", profile.label, profile.score, profile.level);
    let counts: Vec<_> = profile
        .elements
        .iter()
        .map(|(element, n)| format!("{} {n}", element.name()))
        .collect();
    println!("{}", counts.join(", "));
    for paragraph in &profile.narrative {
        println!();
        println!("{paragraph}");
    }
    if !profile.actions.is_empty() {
        println!();
        for action in &profile.actions {
            println!("- {action}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth(date: &str, time: Option<&str>) -> Birth {
        Birth {
            date: date.to_owned(),
            time: time.map(str::to_owned),
        }
    }

    #[test]
    fn burden_envelope() {
        let birth = birth("02/02/1984", Some("00:00"));
        let chart = Chart::new(birth.resolve().unwrap());
        let profile = BurdenProfile::from_chart(&chart);
        let json = envelope(&birth, &chart, Some(&profile));

        let object = json.as_object().unwrap();
        assert_eq!(3, object.len());
        for key in ["input", "bazi_chart", "yin_burden"] {
            assert!(object.contains_key(key), "{key}");
        }
        assert_eq!("02/02/1984", json["input"]["date_of_birth"]);
        assert_eq!("00:00", json["input"]["time_of_birth"]);
        assert_eq!("癸亥", json["bazi_chart"]["year"]);
        assert_eq!("甲", json["bazi_chart"]["day_master"]);
        assert_eq!(profile.score, json["yin_burden"]["score"]);
    }

    #[test]
    fn chart_envelope_has_no_profile() {
        let birth = birth("1984-02-02", None);
        let chart = Chart::new(birth.resolve().unwrap());
        let json = envelope(&birth, &chart, None);

        assert!(json.get("yin_burden").is_none());
        assert!(json["input"]["time_of_birth"].is_null());
        assert_eq!("甲子", json["bazi_chart"]["day"]);
    }
}
