//! Print crop details articles
//!
//! Run with: cargo run --bin crop_details -- Rice "Pigeon Peas"
//! With no names, lists the crops in the guide.

use clap::Parser;
use crop_guide::{generate_details_data, CropStore, DetailsGenerator};
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "crop_details", about = "Look up crops in the reference guide")]
struct Args {
    /// Crop names, matched exactly (case-sensitive)
    names: Vec<String>,

    /// Print the JSON view instead of markdown
    #[arg(long)]
    json: bool,
}

/// Write the listing or one article per name. Returns the number of unknown names.
fn run(
    store: &CropStore,
    args: &Args,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<usize> {
    if args.names.is_empty() {
        for name in store.names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(0);
    }

    let generator = DetailsGenerator::new();
    let mut missing = 0;

    for name in &args.names {
        let Some(record) = store.lookup(name) else {
            writeln!(err, "Unknown crop: {}", name)?;
            missing += 1;
            continue;
        };

        if args.json {
            let view = generate_details_data(name, record, Some(store));
            writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
        } else {
            writeln!(out, "{}\n", generator.generate(name, record, Some(store)))?;
        }
    }

    Ok(missing)
}

/// Process status: 1 when any name was unknown.
fn exit_status(missing: usize) -> u8 {
    if missing > 0 {
        1
    } else {
        0
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();
    let store = CropStore::builtin()?;

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    let missing = run(&store, &args, &mut out, &mut err)?;
    if missing > 0 {
        tracing::warn!("{} of {} crops not found", missing, args.names.len());
    }
    Ok(ExitCode::from(exit_status(missing)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(names: &[&str], json: bool) -> (usize, String, String) {
        let store = CropStore::builtin().unwrap();
        let args = Args {
            names: names.iter().map(|s| s.to_string()).collect(),
            json,
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let missing = run(&store, &args, &mut out, &mut err).unwrap();
        (
            missing,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_no_names_lists_catalog() {
        let (missing, out, err) = run_with(&[], false);
        let store = CropStore::builtin().unwrap();
        let expected: Vec<&str> = store.names().collect();

        assert_eq!(missing, 0);
        assert_eq!(out.lines().collect::<Vec<_>>(), expected);
        assert_eq!(expected.len(), 23);
        assert_eq!(expected[0], "Rice");
        assert!(err.is_empty());
        assert_eq!(exit_status(missing), 0);
    }

    #[test]
    fn test_unknown_name_reported_and_rest_printed() {
        let (missing, out, err) = run_with(&["Rice", "Kale", "Wheat"], false);

        assert_eq!(missing, 1);
        assert!(out.contains("# Rice"));
        assert!(out.contains("# Wheat"));
        assert!(!out.contains("Kale"));
        assert_eq!(err.trim(), "Unknown crop: Kale");
        assert_eq!(exit_status(missing), 1);
    }

    #[test]
    fn test_lookup_stays_case_sensitive() {
        let (missing, out, _) = run_with(&["rice"], false);
        assert_eq!(missing, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_output() {
        let (missing, out, _) = run_with(&["Onion"], true);
        assert_eq!(missing, 0);

        let view: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(view["name"], "Onion");
        assert_eq!(view["soil_water"]["water_requirement"], "350-550 mm");
    }
}
