use clap::Parser;
use smith_chart::{plan, ChartConfig, SmithChart};
use smith_svg::error::SvgError;
use smith_svg::SvgSurface;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smith-svg", about = "Render a Smith chart to SVG")]
struct Cli {
    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chart margin as a fraction of the unit box
    #[arg(long)]
    margin: Option<f64>,

    /// Comma-separated constant-resistance values
    #[arg(long)]
    real: Option<String>,

    /// Comma-separated constant-reactance values
    #[arg(long)]
    imag: Option<String>,

    /// Stroke color for resistance circles
    #[arg(long)]
    real_color: Option<String>,

    /// Stroke color for reactance arcs
    #[arg(long)]
    imag_color: Option<String>,

    /// Print computed arc geometry as JSON instead of SVG
    #[arg(long)]
    dump_arcs: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn parse_values(list: &str) -> Result<Vec<f64>, SvgError> {
    list.split(',')
        .map(|v| {
            let v = v.trim();
            v.parse::<f64>()
                .map_err(|_| SvgError::InvalidValues(v.to_string()))
        })
        .collect()
}

fn build_config(cli: &Cli) -> Result<ChartConfig, SvgError> {
    let mut config = ChartConfig::default();
    if let Some(margin) = cli.margin {
        config.margin = margin;
    }
    if let Some(ref list) = cli.real {
        config.real_values = parse_values(list)?;
    }
    if let Some(ref list) = cli.imag {
        config.imag_values = parse_values(list)?;
    }
    if let Some(ref color) = cli.real_color {
        config.real_color = color.clone();
    }
    if let Some(ref color) = cli.imag_color {
        config.imag_color = color.clone();
    }
    Ok(config)
}

fn emit(output: &Option<PathBuf>, text: &str) -> Result<(), SvgError> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("Written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), SvgError> {
    let config = build_config(cli)?;

    if cli.dump_arcs {
        let chart_plan = plan(&config);
        let json = if cli.pretty {
            serde_json::to_string_pretty(&chart_plan)?
        } else {
            serde_json::to_string(&chart_plan)?
        };
        return emit(&cli.output, &format!("{json}\n"));
    }

    let mut chart = SmithChart::new(SvgSurface::new(), config);
    chart.update();
    emit(&cli.output, &chart.surface().render())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        let values = parse_values("0.2, 0.5,1,10").unwrap();
        assert_eq!(values, vec![0.2, 0.5, 1.0, 10.0]);
    }

    #[test]
    fn test_parse_values_rejects_garbage() {
        assert!(parse_values("0.2,abc").is_err());
    }

    #[test]
    fn test_config_overrides() {
        let cli = Cli::parse_from([
            "smith-svg",
            "--margin",
            "0.25",
            "--real",
            "1",
            "--imag-color",
            "purple",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.margin, 0.25);
        assert_eq!(config.real_values, vec![1.0]);
        assert_eq!(config.imag_values, ChartConfig::default().imag_values);
        assert_eq!(config.imag_color, "purple");
        assert_eq!(config.real_color, "#0f0f0f");
    }
}
