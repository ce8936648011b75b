use std::fs;
use std::path::PathBuf;

use scatter_rs::api::{EntranceMode, ScatterChart, ScatterChartConfig};
use scatter_rs::render::SvgRenderer;

const DEFAULT_DATA_PATH: &str = "tests/fixtures/data.csv";
const DEFAULT_OUTPUT_PATH: &str = "scatter.svg";

struct CliArgs {
    data_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    x_field: Option<String>,
    y_field: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = scatter_rs::telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ScatterChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterChartConfig::default(),
    }
    .with_entrance(EntranceMode::InPlace);

    let mut chart = ScatterChart::from_csv_path(SvgRenderer::default(), &args.data_path, config)
        .map_err(|err| format!("failed to load `{}`: {err}", args.data_path.display()))?;
    for name in [&args.x_field, &args.y_field].into_iter().flatten() {
        chart
            .on_label_click_name(name)
            .map_err(|err| err.to_string())?;
    }
    let settle_at = chart.now_ms() + chart.config().transition_duration_ms;
    chart.tick(settle_at).map_err(|err| err.to_string())?;
    chart.render().map_err(|err| err.to_string())?;

    let document = chart.into_renderer().into_document();
    fs::write(&args.output_path, document).map_err(|err| {
        format!(
            "failed to write `{}`: {err}",
            args.output_path.display()
        )
    })?;
    println!("done: wrote {}", args.output_path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path = PathBuf::from(DEFAULT_DATA_PATH);
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut config_path = None;
    let mut x_field = None;
    let mut y_field = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = PathBuf::from(value);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--x" => {
                x_field = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --x".to_owned())?,
                );
            }
            "--y" => {
                y_field = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --y".to_owned())?,
                );
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        data_path,
        output_path,
        config_path,
        x_field,
        y_field,
    })
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_scatter_svg -- [options]\n\nOptions:\n  --data <path>     CSV dataset (default: {DEFAULT_DATA_PATH})\n  --output <path>   SVG output path (default: {DEFAULT_OUTPUT_PATH})\n  --config <path>   ScatterChartConfig JSON\n  --x <field>       X field: poverty, age or income\n  --y <field>       Y field: healthcare, smokes or obesity\n  -h, --help        Show this message"
    )
}
