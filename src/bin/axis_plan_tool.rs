use line_chart_rs::api::{DrawOptions, LineChart, LineChartConfig};
use line_chart_rs::core::{AxisPlan, DataPoint, SeriesKey};
use line_chart_rs::telemetry::init_default_tracing;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Plan,
    Frame,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: Option<PathBuf>,
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
struct SeriesSummary {
    key: SeriesKey,
    points: Vec<DataPoint>,
}

#[derive(Debug, Serialize)]
struct PlanReport {
    series: Vec<SeriesSummary>,
    dropped_points: usize,
    plan: AxisPlan,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let config = LineChartConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?;
    let chart = LineChart::new(config).map_err(|err| err.to_string())?;

    match args.command {
        CommandKind::Plan => {
            let data = chart.data_by_series();
            let report = PlanReport {
                dropped_points: data.dropped(),
                series: data
                    .into_inner()
                    .into_iter()
                    .map(|(key, points)| SeriesSummary { key, points })
                    .collect(),
                plan: chart.axis_plan().map_err(|err| err.to_string())?,
            };
            write_json(args.output.as_ref(), &report)
        }
        CommandKind::Frame => {
            let options = DrawOptions::new(args.width, args.height);
            let (frame, _) = chart.build_frame(options).map_err(|err| err.to_string())?;
            write_json(args.output.as_ref(), &frame)
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("plan") => CommandKind::Plan,
        Some("frame") => CommandKind::Frame,
        _ => {
            return Err(
                "usage: axis_plan_tool <plan|frame> --input <path> [--output <path>] [--width <px>] [--height <px>]"
                    .to_owned(),
            );
        }
    };

    let defaults = DrawOptions::default();
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut width = defaults.base_width;
    let mut height = defaults.base_height;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value()?)),
            "--output" => output = Some(PathBuf::from(value()?)),
            "--width" => width = parse_px(&value()?)?,
            "--height" => height = parse_px(&value()?)?,
            other => return Err(format!("unknown flag `{other}`")),
        }
    }

    Ok(CliArgs {
        command,
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output,
        width,
        height,
    })
}

fn parse_px(raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|err| format!("invalid pixel size `{raw}`: {err}"))
}

fn write_json<T: Serialize>(output: Option<&PathBuf>, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {err}"))?;
    match output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
