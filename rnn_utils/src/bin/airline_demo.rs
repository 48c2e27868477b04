//! Walk through the lecture pipeline on the airline passenger data.
//!
//! A persistence forecast (each window's last value, plus optional noise)
//! stands in for a trained network. Charts are written to stdout as SVG;
//! logs go to stderr.

use clap::Parser;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rnn_utils::dataset::{load_or_exit, DatasetSource};
use rnn_utils::history::History;
use rnn_utils::plot::{
    plot_history, plot_pred, HistoryPlotOptions, PredictionPlotOptions, PredictionSeries, Surface,
    SvgSurface,
};
use rnn_utils::scaling::{make_train_test, DEFAULT_TRAIN_FRACTION};
use rnn_utils::windowing::{make_xy, WindowSampleSet};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "airline_demo", about = "Window, scale and plot the airline passenger series")]
struct Args {
    /// Directory containing airline-passengers.csv
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Number of past months in each lookback window
    #[arg(long, default_value_t = 12)]
    window_size: usize,

    /// Distance between consecutive targets
    #[arg(long, default_value_t = 1)]
    step_size: usize,

    /// Fraction of the series used for training
    #[arg(long, default_value_t = DEFAULT_TRAIN_FRACTION)]
    train_fraction: f64,

    /// Keep values in original units instead of scaling to [0, 1]
    #[arg(long)]
    no_rescale: bool,

    /// Overlay point markers on predictions
    #[arg(long)]
    markers: bool,

    /// Standard deviation of noise added to the persistence forecast, in scaled units
    #[arg(long, default_value_t = 0.02)]
    noise: f64,

    /// Number of epochs in the synthetic training history
    #[arg(long, default_value_t = 20)]
    epochs: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn persistence_forecast(
    samples: &WindowSampleSet,
    noise: &Normal<f64>,
    rng: &mut rand::rngs::StdRng,
) -> Vec<f64> {
    (0..samples.len())
        .filter_map(|i| samples.window(i))
        .map(|window| window[window.len() - 1] + noise.sample(&mut *rng))
        .collect()
}

fn synthetic_history(
    epochs: usize,
    rng: &mut rand::rngs::StdRng,
) -> Result<History, Box<dyn std::error::Error>> {
    let jitter = Normal::new(0.0, 0.005)?;
    let mut loss = Vec::with_capacity(epochs);
    let mut val_loss = Vec::with_capacity(epochs);
    for epoch in 0..epochs {
        let base = 0.1 * (-(epoch as f64) / 5.0).exp() + 0.01;
        loss.push(base + jitter.sample(&mut *rng));
        val_loss.push(base * 1.2 + jitter.sample(&mut *rng));
    }
    Ok(History::from_pairs(vec![("loss", loss), ("val_loss", val_loss)])?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dataset = load_or_exit(&DatasetSource::airline_passengers(), &args.data_dir);
    let signal = dataset.values()?;
    info!(months = signal.len(), "loaded passenger series");

    let split = make_train_test(&signal, args.train_fraction, !args.no_rescale)?;
    let windows = |segment: &[f64]| -> rnn_utils::Result<Option<WindowSampleSet>> {
        if segment.is_empty() {
            return Ok(None);
        }
        let samples = make_xy(segment, args.window_size, args.step_size)?;
        Ok(Some(samples).filter(|s| !s.is_empty()))
    };
    let train = windows(&split.train)?;
    let test = windows(&split.test)?;
    info!(
        train_samples = train.as_ref().map_or(0, |s| s.len()),
        test_samples = test.as_ref().map_or(0, |s| s.len()),
        "built lookback windows"
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let noise = Normal::new(0.0, args.noise)?;

    let mut to_series = |actual: &[f64], samples: Option<WindowSampleSet>| {
        samples.map(|samples| {
            let predicted = persistence_forecast(&samples, &noise, &mut rng);
            PredictionSeries::from_samples(predicted, actual, &samples)
        })
    };
    let series = [
        ("Train", to_series(&split.train, train)),
        ("Test", to_series(&split.test, test)),
    ];

    let ticks = dataset
        .dates()?
        .iter()
        .enumerate()
        .filter(|(_, date)| date.format("%m").to_string() == "01")
        .step_by(2)
        .map(|(i, date)| (i as f64, date.format("%Y").to_string()))
        .collect();

    let mut surface = SvgSurface::stdout();
    let options = PredictionPlotOptions::default()
        .with_markers(args.markers)
        .with_ticks(ticks);
    let figure = plot_pred(&series, Some(&split.scaler), &options, &mut surface)?;
    info!(legend = ?figure.legend(), "prediction chart presented");

    let history = synthetic_history(args.epochs, &mut rng)?;
    let mut figure = plot_history(
        &history,
        &HistoryPlotOptions::default().with_show(false),
        &mut surface,
    )?;
    figure.set_title(format!("Model metrics ({} epochs)", history.epochs()));
    surface.show(&figure)?;

    Ok(())
}
