use pretty_assertions::assert_eq;
use rnn_utils::history::History;
use rnn_utils::plot::{
    plot_history, plot_loss_acc, plot_pred, Color, HistoryPlotOptions, LineKind, Marker,
    PredictionPlotOptions, PredictionSeries, RecordingSurface, SvgSurface,
};
use rnn_utils::scaling::make_train_test;
use rnn_utils::windowing::make_xy;
use rnn_utils::RnnUtilsError;

fn perfect(actual: &[f64], indices: Vec<usize>) -> PredictionSeries {
    let predicted = indices.iter().map(|&i| actual[i]).collect();
    PredictionSeries::new(predicted, actual.to_vec(), indices)
}

#[test]
fn test_history_legend_and_epochs() {
    let history =
        History::from_pairs(vec![("loss", vec![0.5, 0.3]), ("val_loss", vec![0.6, 0.4])]).unwrap();
    let mut surface = RecordingSurface::new();

    let figure = plot_history(&history, &HistoryPlotOptions::default(), &mut surface).unwrap();

    assert_eq!(figure.legend(), vec!["Training loss", "Validation loss"]);
    assert_eq!(figure.title(), "Model metrics");
    assert_eq!(figure.x_label(), Some("Epoch"));
    assert_eq!(figure.y_label(), Some("Metric"));
    for line in figure.lines() {
        let xs: Vec<f64> = line.points.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0.0, 1.0]);
    }
    assert_eq!(surface.figures().len(), 1);
}

#[test]
fn test_history_show_can_be_suppressed() {
    let history = History::from_pairs(vec![("acc", vec![0.5, 0.7, 0.9])]).unwrap();
    let mut surface = RecordingSurface::new();

    let mut figure = plot_history(
        &history,
        &HistoryPlotOptions::default().with_show(false),
        &mut surface,
    )
    .unwrap();
    assert!(surface.figures().is_empty());

    figure.set_title("Annotated");
    assert_eq!(figure.legend(), vec!["Training accuracy"]);
}

#[test]
fn test_history_unknown_metric() {
    let history = History::from_pairs(vec![("loss", vec![0.5]), ("f1", vec![0.2])]).unwrap();
    let mut surface = RecordingSurface::new();

    let result = plot_history(&history, &HistoryPlotOptions::default(), &mut surface);
    assert!(matches!(result, Err(RnnUtilsError::KeyNotFound(_))));
    assert!(surface.figures().is_empty());
}

#[test]
fn test_loss_acc_falls_back_to_acc() {
    let history = History::from_pairs(vec![
        ("loss", vec![0.9, 0.5]),
        ("acc", vec![0.4, 0.8]),
        ("val_loss", vec![1.0, 0.7]),
        ("val_acc", vec![0.3, 0.6]),
    ])
    .unwrap();
    let mut surface = RecordingSurface::new();

    let figure = plot_loss_acc(&history, &mut surface).unwrap();

    assert_eq!(
        figure.legend(),
        vec!["train acc", "val acc", "train loss", "val loss"]
    );
    let first: Vec<f64> = figure.lines()[0].points.iter().map(|p| p.1).collect();
    assert_eq!(first, vec![0.4, 0.8]);
    assert_eq!(figure.title(), "model accuracy");
}

#[test]
fn test_loss_acc_resolves_each_phase_alias() {
    let history = History::from_pairs(vec![
        ("loss", vec![0.9, 0.5]),
        ("accuracy", vec![0.4, 0.8]),
        ("val_loss", vec![1.0, 0.7]),
        ("val_acc", vec![0.3, 0.6]),
    ])
    .unwrap();
    let mut surface = RecordingSurface::new();

    let figure = plot_loss_acc(&history, &mut surface).unwrap();

    let val_acc: Vec<f64> = figure.lines()[1].points.iter().map(|p| p.1).collect();
    assert_eq!(val_acc, vec![0.3, 0.6]);
    let train_acc: Vec<f64> = figure.lines()[0].points.iter().map(|p| p.1).collect();
    assert_eq!(train_acc, vec![0.4, 0.8]);
}

#[test]
fn test_loss_acc_requires_both_metrics() {
    let history = History::from_pairs(vec![("loss", vec![0.9]), ("val_loss", vec![1.0])]).unwrap();
    let mut surface = RecordingSurface::new();
    assert!(matches!(
        plot_loss_acc(&history, &mut surface),
        Err(RnnUtilsError::KeyNotFound(_))
    ));
}

#[test]
fn test_prediction_skips_missing_series() {
    let actual = [1.0, 2.0, 3.0, 4.0];
    let mut surface = RecordingSurface::new();

    let figure = plot_pred(
        &[
            ("Train", None),
            ("Test", Some(perfect(&actual, vec![2, 3]))),
        ],
        None,
        &PredictionPlotOptions::default(),
        &mut surface,
    )
    .unwrap();

    assert_eq!(figure.legend(), vec!["Test (RMSE: 0.0000)", "Data"]);
    assert_eq!(figure.title(), "Model prediction");
    // skipped series take no room on the x axis
    assert_eq!(figure.lines()[0].points[0].0, 2.0);
}

#[test]
fn test_prediction_rmse_in_original_units() {
    let split = make_train_test(&[100.0, 200.0, 300.0, 400.0, 500.0], 1.0, true).unwrap();
    let samples = make_xy(&split.train, 2, 1).unwrap();
    let predicted: Vec<f64> = samples.y.iter().map(|v| v + 0.1).collect();
    let mut surface = RecordingSurface::new();

    let figure = plot_pred(
        &[(
            "Train",
            Some(PredictionSeries::from_samples(predicted, &split.train, &samples)),
        )],
        Some(&split.scaler),
        &PredictionPlotOptions::default(),
        &mut surface,
    )
    .unwrap();

    // 0.1 in scaled units is 40 passengers over a range of 400
    assert_eq!(figure.legend()[0], "Train (RMSE: 40.0000)");
    let data_ys: Vec<f64> = figure.lines()[1].points.iter().map(|p| p.1.round()).collect();
    assert_eq!(data_ys, vec![100.0, 200.0, 300.0, 400.0, 500.0]);
}

#[test]
fn test_prediction_without_rmse_label() {
    let actual = [1.0, 2.0, 3.0];
    let mut surface = RecordingSurface::new();
    let figure = plot_pred(
        &[("Train", Some(perfect(&actual, vec![1, 2])))],
        None,
        &PredictionPlotOptions::default().with_rmse(false),
        &mut surface,
    )
    .unwrap();
    assert_eq!(figure.legend(), vec!["Train", "Data"]);
}

#[test]
fn test_prediction_markers() {
    let actual = [1.0, 2.0, 3.0];
    let mut surface = RecordingSurface::new();
    let figure = plot_pred(
        &[
            ("A", Some(perfect(&actual, vec![1, 2]))),
            ("B", Some(perfect(&actual, vec![2]))),
        ],
        None,
        &PredictionPlotOptions::default().with_markers(true),
        &mut surface,
    )
    .unwrap();

    let kinds: Vec<LineKind> = figure.lines().iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Solid,
            LineKind::Markers(Marker::Circle),
            LineKind::Solid,
            LineKind::Markers(Marker::Cross),
            LineKind::Solid,
        ]
    );
    assert_eq!(figure.lines()[1].color, Color::Green.rgb());
    assert_eq!(figure.lines()[4].color, Color::SteelBlue.rgb());
    assert_eq!(figure.legend(), vec!["A (RMSE: 0.0000)", "B (RMSE: 0.0000)", "Data"]);
}

#[test]
fn test_prediction_palette_exhausted() {
    let actual = [1.0, 2.0, 3.0];
    let series: Vec<(String, Option<PredictionSeries>)> = (0..4)
        .map(|i| (format!("S{}", i), Some(perfect(&actual, vec![1, 2]))))
        .collect();
    let mut surface = RecordingSurface::new();

    let result = plot_pred(&series, None, &PredictionPlotOptions::default(), &mut surface);
    assert!(matches!(result, Err(RnnUtilsError::ResourceExhausted(_))));
    assert!(surface.figures().is_empty());

    // three series fit, one color is left for the data line
    let result = plot_pred(&series[..3], None, &PredictionPlotOptions::default(), &mut surface);
    assert!(result.is_ok());
}

#[test]
fn test_svg_surface_writes_document() {
    let history = History::from_pairs(vec![("loss", vec![0.5, 0.3])]).unwrap();
    let mut surface = SvgSurface::new(Vec::new());

    plot_history(&history, &HistoryPlotOptions::default(), &mut surface).unwrap();

    let output = String::from_utf8(surface.into_inner()).unwrap();
    assert!(output.contains("<svg"));
    assert!(output.contains("Model metrics"));
    assert!(output.contains("Training loss"));
}
