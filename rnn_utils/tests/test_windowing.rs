use pretty_assertions::assert_eq;
use rnn_utils::windowing::make_xy;
use rnn_utils::RnnUtilsError;
use rstest::rstest;

#[test]
fn test_lecture_example() {
    let data = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
    let samples = make_xy(&data, 2, 1).unwrap();

    assert_eq!(samples.y_indices.to_vec(), vec![2, 3, 4, 5]);
    assert_eq!(samples.y.to_vec(), vec![30.0, 40.0, 50.0, 60.0]);
    assert_eq!(samples.x.shape(), &[4, 2, 1]);

    let windows: Vec<Vec<f64>> = (0..samples.len())
        .map(|i| samples.window(i).unwrap().to_vec())
        .collect();
    assert_eq!(
        windows,
        vec![
            vec![10.0, 20.0],
            vec![20.0, 30.0],
            vec![30.0, 40.0],
            vec![40.0, 50.0]
        ]
    );
}

#[rstest]
#[case(10, 1, 1)]
#[case(10, 3, 1)]
#[case(10, 3, 2)]
#[case(10, 2, 3)]
#[case(11, 4, 3)]
#[case(7, 1, 6)]
#[case(5, 5, 1)]
#[case(4, 6, 2)]
fn test_target_count_and_spacing(#[case] n: usize, #[case] window: usize, #[case] step: usize) {
    let data: Vec<f64> = (0..n).map(|v| v as f64 * 1.5).collect();
    let samples = make_xy(&data, window, step).unwrap();

    let expected = if n > window {
        (n - window + step - 1) / step
    } else {
        0
    };
    assert_eq!(samples.len(), expected);
    assert_eq!(samples.y_indices.len(), expected);
    assert_eq!(samples.x_indices.nrows(), expected);
    assert_eq!(samples.x.shape()[0], expected);

    for (k, &target) in samples.y_indices.iter().enumerate() {
        assert_eq!(target, window + k * step);
    }
}

#[rstest]
#[case(2, 1)]
#[case(3, 2)]
#[case(2, 3)]
#[case(4, 4)]
fn test_windows_end_right_before_targets(#[case] window: usize, #[case] step: usize) {
    let data: Vec<f64> = (0..17).map(|v| (v * v) as f64).collect();
    let samples = make_xy(&data, window, step).unwrap();

    for i in 0..samples.len() {
        let target = samples.y_indices[i];
        let start = samples.x_indices[[i, 0]];
        assert_eq!(samples.y[i], data[target]);
        assert_eq!(
            samples.window(i).unwrap().to_vec(),
            data[start..start + window].to_vec()
        );
        assert_eq!(start + window, target);
        let indices: Vec<usize> = samples.x_indices.row(i).to_vec();
        assert_eq!(indices, (start..start + window).collect::<Vec<_>>());
    }
}

#[test]
fn test_signal_no_longer_than_window_is_empty() {
    let samples = make_xy(&[1.0, 2.0, 3.0], 3, 1).unwrap();
    assert!(samples.is_empty());
    assert!(samples.y.is_empty());
}

#[test]
fn test_invalid_arguments() {
    let data = [1.0, 2.0, 3.0];
    assert!(matches!(make_xy(&data, 0, 1), Err(RnnUtilsError::InvalidInput(_))));
    assert!(matches!(make_xy(&data, 1, 0), Err(RnnUtilsError::InvalidInput(_))));
    assert!(matches!(make_xy(&[], 2, 1), Err(RnnUtilsError::InvalidInput(_))));
}
