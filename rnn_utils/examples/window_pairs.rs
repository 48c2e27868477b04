use rnn_utils::scaling::make_train_test;
use rnn_utils::windowing::make_xy;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A short monthly series with a trend and a yearly bump
    let data: Vec<f64> = (0..36)
        .map(|m| {
            let season = (m % 12) as f64 / 12.0 * std::f64::consts::PI;
            100.0 + 2.0 * m as f64 + 15.0 * season.sin()
        })
        .collect();

    let split = make_train_test(&data, 0.67, true)?;
    println!(
        "Train: {} values, test: {} values (scaled from [{:.1}, {:.1}])",
        split.train.len(),
        split.test.len(),
        split.scaler.data_min(),
        split.scaler.data_max()
    );

    let samples = make_xy(&split.train, 3, 2)?;
    println!("Window shape: {:?}", samples.x.shape());
    for i in 0..samples.len() {
        println!(
            "  x indices {:?} -> y index {}",
            samples.x_indices.row(i).to_vec(),
            samples.y_indices[i]
        );
    }

    Ok(())
}
