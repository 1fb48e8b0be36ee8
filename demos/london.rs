// demos/london.rs
use chrono::Local;
use dayforecast::{ForecastConfig, ForecastError, ForecastView, Forecaster, Renderer, TextRenderer};
use std::env;

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    // Set RUST_LOG=info (or debug) to see fetch and reduction details
    env_logger::init();

    // Optional path to a TOML config file; OPENWEATHER_API_KEY is enough otherwise
    let config = match env::args().nth(1) {
        Some(path) => ForecastConfig::load(path)?,
        None => ForecastConfig::from_env()?,
    };

    let renderer = TextRenderer::new(config.place_name.clone());
    println!("{}", renderer.render(&ForecastView::Loading));

    let forecaster = Forecaster::from_config(&config, Local)?;
    let view = forecaster.view().await;
    println!("{}", renderer.render(&view));

    Ok(())
}
