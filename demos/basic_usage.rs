//! Basic Usage Example for the AQI engine
//!
//! Walks through a dashboard refresh: decode a provider payload, compute the
//! index, keep a short history, forecast the next value and raise an alert.
//!
//! Run with: RUST_LOG=debug cargo run --example basic_usage

use aqi_forecast::{
    AlertNotice, AqiError, EngineConfig, IndexHistory, assess, assess_payload, latest_sample,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🌫  AQI Engine - Basic Usage Example\n");

    let config = EngineConfig::default();
    let mut history = IndexHistory::with_config(&config)?;

    // Example 1: Single provider payload
    println!("📡 Example 1: Provider Payload");
    println!("==============================");

    let payload = r#"{
        "coord": { "lon": 24.94, "lat": 60.17 },
        "list": [{
            "dt": 1700000000,
            "main": { "aqi": 2 },
            "components": { "co": 230.3, "no2": 15.2, "o3": 68.0, "so2": 3.1,
                            "pm2_5": 12.0, "pm10": 55.0 }
        }]
    }"#;
    let (sample, report) = assess_payload(payload)?;
    println!("Timestamp: {}", sample.timestamp);
    println!("AQI: {} ({}, {})", report.index, report.category, report.color);
    println!("{}", report.advisory);
    for measure in report.measures {
        println!("  {measure}");
    }
    history.push(report.index);

    println!();

    // Example 2: Building a history and forecasting
    println!("📈 Example 2: Trend Forecast");
    println!("============================");

    for pm2_5 in [18.0, 27.0, 38.0, 52.0] {
        let payload = format!(
            r#"{{"list": [{{"dt": 0, "main": {{"aqi": 3}}, "components": {{"pm2_5": {pm2_5}, "pm10": 30.0}}}}]}}"#
        );
        let reading = latest_sample(&payload)?.reading;
        let index = assess(&reading).index;
        history.push(index);

        if let Some(notice) = AlertNotice::with_config(index, &config) {
            println!("🔔 {}", notice.title);
            println!("   {}", notice.body);
        }
    }

    println!("History: {:?}", history.snapshot());
    let forecast = history.forecast();
    match forecast.rounded() {
        Some(predicted) => println!(
            "Predicted next AQI: {predicted} {} {} (slope {:.2})",
            forecast.trend.symbol(),
            forecast.trend,
            forecast.slope
        ),
        None => println!("Predicted next AQI: -- (need more data points)"),
    }

    println!();

    // Example 3: Error handling
    println!("⚠️  Example 3: Missing Data");
    println!("==========================");

    match assess_payload(r#"{"list": []}"#) {
        Err(AqiError::NoData) => println!("No data available"),
        Err(e) => println!("❌ {e}"),
        Ok((_, report)) => println!("Unexpected report: {report:?}"),
    }

    Ok(())
}
