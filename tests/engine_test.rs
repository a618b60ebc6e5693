//! Pipeline integration tests: preprocess -> indicators -> signals ->
//! aggregate, across horizons.

use augur::engine::{analyze, prepare, score_symbol, HorizonProfile};
use augur::error::EngineError;
use augur::types::{Bar, Horizon, Recommendation, SignalDirection};

fn bar(i: usize, close: f64, volume: f64) -> Bar {
    Bar {
        time: 1_700_000_000_000 + i as i64 * 86_400_000,
        open: close - 0.5,
        high: close + 2.0,
        low: close - 2.0,
        close,
        volume,
    }
}

fn uptrend_bars(count: usize) -> Vec<Bar> {
    (0..count).map(|i| bar(i, 100.0 + i as f64 * 1.5, 1000.0)).collect()
}

fn downtrend_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| bar(i, 400.0 - i as f64 * 1.5, 1000.0))
        .collect()
}

fn choppy_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let wobble = if i % 2 == 0 { 3.0 } else { -3.0 };
            bar(i, 150.0 + wobble, 800.0 + (i % 5) as f64 * 100.0)
        })
        .collect()
}

#[test]
fn test_score_and_confidence_bounds() {
    let shapes = [uptrend_bars(260), downtrend_bars(260), choppy_bars(260)];
    for horizon in [Horizon::Short, Horizon::Medium, Horizon::Long] {
        for raw in &shapes {
            let result = score_symbol("TEST", raw.clone(), horizon).unwrap();
            assert!(
                (0.0..=100.0).contains(&result.score),
                "score {} out of range for {:?}",
                result.score,
                horizon
            );
            assert!(
                (0.0..=100.0).contains(&result.confidence),
                "confidence {} out of range for {:?}",
                result.confidence,
                horizon
            );
        }
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let raw = choppy_bars(120);
    for horizon in [Horizon::Short, Horizon::Medium, Horizon::Long] {
        let a = score_symbol("TEST", raw.clone(), horizon).unwrap();
        let b = score_symbol("TEST", raw.clone(), horizon).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.recommendation, b.recommendation);
        assert_eq!(a.expected_variation, b.expected_variation);
        assert_eq!(a.signals.len(), b.signals.len());
        for (x, y) in a.signals.iter().zip(b.signals.iter()) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.direction, y.direction);
            assert_eq!(x.weight, y.weight);
            assert_eq!(x.reason, y.reason);
        }
    }
}

#[test]
fn test_overbought_uptrend_fires_rsi_sell() {
    // 60 steadily rising daily bars: RSI pinned above 70, so the short
    // horizon must carry an overbought sell signal citing RSI even though
    // MACD and momentum lean the other way.
    let result = score_symbol("UP", uptrend_bars(60), Horizon::Short).unwrap();
    let rsi = result
        .signals
        .iter()
        .find(|s| s.name.starts_with("RSI"))
        .expect("RSI signal missing");
    assert_eq!(rsi.direction, SignalDirection::Sell);
    assert!(rsi.reason.contains("overbought"), "reason: {}", rsi.reason);

    let macd = result
        .signals
        .iter()
        .find(|s| s.name == "MACD")
        .expect("MACD signal missing");
    assert_eq!(macd.direction, SignalDirection::Buy);
}

#[test]
fn test_signal_order_is_profile_priority() {
    let result = score_symbol("UP", uptrend_bars(60), Horizon::Short).unwrap();
    let names: Vec<&str> = result.signals.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["RSI (14)", "MACD", "Momentum (10)"]);
}

#[test]
fn test_short_series_fails_medium_horizon() {
    let err = score_symbol("TINY", uptrend_bars(19), Horizon::Medium).unwrap_err();
    match err {
        EngineError::InsufficientHistory { available, .. } => assert_eq!(available, 19),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_recommendation_matches_score_band() {
    let shapes = [uptrend_bars(260), downtrend_bars(260), choppy_bars(260)];
    for horizon in [Horizon::Short, Horizon::Medium, Horizon::Long] {
        for raw in &shapes {
            let result = score_symbol("TEST", raw.clone(), horizon).unwrap();
            assert_eq!(result.recommendation, Recommendation::from_score(result.score));
        }
    }
}

#[test]
fn test_expected_variation_within_band() {
    for horizon in [Horizon::Short, Horizon::Medium, Horizon::Long] {
        let profile = HorizonProfile::for_horizon(horizon);
        let (band_min, band_max) = profile.variation_band;
        let result = score_symbol("TEST", choppy_bars(260), horizon).unwrap();
        let magnitude = result
            .expected_variation
            .high_pct
            .abs()
            .max(result.expected_variation.low_pct.abs());
        assert!(magnitude >= band_min && magnitude <= band_max);
        assert!(result.expected_variation.low_pct < result.expected_variation.high_pct);
    }
}

#[test]
fn test_analyze_reuses_prepared_series() {
    let profile = HorizonProfile::for_horizon(Horizon::Short);
    let series = prepare(uptrend_bars(60), profile.min_bars).unwrap();
    let direct = analyze("UP", &series, Horizon::Short);
    let through = score_symbol("UP", uptrend_bars(60), Horizon::Short).unwrap();
    assert_eq!(direct.score, through.score);
    assert_eq!(direct.confidence, through.confidence);
}

#[test]
fn test_dropped_bars_still_score() {
    let mut raw = uptrend_bars(60);
    raw[10].high = raw[10].low - 1.0; // corrupt one bar
    let result = score_symbol("UP", raw, Horizon::Short).unwrap();
    assert!((0.0..=100.0).contains(&result.score));
}
