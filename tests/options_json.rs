use plexus_engine::{Color, EngineCore, EngineError, FrameBuffer, OptionsPatch, SimulationOptions};

#[test]
fn empty_json_means_defaults() {
    let options = match SimulationOptions::from_json("  ") {
        Ok(o) => o,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(options, SimulationOptions::default());
}

#[test]
fn camel_case_keys_are_recognized_and_unknown_keys_ignored() {
    let json = r##"{
        "particleCount": 42,
        "connectionDistance": 80,
        "backgroundColor": "#102030",
        "particleColor": "rgb(200, 100, 50)",
        "enableTrails": true,
        "gravity": {"y": 120},
        "somethingElse": [1, 2, 3]
    }"##;
    let options = match SimulationOptions::from_json(json) {
        Ok(o) => o,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(options.particle_count, 42);
    assert_eq!(options.connection_distance, 80.0);
    assert_eq!(options.background_color, Color::rgb(0x10, 0x20, 0x30));
    assert_eq!(options.particle_color, Color::rgb(200, 100, 50));
    assert!(options.enable_trails);
    assert_eq!((options.gravity.x, options.gravity.y), (0.0, 120.0));
}

#[test]
fn malformed_colors_fall_back_to_white() {
    let mut options = SimulationOptions::default();
    for bad in ["#12345", "rgb(1,2)", "rgb(300,0,0)", "hsl(0,0%,0%)", "#+12345"] {
        options.merge(&OptionsPatch {
            particle_color: Some(bad.to_string()),
            ..Default::default()
        });
        assert_eq!(options.particle_color, Color::WHITE, "{bad}");
    }
}

#[test]
fn options_serialize_back_to_camel_case() {
    let options = SimulationOptions::default();
    let value: serde_json::Value = match serde_json::from_str(&options.to_json()) {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(value["particleCount"], 100);
    assert_eq!(value["gridSize"], 100.0);
    assert_eq!(value["enableSpatialPartitioning"], true);
    assert_eq!(value["backgroundColor"], "#0a0a0a");
    assert_eq!(value["particleColor"], "#ffffff");
    assert!(value.get("particle_count").is_none());
}

#[test]
fn effective_options_round_trip_through_a_patch() {
    let mut tuned = SimulationOptions::default();
    tuned.merge(&OptionsPatch {
        particle_count: Some(250.0),
        speed: Some(1.5),
        enable_pooling: Some(false),
        ..Default::default()
    });
    let patch = match OptionsPatch::from_json(&tuned.to_json()) {
        Ok(p) => p,
        Err(e) => panic!("{e}"),
    };
    let mut copy = SimulationOptions::default();
    copy.merge(&patch);
    assert_eq!(copy, tuned);
}

#[test]
fn invalid_json_is_an_options_error() {
    let result = EngineCore::from_json(FrameBuffer::new(10, 10), "{\"particleCount\": }");
    match result {
        Err(EngineError::InvalidOptions(_)) => {}
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("bad JSON accepted"),
    }

    let wrong_type = OptionsPatch::from_json(r#"{"showConnections": "yes"}"#);
    assert!(wrong_type.is_err());
}
