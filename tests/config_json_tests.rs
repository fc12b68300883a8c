use sparkline_rs::api::{
    BarOptions, DRAW_PLAN_JSON_SCHEMA_V1, DrawPlan, Sparkline, SparklineConfig, SparklineVariant,
};
use sparkline_rs::core::{Padding, ScalePolicy, Viewport};
use sparkline_rs::render::Color;
use sparkline_rs::SparklineError;

#[test]
fn empty_document_yields_default_line_config() {
    let config = SparklineConfig::from_json_str("{}").expect("config");
    assert_eq!(config, SparklineConfig::line());
    assert_eq!(config.padding, Padding::uniform(10.0));
    assert_eq!(config.scale_policy, ScalePolicy::FromZero);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SparklineConfig::from_json_str(r##"{"colour": "#FFFFFF"}"##).expect_err("unknown");
    assert!(matches!(err, SparklineError::InvalidConfig(_)));

    let err = SparklineConfig::from_json_str(r#"{"padding": {"top": 1.0, "inner": 2.0}}"#)
        .expect_err("unknown nested");
    assert!(matches!(err, SparklineError::InvalidConfig(_)));
}

#[test]
fn bar_config_fills_missing_options_with_defaults() {
    let input = r##"{
        "variant": {"bar": {"bar_gap": 2.0}},
        "scale_policy": {"kind": "explicit_range", "lo": 0.0, "hi": 10.0},
        "percentile_lines": [0.5],
        "fill_between_percentile_lines": true,
        "style": {"stroke": "#FF0000"}
    }"##;
    let config = SparklineConfig::from_json_str(input).expect("config");

    assert_eq!(
        config.variant,
        SparklineVariant::Bar(BarOptions {
            bar_gap: 2.0,
            ..BarOptions::default()
        })
    );
    assert_eq!(
        config.scale_policy,
        ScalePolicy::ExplicitRange { lo: 0.0, hi: 10.0 }
    );
    assert_eq!(config.percentile_lines, vec![0.5]);
    assert!(config.fill_between_percentile_lines);
    assert_eq!(config.style.stroke, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(config.padding, Padding::default());
}

#[test]
fn line_variant_is_a_plain_string() {
    let config = SparklineConfig::from_json_str(r#"{"variant": "line"}"#).expect("config");
    assert_eq!(config.variant, SparklineVariant::Line);
}

#[test]
fn invalid_values_fail_validation_after_parsing() {
    for input in [
        r#"{"percentile_lines": [1.5]}"#,
        r#"{"scale_policy": {"kind": "explicit_range", "lo": 3.0, "hi": 3.0}}"#,
        r#"{"padding": {"left": -1.0}}"#,
        r##"{"style": {"background": "#12345"}}"##,
    ] {
        let err = SparklineConfig::from_json_str(input).expect_err(input);
        assert!(
            matches!(err, SparklineError::InvalidConfig(_)),
            "unexpected error for {input}: {err:?}"
        );
    }
}

#[test]
fn serialized_config_parses_back() {
    let config = SparklineConfig::bar()
        .with_percentile_lines(vec![0.25, 0.75], true)
        .with_value_lines(vec![3.0], false);
    let json = config.to_json_pretty().expect("json");
    let parsed = SparklineConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed.variant, config.variant);
    assert_eq!(parsed.percentile_lines, config.percentile_lines);
    assert_eq!(parsed.value_lines, config.value_lines);
    assert_eq!(parsed.style.stroke.to_hex(), config.style.stroke.to_hex());
    assert_eq!(parsed.style.background, config.style.background);
}

#[test]
fn draw_plan_contract_accepts_bare_and_versioned_payloads() {
    let sparkline = Sparkline::from_values(
        vec![1.0, 4.0, 2.0],
        SparklineConfig::line().with_value_lines(vec![2.0, 3.0], true),
    )
    .expect("sparkline");
    let plan = sparkline.draw_plan(Viewport::new(64, 24)).expect("plan");

    let versioned = plan.to_json_contract_v1_pretty().expect("contract");
    assert!(versioned.contains(&format!("\"schema_version\": {DRAW_PLAN_JSON_SCHEMA_V1}")));
    assert_eq!(DrawPlan::from_json_compat_str(&versioned).expect("versioned"), plan);

    let bare = serde_json::to_string(&plan).expect("bare");
    assert_eq!(DrawPlan::from_json_compat_str(&bare).expect("bare"), plan);
}

#[test]
fn draw_plan_contract_rejects_unknown_schema_version() {
    let sparkline =
        Sparkline::from_values(vec![1.0, 2.0], SparklineConfig::line()).expect("sparkline");
    let plan = sparkline.draw_plan(Viewport::new(40, 40)).expect("plan");
    let payload = plan
        .to_json_contract_v1_pretty()
        .expect("contract")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");

    let err = DrawPlan::from_json_compat_str(&payload).expect_err("unsupported version");
    assert!(matches!(err, SparklineError::InvalidData(_)));
}
