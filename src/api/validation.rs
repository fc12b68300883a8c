use crate::core::{Padding, ScalePolicy};
use crate::error::{SparklineError, SparklineResult};

use super::{BarOptions, SparklineConfig, SparklineStyle, SparklineVariant};

pub(super) fn validate_config(config: &SparklineConfig) -> SparklineResult<()> {
    validate_padding(config.padding)?;
    validate_scale_policy(config.scale_policy)?;

    for rank_fraction in &config.percentile_lines {
        if !rank_fraction.is_finite() || !(0.0..=1.0).contains(rank_fraction) {
            return Err(SparklineError::InvalidConfig(format!(
                "percentile line {rank_fraction} must be within [0, 1]"
            )));
        }
    }

    if config.value_lines.iter().any(|value| !value.is_finite()) {
        return Err(SparklineError::InvalidConfig(
            "value lines must be finite".to_owned(),
        ));
    }

    if let SparklineVariant::Bar(options) = config.variant {
        validate_bar_options(options)?;
    }

    validate_style(config.style)
}

fn validate_padding(padding: Padding) -> SparklineResult<()> {
    for (name, value) in [
        ("top", padding.top),
        ("bottom", padding.bottom),
        ("left", padding.left),
        ("right", padding.right),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(SparklineError::InvalidConfig(format!(
                "{name} padding must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

fn validate_scale_policy(policy: ScalePolicy) -> SparklineResult<()> {
    if let ScalePolicy::ExplicitRange { lo, hi } = policy {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(SparklineError::InvalidConfig(
                "explicit range bounds must be finite".to_owned(),
            ));
        }
        if hi <= lo {
            return Err(SparklineError::InvalidConfig(format!(
                "explicit range requires hi > lo (lo={lo}, hi={hi})"
            )));
        }
    }
    Ok(())
}

fn validate_bar_options(options: BarOptions) -> SparklineResult<()> {
    for (name, value) in [
        ("bar_gap", options.bar_gap),
        ("marking_extension", options.marking_extension),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(SparklineError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

fn validate_style(style: SparklineStyle) -> SparklineResult<()> {
    if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
        return Err(SparklineError::InvalidConfig(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }

    for (name, color) in [
        ("background", style.background),
        ("stroke", style.stroke),
        ("percentile_color", style.percentile_color),
        ("percentile_fill_color", style.percentile_fill_color),
        ("value_line_color", style.value_line_color),
        ("value_line_fill_color", style.value_line_fill_color),
    ] {
        color
            .validate()
            .map_err(|err| SparklineError::InvalidConfig(format!("{name}: {err}")))?;
    }
    Ok(())
}
