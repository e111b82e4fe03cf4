//! Signal-to-noise classification.
//!
//! Combines the measured price/volume reaction with the announcement's own
//! flags to decide whether the market confirmed it mattered. Routine
//! filings are excluded before any price-based check; without price data
//! the rating falls back to the announcement's characteristics alone.

use super::impact::{
    LOW_CHANGE_PCT, LOW_VOLUME_RATIO, MODERATE_CHANGE_PCT, MODERATE_VOLUME_RATIO,
    SIGNIFICANT_CHANGE_PCT, SIGNIFICANT_VOLUME_RATIO,
};
use super::matchers::is_routine_announcement;
use super::types::{
    AnomalyType, PriceImpactData, RawAnnouncement, SignalNoiseRating, SignalNoiseResult,
};

// Extra escalation thresholds used only for rationale wording.
const MAJOR_REASSESSMENT_PCT: f64 = 5.0;
const EXCEPTIONAL_VOLUME_RATIO: f64 = 3.0;

// Direction wording deadband, percent.
const DIRECTION_DEADBAND_PCT: f64 = 0.1;

/// Rate the signal quality of one announcement.
pub fn calculate_signal_noise(
    ann: &RawAnnouncement,
    impact: Option<&PriceImpactData>,
    is_trading_halt: bool,
    is_reinstatement: bool,
) -> SignalNoiseResult {
    // Routine filings are excluded from signal analysis outright.
    if let Some(routine_type) = is_routine_announcement(&ann.headline) {
        return SignalNoiseResult {
            rating: SignalNoiseRating::Routine,
            rationale: format!(
                "ROUTINE: Standard administrative filing ({routine_type}). Excluded from signal analysis - not correlated with price/volume movements."
            ),
            is_anomaly: false,
            anomaly_type: None,
        };
    }

    // Without price data, rate on announcement characteristics only.
    let Some(impact) = impact else {
        if ann.price_sensitive {
            return SignalNoiseResult {
                rating: SignalNoiseRating::ModerateSignal,
                rationale:
                    "Price-sensitive announcement (no price data available for impact analysis)"
                        .to_string(),
                is_anomaly: false,
                anomaly_type: None,
            };
        }
        if is_trading_halt {
            return SignalNoiseResult {
                rating: SignalNoiseRating::LowSignal,
                rationale: "Trading halt announced (no price data available for impact analysis)"
                    .to_string(),
                is_anomaly: false,
                anomaly_type: None,
            };
        }
        return SignalNoiseResult {
            rating: SignalNoiseRating::None,
            rationale: "No price data available for impact analysis".to_string(),
            is_anomaly: false,
            anomaly_type: None,
        };
    };

    let abs_change = impact.change_percent.abs();
    let ratio = impact.volume_change_ratio;
    let direction = describe_direction(impact.change_percent);
    let volume_desc = describe_volume(ratio);

    let mut rationale = String::new();
    if impact.has_significant_pre_drift {
        if let Some(interpretation) = &impact.pre_drift_interpretation {
            rationale.push_str(&format!("PRE-ANNOUNCEMENT: {interpretation} "));
        }
    }

    let mut is_anomaly = false;
    let mut anomaly_type = None;

    // HIGH_SIGNAL: significant market impact
    if abs_change >= SIGNIFICANT_CHANGE_PCT || ratio >= SIGNIFICANT_VOLUME_RATIO {
        rationale.push_str(&format!(
            "HIGH SIGNAL: Significant market reaction with {direction} and {volume_desc}. "
        ));
        if ann.price_sensitive {
            rationale.push_str("Confirmed price-sensitive announcement. ");
        } else {
            is_anomaly = true;
            anomaly_type = Some(AnomalyType::UnexpectedReaction);
            rationale.push_str(
                "ANOMALY: Non-price-sensitive announcement triggered significant market reaction. ",
            );
        }
        if abs_change >= MAJOR_REASSESSMENT_PCT {
            rationale.push_str(
                "Price movement exceeds 5% threshold indicating major market reassessment.",
            );
        } else if ratio >= EXCEPTIONAL_VOLUME_RATIO {
            rationale.push_str("Exceptional volume indicates strong investor interest.");
        }
        return SignalNoiseResult {
            rating: SignalNoiseRating::HighSignal,
            rationale,
            is_anomaly,
            anomaly_type,
        };
    }

    // MODERATE_SIGNAL: notable market reaction
    if abs_change >= MODERATE_CHANGE_PCT || ratio >= MODERATE_VOLUME_RATIO {
        rationale.push_str(&format!(
            "MODERATE SIGNAL: Notable market reaction with {direction} and {volume_desc}. "
        ));
        if ann.price_sensitive {
            rationale.push_str("Price-sensitive flag indicates company deemed this material. ");
        } else if !is_trading_halt && !is_reinstatement {
            is_anomaly = true;
            anomaly_type = Some(AnomalyType::UnexpectedReaction);
            rationale
                .push_str("Note: Non-price-sensitive announcement showed unexpected market response. ");
        }
        if is_trading_halt || is_reinstatement {
            rationale.push_str("Associated with trading halt activity. ");
        }
        return SignalNoiseResult {
            rating: SignalNoiseRating::ModerateSignal,
            rationale,
            is_anomaly,
            anomaly_type,
        };
    }

    // LOW_SIGNAL: minimal but detectable market reaction
    if abs_change >= LOW_CHANGE_PCT || ratio >= LOW_VOLUME_RATIO {
        rationale.push_str(&format!(
            "LOW SIGNAL: Minor market reaction with {direction} and {volume_desc}. "
        ));
        if ann.price_sensitive {
            is_anomaly = true;
            anomaly_type = Some(AnomalyType::NoReaction);
            rationale.push_str("ANOMALY: Price-sensitive flag but market showed limited reaction. ");
        }
        return SignalNoiseResult {
            rating: SignalNoiseRating::LowSignal,
            rationale,
            is_anomaly,
            anomaly_type,
        };
    }

    // NOISE: no meaningful price/volume impact
    rationale.push_str(&format!(
        "NOISE: No meaningful market impact - {direction} with {volume_desc}. "
    ));
    if is_trading_halt {
        rationale
            .push_str("Trading halt with no subsequent price movement indicates non-material purpose. ");
    } else if is_reinstatement {
        rationale.push_str("Reinstatement with no price change suggests halt was procedural. ");
    } else if ann.price_sensitive {
        is_anomaly = true;
        anomaly_type = Some(AnomalyType::NoReaction);
        rationale.push_str(
            "ANOMALY: Price-sensitive announcement but market showed NO reaction - verify announcement accuracy. ",
        );
    } else {
        rationale.push_str("Announcement had no measurable effect on price or volume. ");
    }

    SignalNoiseResult {
        rating: SignalNoiseRating::Noise,
        rationale,
        is_anomaly,
        anomaly_type,
    }
}

fn describe_direction(change_percent: f64) -> String {
    if change_percent > DIRECTION_DEADBAND_PCT {
        format!("+{change_percent:.1}% increase")
    } else if change_percent < -DIRECTION_DEADBAND_PCT {
        format!("{change_percent:.1}% decrease")
    } else {
        "no change".to_string()
    }
}

fn describe_volume(ratio: f64) -> String {
    if ratio >= 2.0 {
        format!("{ratio:.1}x volume spike")
    } else if ratio >= 1.5 {
        format!("{ratio:.1}x elevated volume")
    } else if ratio <= 0.5 {
        format!("{ratio:.1}x reduced volume")
    } else {
        "normal volume".to_string()
    }
}
