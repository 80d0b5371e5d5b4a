use chrono::{DateTime, SecondsFormat};
use chrono_tz::Europe::London;

use crate::domain::{GatewayTime, ValidationError};

/// Render a [`GatewayTime`] the way the gateway expects it.
///
/// Unix seconds become ISO-8601 with a numeric offset in Europe/London civil
/// time (`2023-11-14T22:13:20+00:00`, `+01:00` during BST).
pub fn render_gateway_time(time: &GatewayTime) -> Result<String, ValidationError> {
    match time {
        GatewayTime::Text(value) => Ok(value.clone()),
        GatewayTime::Unix(seconds) => {
            let utc = DateTime::from_timestamp(*seconds, 0)
                .ok_or(ValidationError::TimestampOutOfRange { value: *seconds })?;
            Ok(utc
                .with_timezone(&London)
                .to_rfc3339_opts(SecondsFormat::Secs, false))
        }
    }
}
