//! First-generation status widget.
//!
//! The panel publishes its state as a JSON string in `event.payload`. Decoding
//! and rendering are two separate hooks on the same event, mirroring how the
//! dashboard engine invokes them.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::TimeZoneSetting,
    display::{access, mode::AlarmMode, mode::OFFLINE_GLYPH},
    error::{DisplayError, Result},
    event::Event,
};

const NO_VALUE: &str = "-";
const NO_EVENT: &str = "---";

/// Panel state as published in the V1 payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlarmState {
    pub mode: AlarmMode,
    pub alarms: u64,
    pub event_sensor: String,
    pub event_unixtime: i64,
}

impl AlarmState {
    pub fn from_value(record: &Value) -> Result<Self> {
        Ok(Self {
            mode: AlarmMode::decode(access::require_i64(record, "mode")?),
            alarms: access::require_u64(record, "alarms")?,
            event_sensor: access::require_str(record, "event_sensor")?.to_string(),
            event_unixtime: access::require_i64(record, "event_unixtime")?,
        })
    }

    /// Sensor line; an empty name means no sensor has fired yet.
    pub fn sensor_label(&self) -> &str {
        if self.event_sensor.is_empty() {
            NO_EVENT
        } else {
            &self.event_sensor
        }
    }
}

/// Stage A: decode `event.payload` into `event.data`.
///
/// An empty (or missing) payload leaves `data` alone. Anything that is not
/// valid JSON, or not an alarm-state record, fails with `DisplayError::Parse`
/// and the event is not modified.
pub fn decode_payload(event: &mut Event) -> Result<()> {
    let payload = match event.payload.as_deref() {
        Some(payload) if !payload.is_empty() => payload,
        _ => {
            tracing::debug!("Empty payload, leaving event data unset");
            return Ok(());
        }
    };

    let data: Value = serde_json::from_str(payload)?;
    if !data.is_null() {
        AlarmState::from_value(&data).map_err(|e| DisplayError::Parse(e.to_string()))?;
    }

    tracing::debug!("Decoded alarm payload: {}", data);
    event.data = Some(data);
    Ok(())
}

/// Stage B: render `event.data` into `event.text`.
pub fn render(event: &mut Event, timezone: &TimeZoneSetting) -> Result<()> {
    let state = event
        .present_data()
        .map(AlarmState::from_value)
        .transpose()?;

    let text = render_in(state.as_ref(), timezone);
    tracing::debug!("Rendered V1 status: {:?}", text);
    event.text = Some(text);
    Ok(())
}

/// Both stages in order. A decode failure stops before rendering.
pub fn transform(event: &mut Event, timezone: &TimeZoneSetting) -> Result<()> {
    decode_payload(event)?;
    render(event, timezone)
}

pub fn render_in(state: Option<&AlarmState>, timezone: &TimeZoneSetting) -> String {
    match timezone {
        TimeZoneSetting::Local => render_state(state, &Local),
        TimeZoneSetting::Utc => render_state(state, &Utc),
        TimeZoneSetting::Fixed(offset) => render_state(state, offset),
    }
}

/// Three display lines: `<glyph> ( <alarms> )`, sensor, event time.
pub fn render_state<Tz>(state: Option<&AlarmState>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match state {
        None => format!("{} ( {} )\n{}\n{}", OFFLINE_GLYPH, NO_VALUE, NO_VALUE, NO_EVENT),
        Some(state) => {
            let time = format_event_time(state.event_unixtime, tz)
                .unwrap_or_else(|| NO_EVENT.to_string());
            format!(
                "{} ( {} )\n{}\n{}",
                state.mode.glyph(),
                state.alarms,
                state.sensor_label(),
                time
            )
        }
    }
}

/// `DD.MM.YY HH:MM` in the given zone, or `None` when there is no event.
pub fn format_event_time<Tz>(unixtime: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if unixtime <= 0 {
        return None;
    }

    let Some(utc) = DateTime::<Utc>::from_timestamp(unixtime, 0) else {
        tracing::warn!("Event timestamp {} is out of range", unixtime);
        return None;
    };

    Some(utc.with_timezone(tz).format("%d.%m.%y %H:%M").to_string())
}
