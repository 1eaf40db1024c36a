//! Second-generation status widget: structured data in, text plus a colour and
//! blink hint out.

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Messages,
    display::{access, mode::AlarmMode},
    error::Result,
    event::{DisplayColor, Event},
};

const NO_EVENT_TIME: &str = "---";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRecord {
    pub status: String,
    pub event: Option<LastEvent>,
    pub mode: AlarmMode,
    pub alarms: i64,
    pub annunciator: Annunciator,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastEvent {
    pub sensor: String,
    pub time_short: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annunciator {
    /// Zones currently signalling an alarm.
    pub summary: i64,
}

impl StatusRecord {
    pub fn from_value(record: &Value) -> Result<Self> {
        let event = match access::optional(record, "event")? {
            Some(_) => Some(LastEvent {
                sensor: access::require_str(record, "event.sensor")?.to_string(),
                time_short: access::require_str(record, "event.time_short")?.to_string(),
            }),
            None => None,
        };

        Ok(Self {
            status: access::require_str(record, "status")?.to_string(),
            event,
            mode: AlarmMode::decode(access::require_i64(record, "mode")?),
            alarms: access::require_i64(record, "alarms")?,
            annunciator: Annunciator {
                summary: access::require_i64(record, "annunciator.summary")?,
            },
        })
    }

    /// Colour and blink flag for the current state.
    ///
    /// Disarmed panels only react to live zone alarms; armed panels also keep
    /// flashing while any alarm has been counted since arming.
    pub fn urgency(&self) -> (DisplayColor, bool) {
        let live_alarm = self.annunciator.summary > 0;
        if self.mode.is_disarmed() {
            if live_alarm {
                (DisplayColor::Red, true)
            } else {
                (DisplayColor::YellowGreen, false)
            }
        } else if self.alarms > 0 || live_alarm {
            (DisplayColor::Red, true)
        } else {
            (DisplayColor::Yellow, false)
        }
    }
}

/// Output fields written back onto the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub text: String,
    #[serde(rename = "textColor")]
    pub text_color: DisplayColor,
    pub blink: bool,
}

pub fn render(event: &mut Event, messages: &Messages) -> Result<()> {
    let record = event
        .present_data()
        .map(StatusRecord::from_value)
        .transpose()?;

    let rendering = render_record(record.as_ref(), messages);
    tracing::debug!(
        "Rendered V2 status: {:?} color={} blink={}",
        rendering.text,
        rendering.text_color,
        rendering.blink
    );

    event.text = Some(rendering.text);
    event.text_color = Some(rendering.text_color);
    event.blink = Some(rendering.blink);
    Ok(())
}

pub fn render_record(record: Option<&StatusRecord>, messages: &Messages) -> Rendering {
    let Some(record) = record else {
        return Rendering {
            text: messages.device_unavailable.to_string(),
            text_color: DisplayColor::DimGray,
            blink: false,
        };
    };

    let details = match &record.event {
        Some(last) => format!("{}\n{}", last.sensor, last.time_short),
        None => format!("{}\n{}", messages.no_events, NO_EVENT_TIME),
    };

    let (text_color, blink) = record.urgency();
    Rendering {
        text: format!("{}\n{}", record.status, details),
        text_color,
        blink,
    }
}
