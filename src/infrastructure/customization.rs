use crate::domain::models::{Block, DayOff, DayOffKind, DayOffSpan, ScheduleState};
use crate::infrastructure::error::InfraError;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomizationPayload {
    blocks: Vec<BlockRecord>,
    #[serde(default)]
    days_off: Vec<DayOffRecord>,
}

#[derive(Debug, Deserialize)]
struct BlockRecord {
    name: String,
    start: f64,
    end: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayOffRecord {
    #[serde(rename = "type")]
    kind: DayOffKind,
    name: String,
    date: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl DayOffRecord {
    fn into_day_off(self, field_name: &str) -> Result<DayOff, InfraError> {
        let span = match (self.date, self.start_date, self.end_date) {
            (Some(date), None, None) => {
                DayOffSpan::SingleDate(parse_calendar_date(&date, &format!("{field_name}.date"))?)
            }
            (None, Some(start), Some(end)) => DayOffSpan::DateRange {
                start: parse_calendar_date(&start, &format!("{field_name}.startDate"))?,
                end: parse_calendar_date(&end, &format!("{field_name}.endDate"))?,
            },
            (Some(_), _, _) => {
                return Err(InfraError::Validation(format!(
                    "{field_name} must have either date or startDate/endDate, not both"
                )));
            }
            _ => {
                return Err(InfraError::Validation(format!(
                    "{field_name} requires date or both startDate and endDate"
                )));
            }
        };
        Ok(DayOff {
            kind: self.kind,
            name: self.name,
            span,
        })
    }
}

fn parse_calendar_date(value: &str, field_name: &str) -> Result<NaiveDate, InfraError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|parsed| parsed.date_naive()))
        .map_err(|_| InfraError::Validation(format!("{field_name} must be a calendar date")))
}

pub fn decode_customization(raw: &str) -> Result<ScheduleState, InfraError> {
    let payload: CustomizationPayload = serde_json::from_str(raw)
        .map_err(|error| InfraError::Validation(error.to_string()))?;

    let blocks = payload
        .blocks
        .into_iter()
        .map(|record| Block::new(record.name, record.start, record.end))
        .collect();
    let days_off = payload
        .days_off
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_day_off(&format!("daysOff[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    ScheduleState::new(blocks, days_off).map_err(InfraError::Validation)
}

pub fn load_customization(raw: Option<&str>) -> Result<ScheduleState, InfraError> {
    match raw {
        Some(raw) => decode_customization(raw),
        None => Ok(ScheduleState::default()),
    }
}
