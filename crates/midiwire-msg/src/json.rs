//! Loosely typed message specs.
//!
//! Bridges JSON objects such as `{"type": "pitchbend", "channel": 1, "value": 5888}`
//! to [`MessageSpec`], checking every field against the message table so a bad
//! object is reported as `UnsupportedMessageType` or `InvalidField` rather than a
//! generic deserialization error.

use serde_json::{Map, Value};

use crate::error::{Error, FieldError, Result};
use crate::spec::{FieldValues, MessageSpec};
use crate::table::{lookup_name, MessageKind, MAX_CHANNEL};

const UNTYPED: &str = "untyped";

impl MessageSpec {
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or(Error::invalid(UNTYPED, "type", FieldError::Missing))?;
        let tag = match object.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(_) => return Err(Error::invalid(UNTYPED, "type", FieldError::NotString)),
            None => return Err(Error::invalid(UNTYPED, "type", FieldError::Missing)),
        };
        let def = lookup_name(tag).ok_or_else(|| Error::UnsupportedMessageType(tag.to_string()))?;

        if def.kind == MessageKind::Sysex {
            return Ok(MessageSpec::Sysex {
                data: read_data(object, def.name)?,
            });
        }

        let channel = if def.kind.is_channel_voice() {
            Some(read_int(object, def.name, "channel", u16::from(MAX_CHANNEL))? as u8)
        } else {
            None
        };
        let values = def
            .fields()
            .iter()
            .map(|field| read_int(object, def.name, field.name, field.width.max()))
            .collect::<Result<FieldValues>>()?;

        MessageSpec::from_fields(def.kind, channel, &values)
            .ok_or_else(|| Error::UnsupportedMessageType(tag.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json_value(&value)
    }

    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Validate a JSON message spec and encode it.
pub fn encode_json(value: &Value) -> Result<Vec<u8>> {
    crate::encode(&MessageSpec::from_json_value(value)?)
}

/// Decode one message into its JSON message spec.
pub fn decode_json(bytes: &[u8]) -> Result<Value> {
    crate::decode(bytes)?.to_json_value()
}

fn read_int(
    object: &Map<String, Value>,
    message: &'static str,
    field: &'static str,
    max: u16,
) -> Result<u16> {
    let value = object
        .get(field)
        .ok_or(Error::invalid(message, field, FieldError::Missing))?;
    int_in_range(value, max).map_err(|reason| Error::invalid(message, field, reason))
}

fn int_in_range(value: &Value, max: u16) -> std::result::Result<u16, FieldError> {
    if let Some(v) = value.as_u64() {
        return u16::try_from(v)
            .ok()
            .filter(|v| *v <= max)
            .ok_or(FieldError::OutOfRange {
                value: i64::try_from(v).unwrap_or(i64::MAX),
                max,
            });
    }
    match value.as_i64() {
        Some(v) => Err(FieldError::OutOfRange { value: v, max }),
        None => Err(FieldError::NotInteger),
    }
}

fn read_data(object: &Map<String, Value>, message: &'static str) -> Result<Vec<u8>> {
    let items = object
        .get("data")
        .ok_or(Error::invalid(message, "data", FieldError::Missing))?
        .as_array()
        .ok_or(Error::invalid(message, "data", FieldError::NotArray))?;
    items
        .iter()
        .map(|item| {
            int_in_range(item, u16::from(u8::MAX))
                .map(|b| b as u8)
                .map_err(|reason| Error::invalid(message, "data", reason))
        })
        .collect()
}
