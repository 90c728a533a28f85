//! Wire bytes to message spec.
//!
//! One call decodes exactly one message from the start of the buffer; running
//! status is not supported and trailing bytes are left for the caller.

use tracing::trace;

use crate::error::{Error, FieldError, Result};
use crate::spec::{FieldValues, MessageSpec};
use crate::table::{lookup_status, MessageDef, Width, SYSEX_END, SYSEX_START};
use crate::utils::{is_data_byte, join_14bit};

/// Decode the message at the start of `bytes`.
///
/// A note-on with velocity 0 always decodes as a note-off.
///
/// ```
/// use midiwire_msg::{decode, MessageSpec};
///
/// assert_eq!(decode(&[0x90, 0x3C, 0x00]).unwrap(), MessageSpec::note_off(0, 60, 0));
/// ```
pub fn decode(bytes: &[u8]) -> Result<MessageSpec> {
    decode_prefix(bytes).map(|(spec, _)| spec)
}

/// Like [`decode`], also returning how many bytes the message occupied.
pub fn decode_prefix(bytes: &[u8]) -> Result<(MessageSpec, usize)> {
    let (&status, payload) = bytes.split_first().ok_or(Error::TruncatedMessage {
        message: "MIDI",
        expected: 1,
        actual: 0,
    })?;
    let (def, channel) = lookup_status(status).ok_or(Error::UnrecognizedStatusByte(status))?;

    let len = match def.payload_len() {
        Some(len) => len,
        None => return decode_sysex(payload),
    };
    let payload = payload.get(..len).ok_or(Error::TruncatedMessage {
        message: def.name,
        expected: len + 1,
        actual: bytes.len(),
    })?;

    let values = read_fields(def, payload)?;
    // Channel and values were both read from `def`, so the layout always fits;
    // a mismatch would mean the table row itself is broken.
    let spec = MessageSpec::from_fields(def.kind, channel, &values)
        .ok_or(Error::UnrecognizedStatusByte(status))?;

    Ok((normalize_note_off(spec), len + 1))
}

fn read_fields(def: &MessageDef, payload: &[u8]) -> Result<FieldValues> {
    let mut values = FieldValues::new();
    let mut rest = payload;
    for field in def.fields() {
        let (raw, tail) = rest.split_at(field.width.byte_len());
        rest = tail;
        if let Some(&byte) = raw.iter().find(|b| !is_data_byte(**b)) {
            return Err(Error::invalid(
                def.name,
                field.name,
                FieldError::NotDataByte(byte),
            ));
        }
        let value = match (field.width, raw) {
            (Width::Fourteen, &[lsb, msb]) => join_14bit(lsb, msb),
            // The reserved byte of a padded field is consumed and ignored.
            (_, &[byte, ..]) => u16::from(byte),
            (_, &[]) => 0,
        };
        values.push(value);
    }
    Ok(values)
}

fn normalize_note_off(spec: MessageSpec) -> MessageSpec {
    match spec {
        MessageSpec::NoteOn {
            channel,
            note,
            velocity: 0,
        } => {
            trace!(channel, note, "zero-velocity note-on decoded as note-off");
            MessageSpec::NoteOff {
                channel,
                note,
                velocity: 0,
            }
        }
        other => other,
    }
}

/// `payload` starts right after the 0xF0 status byte.
fn decode_sysex(payload: &[u8]) -> Result<(MessageSpec, usize)> {
    let end = payload
        .iter()
        .position(|&b| b == SYSEX_END)
        .ok_or(Error::TruncatedMessage {
            message: "sysex",
            expected: payload.len() + 2,
            actual: payload.len() + 1,
        })?;
    let data = &payload[..end];
    if let Some(index) = data.iter().position(|&b| b == SYSEX_START) {
        return Err(Error::InvalidSysexFraming {
            byte: SYSEX_START,
            index,
        });
    }
    trace!(len = data.len(), "sysex terminator found");
    Ok((MessageSpec::sysex(data), end + 2))
}
