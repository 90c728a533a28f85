//! Message spec to wire bytes.

use smallvec::{smallvec, SmallVec};

use crate::error::{Error, FieldError, Result};
use crate::spec::MessageSpec;
use crate::table::{MessageDef, Status, Width, MAX_CHANNEL, SYSEX_END, SYSEX_START};
use crate::utils::split_14bit;

/// Encode one message into its wire bytes.
///
/// Every field is validated before any byte is produced.
///
/// ```
/// use midiwire_msg::{encode, MessageSpec};
///
/// let bytes = encode(&MessageSpec::note_on(0, 60, 69)).unwrap();
/// assert_eq!(bytes, [0x90, 0x3C, 0x45]);
/// ```
pub fn encode(spec: &MessageSpec) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(spec, &mut out)?;
    Ok(out)
}

/// Append the wire bytes of `spec` to `out`, returning the number of bytes
/// written. `out` is left untouched on error.
pub fn encode_into(spec: &MessageSpec, out: &mut Vec<u8>) -> Result<usize> {
    if let MessageSpec::Sysex { data } = spec {
        check_sysex_data(data)?;
        out.reserve(data.len() + 2);
        out.push(SYSEX_START);
        out.extend_from_slice(data);
        out.push(SYSEX_END);
        return Ok(data.len() + 2);
    }

    let def = spec.kind().def();
    let mut bytes: SmallVec<[u8; 3]> = smallvec![status_byte(def, spec.channel())?];

    for (field, &value) in def.fields().iter().zip(spec.field_values().iter()) {
        let max = field.width.max();
        if value > max {
            return Err(Error::invalid(
                def.name,
                field.name,
                FieldError::OutOfRange {
                    value: i64::from(value),
                    max,
                },
            ));
        }
        match field.width {
            Width::Seven => bytes.push(value as u8),
            Width::Fourteen => bytes.extend_from_slice(&split_14bit(value)),
            Width::SevenPadded => bytes.extend_from_slice(&[value as u8, 0x00]),
        }
    }

    out.extend_from_slice(&bytes);
    Ok(bytes.len())
}

fn status_byte(def: &MessageDef, channel: Option<u8>) -> Result<u8> {
    match (def.status, channel) {
        (Status::Channel(nibble), Some(channel)) if channel <= MAX_CHANNEL => {
            Ok((nibble << 4) | channel)
        }
        (Status::Channel(_), Some(channel)) => Err(Error::invalid(
            def.name,
            "channel",
            FieldError::OutOfRange {
                value: i64::from(channel),
                max: u16::from(MAX_CHANNEL),
            },
        )),
        (Status::Channel(_), None) => Err(Error::invalid(def.name, "channel", FieldError::Missing)),
        (Status::System(status), _) => Ok(status),
    }
}

/// Framing is added by the encoder; data carrying its own 0xF0/0xF7 is rejected.
fn check_sysex_data(data: &[u8]) -> Result<()> {
    match data
        .iter()
        .position(|&b| b == SYSEX_START || b == SYSEX_END)
    {
        Some(index) => Err(Error::InvalidSysexFraming {
            byte: data[index],
            index,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_on() {
        assert_eq!(
            encode(&MessageSpec::note_on(0, 60, 69)).unwrap(),
            vec![0x90, 0x3C, 0x45]
        );
    }

    #[test]
    fn test_control() {
        assert_eq!(
            encode(&MessageSpec::control(2, 74, 116)).unwrap(),
            vec![0xB2, 0x4A, 0x74]
        );
    }

    #[test]
    fn test_pitchbend_little_endian() {
        assert_eq!(
            encode(&MessageSpec::pitchbend(1, 5888)).unwrap(),
            vec![0xE1, 0x00, 0x2E]
        );
        assert_eq!(
            encode(&MessageSpec::pitchbend(0, 0x3FFF)).unwrap(),
            vec![0xE0, 0x7F, 0x7F]
        );
    }

    #[test]
    fn test_song_select_reserved_byte() {
        assert_eq!(
            encode(&MessageSpec::SongSelect { value: 1 }).unwrap(),
            vec![0xF3, 0x01, 0x00]
        );
    }

    #[test]
    fn test_song_pointer_splits_14bit() {
        assert_eq!(
            encode(&MessageSpec::SongPointer { value: 1 }).unwrap(),
            vec![0xF2, 0x01, 0x00]
        );
        assert_eq!(
            encode(&MessageSpec::SongPointer { value: 300 }).unwrap(),
            vec![0xF2, 0x2C, 0x02]
        );
    }

    #[test]
    fn test_sysex_framed() {
        assert_eq!(
            encode(&MessageSpec::sysex(vec![0, 32, 8, 16, 127, 0, 1])).unwrap(),
            vec![0xF0, 0x00, 0x20, 0x08, 0x10, 0x7F, 0x00, 0x01, 0xF7]
        );
        assert_eq!(encode(&MessageSpec::sysex(vec![])).unwrap(), vec![0xF0, 0xF7]);
    }

    #[test]
    fn test_sysex_framing_bytes_rejected() {
        let closing = MessageSpec::sysex(vec![0, 32, 8, 16, 127, 0, 1, 0xF7]);
        assert_eq!(
            encode(&closing),
            Err(Error::InvalidSysexFraming {
                byte: 0xF7,
                index: 7
            })
        );

        let opening = MessageSpec::sysex(vec![0xF0, 0, 32, 8, 16, 127, 0, 1]);
        assert_eq!(
            encode(&opening),
            Err(Error::InvalidSysexFraming {
                byte: 0xF0,
                index: 0
            })
        );

        let both = MessageSpec::sysex(vec![0xF0, 0, 32, 8, 16, 127, 0, 1, 0xF7]);
        assert!(matches!(
            encode(&both),
            Err(Error::InvalidSysexFraming { .. })
        ));
    }

    #[test]
    fn test_sysex_status_bytes_pass_through() {
        assert_eq!(
            encode(&MessageSpec::sysex(vec![0x80, 0xF8])).unwrap(),
            vec![0xF0, 0x80, 0xF8, 0xF7]
        );
    }

    #[test]
    fn test_out_of_range_velocity() {
        let err = encode(&MessageSpec::note_on(0, 60, 200)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidField {
                message: "noteOn",
                field: "velocity",
                reason: FieldError::OutOfRange {
                    value: 200,
                    max: 127
                },
            }
        );
    }

    #[test]
    fn test_out_of_range_channel() {
        let err = encode(&MessageSpec::program(16, 3)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                field: "channel",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_pitchbend() {
        let err = encode(&MessageSpec::pitchbend(0, 16384)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                message: "pitchbend",
                field: "value",
                ..
            }
        ));
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = vec![0xAA];
        let written = encode_into(&MessageSpec::Clock, &mut out).unwrap();
        assert_eq!(written, 1);
        assert_eq!(out, vec![0xAA, 0xF8]);
    }

    #[test]
    fn test_encode_into_untouched_on_error() {
        let mut out = vec![0xAA];
        assert!(encode_into(&MessageSpec::control(0, 128, 0), &mut out).is_err());
        assert!(encode_into(&MessageSpec::sysex(vec![1, 0xF7]), &mut out).is_err());
        assert_eq!(out, vec![0xAA]);
    }
}
