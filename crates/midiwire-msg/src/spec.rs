//! Structured MIDI message descriptions.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::table::MessageKind;

/// Payload field values in message-table order.
pub type FieldValues = SmallVec<[u16; 2]>;

/// A single MIDI 1.0 message.
///
/// Serializes as an internally tagged object, e.g.
/// `{"type": "noteOn", "channel": 0, "note": 60, "velocity": 69}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageSpec {
    NoteOff { channel: u8, note: u8, velocity: u8 },
    NoteOn { channel: u8, note: u8, velocity: u8 },
    PolyAftertouch { channel: u8, note: u8, pressure: u8 },
    Control { channel: u8, number: u8, value: u8 },
    Program { channel: u8, program: u8 },
    Aftertouch { channel: u8, pressure: u8 },
    /// 14-bit unsigned bend, 8192 = center.
    Pitchbend { channel: u8, value: u16 },
    /// Payload between the 0xF0/0xF7 framing bytes. Only the framing bytes
    /// are rejected; other status bytes, real-time included, pass through as data.
    Sysex { data: Vec<u8> },
    SongPointer { value: u16 },
    SongSelect { value: u8 },
    TuneRequest,
    Clock,
    Start,
    Continue,
    Stop,
    ActiveSense,
    Reset,
}

impl MessageSpec {
    #[inline]
    pub fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
        Self::NoteOn {
            channel,
            note,
            velocity,
        }
    }

    #[inline]
    pub fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
        Self::NoteOff {
            channel,
            note,
            velocity,
        }
    }

    #[inline]
    pub fn control(channel: u8, number: u8, value: u8) -> Self {
        Self::Control {
            channel,
            number,
            value,
        }
    }

    #[inline]
    pub fn program(channel: u8, program: u8) -> Self {
        Self::Program { channel, program }
    }

    #[inline]
    pub fn pitchbend(channel: u8, value: u16) -> Self {
        Self::Pitchbend { channel, value }
    }

    #[inline]
    pub fn sysex(data: impl Into<Vec<u8>>) -> Self {
        Self::Sysex { data: data.into() }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::NoteOff { .. } => MessageKind::NoteOff,
            Self::NoteOn { .. } => MessageKind::NoteOn,
            Self::PolyAftertouch { .. } => MessageKind::PolyAftertouch,
            Self::Control { .. } => MessageKind::Control,
            Self::Program { .. } => MessageKind::Program,
            Self::Aftertouch { .. } => MessageKind::Aftertouch,
            Self::Pitchbend { .. } => MessageKind::Pitchbend,
            Self::Sysex { .. } => MessageKind::Sysex,
            Self::SongPointer { .. } => MessageKind::SongPointer,
            Self::SongSelect { .. } => MessageKind::SongSelect,
            Self::TuneRequest => MessageKind::TuneRequest,
            Self::Clock => MessageKind::Clock,
            Self::Start => MessageKind::Start,
            Self::Continue => MessageKind::Continue,
            Self::Stop => MessageKind::Stop,
            Self::ActiveSense => MessageKind::ActiveSense,
            Self::Reset => MessageKind::Reset,
        }
    }

    /// Channel of a channel-voice message, `None` for system messages.
    pub fn channel(&self) -> Option<u8> {
        match *self {
            Self::NoteOff { channel, .. }
            | Self::NoteOn { channel, .. }
            | Self::PolyAftertouch { channel, .. }
            | Self::Control { channel, .. }
            | Self::Program { channel, .. }
            | Self::Aftertouch { channel, .. }
            | Self::Pitchbend { channel, .. } => Some(channel),
            _ => None,
        }
    }

    /// Fixed payload fields in the order the message table lists them.
    /// Sysex data is not a fixed field and yields nothing here.
    pub fn field_values(&self) -> FieldValues {
        match *self {
            Self::NoteOff { note, velocity, .. } | Self::NoteOn { note, velocity, .. } => {
                smallvec![u16::from(note), u16::from(velocity)]
            }
            Self::PolyAftertouch { note, pressure, .. } => {
                smallvec![u16::from(note), u16::from(pressure)]
            }
            Self::Control { number, value, .. } => {
                smallvec![u16::from(number), u16::from(value)]
            }
            Self::Program { program, .. } => smallvec![u16::from(program)],
            Self::Aftertouch { pressure, .. } => smallvec![u16::from(pressure)],
            Self::Pitchbend { value, .. } | Self::SongPointer { value } => smallvec![value],
            Self::SongSelect { value } => smallvec![u16::from(value)],
            Self::Sysex { .. }
            | Self::TuneRequest
            | Self::Clock
            | Self::Start
            | Self::Continue
            | Self::Stop
            | Self::ActiveSense
            | Self::Reset => SmallVec::new(),
        }
    }

    /// Rebuild a fixed-payload message from its table-ordered field values.
    ///
    /// Values must already be range-checked against the table widths; 7-bit
    /// fields are truncated to `u8`. Returns `None` for sysex, or when
    /// `values` or `channel` do not fit the kind's layout.
    pub fn from_fields(kind: MessageKind, channel: Option<u8>, values: &[u16]) -> Option<Self> {
        let byte = |i: usize| values.get(i).map(|&v| v as u8);
        if values.len() != kind.def().fields().len() {
            return None;
        }
        if kind.is_channel_voice() != channel.is_some() {
            return None;
        }
        let spec = match kind {
            MessageKind::NoteOff => Self::NoteOff {
                channel: channel?,
                note: byte(0)?,
                velocity: byte(1)?,
            },
            MessageKind::NoteOn => Self::NoteOn {
                channel: channel?,
                note: byte(0)?,
                velocity: byte(1)?,
            },
            MessageKind::PolyAftertouch => Self::PolyAftertouch {
                channel: channel?,
                note: byte(0)?,
                pressure: byte(1)?,
            },
            MessageKind::Control => Self::Control {
                channel: channel?,
                number: byte(0)?,
                value: byte(1)?,
            },
            MessageKind::Program => Self::Program {
                channel: channel?,
                program: byte(0)?,
            },
            MessageKind::Aftertouch => Self::Aftertouch {
                channel: channel?,
                pressure: byte(0)?,
            },
            MessageKind::Pitchbend => Self::Pitchbend {
                channel: channel?,
                value: *values.first()?,
            },
            MessageKind::Sysex => return None,
            MessageKind::SongPointer => Self::SongPointer {
                value: *values.first()?,
            },
            MessageKind::SongSelect => Self::SongSelect { value: byte(0)? },
            MessageKind::TuneRequest => Self::TuneRequest,
            MessageKind::Clock => Self::Clock,
            MessageKind::Start => Self::Start,
            MessageKind::Continue => Self::Continue,
            MessageKind::Stop => Self::Stop,
            MessageKind::ActiveSense => Self::ActiveSense,
            MessageKind::Reset => Self::Reset,
        };
        Some(spec)
    }

    /// Encode into wire bytes. See [`encode`](crate::encode).
    #[inline]
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        crate::encode(self)
    }

    /// Decode one message from the start of `bytes`. See [`decode`](crate::decode).
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        crate::decode(bytes)
    }

    #[inline]
    pub fn is_note_on(&self) -> bool {
        matches!(self, Self::NoteOn { velocity, .. } if *velocity > 0)
    }

    #[inline]
    pub fn is_note_off(&self) -> bool {
        matches!(self, Self::NoteOff { .. } | Self::NoteOn { velocity: 0, .. })
    }
}
