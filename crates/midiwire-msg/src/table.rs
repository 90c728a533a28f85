//! Static MIDI 1.0 message table.
//!
//! One row per [`MessageKind`], consulted by both the encoder and the decoder.
//! Rows are stored at the index of their own kind; a compile-time check below
//! rejects a table whose order disagrees with the enum.

use serde::{Deserialize, Serialize};

/// Field-less discriminant of [`MessageSpec`](crate::MessageSpec).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    PolyAftertouch,
    Control,
    Program,
    Aftertouch,
    Pitchbend,
    Sysex,
    SongPointer,
    SongSelect,
    TuneRequest,
    Clock,
    Start,
    Continue,
    Stop,
    ActiveSense,
    Reset,
}

impl MessageKind {
    pub const COUNT: usize = 17;

    pub const ALL: [MessageKind; Self::COUNT] = [
        MessageKind::NoteOff,
        MessageKind::NoteOn,
        MessageKind::PolyAftertouch,
        MessageKind::Control,
        MessageKind::Program,
        MessageKind::Aftertouch,
        MessageKind::Pitchbend,
        MessageKind::Sysex,
        MessageKind::SongPointer,
        MessageKind::SongSelect,
        MessageKind::TuneRequest,
        MessageKind::Clock,
        MessageKind::Start,
        MessageKind::Continue,
        MessageKind::Stop,
        MessageKind::ActiveSense,
        MessageKind::Reset,
    ];

    #[inline]
    pub fn def(self) -> &'static MessageDef {
        &MESSAGE_TABLE[self as usize]
    }

    /// The `type` tag used in message specs, e.g. `"noteOn"`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    #[inline]
    pub fn is_channel_voice(self) -> bool {
        matches!(self.def().status, Status::Channel(_))
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the status byte of a message is formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// High nibble of a channel-voice status byte; the low nibble is the channel.
    Channel(u8),
    /// Fixed system status byte.
    System(u8),
}

/// Encoding of one payload field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// One 7-bit data byte.
    Seven,
    /// Two 7-bit data bytes, low 7 bits first.
    Fourteen,
    /// One 7-bit data byte followed by a reserved 0x00.
    SevenPadded,
}

impl Width {
    #[inline]
    pub const fn max(self) -> u16 {
        match self {
            Width::Seven | Width::SevenPadded => 0x7F,
            Width::Fourteen => 0x3FFF,
        }
    }

    #[inline]
    pub const fn byte_len(self) -> usize {
        match self {
            Width::Seven => 1,
            Width::Fourteen | Width::SevenPadded => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub width: Width,
}

/// Payload layout following the status byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    Fixed(&'static [FieldDef]),
    /// Variable-length data terminated by [`SYSEX_END`].
    Framed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageDef {
    pub kind: MessageKind,
    pub name: &'static str,
    pub status: Status,
    pub payload: Payload,
}

impl MessageDef {
    /// Number of payload bytes after the status byte, `None` for sysex.
    pub const fn payload_len(&self) -> Option<usize> {
        match self.payload {
            Payload::Fixed(fields) => {
                let mut len = 0;
                let mut i = 0;
                while i < fields.len() {
                    len += fields[i].width.byte_len();
                    i += 1;
                }
                Some(len)
            }
            Payload::Framed => None,
        }
    }

    pub const fn fields(&self) -> &'static [FieldDef] {
        match self.payload {
            Payload::Fixed(fields) => fields,
            Payload::Framed => &[],
        }
    }
}

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;
pub const MAX_CHANNEL: u8 = 0x0F;

const fn seven(name: &'static str) -> FieldDef {
    FieldDef {
        name,
        width: Width::Seven,
    }
}

const fn channel(
    kind: MessageKind,
    name: &'static str,
    nibble: u8,
    fields: &'static [FieldDef],
) -> MessageDef {
    MessageDef {
        kind,
        name,
        status: Status::Channel(nibble),
        payload: Payload::Fixed(fields),
    }
}

const fn system(
    kind: MessageKind,
    name: &'static str,
    status: u8,
    fields: &'static [FieldDef],
) -> MessageDef {
    MessageDef {
        kind,
        name,
        status: Status::System(status),
        payload: Payload::Fixed(fields),
    }
}

const NOTE: &[FieldDef] = &[seven("note"), seven("velocity")];
const POLY_PRESSURE: &[FieldDef] = &[seven("note"), seven("pressure")];
const CONTROL: &[FieldDef] = &[seven("number"), seven("value")];
const PROGRAM: &[FieldDef] = &[seven("program")];
const PRESSURE: &[FieldDef] = &[seven("pressure")];
const FOURTEEN_BIT_VALUE: &[FieldDef] = &[FieldDef {
    name: "value",
    width: Width::Fourteen,
}];
const PADDED_VALUE: &[FieldDef] = &[FieldDef {
    name: "value",
    width: Width::SevenPadded,
}];
const NONE: &[FieldDef] = &[];

const ROWS: [MessageDef; MessageKind::COUNT] = [
    channel(MessageKind::NoteOff, "noteOff", 0x8, NOTE),
    channel(MessageKind::NoteOn, "noteOn", 0x9, NOTE),
    channel(MessageKind::PolyAftertouch, "polyAftertouch", 0xA, POLY_PRESSURE),
    channel(MessageKind::Control, "control", 0xB, CONTROL),
    channel(MessageKind::Program, "program", 0xC, PROGRAM),
    channel(MessageKind::Aftertouch, "aftertouch", 0xD, PRESSURE),
    channel(MessageKind::Pitchbend, "pitchbend", 0xE, FOURTEEN_BIT_VALUE),
    MessageDef {
        kind: MessageKind::Sysex,
        name: "sysex",
        status: Status::System(SYSEX_START),
        payload: Payload::Framed,
    },
    system(MessageKind::SongPointer, "songPointer", 0xF2, FOURTEEN_BIT_VALUE),
    system(MessageKind::SongSelect, "songSelect", 0xF3, PADDED_VALUE),
    system(MessageKind::TuneRequest, "tuneRequest", 0xF6, NONE),
    system(MessageKind::Clock, "clock", 0xF8, NONE),
    system(MessageKind::Start, "start", 0xFA, NONE),
    system(MessageKind::Continue, "continue", 0xFB, NONE),
    system(MessageKind::Stop, "stop", 0xFC, NONE),
    system(MessageKind::ActiveSense, "activeSense", 0xFE, NONE),
    system(MessageKind::Reset, "reset", 0xFF, NONE),
];

const _: () = {
    let mut i = 0;
    while i < ROWS.len() {
        assert!(ROWS[i].kind as usize == i);
        assert!(MessageKind::ALL[i] as usize == i);
        i += 1;
    }
};

/// The message table, indexed by `MessageKind as usize`.
pub static MESSAGE_TABLE: [MessageDef; MessageKind::COUNT] = ROWS;

/// Encode-direction lookup by `type` tag.
pub fn lookup_name(name: &str) -> Option<&'static MessageDef> {
    MESSAGE_TABLE.iter().find(|def| def.name == name)
}

/// Decode-direction lookup. Returns the row and, for channel-voice messages,
/// the channel packed into the low nibble.
pub fn lookup_status(status: u8) -> Option<(&'static MessageDef, Option<u8>)> {
    match status {
        0x80..=0xEF => {
            let nibble = status >> 4;
            MESSAGE_TABLE
                .iter()
                .find(|def| def.status == Status::Channel(nibble))
                .map(|def| (def, Some(status & MAX_CHANNEL)))
        }
        0xF0..=0xFF => MESSAGE_TABLE
            .iter()
            .find(|def| def.status == Status::System(status))
            .map(|def| (def, None)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in MESSAGE_TABLE.iter().enumerate() {
            for b in &MESSAGE_TABLE[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.status, b.status);
            }
        }
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(lookup_name("pitchbend").unwrap().kind, MessageKind::Pitchbend);
        assert_eq!(lookup_name("activeSense").unwrap().kind, MessageKind::ActiveSense);
        assert!(lookup_name("NoteOn").is_none());
        assert!(lookup_name("quarterFrame").is_none());
    }

    #[test]
    fn test_lookup_status_channel_voice() {
        let (def, channel) = lookup_status(0xB2).unwrap();
        assert_eq!(def.kind, MessageKind::Control);
        assert_eq!(channel, Some(2));

        let (def, channel) = lookup_status(0x9F).unwrap();
        assert_eq!(def.kind, MessageKind::NoteOn);
        assert_eq!(channel, Some(15));
    }

    #[test]
    fn test_lookup_status_system() {
        let (def, channel) = lookup_status(0xF8).unwrap();
        assert_eq!(def.kind, MessageKind::Clock);
        assert_eq!(channel, None);

        for undefined in [0x00, 0x7F, 0xF1, 0xF4, 0xF5, 0xF7, 0xF9, 0xFD] {
            assert!(lookup_status(undefined).is_none(), "{undefined:#04X}");
        }
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(MessageKind::NoteOn.def().payload_len(), Some(2));
        assert_eq!(MessageKind::Program.def().payload_len(), Some(1));
        assert_eq!(MessageKind::Pitchbend.def().payload_len(), Some(2));
        assert_eq!(MessageKind::SongSelect.def().payload_len(), Some(2));
        assert_eq!(MessageKind::Clock.def().payload_len(), Some(0));
        assert_eq!(MessageKind::Sysex.def().payload_len(), None);
    }

    #[test]
    fn test_serde_name_matches_table() {
        for kind in MessageKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_channel_voice_kinds() {
        let channel_voice: Vec<_> = MessageKind::ALL
            .into_iter()
            .filter(|k| k.is_channel_voice())
            .collect();
        assert_eq!(channel_voice.len(), 7);
        assert!(!MessageKind::Sysex.is_channel_voice());
    }
}
