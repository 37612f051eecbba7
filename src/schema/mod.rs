//! Channel field tables describing the simulator's record layouts.
//!
//! ACC publishes three packed C structs (`#pragma pack(4)`, little-endian,
//! `wchar_t` = 2 bytes) and rewrites them in place at its own cadence. Instead
//! of reinterpreting the buffer through a Rust struct per channel, each layout
//! is an explicit table of `(name, offset, type)` entries consumed by one
//! generic decode routine. The tables are data, so they can be validated for
//! internal consistency and tested against fixture byte arrays directly.
//!
//! Field name strings are the wire contract with downstream consumers and are
//! preserved exactly as historically published, including trailing spaces in
//! some graphics keys and the physics record exposing its packet counter under
//! two spellings. Do not "fix" them here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, TelemetryError};

mod graphics;
mod physics;
mod statics;

pub use graphics::{GRAPHICS_FIELDS, GRAPHICS_RECORD_SIZE};
pub use physics::{PHYSICS_FIELDS, PHYSICS_RECORD_SIZE};
pub use statics::{STATIC_FIELDS, STATIC_RECORD_SIZE};

/// One of the three independent telemetry streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Per-physics-tick car state, rewritten at the physics rate.
    Physics,
    /// Per-frame session and race state.
    Graphics,
    /// Session-invariant metadata, typically read once per session.
    Static,
}

impl Channel {
    /// All channels, in the order the simulator documents them.
    pub const ALL: [Channel; 3] = [Channel::Physics, Channel::Graphics, Channel::Static];

    /// OS-level shared memory object name. Must match the simulator exactly.
    pub fn object_name(&self) -> &'static str {
        match self {
            Channel::Physics => "Local\\acpmf_physics",
            Channel::Graphics => "Local\\acpmf_graphics",
            Channel::Static => "Local\\acpmf_static",
        }
    }

    /// Exact byte size of this channel's record.
    pub fn record_size(&self) -> usize {
        self.schema().record_size
    }

    /// Field table for this channel.
    pub fn schema(&self) -> &'static ChannelSchema {
        match self {
            Channel::Physics => &PHYSICS_SCHEMA,
            Channel::Graphics => &GRAPHICS_SCHEMA,
            Channel::Static => &STATIC_SCHEMA,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Physics => "physics",
            Channel::Graphics => "graphics",
            Channel::Static => "static",
        };
        f.write_str(name)
    }
}

/// Wire type of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    /// 32-bit signed integer.
    Int32,
    /// 32-bit IEEE float.
    Float32,
    /// 32-bit integer interpreted as a boolean (nonzero = true).
    Bool32,
    /// Fixed-width UTF-16LE string of the given width in code units,
    /// truncated at the first NUL.
    WideString(usize),
    /// Fixed-size array of 32-bit signed integers.
    Int32Array(usize),
    /// Fixed-size array of 32-bit floats.
    FloatArray(usize),
    /// Row-major `float[rows][cols]` matrix.
    FloatMatrix(usize, usize),
}

impl FieldType {
    /// Size in bytes this field occupies in the record.
    pub const fn byte_len(&self) -> usize {
        match *self {
            FieldType::Int32 | FieldType::Float32 | FieldType::Bool32 => 4,
            FieldType::WideString(chars) => chars * 2,
            FieldType::Int32Array(n) | FieldType::FloatArray(n) => n * 4,
            FieldType::FloatMatrix(rows, cols) => rows * cols * 4,
        }
    }
}

/// One entry of a channel field table: a stable output key projected from a
/// fixed byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Output key, unique within a channel.
    pub name: &'static str,
    /// Byte offset within the record.
    pub offset: usize,
    /// Wire type at that offset.
    pub ty: FieldType,
}

/// The complete decode description for one channel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChannelSchema {
    /// Channel this table belongs to.
    pub channel: Channel,
    /// Exact `sizeof` of the simulator's record struct.
    pub record_size: usize,
    /// Declared fields; decode emits exactly one entry per field.
    pub fields: &'static [Field],
}

/// Physics channel schema (`SPageFilePhysics`).
pub static PHYSICS_SCHEMA: ChannelSchema = ChannelSchema {
    channel: Channel::Physics,
    record_size: PHYSICS_RECORD_SIZE,
    fields: PHYSICS_FIELDS,
};

/// Graphics channel schema (`SPageFileGraphic`).
pub static GRAPHICS_SCHEMA: ChannelSchema = ChannelSchema {
    channel: Channel::Graphics,
    record_size: GRAPHICS_RECORD_SIZE,
    fields: GRAPHICS_FIELDS,
};

/// Static channel schema (`SPageFileStatic`).
pub static STATIC_SCHEMA: ChannelSchema = ChannelSchema {
    channel: Channel::Static,
    record_size: STATIC_RECORD_SIZE,
    fields: STATIC_FIELDS,
};

impl ChannelSchema {
    /// Validate the table for internal consistency: every field must lie
    /// entirely within the record.
    pub fn validate(&self) -> Result<()> {
        for field in self.fields {
            let end = field.offset + field.ty.byte_len();
            if end > self.record_size {
                return Err(TelemetryError::Schema {
                    details: format!(
                        "field '{}' in {} table ends at byte {} beyond record size {}",
                        field.name, self.channel, end, self.record_size
                    ),
                });
            }
        }
        Ok(())
    }

    /// Field lookup by output key.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
