//! Generic record decoding driven by a channel field table.
//!
//! Decoding is a pure function of `(bytes, schema)`: for any buffer of the
//! record's size it always produces exactly one entry per declared field.
//! There is no semantic validation: a torn write that lands implausible
//! values is passed through as-is, matching the simulator's protocol.

use std::collections::HashMap;

use tracing::trace;

use crate::schema::{Channel, ChannelSchema, Field, FieldType};
use crate::types::{Matrix, Value};

/// Decoded record: output key to value.
pub type FieldMap = HashMap<&'static str, Value>;

/// Decode a raw record buffer according to a channel field table.
///
/// The buffer length is the contract with the shared region that produced it
/// and is asserted rather than re-checked per call; reads past a short buffer
/// degrade to zeroed values instead of panicking.
pub fn decode(bytes: &[u8], schema: &ChannelSchema) -> FieldMap {
    debug_assert_eq!(bytes.len(), schema.record_size, "{} record size mismatch", schema.channel);
    trace!(channel = %schema.channel, fields = schema.fields.len(), "decoding record");

    let mut map = FieldMap::with_capacity(schema.fields.len());
    for field in schema.fields {
        map.insert(field.name, decode_field(bytes, field));
    }
    map
}

/// Decode one channel's record by name.
pub fn decode_channel(channel: Channel, bytes: &[u8]) -> FieldMap {
    decode(bytes, channel.schema())
}

fn decode_field(bytes: &[u8], field: &Field) -> Value {
    let at = field.offset;
    match field.ty {
        FieldType::Int32 => Value::Int(read_i32(bytes, at)),
        FieldType::Float32 => Value::Float(read_f32(bytes, at)),
        FieldType::Bool32 => Value::Bool(read_i32(bytes, at) != 0),
        FieldType::WideString(chars) => Value::Str(read_wide_str(bytes, at, chars)),
        FieldType::Int32Array(n) => {
            Value::IntArray((0..n).map(|i| read_i32(bytes, at + i * 4)).collect())
        }
        FieldType::FloatArray(n) => {
            Value::FloatArray((0..n).map(|i| read_f32(bytes, at + i * 4)).collect())
        }
        FieldType::FloatMatrix(rows, cols) => {
            let values = (0..rows * cols).map(|i| read_f32(bytes, at + i * 4)).collect();
            match Matrix::from_values(rows, cols, values) {
                Some(matrix) => Value::FloatMatrix(matrix),
                // Unreachable for the collect above; keep decode total anyway.
                None => Value::FloatArray(Vec::new()),
            }
        }
    }
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    let mut buf = [0u8; 4];
    if let Some(src) = bytes.get(offset..offset + 4) {
        buf.copy_from_slice(src);
    }
    i32::from_le_bytes(buf)
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    let mut buf = [0u8; 4];
    if let Some(src) = bytes.get(offset..offset + 4) {
        buf.copy_from_slice(src);
    }
    f32::from_le_bytes(buf)
}

/// Extract a fixed-width UTF-16LE string, truncated at the first NUL code
/// unit. Unpaired surrogates are replaced rather than failing, since the
/// buffer may be mid-rewrite.
fn read_wide_str(bytes: &[u8], offset: usize, width_chars: usize) -> String {
    let mut units = Vec::with_capacity(width_chars);
    for i in 0..width_chars {
        let unit_offset = offset + i * 2;
        let Some(src) = bytes.get(unit_offset..unit_offset + 2) else {
            break;
        };
        let unit = u16::from_le_bytes([src[0], src[1]]);
        if unit == 0 {
            break;
        }
        units.push(unit);
    }
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, FieldType};

    fn schema_of(fields: &'static [Field], record_size: usize) -> ChannelSchema {
        ChannelSchema { channel: Channel::Physics, record_size, fields }
    }

    #[test]
    fn scalar_extraction_is_little_endian() {
        static FIELDS: &[Field] = &[
            Field { name: "i", offset: 0, ty: FieldType::Int32 },
            Field { name: "f", offset: 4, ty: FieldType::Float32 },
            Field { name: "b", offset: 8, ty: FieldType::Bool32 },
        ];
        let mut bytes = vec![0u8; 12];
        bytes[0..4].copy_from_slice(&(-42i32).to_le_bytes());
        bytes[4..8].copy_from_slice(&271.5f32.to_le_bytes());
        bytes[8..12].copy_from_slice(&1i32.to_le_bytes());

        let map = decode(&bytes, &schema_of(FIELDS, 12));
        assert_eq!(map["i"], Value::Int(-42));
        assert_eq!(map["f"], Value::Float(271.5));
        assert_eq!(map["b"], Value::Bool(true));
    }

    #[test]
    fn wide_string_truncates_at_nul() {
        static FIELDS: &[Field] = &[Field { name: "s", offset: 0, ty: FieldType::WideString(8) }];
        let mut bytes = vec![0u8; 16];
        for (i, unit) in "GT3\0XX".encode_utf16().enumerate() {
            bytes[i * 2..i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
        }

        let map = decode(&bytes, &schema_of(FIELDS, 16));
        assert_eq!(map["s"], Value::Str("GT3".to_string()));
    }

    #[test]
    fn wide_string_without_nul_uses_full_width() {
        static FIELDS: &[Field] = &[Field { name: "s", offset: 0, ty: FieldType::WideString(4) }];
        let mut bytes = vec![0u8; 8];
        for (i, unit) in "ABCDEFGH".encode_utf16().enumerate().take(4) {
            bytes[i * 2..i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
        }

        let map = decode(&bytes, &schema_of(FIELDS, 8));
        assert_eq!(map["s"], Value::Str("ABCD".to_string()));
    }

    #[test]
    fn wide_string_is_lossy_for_unpaired_surrogates() {
        static FIELDS: &[Field] = &[Field { name: "s", offset: 0, ty: FieldType::WideString(2) }];
        // Lone high surrogate followed by NUL.
        let mut bytes = vec![0u8; 4];
        bytes[0..2].copy_from_slice(&0xD800u16.to_le_bytes());

        let map = decode(&bytes, &schema_of(FIELDS, 4));
        assert_eq!(map["s"], Value::Str("\u{FFFD}".to_string()));
    }

    #[test]
    fn arrays_and_matrices_preserve_order_and_shape() {
        static FIELDS: &[Field] = &[
            Field { name: "ids", offset: 0, ty: FieldType::Int32Array(3) },
            Field { name: "m", offset: 12, ty: FieldType::FloatMatrix(2, 2) },
        ];
        let mut bytes = vec![0u8; 28];
        for (i, v) in [7i32, 8, 9].iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&v.to_le_bytes());
        }
        for (i, v) in [1.0f32, 2.0, 3.0, 4.0].iter().enumerate() {
            let start = 12 + i * 4;
            bytes[start..start + 4].copy_from_slice(&v.to_le_bytes());
        }

        let map = decode(&bytes, &schema_of(FIELDS, 28));
        assert_eq!(map["ids"], Value::IntArray(vec![7, 8, 9]));
        let matrix = map["m"].as_matrix().unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.get(1, 0), Some(3.0));
        assert_eq!(matrix.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn decode_emits_one_entry_per_field() {
        for channel in Channel::ALL {
            let bytes = vec![0u8; channel.record_size()];
            let map = decode_channel(channel, &bytes);
            assert_eq!(map.len(), channel.schema().field_count());
        }
    }
}
