//! Synthetic record buffers for exercising the decoder without the simulator.
//!
//! [`RecordFixture`] builds a correctly-sized record and writes known values
//! at declared offsets, the same way the simulator's writer would. It backs
//! this crate's own tests and is public so downstream consumers can test
//! their telemetry handling against deterministic data.

use crate::schema::Channel;

/// Builder for a synthetic record buffer of a channel's exact size.
#[derive(Debug, Clone)]
pub struct RecordFixture {
    bytes: Vec<u8>,
}

impl RecordFixture {
    /// Zeroed record of the channel's exact size.
    pub fn new(channel: Channel) -> Self {
        Self { bytes: vec![0; channel.record_size()] }
    }

    /// Zeroed buffer of an arbitrary size, for decoder-internal tests.
    pub fn with_size(size: usize) -> Self {
        Self { bytes: vec![0; size] }
    }

    /// Write a 32-bit signed integer at `offset`.
    pub fn put_i32(&mut self, offset: usize, value: i32) -> &mut Self {
        self.put(offset, &value.to_le_bytes())
    }

    /// Write a 32-bit float at `offset`.
    pub fn put_f32(&mut self, offset: usize, value: f32) -> &mut Self {
        self.put(offset, &value.to_le_bytes())
    }

    /// Write consecutive 32-bit integers starting at `offset`.
    pub fn put_i32_slice(&mut self, offset: usize, values: &[i32]) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            self.put_i32(offset + i * 4, *value);
        }
        self
    }

    /// Write consecutive 32-bit floats starting at `offset`.
    pub fn put_f32_slice(&mut self, offset: usize, values: &[f32]) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            self.put_f32(offset + i * 4, *value);
        }
        self
    }

    /// Write a row-major float matrix starting at `offset`.
    pub fn put_f32_matrix<const C: usize>(&mut self, offset: usize, rows: &[[f32; C]]) -> &mut Self {
        for (r, row) in rows.iter().enumerate() {
            self.put_f32_slice(offset + r * C * 4, row);
        }
        self
    }

    /// Write a fixed-width UTF-16LE string at `offset`, NUL-padded to
    /// `width_chars` code units the way the simulator publishes its strings.
    /// Input longer than the width is truncated.
    pub fn put_wide_str(&mut self, offset: usize, width_chars: usize, value: &str) -> &mut Self {
        let units: Vec<u16> = value.encode_utf16().take(width_chars).collect();
        for (i, unit) in units.iter().enumerate() {
            self.put(offset + i * 2, &unit.to_le_bytes());
        }
        // Remaining width stays zeroed, which is the NUL padding.
        self
    }

    /// The record bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the fixture and take the buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn put(&mut self, offset: usize, src: &[u8]) -> &mut Self {
        if let Some(dst) = self.bytes.get_mut(offset..offset + src.len()) {
            dst.copy_from_slice(src);
        }
        self
    }
}
