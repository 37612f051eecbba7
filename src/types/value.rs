//! Decoded telemetry value representation.

use serde::{Deserialize, Serialize};

/// Fixed-shape 2D float matrix stored in row-major order.
///
/// The simulator publishes several per-tyre and per-car fields as C arrays of
/// the form `float[rows][cols]` (for example the 4x3 tyre contact matrices and
/// the 60x3 car coordinate table). The declared shape is preserved instead of
/// flattening so `(row, col)` addressing stays meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl Matrix {
    /// Create a matrix from row-major values.
    ///
    /// Returns `None` if `values.len() != rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f32>) -> Option<Self> {
        if values.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, values })
    }

    /// Number of rows in the declared shape.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the declared shape.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`, or `None` when out of shape.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    /// One row as a contiguous slice.
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.values.get(start..start + self.cols)
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Runtime value type holding any decoded telemetry field.
///
/// This is the statically-checkable form of the dynamically-typed mapping the
/// external binding layer consumes; conversion to a host-language structure
/// happens at that boundary (the serde derives are the hook), never inside the
/// decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i32),
    Float(f32),
    Bool(bool),
    Str(String),
    IntArray(Vec<i32>),
    FloatArray(Vec<f32>),
    FloatMatrix(Matrix),
}

impl Value {
    /// Scalar integer accessor.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Scalar float accessor.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean accessor.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// String accessor.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Integer array accessor.
    pub fn as_i32_slice(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    /// Float array accessor.
    pub fn as_f32_slice(&self) -> Option<&[f32]> {
        match self {
            Value::FloatArray(v) => Some(v),
            _ => None,
        }
    }

    /// Matrix accessor.
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::FloatMatrix(v) => Some(v),
            _ => None,
        }
    }
}
