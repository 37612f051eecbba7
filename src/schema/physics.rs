//! Physics channel field table (`SPageFilePhysics`).
//!
//! Scalar and per-tyre car state rewritten at the physics tick rate. Offsets
//! follow the packed struct layout: every member is 4 bytes wide, so no
//! padding occurs anywhere in this record.
//!
//! Several output keys differ from the struct member they project (for
//! example `"steer"` reads `steerAngle` and `"damage"` reads `carDamage`);
//! those spellings are the published contract.

use super::Field;
use super::FieldType::{FloatArray, FloatMatrix, Float32, Int32};

/// `sizeof(SPageFilePhysics)` with 4-byte packing.
pub const PHYSICS_RECORD_SIZE: usize = 800;

/// Output key table for the physics record.
///
/// The packet counter is published under both `"packetID"` and `"packet id"`,
/// exactly as downstream consumers have always received it.
pub const PHYSICS_FIELDS: &[Field] = &[
    Field { name: "packetID", offset: 0, ty: Int32 },
    Field { name: "gas", offset: 4, ty: Float32 },
    Field { name: "brake", offset: 8, ty: Float32 },
    Field { name: "camber rad", offset: 168, ty: FloatArray(4) }, // camberRAD
    Field { name: "damage", offset: 224, ty: FloatArray(5) },    // carDamage
    Field { name: "car height", offset: 220, ty: Float32 },      // cgHeight
    Field { name: "drs", offset: 200, ty: Float32 },
    Field { name: "tc", offset: 204, ty: Float32 },
    Field { name: "fuel", offset: 12, ty: Float32 },
    Field { name: "gear", offset: 16, ty: Int32 },
    Field { name: "number of tyres out", offset: 244, ty: Int32 }, // numberOfTyresOut
    Field { name: "packet id", offset: 0, ty: Int32 },
    Field { name: "heading", offset: 208, ty: Float32 },
    Field { name: "pitch", offset: 212, ty: Float32 },
    Field { name: "roll", offset: 216, ty: Float32 },
    Field { name: "rpms", offset: 20, ty: Int32 },
    Field { name: "speed kmh", offset: 28, ty: Float32 }, // speedKmh
    Field { name: "contactPoint", offset: 420, ty: FloatMatrix(4, 3) }, // tyreContactPoint
    Field { name: "contactNormal", offset: 468, ty: FloatMatrix(4, 3) }, // tyreContactNormal
    Field { name: "contactHeading", offset: 516, ty: FloatMatrix(4, 3) }, // tyreContactHeading
    Field { name: "brakeBias", offset: 564, ty: Float32 },
    Field { name: "localVelocity", offset: 568, ty: FloatArray(3) },
    Field { name: "slipRatio", offset: 640, ty: FloatArray(4) },
    Field { name: "slipAngle", offset: 656, ty: FloatArray(4) },
    Field { name: "steer", offset: 24, ty: Float32 }, // steerAngle
    Field { name: "suspensionTravel", offset: 184, ty: FloatArray(4) },
    Field { name: "tyreCoreTemp", offset: 152, ty: FloatArray(4) }, // tyreCoreTemperature
    Field { name: "tyreDirtyLevel", offset: 136, ty: FloatArray(4) },
    Field { name: "tyreWear", offset: 120, ty: FloatArray(4) },
    Field { name: "velocity", offset: 32, ty: FloatArray(3) },
    Field { name: "accG", offset: 44, ty: FloatArray(3) },
    Field { name: "wheelAngularSpeed", offset: 104, ty: FloatArray(4) },
    Field { name: "wheelLoad", offset: 72, ty: FloatArray(4) },
    Field { name: "wheelSlip", offset: 56, ty: FloatArray(4) },
    Field { name: "wheelPressure", offset: 88, ty: FloatArray(4) }, // wheelsPressure
    Field { name: "waterTemp", offset: 712, ty: Float32 },
    Field { name: "brakePressure", offset: 716, ty: FloatArray(4) },
    Field { name: "frontBrakeCompound", offset: 732, ty: Int32 },
    Field { name: "rearBrakeCompound", offset: 736, ty: Int32 },
    Field { name: "padLife", offset: 740, ty: FloatArray(4) },
    Field { name: "discLife", offset: 756, ty: FloatArray(4) },
    Field { name: "ignitionOn", offset: 772, ty: Int32 },
    Field { name: "starterEngineOn", offset: 776, ty: Int32 },
    Field { name: "isEngineRunning", offset: 780, ty: Int32 },
    Field { name: "kerbVibration", offset: 784, ty: Float32 },
    Field { name: "slipVibrations", offset: 788, ty: Float32 },
    Field { name: "gVibrations", offset: 792, ty: Float32 },
    Field { name: "absVibrations", offset: 796, ty: Float32 },
    Field { name: "isAIControlled", offset: 416, ty: Int32 },
    Field { name: "brakeTemp", offset: 348, ty: FloatArray(4) },
    Field { name: "clutch", offset: 364, ty: Float32 },
    Field { name: "pitLimiterOn", offset: 248, ty: Int32 },
    Field { name: "abs", offset: 252, ty: Float32 },
    Field { name: "autoShifterOn", offset: 264, ty: Int32 },
    Field { name: "turboBoost", offset: 276, ty: Float32 },
    Field { name: "airTemp", offset: 288, ty: Float32 },
    Field { name: "roadTemp", offset: 292, ty: Float32 },
    Field { name: "localAngularVel", offset: 296, ty: FloatArray(3) },
    Field { name: "finalFF", offset: 308, ty: Float32 },
];
