//! Static channel field table (`SPageFileStatic`).
//!
//! Session-invariant metadata: identifiers, vehicle limits, and assist
//! settings, read once per session. The record layout reserves bytes for
//! members the published mapping never exposed (maxTorque at 404, maxPower at
//! 408, suspensionMaxTravel/tyreRadius at 420..452, trackConfiguration at
//! 524, carSkin at 604, and others); the offsets below account for them.
//!
//! The `"smVersion"` key historically projected the `acVersion` member at
//! offset 30 (the original mapping wrote the key twice and the second write
//! won); that is the contract consumers received and it is kept as-is.

use super::Field;
use super::FieldType::{Float32, Int32, WideString};

/// `sizeof(SPageFileStatic)` with 4-byte packing.
pub const STATIC_RECORD_SIZE: usize = 820;

/// Output key table for the static record.
pub const STATIC_FIELDS: &[Field] = &[
    Field { name: "smVersion", offset: 30, ty: WideString(15) }, // acVersion, see module docs
    Field { name: "numberOfSessions", offset: 60, ty: Int32 },
    Field { name: "numCars", offset: 64, ty: Int32 },
    Field { name: "carModel", offset: 68, ty: WideString(33) },
    Field { name: "track", offset: 134, ty: WideString(33) },
    Field { name: "playerName", offset: 200, ty: WideString(33) },
    Field { name: "playerSurname", offset: 266, ty: WideString(33) },
    Field { name: "playerNick", offset: 332, ty: WideString(33) },
    Field { name: "sectorCount", offset: 400, ty: Int32 },
    Field { name: "maxRpm", offset: 412, ty: Int32 },
    Field { name: "maxFuel", offset: 416, ty: Float32 },
    Field { name: "penaltiesEnabled", offset: 464, ty: Int32 },
    Field { name: "aidFuelRate", offset: 468, ty: Float32 },
    Field { name: "aidTireRate", offset: 472, ty: Float32 },
    Field { name: "aidMechanicalDamage", offset: 476, ty: Float32 },
    Field { name: "aidAllowTyreBlankets", offset: 480, ty: Int32 },
    Field { name: "aidStability", offset: 484, ty: Float32 },
    Field { name: "aidAutoClutch", offset: 488, ty: Int32 },
    Field { name: "aidAutoBlip", offset: 492, ty: Int32 },
    Field { name: "PitWindowStart", offset: 676, ty: Int32 },
    Field { name: "PitWindowEnd", offset: 680, ty: Int32 },
    Field { name: "isOnline", offset: 684, ty: Int32 },
    Field { name: "dryTyresName", offset: 688, ty: WideString(33) },
    Field { name: "wetTyresName", offset: 754, ty: WideString(33) },
];
