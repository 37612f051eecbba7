//! Graphics channel field table (`SPageFileGraphic`).
//!
//! Per-frame session and race state: lap/sector timing, pit status, flags,
//! MFD tyre-set info, and the per-car coordinate table. Offsets follow the
//! packed struct layout for ACC 1.8.12, where `wchar_t` strings are 2-byte
//! UTF-16 code units and odd-length string fields are followed by 2 bytes of
//! padding to realign the next 4-byte member. The rain-intensity and track
//! grip members between `mfdTyrePressureRR` and `currentTyreSet` occupy bytes
//! 1556..1572 but were never part of the published mapping.
//!
//! `"STATUS "`, `"rainLights "`, and `"wiperLV "` carry a trailing space in
//! the published key; downstream consumers key on the exact string.

use super::Field;
use super::FieldType::{FloatMatrix, Float32, Int32, Int32Array, WideString};

/// `sizeof(SPageFileGraphic)` with 4-byte packing.
pub const GRAPHICS_RECORD_SIZE: usize = 1588;

/// Output key table for the graphics record.
pub const GRAPHICS_FIELDS: &[Field] = &[
    Field { name: "packetID", offset: 0, ty: Int32 },
    Field { name: "STATUS ", offset: 4, ty: Int32 }, // status (AC_STATUS enum)
    Field { name: "session", offset: 8, ty: Int32 }, // AC_SESSION_TYPE enum
    Field { name: "completed laps", offset: 132, ty: Int32 }, // completedLaps
    Field { name: "position", offset: 136, ty: Int32 },
    Field { name: "currentTime", offset: 12, ty: WideString(15) },
    Field { name: "iCurrentTime", offset: 140, ty: Int32 },
    Field { name: "lastTime", offset: 42, ty: WideString(15) },
    Field { name: "iLastTime", offset: 144, ty: Int32 },
    Field { name: "bestTime", offset: 72, ty: WideString(15) },
    Field { name: "iBestTime", offset: 148, ty: Int32 },
    Field { name: "split", offset: 102, ty: WideString(15) },
    Field { name: "sessionTimeLeft", offset: 152, ty: Float32 },
    Field { name: "distanceTraveled", offset: 156, ty: Float32 },
    Field { name: "isInPit", offset: 160, ty: Int32 },
    Field { name: "currentSectorIndex", offset: 164, ty: Int32 },
    Field { name: "lastSectorTime", offset: 168, ty: Int32 },
    Field { name: "numberOfLaps", offset: 172, ty: Int32 },
    Field { name: "tyreCompound", offset: 176, ty: WideString(33) },
    Field { name: "normalizedCarPosition", offset: 248, ty: Float32 },
    Field { name: "carCoordinates", offset: 256, ty: FloatMatrix(60, 3) },
    Field { name: "activeCars", offset: 252, ty: Int32 },
    Field { name: "isInPitLane", offset: 1236, ty: Int32 },
    Field { name: "penaltyTime", offset: 1220, ty: Float32 },
    Field { name: "idealLineOn", offset: 1232, ty: Int32 },
    Field { name: "carID", offset: 976, ty: Int32Array(60) },
    Field { name: "playerCarID", offset: 1216, ty: Int32 },
    Field { name: "surfaceGrip", offset: 1240, ty: Float32 },
    Field { name: "mandatoryPitDone", offset: 1244, ty: Int32 },
    Field { name: "windSpeed", offset: 1248, ty: Float32 },
    Field { name: "windDirection", offset: 1252, ty: Float32 },
    Field { name: "isSetupMenuVisible", offset: 1256, ty: Int32 },
    Field { name: "mainDisplayIndex", offset: 1260, ty: Int32 },
    Field { name: "secondaryDisplayIndex", offset: 1264, ty: Int32 },
    Field { name: "TC", offset: 1268, ty: Int32 },
    Field { name: "TCCut", offset: 1272, ty: Int32 },
    Field { name: "EngineMap", offset: 1276, ty: Int32 },
    Field { name: "ABS", offset: 1280, ty: Int32 },
    Field { name: "fuelXLap", offset: 1284, ty: Float32 },
    Field { name: "rainLights ", offset: 1288, ty: Int32 }, // rainLights
    Field { name: "flashingLights", offset: 1292, ty: Int32 },
    Field { name: "lightsStage", offset: 1296, ty: Int32 },
    Field { name: "exhaustTemperature", offset: 1300, ty: Float32 },
    Field { name: "wiperLV ", offset: 1304, ty: Int32 }, // wiperLV
    Field { name: "DriverStintTotalTimeLeft", offset: 1308, ty: Int32 },
    Field { name: "DriverStintTimeLeft", offset: 1312, ty: Int32 },
    Field { name: "rainTyres", offset: 1316, ty: Int32 },
    Field { name: "sessionIndex", offset: 1320, ty: Int32 },
    Field { name: "usedFuel", offset: 1324, ty: Float32 },
    Field { name: "deltaLapTime", offset: 1328, ty: WideString(15) },
    Field { name: "iDeltaLapTime", offset: 1360, ty: Int32 },
    Field { name: "estimatedLapTime", offset: 1364, ty: WideString(15) },
    Field { name: "iEstimatedLapTime", offset: 1396, ty: Int32 },
    Field { name: "isDeltaPositive", offset: 1400, ty: Int32 },
    Field { name: "iSplit", offset: 1404, ty: Int32 },
    Field { name: "isValidLap", offset: 1408, ty: Int32 },
    Field { name: "fuelEstimatedLaps", offset: 1412, ty: Float32 },
    Field { name: "trackStatus", offset: 1416, ty: WideString(33) },
    Field { name: "missingMandatoryPits", offset: 1484, ty: Int32 },
    Field { name: "Clock", offset: 1488, ty: Float32 },
    Field { name: "directionLightsLeft", offset: 1492, ty: Int32 },
    Field { name: "directionLightsRight", offset: 1496, ty: Int32 },
    Field { name: "GlobalYellow", offset: 1500, ty: Int32 },
    Field { name: "GlobalYellow1", offset: 1504, ty: Int32 },
    Field { name: "GlobalYellow2", offset: 1508, ty: Int32 },
    Field { name: "GlobalYellow3", offset: 1512, ty: Int32 },
    Field { name: "GlobalWhite", offset: 1516, ty: Int32 },
    Field { name: "GlobalGreen", offset: 1520, ty: Int32 },
    Field { name: "GlobalChequered", offset: 1524, ty: Int32 },
    Field { name: "GlobalRed", offset: 1528, ty: Int32 },
    Field { name: "mfdTyreSet", offset: 1532, ty: Int32 },
    Field { name: "mfdFuelToAdd", offset: 1536, ty: Float32 },
    Field { name: "mfdTyrePressureLF", offset: 1540, ty: Float32 },
    Field { name: "mfdTyrePressureRF", offset: 1544, ty: Float32 },
    Field { name: "mfdTyrePressureLR", offset: 1548, ty: Float32 },
    Field { name: "mfdTyrePressureRR", offset: 1552, ty: Float32 },
    Field { name: "currentTyreSet", offset: 1572, ty: Int32 },
    Field { name: "strategyTyreSet", offset: 1576, ty: Int32 },
    Field { name: "gapAhead", offset: 1580, ty: Int32 },
    Field { name: "gapBehind", offset: 1584, ty: Int32 },
    Field { name: "flag", offset: 1224, ty: Int32 },    // AC_FLAG_TYPE enum
    Field { name: "penalty", offset: 1228, ty: Int32 }, // PenaltyShortcut enum
];
