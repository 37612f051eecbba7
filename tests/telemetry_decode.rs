//! End-to-end decode tests against synthetic records.
//!
//! These exercise the published field tables the way the simulator's writer
//! would: known values placed at declared offsets, decoded back through the
//! generic routine.

use std::collections::HashSet;

use proptest::prelude::*;

use paddock::fixture::RecordFixture;
use paddock::{Channel, Value, decode_channel};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn offset(channel: Channel, name: &str) -> usize {
    channel.schema().field(name).expect("declared field").offset
}

#[test]
fn key_set_exactly_matches_declared_table() {
    init_tracing();
    for channel in Channel::ALL {
        let map = decode_channel(channel, RecordFixture::new(channel).bytes());
        let decoded: HashSet<&str> = map.keys().copied().collect();
        let declared: HashSet<&str> = channel.schema().fields.iter().map(|f| f.name).collect();
        assert_eq!(decoded, declared, "{channel} key set drifted from its table");
    }
}

#[test]
fn static_record_scenario() {
    let mut record = RecordFixture::new(Channel::Static);
    record
        .put_i32(offset(Channel::Static, "numCars"), 24)
        .put_wide_str(offset(Channel::Static, "carModel"), 33, "Audi_R8_LMS_2016")
        .put_i32(offset(Channel::Static, "maxRpm"), 9500)
        .put_f32(offset(Channel::Static, "maxFuel"), 120.0)
        .put_wide_str(offset(Channel::Static, "track"), 33, "monza");

    let data = decode_channel(Channel::Static, record.bytes());
    assert_eq!(data["numCars"], Value::Int(24));
    assert_eq!(data["carModel"], Value::Str("Audi_R8_LMS_2016".into()));
    assert_eq!(data["maxRpm"], Value::Int(9500));
    assert_eq!(data["maxFuel"], Value::Float(120.0));
    assert_eq!(data["track"], Value::Str("monza".into()));
    // Untouched fields still decode, to their zero values.
    assert_eq!(data["sectorCount"], Value::Int(0));
    assert_eq!(data["playerNick"], Value::Str(String::new()));
}

#[test]
fn physics_contact_point_matrix_scenario() {
    let rows =
        [[1.5f32, 2.5, 3.5], [4.5, 5.5, 6.5], [7.5, 8.5, 9.5], [10.5, 11.5, 12.5]];
    let mut record = RecordFixture::new(Channel::Physics);
    record.put_f32_matrix(offset(Channel::Physics, "contactPoint"), &rows);

    let data = decode_channel(Channel::Physics, record.bytes());
    let matrix = data["contactPoint"].as_matrix().expect("4x3 matrix field");
    assert_eq!(matrix.rows(), 4);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.get(2, 1), Some(8.5));
    assert_eq!(
        matrix.values(),
        &[1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5, 9.5, 10.5, 11.5, 12.5]
    );
    assert_eq!(matrix.row(3), Some(&[10.5, 11.5, 12.5][..]));
}

#[test]
fn physics_scalars_and_wheel_arrays_round_trip() {
    let mut record = RecordFixture::new(Channel::Physics);
    record
        .put_i32(offset(Channel::Physics, "packetID"), 88_421)
        .put_f32(offset(Channel::Physics, "gas"), 0.85)
        .put_i32(offset(Channel::Physics, "gear"), 4)
        .put_i32(offset(Channel::Physics, "rpms"), 7200)
        .put_f32(offset(Channel::Physics, "speed kmh"), 213.4)
        .put_f32_slice(offset(Channel::Physics, "wheelPressure"), &[27.4, 27.6, 26.9, 27.1])
        .put_f32_slice(offset(Channel::Physics, "damage"), &[0.0, 0.1, 0.0, 0.0, 0.2]);

    let data = decode_channel(Channel::Physics, record.bytes());
    assert_eq!(data["gas"], Value::Float(0.85));
    assert_eq!(data["gear"], Value::Int(4));
    assert_eq!(data["rpms"], Value::Int(7200));
    assert_eq!(data["speed kmh"], Value::Float(213.4));
    assert_eq!(data["wheelPressure"], Value::FloatArray(vec![27.4, 27.6, 26.9, 27.1]));
    assert_eq!(data["damage"], Value::FloatArray(vec![0.0, 0.1, 0.0, 0.0, 0.2]));

    // Both published spellings project the same packet counter.
    assert_eq!(data["packetID"], Value::Int(88_421));
    assert_eq!(data["packet id"], Value::Int(88_421));
}

#[test]
fn graphics_record_scenario() {
    let mut record = RecordFixture::new(Channel::Graphics);
    record
        .put_i32(offset(Channel::Graphics, "STATUS "), 2)
        .put_i32(offset(Channel::Graphics, "position"), 3)
        .put_wide_str(offset(Channel::Graphics, "currentTime"), 15, "1:43.207")
        .put_wide_str(offset(Channel::Graphics, "tyreCompound"), 33, "dry_compound")
        .put_i32(offset(Channel::Graphics, "rainLights "), 1)
        .put_i32(offset(Channel::Graphics, "wiperLV "), 2)
        .put_i32(offset(Channel::Graphics, "gapBehind"), 1250)
        .put_i32_slice(offset(Channel::Graphics, "carID"), &[11, 4, 87])
        .put_f32_matrix(
            offset(Channel::Graphics, "carCoordinates"),
            &[[100.0f32, 0.5, -220.0], [104.2, 0.6, -219.0]],
        );

    let data = decode_channel(Channel::Graphics, record.bytes());
    assert_eq!(data["STATUS "], Value::Int(2));
    assert_eq!(data["position"], Value::Int(3));
    assert_eq!(data["currentTime"], Value::Str("1:43.207".into()));
    assert_eq!(data["tyreCompound"], Value::Str("dry_compound".into()));
    assert_eq!(data["rainLights "], Value::Int(1));
    assert_eq!(data["wiperLV "], Value::Int(2));
    assert_eq!(data["gapBehind"], Value::Int(1250));

    let car_ids = data["carID"].as_i32_slice().expect("60-entry id array");
    assert_eq!(car_ids.len(), 60);
    assert_eq!(&car_ids[..3], &[11, 4, 87]);
    assert_eq!(car_ids[3], 0);

    let coords = data["carCoordinates"].as_matrix().expect("60x3 matrix");
    assert_eq!(coords.rows(), 60);
    assert_eq!(coords.cols(), 3);
    assert_eq!(coords.row(1), Some(&[104.2, 0.6, -219.0][..]));
    assert_eq!(coords.get(59, 2), Some(0.0));
}

#[test]
fn decode_is_idempotent_without_writes() {
    let mut record = RecordFixture::new(Channel::Graphics);
    record.put_i32(offset(Channel::Graphics, "packetID"), 7).put_f32(
        offset(Channel::Graphics, "sessionTimeLeft"),
        1800.0,
    );

    let first = decode_channel(Channel::Graphics, record.bytes());
    let second = decode_channel(Channel::Graphics, record.bytes());
    assert_eq!(first, second);
}

proptest! {
    // Decode is total: whatever bytes sit in a correctly-sized buffer, every
    // declared field comes back and nothing else does. Torn writes are just
    // another arbitrary buffer.
    #[test]
    fn physics_decode_is_total(bytes in prop::collection::vec(any::<u8>(), 800)) {
        let map = decode_channel(Channel::Physics, &bytes);
        prop_assert_eq!(map.len(), Channel::Physics.schema().field_count());
    }

    #[test]
    fn graphics_decode_is_total(bytes in prop::collection::vec(any::<u8>(), 1588)) {
        let map = decode_channel(Channel::Graphics, &bytes);
        prop_assert_eq!(map.len(), Channel::Graphics.schema().field_count());
    }

    #[test]
    fn static_decode_is_total(bytes in prop::collection::vec(any::<u8>(), 820)) {
        let map = decode_channel(Channel::Static, &bytes);
        prop_assert_eq!(map.len(), Channel::Static.schema().field_count());
    }
}
