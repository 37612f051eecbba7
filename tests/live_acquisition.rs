//! Shared-memory acquisition tests.
//!
//! These run against real Windows named mappings. Acquisition is
//! create-or-open, so they pass with or without the simulator running; when
//! ACC is absent the pages decode to their zero values.

#![cfg(windows)]

use paddock::{Channel, SharedRegion, TelemetryError, TelemetrySession};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn session_acquires_and_reads_all_channels() {
    init_tracing();
    let mut session = TelemetrySession::new();
    session.init_physics().expect("physics acquisition");
    session.init_graphics().expect("graphics acquisition");
    session.init_static().expect("static acquisition");

    for channel in Channel::ALL {
        assert!(session.is_ready(channel));
        let data = session.read_channel(channel).expect("ready channel read");
        assert_eq!(data.len(), channel.schema().field_count());
    }
}

#[test]
fn acquisition_failure_is_reported_and_channel_stays_queryable() {
    init_tracing();
    // Hold a mapping too small for the second request; the view mapping step
    // must fail cleanly.
    let _holder = SharedRegion::acquire("Local\\paddock_it_collision", 1024)
        .expect("fresh mapping");
    let collision = SharedRegion::acquire("Local\\paddock_it_collision", 8 << 20);
    assert!(collision.is_err());

    // A channel that never initialized is an observable unready state, not a
    // crash: reads keep reporting NotReady.
    let session = TelemetrySession::new();
    for _ in 0..2 {
        match session.read_channel(Channel::Physics) {
            Err(TelemetryError::NotReady { channel }) => assert_eq!(channel, Channel::Physics),
            other => panic!("expected NotReady, got {other:?}"),
        }
    }
}

#[test]
fn regions_of_each_channel_match_record_sizes() {
    for channel in Channel::ALL {
        let region = SharedRegion::acquire(channel.object_name(), channel.record_size())
            .expect("create-or-open channel page");
        assert_eq!(region.size(), channel.record_size());
        assert_eq!(region.bytes().len(), channel.record_size());
    }
}

#[test]
fn dropped_session_can_be_reacquired() {
    {
        let mut session = TelemetrySession::new();
        session.init_static().unwrap();
    }
    // Regions were released on drop; a new session starts unready and can
    // acquire again.
    let mut session = TelemetrySession::new();
    assert!(!session.is_ready(Channel::Static));
    session.init_static().unwrap();
    assert!(session.is_ready(Channel::Static));
}
