//! Telemetry session owning the three channel regions.
//!
//! A [`TelemetrySession`] is an explicit instance rather than process-wide
//! state: multiple sessions can coexist in one process (tests rely on this),
//! and dropping a session releases every acquired region. Channels are fully
//! independent: one channel failing to acquire leaves the others usable,
//! because the simulator creates its pages only once it is running.

#[cfg(windows)]
use tracing::{debug, warn};

use crate::decode::{FieldMap, decode};
use crate::schema::{Channel, ChannelSchema};
use crate::{Result, TelemetryError};

#[cfg(windows)]
use crate::shm::SharedRegion;

struct ChannelSlot {
    schema: &'static ChannelSchema,
    #[cfg(windows)]
    region: Option<SharedRegion>,
}

impl ChannelSlot {
    fn new(channel: Channel) -> Self {
        Self {
            schema: channel.schema(),
            #[cfg(windows)]
            region: None,
        }
    }

    fn mapped_bytes(&self) -> Option<&[u8]> {
        #[cfg(windows)]
        {
            self.region.as_ref().map(|region| region.bytes())
        }
        #[cfg(not(windows))]
        {
            None
        }
    }
}

/// Handle to the three ACC telemetry channels.
///
/// `init_*` acquires a channel's shared memory; acquisition failure is
/// non-fatal and retryable by calling init again (the simulator may simply
/// not be running yet). Reads never block: they snapshot whatever bytes are
/// currently resident, tearing included.
pub struct TelemetrySession {
    physics: ChannelSlot,
    graphics: ChannelSlot,
    statics: ChannelSlot,
}

impl TelemetrySession {
    /// New session with no channel acquired.
    pub fn new() -> Self {
        Self {
            physics: ChannelSlot::new(Channel::Physics),
            graphics: ChannelSlot::new(Channel::Graphics),
            statics: ChannelSlot::new(Channel::Static),
        }
    }

    fn slot(&self, channel: Channel) -> &ChannelSlot {
        match channel {
            Channel::Physics => &self.physics,
            Channel::Graphics => &self.graphics,
            Channel::Static => &self.statics,
        }
    }

    #[cfg(windows)]
    fn slot_mut(&mut self, channel: Channel) -> &mut ChannelSlot {
        match channel {
            Channel::Physics => &mut self.physics,
            Channel::Graphics => &mut self.graphics,
            Channel::Static => &mut self.statics,
        }
    }

    /// Acquire the channel's shared memory region.
    ///
    /// Idempotent: an already-acquired channel returns `Ok` immediately, and
    /// a failed acquisition can be retried later. Failure leaves the channel
    /// unready without affecting the others.
    pub fn init_channel(&mut self, channel: Channel) -> Result<()> {
        #[cfg(windows)]
        {
            let slot = self.slot_mut(channel);
            if slot.region.is_some() {
                debug!(%channel, "channel already acquired");
                return Ok(());
            }
            match SharedRegion::acquire(channel.object_name(), channel.record_size()) {
                Ok(region) => {
                    debug!(%channel, size = region.size(), "channel acquired");
                    slot.region = Some(region);
                    Ok(())
                }
                Err(failure) => {
                    warn!(
                        %channel,
                        operation = failure.operation,
                        error = %failure.source,
                        "channel acquisition failed, channel stays unready"
                    );
                    Err(TelemetryError::acquisition_failed_with_source(
                        channel,
                        failure.operation,
                        failure.source,
                    ))
                }
            }
        }
        #[cfg(not(windows))]
        {
            Err(TelemetryError::unsupported_platform(
                format!("{channel} channel acquisition"),
                "windows",
            ))
        }
    }

    /// Whether the channel's region has been acquired.
    pub fn is_ready(&self, channel: Channel) -> bool {
        self.slot(channel).mapped_bytes().is_some()
    }

    /// Decode the channel's current record.
    ///
    /// Fails with [`TelemetryError::NotReady`] if the channel was never
    /// successfully initialized. Otherwise always succeeds with one entry per
    /// declared field, even while the simulator is mid-write.
    pub fn read_channel(&self, channel: Channel) -> Result<FieldMap> {
        let slot = self.slot(channel);
        let bytes = slot.mapped_bytes().ok_or(TelemetryError::NotReady { channel })?;
        Ok(decode(bytes, slot.schema))
    }

    /// Release the channel's region, unmapping and closing it.
    ///
    /// No-op on an unacquired channel. The channel can be re-initialized
    /// afterwards.
    pub fn release_channel(&mut self, channel: Channel) {
        #[cfg(windows)]
        {
            self.slot_mut(channel).region = None;
        }
        #[cfg(not(windows))]
        {
            let _ = channel;
        }
    }

    /// Acquire the physics channel.
    pub fn init_physics(&mut self) -> Result<()> {
        self.init_channel(Channel::Physics)
    }

    /// Acquire the graphics channel.
    pub fn init_graphics(&mut self) -> Result<()> {
        self.init_channel(Channel::Graphics)
    }

    /// Acquire the static channel.
    pub fn init_static(&mut self) -> Result<()> {
        self.init_channel(Channel::Static)
    }

    /// Current physics record as a field mapping.
    pub fn physics_data(&self) -> Result<FieldMap> {
        self.read_channel(Channel::Physics)
    }

    /// Current graphics record as a field mapping.
    pub fn graphics_data(&self) -> Result<FieldMap> {
        self.read_channel(Channel::Graphics)
    }

    /// Current static record as a field mapping.
    pub fn static_data(&self) -> Result<FieldMap> {
        self.read_channel(Channel::Static)
    }
}

impl Default for TelemetrySession {
    fn default() -> Self {
        Self::new()
    }
}
