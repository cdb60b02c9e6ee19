use std::fmt;

// =============================================================================
// Milestone 1: The implementation side (devices)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Tv,
    Radio,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Tv => f.write_str("TV"),
            DeviceKind::Radio => f.write_str("RADIO"),
        }
    }
}

pub const MAX_VOLUME: u8 = 100;

pub trait Device {
    fn kind(&self) -> DeviceKind;
    fn is_switched_on(&self) -> bool;
    fn switch_on(&mut self);
    fn switch_off(&mut self);
    fn volume(&self) -> u8;
    fn set_volume(&mut self, volume: u8);
    fn channel(&self) -> u32;
    fn set_channel(&mut self, channel: u32);
}

#[derive(Debug, Default)]
struct DeviceState {
    on: bool,
    volume: u8,
    channel: u32,
}

#[derive(Debug, Default)]
pub struct Tv {
    state: DeviceState,
}

#[derive(Debug, Default)]
pub struct Radio {
    state: DeviceState,
}

macro_rules! impl_device {
    ($ty:ty, $kind:expr) => {
        impl Device for $ty {
            fn kind(&self) -> DeviceKind {
                $kind
            }

            fn is_switched_on(&self) -> bool {
                self.state.on
            }

            fn switch_on(&mut self) {
                self.state.on = true;
            }

            fn switch_off(&mut self) {
                self.state.on = false;
            }

            fn volume(&self) -> u8 {
                self.state.volume
            }

            fn set_volume(&mut self, volume: u8) {
                self.state.volume = volume.min(MAX_VOLUME);
            }

            fn channel(&self) -> u32 {
                self.state.channel
            }

            fn set_channel(&mut self, channel: u32) {
                self.state.channel = channel;
            }
        }
    };
}

impl_device!(Tv, DeviceKind::Tv);
impl_device!(Radio, DeviceKind::Radio);

// =============================================================================
// Milestone 2: The abstraction side (remotes)
// =============================================================================

/// Works with any device through the `Device` trait; each call returns the
/// line the remote would announce.
pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }

    pub fn toggle_power(&mut self) -> String {
        if self.device.is_switched_on() {
            self.device.switch_off();
        } else {
            self.device.switch_on();
        }
        format!("Toggle for device: {}", self.device.kind())
    }

    pub fn volume_up(&mut self) -> String {
        let volume = self.device.volume().saturating_add(1);
        self.device.set_volume(volume);
        format!("Volume up for device: {}", self.device.kind())
    }

    pub fn volume_down(&mut self) -> String {
        let volume = self.device.volume().saturating_sub(1);
        self.device.set_volume(volume);
        format!("Volume down for device: {}", self.device.kind())
    }

    pub fn channel_up(&mut self) -> String {
        let channel = self.device.channel().saturating_add(1);
        self.device.set_channel(channel);
        format!("Channel up for device: {}", self.device.kind())
    }

    pub fn channel_down(&mut self) -> String {
        let channel = self.device.channel().saturating_sub(1);
        self.device.set_channel(channel);
        format!("Channel down for device: {}", self.device.kind())
    }

    pub fn mute(&mut self) {
        self.device.set_volume(0);
    }
}

/// Extends the abstraction without touching any device.
pub struct AdvancedRemote {
    remote: RemoteControl,
}

impl AdvancedRemote {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self {
            remote: RemoteControl::new(device),
        }
    }

    pub fn remote(&mut self) -> &mut RemoteControl {
        &mut self.remote
    }

    pub fn mute(&mut self) -> String {
        self.remote.mute();
        format!("Muted device: {}", self.remote.device().kind())
    }

    pub fn jump_to(&mut self, channel: u32) -> String {
        self.remote.device.set_channel(channel);
        format!("Channel {channel} for device: {}", self.remote.device().kind())
    }
}

fn main() {
    let mut tv_remote = RemoteControl::new(Box::new(Tv::default()));
    println!("{}", tv_remote.toggle_power());
    println!("{}", tv_remote.volume_up());

    let mut radio_remote = AdvancedRemote::new(Box::new(Radio::default()));
    println!("{}", radio_remote.remote().toggle_power());
    println!("{}", radio_remote.remote().volume_up());
    println!("{}", radio_remote.jump_to(101));
    println!("{}", radio_remote.mute());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_power() {
        let mut remote = RemoteControl::new(Box::new(Tv::default()));
        assert!(!remote.device().is_switched_on());

        assert_eq!(remote.toggle_power(), "Toggle for device: TV");
        assert!(remote.device().is_switched_on());

        remote.toggle_power();
        assert!(!remote.device().is_switched_on());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut remote = RemoteControl::new(Box::new(Radio::default()));
        assert_eq!(remote.volume_down(), "Volume down for device: RADIO");
        assert_eq!(remote.device().volume(), 0);

        for _ in 0..150 {
            remote.volume_up();
        }
        assert_eq!(remote.device().volume(), MAX_VOLUME);
    }

    #[test]
    fn test_channels() {
        let mut remote = RemoteControl::new(Box::new(Tv::default()));
        remote.channel_up();
        remote.channel_up();
        remote.channel_down();
        assert_eq!(remote.device().channel(), 1);

        remote.channel_down();
        remote.channel_down();
        assert_eq!(remote.device().channel(), 0);
    }

    #[test]
    fn test_advanced_remote_works_with_any_device() {
        for device in [Box::new(Tv::default()) as Box<dyn Device>, Box::new(Radio::default())] {
            let mut remote = AdvancedRemote::new(device);
            remote.remote().volume_up();
            assert!(remote.mute().starts_with("Muted device"));
            assert_eq!(remote.remote().device().volume(), 0);
            remote.jump_to(7);
            assert_eq!(remote.remote().device().channel(), 7);
        }
    }
}
