//! Device orientation provider
//!
//! Adaptive layouts ask a [`Device`] for the current orientation on every
//! pass instead of reading global state.

use std::cell::Cell;

/// Physical orientation of the display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceOrientation {
    #[default]
    Vertical,
    VerticalUpsideDown,
    HorizontalLeft,
    HorizontalRight,
}

impl DeviceOrientation {
    pub fn is_horizontal(&self) -> bool {
        matches!(
            self,
            DeviceOrientation::HorizontalLeft | DeviceOrientation::HorizontalRight
        )
    }

    pub fn is_vertical(&self) -> bool {
        !self.is_horizontal()
    }
}

/// Source of the current device orientation
pub trait Device {
    fn orientation(&self) -> DeviceOrientation;
}

/// A device whose orientation never changes (desktops)
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedDevice {
    orientation: DeviceOrientation,
}

impl FixedDevice {
    pub fn new(orientation: DeviceOrientation) -> Self {
        Self { orientation }
    }

    /// Desktop displays report a landscape orientation
    pub fn desktop() -> Self {
        Self::new(DeviceOrientation::HorizontalLeft)
    }
}

impl Device for FixedDevice {
    fn orientation(&self) -> DeviceOrientation {
        self.orientation
    }
}

/// A device that can be rotated at runtime, e.g. from a resize handler
#[derive(Debug, Default)]
pub struct SimulatedDevice {
    orientation: Cell<DeviceOrientation>,
}

impl SimulatedDevice {
    pub fn new(orientation: DeviceOrientation) -> Self {
        Self {
            orientation: Cell::new(orientation),
        }
    }

    pub fn rotate(&self, orientation: DeviceOrientation) {
        crate::log!("device rotated to {:?}", orientation);
        self.orientation.set(orientation);
    }
}

impl Device for SimulatedDevice {
    fn orientation(&self) -> DeviceOrientation {
        self.orientation.get()
    }
}
