use std::fmt;

/// Heart rate in beats per minute, as reported by the sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct HeartRate(i32);

impl HeartRate {
    pub fn new(bpm: i32) -> Self {
        Self(bpm)
    }

    pub fn inner(&self) -> i32 {
        self.0
    }
}

impl From<i32> for HeartRate {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<HeartRate> for i32 {
    fn from(value: HeartRate) -> Self {
        value.inner()
    }
}

impl fmt::Display for HeartRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bpm", self.0)
    }
}
