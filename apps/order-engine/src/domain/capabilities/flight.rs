//! Flight capability.
//!
//! Every [`Bird`] has a name; only birds that can actually fly implement
//! [`Flyable`].
//!
//! ```compile_fail
//! use order_engine::domain::capabilities::{Ostrich, launch};
//!
//! // Ostrich does not implement Flyable.
//! launch(&Ostrich::default());
//! ```
//!
//! ```
//! use order_engine::domain::capabilities::{Sparrow, launch};
//!
//! let altitude = launch(&Sparrow::default());
//! assert!(altitude > 0);
//! ```

/// Behavior shared by every bird.
pub trait Bird {
    /// Species name.
    fn name(&self) -> &'static str;

    /// The flight capability, when the species has it.
    fn as_flyable(&self) -> Option<&dyn Flyable> {
        None
    }
}

/// Ability to fly. Implemented only by species that can.
pub trait Flyable {
    /// Take off and report the cruising altitude in meters.
    fn fly(&self) -> u32;
}

/// A small bird that flies.
#[derive(Debug, Clone, Copy)]
pub struct Sparrow {
    cruising_altitude_m: u32,
}

impl Default for Sparrow {
    fn default() -> Self {
        Self {
            cruising_altitude_m: 50,
        }
    }
}

impl Bird for Sparrow {
    fn name(&self) -> &'static str {
        "sparrow"
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }
}

impl Flyable for Sparrow {
    fn fly(&self) -> u32 {
        self.cruising_altitude_m
    }
}

/// A flightless bird.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ostrich;

impl Bird for Ostrich {
    fn name(&self) -> &'static str {
        "ostrich"
    }
}

/// Fly any bird that has the capability.
pub fn launch<F: Flyable + ?Sized>(flyer: &F) -> u32 {
    flyer.fly()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparrow_flies_through_generic_bound() {
        assert_eq!(launch(&Sparrow::default()), 50);
    }

    #[test]
    fn flock_exposes_capability_only_where_supported() {
        let flock: Vec<Box<dyn Bird>> = vec![Box::new(Sparrow::default()), Box::new(Ostrich)];

        let flyers: Vec<&str> = flock
            .iter()
            .filter(|bird| bird.as_flyable().is_some())
            .map(|bird| bird.name())
            .collect();

        assert_eq!(flyers, vec!["sparrow"]);
    }

    #[test]
    fn every_flyable_in_flock_succeeds() {
        let flock: Vec<Box<dyn Bird>> = vec![Box::new(Sparrow::default()), Box::new(Ostrich)];

        let altitudes: Vec<u32> = flock
            .iter()
            .filter_map(|bird| bird.as_flyable().map(launch::<dyn Flyable>))
            .collect();

        assert_eq!(altitudes, vec![50]);
    }
}
