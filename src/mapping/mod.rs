//! Mapping between values and gesture positions
//!
//! Converts values to normalized gesture positions and back, generates tick
//! marks, quantizes to steps and classifies values against safe zones.

mod arc;
mod exponential;
mod linear;
mod mapper;
mod quantize;
mod safe_zone;
mod ticks;

pub use arc::ArcMapper;
pub use exponential::ExponentialMapper;
pub use linear::LinearMapper;
pub use mapper::{Mapper, ValueMapper};
pub use quantize::{step_decimals, StepGrid};
pub use safe_zone::{classify, is_safe, tick_is_safe, SafeZone, ZoneState};
pub use ticks::{Tick, TickModel};
