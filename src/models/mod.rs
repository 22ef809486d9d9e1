//! Record model for near-Earth close approaches.
//!
//! Two entity shapes:
//!
//! - [`Body`] - one physical object, unique per name, owning its events
//! - [`ApproachEvent`] - one dated close-approach record
//!
//! Bodies are constructed from a validated [`BodyFields`] struct only; raw
//! source rows never reach a constructor.

mod approach;
mod body;

pub use approach::ApproachEvent;
pub use body::{Body, BodyFields};
