//! Pure domain models (Household, RecyclingEvent, Material, RateTable).
//! No I/O and no storage. Only data types and their invariants.

pub mod common;
pub mod event;
pub mod household;
pub mod material;
pub mod points;

pub use common::{Displayable, Scored, Weighed};
pub use event::RecyclingEvent;
pub use household::Household;
pub use material::Material;
pub use points::RateTable;
