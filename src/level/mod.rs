//! Host song model: difficulties, derived timing, tempo reconciliation.

mod beatmap;
mod reconcile;
mod song;
mod timing;

pub use beatmap::*;
pub use reconcile::*;
pub use song::*;
pub use timing::*;
