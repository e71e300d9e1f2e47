//! Background work: delayed channel deletion and the periodic cooldown sweep.

pub mod cooldown_sweep;
pub mod deletion;
