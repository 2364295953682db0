//! Utility modules for the batch converter.

mod plural;

pub use plural::plural_count;
