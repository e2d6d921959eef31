// Shared utility functions

pub mod numeric;
