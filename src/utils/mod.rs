// Small numeric and time helpers shared across modules
pub mod maths_utils;
pub mod time_utils;
