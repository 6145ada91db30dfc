pub mod amount_utils;
pub mod ratio_utils;
