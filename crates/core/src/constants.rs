/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Serialized tag for one-time deposit plans
pub const PLAN_TYPE_ONE_TIME: &str = "one_time";

/// Serialized tag for monthly deposit plans
pub const PLAN_TYPE_MONTHLY: &str = "monthly";
