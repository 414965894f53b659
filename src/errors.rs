pub const ERR_INVALID_AMOUNT: &str = "Tip must be greater than zero";
pub const ERR_ZERO_AMOUNT: &str = "Nothing to withdraw";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Amount exceeds balance";
pub const ERR_UNAUTHORIZED: &str = "Caller may not withdraw";
pub const ERR_REENTRANT: &str = "Operation already in progress";
