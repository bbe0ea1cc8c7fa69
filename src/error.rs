use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Raised by both the admin guard and the owner-only guard; both report
    /// the same reason string.
    Unauthorized = 3,
    InsufficientBalance = 4,
    InvalidAmount = 5,
    ArithmeticError = 6,
    NotFound = 7,
    PriceNotMet = 8,
    UriTooLong = 9,
}

impl Error {
    /// Human-readable reason, matching the revert strings callers expect.
    /// The contract itself only surfaces the numeric code; off-chain callers
    /// map it back through this.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "Already initialized",
            Error::NotInitialized => "Not initialized",
            Error::Unauthorized => "Caller is not admin",
            Error::InsufficientBalance => "Insufficient balance",
            Error::InvalidAmount => "Invalid amount",
            Error::ArithmeticError => "Arithmetic overflow",
            Error::NotFound => "Token not found",
            Error::PriceNotMet => "Payment below price",
            Error::UriTooLong => "URI too long",
        }
    }
}
