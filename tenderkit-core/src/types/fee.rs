use serde::{Deserialize, Serialize};

/// A denominated amount. Amounts are decimal strings on the wire, matching
/// how the chain serializes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub amount: String,
    pub denom: String,
}

impl Coin {
    pub fn new(amount: impl ToString, denom: impl Into<String>) -> Self {
        Self { amount: amount.to_string(), denom: denom.into() }
    }
}

/// Transaction fee: a gas limit plus zero or more coins. An empty `amount`
/// is a valid fee and is still emitted in the canonical form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

impl Fee {
    pub fn new(amount: Vec<Coin>, gas: impl ToString) -> Self {
        Self { amount, gas: gas.to_string() }
    }

    /// A fee carrying only a gas limit.
    pub fn gas_only(gas: impl ToString) -> Self {
        Self::new(Vec::new(), gas)
    }
}
