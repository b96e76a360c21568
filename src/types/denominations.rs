// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Named denominations
//!
//! Each family is measured in its smallest unit, so every member converts into the
//! base unit and coarser members convert into finer ones.

/// Bitcoin denominations, in satoshis
pub mod bitcoin {
    use typenum::{U1, U100, U100000, U100000000};

    use crate::types::scale::Scale;

    /// The base unit
    pub type Satoshi = Scale<U1>;

    /// One microbitcoin, 100 satoshis
    pub type Bit = Scale<U100>;

    /// 100,000 satoshis
    pub type MilliBitcoin = Scale<U100000>;

    /// 100,000,000 satoshis
    pub type Bitcoin = Scale<U100000000>;
}

/// Ether denominations, in wei
///
/// Solving the bounds for [`Ether`] walks the bits of 10^18, which needs more than the
/// default recursion limit. Crates using it should raise the limit:
///
/// ```
/// #![recursion_limit = "512"]
///
/// use monetary::alloy_primitives::U256;
/// use monetary::denominations::ethereum::{Ether, Wei};
/// use monetary::MonetaryAmount;
///
/// let balance = MonetaryAmount::<U256, Ether>::new(U256::from(2u64));
/// let wei = balance.convert::<Wei>();
/// assert_eq!(wei.count(), U256::from(2_000_000_000_000_000_000u128));
/// ```
pub mod ethereum {
    use typenum::{U1, U1000000000, U1000000000000000000};

    use crate::types::scale::Scale;

    /// The base unit
    pub type Wei = Scale<U1>;

    /// 10^9 wei, the usual unit for gas prices
    pub type Gwei = Scale<U1000000000>;

    /// 10^18 wei
    pub type Ether = Scale<U1000000000000000000>;
}

/// Decimal fiat denominations, in cents
pub mod fiat {
    use typenum::{U1, U10, U100};

    use crate::types::scale::Scale;

    /// A tenth of a cent
    pub type Mill = Scale<U1, U10>;

    /// The base unit
    pub type Cent = Scale<U1>;

    /// 10 cents
    pub type Dime = Scale<U10>;

    /// 100 cents
    pub type Dollar = Scale<U100>;
}
