//! Token Ledger State & Operations
//!
//! The ledger is an explicit state object: the host constructs one per
//! deployed instance and routes every sequenced transaction through it.
//! The host guarantees each call runs to completion before the next begins,
//! so no internal locking is needed; the ledger's obligation is that every
//! failing call leaves state exactly as it found it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use preserve_types::{Amount, Principal};

use crate::errors::{LedgerError, LedgerResult};

/// Fungible token ledger: per-principal balances plus global supply.
///
/// Balances that reach zero are removed from the map; absent entries read
/// as zero. BTreeMap keeps iteration and serialization order deterministic
/// across nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLedger {
    /// Account balances. Entries are always non-zero.
    balances: BTreeMap<Principal, Amount>,
    /// Total supply in circulation. Increases only via mint.
    total_supply: Amount,
}

impl TokenLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // MINT
    // ========================================================================

    /// Mint `amount` new tokens to `recipient`.
    ///
    /// No caller restriction is applied at this layer; admin gating is the
    /// integrator's policy decision.
    ///
    /// # Errors
    ///
    /// - `Overflow` if the recipient balance or total supply would exceed
    ///   the representable range. State is untouched on failure.
    pub fn mint(&mut self, recipient: Principal, amount: Amount) -> LedgerResult<()> {
        if amount == 0 {
            // Keep the zero-balances-absent canonical form.
            return Ok(());
        }

        let balance = self.balance_of(&recipient);
        let new_balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(recipient, new_balance);
        self.total_supply = new_supply;

        debug!(recipient = %recipient, amount, total_supply = self.total_supply, "minted");
        Ok(())
    }

    // ========================================================================
    // TRANSFER
    // ========================================================================

    /// Move `amount` tokens from `sender` to `recipient`.
    ///
    /// All checks run before any mutation: a failing transfer never leaves
    /// a partial debit. A self-transfer is a no-op under the same balance
    /// precondition.
    ///
    /// # Errors
    ///
    /// - `InsufficientBalance` if `balance(sender) < amount`
    /// - `Overflow` if the recipient balance would exceed the representable
    ///   range
    pub fn transfer(
        &mut self,
        sender: Principal,
        recipient: Principal,
        amount: Amount,
    ) -> LedgerResult<()> {
        let sender_balance = self.balance_of(&sender);
        if sender_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                have: sender_balance,
                need: amount,
            });
        }

        if sender == recipient || amount == 0 {
            return Ok(());
        }

        let new_sender_balance = sender_balance - amount;
        let new_recipient_balance = self
            .balance_of(&recipient)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        if new_sender_balance == 0 {
            self.balances.remove(&sender);
        } else {
            self.balances.insert(sender, new_sender_balance);
        }
        self.balances.insert(recipient, new_recipient_balance);

        debug!(sender = %sender, recipient = %recipient, amount, "transferred");
        Ok(())
    }

    // ========================================================================
    // READ OPERATIONS
    // ========================================================================

    /// Get the balance of an account (0 for accounts never credited)
    pub fn balance_of(&self, account: &Principal) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Get the total supply in circulation
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Number of accounts holding a non-zero balance
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Audit check: total supply equals the sum of all balances.
    ///
    /// Holds after every operation sequence; exposed so hosts can verify
    /// snapshots.
    pub fn is_consistent(&self) -> bool {
        let mut sum: Amount = 0;
        for balance in self.balances.values() {
            match sum.checked_add(*balance) {
                Some(s) => sum = s,
                None => return false,
            }
        }
        sum == self.total_supply
    }
}
