//! Shared fixtures for the diamond integration tests: a deployed diamond,
//! well-known accounts, and mock receiver contracts.

#![allow(dead_code)]

use std::sync::Arc;

use gemstone_facets::Diamond;
use gemstone_ledger::config::{DiamondConfig, BATCH_RECEIVED_MAGIC, SINGLE_RECEIVED_MAGIC};
use gemstone_ledger::token;
use gemstone_ledger::{
    Address, Amount, Call, Contract, Host, LedgerError, Output, Selector, TokenId,
    TokenReceiver, U256,
};
use parking_lot::Mutex;

// ---------------------------------------------------------------------------
// Accounts & values
// ---------------------------------------------------------------------------

pub fn addr(n: u64) -> Address {
    Address::from_low_u64_be(n)
}

pub fn owner() -> Address {
    addr(0x0_0001)
}

pub fn alice() -> Address {
    addr(0xa11ce)
}

pub fn bob() -> Address {
    addr(0xb0b)
}

pub fn carol() -> Address {
    addr(0xca401)
}

pub fn null() -> Address {
    Address::zero()
}

pub fn id(n: u64) -> TokenId {
    U256::from(n)
}

pub fn amt(n: u64) -> Amount {
    U256::from(n)
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// A host with a freshly deployed diamond owned by [`owner`].
pub struct Env {
    pub host: Host,
    pub diamond: Diamond,
}

impl Env {
    pub fn new() -> Self {
        Self::with_config(DiamondConfig {
            owner: owner(),
            default_uri: "https://gems.example/{id}.json".into(),
            ..DiamondConfig::default()
        })
    }

    pub fn with_config(config: DiamondConfig) -> Self {
        let mut host = Host::new();
        let diamond = Diamond::deploy(&mut host, &config).unwrap();
        host.take_events();
        Self { host, diamond }
    }

    pub fn call(&mut self, sender: Address, call: Call) -> Result<Output, LedgerError> {
        self.diamond.call(&mut self.host, sender, call)
    }

    pub fn balance(&self, account: Address, token: TokenId) -> Amount {
        token::balance_of(&self.host, account, token)
    }

    /// Owner mints `value` of `token` to `to`.
    pub fn mint(&mut self, to: Address, token: TokenId, value: Amount) {
        self.call(
            owner(),
            Call::Mint {
                to,
                id: token,
                value,
                data: Vec::new(),
            },
        )
        .unwrap();
    }

    pub fn transfer(
        &mut self,
        sender: Address,
        from: Address,
        to: Address,
        token: TokenId,
        value: Amount,
    ) -> Result<Output, LedgerError> {
        self.call(
            sender,
            Call::SafeTransferFrom {
                from,
                to,
                id: token,
                value,
                data: Vec::new(),
            },
        )
    }

    pub fn batch_transfer(
        &mut self,
        sender: Address,
        from: Address,
        to: Address,
        ids: Vec<TokenId>,
        values: Vec<Amount>,
    ) -> Result<Output, LedgerError> {
        self.call(
            sender,
            Call::SafeBatchTransferFrom {
                from,
                to,
                ids,
                values,
                data: Vec::new(),
            },
        )
    }

    pub fn approve(&mut self, account: Address, operator: Address) {
        self.call(
            account,
            Call::SetApprovalForAll {
                operator,
                approved: true,
            },
        )
        .unwrap();
    }

    /// Deploys `contract` at `address` and hands back the typed handle.
    pub fn install<C: Contract + 'static>(&mut self, address: Address, contract: C) -> Arc<C> {
        let contract = Arc::new(contract);
        self.host.deploy(address, contract.clone());
        contract
    }
}

// ---------------------------------------------------------------------------
// Receivers
// ---------------------------------------------------------------------------

/// One hook invocation as seen by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub batch: bool,
    pub operator: Address,
    pub from: Address,
    pub ids: Vec<TokenId>,
    pub values: Vec<Amount>,
    pub data: Vec<u8>,
    /// The recorder's own balance of each id at hook time.
    pub balances: Vec<Amount>,
}

/// Accepts everything and records what it saw.
pub struct Recorder {
    pub address: Address,
    pub receipts: Mutex<Vec<Receipt>>,
}

impl Recorder {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            receipts: Mutex::new(Vec::new()),
        }
    }

    pub fn receipts(&self) -> Vec<Receipt> {
        self.receipts.lock().clone()
    }

    fn record(
        &self,
        host: &Host,
        batch: bool,
        operator: Address,
        from: Address,
        ids: &[TokenId],
        values: &[Amount],
        data: &[u8],
    ) {
        let balances = ids
            .iter()
            .map(|id| token::balance_of(host, self.address, *id))
            .collect();
        self.receipts.lock().push(Receipt {
            batch,
            operator,
            from,
            ids: ids.to_vec(),
            values: values.to_vec(),
            data: data.to_vec(),
            balances,
        });
    }
}

impl Contract for Recorder {
    fn as_receiver(&self) -> Option<&dyn TokenReceiver> {
        Some(self)
    }
}

impl TokenReceiver for Recorder {
    fn on_erc1155_received(
        &self,
        host: &mut Host,
        operator: Address,
        from: Address,
        id: TokenId,
        value: Amount,
        data: &[u8],
    ) -> Result<Selector, LedgerError> {
        self.record(host, false, operator, from, &[id], &[value], data);
        Ok(SINGLE_RECEIVED_MAGIC)
    }

    fn on_erc1155_batch_received(
        &self,
        host: &mut Host,
        operator: Address,
        from: Address,
        ids: &[TokenId],
        values: &[Amount],
        data: &[u8],
    ) -> Result<Selector, LedgerError> {
        self.record(host, true, operator, from, ids, values, data);
        Ok(BATCH_RECEIVED_MAGIC)
    }
}

/// How a [`Rejecting`] receiver refuses.
#[derive(Debug, Clone)]
pub enum Refusal {
    WrongMagic,
    Reason(String),
    Silent,
}

/// Refuses every transfer the same way.
pub struct Rejecting(pub Refusal);

impl Rejecting {
    fn refuse(&self) -> Result<Selector, LedgerError> {
        match &self.0 {
            Refusal::WrongMagic => Ok(Selector::from_u32(0xdead_beef)),
            Refusal::Reason(reason) => Err(LedgerError::Revert(reason.clone())),
            Refusal::Silent => Err(LedgerError::EmptyRevert),
        }
    }
}

impl Contract for Rejecting {
    fn as_receiver(&self) -> Option<&dyn TokenReceiver> {
        Some(self)
    }
}

impl TokenReceiver for Rejecting {
    fn on_erc1155_received(
        &self,
        _: &mut Host,
        _: Address,
        _: Address,
        _: TokenId,
        _: Amount,
        _: &[u8],
    ) -> Result<Selector, LedgerError> {
        self.refuse()
    }

    fn on_erc1155_batch_received(
        &self,
        _: &mut Host,
        _: Address,
        _: Address,
        _: &[TokenId],
        _: &[Amount],
        _: &[u8],
    ) -> Result<Selector, LedgerError> {
        self.refuse()
    }
}

/// Code with no receiver hooks.
pub struct Inert;

impl Contract for Inert {}

/// Issues one follow-up call back into the diamond the first time it
/// receives tokens, then accepts.
///
/// With `swallow` set, a failing follow-up is ignored; otherwise its error
/// becomes the hook's error.
pub struct Reentrant {
    pub address: Address,
    pub diamond: Diamond,
    pub swallow: bool,
    pub follow_up: Mutex<Option<Call>>,
    pub outcomes: Mutex<Vec<Result<(), LedgerError>>>,
}

impl Reentrant {
    pub fn new(address: Address, diamond: Diamond, follow_up: Call, swallow: bool) -> Self {
        Self {
            address,
            diamond,
            swallow,
            follow_up: Mutex::new(Some(follow_up)),
            outcomes: Mutex::new(Vec::new()),
        }
    }

    pub fn outcomes(&self) -> Vec<Result<(), LedgerError>> {
        self.outcomes.lock().clone()
    }

    fn react(&self, host: &mut Host, magic: Selector) -> Result<Selector, LedgerError> {
        let follow_up = self.follow_up.lock().take();
        if let Some(call) = follow_up {
            let outcome = self.diamond.call(host, self.address, call).map(|_| ());
            self.outcomes.lock().push(outcome.clone());
            if let Err(e) = outcome {
                if !self.swallow {
                    return Err(e);
                }
            }
        }
        Ok(magic)
    }
}

impl Contract for Reentrant {
    fn as_receiver(&self) -> Option<&dyn TokenReceiver> {
        Some(self)
    }
}

impl TokenReceiver for Reentrant {
    fn on_erc1155_received(
        &self,
        host: &mut Host,
        _: Address,
        _: Address,
        _: TokenId,
        _: Amount,
        _: &[u8],
    ) -> Result<Selector, LedgerError> {
        self.react(host, SINGLE_RECEIVED_MAGIC)
    }

    fn on_erc1155_batch_received(
        &self,
        host: &mut Host,
        _: Address,
        _: Address,
        _: &[TokenId],
        _: &[Amount],
        _: &[u8],
    ) -> Result<Selector, LedgerError> {
        self.react(host, BATCH_RECEIVED_MAGIC)
    }
}

/// Answers every single receipt with a zero-value self-transfer, which
/// triggers its own hook again without end.
pub struct Echo {
    pub address: Address,
    pub diamond: Diamond,
    pub hits: Mutex<usize>,
}

impl Echo {
    pub fn new(address: Address, diamond: Diamond) -> Self {
        Self {
            address,
            diamond,
            hits: Mutex::new(0),
        }
    }
}

impl Contract for Echo {
    fn as_receiver(&self) -> Option<&dyn TokenReceiver> {
        Some(self)
    }
}

impl TokenReceiver for Echo {
    fn on_erc1155_received(
        &self,
        host: &mut Host,
        _: Address,
        _: Address,
        id: TokenId,
        _: Amount,
        _: &[u8],
    ) -> Result<Selector, LedgerError> {
        *self.hits.lock() += 1;
        self.diamond.call(
            host,
            self.address,
            Call::SafeTransferFrom {
                from: self.address,
                to: self.address,
                id,
                value: Amount::zero(),
                data: Vec::new(),
            },
        )?;
        Ok(SINGLE_RECEIVED_MAGIC)
    }

    fn on_erc1155_batch_received(
        &self,
        _: &mut Host,
        _: Address,
        _: Address,
        _: &[TokenId],
        _: &[Amount],
        _: &[u8],
    ) -> Result<Selector, LedgerError> {
        Ok(BATCH_RECEIVED_MAGIC)
    }
}
