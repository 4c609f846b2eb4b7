use crate::commons::{
    identifier::Address,
    models::{
        ledger_entry::LedgerEntry,
        signature::Signed,
        transaction::{CommitReceipt, Transaction},
    },
};

pub mod errors;
pub(crate) mod ledger;
pub mod manager;

use errors::{LedgerError, TransactionError, TransportError};

#[derive(Debug, Clone)]
pub enum LedgerCommand {
    Submit(Signed<Transaction>),
    GetAccount(Address),
    ListAccounts {
        from: Option<Address>,
        quantity: isize,
    },
    GetLogEntries {
        from_sn: u64,
        quantity: usize,
    },
    VerifyIntegrity,
}

#[derive(Debug, Clone)]
pub enum LedgerResponse {
    Submit(Result<CommitReceipt, TransactionError>),
    GetAccount(Result<Option<Vec<u8>>, TransportError>),
    ListAccounts(Result<Vec<(Address, Vec<u8>)>, TransportError>),
    GetLogEntries(Result<Vec<LedgerEntry>, TransportError>),
    VerifyIntegrity(Result<u64, LedgerError>),
}
