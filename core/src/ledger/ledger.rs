use crate::{
    address::{AddressSpace, SubjectName},
    commons::{
        identifier::{derive::digest::DigestDerivator, Address, Derivable, DigestIdentifier},
        models::{
            account::{Account, SubjectAccount, VoteRecordAccount},
            ledger_entry::LedgerEntry,
            notification::Notification,
            signature::Signed,
            transaction::{CommitReceipt, Instruction, Transaction},
            HashId,
        },
    },
    database::{DatabaseCollection, DB},
    state,
};

use super::errors::{LedgerError, TransactionError, TransportError};

const INTEGRITY_CHUNK: usize = 256;

/// Accounts written by one transaction plus the notification it produces.
struct Effects {
    writes: Vec<(Address, Account)>,
    created_accounts: u64,
    notification: Notification,
}

pub(crate) struct Ledger<C: DatabaseCollection> {
    repo_access: DB<C>,
    address_space: AddressSpace,
    digest_derivator: DigestDerivator,
    max_accounts: u64,
    account_count: u64,
    next_sn: u64,
    last_hash: DigestIdentifier,
}

impl<C: DatabaseCollection> Ledger<C> {
    pub fn new(
        repo_access: DB<C>,
        address_space: AddressSpace,
        digest_derivator: DigestDerivator,
        max_accounts: u64,
    ) -> Self {
        Self {
            repo_access,
            address_space,
            digest_derivator,
            max_accounts,
            account_count: 0,
            next_sn: 0,
            last_hash: DigestIdentifier::default(),
        }
    }

    /// Restores the counters and the head of the log from storage.
    pub fn init(&mut self) -> Result<(), LedgerError> {
        self.account_count = self.repo_access.count_accounts();
        match self
            .repo_access
            .get_last_log_entry()
            .map_err(|e| LedgerError::DatabaseError(e.to_string()))?
        {
            Some(entry) => {
                self.next_sn = entry.sn + 1;
                self.last_hash = entry
                    .hash_id(self.digest_derivator)
                    .map_err(|e| LedgerError::HashError(e.to_string()))?;
            }
            None => {
                self.next_sn = 0;
                self.last_hash = DigestIdentifier::default();
            }
        }
        log::info!(
            "Ledger ready with {} accounts and {} log entries",
            self.account_count,
            self.next_sn
        );
        Ok(())
    }

    pub fn submit(
        &mut self,
        transaction: Signed<Transaction>,
    ) -> Result<(CommitReceipt, Notification), TransactionError> {
        transaction
            .verify()
            .map_err(|e| TransactionError::AuthorizationFailed(e.to_string()))?;
        let transaction_id = transaction
            .content
            .hash_id(self.digest_derivator)
            .map_err(|e| TransactionError::InvariantViolation(e.to_string()))?;
        if self
            .repo_access
            .is_committed(&transaction_id)
            .map_err(|e| TransactionError::TransportFailure(e.to_string()))?
        {
            log::warn!("Replay of committed transaction {}", transaction_id);
            return Err(TransactionError::Replayed);
        }
        let effects = self.apply(&transaction.content)?;
        if self.max_accounts != 0
            && self.account_count + effects.created_accounts > self.max_accounts
        {
            return Err(TransactionError::InsufficientResources);
        }
        let entry = LedgerEntry {
            sn: self.next_sn,
            transaction_id: transaction_id.clone(),
            previous_hash: self.last_hash.clone(),
            instruction: transaction.content.instruction.clone(),
            signer: transaction.content.signer.clone(),
        };
        let entry_hash = entry
            .hash_id(self.digest_derivator)
            .map_err(|e| TransactionError::InvariantViolation(e.to_string()))?;
        let mut writes = Vec::with_capacity(effects.writes.len());
        for (address, account) in effects.writes {
            writes.push((address, account.encode()?));
        }
        self.repo_access
            .commit(writes, &entry)
            .map_err(|e| TransactionError::TransportFailure(e.to_string()))?;
        self.account_count += effects.created_accounts;
        self.next_sn += 1;
        self.last_hash = entry_hash;
        Ok((
            CommitReceipt {
                transaction_id,
                sn: entry.sn,
            },
            effects.notification,
        ))
    }

    fn apply(&self, transaction: &Transaction) -> Result<Effects, TransactionError> {
        let signer = &transaction.signer;
        match &transaction.instruction {
            Instruction::CreateSubject {
                subject,
                identifier,
            } => {
                let name = SubjectName::new(identifier)?;
                if name.as_str() != identifier {
                    return Err(TransactionError::InvalidIdentifier(
                        "identifier is not in canonical form".to_owned(),
                    ));
                }
                self.check_address(subject, self.address_space.subject_address(&name)?.address)?;
                let existing = self.load_subject(subject)?;
                let created = state::create_subject(existing.as_ref(), &name)?;
                Ok(Effects {
                    writes: vec![(*subject, Account::Subject(created))],
                    created_accounts: 1,
                    notification: Notification::SubjectCreated {
                        subject: subject.to_str(),
                        identifier: name.to_string(),
                    },
                })
            }
            Instruction::CastVote {
                subject,
                vote_record,
                approve,
            } => {
                let current = self
                    .load_subject(subject)?
                    .ok_or(TransactionError::SubjectNotFound)?;
                self.check_address(
                    vote_record,
                    self.address_space
                        .vote_record_address(subject, signer)?
                        .address,
                )?;
                let existing = self.load_vote_record(vote_record)?;
                let (updated, record) =
                    state::cast_vote(&current, existing.as_ref(), *subject, signer, *approve)?;
                Ok(Effects {
                    writes: vec![
                        (*subject, Account::Subject(updated)),
                        (*vote_record, Account::VoteRecord(record)),
                    ],
                    created_accounts: 1,
                    notification: Notification::VoteCast {
                        subject: subject.to_str(),
                        voter: signer.to_str(),
                        approve: *approve,
                    },
                })
            }
            Instruction::ChangeVote {
                subject,
                vote_record,
                new_approve,
            } => {
                let current = self
                    .load_subject(subject)?
                    .ok_or(TransactionError::SubjectNotFound)?;
                self.check_address(
                    vote_record,
                    self.address_space
                        .vote_record_address(subject, signer)?
                        .address,
                )?;
                let existing = self.load_vote_record(vote_record)?;
                let (updated, record) = state::change_vote(
                    &current,
                    existing.as_ref(),
                    subject,
                    signer,
                    *new_approve,
                )?;
                Ok(Effects {
                    writes: vec![
                        (*subject, Account::Subject(updated)),
                        (*vote_record, Account::VoteRecord(record)),
                    ],
                    created_accounts: 0,
                    notification: Notification::VoteChanged {
                        subject: subject.to_str(),
                        voter: signer.to_str(),
                        approve: *new_approve,
                    },
                })
            }
        }
    }

    fn check_address(&self, given: &Address, expected: Address) -> Result<(), TransactionError> {
        if *given != expected {
            log::warn!("Address mismatch: got {}, expected {}", given, expected);
            return Err(TransactionError::AddressMismatch);
        }
        Ok(())
    }

    fn load_subject(&self, address: &Address) -> Result<Option<SubjectAccount>, TransactionError> {
        match self.get_account(address)? {
            Some(data) => Ok(Some(Account::decode(&data)?.into_subject()?)),
            None => Ok(None),
        }
    }

    fn load_vote_record(
        &self,
        address: &Address,
    ) -> Result<Option<VoteRecordAccount>, TransactionError> {
        match self.get_account(address)? {
            Some(data) => Ok(Some(Account::decode(&data)?.into_vote_record()?)),
            None => Ok(None),
        }
    }

    pub fn get_account(&self, address: &Address) -> Result<Option<Vec<u8>>, TransportError> {
        self.repo_access
            .get_account(address)
            .map_err(|e| TransportError::DatabaseError(e.to_string()))
    }

    pub fn list_accounts(
        &self,
        from: Option<Address>,
        quantity: isize,
    ) -> Result<Vec<(Address, Vec<u8>)>, TransportError> {
        self.repo_access
            .get_accounts(from, quantity)
            .map_err(|e| TransportError::DatabaseError(e.to_string()))
    }

    pub fn get_log_entries(
        &self,
        from_sn: u64,
        quantity: usize,
    ) -> Result<Vec<LedgerEntry>, TransportError> {
        self.repo_access
            .get_log_entries(from_sn, quantity)
            .map_err(|e| TransportError::DatabaseError(e.to_string()))
    }

    /// Walks the whole log checking sequence numbers and the hash chain.
    /// Returns the number of verified entries.
    pub fn verify_integrity(&self) -> Result<u64, LedgerError> {
        let mut previous_hash = DigestIdentifier::default();
        let mut expected_sn = 0u64;
        loop {
            let entries = self
                .repo_access
                .get_log_entries(expected_sn, INTEGRITY_CHUNK)
                .map_err(|e| LedgerError::DatabaseError(e.to_string()))?;
            if entries.is_empty() {
                break;
            }
            for entry in entries {
                if entry.sn != expected_sn || entry.previous_hash != previous_hash {
                    log::error!("Ledger log broken at entry {}", expected_sn);
                    return Err(LedgerError::BrokenChain(expected_sn));
                }
                previous_hash = entry
                    .hash_id(self.digest_derivator)
                    .map_err(|e| LedgerError::HashError(e.to_string()))?;
                expected_sn += 1;
            }
        }
        if expected_sn != self.next_sn || previous_hash != self.last_hash {
            return Err(LedgerError::BrokenChain(expected_sn));
        }
        Ok(expected_sn)
    }
}
