use serde::{Deserialize, Serialize};

use super::error::ClientError;
use crate::{
    address::{AddressSpace, SubjectName},
    aggregator::{compute_stats, Stats},
    commons::{
        identifier::{Address, KeyIdentifier},
        models::{
            account::{Account, SubjectAccount, VoteRecordAccount},
            signature::Signed,
            transaction::{CommitReceipt, Instruction, Transaction},
        },
        self_signature_manager::IdentityProvider,
    },
    ledger::manager::{LedgerReader, TransactionSubmitter},
    state::{has_voted, VoteStatus},
};

/// Committed state returned after a successful vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub subject: Address,
    pub stats: Stats,
    pub status: VoteStatus,
    pub receipt: CommitReceipt,
}

/// Entry point of the presentation layer. Every write is one signed
/// transaction; the ledger decides whether it commits.
#[derive(Debug, Clone)]
pub struct RatingClient<L: LedgerReader + TransactionSubmitter> {
    ledger: L,
    address_space: AddressSpace,
}

impl<L: LedgerReader + TransactionSubmitter> RatingClient<L> {
    pub fn new(ledger: L, address_space: AddressSpace) -> Self {
        Self {
            ledger,
            address_space,
        }
    }

    pub fn address_space(&self) -> &AddressSpace {
        &self.address_space
    }

    pub async fn create_subject<P: IdentityProvider>(
        &self,
        identifier: &str,
        authority: &P,
    ) -> Result<Address, ClientError> {
        let name = SubjectName::new(identifier)?;
        let subject = self.address_space.subject_address(&name)?.address;
        self.submit(
            Instruction::CreateSubject {
                subject,
                identifier: name.as_str().to_owned(),
            },
            authority,
        )
        .await?;
        Ok(subject)
    }

    /// Like `create_subject` but an existing subject counts as success.
    pub async fn ensure_subject<P: IdentityProvider>(
        &self,
        identifier: &str,
        authority: &P,
    ) -> Result<Address, ClientError> {
        match self.create_subject(identifier, authority).await {
            Ok(subject) => Ok(subject),
            Err(ClientError::AlreadyExists) => {
                let name = SubjectName::new(identifier)?;
                Ok(self.address_space.subject_address(&name)?.address)
            }
            Err(error) => Err(error),
        }
    }

    /// Casts a first vote or flips an existing one. Repeating the current
    /// opinion fails with `NoOpChange` and submits nothing.
    pub async fn vote<P: IdentityProvider>(
        &self,
        identifier: &str,
        voter: &P,
        approve: bool,
    ) -> Result<VoteReceipt, ClientError> {
        let name = SubjectName::new(identifier)?;
        let subject = self.address_space.subject_address(&name)?.address;
        let vote_record = self
            .address_space
            .vote_record_address(&subject, &voter.identity())?
            .address;
        let current = has_voted(self.read_vote_record(&vote_record).await?.as_ref());
        let instruction = match current.approve {
            None => Instruction::CastVote {
                subject,
                vote_record,
                approve,
            },
            Some(previous) if previous == approve => return Err(ClientError::NoOpChange),
            Some(_) => Instruction::ChangeVote {
                subject,
                vote_record,
                new_approve: approve,
            },
        };
        let receipt = self.submit(instruction, voter).await?;

        let account = self.read_subject(&subject).await?.ok_or_else(|| {
            ClientError::InvariantViolation("committed subject is missing".to_owned())
        })?;
        let status = has_voted(self.read_vote_record(&vote_record).await?.as_ref());
        Ok(VoteReceipt {
            subject,
            stats: compute_stats(&account),
            status,
            receipt,
        })
    }

    /// Zeroed stats when the subject was never created. A malformed name can
    /// never have been created, so it reads as zero too.
    pub async fn get_stats(&self, identifier: &str) -> Result<Stats, ClientError> {
        let Ok(name) = SubjectName::new(identifier) else {
            return Ok(Stats::empty(identifier.trim()));
        };
        let subject = self.address_space.subject_address(&name)?.address;
        Ok(match self.read_subject(&subject).await? {
            Some(account) => compute_stats(&account),
            None => Stats::empty(name.as_str()),
        })
    }

    pub async fn has_voted(
        &self,
        identifier: &str,
        voter: &KeyIdentifier,
    ) -> Result<VoteStatus, ClientError> {
        let Ok(name) = SubjectName::new(identifier) else {
            return Ok(VoteStatus::no_vote());
        };
        let subject = self.address_space.subject_address(&name)?.address;
        let vote_record = self
            .address_space
            .vote_record_address(&subject, voter)?
            .address;
        Ok(has_voted(self.read_vote_record(&vote_record).await?.as_ref()))
    }

    /// Up to `quantity` subjects in address order, starting after `from`.
    pub async fn list_subjects(
        &self,
        from: Option<Address>,
        quantity: usize,
    ) -> Result<Vec<(Address, Stats)>, ClientError> {
        let page_size = isize::try_from(quantity).unwrap_or(isize::MAX);
        let mut cursor = from;
        let mut subjects = Vec::new();
        while subjects.len() < quantity {
            let page = self.ledger.list_accounts(cursor, page_size).await?;
            let exhausted = page.len() < quantity;
            for (address, data) in page {
                cursor = Some(address);
                if let Account::Subject(account) = Account::decode(&data)? {
                    subjects.push((address, compute_stats(&account)));
                    if subjects.len() == quantity {
                        break;
                    }
                }
            }
            if exhausted {
                break;
            }
        }
        Ok(subjects)
    }

    async fn submit<P: IdentityProvider>(
        &self,
        instruction: Instruction,
        signer: &P,
    ) -> Result<CommitReceipt, ClientError> {
        let transaction = Transaction::new(instruction, signer.identity());
        let signature = signer.sign(&transaction)?;
        log::debug!(
            "Submitting {:?} on {} signed by {}",
            transaction.instruction,
            transaction.instruction.subject(),
            transaction.signer
        );
        Ok(self
            .ledger
            .submit(Signed::<Transaction>::new(transaction, signature))
            .await?)
    }

    async fn read_subject(&self, address: &Address) -> Result<Option<SubjectAccount>, ClientError> {
        match self.ledger.get_account(address).await? {
            Some(data) => Ok(Some(Account::decode(&data)?.into_subject()?)),
            None => Ok(None),
        }
    }

    async fn read_vote_record(
        &self,
        address: &Address,
    ) -> Result<Option<VoteRecordAccount>, ClientError> {
        match self.ledger.get_account(address).await? {
            Some(data) => Ok(Some(Account::decode(&data)?.into_vote_record()?)),
            None => Ok(None),
        }
    }
}
