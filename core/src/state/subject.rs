use super::error::StateError;
use crate::address::SubjectName;
use crate::commons::models::account::SubjectAccount;

/// `Absent -> Created`. Counters start at zero.
pub fn create_subject(
    existing: Option<&SubjectAccount>,
    identifier: &SubjectName,
) -> Result<SubjectAccount, StateError> {
    if existing.is_some() {
        return Err(StateError::AlreadyExists);
    }
    Ok(SubjectAccount {
        identifier: identifier.as_str().to_owned(),
        approve_count: 0,
        disapprove_count: 0,
    })
}

impl SubjectAccount {
    pub fn record_approve(&mut self) -> Result<(), StateError> {
        self.approve_count = self
            .approve_count
            .checked_add(1)
            .ok_or(StateError::Overflow)?;
        Ok(())
    }

    pub fn record_disapprove(&mut self) -> Result<(), StateError> {
        self.disapprove_count = self
            .disapprove_count
            .checked_add(1)
            .ok_or(StateError::Overflow)?;
        Ok(())
    }

    pub fn reverse_approve(&mut self) -> Result<(), StateError> {
        self.approve_count = self
            .approve_count
            .checked_sub(1)
            .ok_or(StateError::Underflow)?;
        Ok(())
    }

    pub fn reverse_disapprove(&mut self) -> Result<(), StateError> {
        self.disapprove_count = self
            .disapprove_count
            .checked_sub(1)
            .ok_or(StateError::Underflow)?;
        Ok(())
    }

    pub(crate) fn record(&mut self, approve: bool) -> Result<(), StateError> {
        if approve {
            self.record_approve()
        } else {
            self.record_disapprove()
        }
    }

    pub(crate) fn reverse(&mut self, approve: bool) -> Result<(), StateError> {
        if approve {
            self.reverse_approve()
        } else {
            self.reverse_disapprove()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::create_subject;
    use crate::address::SubjectName;
    use crate::state::StateError;

    #[test]
    fn test_create_once() {
        let name = SubjectName::new("Jane Doe").unwrap();
        let subject = create_subject(None, &name).unwrap();
        assert_eq!(subject.identifier, "Jane Doe");
        assert_eq!((subject.approve_count, subject.disapprove_count), (0, 0));
        assert_eq!(
            create_subject(Some(&subject), &name),
            Err(StateError::AlreadyExists)
        );
    }

    #[test]
    fn test_underflow_never_clamps() {
        let mut subject = create_subject(None, &SubjectName::new("Jane Doe").unwrap()).unwrap();
        assert_eq!(subject.reverse_approve(), Err(StateError::Underflow));
        assert_eq!(subject.reverse_disapprove(), Err(StateError::Underflow));
        assert_eq!((subject.approve_count, subject.disapprove_count), (0, 0));
    }

    #[test]
    fn test_overflow() {
        let mut subject = create_subject(None, &SubjectName::new("Jane Doe").unwrap()).unwrap();
        subject.approve_count = u64::MAX;
        assert_eq!(subject.record_approve(), Err(StateError::Overflow));
        assert_eq!(subject.approve_count, u64::MAX);
        assert!(subject.record_disapprove().is_ok());
    }
}
