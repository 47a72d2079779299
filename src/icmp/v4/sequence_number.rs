type SequenceNumberInnerType = u16;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct SequenceNumber(SequenceNumberInnerType);

impl SequenceNumber {
    pub fn start_value() -> SequenceNumber {
        // The first echo request of a run carries sequence number 0.
        SequenceNumber(0)
    }

    pub fn next(self) -> Self {
        SequenceNumber(self.0.wrapping_add(1))
    }
}

impl From<SequenceNumber> for SequenceNumberInnerType {
    fn from(value: SequenceNumber) -> Self {
        value.0
    }
}

impl From<SequenceNumberInnerType> for SequenceNumber {
    fn from(value: SequenceNumberInnerType) -> Self {
        SequenceNumber(value)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(0u16, SequenceNumber::start_value().into());
    }

    #[test]
    fn next_increments_by_one() {
        let sequence_number = SequenceNumber::start_value().next().next();
        assert_eq!(SequenceNumber::from(2), sequence_number);
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(SequenceNumber::from(0), SequenceNumber::from(u16::MAX).next());
    }
}
