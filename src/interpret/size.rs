use crate::core::statement::{GroupInterpretation, StatementList};
use crate::core::types::LocusGroup;

pub const SIZE_DISCLAIMER: &str = "These genes are responsible for about 80% of size variation \
     in dogs, but aren't completely predictive. Take them with a grain of salt.";

/// Interpret the body size group
///
/// Size loci are not decomposed; the group is a single disclaimer whatever the
/// input, and carries no quick genotype.
#[must_use]
pub fn summarize_size() -> GroupInterpretation {
    let mut statements = StatementList::new();
    statements.info(SIZE_DISCLAIMER);
    GroupInterpretation::new(LocusGroup::BodySize, statements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_one_disclaimer() {
        let result = summarize_size();
        assert_eq!(result.texts(), vec![SIZE_DISCLAIMER]);
        assert!(result.quick_genotype.is_none());
        assert!(result.outcome.is_complete());
    }
}
