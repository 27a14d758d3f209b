//! The rule abstraction.

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;

/// A named validation check over one kind of ILR record.
///
/// Implementations are stateless. `validate` reports every violation it finds
/// to `handler` and never stops at the first failure.
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Rule name as published in the rule catalogue (e.g. `"R99"`).
    fn name(&self) -> &'static str;

    fn validate(
        &self,
        item: &T,
        ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    );
}
