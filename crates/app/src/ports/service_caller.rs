//! Service caller port — the host's service-invocation interface.

use std::rc::Rc;
use std::sync::Arc;

use poolcard_domain::service::ServiceCall;

/// Executes service calls on behalf of the card.
///
/// The card issues exactly one call per user interaction and never inspects
/// the result: whatever the host returns as [`Outcome`](Self::Outcome)
/// (a promise, a `Result`, nothing) is handed back to the caller untouched,
/// so failures surface wherever the host reports them.
pub trait ServiceCaller {
    /// What the host returns for a call.
    type Outcome;

    /// Invoke `call.domain`.`call.service` with `call.data`.
    fn call_service(&self, call: ServiceCall) -> Self::Outcome;
}

impl<T: ServiceCaller + ?Sized> ServiceCaller for &T {
    type Outcome = T::Outcome;

    fn call_service(&self, call: ServiceCall) -> Self::Outcome {
        (**self).call_service(call)
    }
}

impl<T: ServiceCaller + ?Sized> ServiceCaller for Arc<T> {
    type Outcome = T::Outcome;

    fn call_service(&self, call: ServiceCall) -> Self::Outcome {
        (**self).call_service(call)
    }
}

impl<T: ServiceCaller + ?Sized> ServiceCaller for Rc<T> {
    type Outcome = T::Outcome;

    fn call_service(&self, call: ServiceCall) -> Self::Outcome {
        (**self).call_service(call)
    }
}
