#![allow(dead_code)]

use hearken::testing::{CallRecorder, FailingRoutineError};
use hearken::{BoxError, Event, ExtractError, FromEvent};
use std::{
    borrow::Cow,
    sync::atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct OrderCreated {
    pub order_id: u64,
}

impl Event for OrderCreated {}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentFailed {
    pub order_id: u64,
    pub reason: String,
}

impl Event for PaymentFailed {}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderShipped {
    pub order_id: u64,
    pub carrier: &'static str,
}

impl Event for OrderShipped {}

/// An event whose name is data rather than its Rust type.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainEvent {
    pub topic: &'static str,
    pub order_id: u64,
}

impl Event for DomainEvent {
    fn event_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.topic)
    }
}

// ============================================================================
// Extractors
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRef(pub u64);

impl FromEvent<OrderShipped> for OrderRef {
    type Error = ExtractError;

    fn from_event(event: &OrderShipped) -> Result<Self, Self::Error> {
        if event.order_id == 0 {
            return Err(ExtractError::new("shipment without order"));
        }
        Ok(OrderRef(event.order_id))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carrier(pub &'static str);

impl FromEvent<OrderShipped> for Carrier {
    type Error = std::convert::Infallible;

    fn from_event(event: &OrderShipped) -> Result<Self, Self::Error> {
        Ok(Carrier(event.carrier))
    }
}

// ============================================================================
// Test Listeners
// ============================================================================

#[derive(Default)]
pub struct OrderListener {
    pub created: CallRecorder<OrderCreated>,
    pub failed: CallRecorder<PaymentFailed>,
    pub shipped: CallRecorder<(OrderRef, Carrier)>,
    pub domain: CallRecorder<DomainEvent>,
    pub last_error_addr: AtomicUsize,
}

impl OrderListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_order_created(&self, event: OrderCreated) {
        self.created.record(event);
    }

    pub fn on_order_created_again(&self, event: OrderCreated) {
        self.created.record(event);
    }

    /// Always fails with a tag equal to the order id.
    pub fn on_payment_failed(&self, event: PaymentFailed) -> Result<(), FailingRoutineError> {
        let tag = event.order_id;
        self.failed.record(event);
        Err(FailingRoutineError::new(tag))
    }

    /// Fails with a boxed error and remembers where it was allocated.
    pub fn on_payment_failed_boxed(&self, event: PaymentFailed) -> Result<(), BoxError> {
        let err: BoxError = Box::new(FailingRoutineError::new(event.order_id));
        self.last_error_addr
            .store(error_addr(&err), Ordering::SeqCst);
        Err(err)
    }

    pub fn on_order_shipped(&self, order: OrderRef, carrier: Carrier) {
        self.shipped.record((order, carrier));
    }

    pub fn on_domain_event(&self, event: DomainEvent) {
        self.domain.record(event);
    }
}

/// Address of the boxed error's allocation.
pub fn error_addr(err: &BoxError) -> usize {
    &**err as *const (dyn std::error::Error + Send + Sync) as *const () as usize
}
