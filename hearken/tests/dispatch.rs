//! Dispatch tests: matching, no-op, failure transparency, statelessness.

use hearken::testing::FailingRoutineError;
use hearken::{
    ByName, ByType, ExtractListenResolver, Listen, ListenerExecutor, NamedListenResolver,
    ParamsError, TypedListenResolver,
};

mod common;
use common::{
    Carrier, DomainEvent, OrderCreated, OrderListener, OrderRef, OrderShipped, PaymentFailed,
    error_addr,
};

fn typed_orders() -> ListenerExecutor<OrderListener> {
    ListenerExecutor::builder::<ByType>(OrderListener::new())
        .listen(Listen::new(
            "on_order_created",
            TypedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created,
        ))
        .listen(Listen::new(
            "on_payment_failed",
            TypedListenResolver::<PaymentFailed>::new(),
            OrderListener::on_payment_failed,
        ))
        .listen(Listen::new(
            "on_order_shipped",
            ExtractListenResolver::<OrderShipped, (OrderRef, Carrier)>::new(),
            OrderListener::on_order_shipped,
        ))
        .build()
        .unwrap()
}

#[test]
fn test_matching_event_invokes_routine_once() {
    let executor = typed_orders();

    executor.execute(&OrderCreated { order_id: 1 }).unwrap();

    let listener = executor.listener();
    assert_eq!(listener.created.calls(), vec![OrderCreated { order_id: 1 }]);
    assert_eq!(listener.failed.count(), 0);
    assert_eq!(listener.shipped.count(), 0);
}

#[test]
fn test_unmatched_event_is_silent_noop() {
    let executor = typed_orders();

    let result = executor.execute(&DomainEvent {
        topic: "OrderCreated",
        order_id: 1,
    });

    assert!(result.is_ok());
    let listener = executor.listener();
    assert_eq!(listener.created.count(), 0);
    assert_eq!(listener.failed.count(), 0);
    assert_eq!(listener.shipped.count(), 0);
    assert_eq!(listener.domain.count(), 0);
}

#[test]
fn test_arguments_come_from_resolver() {
    let executor = typed_orders();

    executor
        .execute(&OrderShipped {
            order_id: 12,
            carrier: "dhl",
        })
        .unwrap();

    assert_eq!(
        executor.listener().shipped.calls(),
        vec![(OrderRef(12), Carrier("dhl"))]
    );
}

#[test]
fn test_routine_failure_is_returned_unwrapped() {
    let executor = typed_orders();

    let err = executor
        .execute(&PaymentFailed {
            order_id: 77,
            reason: "card declined".to_string(),
        })
        .unwrap_err();

    let failure = err
        .downcast_ref::<FailingRoutineError>()
        .expect("routine error should not be wrapped");
    assert_eq!(failure, &FailingRoutineError::new(77));
    assert!(err.downcast_ref::<ParamsError>().is_none());
    assert_eq!(executor.listener().failed.count(), 1);
}

#[test]
fn test_routine_failure_keeps_identity() {
    let executor = ListenerExecutor::builder::<ByType>(OrderListener::new())
        .listen(Listen::new(
            "on_payment_failed_boxed",
            TypedListenResolver::<PaymentFailed>::new(),
            OrderListener::on_payment_failed_boxed,
        ))
        .build()
        .unwrap();

    let err = executor
        .execute(&PaymentFailed {
            order_id: 5,
            reason: "timeout".to_string(),
        })
        .unwrap_err();

    assert_eq!(
        error_addr(&err),
        executor
            .listener()
            .last_error_addr
            .load(std::sync::atomic::Ordering::SeqCst)
    );
}

#[test]
fn test_extractor_failure_is_params_error() {
    let executor = typed_orders();

    let err = executor
        .execute(&OrderShipped {
            order_id: 0,
            carrier: "ups",
        })
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ParamsError>(),
        Some(ParamsError::Extract { index: 0, .. })
    ));
    assert_eq!(executor.listener().shipped.count(), 0);
}

#[test]
fn test_repeated_dispatch_is_stateless() {
    let executor = typed_orders();
    let event = OrderCreated { order_id: 9 };

    executor.execute(&event).unwrap();
    executor.execute(&event.clone()).unwrap();

    let calls = executor.listener().created.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0], event);
}

#[test]
fn test_handles_reports_match() {
    let executor = typed_orders();

    assert!(executor.handles(&OrderCreated { order_id: 1 }));
    assert!(!executor.handles(&DomainEvent {
        topic: "OrderCreated",
        order_id: 1,
    }));
}

#[test]
fn test_named_routing_uses_event_name() {
    let executor = ListenerExecutor::builder::<ByName>(OrderListener::new())
        .listen(
            Listen::new(
                "on_domain_event",
                NamedListenResolver::<DomainEvent>::new(),
                OrderListener::on_domain_event,
            )
            .event_name("order.cancelled"),
        )
        .build()
        .unwrap();

    executor
        .execute(&DomainEvent {
            topic: "order.cancelled",
            order_id: 3,
        })
        .unwrap();
    executor
        .execute(&DomainEvent {
            topic: "order.refunded",
            order_id: 4,
        })
        .unwrap();

    assert_eq!(
        executor.listener().domain.calls(),
        vec![DomainEvent {
            topic: "order.cancelled",
            order_id: 3,
        }]
    );
}

#[test]
fn test_name_collision_surfaces_type_mismatch() {
    // A `DomainEvent` named like `OrderCreated` reaches a routine taking
    // `OrderCreated`.
    let executor = ListenerExecutor::builder::<ByName>(OrderListener::new())
        .listen(Listen::new(
            "on_order_created",
            NamedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created,
        ))
        .build()
        .unwrap();

    let err = executor
        .execute(&DomainEvent {
            topic: "OrderCreated",
            order_id: 1,
        })
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ParamsError>(),
        Some(ParamsError::TypeMismatch { .. })
    ));
    assert_eq!(executor.listener().created.count(), 0);
}
