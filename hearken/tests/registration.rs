//! Registration tests: construction-time validation.

use hearken::{
    ByName, ByType, EventType, ExtractListenResolver, Listen, ListenerExecutor,
    NamedListenResolver, RegistrationError, TypedListenResolver, Visibility,
};

mod common;
use common::{Carrier, DomainEvent, OrderCreated, OrderListener, OrderRef, OrderShipped};

#[test]
fn test_duplicate_event_type_fails_build() {
    let result = ListenerExecutor::builder::<ByType>(OrderListener::new())
        .listen(Listen::new(
            "on_order_created",
            TypedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created,
        ))
        .listen(Listen::new(
            "on_order_created_again",
            TypedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created_again,
        ))
        .build();

    let err = result.unwrap_err();
    assert!(matches!(
        &err,
        RegistrationError::DuplicateEventType { event_type, .. }
            if *event_type == EventType::of::<OrderCreated>()
    ));
    let message = err.to_string();
    assert!(message.contains("OrderListener"));
    assert!(message.contains("on_order_created_again"));
}

#[test]
fn test_duplicate_declared_names_fail_build() {
    let result = ListenerExecutor::builder::<ByName>(OrderListener::new())
        .listen(
            Listen::new(
                "on_domain_event",
                NamedListenResolver::<DomainEvent>::new(),
                OrderListener::on_domain_event,
            )
            .event_name("OrderCreated"),
        )
        .listen(Listen::new(
            "on_order_created",
            NamedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created,
        ))
        .build();

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateEventType {
            first: "on_domain_event",
            second: "on_order_created",
            ..
        })
    ));
}

#[test]
fn test_distinct_claims_for_the_same_rust_type() {
    let executor = ListenerExecutor::builder::<ByName>(OrderListener::new())
        .listen(
            Listen::new(
                "on_domain_event",
                NamedListenResolver::<DomainEvent>::new(),
                OrderListener::on_domain_event,
            )
            .event_name("order.cancelled"),
        )
        .listen(
            Listen::new(
                "on_domain_event",
                NamedListenResolver::<DomainEvent>::new(),
                OrderListener::on_domain_event,
            )
            .event_name("order.refunded"),
        )
        .build()
        .unwrap();

    assert_eq!(executor.len(), 2);
    assert!(executor.listen(&EventType::name("order.refunded")).is_some());
}

#[test]
fn test_restricted_routine_fails_build() {
    let result = ListenerExecutor::builder::<ByType>(OrderListener::new())
        .listen(
            Listen::new(
                "on_order_created",
                TypedListenResolver::<OrderCreated>::new(),
                OrderListener::on_order_created,
            )
            .visibility(Visibility::Restricted),
        )
        .build();

    assert!(matches!(
        result,
        Err(RegistrationError::NotInvocable {
            listen: "on_order_created",
            ..
        })
    ));
}

#[test]
fn test_incompatible_declaration_fails_build() {
    let result = ListenerExecutor::builder::<ByType>(OrderListener::new())
        .listen(
            Listen::new(
                "on_order_shipped",
                ExtractListenResolver::<OrderShipped, (OrderRef, Carrier)>::new(),
                OrderListener::on_order_shipped,
            )
            .event_name("shipped"),
        )
        .build();

    let err = result.unwrap_err();
    assert!(matches!(err, RegistrationError::IncompatibleListen { .. }));
    assert!(err.to_string().contains("OrderListener::on_order_shipped"));
}

#[test]
fn test_type_keyed_routine_under_name_listener_fails_build() {
    let err = ListenerExecutor::builder::<ByName>(OrderListener::new())
        .listen(Listen::new(
            "on_order_created",
            TypedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created,
        ))
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::IncompatibleListen {
            listen: "on_order_created",
            ..
        }
    ));
    assert!(
        err.to_string()
            .contains("claims a type key but listener type `ByName` routes by name")
    );

    let result = ListenerExecutor::builder::<ByName>(OrderListener::new())
        .listen(Listen::new(
            "on_order_shipped",
            ExtractListenResolver::<OrderShipped, (OrderRef, Carrier)>::new(),
            OrderListener::on_order_shipped,
        ))
        .build();
    assert!(matches!(
        result,
        Err(RegistrationError::IncompatibleListen {
            listen: "on_order_shipped",
            ..
        })
    ));
}

#[test]
fn test_name_keyed_routine_under_type_listener_fails_build() {
    let err = ListenerExecutor::builder::<ByType>(OrderListener::new())
        .listen(Listen::new(
            "on_order_created",
            NamedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created,
        ))
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::IncompatibleListen {
            listen: "on_order_created",
            ..
        }
    ));
    assert!(
        err.to_string()
            .contains("claims a name key but listener type `ByType` routes by type")
    );
}

#[test]
fn test_failed_build_leaves_other_listeners_alone() {
    let failed = ListenerExecutor::builder::<ByType>(OrderListener::new())
        .name("broken")
        .listen(
            Listen::new(
                "on_order_created",
                TypedListenResolver::<OrderCreated>::new(),
                OrderListener::on_order_created,
            )
            .visibility(Visibility::Restricted),
        )
        .build();
    assert!(failed.is_err());

    let executor = ListenerExecutor::builder::<ByType>(OrderListener::new())
        .name("healthy")
        .listen(Listen::new(
            "on_order_created",
            TypedListenResolver::<OrderCreated>::new(),
            OrderListener::on_order_created,
        ))
        .build()
        .unwrap();

    executor.execute(&OrderCreated { order_id: 2 }).unwrap();
    assert_eq!(executor.name(), "healthy");
    assert_eq!(executor.listener().created.count(), 1);
}

#[test]
fn test_accessors_reflect_declaration() {
    let executor = ListenerExecutor::builder::<ByName>(OrderListener::new())
        .priority(42)
        .build()
        .unwrap();

    assert_eq!(executor.priority(), 42);
    assert!(executor.listener_type().is::<ByName>());
    assert!(!executor.listener_type().is::<ByType>());
    assert!(executor.is_empty());
}
