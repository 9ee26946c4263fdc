//! Integration tests for order processing through the data access port.
//!
//! The recording in-memory backend stands in for a database so every
//! interaction the processor has with persistence can be asserted on.

use std::sync::Arc;

use order_engine::{
    ConfigurationError, CreateOrderCommand, DataAccessCall, DataAccessError, DataAccessPort,
    DiscountedProduct, InMemoryDataAccess, Money, Order, OrderProcessor, Priceable,
    ProcessOrderError, Product, Quantity, TursoDataAccess,
};
use rust_decimal_macros::dec;
use test_case::test_case;

fn priced_at_ten() -> Arc<dyn Priceable> {
    Arc::new(Product::new("SKU-TEN", "Ten dollar item", Money::new(dec!(10.00))))
}

fn order_of(quantity: i64) -> Order {
    Order::new(CreateOrderCommand {
        item: priced_at_ten(),
        quantity: Quantity::from_i64(quantity),
    })
    .unwrap()
}

fn all_backends() -> Vec<(&'static str, Arc<dyn DataAccessPort>)> {
    vec![
        ("memory", Arc::new(InMemoryDataAccess::new())),
        ("turso", Arc::new(TursoDataAccess::new(":memory:"))),
    ]
}

#[tokio::test]
async fn ten_dollar_order_is_recorded_through_the_port() {
    let backend = Arc::new(InMemoryDataAccess::new());
    let processor = OrderProcessor::new(Arc::clone(&backend));
    let order = order_of(1);

    let receipt = processor.process_order(&order).await.unwrap();

    assert_eq!(receipt.total, Money::new(dec!(10.00)));
    assert_eq!(receipt.sku.as_str(), "SKU-TEN");

    let calls = backend.calls();
    assert!(!calls.is_empty());
    assert_eq!(calls.first(), Some(&DataAccessCall::Connect));
    assert_eq!(calls.last(), Some(&DataAccessCall::Disconnect));

    let queries = backend.executed_queries();
    assert_eq!(queries.len(), 1);
    assert!(queries[0].contains(order.id().as_str()));
    assert!(queries[0].contains("'10.00'"));
}

#[test_case(1, dec!(10.00) ; "single unit")]
#[test_case(3, dec!(30.00) ; "three units")]
#[test_case(12, dec!(120.00) ; "a dozen")]
#[tokio::test]
async fn receipt_total_is_price_times_quantity(quantity: i64, expected: rust_decimal::Decimal) {
    let processor = OrderProcessor::new(Arc::new(InMemoryDataAccess::new()));

    let receipt = processor.process_order(&order_of(quantity)).await.unwrap();

    assert_eq!(receipt.total, Money::new(expected));
    assert_eq!(receipt.quantity, Quantity::from_i64(quantity));
}

#[tokio::test]
async fn new_priceable_variants_need_no_processor_changes() {
    let discounted = Arc::new(DiscountedProduct::new(priced_at_ten(), dec!(20)).unwrap());
    let order = Order::new(CreateOrderCommand::single(discounted)).unwrap();
    let processor = OrderProcessor::new(Arc::new(InMemoryDataAccess::new()));

    let receipt = processor.process_order(&order).await.unwrap();

    assert_eq!(receipt.total, Money::new(dec!(8.00)));
}

#[tokio::test]
async fn unreachable_backend_error_reaches_the_caller() {
    let backend = Arc::new(InMemoryDataAccess::unreachable());
    let processor = OrderProcessor::new(Arc::clone(&backend));

    let err = processor.process_order(&order_of(1)).await.unwrap_err();

    assert!(matches!(err, ProcessOrderError::DataAccess(DataAccessError::Connection { .. })));
    assert_eq!(backend.calls(), vec![DataAccessCall::Connect]);
}

#[tokio::test]
async fn processor_accepts_runtime_selected_backend() {
    for (name, backend) in all_backends() {
        let processor: OrderProcessor<dyn DataAccessPort> = OrderProcessor::new(backend);

        processor.initialize_schema().await.unwrap();
        let receipt = processor.process_order(&order_of(2)).await.unwrap();

        assert_eq!(receipt.total, Money::new(dec!(20.00)), "backend {name}");
        assert_eq!(receipt.rows_affected, 1, "backend {name}");
    }
}

#[tokio::test]
async fn disconnect_without_connect_never_fails() {
    for (name, backend) in all_backends() {
        assert!(backend.disconnect().await.is_ok(), "backend {name}");
        assert!(backend.disconnect().await.is_ok(), "backend {name}");
    }
}

#[tokio::test]
async fn empty_query_is_a_query_error_for_every_backend() {
    for (name, backend) in all_backends() {
        backend.connect().await.unwrap();
        let err = backend.execute_query("").await.unwrap_err();
        assert!(err.is_query(), "backend {name}: {err}");
        backend.disconnect().await.unwrap();
    }
}

#[test]
fn building_without_dependency_always_fails() {
    for _ in 0..3 {
        let result = OrderProcessor::<dyn DataAccessPort>::builder().build();
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingDependency { .. })
        ));
    }
}
