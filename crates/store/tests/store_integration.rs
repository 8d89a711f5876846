//! Integration tests: catalog, bill processing and ledger through the `PosStore` trait.

use chrono::{Days, Utc};
use domain::{BillItem, BillNumber, BillRequest, Customer, CustomerId, Money, Product, ProductId};
use store::{DomainError, InMemoryStore, PosStore};

fn product(id: i64, name: &str, price_cents: i64, quantity: u32) -> Product {
    Product::new(ProductId::new(id), name, Money::from_cents(price_cents), quantity)
}

async fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store
        .add_product(product(1, "Milk 1L", 6_000, 20))
        .await
        .unwrap();
    store
        .add_product(product(2, "Bread", 4_000, 5))
        .await
        .unwrap();
    store
        .add_product(product(3, "Eggs (12)", 8_400, 0))
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_distinct_adds_are_all_retrievable() {
    let store = InMemoryStore::new();
    for id in [5, 1, 9, 3] {
        store
            .add_product(product(id, &format!("Item {id}"), 100 * id, 1))
            .await
            .unwrap();
    }

    let products = store.list_products().await;
    assert_eq!(products.len(), 4);
    for id in [5, 1, 9, 3] {
        let fetched = store.get_product(ProductId::new(id)).await.unwrap();
        assert_eq!(fetched.price, Money::from_cents(100 * id));
    }
}

#[tokio::test]
async fn test_bill_with_several_lines() {
    let store = seeded_store().await;

    let bill = store
        .create_bill(BillRequest::new(vec![
            BillItem::new(ProductId::new(1), 1),
            BillItem::new(ProductId::new(2), 1),
        ]))
        .await
        .unwrap();

    assert_eq!(bill.items.len(), 2);
    let line_sum: Money = bill.items.iter().map(|l| l.line_total).sum();
    assert_eq!(bill.subtotal, line_sum);
    assert_eq!(bill.subtotal, Money::from_cents(10_000));
    assert_eq!(bill.tax, Money::from_cents(1_800));
    assert_eq!(bill.grand_total, Money::from_cents(11_800));

    assert_eq!(store.get_product(ProductId::new(1)).await.unwrap().quantity, 19);
    assert_eq!(store.get_product(ProductId::new(2)).await.unwrap().quantity, 4);
}

#[tokio::test]
async fn test_unknown_product_rolls_back_earlier_items() {
    let store = seeded_store().await;

    let err = store
        .create_bill(BillRequest::new(vec![
            BillItem::new(ProductId::new(1), 3),
            BillItem::new(ProductId::new(404), 1),
            BillItem::new(ProductId::new(2), 1),
        ]))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::ProductNotFound(ProductId::new(404)));
    assert_eq!(store.get_product(ProductId::new(1)).await.unwrap().quantity, 20);
    assert_eq!(store.get_product(ProductId::new(2)).await.unwrap().quantity, 5);
    assert!(store.list_bills().await.is_empty());
}

#[tokio::test]
async fn test_out_of_stock_product_cannot_be_billed() {
    let store = seeded_store().await;

    let err = store
        .create_bill(BillRequest::new(vec![BillItem::new(ProductId::new(3), 1)]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::InsufficientStock {
            product: "Eggs (12)".to_string(),
            available: 0,
            requested: 1,
        }
    );
}

#[tokio::test]
async fn test_bill_numbers_have_no_gaps_after_failures() {
    let store = seeded_store().await;
    let ok = || BillRequest::new(vec![BillItem::new(ProductId::new(1), 1)]);
    let bad = || BillRequest::new(vec![BillItem::new(ProductId::new(2), 100)]);

    let first = store.create_bill(ok()).await.unwrap();
    assert!(store.create_bill(bad()).await.is_err());
    let second = store.create_bill(ok()).await.unwrap();
    assert!(store.create_bill(bad()).await.is_err());
    let third = store.create_bill(ok()).await.unwrap();

    assert_eq!(first.bill_number, BillNumber::new(1));
    assert_eq!(second.bill_number, BillNumber::new(2));
    assert_eq!(third.bill_number, BillNumber::new(3));
}

#[tokio::test]
async fn test_bill_for_registered_customer() {
    let store = seeded_store().await;
    store
        .add_customer(Customer::new(CustomerId::new(10), "Meera").with_phone("555-0101"))
        .await
        .unwrap();

    let bill = store
        .create_bill(
            BillRequest::new(vec![BillItem::new(ProductId::new(2), 2)])
                .for_customer(CustomerId::new(10)),
        )
        .await
        .unwrap();

    assert_eq!(bill.customer_id, Some(CustomerId::new(10)));
}

#[tokio::test]
async fn test_bills_on_today_and_other_days() {
    let store = seeded_store().await;
    for _ in 0..3 {
        store
            .create_bill(BillRequest::new(vec![BillItem::new(ProductId::new(1), 1)]))
            .await
            .unwrap();
    }

    let today = Utc::now().date_naive();
    let day = store.bills_on(today).await;
    assert_eq!(day.count, 3);
    assert_eq!(day.total, Money::from_cents(3 * 7_080));

    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
    assert_eq!(store.bills_on(yesterday).await.count, 0);
}

#[tokio::test]
async fn test_concurrent_bills_never_oversell() {
    let store = InMemoryStore::new();
    store
        .add_product(product(1, "Limited edition", 1_000, 10))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..25 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create_bill(BillRequest::new(vec![BillItem::new(ProductId::new(1), 1)]))
                .await
        }));
    }

    let mut numbers = Vec::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(bill) => numbers.push(bill.bill_number.as_u64()),
            Err(DomainError::InsufficientStock { .. }) => rejected += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    numbers.sort_unstable();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    assert_eq!(rejected, 15);
    assert_eq!(store.get_product(ProductId::new(1)).await.unwrap().quantity, 0);
}
