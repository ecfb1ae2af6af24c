//! Listed-bank seeding and bank timestamps.

mod support;

use std::time::Duration;

use domain::LISTED_BANKS;

use support::{merchants_bank, open_store};

#[tokio::test]
async fn seeding_inserts_every_listed_bank() {
    let (_db, store) = open_store().await;

    let summary = store.banks.seed_listed_banks().await.unwrap();

    assert_eq!(summary.listed, LISTED_BANKS.len());
    assert_eq!(summary.inserted, LISTED_BANKS.len());
    assert_eq!(summary.refreshed, 0);

    let bank = store.banks.get_bank_by_stock_code("600036.SH").await.unwrap();
    assert_eq!(bank.bank_name, "招商银行");
}

#[tokio::test]
async fn seeding_twice_is_idempotent() {
    let (_db, store) = open_store().await;
    store.banks.seed_listed_banks().await.unwrap();

    let second = store.banks.seed_listed_banks().await.unwrap();

    assert_eq!(second.inserted, 0);
    assert_eq!(second.refreshed, LISTED_BANKS.len());
    assert_eq!(store.banks.list_banks().await.unwrap().len(), LISTED_BANKS.len());
}

#[tokio::test]
async fn seeding_restores_listed_name_and_keeps_id() {
    let (_db, store) = open_store().await;
    let existing = store
        .banks
        .register_bank("China Merchants Bank", "600036.SH")
        .await
        .unwrap();

    let summary = store.banks.seed_listed_banks().await.unwrap();
    assert_eq!(summary.inserted, LISTED_BANKS.len() - 1);

    let refreshed = store.banks.get_bank(existing.id).await.unwrap();
    assert_eq!(refreshed.bank_name, "招商银行");
    assert_eq!(refreshed.stock_code, "600036.SH");
}

#[tokio::test]
async fn rename_advances_updated_at_only() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    assert_eq!(bank.created_at, bank.updated_at);

    tokio::time::sleep(Duration::from_millis(20)).await;
    let renamed = store.banks.rename_bank(bank.id, "招商银行股份有限公司").await.unwrap();

    assert_eq!(renamed.bank_name, "招商银行股份有限公司");
    assert_eq!(renamed.created_at, bank.created_at);
    assert!(renamed.updated_at > bank.updated_at);
}
