//! Tests for the detached creation path
//!
//! `spawn_create` must return immediately, resolve exactly once with the same
//! result the synchronous path would produce, and run to completion even when
//! its handle is dropped.

use account_core::error::Error;
use account_core::service::AccountService;
use account_test_utils::{
    AccountBuilder, MockAccountRepository, MockAuditService, MockNotificationService,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn service() -> (AccountService, Arc<MockAccountRepository>, Arc<MockAuditService>) {
    let repository = Arc::new(MockAccountRepository::new());
    let audit = Arc::new(MockAuditService::new());
    let service = AccountService::new(
        repository.clone(),
        Arc::new(MockNotificationService::new()),
        audit.clone(),
    );
    (service, repository, audit)
}

#[tokio::test]
async fn spawn_create_resolves_with_the_saved_account() {
    let (service, repository, _) = service();
    repository.assign_id_on_save(42);

    let handle = service.spawn_create(AccountBuilder::new().build());
    let saved = handle.await.unwrap().unwrap();

    assert_eq!(saved.id, Some(42));
    assert_eq!(repository.save_count(), 1);
}

#[tokio::test]
async fn spawn_create_surfaces_validation_errors_on_the_handle() {
    let (service, repository, _) = service();
    let account = AccountBuilder::new().with_email("no-at-sign.com").build();

    let handle = service.spawn_create(account);
    let err = handle.await.unwrap().unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(repository.save_count(), 0);
}

#[tokio::test]
async fn spawn_create_surfaces_collaborator_errors_on_the_handle() {
    let (service, repository, _) = service();
    repository.fail_save("connection reset");

    let handle = service.spawn_create(AccountBuilder::new().build());
    let err = handle.await.unwrap().unwrap_err();

    assert!(matches!(err, Error::Collaborator(_)));
}

#[tokio::test]
async fn spawn_create_does_not_block_the_scheduling_caller() {
    let (service, repository, _) = service();
    repository.delay_save(Duration::from_millis(200));

    let start = Instant::now();
    let handle = service.spawn_create(AccountBuilder::new().build());
    let scheduling_elapsed = start.elapsed();

    assert!(scheduling_elapsed < Duration::from_millis(100));
    handle.await.unwrap().unwrap();
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn dropped_handle_does_not_cancel_the_operation() {
    let (service, repository, audit) = service();
    repository.delay_save(Duration::from_millis(20));

    drop(service.spawn_create(AccountBuilder::new().build()));

    // The detached task keeps running; give it time to finish.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(repository.save_count(), 1);
    assert_eq!(audit.record_count(), 1);
}

#[tokio::test]
async fn concurrent_spawn_creates_all_persist() {
    let (service, repository, audit) = service();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let account = AccountBuilder::new()
                .with_name(&format!("Account {i}"))
                .with_email(&format!("account{i}@ejemplo.com"))
                .build();
            service.spawn_create(account)
        })
        .collect();

    for result in futures::future::join_all(handles).await {
        result.unwrap().unwrap();
    }

    assert_eq!(repository.save_count(), 4);
    assert_eq!(audit.record_count(), 4);
}
