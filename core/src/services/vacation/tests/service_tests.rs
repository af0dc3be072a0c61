//! Unit tests for the vacation service

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::vacation::VacationDraft;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockVacationRepository, VacationRepository};
use crate::services::vacation::VacationService;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()
}

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, m, d).unwrap()
}

fn draft() -> VacationDraft {
    VacationDraft {
        destination: "Kyoto".to_string(),
        description: "Temples and gardens".to_string(),
        start_date: date(4, 1),
        end_date: date(4, 12),
        price: 2400.0,
        image_name: Some("kyoto.jpg".to_string()),
    }
}

fn service() -> (Arc<MockVacationRepository>, VacationService<MockVacationRepository>) {
    let repository = Arc::new(MockVacationRepository::new());
    (repository.clone(), VacationService::new(repository))
}

#[tokio::test]
async fn test_add_and_get() {
    let (_, service) = service();

    let added = service.add(draft(), today()).await.unwrap();
    let fetched = service.get(added.id).await.unwrap();
    assert_eq!(fetched, added);
    assert_eq!(fetched.destination, "Kyoto");
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (_, service) = service();
    let err = service.get(404).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 404 }));
    assert_eq!(err.to_string(), "id 404 not found.");
}

#[tokio::test]
async fn test_add_validation() {
    let (repository, service) = service();

    let mut short = draft();
    short.destination = "Ky".to_string();
    assert!(matches!(
        service.add(short, today()).await,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { field: "destination", .. }))
    ));

    let mut past = draft();
    past.start_date = today();
    assert!(matches!(
        service.add(past, today()).await,
        Err(DomainError::ValidationErr(ValidationError::StartDateNotInFuture))
    ));

    let mut reversed = draft();
    reversed.end_date = reversed.start_date;
    assert!(matches!(
        service.add(reversed, today()).await,
        Err(DomainError::ValidationErr(ValidationError::EndBeforeStart))
    ));

    for price in [0.0, -5.0, 10_000.01, f64::NAN] {
        let mut priced = draft();
        priced.price = price;
        assert!(matches!(
            service.add(priced, today()).await,
            Err(DomainError::ValidationErr(ValidationError::OutOfRange { field: "price", .. }))
        ));
    }

    let mut top = draft();
    top.price = 10_000.0;
    assert!(service.add(top, today()).await.is_ok());

    assert_eq!(repository.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_rejects_script_tags() {
    let (_, service) = service();
    let mut hostile = draft();
    hostile.description = "nice <script>steal()</script>".to_string();

    assert!(matches!(
        service.add(hostile, today()).await,
        Err(DomainError::ScriptInjection)
    ));
}

#[tokio::test]
async fn test_edit_keeps_image_when_missing() {
    let (_, service) = service();
    let added = service.add(draft(), today()).await.unwrap();

    let mut update = draft();
    update.price = 1999.0;
    update.image_name = None;
    let edited = service.edit(added.id, update, today()).await.unwrap();

    assert_eq!(edited.price, 1999.0);
    assert_eq!(edited.image_name.as_deref(), Some("kyoto.jpg"));
    assert_eq!(service.get(added.id).await.unwrap(), edited);
}

#[tokio::test]
async fn test_edit_and_remove_missing() {
    let (_, service) = service();
    assert!(matches!(
        service.edit(9, draft(), today()).await,
        Err(DomainError::NotFound { id: 9 })
    ));
    assert!(matches!(service.remove(9).await, Err(DomainError::NotFound { id: 9 })));
}

#[tokio::test]
async fn test_remove() {
    let (_, service) = service();
    let added = service.add(draft(), today()).await.unwrap();

    service.remove(added.id).await.unwrap();
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_toggle_like() {
    let (_, service) = service();
    let added = service.add(draft(), today()).await.unwrap();

    let liked = service.toggle_like(added.id, 7).await.unwrap();
    assert!(liked.is_liked);
    assert_eq!(liked.likes_count, 1);

    service.toggle_like(added.id, 8).await.unwrap();
    let for_user = service.list_for_user(7).await.unwrap();
    assert_eq!(for_user[0].likes_count, 2);
    assert!(for_user[0].is_liked);

    let unliked = service.toggle_like(added.id, 7).await.unwrap();
    assert!(!unliked.is_liked);
    assert_eq!(unliked.likes_count, 1);

    assert!(matches!(
        service.toggle_like(999, 7).await,
        Err(DomainError::NotFound { id: 999 })
    ));
}

#[tokio::test]
async fn test_active_and_upcoming_listings() {
    let (repository, service) = service();
    repository.insert(draft()).await.unwrap();

    let mut running = draft();
    running.destination = "Cairo".to_string();
    running.start_date = date(1, 10);
    running.end_date = date(1, 20);
    repository.insert(running).await.unwrap();

    let active = service.list_active(today()).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].destination, "Cairo");

    let upcoming = service.list_upcoming(today()).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].destination, "Kyoto");
}
