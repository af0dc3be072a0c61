//! Unit tests for mock vacation repository

use chrono::NaiveDate;

use crate::domain::entities::vacation::VacationDraft;
use crate::repositories::vacation::{MockVacationRepository, VacationRepository};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, m, d).unwrap()
}

fn draft(destination: &str, start: NaiveDate, end: NaiveDate) -> VacationDraft {
    VacationDraft {
        destination: destination.to_string(),
        description: "A lovely trip".to_string(),
        start_date: start,
        end_date: end,
        price: 500.0,
        image_name: None,
    }
}

async fn seeded() -> MockVacationRepository {
    let repo = MockVacationRepository::new();
    repo.insert(draft("Paris", date(5, 1), date(5, 7))).await.unwrap();
    repo.insert(draft("Oslo", date(3, 1), date(3, 10))).await.unwrap();
    repo.insert(draft("Lima", date(4, 1), date(4, 30))).await.unwrap();
    repo
}

#[tokio::test]
async fn test_find_all_is_ordered_by_start_date() {
    let repo = seeded().await;
    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.destination)
        .collect();
    assert_eq!(names, vec!["Oslo", "Lima", "Paris"]);
}

#[tokio::test]
async fn test_active_and_upcoming() {
    let repo = seeded().await;

    let active = repo.find_active(date(4, 15)).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].destination, "Lima");

    let upcoming = repo.find_upcoming(date(4, 15)).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].destination, "Paris");
}

#[tokio::test]
async fn test_likes() {
    let repo = seeded().await;

    repo.add_like(10, 1).await.unwrap();
    repo.add_like(10, 1).await.unwrap();
    repo.add_like(11, 1).await.unwrap();
    assert_eq!(repo.likes_count(1).await.unwrap(), 2);
    assert!(repo.has_like(10, 1).await.unwrap());

    let for_user = repo.find_all_for_user(10).await.unwrap();
    let paris = for_user.iter().find(|v| v.vacation.id == 1).unwrap();
    assert_eq!(paris.likes_count, 2);
    assert!(paris.is_liked);

    repo.remove_like(10, 1).await.unwrap();
    assert!(!repo.has_like(10, 1).await.unwrap());
    assert_eq!(repo.likes_count(1).await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_and_delete() {
    let repo = seeded().await;

    let mut paris = repo.find_by_id(1).await.unwrap().unwrap();
    paris.price = 750.0;
    assert!(repo.update(paris).await.unwrap());
    assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().price, 750.0);

    let ghost = draft("Nowhere", date(1, 1), date(1, 2)).into_vacation(99);
    assert!(!repo.update(ghost).await.unwrap());

    repo.add_like(10, 1).await.unwrap();
    assert!(repo.delete(1).await.unwrap());
    assert!(!repo.delete(1).await.unwrap());
    assert_eq!(repo.likes_count(1).await.unwrap(), 0);
}
