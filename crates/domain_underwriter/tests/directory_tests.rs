//! Underwriter Directory Tests
//!
//! # Test Organization
//!
//! - `crud` - create, read, list and update through the port
//! - `identifiers` - sequential id assignment
//! - `latency` - busy tracking and simulated delays

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use core_kernel::{age_on, FixedLatency, NoLatency, UnderwriterId};
use domain_underwriter::{
    NewUnderwriter, UnderwriterDirectory, UnderwriterError, UnderwriterForm, UnderwriterPatch,
    UnderwriterPort, MINIMUM_JOINING_AGE, SEED_DATE_OF_BIRTH, SEED_JOINING_DATE,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_underwriter(name: &str) -> NewUnderwriter {
    NewUnderwriter {
        name: name.to_string(),
        date_of_birth: date(1990, 1, 1),
        joining_date: date(2024, 6, 1),
        password: Some("Start#123".to_string()),
    }
}

fn seeded_directory() -> UnderwriterDirectory {
    UnderwriterDirectory::with_demo_seed(Arc::new(NoLatency))
}

// ============================================================================
// CRUD
// ============================================================================

mod crud {
    use super::*;

    #[tokio::test]
    async fn test_seeded_underwriter_present() {
        let directory = seeded_directory();

        let all = directory.list_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id.to_string(), "UW001");
        assert_eq!(all[0].name, "Ajit Singh");
        assert_eq!(all[0].date_of_birth, date(2002, 8, 2));
        assert_eq!(all[0].joining_date, date(2025, 4, 10));
    }

    #[test]
    fn test_seed_dates_meet_joining_age() {
        assert_eq!(SEED_DATE_OF_BIRTH, date(2002, 8, 2));
        assert_eq!(SEED_JOINING_DATE, date(2025, 4, 10));
        assert!(age_on(SEED_DATE_OF_BIRTH, SEED_JOINING_DATE) >= MINIMUM_JOINING_AGE);
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let directory = seeded_directory();
        let input = new_underwriter("Meera Iyer");

        let created = directory.create(input.clone()).await.unwrap();
        let fetched = directory.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, input.with_id(created.id));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let directory = UnderwriterDirectory::new(Arc::new(NoLatency));
        for name in ["Zara Khan", "Arjun Rao", "Maya Das"] {
            directory.create(new_underwriter(name)).await.unwrap();
        }

        let names: Vec<String> = directory
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();

        assert_eq!(names, vec!["Zara Khan", "Arjun Rao", "Maya Das"]);
    }

    #[tokio::test]
    async fn test_list_returns_copies() {
        let directory = seeded_directory();

        let mut listed = directory.list_all().await.unwrap();
        listed[0].name = "Changed".to_string();

        let again = directory.list_all().await.unwrap();
        assert_eq!(again[0].name, "Ajit Singh");
    }

    #[tokio::test]
    async fn test_get_missing_underwriter() {
        let directory = seeded_directory();

        let err = directory
            .get_by_id(UnderwriterId::from_sequence(42))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Underwriter not found");
    }

    #[tokio::test]
    async fn test_update_password() {
        let directory = seeded_directory();
        let id = UnderwriterId::from_sequence(1);

        let updated = directory
            .update(id, UnderwriterPatch::password("Fresh!pass"))
            .await
            .unwrap();

        assert_eq!(updated.password.as_deref(), Some("Fresh!pass"));
        assert_eq!(updated.name, "Ajit Singh");
        let fetched = directory.get_by_id(id).await.unwrap();
        assert_eq!(fetched.password.as_deref(), Some("Fresh!pass"));
    }

    #[tokio::test]
    async fn test_update_missing_underwriter() {
        let directory = seeded_directory();

        let result = directory
            .update(UnderwriterId::from_sequence(7), UnderwriterPatch::default())
            .await;

        assert!(matches!(result, Err(UnderwriterError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_count() {
        let directory = seeded_directory();
        directory.create(new_underwriter("Kiran Patel")).await.unwrap();
        assert_eq!(directory.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_form_feeds_directory() {
        let directory = seeded_directory();
        let form = UnderwriterForm::new("Rohan Mehta", date(1995, 3, 3), date(2025, 1, 6), "Go@team1");

        let created = directory
            .create(form.into_new_underwriter().unwrap())
            .await
            .unwrap();

        assert_eq!(created.id.to_string(), "UW002");
        assert!(created.has_password());
    }
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

mod identifiers {
    use super::*;

    #[tokio::test]
    async fn test_ids_continue_after_seed() {
        let directory = seeded_directory();

        let second = directory.create(new_underwriter("Asha Nair")).await.unwrap();
        let third = directory.create(new_underwriter("Vikram Bose")).await.unwrap();

        assert_eq!(second.id.to_string(), "UW002");
        assert_eq!(third.id.to_string(), "UW003");
    }

    #[tokio::test]
    async fn test_ids_start_at_one_when_empty() {
        let directory = UnderwriterDirectory::new(Arc::new(NoLatency));
        let first = directory.create(new_underwriter("Asha Nair")).await.unwrap();
        assert_eq!(first.id.to_string(), "UW001");
    }

    #[tokio::test]
    async fn test_with_records_continues_after_highest_id() {
        let existing = new_underwriter("Old Hand").with_id(UnderwriterId::from_sequence(9));
        let directory = UnderwriterDirectory::with_records(vec![existing], Arc::new(NoLatency));

        let created = directory.create(new_underwriter("New Hire")).await.unwrap();

        assert_eq!(created.id.to_string(), "UW010");
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let directory = Arc::new(seeded_directory());

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let directory = directory.clone();
                tokio::spawn(async move { directory.create(new_underwriter("Batch Hire")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id.sequence());
        }
        ids.sort_unstable();

        assert_eq!(ids, (2..=11).collect::<Vec<u64>>());
    }
}

// ============================================================================
// LATENCY
// ============================================================================

mod latency {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_busy_while_request_pending() {
        let directory = Arc::new(UnderwriterDirectory::with_demo_seed(Arc::new(
            FixedLatency::from_millis(0, 100, 0),
        )));

        let pending = {
            let directory = directory.clone();
            tokio::spawn(async move { directory.list_all().await })
        };
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(directory.is_busy());

        tokio::time::advance(Duration::from_millis(70)).await;
        pending.await.unwrap().unwrap();
        assert!(!directory.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_wait_for_read_delay() {
        let directory = UnderwriterDirectory::with_demo_seed(Arc::new(FixedLatency::from_millis(
            40, 0, 0,
        )));

        let started = tokio::time::Instant::now();
        directory.get_by_id(UnderwriterId::from_sequence(1)).await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(40));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutation_visible_before_delay_elapses() {
        let directory = Arc::new(UnderwriterDirectory::with_demo_seed(Arc::new(
            FixedLatency::from_millis(0, 200, 0),
        )));

        let pending = {
            let directory = directory.clone();
            tokio::spawn(async move { directory.create(new_underwriter("Early Bird")).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        // The record is stored before the simulated response arrives
        let early = directory
            .get_by_id(UnderwriterId::from_sequence(2))
            .await
            .unwrap();
        assert_eq!(early.name, "Early Bird");
        assert!(directory.is_busy());

        let created = pending.await.unwrap().unwrap();
        assert_eq!(created.id.to_string(), "UW002");
    }
}
