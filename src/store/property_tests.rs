//! Property-Based Tests for the Store Module
//!
//! Uses proptest to verify store behavior over generated write sequences.

use proptest::prelude::*;

use crate::models::{NewTask, TaskPatch};
use crate::store::feed::ChangeKind;
use crate::store::TaskCollection;

// == Strategies ==
/// Generates owner emails from a small pool so lookups collide.
fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ana@example.com".to_string()),
        Just("bo@example.com".to_string()),
        Just("cy@example.com".to_string()),
    ]
}

/// Generates valid task titles (non-empty, within the length limit)
fn title_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,50}".prop_map(|s| s)
}

fn new_task_strategy() -> impl Strategy<Value = (String, String)> {
    (title_strategy(), email_strategy())
}

fn patch_strategy() -> impl Strategy<Value = TaskPatch> {
    (
        prop::option::of(title_strategy()),
        prop::option::of("[a-z ]{0,30}"),
        prop::option::of("[a-z]{1,10}"),
    )
        .prop_map(|(title, description, category)| TaskPatch {
            title,
            description,
            category,
            email: None,
        })
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // For any insert sequence, an owner lookup returns exactly the tasks
    // inserted for that owner.
    #[test]
    fn prop_find_by_email_partitions_inserts(inserts in prop::collection::vec(new_task_strategy(), 1..30)) {
        block_on(async {
            let tasks = TaskCollection::new();
            let mut per_owner = std::collections::HashMap::<String, usize>::new();

            for (title, email) in &inserts {
                *per_owner.entry(email.clone()).or_default() += 1;
                tasks
                    .insert(NewTask {
                        title: title.clone(),
                        description: String::new(),
                        category: String::new(),
                        email: email.clone(),
                    })
                    .await;
            }

            for (email, count) in per_owner {
                let found = tasks.find_by_email(&email).await;
                prop_assert_eq!(found.len(), count);
                prop_assert!(found.iter().all(|t| t.email == email));
            }
            prop_assert_eq!(tasks.len().await, inserts.len());
            Ok(())
        })?;
    }

    // For any patch sequence, fields never patched keep their inserted value.
    #[test]
    fn prop_patches_preserve_untouched_fields(patches in prop::collection::vec(patch_strategy(), 0..10)) {
        block_on(async {
            let tasks = TaskCollection::new();
            let task = tasks
                .insert(NewTask {
                    title: "original".to_string(),
                    description: "original desc".to_string(),
                    category: "todo".to_string(),
                    email: "ana@example.com".to_string(),
                })
                .await;

            for patch in &patches {
                prop_assert!(tasks.update(task.id, patch.clone()).await);
            }

            let stored = tasks.find_by_email("ana@example.com").await.remove(0);
            // Email was never patched; id and timestamp never change
            prop_assert_eq!(stored.email, "ana@example.com");
            prop_assert_eq!(stored.id, task.id);
            prop_assert_eq!(stored.timestamp, task.timestamp);

            let expected_title = patches
                .iter()
                .rev()
                .find_map(|p| p.title.clone())
                .unwrap_or_else(|| "original".to_string());
            prop_assert_eq!(stored.title, expected_title);
            Ok(())
        })?;
    }

    // For any insert sequence, the feed yields exactly one insert event per
    // write, in commit order.
    #[test]
    fn prop_feed_mirrors_commit_order(inserts in prop::collection::vec(new_task_strategy(), 1..20)) {
        block_on(async {
            let tasks = TaskCollection::new();
            let mut feed = tasks.watch().await;
            let mut ids = Vec::new();

            for (title, email) in inserts {
                let task = tasks
                    .insert(NewTask {
                        title,
                        description: String::new(),
                        category: String::new(),
                        email,
                    })
                    .await;
                ids.push(task.id);
            }

            for id in ids {
                let event = feed.recv().await.unwrap();
                prop_assert_eq!(event.kind, ChangeKind::Insert);
                prop_assert_eq!(event.id, id);
            }
            prop_assert!(feed.try_recv().is_err());
            Ok(())
        })?;
    }
}
