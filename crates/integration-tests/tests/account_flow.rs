//! Account edits and customer demographics

mod common;

use common::{Harness, PASSWORD};
use tally_core::error::AppError;

#[tokio::test]
async fn test_change_name_and_user_name() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    h.user("theo").await;

    let profile = h.account.change_name(mira.id, "  Mira Kovač ").await.unwrap();
    assert_eq!(profile.name, "Mira Kovač");

    let profile = h.account.change_user_name(mira.id, "mirak").await.unwrap();
    assert_eq!(profile.user_name, "mirak");
    let stored = h.auth.login("mira@shop.rs", PASSWORD).await.unwrap().user;
    assert_eq!(stored, profile);

    let taken = h.account.change_user_name(mira.id, "theo").await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    let blank = h.account.change_name(mira.id, "   ").await;
    assert!(matches!(blank, Err(AppError::Domain(_))));

    // Login is by email, unaffected by the rename
    assert!(h.auth.login("mira@shop.rs", PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_unknown_account() {
    let h = Harness::new().await;
    assert!(matches!(
        h.account.change_name(404, "Nobody").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_demographics_per_user() {
    let h = Harness::new().await;
    let mira = h.user("mira").await;
    let theo = h.user("theo").await;

    for (gender, age_group, city) in [
        (Some("F"), Some("18-25"), Some("Zagreb")),
        (Some("F"), Some("26-35"), Some("Split")),
        (Some("M"), Some("18-25"), Some("Zagreb")),
        (None, Some(" "), None),
    ] {
        h.customers
            .add_customer(mira.id, gender, age_group, city)
            .await
            .unwrap();
    }
    h.customers
        .add_customer(theo.id, Some("M"), None, Some("Rijeka"))
        .await
        .unwrap();

    let demographics = h.customers.demographics(mira.id).await.unwrap();
    assert_eq!(demographics.total_customers, 4);
    assert_eq!(demographics.by_gender.get("F"), Some(&2));
    assert_eq!(demographics.by_gender.get("M"), Some(&1));
    assert_eq!(demographics.by_age_group.get("18-25"), Some(&2));
    assert_eq!(
        demographics.by_city.keys().collect::<Vec<_>>(),
        vec!["Split", "Zagreb"]
    );

    let profiles = h.customers.list_profiles(mira.id).await.unwrap();
    assert_eq!(profiles.len(), 4);
    assert_eq!(profiles[3].age_group, None);
}
