//! Integration tests for the generic tenant-scoped repository

mod common;

use crate::common::fixtures::{create_test_locker, create_test_member};
use crate::common::test_db::{create_test_business, create_test_pool};

use gm_core::{Member, TenantContext};
use gm_db::{DbError, LockerRepository, MemberRepository, PageRequest, TenantScopedRepository};

#[tokio::test]
async fn test_insert_assigns_id_and_stamps_active_business() {
    let pool = create_test_pool().await;
    let business = create_test_business(&pool, "Tenant A").await;
    let repo = MemberRepository::new(pool.clone());

    TenantContext::scope(async {
        TenantContext::set(business).unwrap();

        let mut member = create_test_member("Jordan");
        let id = repo.insert(&mut member).await.unwrap();

        assert!(id > 0);
        assert_eq!(member.id, Some(id));
        assert_eq!(member.business_id, Some(business));
    })
    .await;
}

#[tokio::test]
async fn test_find_by_id_does_not_see_other_tenants_rows() {
    let pool = create_test_pool().await;
    let tenant_a = create_test_business(&pool, "Tenant A").await;
    let tenant_b = create_test_business(&pool, "Tenant B").await;
    let repo = MemberRepository::new(pool.clone());

    let id = TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        let mut member = create_test_member("Jordan");
        repo.insert(&mut member).await.unwrap()
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        let found = repo.find_by_id(id).await.unwrap();
        assert!(found.is_none());
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found.unwrap().name, "Jordan");
    })
    .await;
}

#[tokio::test]
async fn test_find_all_and_count_are_confined_to_active_business() {
    let pool = create_test_pool().await;
    let tenant_a = create_test_business(&pool, "Tenant A").await;
    let tenant_b = create_test_business(&pool, "Tenant B").await;
    let repo = MemberRepository::new(pool.clone());

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        for name in ["One", "Two", "Three"] {
            repo.insert(&mut create_test_member(name)).await.unwrap();
        }
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        repo.insert(&mut create_test_member("Solo")).await.unwrap();
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
        assert_eq!(repo.count().await.unwrap(), 3);
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    })
    .await;
}

#[tokio::test]
async fn test_find_page_returns_slice_and_total() {
    let pool = create_test_pool().await;
    let business = create_test_business(&pool, "Tenant A").await;
    let repo = MemberRepository::new(pool.clone());

    TenantContext::scope(async {
        TenantContext::set(business).unwrap();

        for i in 0..5 {
            repo.insert(&mut create_test_member(&format!("Member {}", i)))
                .await
                .unwrap();
        }

        let page = repo
            .find_page(PageRequest { page: 1, size: 2 })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.items[0].name, "Member 2");
    })
    .await;
}

#[tokio::test]
async fn test_update_under_wrong_tenant_reports_not_found() {
    let pool = create_test_pool().await;
    let tenant_a = create_test_business(&pool, "Tenant A").await;
    let tenant_b = create_test_business(&pool, "Tenant B").await;
    let repo = MemberRepository::new(pool.clone());

    let (id, mut member) = TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        let mut member = create_test_member("Jordan");
        let id = repo.insert(&mut member).await.unwrap();
        (id, member)
    })
    .await;

    member.name = "Renamed".to_string();

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        let result = repo.update(id, &member).await;
        assert!(matches!(result, Err(DbError::EntityNotFound { .. })));
    })
    .await;
}

#[tokio::test]
async fn test_delete_under_wrong_tenant_reports_not_found_and_row_survives() {
    let pool = create_test_pool().await;
    let tenant_a = create_test_business(&pool, "Tenant A").await;
    let tenant_b = create_test_business(&pool, "Tenant B").await;
    let repo = MemberRepository::new(pool.clone());

    let id = TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        repo.insert(&mut create_test_member("Jordan")).await.unwrap()
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        let result = repo.delete_by_id(id).await;
        assert!(matches!(result, Err(DbError::EntityNotFound { .. })));
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        assert!(repo.exists_by_id(id).await.unwrap());
        repo.delete_by_id(id).await.unwrap();
        assert!(!repo.exists_by_id(id).await.unwrap());
    })
    .await;
}

#[tokio::test]
async fn test_operations_without_context_fail_with_context_not_set() {
    let pool = create_test_pool().await;
    create_test_business(&pool, "Tenant A").await;
    let repo = MemberRepository::new(pool.clone());

    let result = repo.find_all().await;
    assert!(matches!(result, Err(DbError::TenantContextNotSet { .. })));

    let result = repo.insert(&mut create_test_member("Nobody")).await;
    assert!(matches!(result, Err(DbError::TenantContextNotSet { .. })));
}

#[tokio::test]
async fn test_find_by_phone_is_tenant_filtered() {
    let pool = create_test_pool().await;
    let tenant_a = create_test_business(&pool, "Tenant A").await;
    let tenant_b = create_test_business(&pool, "Tenant B").await;
    let repo = MemberRepository::new(pool.clone());

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        let mut member = create_test_member("Jordan");
        member.phone = Some("010-9999-0000".to_string());
        repo.insert(&mut member).await.unwrap();
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        let found = repo.find_by_phone("010-9999-0000").await.unwrap();
        assert!(found.is_none());
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        let found = repo.find_by_phone("010-9999-0000").await.unwrap();
        assert_eq!(found.unwrap().name, "Jordan");
    })
    .await;
}

#[tokio::test]
async fn test_locker_number_unique_per_business_but_not_across() {
    let pool = create_test_pool().await;
    let tenant_a = create_test_business(&pool, "Tenant A").await;
    let tenant_b = create_test_business(&pool, "Tenant B").await;
    let repo = LockerRepository::new(pool.clone());

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        repo.insert(&mut create_test_locker(1)).await.unwrap();

        // Same number again under the same business hits the unique index
        let result = repo.insert(&mut create_test_locker(1)).await;
        assert!(matches!(result, Err(DbError::Sqlx { .. })));
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        repo.insert(&mut create_test_locker(1)).await.unwrap();
        assert!(repo.find_by_number(1).await.unwrap().is_some());
    })
    .await;
}

#[tokio::test]
async fn test_find_active_products_filters_by_flag_and_business() {
    let pool = create_test_pool().await;
    let tenant_a = create_test_business(&pool, "Tenant A").await;
    let tenant_b = create_test_business(&pool, "Tenant B").await;
    let repo = gm_db::ProductRepository::new(pool.clone());

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();

        let mut on_sale = common::fixtures::create_test_product("On sale");
        repo.insert(&mut on_sale).await.unwrap();

        let mut retired = common::fixtures::create_test_product("Retired");
        retired.is_active = false;
        repo.insert(&mut retired).await.unwrap();
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_a).unwrap();
        let active = repo.find_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "On sale");
    })
    .await;

    TenantContext::scope(async {
        TenantContext::set(tenant_b).unwrap();
        assert!(repo.find_active().await.unwrap().is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_round_trip_preserves_fields() {
    let pool = create_test_pool().await;
    let business = create_test_business(&pool, "Tenant A").await;
    let repo: TenantScopedRepository<Member> = TenantScopedRepository::new(pool.clone());

    TenantContext::scope(async {
        TenantContext::set(business).unwrap();

        let mut member = create_test_member("Jordan");
        member.birth_date = Some(chrono::NaiveDate::from_ymd_opt(1990, 4, 12).unwrap());
        let id = repo.insert(&mut member).await.unwrap();

        let loaded = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Jordan");
        assert_eq!(loaded.phone.as_deref(), Some("010-1234-5678"));
        assert_eq!(
            loaded.birth_date,
            Some(chrono::NaiveDate::from_ymd_opt(1990, 4, 12).unwrap())
        );
        assert_eq!(loaded.business_id, Some(business));
    })
    .await;
}
