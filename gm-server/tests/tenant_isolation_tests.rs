//! End-to-end tenant isolation tests across the HTTP surface

mod common;

use crate::common::{
    access_token_for, create_test_business, create_test_state, create_test_user, request, send,
};

use gm_core::UserType;
use gm_server::build_router;

use serde_json::json;

#[tokio::test]
async fn test_row_created_under_one_business_is_invisible_under_another() {
    let state = create_test_state().await;
    let tenant_a = create_test_business(&state.pool, "Tenant A").await;
    let tenant_b = create_test_business(&state.pool, "Tenant B").await;
    create_test_user(&state, "owner1", "pw-owner-1234", UserType::Owner, None).await;
    let app = build_router(state.clone());
    let token = access_token_for(&state, "owner1");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/members",
            Some(&token),
            Some(tenant_a),
            Some(json!({ "name": "Jordan Park" })),
        ),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["member"]["businessId"], tenant_a);
    let id = body["member"]["id"].as_i64().unwrap();

    // Same id under the other business: indistinguishable from absent
    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/api/v1/members/{}", id),
            Some(&token),
            Some(tenant_b),
            None,
        ),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not Found");

    // And still there under its own business
    let (status, _) = send(
        &app,
        request(
            "GET",
            &format!("/api/v1/members/{}", id),
            Some(&token),
            Some(tenant_a),
            None,
        ),
    )
    .await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_cross_tenant_update_and_delete_are_404_not_forbidden() {
    let state = create_test_state().await;
    let tenant_a = create_test_business(&state.pool, "Tenant A").await;
    let tenant_b = create_test_business(&state.pool, "Tenant B").await;
    create_test_user(&state, "owner1", "pw-owner-1234", UserType::Owner, None).await;
    let app = build_router(state.clone());
    let token = access_token_for(&state, "owner1");

    let (_, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/products",
            Some(&token),
            Some(tenant_a),
            Some(json!({ "productType": "MEMBERSHIP", "name": "3-month", "price": 99000 })),
        ),
    )
    .await;
    let id = body["product"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/products/{}", id),
            Some(&token),
            Some(tenant_b),
            Some(json!({ "productType": "MEMBERSHIP", "name": "Hijack", "price": 1 })),
        ),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not Found");

    let (status, body) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/v1/products/{}", id),
            Some(&token),
            Some(tenant_b),
            None,
        ),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not Found");

    // Untouched under the owning business
    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/api/v1/products/{}", id),
            Some(&token),
            Some(tenant_a),
            None,
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["name"], "3-month");
}

#[tokio::test]
async fn test_lists_are_partitioned_per_business() {
    let state = create_test_state().await;
    let tenant_a = create_test_business(&state.pool, "Tenant A").await;
    let tenant_b = create_test_business(&state.pool, "Tenant B").await;
    create_test_user(&state, "owner1", "pw-owner-1234", UserType::Owner, None).await;
    let app = build_router(state.clone());
    let token = access_token_for(&state, "owner1");

    for (tenant, name) in [(tenant_a, "A-1"), (tenant_a, "A-2"), (tenant_b, "B-1")] {
        send(
            &app,
            request(
                "POST",
                "/api/v1/members",
                Some(&token),
                Some(tenant),
                Some(json!({ "name": name })),
            ),
        )
        .await;
    }

    let (_, body_a) = send(
        &app,
        request("GET", "/api/v1/members", Some(&token), Some(tenant_a), None),
    )
    .await;
    let (_, body_b) = send(
        &app,
        request("GET", "/api/v1/members", Some(&token), Some(tenant_b), None),
    )
    .await;

    assert_eq!(body_a["total"], 2);
    assert_eq!(body_b["total"], 1);
    assert_eq!(body_b["members"][0]["name"], "B-1");
}

#[tokio::test]
async fn test_concurrent_requests_for_two_tenants_never_mix() {
    let state = create_test_state().await;
    let tenant_a = create_test_business(&state.pool, "Tenant 3").await;
    let tenant_b = create_test_business(&state.pool, "Tenant 7").await;
    create_test_user(&state, "owner1", "pw-owner-1234", UserType::Owner, None).await;
    let app = build_router(state.clone());
    let token = access_token_for(&state, "owner1");

    send(
        &app,
        request(
            "POST",
            "/api/v1/members",
            Some(&token),
            Some(tenant_a),
            Some(json!({ "name": "Three" })),
        ),
    )
    .await;
    send(
        &app,
        request(
            "POST",
            "/api/v1/members",
            Some(&token),
            Some(tenant_b),
            Some(json!({ "name": "Seven" })),
        ),
    )
    .await;

    // Fire interleaved list requests for both tenants concurrently
    let mut handles = Vec::new();
    for round in 0..10 {
        let tenant = if round % 2 == 0 { tenant_a } else { tenant_b };
        let expected = if round % 2 == 0 { "Three" } else { "Seven" };
        let app = app.clone();
        let token = token.clone();

        handles.push(tokio::spawn(async move {
            let (status, body) = send(
                &app,
                request("GET", "/api/v1/members", Some(&token), Some(tenant), None),
            )
            .await;
            assert_eq!(status, 200);
            assert_eq!(body["total"], 1);
            assert_eq!(body["members"][0]["name"], expected);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_member_role_cannot_reach_staff_routes() {
    let state = create_test_state().await;
    let business = create_test_business(&state.pool, "Riverside Gym").await;
    create_test_user(
        &state,
        "member1",
        "pw-member-1234",
        UserType::Member,
        Some(business),
    )
    .await;
    let app = build_router(state.clone());
    let token = access_token_for(&state, "member1");

    let (status, body) = send(
        &app,
        request("GET", "/api/v1/members", Some(&token), Some(business), None),
    )
    .await;

    assert_eq!(status, 403);
    assert_eq!(body["error"], "Forbidden");
    assert_eq!(body["status"], 403);
}

#[tokio::test]
async fn test_business_administration_is_owner_only() {
    let state = create_test_state().await;
    let business = create_test_business(&state.pool, "Riverside Gym").await;
    create_test_user(
        &state,
        "trainer1",
        "pw-trainer-12",
        UserType::Employee,
        Some(business),
    )
    .await;
    create_test_user(&state, "owner1", "pw-owner-1234", UserType::Owner, None).await;
    let app = build_router(state.clone());

    let trainer_token = access_token_for(&state, "trainer1");
    let (status, _) = send(
        &app,
        request("GET", "/api/v1/businesses", Some(&trainer_token), None, None),
    )
    .await;
    assert_eq!(status, 403);

    let owner_token = access_token_for(&state, "owner1");
    let (status, body) = send(
        &app,
        request("GET", "/api/v1/businesses", Some(&owner_token), None, None),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["businesses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_locker_number_conflict_is_409_within_one_business() {
    let state = create_test_state().await;
    let tenant_a = create_test_business(&state.pool, "Tenant A").await;
    let tenant_b = create_test_business(&state.pool, "Tenant B").await;
    create_test_user(&state, "owner1", "pw-owner-1234", UserType::Owner, None).await;
    let app = build_router(state.clone());
    let token = access_token_for(&state, "owner1");

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/v1/lockers",
            Some(&token),
            Some(tenant_a),
            Some(json!({ "lockerNumber": 1 })),
        ),
    )
    .await;
    assert_eq!(status, 201);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/lockers",
            Some(&token),
            Some(tenant_a),
            Some(json!({ "lockerNumber": 1 })),
        ),
    )
    .await;
    assert_eq!(status, 409);
    assert_eq!(body["error"], "Conflict");

    // The same number is free under another business
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/v1/lockers",
            Some(&token),
            Some(tenant_b),
            Some(json!({ "lockerNumber": 1 })),
        ),
    )
    .await;
    assert_eq!(status, 201);
}
