//! Integration tests for the users screen.
//!
//! Clicks inside `TableBuilder` rows do not reach the widgets reliably
//! through the accessibility tree, so row interactions are covered by the
//! business-layer tests. These tests check what gets rendered and the
//! interactions outside the table.

mod common;

use crate::common::{TestCtx, user_json};
use kittest::{NodeT, Queryable};
use roster_business::user_management::{UserManagementState, UsersPageCompute};
use roster_business::{CheckboxDemoState, Router, SortField, SortOrder};

#[tokio::test]
async fn users_are_rendered_with_item_count() {
    let users = serde_json::json!([user_json(1, "admin", true), user_json(2, "alice", false)]);
    let mut ctx = TestCtx::new_app(users, 2).await;

    ctx.step_frames(10).await;
    let harness = ctx.harness_mut();

    assert!(
        harness.query_by_label("alice").is_some(),
        "User 'alice' should be displayed in the table"
    );
    assert!(harness.query_by_label("Activated").is_some());
    assert!(harness.query_by_label("Deactivated").is_some());
    assert_eq!(harness.query_all_by_label("04/03/21 10:20").count(), 2);
    assert_eq!(harness.query_all_by_label("ROLE_USER").count(), 2);
    assert!(
        harness
            .query_by_label_contains("Showing 1 - 2 of 2 items.")
            .is_some()
    );
    assert!(harness.query_by_label_contains("Create a new user").is_some());

    let location = harness.state().state.ctx.state::<Router>().location().clone();
    assert_eq!(location.search, "?page=1&sort=id,asc");
}

#[tokio::test]
async fn empty_result_hides_pager() {
    let mut ctx = TestCtx::new_app(serde_json::json!([]), 0).await;

    ctx.step_frames(10).await;
    let harness = ctx.harness_mut();

    let page = harness
        .state()
        .state
        .ctx
        .cached::<UsersPageCompute>()
        .cloned()
        .unwrap_or_default();
    assert_eq!(page.total_items, 0);
    assert!(harness.query_by_label_contains("Showing").is_none());
    assert!(harness.query_by_label("Users").is_some());
}

#[tokio::test]
async fn page_past_the_end_hides_pager_even_with_a_total() {
    let mut ctx = TestCtx::new_app_at(
        "/admin/user-management?page=99&sort=id,asc",
        serde_json::json!([]),
        45,
    )
    .await;

    ctx.step_frames(10).await;
    let harness = ctx.harness_mut();

    let page = harness
        .state()
        .state
        .ctx
        .cached::<UsersPageCompute>()
        .cloned()
        .unwrap_or_default();
    assert_eq!(page.total_items, 45);
    assert!(page.users.is_empty());
    assert!(harness.query_by_label_contains("Showing").is_none());
    assert!(harness.query_by_label("«").is_none());
    assert!(harness.query_by_label("»").is_none());
}

#[tokio::test]
async fn delete_is_disabled_only_on_the_signed_in_row() {
    // The account mock signs in as `admin`.
    let users = serde_json::json!([user_json(1, "admin", true), user_json(2, "alice", true)]);
    let mut ctx = TestCtx::new_app(users, 2).await;

    ctx.step_frames(10).await;
    let harness = ctx.harness_mut();

    let deletes: Vec<_> = harness.query_all_by_label("Delete").collect();
    assert_eq!(deletes.len(), 2, "one Delete link per row");
    assert!(deletes[0].accesskit_node().is_disabled(), "admin cannot delete itself");
    assert!(!deletes[1].accesskit_node().is_disabled(), "admin can delete alice");

    let edits: Vec<_> = harness.query_all_by_label("Edit").collect();
    assert!(edits.iter().all(|edit| !edit.accesskit_node().is_disabled()));
}

#[tokio::test]
async fn url_parameters_drive_the_first_request() {
    let users = serde_json::json!([user_json(21, "zed", true)]);
    let mut ctx =
        TestCtx::new_app_at("/admin/user-management?page=2&sort=login,desc", users, 21).await;

    ctx.step_frames(10).await;

    let pagination = ctx
        .harness()
        .state()
        .state
        .ctx
        .state::<UserManagementState>()
        .pagination()
        .clone();
    assert_eq!(pagination.active_page, 2);
    assert_eq!(pagination.sort, SortField::Login);
    assert_eq!(pagination.order, SortOrder::Desc);

    let requests = ctx
        .mock_server()
        .received_requests()
        .await
        .unwrap_or_default();
    let user_requests: Vec<_> = requests
        .iter()
        .filter(|r| r.url.path() == "/api/admin/users")
        .collect();
    assert_eq!(user_requests.len(), 1);
    let query: Vec<(String, String)> = user_requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(query.contains(&("page".to_owned(), "1".to_owned())));
    assert!(query.contains(&("size".to_owned(), "20".to_owned())));
    assert!(query.contains(&("sort".to_owned(), "login,desc".to_owned())));

    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Showing 21 - 21 of 21 items.")
            .is_some()
    );
}

#[tokio::test]
async fn create_link_navigates_away_and_back_remounts() {
    let users = serde_json::json!([user_json(1, "admin", true)]);
    let mut ctx = TestCtx::new_app(users, 1).await;
    ctx.step_frames(5).await;

    ctx.harness_mut()
        .get_by_label("Create a new user")
        .click();
    ctx.step_frames(3).await;

    {
        let harness = ctx.harness_mut();
        let router = harness.state().state.ctx.state::<Router>();
        assert_eq!(router.location().pathname, "/admin/user-management/new");
        assert!(!harness.state().state.ctx.state::<UserManagementState>().is_mounted());
        assert!(harness.query_by_label_contains("Back to users").is_some());
    }

    ctx.harness_mut().get_by_label("Back to users").click();
    ctx.step_frames(5).await;

    let harness = ctx.harness_mut();
    assert!(harness.state().state.ctx.state::<UserManagementState>().is_mounted());
    assert!(harness.query_by_label_contains("admin@localhost").is_some());
}

#[tokio::test]
async fn checkbox_demo_updates_selection() {
    let mut ctx = TestCtx::new_app(serde_json::json!([]), 0).await;
    ctx.step_frames(2).await;

    ctx.harness_mut().get_by_label("Chicago").click();
    ctx.step_frames(1).await;
    ctx.harness_mut().get_by_label("false").click();
    ctx.step_frames(1).await;

    let harness = ctx.harness_mut();
    let demo = harness.state().state.ctx.state::<CheckboxDemoState>().clone();
    assert_eq!(demo.selected_cities, vec!["Chicago"]);
    assert!(demo.checked);
    assert!(harness.query_by_label("true").is_some());
    assert!(
        harness
            .query_by_label_contains("Selected categories: M, P")
            .is_some()
    );
}
