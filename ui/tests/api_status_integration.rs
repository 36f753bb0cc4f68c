mod common;

use common::TestCtx;
use qrdemo_business::APIAvailability;
use qrdemo_ui::utils::colors::{COLOR_GREEN, COLOR_RED};
use qrdemo_ui::widgets::api_status::status_info;

#[tokio::test]
async fn test_healthy_backend_turns_dot_green() {
    let mut ctx = TestCtx::new_app_with_health(200).await;
    ctx.harness_mut().step();

    let available = ctx
        .wait_until(|h| {
            matches!(
                h.state().state.api_status.api_availability(),
                APIAvailability::Available(_)
            )
        })
        .await;
    assert!(available, "Failed to get healthy status within timeout");
    assert_eq!(status_info(&ctx.harness().state().state.api_status).1, COLOR_GREEN);
}

#[tokio::test]
async fn test_failing_health_check_turns_dot_red() {
    let mut ctx = TestCtx::new_app_with_health(503).await;
    ctx.harness_mut().step();

    let unavailable = ctx
        .wait_until(|h| {
            matches!(
                h.state().state.api_status.api_availability(),
                APIAvailability::Unavailable(_)
            )
        })
        .await;
    assert!(unavailable, "503 should mark the backend unavailable");

    let (tooltip, color) = status_info(&ctx.harness().state().state.api_status);
    assert_eq!(color, COLOR_RED);
    assert!(tooltip.contains("status 503"));
}
