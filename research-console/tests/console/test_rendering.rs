//! Rendering tests against ratatui's test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use research_console::app::{ReportTab, View};
use research_console::stages::STAGES;
use research_console_sdk::PipelineError;

use super::common::{
    app_with_report, render, sample_response, screen_contains, stat_card_values, test_app,
    MockPipeline, EXECUTIVE_SUMMARY,
};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

#[tokio::test]
async fn test_submission_view_on_launch() {
    let app = test_app(MockPipeline::succeeding(sample_response(1, 1)));
    let screen = render(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&screen, "5 agents deep."));
    assert!(screen_contains(&screen, "Enter a research topic (e.g., iPhone 16 market trends)..."));
    assert!(screen_contains(&screen, "START RESEARCH"));
    assert!(screen_contains(&screen, "SYSTEM_IDLE"));
}

#[tokio::test]
async fn test_sidebar_lists_every_stage() {
    let app = test_app(MockPipeline::succeeding(sample_response(1, 1)));
    let screen = render(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&screen, "LIVE PIPELINE"));
    for stage in &STAGES {
        assert!(screen_contains(&screen, stage.label), "missing {}", stage.label);
    }
    // Report-backed entries are still listed, only dimmed
    assert!(screen_contains(&screen, "Final Report"));
}

#[tokio::test]
async fn test_typed_query_replaces_placeholder() {
    let mut app = test_app(MockPipeline::succeeding(sample_response(1, 1)));
    for c in "EV batteries".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    let screen = render(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&screen, "EV batteries"));
    assert!(!screen_contains(&screen, "Enter a research topic"));
}

#[tokio::test]
async fn test_running_header_and_action() {
    let (pipeline, gate) = MockPipeline::gated(Ok(sample_response(1, 1)));
    let mut app = test_app(pipeline);
    app.input_buffer = "topic".to_string();
    assert!(app.submit());

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "PIPELINE_ACTIVE"));
    assert!(screen_contains(&screen, "Running pipeline..."));
    assert!(!screen_contains(&screen, "START RESEARCH"));

    gate.notify_one();
    app.wait_settled().await;
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "SYSTEM_IDLE"));
}

#[tokio::test]
async fn test_summary_tab_shows_counts_and_summary() {
    let app = app_with_report("iPhone 16 market trends", sample_response(4, 2)).await;
    let screen = render(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&screen, "iPhone 16 market trends"));
    assert!(screen_contains(&screen, "SUMMARY"));
    assert!(screen_contains(&screen, "NEXTSTEPS"));
    assert_eq!(stat_card_values(&screen), vec![4, 3, 2]);
    assert!(screen_contains(&screen, EXECUTIVE_SUMMARY));
}

#[tokio::test]
async fn test_research_tab_expands_open_card() {
    let mut app = app_with_report("topic", sample_response(3, 1)).await;
    app.navigation.set_report_tab(ReportTab::Research);

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "T01"));
    assert!(screen_contains(&screen, "T03"));
    assert!(!screen_contains(&screen, "Summary for section 2"));

    app.navigation.toggle_card(1);
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Summary for section 2"));
    assert!(screen_contains(&screen, "[finding 2a]"));
    assert!(screen_contains(&screen, "[finding 2b]"));
    assert!(!screen_contains(&screen, "Summary for section 1"));
}

#[tokio::test]
async fn test_selected_card_stays_visible_below_long_open_card() {
    let mut response = sample_response(4, 1);
    response.report.research_sections[0].summary = "long words ".repeat(400);
    let mut app = app_with_report("topic", response).await;

    let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
    app.handle_key(press(KeyCode::Right));
    app.handle_key(press(KeyCode::Enter));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.navigation.open_card, Some(0));
    assert_eq!(app.navigation.card_cursor, 1);

    let toasts: Vec<usize> = app.notifications.get_active().iter().map(|n| n.id).collect();
    for id in toasts {
        app.notifications.dismiss(id);
    }

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "T02"), "selected card scrolled off screen");
    assert!(screen_contains(&screen, "Research task 2"));
}

#[tokio::test]
async fn test_assessment_and_next_steps_tabs() {
    let mut app = app_with_report("topic", sample_response(2, 1)).await;

    app.navigation.set_report_tab(ReportTab::Assessment);
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "STRENGTHS"));
    assert!(screen_contains(&screen, "Few regional sources"));

    app.navigation.set_report_tab(ReportTab::NextSteps);
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "01 → Interview carriers"));
    assert!(screen_contains(&screen, "02 → Track Q4 sales"));
}

#[tokio::test]
async fn test_task_list_view() {
    let mut app = app_with_report("topic", sample_response(4, 1)).await;
    assert!(app.navigation.set_view(View::Tasks, app.has_report()));

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "TASK LIST (4)"));
    assert!(screen_contains(&screen, "PRIORITY: 9"));
    assert!(screen_contains(&screen, "PRIORITY: 3"));
    assert!(screen_contains(&screen, "[research]"));
}

#[tokio::test]
async fn test_gap_analysis_view() {
    let mut app = app_with_report("topic", sample_response(1, 2)).await;
    assert!(app.navigation.set_view(View::Gaps, app.has_report()));

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "GAP ANALYSIS"));
    assert!(screen_contains(&screen, "IDENTIFIED GAPS (2)"));
    assert!(screen_contains(&screen, "Gap number 2"));
    assert!(screen_contains(&screen, "Few regional sources"));
}

#[tokio::test]
async fn test_settings_view_shows_env_template() {
    let mut app = test_app(MockPipeline::succeeding(sample_response(1, 1)));
    assert!(app.navigation.set_view(View::Settings, app.has_report()));

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "GROQ_API_KEY=your_key_here"));
    assert!(screen_contains(&screen, "TAVILY_SEARCH_API=your_key_here"));
    assert!(screen_contains(&screen, "http://localhost:8000/api/research"));
    assert!(screen_contains(&screen, "1500 ms"));
    assert!(screen_contains(&screen, "llama-3.1-8b-instant"));
}

#[tokio::test]
async fn test_failure_modal() {
    let mut app = test_app(MockPipeline::failing(PipelineError::Transport(
        "connection refused".to_string(),
    )));
    app.input_buffer = "topic".to_string();
    app.submit();
    app.wait_settled().await;

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Pipeline failure"));
    assert!(screen_contains(&screen, "[Enter/Esc] Dismiss"));

    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(!screen_contains(&screen, "Pipeline failure"));
    assert!(screen_contains(&screen, "failed. Press Enter to try again."));
}

#[tokio::test]
async fn test_small_terminal_does_not_panic() {
    let mut app = app_with_report("topic", sample_response(4, 2)).await;
    for tab in ReportTab::ALL {
        app.navigation.set_report_tab(tab);
        render(&app, 40, 12);
    }
}
