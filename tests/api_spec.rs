use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use scrumboard::api::{create_router, MoveTaskInput};
use scrumboard::board::{Board, BoardSnapshot, BurndownPoint, ColumnTasks};
use scrumboard::models::*;
use uuid::Uuid;

fn test_sprint() -> Sprint {
    Sprint {
        id: Uuid::new_v4(),
        name: "Sprint 1".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2026, 3, 16).expect("valid date"),
        goal: "Ship the board".to_string(),
    }
}

fn setup() -> TestServer {
    let board = Board::with_sprint(test_sprint());
    let app = create_router(board, None);
    TestServer::new(app).expect("Failed to create test server")
}

async fn create_test_task(server: &TestServer, title: &str, points: Option<u32>) -> Task {
    server
        .post("/api/v1/tasks")
        .json(&CreateTaskInput {
            title: title.to_string(),
            description: format!("{} description", title),
            points,
        })
        .await
        .json::<Task>()
}

mod tasks {
    use super::*;

    #[tokio::test]
    async fn creates_a_task_in_the_backlog() {
        let server = setup();

        let response = server
            .post("/api/v1/tasks")
            .json(&CreateTaskInput {
                title: "Login page".to_string(),
                description: "Build the login form".to_string(),
                points: Some(3),
            })
            .await;

        response.assert_status(StatusCode::CREATED);
        let task: Task = response.json();
        assert_eq!(task.column, ColumnId::Backlog);
        assert_eq!(task.points, Some(3));
    }

    #[tokio::test]
    async fn rejects_an_empty_title() {
        let server = setup();

        let response = server
            .post("/api/v1/tasks")
            .json(&CreateTaskInput {
                title: "".to_string(),
                description: "No title".to_string(),
                points: None,
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let snapshot: BoardSnapshot = server.get("/api/v1/board").await.json();
        assert!(snapshot.tasks.is_empty());
    }

    #[tokio::test]
    async fn returns_404_for_an_unknown_task() {
        let server = setup();
        let response = server.get(&format!("/api/v1/tasks/{}", Uuid::new_v4())).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn updates_a_task_wholesale() {
        let server = setup();
        let task = create_test_task(&server, "Draft", Some(2)).await;

        server
            .put(&format!("/api/v1/tasks/{}", task.id))
            .json(&Task {
                title: "Final".to_string(),
                points: Some(5),
                ..task.clone()
            })
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let stored: Task = server.get(&format!("/api/v1/tasks/{}", task.id)).await.json();
        assert_eq!(stored.title, "Final");
        assert_eq!(stored.points, Some(5));
    }

    #[tokio::test]
    async fn deleting_an_unknown_task_is_tolerated() {
        let server = setup();
        create_test_task(&server, "Kept", None).await;

        server
            .delete(&format!("/api/v1/tasks/{}", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let snapshot: BoardSnapshot = server.get("/api/v1/board").await.json();
        assert_eq!(snapshot.tasks.len(), 1);
    }

    #[tokio::test]
    async fn moves_a_task_between_columns() {
        let server = setup();
        let task = create_test_task(&server, "Movable", Some(1)).await;

        server
            .post(&format!("/api/v1/tasks/{}/move", task.id))
            .json(&MoveTaskInput {
                column: ColumnId::InProgress,
            })
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let stored: Task = server.get(&format!("/api/v1/tasks/{}", task.id)).await.json();
        assert_eq!(stored.column, ColumnId::InProgress);
    }

    #[tokio::test]
    async fn rejects_an_unknown_column_name() {
        let server = setup();
        let task = create_test_task(&server, "Movable", None).await;

        let response = server
            .post(&format!("/api/v1/tasks/{}/move", task.id))
            .json(&serde_json::json!({ "column": "parking-lot" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

mod board_views {
    use super::*;

    #[tokio::test]
    async fn columns_view_always_lists_every_lane() {
        let server = setup();

        let columns: Vec<ColumnTasks> = server.get("/api/v1/board/columns").await.json();

        assert_eq!(columns.len(), 5);
        assert!(columns.iter().all(|lane| lane.tasks.is_empty()));
    }

    #[tokio::test]
    async fn columns_view_reflects_moves() {
        let server = setup();
        let task = create_test_task(&server, "Movable", None).await;

        server
            .post(&format!("/api/v1/tasks/{}/move", task.id))
            .json(&MoveTaskInput {
                column: ColumnId::Done,
            })
            .await;

        let columns: Vec<ColumnTasks> = server.get("/api/v1/board/columns").await.json();
        let done = columns
            .iter()
            .find(|lane| lane.column == ColumnId::Done)
            .expect("done lane");
        assert_eq!(done.tasks.len(), 1);
        assert_eq!(done.tasks[0].id, task.id);
    }

    #[tokio::test]
    async fn burndown_covers_the_whole_sprint() {
        let server = setup();

        let series: Vec<BurndownPoint> = server.get("/api/v1/board/burndown").await.json();

        // 14-day sprint: day 0 through day 14.
        assert_eq!(series.len(), 15);
        assert_eq!(series[0].day, 0);
        assert_eq!(series[14].day, 14);
    }
}

mod sprint {
    use super::*;

    #[tokio::test]
    async fn replaces_the_sprint() {
        let server = setup();

        let replacement = Sprint {
            id: Uuid::new_v4(),
            name: "Sprint 2".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 16).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 30).expect("valid date"),
            goal: "Polish".to_string(),
        };

        server
            .put("/api/v1/sprint")
            .json(&replacement)
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let stored: Sprint = server.get("/api/v1/sprint").await.json();
        assert_eq!(stored.name, "Sprint 2");
    }

    #[tokio::test]
    async fn rejects_equal_start_and_end_dates() {
        let server = setup();
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");

        let response = server
            .put("/api/v1/sprint")
            .json(&Sprint {
                id: Uuid::new_v4(),
                name: "Degenerate".to_string(),
                start_date: day,
                end_date: day,
                goal: String::new(),
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let stored: Sprint = server.get("/api/v1/sprint").await.json();
        assert_eq!(stored.name, "Sprint 1");
    }
}

mod attachments {
    use super::*;

    fn png(name: &str) -> Attachment {
        Attachment {
            name: name.to_string(),
            mime_type: "image/png".to_string(),
            data: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        }
    }

    #[tokio::test]
    async fn adds_and_removes_by_index() {
        let server = setup();
        let task = create_test_task(&server, "Design", None).await;

        for name in ["a.png", "b.png"] {
            server
                .post(&format!("/api/v1/tasks/{}/attachments", task.id))
                .json(&png(name))
                .await
                .assert_status(StatusCode::NO_CONTENT);
        }

        server
            .delete(&format!("/api/v1/tasks/{}/attachments/0", task.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let stored: Task = server.get(&format!("/api/v1/tasks/{}", task.id)).await.json();
        assert_eq!(stored.attachments.len(), 1);
        assert_eq!(stored.attachments[0].name, "b.png");
    }
}

mod ai {
    use super::*;

    #[tokio::test]
    async fn story_generation_requires_a_configured_gateway() {
        let server = setup();

        let response = server
            .post("/api/v1/ai/stories")
            .json(&serde_json::json!({ "feature_idea": "team chat" }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn attachment_analysis_still_404s_on_unknown_tasks() {
        let server = setup();

        let response = server
            .post(&format!(
                "/api/v1/tasks/{}/attachments/analysis",
                Uuid::new_v4()
            ))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
