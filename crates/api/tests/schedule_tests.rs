mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

const GENERATE: &str = r#"
    mutation Generate($leagueId: ID!, $input: GenerateScheduleInput!) {
        generateSchedule(leagueId: $leagueId, input: $input) {
            id
            teamAId
            teamBId
            scheduledDate
            location
            status
            generated
        }
    }
"#;

const CLEAR: &str = r#"
    mutation Clear($leagueId: ID!) {
        clearSchedule(leagueId: $leagueId) { success deletedMatches }
    }
"#;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_generate_round_robin_schedule() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let league_id = create_test_league(&app_state, "Spring League").await;
    create_test_roster(&app_state, league_id, 4).await;

    let variables = Variables::from_json(json!({
        "leagueId": league_id.to_string(),
        "input": {
            "startDate": "2025-03-01",
            "endDate": "2025-03-06",
            "matchesPerDay": 1,
            "venue": "Court 1"
        }
    }));

    let response = execute_graphql(&schema, GENERATE, Some(variables)).await;

    assert!(
        response.errors.is_empty(),
        "Schedule generation should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let fixtures = data["generateSchedule"].as_array().unwrap();
    assert_eq!(fixtures.len(), 6);
    assert!(fixtures.iter().all(|m| m["status"] == "SCHEDULED"));
    assert!(fixtures.iter().all(|m| m["generated"] == true));
    assert!(fixtures.iter().all(|m| m["location"] == "Court 1"));
    assert_eq!(fixtures[0]["scheduledDate"], "2025-03-01");
    assert_eq!(fixtures[5]["scheduledDate"], "2025-03-06");

    let league = execute_graphql(
        &schema,
        r#"query League($id: ID!) { league(id: $id) { scheduleState teams { id } } }"#,
        Some(Variables::from_json(json!({ "id": league_id.to_string() }))),
    )
    .await;
    let data = league.data.into_json().unwrap();
    assert_eq!(data["league"]["scheduleState"], "SCHEDULED");
    assert_eq!(data["league"]["teams"].as_array().unwrap().len(), 4);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_insufficient_days_carries_details() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let league_id = create_test_league(&app_state, "Short League").await;
    create_test_roster(&app_state, league_id, 4).await;

    let variables = Variables::from_json(json!({
        "leagueId": league_id.to_string(),
        "input": { "startDate": "2025-03-01", "endDate": "2025-03-05", "matchesPerDay": 1 }
    }));

    let response = execute_graphql(&schema, GENERATE, Some(variables)).await;

    assert_eq!(first_error_code(&response).as_deref(), Some("INSUFFICIENT_DAYS"));
    let json = serde_json::to_value(&response).unwrap();
    let details = &json["errors"][0]["extensions"]["details"];
    assert_eq!(details["requiredMatches"], 6);
    assert_eq!(details["requiredDays"], 6);
    assert_eq!(details["availableDays"], 5);

    // Nothing was written
    let matches = execute_graphql(
        &schema,
        r#"query Matches($leagueId: ID!) { leagueMatches(leagueId: $leagueId) { id } }"#,
        Some(Variables::from_json(json!({ "leagueId": league_id.to_string() }))),
    )
    .await;
    let data = matches.data.into_json().unwrap();
    assert!(data["leagueMatches"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_second_generation_is_rejected_until_cleared() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let league_id = create_test_league(&app_state, "Repeat League").await;
    create_test_roster(&app_state, league_id, 3).await;

    let first = generate_test_schedule(&schema, league_id).await;
    assert_eq!(first.len(), 3);

    let variables = Variables::from_json(json!({
        "leagueId": league_id.to_string(),
        "input": { "startDate": "2025-03-01", "endDate": "2025-03-31" }
    }));
    let second = execute_graphql(&schema, GENERATE, Some(variables)).await;
    assert_eq!(first_error_code(&second).as_deref(), Some("ALREADY_SCHEDULED"));

    let cleared = execute_graphql(
        &schema,
        CLEAR,
        Some(Variables::from_json(json!({ "leagueId": league_id.to_string() }))),
    )
    .await;
    assert!(cleared.errors.is_empty(), "Clear should succeed: {:?}", cleared.errors);
    let data = cleared.data.into_json().unwrap();
    assert_eq!(data["clearSchedule"]["deletedMatches"], 3);

    let regenerated = generate_test_schedule(&schema, league_id).await;
    assert_eq!(regenerated.len(), 3);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_clear_without_schedule_is_a_no_op() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let league_id = create_test_league(&app_state, "Empty League").await;

    let response = execute_graphql(
        &schema,
        CLEAR,
        Some(Variables::from_json(json!({ "leagueId": league_id.to_string() }))),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["clearSchedule"]["success"], true);
    assert_eq!(data["clearSchedule"]["deletedMatches"], 0);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_concurrent_generation_creates_one_schedule() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let league_id = create_test_league(&app_state, "Race League").await;
    create_test_roster(&app_state, league_id, 5).await;

    let variables = || {
        Variables::from_json(json!({
            "leagueId": league_id.to_string(),
            "input": { "startDate": "2025-03-01", "endDate": "2025-03-31" }
        }))
    };

    let (a, b) = tokio::join!(
        execute_graphql(&schema, GENERATE, Some(variables())),
        execute_graphql(&schema, GENERATE, Some(variables())),
    );

    let successes = [&a, &b].iter().filter(|r| r.errors.is_empty()).count();
    assert_eq!(successes, 1, "exactly one generation should win: {:?} / {:?}", a.errors, b.errors);

    let loser = if a.errors.is_empty() { &b } else { &a };
    assert_eq!(first_error_code(loser).as_deref(), Some("ALREADY_SCHEDULED"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matches WHERE league_id = $1")
        .bind(league_id)
        .fetch_one(&app_state.db)
        .await
        .unwrap();
    assert_eq!(count, 10);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_schedule_preview_reports_requirements_without_writing() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let league_id = create_test_league(&app_state, "Preview League").await;
    create_test_roster(&app_state, league_id, 5).await;

    let query = r#"
        query Preview($leagueId: ID!, $input: GenerateScheduleInput!) {
            schedulePreview(leagueId: $leagueId, input: $input) {
                requiredMatches
                requiredDays
                availableDays
                matchesPerDay
            }
        }
    "#;
    let variables = Variables::from_json(json!({
        "leagueId": league_id.to_string(),
        "input": { "startDate": "2025-03-01", "endDate": "2025-03-10", "matchesPerDay": 3 }
    }));

    let response = execute_graphql(&schema, query, Some(variables)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let preview = &data["schedulePreview"];
    assert_eq!(preview["requiredMatches"], 10);
    assert_eq!(preview["requiredDays"], 4);
    assert_eq!(preview["availableDays"], 10);
    assert_eq!(preview["matchesPerDay"], 3);

    let state: String =
        sqlx::query_scalar("SELECT schedule_state::text FROM leagues WHERE id = $1")
            .bind(league_id)
            .fetch_one(&app_state.db)
            .await
            .unwrap();
    assert_eq!(state, "no_schedule");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_unknown_league_and_unsupported_algorithm() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let missing = execute_graphql(
        &schema,
        GENERATE,
        Some(Variables::from_json(json!({
            "leagueId": uuid::Uuid::new_v4().to_string(),
            "input": {}
        }))),
    )
    .await;
    assert_eq!(first_error_code(&missing).as_deref(), Some("NOT_FOUND"));

    let league_id = create_test_league(&app_state, "Algo League").await;
    create_test_roster(&app_state, league_id, 4).await;

    let response = execute_graphql(
        &schema,
        GENERATE,
        Some(Variables::from_json(json!({
            "leagueId": league_id.to_string(),
            "input": { "algorithm": "double-round-robin" }
        }))),
    )
    .await;
    assert_eq!(first_error_code(&response).as_deref(), Some("UNSUPPORTED_ALGORITHM"));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_generated_fixtures_are_stored_as_returned() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let league_id = create_test_league(&app_state, "Stored League").await;
    create_test_roster(&app_state, league_id, 6).await;

    let variables = Variables::from_json(json!({
        "leagueId": league_id.to_string(),
        "input": {
            "startDate": "2025-04-01",
            "endDate": "2025-04-30",
            "matchesPerDay": 2,
            "venue": "Hall B"
        }
    }));
    let response = execute_graphql(&schema, GENERATE, Some(variables)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let fixtures = data["generateSchedule"].as_array().unwrap();
    assert_eq!(fixtures.len(), 15);

    let stored: Vec<(uuid::Uuid, chrono::NaiveDate, Option<String>, String, bool, bool)> =
        sqlx::query_as(
            r#"
            SELECT id, scheduled_date, location, status::text, generated, team_a_score IS NULL
            FROM matches
            WHERE league_id = $1
            "#,
        )
        .bind(league_id)
        .fetch_all(&app_state.db)
        .await
        .unwrap();
    assert_eq!(stored.len(), 15);

    for fixture in fixtures {
        let id = uuid::Uuid::parse_str(fixture["id"].as_str().unwrap()).unwrap();
        let (_, date, location, status, generated, no_result) = stored
            .iter()
            .find(|row| row.0 == id)
            .expect("returned fixture is stored");
        assert_eq!(date.to_string(), fixture["scheduledDate"].as_str().unwrap());
        assert_eq!(location.as_deref(), Some("Hall B"));
        assert_eq!(status, "scheduled");
        assert!(*generated);
        assert!(*no_result);
    }
}
