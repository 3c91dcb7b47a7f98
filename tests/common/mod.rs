#![allow(dead_code)]

use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::net::IpAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use trivia::api::{self, AppState};
use trivia::config::Config;
use trivia::db::{init_db, seed_categories};
use trivia::{NewQuestion, Question, Repository};

pub struct TestApp {
    pub app: Router,
    pub repo: Arc<Repository>,
    /// Fixture questions as stored, in insertion (id) order.
    pub questions: Vec<Question>,
    _temp: TempDir,
}

/// (question, answer, category, difficulty)
pub const FIXTURE: [(&str, &str, i64, i64); 12] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
];

fn test_config(db_path: String) -> Config {
    Config {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        database_path: db_path,
        questions_per_page: 10,
        seed_categories: true,
    }
}

async fn build_app(with_categories: bool) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    if with_categories {
        seed_categories(&pool).await.expect("seed failed");
    }
    let repo = Arc::new(Repository::new(pool));
    let state = AppState::new(repo.clone(), test_config(db_path));

    TestApp {
        app: api::create_router(state),
        repo,
        questions: Vec::new(),
        _temp: temp_dir,
    }
}

/// Empty database: no categories, no questions.
pub async fn setup_empty_app() -> TestApp {
    build_app(false).await
}

/// Default categories, no questions.
pub async fn setup_categories_only_app() -> TestApp {
    build_app(true).await
}

/// Default categories plus the twelve fixture questions.
pub async fn setup_test_app() -> TestApp {
    let mut test_app = build_app(true).await;
    test_app.questions = seed_fixture(&test_app.repo).await;
    test_app
}

pub async fn seed_fixture(repo: &Repository) -> Vec<Question> {
    let mut stored = Vec::new();
    for (question, answer, category, difficulty) in FIXTURE {
        let q = repo
            .insert_question(&NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            })
            .await
            .expect("insert failed");
        stored.push(q);
    }
    stored
}

pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::DELETE, uri, None).await
}

pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}
