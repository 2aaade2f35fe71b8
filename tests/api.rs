//! End-to-end tests against a running service.

use reqwest::StatusCode;
use serde_json::{json, Value};

use house_projects::Project;

mod common;

use common::{seed, TestServer};

#[tokio::test]
async fn test_list_seeded_projects() {
    let server = TestServer::start(seed()).await;

    let res = server.client.get(server.url("/projects")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let mut titles: Vec<String> = res
        .json::<Vec<Project>>()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["first project", "second project"]);

    server.stop().await;
}

#[tokio::test]
async fn test_crud_lifecycle() {
    let server = TestServer::start(Vec::new()).await;
    let project = Project::new("Deck", 10, 4000.0, "Stain the deck");

    let res = server.client.post(server.url("/projects")).json(&project).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json::<Project>().await.unwrap(), project);

    let res = server.client.get(server.url("/projects/Deck")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Project>().await.unwrap(), project);

    let res = server
        .client
        .put(server.url("/projects/Deck"))
        .json(&json!({"title": "Deck", "cost": 4500.0, "duration_days": 12, "description": "Replace boards"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Project>().await.unwrap(),
        Project::new("Deck", 12, 4500.0, "Replace boards")
    );

    let res = server.client.delete(server.url("/projects/Deck")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().is_empty());

    let res = server.client.delete(server.url("/projects/Deck")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = server.client.get(server.url("/projects/Deck")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn test_duplicate_create_keeps_original() {
    let server = TestServer::start(seed()).await;

    let res = server
        .client
        .post(server.url("/projects"))
        .json(&Project::new("first project", 99, 99.0, "clobbered"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "cannot use existing title first project for new project");

    let got: Project = server
        .client
        .get(server.url("/projects/first%20project"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(got.description, "The first project");

    server.stop().await;
}

#[tokio::test]
async fn test_client_errors() {
    let server = TestServer::start(seed()).await;

    let res = server
        .client
        .post(server.url("/projects"))
        .json(&json!({"cost": 1.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "project title cannot be blank");

    let res = server
        .client
        .post(server.url("/projects"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .client
        .put(server.url("/projects/missing"))
        .json(&json!({"cost": 1.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server.client.get(server.url("/projects/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    server.stop().await;
}

#[tokio::test]
async fn test_update_never_renames() {
    let server = TestServer::start(seed()).await;

    let res = server
        .client
        .put(server.url("/projects/first%20project"))
        .json(&json!({"title": "renamed", "cost": 5.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server.client.get(server.url("/projects/renamed")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let got: Project = server
        .client
        .get(server.url("/projects/first%20project"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(got, Project::new("first project", 1, 1.11, "The first project"));

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_creates_single_winner() {
    let server = TestServer::start(Vec::new()).await;

    let mut tasks = Vec::new();
    for i in 0..16 {
        let client = server.client.clone();
        let url = server.url("/projects");
        tasks.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&Project::new("contested", i, i as f64, ""))
                .send()
                .await
                .unwrap()
                .status()
        }));
    }

    let mut created = 0;
    for task in tasks {
        match task.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => {}
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(created, 1);

    let all: Vec<Project> = server
        .client
        .get(server.url("/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 1);

    server.stop().await;
}

#[tokio::test]
async fn test_status_and_request_id() {
    let server = TestServer::start(seed()).await;

    let res = server.client.get(server.url("/status")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "operational");
    assert_eq!(body["projects"], 2);

    server.stop().await;
}
