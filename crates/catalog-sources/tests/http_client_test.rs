use catalog_config::ApiConfig;
use catalog_sources::{CatalogSource, HttpCatalogClient, SourceError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_seconds: 5,
        ..ApiConfig::default()
    }
}

#[tokio::test]
async fn fetches_and_validates_movies() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {
            "_id": "m1",
            "title": "Terminator",
            "genre": { "_id": "g1", "name": "Action" },
            "numberInStock": 6,
            "dailyRentalRate": 2.5
        },
        {
            "_id": "m2",
            "title": "Titanic",
            "genre": { "_id": "g2", "name": "Drama" },
            "numberInStock": 0,
            "dailyRentalRate": 3
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
    let movies = client.fetch_movies().await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Terminator");
    assert_eq!(movies[1].genre.name, "Drama");
    assert_eq!(movies[1].daily_rental_rate, 3.0);
}

#[tokio::test]
async fn fetches_genres() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "_id": "g1", "name": "Action" },
            { "id": "g2", "name": "Comedy" }
        ])))
        .mount(&server)
        .await;

    let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
    let genres = client.fetch_genres().await.unwrap();

    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Action", "Comedy"]);
    assert_eq!(genres[1].id, "g2");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
    let err = client.fetch_movies().await.unwrap_err();

    match err {
        SourceError::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
    let err = client.fetch_genres().await.unwrap_err();
    assert!(matches!(err, SourceError::Parse { .. }));
}

#[tokio::test]
async fn one_invalid_record_fails_the_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "_id": "m1",
                "title": "Up",
                "genre": { "_id": "g1", "name": "Animation" },
                "numberInStock": -1,
                "dailyRentalRate": 1.0
            }
        ])))
        .mount(&server)
        .await;

    let client = HttpCatalogClient::new(&api_config(&server)).unwrap();
    let err = client.fetch_movies().await.unwrap_err();
    assert!(matches!(err, SourceError::Invalid(_)));
    assert!(err.to_string().contains("numberInStock"));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        timeout_seconds: 1,
        ..api_config(&server)
    };
    let client = HttpCatalogClient::new(&config).unwrap();
    let err = client.fetch_genres().await.unwrap_err();
    assert!(matches!(err, SourceError::Timeout { .. }), "got {err:?}");
}
