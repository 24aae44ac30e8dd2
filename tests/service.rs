use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_check() {
    let app_data = tools::AppData::new().await;

    let res = app_data
        .client()
        .get(app_data.url("/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK)
}

#[tokio::test]
async fn unknown_endpoint() {
    let app_data = tools::AppData::new().await;

    let res = app_data
        .client()
        .get(app_data.url("/nothing/here/at/all"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND)
}

#[tokio::test]
async fn users_not_initialized() {
    let app_data = tools::AppData::new().await;

    let res = app_data
        .client()
        .get(app_data.url("/users"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error_info"], "Users list is null or empty");
}

#[tokio::test]
async fn users_and_messages_flow() {
    let app_data = tools::AppData::new().await;
    let client = app_data.client();

    for path in ["/users/add/Alice&a@x.com", "/users/add/Bob&b@x.com"] {
        let res = client.post(app_data.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client.get(app_data.url("/users/2&0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = res.json().await.unwrap();
    assert_eq!(page.as_array().unwrap().len(), 2);
    assert_eq!(page[0]["userName"], "Alice");

    let res = client.get(app_data.url("/users/0&0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(app_data.url("/users/b@x.com")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["id"], 1);

    let res = client
        .post(app_data.url("/messages/add/Hi&Hello&0&1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(app_data.url("/messages/add/Hi&Hello&0&99"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    for path in ["/messages/0", "/1/messages", "/1/messages/0"] {
        let res = client.get(app_data.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let messages: Value = res.json().await.unwrap();
        assert_eq!(messages.as_array().unwrap().len(), 1, "{path}");
        assert_eq!(messages[0]["body"], "Hello");
    }

    for path in ["/messages/1", "/0/messages", "/0/messages/1"] {
        let res = client.get(app_data.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn load_without_files() {
    let app_data = tools::AppData::new().await;

    let res = app_data
        .client()
        .get(app_data.url("/loadDataFromJson"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND)
}

#[tokio::test]
async fn random_then_load() {
    let app_data = tools::AppData::new().await;
    let client = app_data.client();

    let res = client.post(app_data.url("/random")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(app_data.config.storage.users_path().exists());
    assert!(app_data.config.storage.messages_path().exists());

    let res = client
        .get(app_data.url("/loadDataFromJson"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(app_data.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let users: Vec<Value> = res.json().await.unwrap();
    assert!(!users.is_empty());
    let emails: Vec<&str> = users
        .iter()
        .map(|user| user["email"].as_str().unwrap())
        .collect();
    assert!(emails.windows(2).all(|pair| pair[0] <= pair[1]));

    let res = client
        .get(app_data.url("/saveDataToJson"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn save_into_unwritable_storage() {
    let mut config = tools::test_settings();
    config.storage = tools::blocked_storage();
    let app_data = tools::AppData::with_config(config).await;
    let client = app_data.client();

    for res in [
        client.get(app_data.url("/saveDataToJson")).send().await.unwrap(),
        client.post(app_data.url("/random")).send().await.unwrap(),
    ] {
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        let info = body["error_info"].as_str().unwrap();
        assert!(info.starts_with("Error in writing .json files."), "{info}");
        assert!(info.len() > "Error in writing .json files.".len());
    }

    let res = client.get(app_data.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_message_ids() {
    let app_data = tools::AppData::new().await;
    let client = app_data.client();

    for path in ["/messages/xyz", "/xyz/messages", "/1/messages/xyz"] {
        let res = client.get(app_data.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error_info"], "Malformed message parameters", "{path}");
    }
}

#[tokio::test]
async fn openapi_document() {
    let app_data = tools::AppData::new().await;
    let client = app_data.client();

    for path in ["/swagger", "/swagger/v1/swagger.json"] {
        let res = client.get(app_data.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let doc: Value = res.json().await.unwrap();
        assert_eq!(doc["info"]["title"], "MessageAPI");
        assert!(doc["paths"]["/users/{query}"].is_object());
        assert!(doc["paths"]["/{receiver_id}/messages/{sender_id}"].is_object());
        assert!(doc["components"]["schemas"]["User"].is_object());
    }
}
