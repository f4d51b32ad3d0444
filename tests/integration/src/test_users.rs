//! End-to-end user CRUD tests against a running DynamoDB endpoint.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use userdir_core::{DynamoStore, UserRepository};
    use userdir_http::{ApiRequest, UserApiService};
    use userdir_model::User;

    use crate::{cleanup_table, create_users_table, dynamodb_client, test_table_name};

    /// Helper: build the full dispatch stack over a fresh table. The client
    /// is returned alongside so the test can clean the table up.
    async fn service_with_table(
        prefix: &str,
    ) -> (
        UserApiService<DynamoStore>,
        aws_sdk_dynamodb::Client,
        String,
    ) {
        let client = dynamodb_client();
        let table_name = test_table_name(prefix);
        create_users_table(&client, &table_name).await;

        let store = DynamoStore::new(client.clone(), table_name.clone());
        let service = UserApiService::new(UserRepository::new(store), Duration::from_secs(10));
        (service, client, table_name)
    }

    fn post(user: &User) -> ApiRequest {
        ApiRequest::new(http::Method::POST).with_body(serde_json::to_vec(user).unwrap())
    }

    fn get(email: &str) -> ApiRequest {
        ApiRequest::new(http::Method::GET).with_query("email", email)
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_create_and_fetch_user() {
        let (svc, client, table) = service_with_table("crud").await;

        let resp = svc.handle(post(&User::new("a@b.com", "Ada", "Lovelace"))).await;
        assert_eq!(resp.status(), http::StatusCode::CREATED);

        let resp = svc.handle(get("a@b.com")).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        let user: User = serde_json::from_str(resp.body()).unwrap();
        assert_eq!(user, User::new("a@b.com", "Ada", "Lovelace"));

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_reject_duplicate_create() {
        let (svc, client, table) = service_with_table("dup").await;

        svc.handle(post(&User::new("a@b.com", "Ada", "Lovelace"))).await;
        let resp = svc.handle(post(&User::new("a@b.com", "Grace", "Hopper"))).await;

        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(resp.body(), r#"{"error":"user already exists"}"#);

        // First write preserved.
        let resp = svc.handle(get("a@b.com")).await;
        let user: User = serde_json::from_str(resp.body()).unwrap();
        assert_eq!(user.first_name, "Ada");

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_update_existing_user() {
        let (svc, client, table) = service_with_table("update").await;

        svc.handle(post(&User::new("a@b.com", "Ada", "Lovelace"))).await;
        let resp = svc
            .handle(
                ApiRequest::new(http::Method::PUT)
                    .with_body(serde_json::to_vec(&User::new("a@b.com", "Augusta", "King")).unwrap()),
            )
            .await;
        assert_eq!(resp.status(), http::StatusCode::OK);

        let resp = svc.handle(get("a@b.com")).await;
        let user: User = serde_json::from_str(resp.body()).unwrap();
        assert_eq!(user, User::new("a@b.com", "Augusta", "King"));

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_delete_user_then_fetch_empty_record() {
        let (svc, client, table) = service_with_table("delete").await;

        svc.handle(post(&User::new("a@b.com", "Ada", "Lovelace"))).await;
        let resp = svc
            .handle(ApiRequest::new(http::Method::DELETE).with_query("email", "a@b.com"))
            .await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(resp.body(), r#"{"status":"deleted"}"#);

        let resp = svc.handle(get("a@b.com")).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        let user: User = serde_json::from_str(resp.body()).unwrap();
        assert!(!user.is_present());

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_reject_delete_of_missing_user() {
        let (svc, client, table) = service_with_table("delmiss").await;

        let resp = svc
            .handle(ApiRequest::new(http::Method::DELETE).with_query("email", "ghost@b.com"))
            .await;

        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(resp.body(), r#"{"error":"could not delete item"}"#);

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_scan_all_users() {
        let (svc, client, table) = service_with_table("scan").await;

        for i in 1..=3 {
            svc.handle(post(&User::new(
                format!("user{i}@b.com"),
                format!("First{i}"),
                format!("Last{i}"),
            )))
            .await;
        }

        let resp = svc.handle(ApiRequest::new(http::Method::GET)).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        let users: Vec<User> = serde_json::from_str(resp.body()).unwrap();
        assert_eq!(users.len(), 3);

        cleanup_table(&client, &table).await;
    }
}
