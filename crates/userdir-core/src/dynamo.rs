//! DynamoDB-backed store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

use userdir_model::User;

use crate::error::StoreError;
use crate::store::UserStore;

/// Partition key attribute.
const EMAIL_ATTR: &str = "email";
const FIRST_NAME_ATTR: &str = "firstName";
const LAST_NAME_ATTR: &str = "lastName";

/// User store backed by a DynamoDB table with `email` as the partition key.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Create a store over an already-configured DynamoDB client.
    #[must_use]
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Returns the table this store writes to.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Encode a record as a DynamoDB item. All attributes are string-typed.
fn to_item(user: &User) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (EMAIL_ATTR.to_owned(), AttributeValue::S(user.email.clone())),
        (
            FIRST_NAME_ATTR.to_owned(),
            AttributeValue::S(user.first_name.clone()),
        ),
        (
            LAST_NAME_ATTR.to_owned(),
            AttributeValue::S(user.last_name.clone()),
        ),
    ])
}

/// Decode a DynamoDB item into a record.
///
/// Missing attributes decode as empty strings; a non-string attribute is a
/// decode failure.
fn from_item(item: &HashMap<String, AttributeValue>) -> Result<User, StoreError> {
    let field = |name: &str| -> Result<String, StoreError> {
        match item.get(name) {
            None => Ok(String::new()),
            Some(AttributeValue::S(s)) => Ok(s.clone()),
            Some(other) => Err(StoreError::Decode(format!(
                "attribute {name} is not a string: {other:?}"
            ))),
        }
    };

    Ok(User {
        email: field(EMAIL_ATTR)?,
        first_name: field(FIRST_NAME_ATTR)?,
        last_name: field(LAST_NAME_ATTR)?,
    })
}

#[async_trait]
impl UserStore for DynamoStore {
    async fn get(&self, email: &str) -> Result<Option<User>, StoreError> {
        let out = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(EMAIL_ATTR, AttributeValue::S(email.to_owned()))
            .consistent_read(true)
            .send()
            .await
            .map_err(StoreError::request)?;

        out.item().map(from_item).transpose()
    }

    async fn scan(&self) -> Result<Vec<User>, StoreError> {
        let out = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(StoreError::request)?;

        out.items().iter().map(from_item).collect()
    }

    async fn put_new(&self, user: &User) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(user)))
            .condition_expression("attribute_not_exists(email)")
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(|se| se.is_conditional_check_failed_exception())
                {
                    StoreError::ConditionFailed
                } else {
                    StoreError::request(e)
                }
            })?;

        Ok(())
    }

    async fn put(&self, user: &User) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(user)))
            .send()
            .await
            .map_err(StoreError::request)?;

        Ok(())
    }

    async fn delete_existing(&self, email: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(EMAIL_ATTR, AttributeValue::S(email.to_owned()))
            .condition_expression("attribute_exists(email)")
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(|se| se.is_conditional_check_failed_exception())
                {
                    StoreError::ConditionFailed
                } else {
                    StoreError::request(e)
                }
            })?;

        Ok(())
    }
}
