use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::bookstore::domain::model::{parse_bookstore_id, BookstoreEntity, AUTHOR_ATTRIBUTE, ID_ATTRIBUTE, PAGES_ATTRIBUTE, TITLE_ATTRIBUTE};
use crate::bookstore::repository::BookstoreRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_item, parse_number_attribute, parse_string_attribute};

#[derive(Debug)]
pub struct DDBBookstoreRepository {
    client: Client,
    table_name: String,
}

impl DDBBookstoreRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookstoreEntity> for DDBBookstoreRepository {
    async fn create(&self, entity: &BookstoreEntity) -> LibraryResult<usize> {
        entity.validate()?;
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(#id)")
            .expression_attribute_names("#id", ID_ATTRIBUTE)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(|err| {
            if let SdkError::ServiceError(ctx) = &err {
                if ctx.err().is_conditional_check_failed_exception() {
                    return LibraryError::duplicate_key(
                        format!("bookstore already exists for {}", entity.bookstore_id).as_str());
                }
            }
            LibraryError::from(err)
        })
    }

    // Attributes present on the entity are SET, absent ones are REMOVEd from the item.
    async fn update(&self, entity: &BookstoreEntity) -> LibraryResult<usize> {
        let id = parse_bookstore_id(entity.bookstore_id.as_str())?;
        let table_name: &str = self.table_name.as_ref();

        let fields = [
            ("author", AUTHOR_ATTRIBUTE, entity.author.clone().map(AttributeValue::S)),
            ("title", TITLE_ATTRIBUTE, entity.title.clone().map(AttributeValue::S)),
            ("pages", PAGES_ATTRIBUTE, entity.pages.map(|p| AttributeValue::N(p.to_string()))),
        ];

        let mut request = self.client
            .update_item()
            .table_name(table_name)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.clone()))
            .expression_attribute_names("#id", ID_ATTRIBUTE)
            .condition_expression("attribute_exists(#id)");

        let mut sets = vec![];
        let mut removes = vec![];
        for (alias, name, value) in fields {
            request = request.expression_attribute_names(format!("#{}", alias), name);
            match value {
                Some(value) => {
                    request = request.expression_attribute_values(format!(":{}", alias), value);
                    sets.push(format!("#{} = :{}", alias, alias));
                }
                None => removes.push(format!("#{}", alias)),
            }
        }
        request = request.update_expression(build_update_expr(&sets, &removes));

        request
            .send()
            .await.map(|_| 1).map_err(|err| {
            if let SdkError::ServiceError(ctx) = &err {
                if ctx.err().is_conditional_check_failed_exception() {
                    return LibraryError::not_found(format!("bookstore not found for {}", id).as_str());
                }
            }
            LibraryError::from(err)
        })
    }

    async fn get(&self, id: &str) -> LibraryResult<BookstoreEntity> {
        let id = parse_bookstore_id(id)?;
        let table_name: &str = self.table_name.as_ref();
        self.client
            .get_item()
            .table_name(table_name)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.clone()))
            .consistent_read(true)
            .send()
            .await.map_err(LibraryError::from).and_then(|res| {
            match res.item() {
                Some(map) => Ok(map_to_bookstore(map)),
                None => Err(LibraryError::not_found(format!("bookstore not found for {}", id).as_str())),
            }
        })
    }

    // fetch-and-remove, the old item tells whether anything was deleted
    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let id = parse_bookstore_id(id)?;
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.clone()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await.map_err(LibraryError::from).and_then(|res| {
            match res.attributes() {
                Some(_) => Ok(1),
                None => Err(LibraryError::not_found(format!("bookstore not found for {}", id).as_str())),
            }
        })
    }
}

#[async_trait]
impl BookstoreRepository for DDBBookstoreRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookstoreEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;
            records.extend(res.items().unwrap_or_default().iter().map(map_to_bookstore));
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        Ok(records)
    }
}

fn build_update_expr(sets: &[String], removes: &[String]) -> String {
    let mut update_expr = String::new();
    if !sets.is_empty() {
        update_expr.push_str(format!("SET {}", sets.join(", ")).as_str());
    }
    if !removes.is_empty() {
        if !update_expr.is_empty() {
            update_expr.push(' ');
        }
        update_expr.push_str(format!("REMOVE {}", removes.join(", ")).as_str());
    }
    update_expr
}

fn map_to_bookstore(map: &HashMap<String, AttributeValue>) -> BookstoreEntity {
    BookstoreEntity {
        bookstore_id: parse_string_attribute(ID_ATTRIBUTE, map).unwrap_or(String::from("")),
        author: parse_string_attribute(AUTHOR_ATTRIBUTE, map),
        title: parse_string_attribute(TITLE_ATTRIBUTE, map),
        pages: parse_number_attribute(PAGES_ATTRIBUTE, map),
    }
}
