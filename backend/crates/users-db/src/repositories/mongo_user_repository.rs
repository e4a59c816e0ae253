use crate::{
    DATABASE_NAME, Result as DbErrorResult, USERS_COLLECTION, UserStore, id_filter,
    user_from_document, user_to_document,
};

use users_core::User;

use async_trait::async_trait;
use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc},
};

/// `UserStore` backed by the `goformongo.users` collection.
#[derive(Clone)]
pub struct MongoUserRepository {
    database: Database,
    collection: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(client: &Client) -> Self {
        let database = client.database(DATABASE_NAME);
        let collection = database.collection::<Document>(USERS_COLLECTION);

        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<User>> {
        self.collection
            .find_one(id_filter(id))
            .await?
            .map(user_from_document)
            .transpose()
    }

    async fn insert(&self, user: &User) -> DbErrorResult<()> {
        let document = user_to_document(user)?;
        self.collection.insert_one(document).await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> DbErrorResult<u64> {
        let result = self.collection.delete_one(id_filter(id)).await?;

        Ok(result.deleted_count)
    }

    async fn ping(&self) -> DbErrorResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;

        Ok(())
    }
}
