use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, Sale, SaleCmd, sales};

use super::{Engine, with_tx};

/// Ordering of [`Engine::sales`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Descending id, most recent first.
    #[default]
    NewestFirst,
    /// Ascending id, insertion order.
    OldestFirst,
}

fn not_found(id: i64) -> EngineError {
    EngineError::KeyNotFound(format!("sale {id}"))
}

impl Engine {
    /// Records a sale and returns the id the store assigned to it.
    ///
    /// VAT, total invoice and profit are derived from `cmd` with the engine
    /// VAT policy before the row is inserted.
    pub async fn create_sale(&self, cmd: SaleCmd) -> ResultEngine<i64> {
        cmd.validate()?;
        let derived = self.quote(&cmd);
        with_tx!(self, |db_tx| {
            let model = sales::ActiveModel::from_cmd(cmd, derived)
                .insert(&db_tx)
                .await?;
            tracing::debug!(sale_id = model.id, "sale recorded");
            Ok(model.id)
        })
    }

    /// Returns every sale in the ledger.
    pub async fn sales(&self, order: ListOrder) -> ResultEngine<Vec<Sale>> {
        let query = sales::Entity::find();
        let query = match order {
            ListOrder::NewestFirst => query.order_by_desc(sales::Column::Id),
            ListOrder::OldestFirst => query.order_by_asc(sales::Column::Id),
        };
        let models = query.all(&self.database).await?;
        Ok(models.into_iter().map(Sale::from).collect())
    }

    /// Looks up a sale by id.
    pub async fn sale(&self, id: i64) -> ResultEngine<Sale> {
        sales::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Sale::from)
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every input field of a sale and recomputes its derived
    /// values. The id is preserved.
    pub async fn update_sale(&self, id: i64, cmd: SaleCmd) -> ResultEngine<()> {
        cmd.validate()?;
        let derived = self.quote(&cmd);
        with_tx!(self, |db_tx| {
            if sales::Entity::find_by_id(id).one(&db_tx).await?.is_none() {
                return Err(not_found(id));
            }
            let mut model = sales::ActiveModel::from_cmd(cmd, derived);
            model.id = ActiveValue::Unchanged(id);
            model.update(&db_tx).await?;
            tracing::debug!(sale_id = id, "sale updated");
            Ok(())
        })
    }

    /// Removes a sale. Deleting an id that is not in the ledger is a no-op.
    pub async fn delete_sale(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = sales::Entity::delete_by_id(id).exec(&db_tx).await?;
            if result.rows_affected == 0 {
                tracing::debug!(sale_id = id, "delete of missing sale ignored");
            }
            Ok(())
        })
    }
}
