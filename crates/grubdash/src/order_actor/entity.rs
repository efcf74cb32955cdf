//! [`ActorEntity`] implementation for [`Order`].

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// New orders always start out `pending`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            deliver_to: params.deliver_to,
            mobile_number: params.mobile_number,
            status: OrderStatus::Pending,
            dishes: params.dishes,
        })
    }

    /// Replaces every field except the id, unless the order is already delivered.
    async fn on_update(&mut self, update: OrderUpdate) -> Result<(), Self::Error> {
        if self.status == OrderStatus::Delivered {
            return Err(OrderError::Delivered);
        }
        self.deliver_to = update.deliver_to;
        self.mobile_number = update.mobile_number;
        self.status = update.status;
        self.dishes = update.dishes;
        Ok(())
    }

    async fn on_delete(&self) -> Result<(), Self::Error> {
        match self.status {
            OrderStatus::Pending => Ok(()),
            status => Err(OrderError::NotPending { status }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineItem;
    use serde_json::json;

    fn line_item() -> LineItem {
        LineItem {
            dish: json!({ "dishId": "1" }).as_object().cloned().unwrap(),
            quantity: 2,
        }
    }

    fn order() -> Order {
        Order::from_create_params(
            OrderId::from("o1"),
            OrderCreate {
                deliver_to: "123 Main".into(),
                mobile_number: "555-0100".into(),
                dishes: vec![line_item()],
            },
        )
        .unwrap()
    }

    fn update(status: OrderStatus) -> OrderUpdate {
        OrderUpdate {
            deliver_to: "456 Elm".into(),
            mobile_number: "555-0199".into(),
            status,
            dishes: vec![line_item()],
        }
    }

    #[tokio::test]
    async fn created_orders_are_pending_and_deletable() {
        let order = order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.on_delete().await.is_ok());
    }

    #[tokio::test]
    async fn delivered_orders_are_frozen() {
        let mut order = order();
        order.on_update(update(OrderStatus::Delivered)).await.unwrap();
        assert_eq!(order.deliver_to, "456 Elm");

        let before = order.clone();
        let err = order.on_update(update(OrderStatus::Pending)).await.unwrap_err();
        assert_eq!(err, OrderError::Delivered);
        assert_eq!(order, before);
    }

    #[tokio::test]
    async fn only_pending_orders_can_be_deleted() {
        let mut order = order();
        order.on_update(update(OrderStatus::Preparing)).await.unwrap();
        assert_eq!(
            order.on_delete().await,
            Err(OrderError::NotPending {
                status: OrderStatus::Preparing
            })
        );
    }
}
