use std::sync::Arc;

use crate::advice::AdviceRegistry;
use crate::model::invocation::Invocation;
use crate::order::OrderError;
use crate::order::repository::OrderRepository;

const ORDER_ITEM: Invocation =
    Invocation::new(super::SCOPE, "OrderService", "orderItem").with_params(&["itemId"]);

#[derive(Debug, Clone)]
pub struct OrderService {
    registry: Arc<AdviceRegistry>,
    repository: OrderRepository,
}

impl OrderService {
    pub fn new(registry: Arc<AdviceRegistry>) -> Self {
        let repository = OrderRepository::new(Arc::clone(&registry));
        Self {
            registry,
            repository,
        }
    }

    pub fn order_item(&self, item_id: &str) -> Result<String, OrderError> {
        self.registry.invoke(&ORDER_ITEM, || {
            tracing::info!("[orderService] 실행");
            self.repository.save(item_id)
        })
    }
}
