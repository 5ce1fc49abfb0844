use std::sync::Arc;

use crate::advice::AdviceRegistry;
use crate::model::invocation::Invocation;
use crate::order::OrderError;

const SAVE: Invocation =
    Invocation::new(super::SCOPE, "OrderRepository", "save").with_params(&["itemId"]);

/// Item id that makes [`OrderRepository::save`] fail.
pub const FAILING_ITEM: &str = "ex";

#[derive(Debug, Clone)]
pub struct OrderRepository {
    registry: Arc<AdviceRegistry>,
}

impl OrderRepository {
    pub fn new(registry: Arc<AdviceRegistry>) -> Self {
        Self { registry }
    }

    pub fn save(&self, item_id: &str) -> Result<String, OrderError> {
        self.registry.invoke(&SAVE, || {
            tracing::info!("[orderRepository] 실행");
            if item_id == FAILING_ITEM {
                return Err(OrderError::IllegalState);
            }
            Ok("ok".to_string())
        })
    }
}
