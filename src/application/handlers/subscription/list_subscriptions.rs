//! ListSubscriptionsHandler - Query handler for a user's subscriptions.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionGateway;

use super::SubscriptionCommandError;

/// Query to list a user's subscriptions.
#[derive(Debug, Clone)]
pub struct ListSubscriptionsQuery {
    pub user_id: UserId,
    /// Hide retired records.
    pub active_only: bool,
}

pub type ListSubscriptionsResult = Vec<Subscription>;

pub struct ListSubscriptionsHandler {
    gateway: Arc<dyn SubscriptionGateway>,
}

impl ListSubscriptionsHandler {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<ListSubscriptionsResult, SubscriptionCommandError> {
        let mut subscriptions = self.gateway.list(&query.user_id).await?;
        if query.active_only {
            subscriptions.retain(|s| s.is_active);
        }
        Ok(subscriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::subscription::test_support::MockSubscriptionGateway;
    use crate::domain::subscription::BillingCycle;
    use crate::ports::GatewayError;
    use chrono::NaiveDate;

    fn user() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    fn records() -> Vec<Subscription> {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let active = Subscription::new(user(), "Active", 10.0, BillingCycle::Monthly, None, date);
        let mut retired = Subscription::new(user(), "Retired", 5.0, BillingCycle::Monthly, None, date);
        retired.is_active = false;
        vec![active, retired]
    }

    #[tokio::test]
    async fn active_only_hides_retired_records() {
        let handler = ListSubscriptionsHandler::new(Arc::new(MockSubscriptionGateway::with_records(records())));

        let result = handler
            .handle(ListSubscriptionsQuery {
                user_id: user(),
                active_only: true,
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Active");
    }

    #[tokio::test]
    async fn full_listing_keeps_gateway_order() {
        let handler = ListSubscriptionsHandler::new(Arc::new(MockSubscriptionGateway::with_records(records())));

        let result = handler
            .handle(ListSubscriptionsQuery {
                user_id: user(),
                active_only: false,
            })
            .await
            .unwrap();

        let names: Vec<&str> = result.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Active", "Retired"]);
    }

    #[tokio::test]
    async fn gateway_failure_is_propagated() {
        let handler = ListSubscriptionsHandler::new(Arc::new(MockSubscriptionGateway::failing()));

        let result = handler
            .handle(ListSubscriptionsQuery {
                user_id: user(),
                active_only: true,
            })
            .await;

        assert!(matches!(
            result,
            Err(SubscriptionCommandError::Gateway(GatewayError::Unavailable(_)))
        ));
    }
}
