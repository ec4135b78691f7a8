use crate::auth::{AuthSession, MessageResponse};
use crate::error::ApiError;
use crate::product::ProductId;

/// Wishlist endpoints of the storefront API.
#[allow(async_fn_in_trait)]
pub trait WishlistApi {
    /// `PATCH /wishlist/user/{username}/{product_id}`.
    async fn add_to_wishlist(
        &self,
        username: &str,
        product_id: ProductId,
    ) -> Result<MessageResponse, ApiError>;
}

pub fn wishlist_item_path(username: &str, product_id: ProductId) -> String {
    format!("/wishlist/user/{username}/{product_id}")
}

pub fn wishlist_path(username: &str) -> String {
    format!("/wishlist/user/{username}")
}

/// Result of an "add to wishlist" click, for the UI to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistOutcome {
    /// No session; the request was not sent.
    LoginRequired,
    /// Server accepted the item; carries its message.
    Added(String),
    /// Request failed; carries the stringified error.
    Failed(String),
}

/// Add a product to the signed-in user's wishlist.
///
/// Without a session nothing is sent. Failures are not retried.
pub async fn add_to_wishlist<A: WishlistApi>(
    api: &A,
    session: Option<&AuthSession>,
    product_id: ProductId,
) -> WishlistOutcome {
    let Some(session) = session else {
        return WishlistOutcome::LoginRequired;
    };
    match api.add_to_wishlist(&session.username, product_id).await {
        Ok(resp) => WishlistOutcome::Added(resp.message),
        Err(e) => WishlistOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::auth::Role;

    /// Records every call and answers with a canned result.
    struct FakeApi {
        reply: Result<MessageResponse, ApiError>,
        calls: RefCell<Vec<(String, ProductId)>>,
    }

    impl FakeApi {
        fn replying(reply: Result<MessageResponse, ApiError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl WishlistApi for FakeApi {
        async fn add_to_wishlist(
            &self,
            username: &str,
            product_id: ProductId,
        ) -> Result<MessageResponse, ApiError> {
            self.calls
                .borrow_mut()
                .push((username.to_string(), product_id));
            self.reply.clone()
        }
    }

    fn session() -> AuthSession {
        AuthSession {
            username: "ana".into(),
            roles: vec![Role::Client],
            access_token: None,
        }
    }

    #[test]
    fn anonymous_click_sends_nothing() {
        let api = FakeApi::replying(Ok(MessageResponse {
            message: "unused".into(),
        }));
        let outcome = block_on(add_to_wishlist(&api, None, ProductId(9)));
        assert_eq!(outcome, WishlistOutcome::LoginRequired);
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn signed_in_click_patches_and_reports_message() {
        let api = FakeApi::replying(Ok(MessageResponse {
            message: "Added to wishlist".into(),
        }));
        let outcome = block_on(add_to_wishlist(&api, Some(&session()), ProductId(9)));
        assert_eq!(outcome, WishlistOutcome::Added("Added to wishlist".into()));
        assert_eq!(*api.calls.borrow(), vec![("ana".to_string(), ProductId(9))]);
    }

    #[test]
    fn failure_is_reported_stringified_without_retry() {
        let api = FakeApi::replying(Err(ApiError::Status {
            status: 500,
            url: "http://localhost:3000/wishlist/user/ana/9".into(),
            body: "boom".into(),
        }));
        let outcome = block_on(add_to_wishlist(&api, Some(&session()), ProductId(9)));
        assert_eq!(
            outcome,
            WishlistOutcome::Failed(
                "HTTP 500 from http://localhost:3000/wishlist/user/ana/9: boom".into()
            )
        );
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[test]
    fn test_paths() {
        assert_eq!(wishlist_item_path("ana", ProductId(9)), "/wishlist/user/ana/9");
        assert_eq!(wishlist_path("ana"), "/wishlist/user/ana");
    }
}
