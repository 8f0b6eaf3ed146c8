use actix_web::{delete, web, Responder};
use tracing::{error, warn};

use crate::{
    auth::{
        adapter::incoming::web::extractors::AuthenticatedUser,
        application::orchestrator::account_deletion::DeleteAccountError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Deletes the caller's profile and user record.
#[delete("/api/profile")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.delete_account.execute(user.user_id()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteAccountError::UserNotFound) => {
            warn!(user_id = %user.user_id(), "Delete requested for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteAccountError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id(), error = %msg, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use uuid::Uuid;

    use crate::shared::config::AuthoredPostsPolicy;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, token_provider_data};
    use crate::tests::support::fixtures::{post_by, profile_for};

    #[actix_web::test]
    async fn removes_user_and_profile() {
        let builder = TestAppStateBuilder::default();
        let jane = builder.users().seed("Jane Doe", "jane@example.com", "secret1");
        builder.profiles().seed(profile_for(jane.id, "jane"));
        builder.posts().seed(post_by(jane.id, "Still here after I leave"));
        let (users, profiles, posts) = (builder.users(), builder.profiles(), builder.posts());

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(delete_account_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/profile")
            .insert_header(("Authorization", bearer_for(&jane)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(users.get(jane.id).is_none());
        assert!(profiles.get(jane.id).is_none());
        assert_eq!(posts.count(), 1);
    }

    #[actix_web::test]
    async fn delete_policy_also_removes_authored_posts() {
        let builder = TestAppStateBuilder::default().posts_policy(AuthoredPostsPolicy::Delete);
        let jane = builder.users().seed("Jane Doe", "jane@example.com", "secret1");
        builder.posts().seed(post_by(jane.id, "Gone together with me"));
        builder
            .posts()
            .seed(post_by(Uuid::new_v4(), "Somebody else's post"));
        let posts = builder.posts();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(delete_account_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/profile")
            .insert_header(("Authorization", bearer_for(&jane)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(posts.count(), 1);
    }

    #[actix_web::test]
    async fn requires_a_token() {
        let builder = TestAppStateBuilder::default();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(delete_account_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
