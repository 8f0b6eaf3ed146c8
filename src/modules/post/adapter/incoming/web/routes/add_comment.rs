use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    post::application::validation::PostInput, shared::api::ApiResponse, AppState,
};

use super::post_error_response;

#[post("/api/posts/comment/{post_id}")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<PostInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post
        .comments
        .add(user.identity, path.into_inner(), body.into_inner())
        .await
    {
        Ok(comments) => ApiResponse::success(comments),
        Err(err) => post_error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, token_provider_data};
    use crate::tests::support::fixtures::post_by;

    #[actix_web::test]
    async fn name_comes_from_the_token_not_the_body() {
        let builder = TestAppStateBuilder::default();
        let john = builder.users().seed("John Roe", "john@example.com", "secret1");
        let post = post_by(Uuid::new_v4(), "What do you all think?");
        builder.posts().seed(post.clone());

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(add_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/comment/{}", post.id))
            .insert_header(("Authorization", bearer_for(&john)))
            .set_json(json!({
                "text": "I think it is great",
                "name": "Somebody Else",
                "avatar_url": "https://evil.example.com/a.png"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "John Roe");
        assert_eq!(body["data"][0]["avatar_url"], john.avatar_url.as_str());
        assert_eq!(body["data"][0]["user_id"], john.id.to_string());
    }

    #[actix_web::test]
    async fn missing_post_is_not_found() {
        let builder = TestAppStateBuilder::default();
        let john = builder.users().seed("John Roe", "john@example.com", "secret1");

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(add_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/comment/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer_for(&john)))
            .set_json(json!({ "text": "I think it is great" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    }
}
