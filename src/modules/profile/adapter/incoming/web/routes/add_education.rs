use actix_web::{post, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    profile::application::validation::EducationInput, shared::api::ApiResponse, AppState,
};

use super::profile_error_response;

#[post("/api/profile/education")]
pub async fn add_education_handler(
    user: AuthenticatedUser,
    body: web::Json<EducationInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .entries
        .add_education(user.user_id(), body.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(err) => profile_error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, token_provider_data};
    use crate::tests::support::fixtures::profile_for;

    #[actix_web::test]
    async fn adds_education_entry() {
        let builder = TestAppStateBuilder::default();
        let jane = builder.users().seed("Jane Doe", "jane@example.com", "secret1");
        builder.profiles().seed(profile_for(jane.id, "jane"));

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(add_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/profile/education")
            .insert_header(("Authorization", bearer_for(&jane)))
            .set_json(json!({
                "school": "MIT",
                "degree": "BSc",
                "field_of_study": "Computer Science",
                "from": "2015-09-01",
                "to": "2019-06-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["education"][0]["school"], "MIT");
        assert_eq!(body["data"]["education"][0]["to"], "2019-06-01");
    }

    #[actix_web::test]
    async fn end_before_start_is_rejected() {
        let builder = TestAppStateBuilder::default();
        let jane = builder.users().seed("Jane Doe", "jane@example.com", "secret1");
        builder.profiles().seed(profile_for(jane.id, "jane"));

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data())
                .service(add_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/profile/education")
            .insert_header(("Authorization", bearer_for(&jane)))
            .set_json(json!({
                "school": "MIT",
                "degree": "BSc",
                "field_of_study": "Computer Science",
                "from": "2019-09-01",
                "to": "2015-06-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
