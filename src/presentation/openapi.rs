use crate::application::auth::admin_login::{AdminLoginRequest, AdminLoginResponse};
use crate::application::courses::create::CreateCourseRequest;
use crate::application::courses::update::UpdateCourseRequest;
use crate::application::inquiries::submit::SubmitInquiryRequest;
use crate::application::notices::create::CreateNoticeRequest;
use crate::application::reviews::create::CreateReviewRequest;
use crate::domain::courses::Course;
use crate::domain::inquiries::{Inquiry, InquiryStatus};
use crate::domain::notices::Notice;
use crate::domain::reviews::Review;
use crate::presentation::handlers::health::{HealthResponse, RootResponse};
use crate::shared::error::{ApiError, ErrorResponse};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ClassDesk API",
        version = "0.1.0",
        description = "Backend for a coaching institute: public admission inquiries, course catalog, \
                       reviews and notices, with a single-admin dashboard."
    ),
    paths(
        crate::presentation::handlers::health::health_check,
        crate::presentation::handlers::health::root,
        crate::presentation::handlers::inquiries::submit_inquiry,
        crate::presentation::handlers::inquiries::list_inquiries,
        crate::presentation::handlers::inquiries::get_inquiry,
        crate::presentation::handlers::inquiries::set_inquiry_status,
        crate::presentation::handlers::courses::list_courses,
        crate::presentation::handlers::courses::get_course,
        crate::presentation::handlers::courses::create_course,
        crate::presentation::handlers::courses::update_course,
        crate::presentation::handlers::courses::delete_course,
        crate::presentation::handlers::reviews::list_reviews,
        crate::presentation::handlers::reviews::create_review,
        crate::presentation::handlers::notices::list_notices,
        crate::presentation::handlers::notices::create_notice,
        crate::presentation::handlers::notices::delete_notice,
        crate::presentation::handlers::auth::admin_login,
        crate::presentation::handlers::auth::admin_logout,
    ),
    components(
        schemas(
            Inquiry,
            InquiryStatus,
            Course,
            Review,
            Notice,
            SubmitInquiryRequest,
            CreateCourseRequest,
            UpdateCourseRequest,
            CreateReviewRequest,
            CreateNoticeRequest,
            AdminLoginRequest,
            AdminLoginResponse,
            HealthResponse,
            RootResponse,
            ErrorResponse,
            ApiError,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "inquiries", description = "Admission inquiries"),
        (name = "courses", description = "Course catalog"),
        (name = "reviews", description = "Student reviews"),
        (name = "notices", description = "Notice board"),
        (name = "auth", description = "Admin session")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
