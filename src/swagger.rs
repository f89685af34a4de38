use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::sweepstake::list_sweepstakes,
        handlers::sweepstake::get_featured,
        handlers::sweepstake::get_latest,
        handlers::sweepstake::get_ending_soon,
        handlers::sweepstake::get_sweepstake,
        handlers::sweepstake::create_sweepstake,
        handlers::sweepstake::get_statistics,
        handlers::category::get_categories,
        handlers::category::get_category,
        handlers::organizer::get_top_organizers,
        handlers::organizer::get_organizer,
    ),
    components(
        schemas(
            PrizeType,
            Sweepstake,
            SweepstakeResponse,
            SweepstakeDetailResponse,
            CreateSweepstakeRequest,
            SweepstakeListQuery,
            LimitQuery,
            SiteStatisticsResponse,
            CategoryInfo,
            CategoryPageResponse,
            Organizer,
            OrganizerResponse,
            OrganizerStatistics,
            OrganizerProfileResponse,
        )
    ),
    tags(
        (name = "sweepstakes", description = "Sweepstakes listing API"),
        (name = "categories", description = "Prize category API"),
        (name = "organizers", description = "Organizer API"),
        (name = "statistics", description = "Site statistics API"),
    ),
    info(
        title = "UberSweepstakes Backend API",
        version = "1.0.0",
        description = "UberSweepstakes Backend REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
