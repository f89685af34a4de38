use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::OrganizerService;

#[utoipa::path(
    get,
    path = "/organizers/top",
    tag = "organizers",
    params(
        ("limit" = Option<usize>, Query, description = "返回条数上限 (默认6)")
    ),
    responses(
        (status = 200, description = "获取组织方榜单成功", body = [OrganizerResponse])
    )
)]
/// 获取组织方榜单，按名下活动数倒序
pub async fn get_top_organizers(
    service: web::Data<OrganizerService>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let list = service.top(query.limit);
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list })))
}

#[utoipa::path(
    get,
    path = "/organizers/{id}",
    tag = "organizers",
    params(
        ("id" = String, Path, description = "组织方ID")
    ),
    responses(
        (status = 200, description = "获取组织方主页成功", body = OrganizerProfileResponse),
        (status = 404, description = "组织方不存在")
    )
)]
/// 获取组织方主页（进行中/往期活动与累计统计）
pub async fn get_organizer(
    service: web::Data<OrganizerService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.profile(&path.into_inner()) {
        Ok(profile) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": profile }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn organizer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/organizers")
            .route("/top", web::get().to(get_top_organizers))
            .route("/{id}", web::get().to(get_organizer)),
    );
}
