use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::SweepstakeService;

#[utoipa::path(
    get,
    path = "/sweepstakes",
    tag = "sweepstakes",
    params(
        ("sort" = Option<String>, Query, description = "排序方式: latest / ending-soon"),
        ("category" = Option<String>, Query, description = "类别 slug (如 cash, gift-cards)"),
        ("limit" = Option<usize>, Query, description = "返回条数上限")
    ),
    responses(
        (status = 200, description = "获取活动列表成功", body = [SweepstakeResponse]),
        (status = 400, description = "排序或类别参数无效")
    )
)]
/// 获取活动列表（可选排序与类别过滤）
pub async fn list_sweepstakes(
    service: web::Data<SweepstakeService>,
    query: web::Query<SweepstakeListQuery>,
) -> Result<HttpResponse> {
    match service.list(&query.into_inner()) {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/sweepstakes/featured",
    tag = "sweepstakes",
    params(
        ("limit" = Option<usize>, Query, description = "返回条数上限 (默认3)")
    ),
    responses(
        (status = 200, description = "获取精选活动成功", body = [SweepstakeResponse])
    )
)]
/// 获取精选活动，保持数据原有顺序
pub async fn get_featured(
    service: web::Data<SweepstakeService>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let list = service.featured(query.limit);
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list })))
}

#[utoipa::path(
    get,
    path = "/sweepstakes/latest",
    tag = "sweepstakes",
    params(
        ("limit" = Option<usize>, Query, description = "返回条数上限 (默认10)")
    ),
    responses(
        (status = 200, description = "获取最新活动成功", body = [SweepstakeResponse])
    )
)]
/// 获取最新活动，按创建时间倒序
pub async fn get_latest(
    service: web::Data<SweepstakeService>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let list = service.latest(query.limit);
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list })))
}

#[utoipa::path(
    get,
    path = "/sweepstakes/ending-soon",
    tag = "sweepstakes",
    params(
        ("limit" = Option<usize>, Query, description = "返回条数上限 (默认10)")
    ),
    responses(
        (status = 200, description = "获取即将截止活动成功", body = [SweepstakeResponse])
    )
)]
/// 获取即将截止的活动，只含进行中的，按截止时间升序
pub async fn get_ending_soon(
    service: web::Data<SweepstakeService>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let list = service.ending_soon(query.limit);
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list })))
}

#[utoipa::path(
    get,
    path = "/sweepstakes/{id}",
    tag = "sweepstakes",
    params(
        ("id" = String, Path, description = "活动ID")
    ),
    responses(
        (status = 200, description = "获取活动详情成功", body = SweepstakeDetailResponse),
        (status = 404, description = "活动不存在")
    )
)]
/// 获取活动详情（含组织方、倒计时与同类推荐）
pub async fn get_sweepstake(
    service: web::Data<SweepstakeService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.detail(&path.into_inner()) {
        Ok(detail) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": detail }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/sweepstakes",
    tag = "sweepstakes",
    request_body = CreateSweepstakeRequest,
    responses(
        (status = 200, description = "提交活动成功", body = SweepstakeResponse),
        (status = 400, description = "请求参数错误")
    )
)]
/// 提交新活动:
/// 1. 校验标题/描述/链接非空、价值非负
/// 2. 仓库生成 id 与创建时间，featured 固定为 false
/// 3. 组织方从种子集合随机指派
pub async fn create_sweepstake(
    service: web::Data<SweepstakeService>,
    request: web::Json<CreateSweepstakeRequest>,
) -> Result<HttpResponse> {
    match service.create(request.into_inner()) {
        Ok(created) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": created }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/statistics",
    tag = "statistics",
    responses(
        (status = 200, description = "获取站点统计成功", body = SiteStatisticsResponse)
    )
)]
/// 获取站点统计（进行中活动数、奖品数、奖品总价值）
pub async fn get_statistics(service: web::Data<SweepstakeService>) -> Result<HttpResponse> {
    let stats = service.statistics();
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": stats })))
}

/// 路由配置
pub fn sweepstake_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sweepstakes")
            .route("", web::get().to(list_sweepstakes))
            .route("", web::post().to(create_sweepstake))
            .route("/featured", web::get().to(get_featured))
            .route("/latest", web::get().to(get_latest))
            .route("/ending-soon", web::get().to(get_ending_soon))
            .route("/{id}", web::get().to(get_sweepstake)),
    )
    .route("/statistics", web::get().to(get_statistics));
}
