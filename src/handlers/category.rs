use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::SweepstakeService;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "获取类别列表成功", body = [CategoryInfo])
    )
)]
/// 获取全部奖品类别，固定顺序，与数据无关
pub async fn get_categories(service: web::Data<SweepstakeService>) -> Result<HttpResponse> {
    let categories = service.categories();
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": categories })))
}

#[utoipa::path(
    get,
    path = "/categories/{slug}",
    tag = "categories",
    params(
        ("slug" = String, Path, description = "类别 slug (如 cash, gift-cards)")
    ),
    responses(
        (status = 200, description = "获取类别页数据成功", body = CategoryPageResponse),
        (status = 404, description = "类别不存在")
    )
)]
/// 获取类别页数据，进行中与已结束分开返回
pub async fn get_category(
    service: web::Data<SweepstakeService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.category_page(&path.into_inner()) {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn category_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(get_categories))
            .route("/{slug}", web::get().to(get_category)),
    );
}
