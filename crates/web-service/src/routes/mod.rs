//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::admin::__path_admin_login;
use crate::routes::admin::__path_analytics;
use crate::routes::admin::__path_dashboard_stats;
use crate::routes::admin::__path_delete_internship;
use crate::routes::admin::__path_filter_internships;
use crate::routes::admin::__path_list_feedback;
use crate::routes::admin::__path_list_students;
use crate::routes::admin::__path_roll_profile;
use crate::routes::admin::__path_update_internship_status;
use crate::routes::admin::{
    admin_login, analytics, dashboard_stats, delete_internship, filter_internships, list_feedback, list_students,
    roll_profile, update_internship_status,
};
use crate::routes::feedback::__path_submit_feedback;
use crate::routes::feedback::submit_feedback;
use crate::routes::guest::__path_guest_dashboard;
use crate::routes::guest::__path_guest_login;
use crate::routes::guest::{guest_dashboard, guest_login};
use crate::routes::health::__path_health;
use crate::routes::health::health;
use crate::routes::internships::__path_list_internships;
use crate::routes::internships::__path_submit_internship;
use crate::routes::internships::{list_internships, submit_internship};
use crate::routes::organizations::__path_create_organization;
use crate::routes::organizations::__path_delete_organization;
use crate::routes::organizations::__path_list_organizations;
use crate::routes::organizations::{create_organization, delete_organization, list_organizations};
use crate::routes::students::__path_register_student;
use crate::routes::students::register_student;
use crate::AppState;
use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod admin;
pub mod feedback;
pub mod guest;
pub mod health;
pub mod internships;
pub mod organizations;
pub mod students;

/// `/api` 下的业务路由
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口，
/// 也不能把不同路径的接口放在同一个宏里。
/// 不能这样定义：
///
/// ```rust,ignore
/// routes!(get, get, post)
/// ```
///
/// 这样会导致Panic
///
/// 需要拆开定义
///
/// ```rust,ignore
/// routes!(get, post)
/// .routes!(get)
/// ```
///
fn api_routers() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register_student))
        .routes(routes!(submit_internship, list_internships))
        .routes(routes!(submit_feedback))
        .routes(routes!(list_organizations, create_organization))
        .routes(routes!(delete_organization))
        .routes(routes!(admin_login))
        .routes(routes!(filter_internships))
        .routes(routes!(analytics))
        .routes(routes!(update_internship_status))
        .routes(routes!(delete_internship))
        .routes(routes!(list_students))
        .routes(routes!(roll_profile))
        .routes(routes!(list_feedback))
        .routes(routes!(dashboard_stats))
}

/// 不带 `/api` 前缀的路由
fn root_routers() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health))
        .routes(routes!(guest_login))
        .routes(routes!(guest_dashboard))
}

/// 在文档中注册 Bearer token 鉴权方式
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
        );
    }
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        modifiers(&SecurityAddon),
        tags(
            (name = "internship-portal", description = r#"
实习管理门户后端：

- 学生提交实习申请和实习反馈
- 管理员筛选、统计实习数据
- 访客查看正在实习的学生名单
            "#)
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(root_routers())
        .nest("/api", api_routers())
        .with_state(shared_state)
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api))
}
