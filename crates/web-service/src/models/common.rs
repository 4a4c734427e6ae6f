use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 封装符合json-api的单个返回对象
///
/// 具体参考：<https://jsonapi.org>
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    pub data: T,
}

/// 健康检查返回
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct HealthReply {
    #[schema(example = "ok")]
    pub status: String,
}

/// 空字符串视为未设置
///
/// 前端表单和查询参数经常把未填写的字段发送为 `""`。
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
